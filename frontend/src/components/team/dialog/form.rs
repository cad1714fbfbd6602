//! Pure state machine behind the add-employee dialog.
//!
//! Everything that decides what the dialog does lives here, free of any DOM
//! or framework type, so the transition rules can be unit tested on the
//! native target. The Yew component in the surrounding module is a thin
//! shell that forwards events into this machine and renders its state.
//!
//! The field set is fixed by the [`FIELDS`] descriptor table: rendering
//! order, sanitization policy, and the validation pass all iterate the same
//! list, so adding a field means editing that table (and the `Employee`
//! model it feeds) in one place.

use common::model::employee::Employee;
use regex::Regex;

/// Per-field policy: the field's identity plus the sanitizer applied to
/// every change before the value is stored.
pub struct FieldSpec {
    /// Field name. Doubles as the input label and the subject of the
    /// "... is required" message.
    pub name: &'static str,
    /// When set, every character that is not a decimal digit is stripped
    /// from incoming input.
    pub digits_only: bool,
}

/// Number of fields in an employee record.
pub const FIELD_COUNT: usize = 8;

/// The fixed, ordered field set of the employee record.
pub static FIELDS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec { name: "EmpId", digits_only: false },
    FieldSpec { name: "Name", digits_only: false },
    FieldSpec { name: "Grade", digits_only: false },
    FieldSpec { name: "Designation", digits_only: false },
    FieldSpec { name: "Project", digits_only: false },
    FieldSpec { name: "Skills", digits_only: false },
    FieldSpec { name: "Location", digits_only: false },
    FieldSpec { name: "ContactNo", digits_only: true },
];

fn field_index(name: &str) -> Option<usize> {
    FIELDS.iter().position(|spec| spec.name == name)
}

/// In-progress field values, parallel to [`FIELDS`].
///
/// Invariant: no stored value carries leading whitespace. `field_changed`
/// strips it on the way in, so a value made only of whitespace is stored as
/// the empty string and fails the required check like any other blank.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftRecord {
    values: [String; FIELD_COUNT],
}

impl DraftRecord {
    /// Current value of a field, or `None` for an unknown name.
    pub fn get(&self, name: &str) -> Option<&str> {
        field_index(name).map(|idx| self.values[idx].as_str())
    }

    /// Iterates `(spec, current value)` pairs in rendering order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static FieldSpec, &str)> + '_ {
        FIELDS.iter().zip(self.values.iter().map(String::as_str))
    }

    fn to_employee(&self) -> Employee {
        let [emp_id, name, grade, designation, project, skills, location, contact_no] =
            self.values.clone();
        Employee {
            emp_id,
            name,
            grade,
            designation,
            project,
            skills,
            location,
            contact_no,
        }
    }
}

/// Per-field validation messages, parallel to [`FIELDS`]. `None` means the
/// field currently has no error. Exists only while the dialog is open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    messages: [Option<String>; FIELD_COUNT],
}

impl ValidationErrors {
    /// Error message for a field, if one is set.
    pub fn get(&self, name: &str) -> Option<&str> {
        field_index(name).and_then(|idx| self.messages[idx].as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.messages.iter().all(Option::is_none)
    }
}

/// Dialog lifecycle: `Closed` until the host opens it, then an exclusively
/// owned draft plus its transient errors until cancel or a successful
/// submit. Re-entrant; reopening always starts from an empty draft.
#[derive(Clone, Debug, PartialEq)]
pub enum FormDialog {
    Closed,
    Open {
        draft: DraftRecord,
        errors: ValidationErrors,
    },
}

impl FormDialog {
    pub fn new() -> Self {
        FormDialog::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, FormDialog::Open { .. })
    }

    /// Closed -> Open edge: draft and errors start empty, nothing is
    /// validated yet.
    pub fn open(&mut self) {
        *self = FormDialog::Open {
            draft: DraftRecord::default(),
            errors: ValidationErrors::default(),
        };
    }

    /// Cancel/close: discards draft and errors without emitting anything.
    pub fn close(&mut self) {
        *self = FormDialog::Closed;
    }

    /// Sanitizes and stores one field value, then clears that field's error.
    ///
    /// Order matters: the digit filter (if any) runs first, leading
    /// whitespace is stripped second, and only then is the result stored.
    /// Other fields' errors are left alone; nothing is re-validated until
    /// submit. Unknown field names and a closed dialog are ignored.
    pub fn field_changed(&mut self, name: &str, raw: &str) {
        let FormDialog::Open { draft, errors } = self else {
            return;
        };
        let Some(idx) = field_index(name) else {
            return;
        };

        let value = if FIELDS[idx].digits_only {
            strip_non_digits(raw)
        } else {
            raw.to_string()
        };
        draft.values[idx] = value.trim_start().to_string();
        errors.messages[idx] = None;
    }

    /// Runs the whole-form validation pass and, when it passes, hands back
    /// the finished record and transitions to `Closed`.
    ///
    /// Errors are recomputed from scratch over the full field table on every
    /// attempt, so a message cleared by an edit cannot linger and a field
    /// blanked after a failed attempt is reported again. On failure the
    /// dialog stays open with the fresh error set and returns `None`.
    pub fn submit(&mut self) -> Option<Employee> {
        let record = match self {
            FormDialog::Closed => return None,
            FormDialog::Open { draft, errors } => {
                let fresh = validate(draft);
                if !fresh.is_empty() {
                    *errors = fresh;
                    return None;
                }
                draft.to_employee()
            }
        };
        *self = FormDialog::Closed;
        Some(record)
    }

    /// True while an open draft holds any input. Feeds the unsaved-changes
    /// flag published for the host page.
    pub fn has_input(&self) -> bool {
        match self {
            FormDialog::Closed => false,
            FormDialog::Open { draft, .. } => draft.values.iter().any(|v| !v.is_empty()),
        }
    }
}

/// Required check over every field. A value is missing exactly when the
/// stored string is empty; `"0"` and values with interior spaces count as
/// present, and the no-leading-whitespace invariant keeps whitespace-only
/// input from ever reaching this check as a non-empty string.
fn validate(draft: &DraftRecord) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for (idx, spec) in FIELDS.iter().enumerate() {
        if draft.values[idx].is_empty() {
            errors.messages[idx] = Some(format!("{} is required", spec.name));
        }
    }
    errors
}

fn strip_non_digits(raw: &str) -> String {
    Regex::new(r"\D").unwrap().replace_all(raw, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn open_dialog() -> FormDialog {
        let mut dialog = FormDialog::new();
        dialog.open();
        dialog
    }

    fn fill_all(dialog: &mut FormDialog) {
        dialog.field_changed("EmpId", "1042");
        dialog.field_changed("Name", "Alice");
        dialog.field_changed("Grade", "G5");
        dialog.field_changed("Designation", "Engineer");
        dialog.field_changed("Project", "Phoenix");
        dialog.field_changed("Skills", "Rust, SQL");
        dialog.field_changed("Location", "Madrid");
        dialog.field_changed("ContactNo", "600123456");
    }

    #[test]
    fn starts_closed() {
        let dialog = FormDialog::new();
        assert!(!dialog.is_open());
    }

    #[test]
    fn reopening_resets_draft_and_errors() {
        let mut dialog = open_dialog();
        dialog.field_changed("Name", "Alice");
        assert!(dialog.submit().is_none());

        dialog.close();
        dialog.open();

        let FormDialog::Open { draft, errors } = &dialog else {
            panic!("dialog should be open");
        };
        assert!(draft.entries().all(|(_, value)| value.is_empty()));
        assert!(errors.is_empty());
    }

    #[test]
    fn sanitization_is_idempotent() {
        let mut dialog = open_dialog();

        dialog.field_changed("Name", "Jo hn");
        assert_eq!(dialog_value(&dialog, "Name"), "Jo hn");

        dialog.field_changed("ContactNo", "123");
        assert_eq!(dialog_value(&dialog, "ContactNo"), "123");
    }

    #[test]
    fn contact_no_keeps_digits_only() {
        let mut dialog = open_dialog();
        dialog.field_changed("ContactNo", "a1b2-3");
        assert_eq!(dialog_value(&dialog, "ContactNo"), "123");
    }

    #[test]
    fn leading_whitespace_stripped_interior_preserved() {
        let mut dialog = open_dialog();
        dialog.field_changed("Name", "   Jo hn");
        assert_eq!(dialog_value(&dialog, "Name"), "Jo hn");
    }

    #[test]
    fn whitespace_only_input_counts_as_missing() {
        let mut dialog = open_dialog();
        fill_all(&mut dialog);
        dialog.field_changed("Grade", "   ");

        assert!(dialog.submit().is_none());
        assert_eq!(dialog_error(&dialog, "Grade"), Some("Grade is required"));
    }

    #[test]
    fn zero_counts_as_present() {
        let mut dialog = open_dialog();
        fill_all(&mut dialog);
        dialog.field_changed("Grade", "0");

        assert!(dialog.submit().is_some());
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut dialog = open_dialog();
        assert!(dialog.submit().is_none());
        assert_eq!(dialog_error(&dialog, "Name"), Some("Name is required"));

        dialog.field_changed("Name", "x");

        assert_eq!(dialog_error(&dialog, "Name"), None);
        assert_eq!(dialog_error(&dialog, "EmpId"), Some("EmpId is required"));
        assert_eq!(
            dialog_error(&dialog, "ContactNo"),
            Some("ContactNo is required")
        );
    }

    #[test]
    fn submit_with_missing_fields_reports_each_and_stays_open() {
        let mut dialog = open_dialog();
        dialog.field_changed("Name", "Alice");

        assert!(dialog.submit().is_none());
        assert!(dialog.is_open());

        for spec in FIELDS.iter().filter(|spec| spec.name != "Name") {
            assert_eq!(
                dialog_error(&dialog, spec.name),
                Some(format!("{} is required", spec.name)).as_deref()
            );
        }
        assert_eq!(dialog_error(&dialog, "Name"), None);
    }

    #[test]
    fn submit_with_complete_draft_returns_snapshot_and_closes() {
        let mut dialog = open_dialog();
        fill_all(&mut dialog);

        let record = dialog.submit().expect("complete draft should submit");
        assert_eq!(record.emp_id, "1042");
        assert_eq!(record.name, "Alice");
        assert_eq!(record.grade, "G5");
        assert_eq!(record.designation, "Engineer");
        assert_eq!(record.project, "Phoenix");
        assert_eq!(record.skills, "Rust, SQL");
        assert_eq!(record.location, "Madrid");
        assert_eq!(record.contact_no, "600123456");
        assert!(!dialog.is_open());

        dialog.open();
        let FormDialog::Open { draft, .. } = &dialog else {
            panic!("dialog should be open");
        };
        assert!(draft.entries().all(|(_, value)| value.is_empty()));
    }

    #[test]
    fn cancel_discards_partial_draft() {
        let mut dialog = open_dialog();
        dialog.field_changed("Name", "Alice");
        dialog.field_changed("Project", "Phoenix");

        dialog.close();
        assert!(!dialog.is_open());

        dialog.open();
        assert_eq!(dialog_value(&dialog, "Name"), "");
        assert_eq!(dialog_value(&dialog, "Project"), "");
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut dialog = open_dialog();
        dialog.field_changed("Salary", "50000");

        let FormDialog::Open { draft, .. } = &dialog else {
            panic!("dialog should be open");
        };
        assert!(draft.get("Salary").is_none());
        assert!(draft.entries().all(|(_, value)| value.is_empty()));
    }

    #[test]
    fn transitions_are_ignored_while_closed() {
        let mut dialog = FormDialog::new();
        dialog.field_changed("Name", "Alice");
        assert!(dialog.submit().is_none());
        assert!(!dialog.is_open());
        assert!(!dialog.has_input());
    }

    #[test]
    fn contact_no_stripped_to_empty_fails_required() {
        let mut dialog = open_dialog();
        fill_all(&mut dialog);
        dialog.field_changed("ContactNo", "abc");

        assert_eq!(dialog_value(&dialog, "ContactNo"), "");
        assert!(dialog.submit().is_none());
        assert_eq!(
            dialog_error(&dialog, "ContactNo"),
            Some("ContactNo is required")
        );
    }

    #[test]
    fn resubmit_after_corrections_succeeds() {
        let mut dialog = open_dialog();
        assert!(dialog.submit().is_none());

        fill_all(&mut dialog);
        assert!(dialog.submit().is_some());
        assert!(!dialog.is_open());
    }

    #[test]
    fn blanking_a_field_after_failed_attempt_reports_it_again() {
        let mut dialog = open_dialog();
        fill_all(&mut dialog);
        dialog.field_changed("Location", "");

        assert!(dialog.submit().is_none());
        assert_eq!(
            dialog_error(&dialog, "Location"),
            Some("Location is required")
        );

        dialog.field_changed("Location", "Madrid");
        assert!(dialog.submit().is_some());
    }

    #[test]
    fn has_input_tracks_open_draft() {
        let mut dialog = open_dialog();
        assert!(!dialog.has_input());

        dialog.field_changed("Name", "Alice");
        assert!(dialog.has_input());

        dialog.close();
        assert!(!dialog.has_input());
    }

    fn dialog_value<'a>(dialog: &'a FormDialog, name: &str) -> &'a str {
        let FormDialog::Open { draft, .. } = dialog else {
            panic!("dialog should be open");
        };
        draft.get(name).expect("known field")
    }

    fn dialog_error<'a>(dialog: &'a FormDialog, name: &str) -> Option<&'a str> {
        let FormDialog::Open { errors, .. } = dialog else {
            panic!("dialog should be open");
        };
        errors.get(name)
    }
}
