//! Component state for the add-employee dialog.

use yew::prelude::*;

use super::form::FormDialog;

/// Yew-side state: the pure form machine plus the DOM handle of the modal
/// surface the dialog renders into.
///
/// Fields are `pub` because they are accessed by the `update` and `view`
/// modules.
pub struct AddEmployeeDialog {
    /// Draft/error lifecycle; all transition rules live in [`super::form`].
    pub form: FormDialog,

    /// Reference to the modal surface node, used to toggle its show class.
    pub modal_ref: NodeRef,
}

impl AddEmployeeDialog {
    pub fn new() -> Self {
        Self {
            form: FormDialog::new(),
            modal_ref: NodeRef::default(),
        }
    }
}
