use serde::{Deserialize, Serialize};

/// A single team member record, produced by the add-employee dialog once
/// every field passed the required check.
///
/// The dialog guarantees that all fields are non-empty and carry no leading
/// whitespace, and that `contact_no` contains decimal digits only. The struct
/// serializes with the record's PascalCase keys (`EmpId`, `ContactNo`, ...)
/// so a host can persist or transmit it without reshaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    pub emp_id: String,
    pub name: String,
    pub grade: String,
    pub designation: String,
    pub project: String,
    pub skills: String,
    pub location: String,
    pub contact_no: String,
}
