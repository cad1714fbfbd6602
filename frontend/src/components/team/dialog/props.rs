//! Properties of the add-employee dialog.
//!
//! The host page owns the `open` flag; the dialog only asks for a close via
//! `on_request_close` and reports a finished record via `on_save`.

use common::model::employee::Employee;
use yew::prelude::*;

/// Contract between the dialog and its host page.
#[derive(Properties, PartialEq, Clone)]
pub struct DialogProps {
    /// Whether the dialog is shown. Flipping this to `true` resets the
    /// draft; the dialog never changes the flag itself.
    pub open: bool,

    /// Invoked on cancel and after a successful save. The host is expected
    /// to flip `open` back to `false` in response.
    pub on_request_close: Callback<()>,

    /// Invoked exactly once per successful submit, synchronously and before
    /// the close request, with the finished record. Every field of the
    /// record is non-empty.
    pub on_save: Callback<Employee>,
}
