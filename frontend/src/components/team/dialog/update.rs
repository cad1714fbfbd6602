//! Update function for the add-employee dialog.
//!
//! Follows the Elm-style split: receives the component state, the
//! `Context`, and a `Msg`, forwards the event into the pure form machine,
//! and performs the side effects the machine itself must not know about
//! (callbacks to the host, console logging, the window dirty flag).

use gloo_console::debug;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use super::messages::Msg;
use super::state::AddEmployeeDialog;

/// Central update function for the dialog.
///
/// On a successful submit the save callback fires exactly once with the
/// finished record, synchronously, before the close request.
pub fn update(
    dialog: &mut AddEmployeeDialog,
    ctx: &Context<AddEmployeeDialog>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FieldChanged { name, value } => {
            dialog.form.field_changed(name, &value);
            set_window_dirty_flag(dialog);
            true
        }
        Msg::Submit => match dialog.form.submit() {
            Some(record) => {
                match serde_json::to_string(&record) {
                    Ok(json) => debug!("employee record saved", json),
                    Err(_) => debug!("employee record saved"),
                }
                set_window_dirty_flag(dialog);
                ctx.props().on_save.emit(record);
                ctx.props().on_request_close.emit(());
                true
            }
            None => {
                debug!("employee record rejected by validation");
                true
            }
        },
        Msg::Cancel => {
            dialog.form.close();
            set_window_dirty_flag(dialog);
            ctx.props().on_request_close.emit(());
            true
        }
    }
}

/// Publishes whether the open draft holds unsaved input as `form_dirty` on
/// `window`, for a host `beforeunload` handler to consult.
fn set_window_dirty_flag(dialog: &AddEmployeeDialog) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("form_dirty"),
            &JsValue::from_bool(dialog.form.has_input()),
        );
    }
}
