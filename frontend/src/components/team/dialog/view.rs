//! View rendering for the add-employee dialog.
//!
//! Renders a centered card inside the modal surface: one required text
//! input per entry of the field table, inline error text under the
//! offending input, and Save/Cancel actions. The form's native submit is
//! suppressed so a submit never navigates the page; Escape cancels.

use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::field_grid::FieldGrid;
use crate::overlay::yw_material_modal::YwMaterialModal;

use super::form::{DraftRecord, FieldSpec, FormDialog, ValidationErrors};
use super::messages::Msg;
use super::state::AddEmployeeDialog;

/// Main view function for the dialog. While the machine is closed the modal
/// surface stays in the tree (hidden by CSS) with no form content.
pub fn view(dialog: &AddEmployeeDialog, ctx: &Context<AddEmployeeDialog>) -> Html {
    let link = ctx.link();

    html! {
        <YwMaterialModal node_ref={dialog.modal_ref.clone()}>
            {
                match &dialog.form {
                    FormDialog::Open { draft, errors } => build_form(link, draft, errors),
                    FormDialog::Closed => html! {},
                }
            }
        </YwMaterialModal>
    }
}

fn build_form(
    link: &Scope<AddEmployeeDialog>,
    draft: &DraftRecord,
    errors: &ValidationErrors,
) -> Html {
    html! {
        <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.5);z-index:9999;display:flex;align-items:center;justify-content:center;">
            <form
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    if e.key() == "Escape" { vec![Msg::Cancel] } else { vec![] }
                })}
                style="background:#fff;padding:32px;border-radius:8px;box-shadow:0 4px 24px rgba(0,0,0,0.3);width:90%;max-width:600px;max-height:90vh;overflow-y:auto;"
            >
                <h2 style="margin-top:0;">{ "Add Employee" }</h2>

                <FieldGrid columns={2}>
                    {
                        for draft
                            .entries()
                            .map(|(spec, value)| field_input(link, spec, value, errors.get(spec.name)))
                    }
                </FieldGrid>

                <div style="margin-top:24px;display:flex;justify-content:flex-end;gap:12px;">
                    <button
                        type="submit"
                        style="padding:8px 20px;background:#1976d2;color:#fff;border:none;border-radius:4px;cursor:pointer;"
                    >
                        { "Save" }
                    </button>
                    <button
                        type="button"
                        onclick={link.callback(|_| Msg::Cancel)}
                        style="padding:8px 20px;background:#fff;color:#1976d2;border:1px solid #1976d2;border-radius:4px;cursor:pointer;"
                    >
                        { "Cancel" }
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Renders one labeled input with its error line, wired back to the update
/// loop through `Msg::FieldChanged`.
fn field_input(
    link: &Scope<AddEmployeeDialog>,
    spec: &'static FieldSpec,
    value: &str,
    error: Option<&str>,
) -> Html {
    let name = spec.name;
    let oninput = link.callback(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        Msg::FieldChanged { name, value }
    });
    let border = if error.is_some() {
        "1px solid #d32f2f"
    } else {
        "1px solid #ccc"
    };

    html! {
        <label style="display:flex;flex-direction:column;gap:4px;font-size:13px;color:#444;">
            { name }
            <input
                name={name}
                value={value.to_string()}
                inputmode={if spec.digits_only { "numeric" } else { "text" }}
                {oninput}
                style={format!("padding:8px;border:{};border-radius:4px;font-size:14px;", border)}
            />
            {
                match error {
                    Some(message) => html! {
                        <span style="color:#d32f2f;font-size:12px;">{ message.to_string() }</span>
                    },
                    None => html! {},
                }
            }
        </label>
    }
}
