//! Add-employee dialog: root module wiring the Yew `Component`
//! implementation with submodules for the pure form machine, state,
//! update logic, and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `DialogProps`, `AddEmployeeDialog`,
//!   the field table).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Bind the form machine's Closed/Open transitions to the `open` prop
//!   edge, so a reopened dialog always starts from an empty draft.

use yew::prelude::*;

mod form;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use form::{FieldSpec, FIELDS};
pub use messages::Msg;
pub use props::DialogProps;
pub use state::AddEmployeeDialog;

use crate::overlay::yw_material_modal::{close_modal, open_modal};

impl Component for AddEmployeeDialog {
    type Message = Msg;
    type Properties = DialogProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut dialog = AddEmployeeDialog::new();
        if ctx.props().open {
            dialog.form.open();
        }
        dialog
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let open = ctx.props().open;
        if open == old_props.open {
            return true;
        }

        if open {
            self.form.open();
            open_modal(self.modal_ref.clone());
        } else {
            // Idempotent when a successful submit already closed the machine.
            self.form.close();
            close_modal(self.modal_ref.clone());
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render && self.form.is_open() {
            open_modal(self.modal_ref.clone());
        }
    }
}
