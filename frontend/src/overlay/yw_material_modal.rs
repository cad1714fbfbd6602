use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Modal surface container. Visibility is driven by a `show` class on the
/// container element so CSS owns the open/close transition; callers toggle
/// it through [`open_modal`] and [`close_modal`] with the `node_ref` they
/// passed in.
pub struct YwMaterialModal {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialModal {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="modal-surface" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_modal(modal_ref: NodeRef) {
    toggle_show_class(modal_ref, "add");
}

pub fn close_modal(modal_ref: NodeRef) {
    toggle_show_class(modal_ref, "remove");
}

// The class flips through a timed callback so the CSS transition still fires
// when the element was attached in the same tick.
fn toggle_show_class(modal_ref: NodeRef, op: &str) {
    if let Some(modal) = modal_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            modal.id(),
            op
        ));
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50);
        }
    }
}
