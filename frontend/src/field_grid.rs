use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct FieldGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Lays form fields out in a fixed-column CSS grid.
pub struct FieldGrid;

impl Component for FieldGrid {
    type Message = ();
    type Properties = FieldGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FieldGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, 1fr);
             gap: 12px 16px;",
            props.columns
        );

        html! {
            <div style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
