use crate::app::App;

mod app;
mod components;
mod field_grid;
mod overlay;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
