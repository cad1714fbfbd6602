use yew::{html, Component, Context, Html};

use crate::components::login::LoginComponent;
use crate::components::team::TeamMembersComponent;

pub enum Msg {
    LoggedIn(String),
}

/// Application root: shows the login page until a session email exists,
/// then the team members page.
pub struct App {
    session_email: Option<String>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session_email: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoggedIn(email) => {
                self.session_email = Some(email);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.session_email {
            Some(email) => html! { <TeamMembersComponent user_email={email.clone()} /> },
            None => html! { <LoginComponent on_login={ctx.link().callback(Msg::LoggedIn)} /> },
        }
    }
}
