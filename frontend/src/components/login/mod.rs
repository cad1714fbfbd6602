//! Login page: collects credentials and hands the email to the host once
//! both fields are present. What a session means (roles, identity) is the
//! host's business; this component only gates on non-blank input.

use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::prelude::*;

pub enum Msg {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
}

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    /// Invoked with the entered email once both fields pass the check.
    pub on_login: Callback<String>,
}

pub struct LoginComponent {
    email: String,
    password: String,
    error: Option<&'static str>,
}

fn missing_credentials(email: &str, password: &str) -> bool {
    email.trim().is_empty() || password.trim().is_empty()
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::EmailChanged(value) => {
                self.email = value;
                true
            }
            Msg::PasswordChanged(value) => {
                self.password = value;
                true
            }
            Msg::Submit => {
                if missing_credentials(&self.email, &self.password) {
                    self.error = Some("Email and password are required.");
                } else {
                    self.error = None;
                    ctx.props().on_login.emit(self.email.clone());
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div style="display:flex;align-items:center;justify-content:center;min-height:100vh;background:#f3f4f6;">
                <div style="background:#fff;padding:32px;border-radius:8px;box-shadow:0 2px 8px rgba(0,0,0,0.15);width:360px;">
                    <h2 style="text-align:center;margin-top:0;">{ "Login" }</h2>
                    {
                        match self.error {
                            Some(message) => html! {
                                <p style="color:#d32f2f;font-size:13px;text-align:center;">{ message }</p>
                            },
                            None => html! {},
                        }
                    }
                    <form onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}>
                        <label style="display:block;font-size:13px;color:#444;margin-bottom:12px;">
                            { "Email:" }
                            <input
                                value={self.email.clone()}
                                placeholder="e.g. admin@example.com"
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::EmailChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                                style="display:block;width:100%;box-sizing:border-box;padding:8px;margin-top:4px;border:1px solid #ccc;border-radius:4px;"
                            />
                        </label>
                        <label style="display:block;font-size:13px;color:#444;margin-bottom:16px;">
                            { "Password:" }
                            <input
                                type="password"
                                value={self.password.clone()}
                                placeholder="Enter any password"
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::PasswordChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                                style="display:block;width:100%;box-sizing:border-box;padding:8px;margin-top:4px;border:1px solid #ccc;border-radius:4px;"
                            />
                        </label>
                        <button
                            type="submit"
                            style="width:100%;padding:10px;background:#1976d2;color:#fff;border:none;border-radius:4px;font-weight:bold;cursor:pointer;"
                        >
                            { "Login" }
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::missing_credentials;

    #[test]
    fn blank_or_whitespace_credentials_are_missing() {
        assert!(missing_credentials("", ""));
        assert!(missing_credentials("   ", "secret"));
        assert!(missing_credentials("admin@example.com", "  "));
    }

    #[test]
    fn filled_credentials_pass() {
        assert!(!missing_credentials("admin@example.com", "secret"));
    }
}
