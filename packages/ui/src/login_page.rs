//! Admin login page.

use api::{AdminToken, ApiClient};
use dioxus::prelude::*;

use crate::session;

const INVALID_TOKEN: &str = "Invalid admin token.";
const UNREACHABLE: &str = "Could not reach the server.";

/// Props for AdminLoginPage component.
#[derive(Props, Clone, PartialEq)]
pub struct AdminLoginPageProps {
    /// Called once the credential is verified and stored.
    pub on_authenticated: EventHandler<()>,
}

/// Collects the admin credential and verifies it against the backend.
#[component]
pub fn AdminLoginPage(props: AdminLoginPageProps) -> Element {
    let client = use_context::<ApiClient>();
    let mut token_input = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);
    let mut checking = use_signal(|| false);

    let on_authenticated = props.on_authenticated;
    let login = move |_| {
        let Some(token) = AdminToken::new(token_input()) else {
            error.set(Some(INVALID_TOKEN));
            return;
        };
        let client = client.clone();

        spawn(async move {
            checking.set(true);
            error.set(None);

            let verified = client.verify_admin_token(&token).await;
            checking.set(false);

            match verified {
                Ok(()) => match session::start_session(token) {
                    Ok(_) => on_authenticated.call(()),
                    Err(err) => {
                        tracing::warn!("Failed to store admin session: {}", err);
                        error.set(Some(UNREACHABLE));
                    }
                },
                Err(err) if err.is_unauthorized() => {
                    tracing::info!("Admin login rejected");
                    error.set(Some(INVALID_TOKEN));
                }
                Err(err) => {
                    tracing::warn!("Admin login failed: {}", err);
                    error.set(Some(UNREACHABLE));
                }
            }
        });
    };

    rsx! {
        div { class: "page-container page-narrow",
            div { class: "card login-card",
                div { class: "card-header",
                    h1 { class: "card-title", "Admin Login" }
                }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                div { class: "form-group",
                    label { r#for: "admin-token", "Admin token" }
                    input {
                        id: "admin-token",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{token_input}",
                        oninput: move |e| token_input.set(e.value()),
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: checking(),
                        onclick: login,
                        if checking() { "Checking..." } else { "Log in" }
                    }
                }
            }
        }
    }
}
