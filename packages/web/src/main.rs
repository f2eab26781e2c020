// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use api::{ApiClient, ApiConfig, CandidateId};
use dioxus::prelude::*;

use ui::admin::AdminCandidatesPage;
use ui::session;
use ui::{AdminLoginPage, CandidateForm, CandidateStatusPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Register {},
        #[route("/status/:id")]
        Status { id: String },
        #[route("/admin/login")]
        AdminLogin {},

        // Routes below require an admin session
        #[layout(AdminGuard)]
            #[route("/admin")]
            Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const ADMIN_CSS: Asset = asset!("/assets/admin.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    tracing::info!("Using backend at {}", ApiConfig::from_env().base_url);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ApiClient::from_env);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ADMIN_CSS }

        Router::<Route> {}
    }
}

/// Site header shared by every page.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        header { class: "site-header",
            span { class: "site-logo", "Candidate Tracker" }
            nav { class: "site-nav",
                Link {
                    to: Route::Register {},
                    class: "nav-link",
                    active_class: "active",
                    "Apply"
                }
                Link {
                    to: Route::Admin {},
                    class: "nav-link",
                    active_class: "active",
                    "Admin"
                }
            }
        }

        main { class: "site-main",
            Outlet::<Route> {}
        }
    }
}

/// Renders admin routes only while a session is stored.
#[component]
fn AdminGuard() -> Element {
    let nav = use_navigator();
    let signed_in = session::current_session().is_some();

    use_effect(move || {
        if !signed_in {
            nav.replace(Route::AdminLogin {});
        }
    });

    if signed_in {
        rsx! { Outlet::<Route> {} }
    } else {
        rsx! {}
    }
}

/// Registration page.
#[component]
fn Register() -> Element {
    let nav = use_navigator();
    rsx! {
        div { class: "page-container page-narrow",
            CandidateForm {
                on_registered: move |id: CandidateId| {
                    nav.push(Route::Status { id: id.to_string() });
                },
            }
        }
    }
}

/// Candidate status page.
#[component]
fn Status(id: String) -> Element {
    rsx! {
        CandidateStatusPage { candidate_id: id }
    }
}

/// Admin login; visitors with a session go straight to the list.
#[component]
fn AdminLogin() -> Element {
    let nav = use_navigator();

    use_effect(move || {
        if session::current_session().is_some() {
            nav.replace(Route::Admin {});
        }
    });

    rsx! {
        AdminLoginPage {
            on_authenticated: move |_| {
                nav.replace(Route::Admin {});
            },
        }
    }
}

/// Admin candidate list.
#[component]
fn Admin() -> Element {
    let nav = use_navigator();

    match session::current_session() {
        Some(current) => rsx! {
            AdminCandidatesPage {
                token: current.token,
                on_logout: move |_| {
                    nav.replace(Route::AdminLogin {});
                },
            }
        },
        None => rsx! {},
    }
}
