use std::sync::Arc;

use api::ApiClient;
use dioxus::prelude::*;
use store::{PortalConfig, SharedSession};
use ui::{SessionProvider, ToastHost};
use views::{Court, Home, Login, Mup, NotFound, PasswordRecovery, PasswordReset, Police, PortalLayout, Register, Statistics};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub(crate) enum Route {
    #[route("/")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/password-recovery")]
    PasswordRecovery {},
    #[route("/password-reset")]
    PasswordReset {},
    #[layout(PortalLayout)]
        #[route("/home")]
        Home {},
        #[route("/home/mup")]
        Mup {},
        #[route("/home/police")]
        Police {},
        #[route("/home/court")]
        Court {},
        #[route("/home/statistics")]
        Statistics {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(dioxus::logger::tracing::Level::INFO) {
        eprintln!("Logging disabled: {e}");
    }
    dioxus::launch(App);
}

fn make_session() -> SharedSession {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(store::LocalStorageStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(store::MemoryStore::new())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> PortalConfig {
    PortalConfig::load_or_build_env(std::path::Path::new("."))
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> PortalConfig {
    PortalConfig::from_build_env()
}

fn make_client() -> Result<ApiClient, String> {
    let config = load_config();
    tracing::info!(sso = config.base_url(store::Service::Sso), "Starting eUprava portal");
    ApiClient::new(config, make_session()).map_err(|e| e.to_string())
}

#[component]
fn App() -> Element {
    let client = use_hook(make_client);

    rsx! {
        document::Stylesheet { href: ui::PORTAL_CSS }
        document::Stylesheet { href: MAIN_CSS }

        ToastHost {
            {match client {
                Ok(client) => rsx! {
                    SessionProvider { client, Router::<Route> {} }
                },
                Err(error) => rsx! {
                    div { class: "fatal", "{error}" }
                },
            }}
        }
    }
}
