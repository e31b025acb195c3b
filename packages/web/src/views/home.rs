use dioxus::prelude::*;
use ui::components::Heading;
use ui::{use_identity, AdminOnly};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let identity = use_identity();
    let greeting = {
        let identity = identity.read();
        if identity.name.is_empty() {
            "Welcome to eUprava".to_string()
        } else {
            format!("Welcome to eUprava, {}", identity.name)
        }
    };

    rsx! {
        Heading { title: greeting, subtitle: "Select the service you want to access" }

        div {
            class: "agency-grid",
            Link { class: "agency-tile", to: Route::Mup {}, "MUP" }
            Link { class: "agency-tile", to: Route::Police {}, "Traffic Police" }
            Link { class: "agency-tile", to: Route::Court {}, "Court" }
            Link { class: "agency-tile", to: Route::Statistics {}, "Institute for Statistics" }
        }

        AdminOnly {
            section {
                class: "page-section",
                h2 { "Administration" }
                div {
                    class: "auth-links",
                    Link { to: Route::Mup {}, "Review pending registration and driving permit requests" }
                    Link { to: Route::Court {}, "Schedule hearings, warrants and suspensions" }
                }
            }
        }
    }
}
