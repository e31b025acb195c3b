use dioxus::prelude::*;
use ui::components::Heading;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{}", path);

    rsx! {
        div {
            class: "auth-page",
            Heading { title: "404", subtitle: "Page /{path} does not exist" }
            Link { to: Route::Login {}, "Back to the portal" }
        }
    }
}
