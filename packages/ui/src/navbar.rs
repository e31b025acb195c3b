use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBuildingColumns;
use dioxus_free_icons::Icon;

use crate::auth::use_identity;
use crate::PORTAL_CSS;

/// Top bar with the portal name, `children` as links and the signed-in user.
#[component]
pub fn Navbar(children: Element, #[props(default)] actions: Option<Element>) -> Element {
    let identity = use_identity();
    let who = {
        let identity = identity.read();
        if identity.name.is_empty() {
            identity.subject.clone()
        } else {
            identity.name.clone()
        }
    };

    rsx! {
        document::Stylesheet { href: PORTAL_CSS }
        nav {
            class: "navbar",
            span {
                class: "navbar-brand",
                Icon { width: 18, height: 18, icon: FaBuildingColumns }
                " eUprava"
            }
            div { class: "navbar-links", {children} }
            div {
                class: "navbar-user",
                if !who.is_empty() {
                    span { class: "navbar-subject", "{who}" }
                }
                {actions}
            }
        }
    }
}

/// A router link styled for the navbar.
#[component]
pub fn NavLink<R: Routable + PartialEq>(to: R, label: String) -> Element {
    rsx! {
        Link { class: "navbar-link", active_class: "active", to, "{label}" }
    }
}
