use dioxus::prelude::*;
use ui::{LogoutButton, NavLink, Navbar, RequireSession};

use crate::Route;

/// Chrome for every signed-in page.
#[component]
pub fn PortalLayout() -> Element {
    rsx! {
        RequireSession {
            login: Route::Login {},
            Navbar {
                actions: rsx! {
                    LogoutButton { redirect: Route::Login {} }
                },
                NavLink { to: Route::Home {}, label: "Home" }
                NavLink { to: Route::Mup {}, label: "MUP" }
                NavLink { to: Route::Police {}, label: "Traffic Police" }
                NavLink { to: Route::Court {}, label: "Court" }
                NavLink { to: Route::Statistics {}, label: "Statistics" }
            }
            main { class: "page", Outlet::<Route> {} }
        }
    }
}
