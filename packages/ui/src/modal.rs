//! Single-slot overlay.
//!
//! A page owns one [`ModalState`] and every workflow on that page shares it:
//! showing new content replaces whatever was open. The [`Modal`] component
//! only draws the overlay; what goes inside is up to the page.

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ModalState<C> {
    visible: bool,
    heading: String,
    content: Option<C>,
}

impl<C> Default for ModalState<C> {
    fn default() -> Self {
        Self {
            visible: false,
            heading: String::new(),
            content: None,
        }
    }
}

impl<C> ModalState<C> {
    /// Open with `content`, replacing anything already shown.
    pub fn show(&mut self, heading: impl Into<String>, content: C) {
        self.visible = true;
        self.heading = heading.into();
        self.content = Some(content);
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.heading.clear();
        self.content = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }
}

/// A full-screen overlay that centers its children in a card.
/// Clicking the backdrop or the close button triggers `on_close`.
#[component]
pub fn Modal(visible: bool, heading: String, on_close: EventHandler<()>, children: Element) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { "{heading}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}
