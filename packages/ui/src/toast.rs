//! Transient notifications.
//!
//! Every workflow reports its outcome here: a green toast on success, a red
//! one carrying the service's message on failure. Entries live in a context
//! signal provided by [`ToastHost`], which renders the stack and drops each
//! entry after [`TOAST_TTL`].

use std::time::Duration;

use dioxus::prelude::*;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Queue a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.entries.last()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    match level {
        ToastLevel::Error => tracing::warn!("{}", message),
        _ => tracing::info!("{}", message),
    }
    toasts.write().push(level, message);
}

pub fn push_success(toasts: &mut Signal<Toasts>, message: &str) {
    push_toast(toasts, ToastLevel::Success, message);
}

pub fn push_error(toasts: &mut Signal<Toasts>, message: &str) {
    push_toast(toasts, ToastLevel::Error, message);
}

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Provides the [`Toasts`] context to `children` and renders the stack above them.
#[component]
pub fn ToastHost(children: Element) -> Element {
    let toasts = use_context_provider(|| Signal::new(Toasts::default()));
    let entries = toasts().entries().to_vec();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        {children}
        div {
            class: "toast-stack",
            role: "status",
            for toast in entries {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    // Scoped to this item: dismissing early drops the timer with it.
    use_future(move || async move {
        sleep(TOAST_TTL).await;
        toasts.write().dismiss(id);
    });

    rsx! {
        div {
            class: match toast.level {
                ToastLevel::Success => "toast success",
                ToastLevel::Error => "toast error",
                ToastLevel::Info => "toast info",
            },
            onclick: move |_| toasts.write().dismiss(id),
            for line in toast.message.lines() {
                p { "{line}" }
            }
        }
    }
}
