use api::Service;
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{Button, ButtonVariant};
use crate::toast::{push_error, push_success, use_toasts};

pub(crate) fn ping_success(service: Service) -> String {
    format!("Good connection with {} service", service.display_name())
}

pub(crate) fn ping_failure(service: Service) -> String {
    format!("No connection to {} service", service.display_name())
}

/// Checks that `service` answers and reports the result as a toast.
#[component]
pub fn PingButton(service: Service) -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let mut pending = use_signal(|| false);

    let onclick = move |_| {
        let client = client.clone();
        async move {
            if pending() {
                return;
            }
            pending.set(true);
            match client.ping(service).await {
                Ok(reply) => {
                    tracing::debug!(service = service.display_name(), %reply, "Ping answered");
                    push_success(&mut toasts, &ping_success(service));
                }
                Err(e) => {
                    tracing::warn!("Ping failed: {}", e);
                    push_error(&mut toasts, &ping_failure(service));
                }
            }
            pending.set(false);
        }
    };

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            disabled: pending(),
            onclick,
            if pending() { "Pinging..." } else { "Ping service" }
        }
    }
}
