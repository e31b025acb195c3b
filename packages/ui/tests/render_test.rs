//! Server-side renders of the shared components: modal workflows, role gates
//! and prefilled forms as the user would see them.

mod common;

use std::sync::Arc;

use api::{ApiClient, Identity, Role};
use common::*;
use dioxus::prelude::*;
use store::{MemoryStore, PortalConfig};
use ui::auth::SessionContext;
use ui::forms::{Form, FormField};
use ui::toast::Toasts;
use ui::workflow::{run_mutation, ActionState, SignalHost};
use ui::{use_role_allows, Modal, ModalState};

fn render(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus::ssr::render(&dom)
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Outcome {
    Approved,
    Refused,
}

/// A modal-hosted list whose approve action runs once while the page mounts.
#[component]
fn PendingInModal(outcome: Outcome) -> Element {
    let state = use_signal(ActionState::default);
    let toasts = use_signal(Toasts::default);
    let generation = use_signal(|| 0u64);
    let mut modal = use_signal(|| {
        let mut modal = ModalState::default();
        modal.show("Pending registration requests", ());
        modal
    });
    let close = use_callback(move |()| modal.write().hide());

    use_hook(move || {
        let mut host = SignalHost::new(state, toasts).closing(close).refreshing(generation);
        let approve = async move {
            match outcome {
                Outcome::Approved => Ok(()),
                Outcome::Refused => Err("Failed to approve registration request"),
            }
        };
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(run_mutation(&mut host, "Successfully approved registration request", approve));
    });

    let latest = toasts.read().latest().map(|t| t.message.clone()).unwrap_or_default();

    rsx! {
        Modal {
            visible: modal.read().is_visible(),
            heading: modal.read().heading().to_string(),
            on_close: move |_| close.call(()),
            p { "NS-123" }
        }
        p { class: "generation", "generation {generation}" }
        p { class: "toast", "{latest}" }
    }
}

#[test]
fn approved_request_closes_modal_and_refreshes() {
    let html = render(VirtualDom::new_with_props(
        PendingInModal,
        PendingInModalProps { outcome: Outcome::Approved },
    ));

    assert!(!html.contains("Pending registration requests"));
    assert!(!html.contains("NS-123"));
    assert!(html.contains("generation 1"));
    assert!(html.contains("Successfully approved registration request"));
}

#[test]
fn refused_request_keeps_modal_open() {
    let html = render(VirtualDom::new_with_props(
        PendingInModal,
        PendingInModalProps { outcome: Outcome::Refused },
    ));

    assert!(html.contains("Pending registration requests"));
    assert!(html.contains("NS-123"));
    assert!(html.contains("generation 0"));
    assert!(html.contains("Failed to approve registration request"));
}

#[component]
fn HearingActions() -> Element {
    if use_role_allows(&[Role::Admin]) {
        rsx! { "Reschedule" }
    } else {
        rsx! { "Read only" }
    }
}

/// Session whose identity signal disagrees with the stored token.
#[component]
fn StaleSession(client: ApiClient, cached: Identity) -> Element {
    use_context_provider(move || SessionContext {
        client,
        identity: Signal::new(cached),
    });

    rsx! {
        HearingActions {}
    }
}

fn client_with(token: String) -> ApiClient {
    ApiClient::new(PortalConfig::default(), Arc::new(MemoryStore::with_token(token))).unwrap()
}

#[test]
fn role_checks_read_the_stored_token() {
    let html = render(VirtualDom::new_with_props(
        StaleSession,
        StaleSessionProps {
            client: client_with(admin_token()),
            cached: Identity::default(),
        },
    ));
    assert!(html.contains("Reschedule"));

    let html = render(VirtualDom::new_with_props(
        StaleSession,
        StaleSessionProps {
            client: client_with(citizen_token()),
            cached: Identity {
                subject: ADMIN_EMAIL.to_string(),
                role: Some(Role::Admin),
                ..Identity::default()
            },
        },
    ));
    assert!(html.contains("Read only"));
}

#[component]
fn PrefilledForm() -> Element {
    rsx! {
        Form {
            fields: vec![
                FormField::text("name", "Name").with_value("Ana"),
                FormField::datetime("dateTime", "When").with_value("2024-06-07T10:30"),
                FormField::radio("tireType", "Tires", &["SUMMER", "WINTER"]).with_value("WINTER"),
            ],
            busy: true,
            on_submit: move |_| {},
        }
    }
}

#[test]
fn prefilled_form_shows_initial_values_and_locks_while_busy() {
    let html = render(VirtualDom::new(PrefilledForm));

    assert!(html.contains(r#"value="Ana""#));
    assert!(html.contains(r#"value="2024-06-07T10:30""#));
    assert!(html.contains("WINTER"));
    assert!(html.contains("Please wait..."));
}
