//! MUP: the citizen's vehicles and permits, and the administrators' queue
//! of pending requests.

use api::models::{DrivingPermit, Registration};
use api::Service;
use dioxus::prelude::*;
use ui::actions;
use ui::components::{Button, ButtonVariant, Heading};
use ui::forms::{Form, FormField, FormValues};
use ui::views::{ActionEvent, ListAction, PingButton};
use ui::workflow::{run_mutation, ActionState, SignalHost, WorkflowHost};
use ui::{push_error, use_api, use_toasts, AdminOnly, CitizenOnly, Modal, ModalState};

use super::section::{loaded, loaded_one, ListSection};

/// Shown when an approved request vanished from the list before the click.
const REQUEST_GONE: &str = "Request no longer available";

/// What a button press on a pending request turns into.
#[derive(Debug, PartialEq)]
enum PendingStep<R> {
    Approve(R),
    Decline,
    /// Approve pressed for a request the list no longer holds.
    Gone,
    Ignore,
}

fn pending_step<R>(action: ListAction, request: Option<R>) -> PendingStep<R> {
    match (action, request) {
        (ListAction::Approve, Some(request)) => PendingStep::Approve(request),
        (ListAction::Approve, None) => PendingStep::Gone,
        (ListAction::Decline, _) => PendingStep::Decline,
        _ => PendingStep::Ignore,
    }
}

#[component]
pub fn Mup() -> Element {
    rsx! {
        Heading { title: "MUP", subtitle: "Ministry of Internal Affairs" }
        PingButton { service: Service::Mup }
        CitizenOnly { CitizenRecords {} }
        AdminOnly { MupAdministration {} }
    }
}

#[component]
fn CitizenRecords() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let state = use_signal(ActionState::default);
    let generation = use_signal(|| 0u64);

    let vehicles = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _ = generation();
            async move { client.mup().vehicles().await }
        }
    });
    let permit = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _ = generation();
            async move { client.mup().driving_permit().await }
        }
    });
    let bans = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.mup().driving_bans().await }
        }
    });
    let registrations = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _ = generation();
            async move { client.mup().registrations().await }
        }
    });

    let request_registration = {
        let client = client.clone();
        move |event: ActionEvent| {
            let client = client.clone();
            spawn(async move {
                let mut host = SignalHost::new(state, toasts).refreshing(generation);
                run_mutation(
                    &mut host,
                    "Registration request sent successfully",
                    client.mup().request_registration(&event.record_id),
                )
                .await;
            });
        }
    };

    let request_permit = move |_| {
        let client = client.clone();
        async move {
            let mut host = SignalHost::new(state, toasts).refreshing(generation);
            run_mutation(
                &mut host,
                "Driving permit requested successfully",
                client.mup().request_driving_permit(),
            )
            .await;
        }
    };

    let busy = state.read().is_loading();
    let has_permit = matches!(&*permit.read(), Some(Ok(Some(_))));

    rsx! {
        ListSection {
            title: "Vehicles",
            cards: loaded(vehicles.read().as_ref()),
            empty_heading: "You have no vehicles",
            actions: vec![ListAction::RequestRegistration],
            busy,
            on_action: request_registration,
        }
        ListSection {
            title: "Driving permit",
            cards: loaded_one(permit.read().as_ref()),
            empty_heading: "You have no driving permit",
        }
        if !has_permit {
            Button {
                variant: ButtonVariant::Primary,
                disabled: busy,
                onclick: request_permit,
                "Request driving permit"
            }
        }
        ListSection {
            title: "Driving bans",
            cards: loaded(bans.read().as_ref()),
            empty_heading: "You have no driving bans",
        }
        ListSection {
            title: "Registrations",
            cards: loaded(registrations.read().as_ref()),
            empty_heading: "You have no registrations",
        }
    }
}

#[component]
fn PendingRegistrations(on_done: Callback<()>, generation: Signal<u64>) -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let state = use_signal(ActionState::default);

    let requests = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _ = generation();
            async move { client.mup().pending_registration_requests().await }
        }
    });

    let on_action = move |event: ActionEvent| {
        let client = client.clone();
        let request: Option<Registration> = match &*requests.read() {
            Some(Ok(list)) => list.iter().find(|r| r.registration_number == event.record_id).cloned(),
            _ => None,
        };
        spawn(async move {
            let mut host = SignalHost::new(state, toasts).closing(on_done).refreshing(generation);
            match pending_step(event.action, request) {
                PendingStep::Approve(request) => {
                    run_mutation(
                        &mut host,
                        "Successfully approved registration request",
                        client.mup().approve_registration_request(&request),
                    )
                    .await;
                }
                PendingStep::Gone => {
                    push_error(&mut toasts, REQUEST_GONE);
                    host.refresh();
                }
                PendingStep::Decline => {
                    run_mutation(
                        &mut host,
                        "Successfully declined registration request",
                        client.mup().decline_registration_request(&event.record_id),
                    )
                    .await;
                }
                PendingStep::Ignore => {
                    tracing::warn!(action = ?event.action, record = %event.record_id, "Unhandled registration action")
                }
            }
        });
    };

    rsx! {
        ListSection {
            title: "Pending registration requests",
            cards: loaded(requests.read().as_ref()),
            empty_heading: "There are no pending registration requests",
            actions: vec![ListAction::Approve, ListAction::Decline],
            busy: state.read().is_loading(),
            on_action,
        }
    }
}

#[component]
fn PendingPermits(on_done: Callback<()>, generation: Signal<u64>) -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let state = use_signal(ActionState::default);

    let requests = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _ = generation();
            async move { client.mup().pending_permit_requests().await }
        }
    });

    let on_action = move |event: ActionEvent| {
        let client = client.clone();
        let request: Option<DrivingPermit> = match &*requests.read() {
            Some(Ok(list)) => list.iter().find(|p| p.id == event.record_id).cloned(),
            _ => None,
        };
        spawn(async move {
            let mut host = SignalHost::new(state, toasts).closing(on_done).refreshing(generation);
            match pending_step(event.action, request) {
                PendingStep::Approve(request) => {
                    run_mutation(
                        &mut host,
                        "Successfully approved driving permit request",
                        client.mup().approve_permit_request(&request),
                    )
                    .await;
                }
                PendingStep::Gone => {
                    push_error(&mut toasts, REQUEST_GONE);
                    host.refresh();
                }
                PendingStep::Decline => {
                    run_mutation(
                        &mut host,
                        "Successfully declined driving permit request",
                        client.mup().decline_permit_request(&event.record_id),
                    )
                    .await;
                }
                PendingStep::Ignore => {
                    tracing::warn!(action = ?event.action, record = %event.record_id, "Unhandled permit action")
                }
            }
        });
    };

    rsx! {
        ListSection {
            title: "Pending driving permit requests",
            cards: loaded(requests.read().as_ref()),
            empty_heading: "There are no pending driving permit requests",
            actions: vec![ListAction::Approve, ListAction::Decline],
            busy: state.read().is_loading(),
            on_action,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum MupForm {
    Vehicle,
    DrivingBan,
}

impl MupForm {
    fn title(self) -> &'static str {
        match self {
            MupForm::Vehicle => "Add vehicle",
            MupForm::DrivingBan => "Issue driving ban",
        }
    }

    fn fields(self) -> Vec<FormField> {
        match self {
            MupForm::Vehicle => vec![
                FormField::text("brand", "Brand"),
                FormField::text("model", "Model"),
                FormField::number("year", "Year").with_range(1900, 2100),
                FormField::text("owner", "Owner JMBG"),
            ],
            MupForm::DrivingBan => vec![
                FormField::text("reason", "Reason"),
                FormField::text("duration", "Duration"),
                FormField::text("person", "Person JMBG"),
            ],
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            MupForm::Vehicle => "Vehicle saved successfully",
            MupForm::DrivingBan => "Driving ban issued successfully",
        }
    }
}

/// What the administrators' modal is showing.
#[derive(Clone, Copy, Debug, PartialEq)]
enum MupPanel {
    PendingRegistrations,
    PendingPermits,
    Form(MupForm),
}

impl MupPanel {
    const ALL: [MupPanel; 4] = [
        MupPanel::PendingRegistrations,
        MupPanel::PendingPermits,
        MupPanel::Form(MupForm::Vehicle),
        MupPanel::Form(MupForm::DrivingBan),
    ];

    fn title(self) -> &'static str {
        match self {
            MupPanel::PendingRegistrations => "Pending registration requests",
            MupPanel::PendingPermits => "Pending driving permit requests",
            MupPanel::Form(form) => form.title(),
        }
    }
}

/// Administrator queues and record forms, one modal at a time.
#[component]
fn MupAdministration() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let state = use_signal(ActionState::default);
    let generation = use_signal(|| 0u64);
    let mut modal = use_signal(ModalState::<MupPanel>::default);

    let close = use_callback(move |()| modal.write().hide());

    let submit = move |values: FormValues| {
        let client = client.clone();
        let Some(MupPanel::Form(form)) = modal.read().content().copied() else {
            return;
        };
        spawn(async move {
            let mut host = SignalHost::new(state, toasts).closing(close).refreshing(generation);
            run_mutation(&mut host, form.success_message(), async {
                match form {
                    MupForm::Vehicle => actions::save_vehicle(&client, &values).await,
                    MupForm::DrivingBan => actions::issue_driving_ban(&client, &values).await,
                }
            })
            .await;
        });
    };

    let current = modal.read().content().copied();

    rsx! {
        section {
            class: "page-section",
            h2 { "Administration" }
            div {
                class: "button-row",
                for panel in MupPanel::ALL {
                    Button {
                        key: "{panel.title()}",
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| modal.write().show(panel.title(), panel),
                        "{panel.title()}"
                    }
                }
            }
        }
        Modal {
            visible: modal.read().is_visible(),
            heading: modal.read().heading().to_string(),
            on_close: move |_| close.call(()),
            {match current {
                Some(MupPanel::PendingRegistrations) => rsx! {
                    PendingRegistrations { on_done: close, generation }
                },
                Some(MupPanel::PendingPermits) => rsx! {
                    PendingPermits { on_done: close, generation }
                },
                Some(MupPanel::Form(form)) => rsx! {
                    Form {
                        key: "{form.title()}",
                        fields: form.fields(),
                        submit_label: form.title(),
                        busy: state.read().is_loading(),
                        on_submit: submit,
                    }
                },
                None => rsx! {},
            }}
        }
    }
}
