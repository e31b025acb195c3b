//! Court: hearings, warrants and suspensions, plus the administrators'
//! scheduling forms.

use api::models::CourtHearing;
use api::{Role, Service};
use dioxus::prelude::*;
use ui::actions::{self, PARTY_LEGAL_ENTITY, PARTY_PERSON};
use ui::components::{Button, ButtonVariant, Heading};
use ui::forms::{Form, FormField, FormValues};
use ui::views::{ActionEvent, ListAction, PingButton};
use ui::workflow::{run_mutation, ActionState, SignalHost};
use ui::{use_api, use_role_allows, use_toasts, Modal, ModalState};

use super::section::{loaded, loaded_one, ListSection};

#[component]
pub fn Court() -> Element {
    let client = use_api();
    let generation = use_signal(|| 0u64);

    let warrants = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _ = generation();
            async move { client.court().warrants().await }
        }
    });
    let suspension = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _ = generation();
            async move { client.court().suspension().await }
        }
    });

    rsx! {
        Heading { title: "Court", subtitle: "Hearings, warrants and suspensions" }
        PingButton { service: Service::Court }

        CourtPanels { generation }

        ListSection {
            title: "Warrants",
            cards: loaded(warrants.read().as_ref()),
            empty_heading: "You have no warrants",
        }
        ListSection {
            title: "Suspension",
            cards: loaded_one(suspension.read().as_ref()),
            empty_heading: "You have no suspension",
        }
    }
}

/// Hearings list, rescheduled from inside the modal by administrators.
#[component]
fn Hearings(on_done: Callback<()>, generation: Signal<u64>) -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let state = use_signal(ActionState::default);
    let can_reschedule = use_role_allows(&[Role::Admin]);

    let hearings = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _ = generation();
            async move { client.court().hearings().await }
        }
    });

    let reschedule = move |event: ActionEvent| {
        let client = client.clone();
        let hearing: Option<CourtHearing> = match &*hearings.read() {
            Some(Ok(list)) => list.iter().find(|h| h.id == event.record_id).cloned(),
            _ => None,
        };
        let (Some(hearing), Some(date_time)) = (hearing, event.date_time) else {
            return;
        };
        spawn(async move {
            let mut host = SignalHost::new(state, toasts).closing(on_done).refreshing(generation);
            run_mutation(
                &mut host,
                "Hearing rescheduled successfully",
                client.court().reschedule_hearing(&hearing, &actions::with_seconds(&date_time)),
            )
            .await;
        });
    };

    rsx! {
        ListSection {
            title: "Hearings",
            cards: loaded(hearings.read().as_ref()),
            empty_heading: "You have no hearings",
            actions: hearing_actions(can_reschedule),
            busy: state.read().is_loading(),
            on_action: reschedule,
        }
    }
}

fn hearing_actions(can_reschedule: bool) -> Vec<ListAction> {
    if can_reschedule {
        vec![ListAction::Reschedule]
    } else {
        Vec::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum CourtForm {
    Hearing,
    Warrant,
    Suspension,
}

impl CourtForm {
    const ALL: [CourtForm; 3] = [CourtForm::Hearing, CourtForm::Warrant, CourtForm::Suspension];

    fn title(self) -> &'static str {
        match self {
            CourtForm::Hearing => "Create hearing",
            CourtForm::Warrant => "Issue warrant",
            CourtForm::Suspension => "Suspend driving licence",
        }
    }

    fn fields(self) -> Vec<FormField> {
        match self {
            CourtForm::Hearing => vec![
                FormField::text("reason", "Reason"),
                FormField::datetime("dateTime", "Date and time"),
                FormField::text("court", "Court"),
                FormField::radio("partyKind", "Party", &[PARTY_PERSON, PARTY_LEGAL_ENTITY]),
                FormField::text("party", "JMBG or PIB"),
            ],
            CourtForm::Warrant => vec![
                FormField::text("trafficViolation", "Traffic violation"),
                FormField::text("issuedFor", "Issued for (JMBG)"),
            ],
            CourtForm::Suspension => vec![
                FormField::text("person", "Person JMBG"),
                FormField::date("from", "From"),
                FormField::date("to", "To"),
            ],
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            CourtForm::Hearing => "Hearing created successfully",
            CourtForm::Warrant => "Warrant issued successfully",
            CourtForm::Suspension => "Suspension created successfully",
        }
    }
}

/// What the court modal is showing.
#[derive(Clone, Copy, Debug, PartialEq)]
enum CourtPanel {
    Hearings,
    Form(CourtForm),
}

impl CourtPanel {
    fn title(self) -> &'static str {
        match self {
            CourtPanel::Hearings => "Hearings",
            CourtPanel::Form(form) => form.title(),
        }
    }
}

/// The hearings button for everyone plus the administrators' creation
/// forms, sharing one modal. A success closes it and re-fetches the page.
#[component]
fn CourtPanels(generation: Signal<u64>) -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let state = use_signal(ActionState::default);
    let mut modal = use_signal(ModalState::<CourtPanel>::default);
    let is_admin = use_role_allows(&[Role::Admin]);

    let close = use_callback(move |()| modal.write().hide());

    let submit = move |values: FormValues| {
        let client = client.clone();
        let Some(CourtPanel::Form(form)) = modal.read().content().copied() else {
            return;
        };
        spawn(async move {
            let mut host = SignalHost::new(state, toasts).closing(close).refreshing(generation);
            run_mutation(&mut host, form.success_message(), async {
                match form {
                    CourtForm::Hearing => actions::create_hearing(&client, &values).await,
                    CourtForm::Warrant => actions::create_warrant(&client, &values).await,
                    CourtForm::Suspension => actions::create_suspension(&client, &values).await,
                }
            })
            .await;
        });
    };

    let mut panels = vec![CourtPanel::Hearings];
    if is_admin {
        panels.extend(CourtForm::ALL.map(CourtPanel::Form));
    }
    let current = modal.read().content().copied();

    rsx! {
        section {
            class: "page-section",
            div {
                class: "button-row",
                for panel in panels {
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
                Some(CourtPanel::Hearings) => rsx! {
                    Hearings { on_done: close, generation }
                },
                Some(CourtPanel::Form(form)) => rsx! {
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
