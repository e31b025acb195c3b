//! Traffic police: roadside checks and the violations on record.

use api::models::{CheckOutcome, TireType};
use api::Service;
use dioxus::prelude::*;
use ui::actions::{self, PoliceCheck};
use ui::components::{Button, ButtonVariant, Heading};
use ui::forms::{Form, FormField, FormValues};
use ui::views::PingButton;
use ui::workflow::{run_mutation_reporting, ActionState, SignalHost};
use ui::{use_api, use_toasts, Modal, ModalState};

use super::section::{loaded, ListSection};

/// Fields for `check`, in the order the officer fills them in.
fn check_fields(check: PoliceCheck) -> Vec<FormField> {
    let mut fields = vec![
        FormField::text("jmbg", "Driver JMBG"),
        FormField::text("location", "Location"),
    ];
    if matches!(check, PoliceCheck::AlcoholLevel | PoliceCheck::All) {
        fields.push(FormField::text("alcoholLevel", "Alcohol level"));
    }
    if matches!(check, PoliceCheck::VehicleTire | PoliceCheck::All) {
        fields.push(FormField::radio("tireType", "Tire type", &TireType::OPTIONS));
    }
    if matches!(check, PoliceCheck::VehicleRegistration | PoliceCheck::All) {
        fields.push(FormField::text("platesNumber", "Plates number"));
    }
    fields
}

#[component]
pub fn Police() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let mut state = use_signal(ActionState::default);
    let generation = use_signal(|| 0u64);
    let mut modal = use_signal(ModalState::<PoliceCheck>::default);

    let violations = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _ = generation();
            async move { client.police().traffic_violations().await }
        }
    });

    let close = use_callback(move |()| modal.write().hide());

    // The verdict arrives as the success toast; a check may have recorded a
    // violation, so the list is fetched again.
    let submit = move |values: FormValues| {
        let client = client.clone();
        let Some(check) = modal.read().content().copied() else {
            return;
        };
        spawn(async move {
            let mut host = SignalHost::new(state, toasts).closing(close).refreshing(generation);
            run_mutation_reporting(
                &mut host,
                |outcome: &CheckOutcome| outcome.message_or(check.success_message()),
                actions::check_driver(&client, check, &values),
            )
            .await;
        });
    };

    let current = modal.read().content().copied();

    rsx! {
        Heading { title: "Traffic Police", subtitle: "Roadside checks and traffic violations" }
        PingButton { service: Service::Police }

        section {
            class: "page-section",
            h2 { "Checks" }
            div {
                class: "button-row",
                for check in PoliceCheck::ALL {
                    Button {
                        key: "{check.title()}",
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            state.set(ActionState::Idle);
                            modal.write().show(check.title(), check);
                        },
                        "{check.title()}"
                    }
                }
            }
        }

        ListSection {
            title: "Traffic violations",
            cards: loaded(violations.read().as_ref()),
            empty_heading: "There are no traffic violations",
        }

        Modal {
            visible: modal.read().is_visible(),
            heading: modal.read().heading().to_string(),
            on_close: move |_| close.call(()),
            if let Some(check) = current {
                Form {
                    key: "{check.title()}",
                    fields: check_fields(check),
                    submit_label: "Check",
                    busy: state.read().is_loading(),
                    on_submit: submit,
                }
            }
        }
    }
}
