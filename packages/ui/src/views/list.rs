use dioxus::prelude::*;

use super::record::Card;
use crate::components::{Button, ButtonVariant, Input};

/// Per-item actions a list can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListAction {
    Approve,
    Decline,
    /// Carries a new date and time, entered next to the button.
    Reschedule,
    RequestRegistration,
}

impl ListAction {
    pub fn label(self) -> &'static str {
        match self {
            ListAction::Approve => "Approve",
            ListAction::Decline => "Decline",
            ListAction::Reschedule => "Reschedule",
            ListAction::RequestRegistration => "Request registration",
        }
    }

    fn variant(self) -> ButtonVariant {
        match self {
            ListAction::Decline => ButtonVariant::Destructive,
            ListAction::Approve => ButtonVariant::Primary,
            _ => ButtonVariant::Secondary,
        }
    }

    pub fn needs_date_time(self) -> bool {
        self == ListAction::Reschedule
    }
}

/// A button press on one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionEvent {
    pub record_id: String,
    pub action: ListAction,
    /// The entered value for [`ListAction::Reschedule`], `None` otherwise.
    pub date_time: Option<String>,
}

/// One card per record with the allowed actions under each.
///
/// Pages build `cards` with [`Record`](super::Record) as
/// `(record_id, card)` pairs. The list never changes its records; actions go
/// up through `on_action` and the page re-fetches on success.
#[component]
pub fn RecordList(
    cards: Vec<(String, Card)>,
    empty_heading: String,
    #[props(default)] actions: Vec<ListAction>,
    #[props(default)] busy: bool,
    on_action: Option<EventHandler<ActionEvent>>,
) -> Element {
    if cards.is_empty() {
        return rsx! {
            EmptyState { heading: empty_heading }
        };
    }

    rsx! {
        div {
            class: "record-list",
            for (record_id, card) in cards {
                RecordCardView {
                    key: "{record_id}",
                    record_id: record_id.clone(),
                    card,
                    actions: actions.clone(),
                    busy,
                    on_action: move |event| {
                        if let Some(handler) = on_action {
                            handler.call(event);
                        }
                    },
                }
            }
        }
    }
}

#[component]
pub fn RecordCardView(
    record_id: String,
    card: Card,
    #[props(default)] actions: Vec<ListAction>,
    #[props(default)] busy: bool,
    on_action: EventHandler<ActionEvent>,
) -> Element {
    let mut date_time = use_signal(String::new);

    rsx! {
        div {
            class: "record-card",
            h3 { class: "record-title", "{card.title}" }
            dl {
                for (label, value) in card.details.iter() {
                    div {
                        key: "{label}",
                        class: "record-detail",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
            if !actions.is_empty() {
                div {
                    class: "record-actions",
                    for action in actions.iter().copied() {
                        span {
                            key: "{action.label()}",
                            class: "record-action",
                            if action.needs_date_time() {
                                Input {
                                    r#type: "datetime-local",
                                    value: date_time(),
                                    disabled: busy,
                                    oninput: move |evt: FormEvent| date_time.set(evt.value()),
                                }
                            }
                            Button {
                                variant: action.variant(),
                                disabled: busy || (action.needs_date_time() && date_time.read().is_empty()),
                                onclick: {
                                    let record_id = record_id.clone();
                                    move |_| {
                                        on_action.call(ActionEvent {
                                            record_id: record_id.clone(),
                                            action,
                                            date_time: action.needs_date_time().then(|| date_time()),
                                        });
                                    }
                                },
                                "{action.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Heading shown in place of an empty list.
#[component]
pub fn EmptyState(heading: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h3 { "{heading}" }
        }
    }
}
