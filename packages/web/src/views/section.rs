use api::ApiError;
use dioxus::prelude::*;
use ui::views::{cards_of, ActionEvent, Card, ListAction, Record, RecordList};

/// What a list section shows: nothing yet, the cards, or why loading failed.
pub(crate) type Loaded = Option<Result<Vec<(String, Card)>, String>>;

/// Turn a fetched list into cards for [`ListSection`].
pub(crate) fn loaded<R: Record>(result: Option<&Result<Vec<R>, ApiError>>) -> Loaded {
    result.map(|r| r.as_ref().map(|records| cards_of(records)).map_err(ApiError::to_string))
}

/// Same as [`loaded`] for endpoints that return at most one record.
pub(crate) fn loaded_one<R: Record + Clone>(result: Option<&Result<Option<R>, ApiError>>) -> Loaded {
    result.map(|r| {
        r.as_ref()
            .map(|record| cards_of(&record.iter().cloned().collect::<Vec<_>>()))
            .map_err(ApiError::to_string)
    })
}

/// A titled [`RecordList`] over a resource that may still be loading.
#[component]
pub(crate) fn ListSection(
    title: String,
    cards: Loaded,
    empty_heading: String,
    #[props(default)] actions: Vec<ListAction>,
    #[props(default)] busy: bool,
    on_action: Option<EventHandler<ActionEvent>>,
) -> Element {
    rsx! {
        section {
            class: "page-section",
            h2 { "{title}" }
            {match cards {
                None => rsx! { p { class: "loading", "Loading..." } },
                Some(Err(message)) => rsx! { p { class: "inline-error", "{message}" } },
                Some(Ok(cards)) => rsx! {
                    RecordList { cards, empty_heading, actions, busy, on_action }
                },
            }}
        }
    }
}
