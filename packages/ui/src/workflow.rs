//! # Command-then-invalidate
//!
//! Every mutating action on a page follows the same protocol:
//!
//! 1. [`ActionState::try_begin`] moves `Idle`/`Succeeded`/`Failed` to
//!    `Loading`; a second trigger while `Loading` is ignored.
//! 2. The request runs.
//! 3. On success: one success toast, the modal closes, and the page's list is
//!    invalidated **exactly once** so it re-fetches.
//! 4. On failure: one error toast with the service's message, the modal stays
//!    open so the user can retry, and nothing is invalidated.
//!
//! [`run_mutation`] drives the protocol against a [`WorkflowHost`]; pages use
//! [`SignalHost`], tests use a recording host.

use std::fmt::Display;
use std::future::Future;

use dioxus::prelude::*;

use crate::toast::{push_toast, ToastLevel, Toasts};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed(String),
}

impl ActionState {
    /// Enter `Loading`. Returns false, changing nothing, if already loading.
    pub fn try_begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = ActionState::Loading;
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ActionState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// What a page exposes to a running mutation.
pub trait WorkflowHost {
    /// Current state of the action.
    fn state(&self) -> ActionState;
    fn set_state(&mut self, state: ActionState);
    fn notify(&mut self, level: ToastLevel, message: &str);
    fn close_modal(&mut self);
    /// Invalidate the page's data so it is fetched again.
    fn refresh(&mut self);
}

/// Run `operation` under the command-then-invalidate protocol.
///
/// Returns the operation's value on success, `None` if it failed or was
/// refused because the action was already in flight.
pub async fn run_mutation<H, F, T, E>(host: &mut H, success_message: &str, operation: F) -> Option<T>
where
    H: WorkflowHost,
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    run_mutation_reporting(host, |_| success_message.to_string(), operation).await
}

/// [`run_mutation`] for operations whose success toast depends on the
/// returned value, such as a check that answers with a verdict.
pub async fn run_mutation_reporting<H, F, T, E, M>(host: &mut H, success_message: M, operation: F) -> Option<T>
where
    H: WorkflowHost,
    F: Future<Output = Result<T, E>>,
    E: Display,
    M: FnOnce(&T) -> String,
{
    let mut state = host.state();
    if !state.try_begin() {
        tracing::debug!("Ignoring repeated submission while a request is in flight");
        return None;
    }
    host.set_state(state);

    match operation.await {
        Ok(value) => {
            host.set_state(ActionState::Succeeded);
            host.notify(ToastLevel::Success, &success_message(&value));
            host.close_modal();
            host.refresh();
            Some(value)
        }
        Err(e) => {
            let message = e.to_string();
            host.set_state(ActionState::Failed(message.clone()));
            host.notify(ToastLevel::Error, &message);
            None
        }
    }
}

/// [`WorkflowHost`] over Dioxus signals.
///
/// `refresh` bumps a generation counter; list resources that read it
/// re-run once per bump.
#[derive(Clone, Copy)]
pub struct SignalHost {
    pub state: Signal<ActionState>,
    pub toasts: Signal<Toasts>,
    pub on_close: Option<Callback<()>>,
    pub generation: Option<Signal<u64>>,
}

impl SignalHost {
    pub fn new(state: Signal<ActionState>, toasts: Signal<Toasts>) -> Self {
        Self {
            state,
            toasts,
            on_close: None,
            generation: None,
        }
    }

    pub fn closing(mut self, on_close: Callback<()>) -> Self {
        self.on_close = Some(on_close);
        self
    }

    pub fn refreshing(mut self, generation: Signal<u64>) -> Self {
        self.generation = Some(generation);
        self
    }
}

impl WorkflowHost for SignalHost {
    fn state(&self) -> ActionState {
        self.state.peek().clone()
    }

    fn set_state(&mut self, state: ActionState) {
        self.state.set(state);
    }

    fn notify(&mut self, level: ToastLevel, message: &str) {
        push_toast(&mut self.toasts, level, message);
    }

    fn close_modal(&mut self) {
        if let Some(on_close) = self.on_close {
            on_close.call(());
        }
    }

    fn refresh(&mut self) {
        if let Some(mut generation) = self.generation {
            *generation.write() += 1;
        }
    }
}
