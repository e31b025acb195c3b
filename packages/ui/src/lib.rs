//! Shared UI for the eUprava portal.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Session context, expiry guard, logout |
//! | [`role_gate`] | Per-role rendering |
//! | [`forms`] | Field-driven forms and their submitted values |
//! | [`actions`] | Validated submission flows behind the forms |
//! | [`workflow`] | Command-then-invalidate protocol for mutations |
//! | [`modal`] | Single-slot overlay |
//! | [`toast`] | Transient notifications |
//! | [`views`] | Record cards, action lists, ping button |

use dioxus::prelude::*;

pub mod actions;
pub mod auth;
pub mod components;
pub mod forms;
pub mod modal;
pub mod role_gate;
pub mod toast;
pub mod views;
pub mod workflow;

pub const PORTAL_CSS: Asset = asset!("/assets/styling/portal.css");

mod navbar;
pub use navbar::{NavLink, Navbar};

pub use auth::{use_api, use_identity, use_session, LogoutButton, RequireSession, SessionProvider, SessionStatus};
pub use forms::{FieldKind, FieldValue, Form, FormError, FormField, FormValues};
pub use modal::{Modal, ModalState};
pub use role_gate::{role_allows, use_role_allows, AdminOnly, CitizenOnly, RoleGate};
pub use toast::{push_error, push_success, use_toasts, ToastHost, ToastLevel, Toasts};
pub use workflow::{run_mutation, run_mutation_reporting, ActionState, SignalHost, WorkflowHost};
