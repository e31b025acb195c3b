//! # API crate: typed access to the eUprava backend services
//!
//! Everything the portal knows about the backends lives here: wire records,
//! the HTTP client that talks to each agency, the token decoder and the
//! input checks that run before a request is allowed out.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URLs, bearer token at call time, error normalization |
//! | [`sso`] | Login, logout, registration, password recovery |
//! | [`court`] | Hearings, warrants, suspensions |
//! | [`mup`] | Vehicles, registrations, driving permits and bans |
//! | [`police`] | Traffic violations and roadside checks |
//! | [`statistics`] | Yearly vehicle and violation figures |
//! | [`jwt`] | Reads subject, role and expiry out of a stored token |
//! | [`validation`] | Client-side checks that gate every submission |
//! | [`models`] | camelCase wire records |
//!
//! ## Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), api::ApiError> {
//! use std::sync::Arc;
//! use api::{validation, ApiClient};
//! use store::{MemoryStore, PortalConfig};
//!
//! let client = ApiClient::new(PortalConfig::default(), Arc::new(MemoryStore::new()))?;
//! let credentials = validation::validate_login("a@b.com", "Secret1").expect("valid input");
//! client.sso().login(&credentials).await?;
//! let hearings = client.court().hearings().await?;
//! # let _ = hearings;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod court;
pub mod error;
pub mod jwt;
pub mod models;
pub mod mup;
pub mod police;
pub mod sso;
pub mod statistics;
pub mod validation;

pub use client::ApiClient;
pub use error::ApiError;
pub use jwt::{Identity, Role};
pub use validation::ValidationError;

pub use store::{PortalConfig, Service, SessionStore, SharedSession};
