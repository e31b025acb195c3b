//! # API client core
//!
//! [`ApiClient`] is the single entry point to the five backend services. It
//! owns the HTTP client, the [`PortalConfig`] with every service's base URL,
//! and a handle to the injected [`SharedSession`].
//!
//! Operations are grouped per agency behind borrowed sub-clients
//! ([`ApiClient::sso`], [`ApiClient::court`], [`ApiClient::mup`],
//! [`ApiClient::police`], [`ApiClient::statistics`]), one method per backend
//! action.
//!
//! ## Authentication
//!
//! The bearer token is read from the session store **when each request is
//! built**, never captured up front: a client created before login must send
//! the token that login stored. An authenticated request with no stored token
//! fails with [`ApiError::NotAuthenticated`] before anything goes on the wire.
//!
//! ## Responses
//!
//! A 2xx body is decoded as JSON into the operation's return type; an empty
//! body decodes as `null` (so `()` and `Option<T>` operations accept it).
//! Anything else becomes an [`ApiError`] carrying the service's `message` or
//! the operation's fallback string.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{PortalConfig, Service, SharedSession};

use crate::court::CourtClient;
use crate::error::ApiError;
use crate::jwt::{self, Identity};
use crate::mup::MupClient;
use crate::police::PoliceClient;
use crate::sso::SsoClient;
use crate::statistics::StatisticsClient;

/// Typed client for the portal's backend services.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<PortalConfig>,
    session: SharedSession,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("logged_in", &self.session.has_token())
            .finish()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config) && Arc::ptr_eq(&self.session, &other.session)
    }
}

impl ApiClient {
    /// Create a client for `config`, reading tokens from `session`.
    pub fn new(config: PortalConfig, session: SharedSession) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.http.timeout_secs));
        let http = builder.build().map_err(ApiError::Setup)?;

        Ok(Self {
            http,
            config: Arc::new(config),
            session,
        })
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    /// Identity decoded from the token stored right now.
    pub fn identity(&self) -> Identity {
        jwt::decode_optional(self.session.get_token().as_deref())
    }

    /// Subject (JMBG) of the current token, for per-citizen lookups.
    pub(crate) fn subject(&self) -> Result<String, ApiError> {
        let identity = self.identity();
        if identity.is_empty() {
            return Err(ApiError::NotAuthenticated);
        }
        Ok(identity.subject)
    }

    pub fn sso(&self) -> SsoClient<'_> {
        SsoClient::new(self)
    }

    pub fn court(&self) -> CourtClient<'_> {
        CourtClient::new(self)
    }

    pub fn mup(&self) -> MupClient<'_> {
        MupClient::new(self)
    }

    pub fn police(&self) -> PoliceClient<'_> {
        PoliceClient::new(self)
    }

    pub fn statistics(&self) -> StatisticsClient<'_> {
        StatisticsClient::new(self)
    }

    /// Liveness check: authenticated GET on an agency's base URL. Returns the
    /// reply text. SSO has no such route and is refused without a request.
    pub async fn ping(&self, service: Service) -> Result<String, ApiError> {
        let fallback = match service {
            Service::Sso => return Err(ApiError::NotPingable(service.display_name())),
            Service::Mup => "Failed to ping MUP",
            Service::Police => "Failed to ping traffic police",
            Service::Court => "Failed to ping court",
            Service::Statistics => "Failed to ping Institute for Statistics",
        };
        let endpoint = Endpoint::new(service, &[], fallback);
        let request = self.request(Method::GET, &endpoint)?;
        self.send_checked(request, &endpoint).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let request = self.request(Method::GET, &endpoint)?;
        self.execute(request, &endpoint).await
    }

    pub(crate) async fn post<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, &endpoint)?.json(body);
        self.execute(request, &endpoint).await
    }

    pub(crate) async fn put<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, &endpoint)?.json(body);
        self.execute(request, &endpoint).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let request = self.request(Method::DELETE, &endpoint)?;
        self.execute(request, &endpoint).await
    }

    fn url(&self, endpoint: &Endpoint) -> Result<Url, ApiError> {
        let base = self.config.base_url(endpoint.service);
        let invalid = || ApiError::InvalidUrl {
            url: base.to_string(),
        };
        let mut url = Url::parse(base).map_err(|_| invalid())?;
        if !endpoint.segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| invalid())?
                .pop_if_empty()
                .extend(&endpoint.segments);
        }
        Ok(url)
    }

    fn request(&self, method: Method, endpoint: &Endpoint) -> Result<RequestBuilder, ApiError> {
        let url = self.url(endpoint)?;
        tracing::debug!(%method, service = ?endpoint.service, %url, "API request");

        let mut builder = self.http.request(method, url);
        if endpoint.authenticated {
            let Some(token) = self.session.get_token() else {
                tracing::warn!("{} requires a session but no token is stored", endpoint.describe());
                return Err(ApiError::NotAuthenticated);
            };
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &Endpoint,
    ) -> Result<T, ApiError> {
        let body = self.send_checked(request, endpoint).await?;
        decode_body(&body).map_err(|source| {
            tracing::warn!("{} returned an unexpected body: {}", endpoint.describe(), source);
            ApiError::Decode {
                endpoint: endpoint.describe(),
                message: endpoint.fallback.to_string(),
                source,
            }
        })
    }

    /// Send a POST and return the raw 2xx body, for endpoints that answer
    /// with either JSON or plain text.
    pub(crate) async fn post_for_text<B>(&self, endpoint: Endpoint, body: &B) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, &endpoint)?.json(body);
        self.send_checked(request, &endpoint).await
    }

    /// Send, read the body, and turn non-2xx statuses into errors.
    async fn send_checked(&self, request: RequestBuilder, endpoint: &Endpoint) -> Result<String, ApiError> {
        let transport = |source: reqwest::Error| ApiError::Transport {
            endpoint: endpoint.describe(),
            message: endpoint.fallback.to_string(),
            source,
        };

        let response = request.send().await.map_err(|e| {
            tracing::warn!("{} failed: {}", endpoint.describe(), e);
            transport(e)
        })?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            let err = ApiError::from_status(&endpoint.describe(), status.as_u16(), &body, endpoint.fallback);
            tracing::warn!("{} returned {}: {}", endpoint.describe(), status, err);
            return Err(err);
        }
        Ok(body)
    }
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    if body.trim().is_empty() {
        serde_json::from_str("null")
    } else {
        serde_json::from_str(body)
    }
}

/// Map a 404 to `Ok(None)`: "nothing on record" for single-record lookups.
pub(crate) fn none_if_missing<T>(result: Result<Option<T>, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Err(e) if e.status() == Some(StatusCode::NOT_FOUND.as_u16()) => Ok(None),
        other => other,
    }
}

/// One backend operation: where it lives and what to say when it fails.
#[derive(Clone, Debug)]
pub(crate) struct Endpoint {
    service: Service,
    segments: Vec<String>,
    authenticated: bool,
    fallback: &'static str,
}

impl Endpoint {
    /// An authenticated endpoint at `segments` under the service base URL.
    pub(crate) fn new(service: Service, segments: &[&str], fallback: &'static str) -> Self {
        Self {
            service,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            authenticated: true,
            fallback,
        }
    }

    /// Same endpoint, sent without a bearer token.
    pub(crate) fn public(mut self) -> Self {
        self.authenticated = false;
        self
    }

    fn describe(&self) -> String {
        format!("{} /{}", self.service.display_name(), self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(PortalConfig::single_origin(base), Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_url_joins_segments_under_base_path() {
        let client = client("http://localhost:8003/api/v1");
        let url = client
            .url(&Endpoint::new(Service::Court, &["hearings", "0101990710006"], "x"))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8003/api/v1/hearings/0101990710006");
    }

    #[test]
    fn test_url_escapes_segment_content() {
        let client = client("http://localhost:8003/api/v1/");
        let url = client
            .url(&Endpoint::new(Service::Mup, &["delete-pending-registration-request", "BG 123/4"], "x"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8003/api/v1/delete-pending-registration-request/BG%20123%2F4"
        );
    }

    #[test]
    fn test_ping_url_is_base() {
        let client = client("http://localhost:8001/api/v1");
        let url = client.url(&Endpoint::new(Service::Mup, &[], "x")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8001/api/v1");
    }

    #[test]
    fn test_invalid_base_url() {
        let client = client("not a url");
        let err = client.url(&Endpoint::new(Service::Sso, &["login"], "x")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }

    #[test]
    fn test_authenticated_request_without_token_is_refused() {
        let client = client("http://localhost:8003/api/v1");
        let err = client
            .request(Method::GET, &Endpoint::new(Service::Court, &["hearings", "1"], "x"))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotAuthenticated));

        assert!(client
            .request(Method::POST, &Endpoint::new(Service::Sso, &["login"], "x").public())
            .is_ok());
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let unit: () = decode_body("").unwrap();
        assert_eq!(unit, ());
        let none: Option<u32> = decode_body("  ").unwrap();
        assert!(none.is_none());
        assert!(decode_body::<Vec<u32>>("").is_err());
    }
}
