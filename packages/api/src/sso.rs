//! Single sign-on: login, logout, registration and password recovery.

use serde::de::IgnoredAny;
use store::Service;

use crate::client::{ApiClient, Endpoint};
use crate::error::ApiError;
use crate::jwt::{self, Identity};
use crate::models::{Credentials, NewLegalEntity, NewPerson, PasswordRecovery, PasswordReset, UserToken};

pub struct SsoClient<'a> {
    client: &'a ApiClient,
}

impl<'a> SsoClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token, store it, and return who logged in.
    pub async fn login(&self, credentials: &Credentials) -> Result<Identity, ApiError> {
        let endpoint = Endpoint::new(Service::Sso, &["login"], "Failed to login user").public();
        let UserToken { token } = self.client.post(endpoint, credentials).await?;
        if token.trim().is_empty() {
            return Err(ApiError::Rejected {
                endpoint: "SSO /login".to_string(),
                status: 200,
                message: "Failed to login user".to_string(),
            });
        }

        self.client.session().set_token(&token);
        let identity = jwt::decode(&token);
        tracing::info!(subject = %identity.subject, role = ?identity.role, "Logged in");
        Ok(identity)
    }

    /// Tell the SSO service, then drop the stored token whatever it answered.
    pub async fn logout(&self) {
        let endpoint = Endpoint::new(Service::Sso, &["logout"], "Failed to logout user").public();
        if let Err(e) = self.client.get::<IgnoredAny>(endpoint).await {
            tracing::warn!("Logout request failed, clearing session anyway: {}", e);
        }
        self.client.session().clear_token();
        tracing::info!("Logged out");
    }

    pub async fn register_person(&self, person: &NewPerson) -> Result<(), ApiError> {
        let endpoint = Endpoint::new(Service::Sso, &["register-person"], "Failed to register user").public();
        let _: IgnoredAny = self.client.post(endpoint, person).await?;
        Ok(())
    }

    pub async fn register_legal_entity(&self, entity: &NewLegalEntity) -> Result<(), ApiError> {
        let endpoint =
            Endpoint::new(Service::Sso, &["register-entity"], "Failed to register legal entity").public();
        let _: IgnoredAny = self.client.post(endpoint, entity).await?;
        Ok(())
    }

    /// Ask for a password reset code to be mailed to `email`.
    pub async fn recover_password(&self, email: &str) -> Result<(), ApiError> {
        let endpoint =
            Endpoint::new(Service::Sso, &["recover-password"], "Failed to send recovery email").public();
        let body = PasswordRecovery {
            email: email.to_string(),
        };
        let _: IgnoredAny = self.client.post(endpoint, &body).await?;
        Ok(())
    }

    pub async fn reset_password(&self, reset: &PasswordReset) -> Result<(), ApiError> {
        let endpoint = Endpoint::new(Service::Sso, &["reset-password"], "Failed to reset password").public();
        let _: IgnoredAny = self.client.post(endpoint, reset).await?;
        Ok(())
    }
}
