//! MUP (Ministry of Interior): vehicles, registrations, driving permits and bans.

use serde::de::IgnoredAny;
use store::Service;

use crate::client::{none_if_missing, ApiClient, Endpoint};
use crate::error::ApiError;
use crate::models::{DrivingBan, DrivingPermit, NewDrivingBan, NewVehicle, PermitHolder, Registration, Vehicle};

pub struct MupClient<'a> {
    client: &'a ApiClient,
}

impl<'a> MupClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        fallback: &'static str,
    ) -> Result<Vec<T>, ApiError> {
        let items: Option<Vec<T>> = self.client.get(Endpoint::new(Service::Mup, &[path], fallback)).await?;
        Ok(items.unwrap_or_default())
    }

    pub async fn vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        self.list("persons-vehicles", "Failed to retrieve vehicles").await
    }

    pub async fn driving_bans(&self) -> Result<Vec<DrivingBan>, ApiError> {
        self.list("driving-bans", "Failed to retrieve driving bans").await
    }

    pub async fn driving_permit(&self) -> Result<Option<DrivingPermit>, ApiError> {
        let endpoint =
            Endpoint::new(Service::Mup, &["persons-driving-permit"], "Failed to retrieve driving permit");
        none_if_missing(self.client.get(endpoint).await)
    }

    pub async fn registrations(&self) -> Result<Vec<Registration>, ApiError> {
        self.list("persons-registrations", "Failed to retrieve registrations").await
    }

    pub async fn pending_registration_requests(&self) -> Result<Vec<Registration>, ApiError> {
        self.list("pending-registration-requests", "Failed to retrieve registration requests")
            .await
    }

    pub async fn pending_permit_requests(&self) -> Result<Vec<DrivingPermit>, ApiError> {
        self.list("pending-traffic-permit-requests", "Failed to retrieve driving permit requests")
            .await
    }

    /// Ask MUP to register `vehicle_id`; the server fills in the details.
    pub async fn request_registration(&self, vehicle_id: &str) -> Result<(), ApiError> {
        let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        let body = Registration {
            registration_number: String::new(),
            issued_date: now.clone(),
            expiration_date: now,
            vehicle_id: vehicle_id.to_string(),
            owner: String::new(),
            plates: String::new(),
            approved: false,
        };
        let endpoint = Endpoint::new(Service::Mup, &["registration-request"], "Failed to register vehicle");
        let _: IgnoredAny = self.client.post(endpoint, &body).await?;
        Ok(())
    }

    /// MUP fills in the holder from the token and the dates on approval; the
    /// placeholders only have to parse as timestamps.
    pub async fn request_driving_permit(&self) -> Result<(), ApiError> {
        let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        let body = DrivingPermit {
            id: String::new(),
            number: String::new(),
            issued_date: now.clone(),
            expiration_date: now,
            approved: false,
            person: PermitHolder::default(),
        };
        let endpoint =
            Endpoint::new(Service::Mup, &["traffic-permit-request"], "Failed to request traffic permit");
        let _: IgnoredAny = self.client.post(endpoint, &body).await?;
        Ok(())
    }

    pub async fn approve_registration_request(&self, request: &Registration) -> Result<(), ApiError> {
        let body = Registration {
            approved: true,
            ..request.clone()
        };
        let endpoint = Endpoint::new(
            Service::Mup,
            &["approve-registration-request"],
            "Failed to approve registration request",
        );
        let _: IgnoredAny = self.client.post(endpoint, &body).await?;
        Ok(())
    }

    pub async fn decline_registration_request(&self, registration_number: &str) -> Result<(), ApiError> {
        let endpoint = Endpoint::new(
            Service::Mup,
            &["delete-pending-registration-request", registration_number],
            "Failed to decline registration request",
        );
        let _: IgnoredAny = self.client.delete(endpoint).await?;
        Ok(())
    }

    pub async fn approve_permit_request(&self, request: &DrivingPermit) -> Result<(), ApiError> {
        let body = DrivingPermit {
            approved: true,
            ..request.clone()
        };
        let endpoint = Endpoint::new(
            Service::Mup,
            &["approve-traffic-permit-request"],
            "Failed to approve driving permit request",
        );
        let _: IgnoredAny = self.client.post(endpoint, &body).await?;
        Ok(())
    }

    pub async fn decline_permit_request(&self, id: &str) -> Result<(), ApiError> {
        let endpoint = Endpoint::new(
            Service::Mup,
            &["delete-pending-traffic-permit-request", id],
            "Failed to decline driving permit request",
        );
        let _: IgnoredAny = self.client.delete(endpoint).await?;
        Ok(())
    }

    pub async fn save_vehicle(&self, vehicle: &NewVehicle) -> Result<(), ApiError> {
        let endpoint = Endpoint::new(Service::Mup, &["vehicle"], "Failed to save vehicle");
        let _: IgnoredAny = self.client.post(endpoint, vehicle).await?;
        Ok(())
    }

    pub async fn issue_driving_ban(&self, ban: &NewDrivingBan) -> Result<(), ApiError> {
        let endpoint = Endpoint::new(Service::Mup, &["driving-ban"], "Failed to issue driving ban");
        let _: IgnoredAny = self.client.post(endpoint, ban).await?;
        Ok(())
    }
}
