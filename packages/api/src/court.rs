//! Court service: hearings, warrants and licence suspensions.

use serde::de::IgnoredAny;
use store::Service;

use crate::client::{none_if_missing, ApiClient, Endpoint};
use crate::error::ApiError;
use crate::models::{CourtHearing, NewHearing, NewSuspension, NewWarrant, RescheduleHearing, Suspension, Warrant};

pub struct CourtClient<'a> {
    client: &'a ApiClient,
}

impl<'a> CourtClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Hearings of the logged-in citizen.
    pub async fn hearings(&self) -> Result<Vec<CourtHearing>, ApiError> {
        let subject = self.client.subject()?;
        let endpoint = Endpoint::new(Service::Court, &["hearings", subject.as_str()], "Failed to retrieve hearings");
        let hearings: Option<Vec<CourtHearing>> = self.client.get(endpoint).await?;
        Ok(hearings.unwrap_or_default())
    }

    /// The citizen's licence suspension, if one is on record.
    pub async fn suspension(&self) -> Result<Option<Suspension>, ApiError> {
        let subject = self.client.subject()?;
        let endpoint = Endpoint::new(Service::Court, &["suspensions", subject.as_str()], "Failed to retrieve suspension");
        none_if_missing(self.client.get(endpoint).await)
    }

    pub async fn warrants(&self) -> Result<Vec<Warrant>, ApiError> {
        let subject = self.client.subject()?;
        let endpoint = Endpoint::new(Service::Court, &["warrants", subject.as_str()], "Failed to retrieve warrants");
        let warrants: Option<Vec<Warrant>> = self.client.get(endpoint).await?;
        Ok(warrants.unwrap_or_default())
    }

    pub async fn create_hearing_person(&self, hearing: &NewHearing) -> Result<(), ApiError> {
        let endpoint = Endpoint::new(Service::Court, &["create-hearing-person"], "Failed to create hearing");
        let _: IgnoredAny = self.client.post(endpoint, hearing).await?;
        Ok(())
    }

    pub async fn create_hearing_entity(&self, hearing: &NewHearing) -> Result<(), ApiError> {
        let endpoint = Endpoint::new(Service::Court, &["create-hearing-entity"], "Failed to create hearing");
        let _: IgnoredAny = self.client.post(endpoint, hearing).await?;
        Ok(())
    }

    /// Create a hearing, picking the endpoint from the party it names.
    pub async fn create_hearing(&self, hearing: &NewHearing) -> Result<(), ApiError> {
        if hearing.legal_entity.as_deref().is_some_and(|e| !e.is_empty()) {
            self.create_hearing_entity(hearing).await
        } else {
            self.create_hearing_person(hearing).await
        }
    }

    pub async fn reschedule_hearing_person(&self, reschedule: &RescheduleHearing) -> Result<(), ApiError> {
        let endpoint =
            Endpoint::new(Service::Court, &["update-hearing-person"], "Failed to reschedule hearing");
        let _: IgnoredAny = self.client.put(endpoint, reschedule).await?;
        Ok(())
    }

    pub async fn reschedule_hearing_entity(&self, reschedule: &RescheduleHearing) -> Result<(), ApiError> {
        let endpoint =
            Endpoint::new(Service::Court, &["update-hearing-entity"], "Failed to reschedule hearing");
        let _: IgnoredAny = self.client.put(endpoint, reschedule).await?;
        Ok(())
    }

    /// Move `hearing` to `date_time`, using the endpoint for its party.
    pub async fn reschedule_hearing(&self, hearing: &CourtHearing, date_time: &str) -> Result<(), ApiError> {
        let reschedule = RescheduleHearing {
            hearing_id: hearing.id.clone(),
            date_time: date_time.to_string(),
        };
        if hearing.is_legal_entity() {
            self.reschedule_hearing_entity(&reschedule).await
        } else {
            self.reschedule_hearing_person(&reschedule).await
        }
    }

    pub async fn create_suspension(&self, suspension: &NewSuspension) -> Result<(), ApiError> {
        let endpoint = Endpoint::new(Service::Court, &["suspensions"], "Failed to create suspension");
        let _: IgnoredAny = self.client.post(endpoint, suspension).await?;
        Ok(())
    }

    pub async fn create_warrant(&self, warrant: &NewWarrant) -> Result<(), ApiError> {
        let endpoint = Endpoint::new(Service::Court, &["warrants"], "Failed to issue warrant");
        let _: IgnoredAny = self.client.post(endpoint, warrant).await?;
        Ok(())
    }
}
