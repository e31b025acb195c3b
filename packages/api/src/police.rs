//! Traffic police: recorded violations and roadside checks.

use store::Service;

use crate::client::{ApiClient, Endpoint};
use crate::error::ApiError;
use crate::models::{
    AlcoholLevelCheck, CheckAll, CheckOutcome, DriverCheck, TireCheck, TrafficViolation,
    VehicleRegistrationCheck,
};

pub struct PoliceClient<'a> {
    client: &'a ApiClient,
}

impl<'a> PoliceClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn traffic_violations(&self) -> Result<Vec<TrafficViolation>, ApiError> {
        let endpoint =
            Endpoint::new(Service::Police, &["traffic-violation"], "Failed to retrieve traffic violations");
        let violations: Option<Vec<TrafficViolation>> = self.client.get(endpoint).await?;
        Ok(violations.unwrap_or_default())
    }

    async fn check<B: serde::Serialize>(
        &self,
        check: &str,
        body: &B,
        fallback: &'static str,
    ) -> Result<CheckOutcome, ApiError> {
        let endpoint = Endpoint::new(Service::Police, &["traffic-violation", check], fallback);
        let body = self.client.post_for_text(endpoint, body).await?;
        Ok(CheckOutcome::from_body(&body))
    }

    pub async fn check_alcohol_level(&self, check: &AlcoholLevelCheck) -> Result<CheckOutcome, ApiError> {
        self.check("check-alcohol-level", check, "Failed to check alcohol level")
            .await
    }

    pub async fn check_vehicle_tire(&self, check: &TireCheck) -> Result<CheckOutcome, ApiError> {
        self.check("check-vehicle-tire", check, "Failed to check vehicle tires")
            .await
    }

    pub async fn check_driver_ban(&self, check: &DriverCheck) -> Result<CheckOutcome, ApiError> {
        self.check("check-driver-ban", check, "Failed to check driver ban").await
    }

    pub async fn check_driver_permit(&self, check: &DriverCheck) -> Result<CheckOutcome, ApiError> {
        self.check("check-driver-permit", check, "Failed to check driver permit")
            .await
    }

    pub async fn check_vehicle_registration(
        &self,
        check: &VehicleRegistrationCheck,
    ) -> Result<CheckOutcome, ApiError> {
        self.check("check-vehicle-registration", check, "Failed to check vehicle registration")
            .await
    }

    pub async fn check_all(&self, check: &CheckAll) -> Result<CheckOutcome, ApiError> {
        self.check("check-all", check, "Failed to run traffic checks").await
    }
}
