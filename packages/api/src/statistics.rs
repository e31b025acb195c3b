//! Institute for Statistics: yearly vehicle and violation figures.

use store::Service;

use crate::client::{ApiClient, Endpoint};
use crate::error::ApiError;
use crate::models::statistics::BrandCounts;
use crate::models::{BrandCount, RegisteredVehicles, TrafficStatistic, YearlyCounts};

pub struct StatisticsClient<'a> {
    client: &'a ApiClient,
}

impl<'a> StatisticsClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Registered vehicles per year.
    pub async fn vehicle_statistics_by_year(&self) -> Result<YearlyCounts, ApiError> {
        let endpoint = Endpoint::new(
            Service::Statistics,
            &["vehicle-statistics-by-year"],
            "Failed to fetch vehicle statistics",
        );
        let counts: Option<YearlyCounts> = self.client.get(endpoint).await?;
        Ok(counts.unwrap_or_default())
    }

    pub async fn traffic_statistics(&self) -> Result<Vec<TrafficStatistic>, ApiError> {
        let endpoint =
            Endpoint::new(Service::Statistics, &["traffic-statistic"], "Failed to fetch traffic statistics");
        let stats: Option<Vec<TrafficStatistic>> = self.client.get(endpoint).await?;
        Ok(stats.unwrap_or_default())
    }

    pub async fn registered_vehicles(&self, year: i32) -> Result<u64, ApiError> {
        let year = year.to_string();
        let endpoint = Endpoint::new(
            Service::Statistics,
            &["registered-vehicles", year.as_str()],
            "Failed to fetch registered vehicles",
        );
        let RegisteredVehicles { count } = self.client.get(endpoint).await?;
        Ok(count)
    }

    /// Violations in `year`, keyed by reason.
    pub async fn traffic_violations_report(&self, year: i32) -> Result<YearlyCounts, ApiError> {
        let year = year.to_string();
        let endpoint = Endpoint::new(
            Service::Statistics,
            &["traffic-violations-report", year.as_str()],
            "Error fetching traffic violations",
        );
        let counts: Option<YearlyCounts> = self.client.get(endpoint).await?;
        Ok(counts.unwrap_or_default())
    }

    /// Brands registered in `year`, most popular first.
    pub async fn most_popular_brands(&self, year: i32) -> Result<Vec<BrandCount>, ApiError> {
        let year = year.to_string();
        let endpoint = Endpoint::new(
            Service::Statistics,
            &["most-popular-brands", year.as_str()],
            "Failed to fetch most popular brands",
        );
        let brands: BrandCounts = self.client.get(endpoint).await?;
        Ok(brands.into_ranked())
    }
}
