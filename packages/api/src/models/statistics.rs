use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::mup::Vehicle;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrafficStatistic {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub month: u32,
    #[serde(default)]
    pub violation_type: String,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

/// Counts keyed by a label (a year, a violation reason).
pub type YearlyCounts = BTreeMap<String, u64>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisteredVehicles {
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandCount {
    pub brand: String,
    pub count: u64,
}

/// The brands endpoint has answered both as a list and as a map.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum BrandCounts {
    List(Vec<BrandCount>),
    Map(BTreeMap<String, u64>),
    Missing(()),
}

impl BrandCounts {
    /// Most registered first; ties broken by brand name.
    pub(crate) fn into_ranked(self) -> Vec<BrandCount> {
        let mut brands = match self {
            BrandCounts::List(list) => list,
            BrandCounts::Map(map) => map
                .into_iter()
                .map(|(brand, count)| BrandCount { brand, count })
                .collect(),
            BrandCounts::Missing(()) => Vec::new(),
        };
        brands.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.brand.cmp(&b.brand)));
        brands
    }
}
