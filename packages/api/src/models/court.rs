use serde::{Deserialize, Serialize};

/// A scheduled court hearing for a person or a legal entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourtHearing {
    #[serde(default)]
    pub id: String,
    pub reason: String,
    pub date_time: String,
    pub court: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_entity: Option<String>,
}

impl CourtHearing {
    /// Whether the hearing concerns a legal entity rather than a person.
    pub fn is_legal_entity(&self) -> bool {
        self.legal_entity.as_deref().is_some_and(|e| !e.is_empty())
    }
}

/// Hearing creation request; the party decides the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewHearing {
    pub reason: String,
    pub date_time: String,
    pub court: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_entity: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleHearing {
    #[serde(rename = "hearingID")]
    pub hearing_id: String,
    pub date_time: String,
}

/// Arrest warrant tied to a traffic violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Warrant {
    #[serde(default)]
    pub id: String,
    pub traffic_violation: String,
    pub issued_on: String,
    #[serde(default)]
    pub issued_for: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewWarrant {
    pub traffic_violation: String,
    pub issued_for: String,
}

/// Driving licence suspension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suspension {
    #[serde(default)]
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub person: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewSuspension {
    pub from: String,
    pub to: String,
    pub person: String,
}
