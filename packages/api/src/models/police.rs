use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrafficViolation {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "violatorJMBG", alias = "violatorEmail")]
    pub violator_jmbg: String,
    pub reason: String,
    #[serde(default)]
    pub description: String,
    pub time: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TireType {
    Summer,
    Winter,
}

impl TireType {
    pub const OPTIONS: [&'static str; 2] = ["SUMMER", "WINTER"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "SUMMER" => Some(TireType::Summer),
            "WINTER" => Some(TireType::Winter),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlcoholLevelCheck {
    pub alcohol_level: f64,
    pub jmbg: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TireCheck {
    pub tire_type: TireType,
    pub jmbg: String,
    pub location: String,
}

/// Body of the driver-ban and driver-permit checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverCheck {
    pub jmbg: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRegistrationCheck {
    pub jmbg: String,
    pub location: String,
    pub plates_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckAll {
    pub jmbg: String,
    pub alcohol_level: f64,
    pub tire: TireType,
    pub plates_number: String,
    pub location: String,
}

/// What a roadside check reported back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckOutcome {
    pub message: Option<String>,
}

impl CheckOutcome {
    /// Accepts `{"message": ...}`, a JSON string, or a plain-text body.
    pub fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        let message = match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(serde_json::Value::String(s)) => Some(s),
            Ok(value) => value.get("message").and_then(|m| m.as_str()).map(str::to_string),
            Err(_) => Some(trimmed.to_string()),
        };
        Self {
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// The server's message, or `fallback` when it sent none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_outcome_body_shapes() {
        assert_eq!(
            CheckOutcome::from_body(r#"{"message":"Driver is sober"}"#).message.as_deref(),
            Some("Driver is sober")
        );
        assert_eq!(
            CheckOutcome::from_body(r#""Driver has no active ban""#).message.as_deref(),
            Some("Driver has no active ban")
        );
        assert_eq!(
            CheckOutcome::from_body("Violation recorded").message.as_deref(),
            Some("Violation recorded")
        );
        assert_eq!(CheckOutcome::from_body(r#"{"ok":true}"#).message, None);
        assert_eq!(CheckOutcome::from_body("").message, None);
        assert_eq!(CheckOutcome::from_body("").message_or("Checked"), "Checked");
    }

    #[test]
    fn test_check_all_wire_names() {
        let body = serde_json::to_value(CheckAll {
            jmbg: "0101990710006".into(),
            alcohol_level: 0.2,
            tire: TireType::Winter,
            plates_number: "NS-123-AB".into(),
            location: "Novi Sad".into(),
        })
        .unwrap();
        assert_eq!(body["alcoholLevel"], 0.2);
        assert_eq!(body["tire"], "WINTER");
        assert_eq!(body["platesNumber"], "NS-123-AB");
    }
}
