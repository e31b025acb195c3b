//! Card rendering for the wire records.
//!
//! Every record the portal lists implements [`Record`]: an identifier the
//! list actions send back to the services, and a [`Card`] with the labelled
//! values shown to the user. Cards only repeat what the server sent.

use api::models::{
    display_timestamp, BrandCount, CourtHearing, DrivingBan, DrivingPermit, Registration, Suspension,
    TrafficStatistic, TrafficViolation, Vehicle, Warrant,
};

/// What one list entry shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Card {
    pub title: String,
    pub details: Vec<(String, String)>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: Vec::new(),
        }
    }

    /// Add a labelled value. Empty values are skipped.
    pub fn detail(mut self, label: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.details.push((label.to_string(), value));
        }
        self
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

pub trait Record {
    /// Identifier the services expect for actions on this record.
    fn record_id(&self) -> String;
    fn card(&self) -> Card;
}

/// `(record_id, card)` pairs for [`RecordList`](super::RecordList).
pub fn cards_of<R: Record>(records: &[R]) -> Vec<(String, Card)> {
    records.iter().map(|r| (r.record_id(), r.card())).collect()
}

impl Record for CourtHearing {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn card(&self) -> Card {
        let party = if self.is_legal_entity() {
            ("Legal entity", self.legal_entity.clone().unwrap_or_default())
        } else {
            ("Person", self.person.clone().unwrap_or_default())
        };
        Card::new(&self.reason)
            .detail("Court", &self.court)
            .detail("Date", display_timestamp(&self.date_time))
            .detail(party.0, party.1)
    }
}

impl Record for Warrant {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn card(&self) -> Card {
        Card::new("Warrant")
            .detail("Traffic violation", &self.traffic_violation)
            .detail("Issued on", display_timestamp(&self.issued_on))
            .detail("Issued for", &self.issued_for)
    }
}

impl Record for Suspension {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn card(&self) -> Card {
        Card::new("Driving licence suspension")
            .detail("From", display_timestamp(&self.from))
            .detail("To", display_timestamp(&self.to))
    }
}

impl Record for Vehicle {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn card(&self) -> Card {
        let status = if self.is_registered() { "Registered" } else { "Not registered" };
        Card::new(format!("{} {}", self.brand, self.model))
            .detail("Year", self.year)
            .detail("Plates", &self.plates)
            .detail("Registration", status)
    }
}

impl Record for Registration {
    fn record_id(&self) -> String {
        self.registration_number.clone()
    }

    fn card(&self) -> Card {
        Card::new(format!("Registration {}", self.registration_number))
            .detail("Vehicle", &self.vehicle_id)
            .detail("Owner", &self.owner)
            .detail("Plates", &self.plates)
            .detail("Issued", display_timestamp(&self.issued_date))
            .detail("Expires", display_timestamp(&self.expiration_date))
            .detail("Status", if self.approved { "Approved" } else { "Pending" })
    }
}

impl Record for DrivingPermit {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn card(&self) -> Card {
        let title = if self.number.is_empty() {
            "Driving permit request".to_string()
        } else {
            format!("Driving permit {}", self.number)
        };
        Card::new(title)
            .detail("Person", self.person.label())
            .detail("Issued", display_timestamp(&self.issued_date))
            .detail("Expires", display_timestamp(&self.expiration_date))
            .detail("Status", if self.approved { "Approved" } else { "Pending" })
    }
}

impl Record for DrivingBan {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn card(&self) -> Card {
        Card::new("Driving ban")
            .detail("Reason", &self.reason)
            .detail("Duration", &self.duration)
    }
}

impl Record for TrafficViolation {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn card(&self) -> Card {
        Card::new(&self.reason)
            .detail("Violator", &self.violator_jmbg)
            .detail("Description", &self.description)
            .detail("Time", display_timestamp(&self.time))
            .detail("Location", &self.location)
    }
}

impl Record for TrafficStatistic {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn card(&self) -> Card {
        let vehicles = self
            .vehicles
            .iter()
            .map(|v| format!("{} {}", v.brand, v.model))
            .collect::<Vec<_>>()
            .join(", ");
        Card::new(&self.violation_type)
            .detail("Region", &self.region)
            .detail("Date", display_timestamp(&self.date))
            .detail("Vehicles", vehicles)
    }
}

impl Record for BrandCount {
    fn record_id(&self) -> String {
        self.brand.clone()
    }

    fn card(&self) -> Card {
        Card::new(&self.brand).detail("Registered", self.count)
    }
}
