use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default)]
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub registration: String,
    #[serde(default)]
    pub plates: String,
    #[serde(default)]
    pub owner: String,
}

impl Vehicle {
    pub fn is_registered(&self) -> bool {
        !self.registration.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub owner: String,
}

/// A vehicle registration, pending until an administrator approves it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub registration_number: String,
    pub issued_date: String,
    pub expiration_date: String,
    #[serde(rename = "vehicleID")]
    pub vehicle_id: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub plates: String,
    #[serde(default)]
    pub approved: bool,
}

/// A driving permit, or a pending request for one when `approved` is false.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrivingPermit {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub issued_date: String,
    #[serde(default)]
    pub expiration_date: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub person: PermitHolder,
}

/// Who a permit belongs to. MUP embeds the whole person record in permits it
/// returns, while request bodies only carry an identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PermitHolder {
    Id(String),
    Person(PermitPerson),
}

impl Default for PermitHolder {
    fn default() -> Self {
        PermitHolder::Id(String::new())
    }
}

impl PermitHolder {
    /// Name and JMBG for display, or the bare identifier.
    pub fn label(&self) -> String {
        match self {
            PermitHolder::Id(id) => id.clone(),
            PermitHolder::Person(person) => {
                let name = format!("{} {}", person.first_name, person.last_name);
                match (name.trim(), person.jmbg.as_str()) {
                    ("", jmbg) => jmbg.to_string(),
                    (name, "") => name.to_string(),
                    (name, jmbg) => format!("{name} ({jmbg})"),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PermitPerson {
    pub first_name: String,
    pub last_name: String,
    pub jmbg: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrivingBan {
    #[serde(default)]
    pub id: String,
    pub reason: String,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDrivingBan {
    pub reason: String,
    pub duration: String,
    pub person: String,
}
