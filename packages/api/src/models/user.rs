use serde::{Deserialize, Serialize};

use crate::jwt::Role;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserToken {
    pub token: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const OPTIONS: [&'static str; 2] = ["MALE", "FEMALE"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MALE" => Some(Sex::Male),
            "FEMALE" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Citizen registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub sex: Sex,
    pub citizenship: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,
    pub jmbg: String,
    pub role: Role,
    pub municipality: String,
    pub locality: String,
    pub street_name: String,
    pub street_number: u32,
}

/// Company registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewLegalEntity {
    pub email: String,
    pub password: String,
    pub name: String,
    pub citizenship: String,
    /// Tax identification number, 9 digits.
    pub pib: String,
    /// Registration number, 8 digits.
    pub mb: String,
    pub role: Role,
    pub municipality: String,
    pub locality: String,
    pub street_name: String,
    pub street_number: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordRecovery {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    pub password_reset_code: String,
    pub new_password: String,
}
