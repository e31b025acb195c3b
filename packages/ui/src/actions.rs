//! Submission flows behind the portal's forms.
//!
//! Each flow reads the submitted [`FormValues`], validates them, and only
//! then calls the backend. Nothing here touches the UI, so pages wrap these
//! in [`run_mutation`](crate::workflow::run_mutation) or handle the result
//! themselves.

use api::models::{BrandCount, CheckAll, CheckOutcome, DriverCheck, NewHearing, TireType, YearlyCounts};
use api::models::{NewDrivingBan, NewSuspension, NewVehicle, NewWarrant};
use api::models::{AlcoholLevelCheck, TireCheck, VehicleRegistrationCheck};
use api::validation::{self, AccountInput, LegalEntityInput, PersonInput, ValidationError};
use api::{ApiClient, ApiError, Identity};
use chrono::NaiveDate;

use crate::forms::{FormError, FormValues};

/// Shown for every rejected login, whatever the service said.
pub const LOGIN_FAILED: &str = "Failed to log in.\nCheck credentials or activate your account";

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ActionError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Whether the request was never sent.
    pub fn is_client_side(&self) -> bool {
        !matches!(self, ActionError::Api(_))
    }
}

pub async fn login(client: &ApiClient, values: &FormValues) -> Result<Identity, ActionError> {
    let credentials = validation::validate_login(values.text("email")?, values.text("password")?)?;
    client.sso().login(&credentials).await.map_err(|e| {
        tracing::warn!("Login rejected: {}", e);
        ActionError::Api(e)
    })
}

/// Text for the login page: validation problems are shown as they are, any
/// rejection by the service collapses to [`LOGIN_FAILED`].
pub fn login_failure_message(error: &ActionError) -> String {
    match error {
        ActionError::Api(_) => LOGIN_FAILED.to_string(),
        other => other.user_message(),
    }
}

fn account_input(values: &FormValues) -> Result<AccountInput, FormError> {
    Ok(AccountInput {
        email: values.text("email")?.to_string(),
        password: values.text("password")?.to_string(),
        password_repeat: values.text("passwordRepeat")?.to_string(),
        citizenship: values.text("citizenship")?.to_string(),
        municipality: values.text("municipality")?.to_string(),
        locality: values.text("locality")?.to_string(),
        street_name: values.text("streetName")?.to_string(),
        street_number: values.text("streetNumber")?.to_string(),
    })
}

/// Register a citizen. `today` decides the 18+ check.
pub async fn register_person(client: &ApiClient, values: &FormValues, today: NaiveDate) -> Result<(), ActionError> {
    let input = PersonInput {
        account: account_input(values)?,
        first_name: values.text("firstName")?.to_string(),
        last_name: values.text("lastName")?.to_string(),
        sex: values.text("sex")?.to_string(),
        dob: values.text("dob")?.to_string(),
        jmbg: values.text("jmbg")?.to_string(),
    };
    let person = validation::validate_person(&input, today)?;
    client.sso().register_person(&person).await?;
    Ok(())
}

pub async fn register_legal_entity(client: &ApiClient, values: &FormValues) -> Result<(), ActionError> {
    let input = LegalEntityInput {
        account: account_input(values)?,
        name: values.text("name")?.to_string(),
        pib: values.text("pib")?.to_string(),
        mb: values.text("mb")?.to_string(),
    };
    let entity = validation::validate_legal_entity(&input)?;
    client.sso().register_legal_entity(&entity).await?;
    Ok(())
}

pub async fn recover_password(client: &ApiClient, values: &FormValues) -> Result<(), ActionError> {
    let email = validation::validate_recovery_email(values.text("email")?)?;
    client.sso().recover_password(&email).await?;
    Ok(())
}

pub async fn reset_password(client: &ApiClient, values: &FormValues) -> Result<(), ActionError> {
    let reset = validation::validate_password_reset(
        values.text("passwordResetCode")?,
        values.text("newPassword")?,
        values.text("confirmNewPassword")?,
    )?;
    client.sso().reset_password(&reset).await?;
    Ok(())
}

pub async fn registered_vehicles_for_year(client: &ApiClient, values: &FormValues) -> Result<u64, ActionError> {
    let year = validation::parse_year(values.text("year")?)?;
    Ok(client.statistics().registered_vehicles(year).await?)
}

pub async fn most_popular_brands_for_year(
    client: &ApiClient,
    values: &FormValues,
) -> Result<Vec<BrandCount>, ActionError> {
    let year = validation::parse_year(values.text("year")?)?;
    Ok(client.statistics().most_popular_brands(year).await?)
}

pub async fn traffic_violations_report_for_year(
    client: &ApiClient,
    values: &FormValues,
) -> Result<YearlyCounts, ActionError> {
    let year = validation::parse_year(values.text("year")?)?;
    Ok(client.statistics().traffic_violations_report(year).await?)
}

/// Party choices offered by the hearing form.
pub const PARTY_PERSON: &str = "Person";
pub const PARTY_LEGAL_ENTITY: &str = "Legal entity";

pub async fn create_hearing(client: &ApiClient, values: &FormValues) -> Result<(), ActionError> {
    let reason = required(values, "reason", "Reason")?;
    let court = required(values, "court", "Court")?;
    let date_time = required(values, "dateTime", "Date and time")?;
    let party_id = values.text("party")?.trim().to_string();

    let (person, legal_entity) = match values.text("partyKind")? {
        PARTY_PERSON => {
            validation::check_jmbg(&party_id)?;
            (Some(party_id), None)
        }
        PARTY_LEGAL_ENTITY => {
            validation::check_pib(&party_id)?;
            (None, Some(party_id))
        }
        _ => return Err(ValidationError::MissingChoice("a party").into()),
    };

    let hearing = NewHearing {
        reason,
        date_time: with_seconds(&date_time),
        court,
        person,
        legal_entity,
    };
    client.court().create_hearing(&hearing).await?;
    Ok(())
}

pub async fn create_warrant(client: &ApiClient, values: &FormValues) -> Result<(), ActionError> {
    let issued_for = values.text("issuedFor")?.trim().to_string();
    validation::check_jmbg(&issued_for)?;
    let warrant = NewWarrant {
        traffic_violation: required(values, "trafficViolation", "Traffic violation")?,
        issued_for,
    };
    client.court().create_warrant(&warrant).await?;
    Ok(())
}

/// Suspend a person's licence between two dates, `from` not after `to`.
pub async fn create_suspension(client: &ApiClient, values: &FormValues) -> Result<(), ActionError> {
    let person = values.text("person")?.trim().to_string();
    validation::check_jmbg(&person)?;
    let from = date(values, "from", "From")?;
    let to = date(values, "to", "To")?;
    if to < from {
        return Err(ValidationError::InvalidFormat("Suspension period").into());
    }
    let suspension = NewSuspension {
        from: from.to_string(),
        to: to.to_string(),
        person,
    };
    client.court().create_suspension(&suspension).await?;
    Ok(())
}

pub async fn save_vehicle(client: &ApiClient, values: &FormValues) -> Result<(), ActionError> {
    let owner = values.text("owner")?.trim().to_string();
    validation::check_jmbg(&owner)?;
    let vehicle = NewVehicle {
        brand: required(values, "brand", "Brand")?,
        model: required(values, "model", "Model")?,
        year: validation::parse_year(values.text("year")?)?,
        owner,
    };
    client.mup().save_vehicle(&vehicle).await?;
    Ok(())
}

pub async fn issue_driving_ban(client: &ApiClient, values: &FormValues) -> Result<(), ActionError> {
    let person = values.text("person")?.trim().to_string();
    validation::check_jmbg(&person)?;
    let ban = NewDrivingBan {
        reason: required(values, "reason", "Reason")?,
        duration: required(values, "duration", "Duration")?,
        person,
    };
    client.mup().issue_driving_ban(&ban).await?;
    Ok(())
}

fn required(values: &FormValues, name: &str, label: &'static str) -> Result<String, ActionError> {
    let value = values.text(name)?.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(label).into());
    }
    Ok(value.to_string())
}

fn date(values: &FormValues, name: &str, label: &'static str) -> Result<NaiveDate, ActionError> {
    let value = required(values, name, label)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat(label).into())
}

/// `datetime-local` inputs yield `2024-06-07T10:30`; the services expect an
/// RFC 3339 timestamp.
pub fn with_seconds(local: &str) -> String {
    match local.len() {
        16 => format!("{local}:00Z"),
        19 => format!("{local}Z"),
        _ => local.to_string(),
    }
}

/// The six roadside checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoliceCheck {
    AlcoholLevel,
    VehicleTire,
    DriverBan,
    DriverPermit,
    VehicleRegistration,
    All,
}

impl PoliceCheck {
    pub const ALL: [PoliceCheck; 6] = [
        PoliceCheck::AlcoholLevel,
        PoliceCheck::VehicleTire,
        PoliceCheck::DriverBan,
        PoliceCheck::DriverPermit,
        PoliceCheck::VehicleRegistration,
        PoliceCheck::All,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PoliceCheck::AlcoholLevel => "Check alcohol level",
            PoliceCheck::VehicleTire => "Check vehicle tires",
            PoliceCheck::DriverBan => "Check driver ban",
            PoliceCheck::DriverPermit => "Check driver permit validity",
            PoliceCheck::VehicleRegistration => "Check vehicle registration",
            PoliceCheck::All => "Run all checks",
        }
    }

    /// Message shown when the service answered without one.
    pub fn success_message(self) -> &'static str {
        match self {
            PoliceCheck::AlcoholLevel => "Alcohol level checked successfully",
            PoliceCheck::VehicleTire => "Vehicle tire checked successfully",
            PoliceCheck::DriverBan => "Driver ban status checked successfully",
            PoliceCheck::DriverPermit => "Driver permit status checked successfully",
            PoliceCheck::VehicleRegistration => "Vehicle registration checked successfully",
            PoliceCheck::All => "Driver checked successfully",
        }
    }
}

fn alcohol_level(values: &FormValues) -> Result<f64, ActionError> {
    values
        .text("alcoholLevel")?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|level| level.is_finite() && *level >= 0.0)
        .ok_or_else(|| ValidationError::InvalidFormat("Alcohol level").into())
}

fn tire_type(values: &FormValues) -> Result<TireType, ActionError> {
    TireType::parse(values.text("tireType")?).ok_or_else(|| ValidationError::MissingChoice("a tire type").into())
}

/// Run one roadside check against the driver named in `values`.
pub async fn check_driver(
    client: &ApiClient,
    check: PoliceCheck,
    values: &FormValues,
) -> Result<CheckOutcome, ActionError> {
    let jmbg = values.text("jmbg")?.trim().to_string();
    validation::check_jmbg(&jmbg)?;
    let location = required(values, "location", "Location")?;
    let police = client.police();

    let outcome = match check {
        PoliceCheck::AlcoholLevel => {
            let body = AlcoholLevelCheck {
                alcohol_level: alcohol_level(values)?,
                jmbg,
                location,
            };
            police.check_alcohol_level(&body).await?
        }
        PoliceCheck::VehicleTire => {
            let body = TireCheck {
                tire_type: tire_type(values)?,
                jmbg,
                location,
            };
            police.check_vehicle_tire(&body).await?
        }
        PoliceCheck::DriverBan => police.check_driver_ban(&DriverCheck { jmbg, location }).await?,
        PoliceCheck::DriverPermit => police.check_driver_permit(&DriverCheck { jmbg, location }).await?,
        PoliceCheck::VehicleRegistration => {
            let body = VehicleRegistrationCheck {
                jmbg,
                location,
                plates_number: required(values, "platesNumber", "Plates number")?,
            };
            police.check_vehicle_registration(&body).await?
        }
        PoliceCheck::All => {
            let body = CheckAll {
                alcohol_level: alcohol_level(values)?,
                tire: tire_type(values)?,
                plates_number: required(values, "platesNumber", "Plates number")?,
                jmbg,
                location,
            };
            police.check_all(&body).await?
        }
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormField;

    pub(crate) fn values(pairs: &[(&str, &str)]) -> FormValues {
        let fields: Vec<_> = pairs.iter().map(|(name, _)| FormField::text(name, name)).collect();
        let mut values = FormValues::from_fields(&fields).unwrap();
        for (name, value) in pairs {
            values.set_text(name, *value).unwrap();
        }
        values
    }

    #[test]
    fn test_with_seconds() {
        assert_eq!(with_seconds("2024-06-07T10:30"), "2024-06-07T10:30:00Z");
        assert_eq!(with_seconds("2024-06-07T10:30:15"), "2024-06-07T10:30:15Z");
        assert_eq!(with_seconds("2024-06-07T10:30:00Z"), "2024-06-07T10:30:00Z");
    }

    #[test]
    fn test_alcohol_level_parse() {
        assert_eq!(alcohol_level(&values(&[("alcoholLevel", "0.5")])).unwrap(), 0.5);
        let err = alcohol_level(&values(&[("alcoholLevel", "-1")])).unwrap_err();
        assert_eq!(err.user_message(), "Alcohol level format is not valid");
        assert!(err.is_client_side());
    }

    #[test]
    fn test_date_requires_iso_format() {
        let parsed = date(&values(&[("from", "2024-06-07")]), "from", "From").unwrap();
        assert_eq!(parsed.to_string(), "2024-06-07");
        let err = date(&values(&[("from", "07.06.2024.")]), "from", "From").unwrap_err();
        assert_eq!(err.user_message(), "From format is not valid");
    }

    #[test]
    fn test_missing_field_is_form_error() {
        let err = tire_type(&values(&[])).unwrap_err();
        assert!(matches!(err, ActionError::Form(FormError::MissingField(_))));
    }
}
