//! Client-side input checks.
//!
//! Every submission form runs its input through one of the aggregate
//! validators below before anything is sent. A failure carries the message
//! shown to the user and never reaches [`ApiClient`](crate::ApiClient).
//! On success the aggregates hand back the wire record, so a caller cannot
//! send input that skipped validation.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::jwt::Role;
use crate::models::{Credentials, NewLegalEntity, NewPerson, PasswordReset, Sex};

type Pattern = LazyLock<Option<Regex>>;

static EMAIL: Pattern = LazyLock::new(|| Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").ok());
static NAME: Pattern = LazyLock::new(|| Regex::new(r"^[A-Za-z]+(?:['\s-][A-Za-z]+)*$").ok());
static TEXT_FIELD: Pattern = LazyLock::new(|| Regex::new(r"^[A-Za-z\s'-]+$").ok());
static STREET_NUMBER: Pattern = LazyLock::new(|| Regex::new(r"^\d+[A-Za-z]*$").ok());

fn matches(pattern: &Pattern, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

const MIN_PASSWORD_LEN: usize = 6;
const ADULT_AGE: i32 = 18;

/// Why a form was rejected before submission. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email format is not valid")]
    InvalidEmail,
    #[error("Password should include at least one uppercase letter, one number and lowercase letters")]
    WeakPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{0} format is not valid")]
    InvalidFormat(&'static str),
    #[error("Street number format is not valid, must include number and optionaly letters")]
    InvalidStreetNumber,
    #[error("JMBG format is not valid, 13 digits required")]
    InvalidJmbg,
    #[error("PIB format is not valid, 9 digits required")]
    InvalidPib,
    #[error("MB format is not valid, 8 digits required")]
    InvalidMb,
    #[error("Date of birth is not valid")]
    InvalidDate,
    #[error("You must be 18+ to register")]
    Underage,
    #[error("Please select {0}")]
    MissingChoice(&'static str),
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid year")]
    InvalidYear,
}

pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if matches(&EMAIL, email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// At least six characters with an uppercase letter and a digit.
pub fn check_password_strength(password: &str) -> Result<(), ValidationError> {
    let strong = password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit());
    if strong {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

pub fn check_passwords_match(password: &str, repeated: &str) -> Result<(), ValidationError> {
    if password == repeated {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}

/// A personal or company name: letters, optionally joined by `'`, `-` or spaces.
pub fn check_name(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if matches(&NAME, value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat(field))
    }
}

/// Free text such as citizenship or street name.
pub fn check_text_field(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if matches(&TEXT_FIELD, value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat(field))
    }
}

/// Street number: digits, optionally followed by letters (`12`, `12a`).
pub fn parse_street_number(value: &str) -> Result<u32, ValidationError> {
    if !matches(&STREET_NUMBER, value) {
        return Err(ValidationError::InvalidStreetNumber);
    }
    let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().map_err(|_| ValidationError::InvalidStreetNumber)
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn check_jmbg(jmbg: &str) -> Result<(), ValidationError> {
    if is_digits(jmbg, 13) {
        Ok(())
    } else {
        Err(ValidationError::InvalidJmbg)
    }
}

pub fn check_pib(pib: &str) -> Result<(), ValidationError> {
    if is_digits(pib, 9) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPib)
    }
}

pub fn check_mb(mb: &str) -> Result<(), ValidationError> {
    if is_digits(mb, 8) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMb)
    }
}

/// Parse a `YYYY-MM-DD` date of birth and require the holder to be at least
/// 18 on `today`.
pub fn check_adult(dob: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let dob = NaiveDate::parse_from_str(dob, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)?;
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    if age >= ADULT_AGE {
        Ok(dob)
    } else {
        Err(ValidationError::Underage)
    }
}

/// A four-digit year, as typed into the statistics forms.
pub fn parse_year(value: &str) -> Result<i32, ValidationError> {
    let value = value.trim();
    if !is_digits(value, 4) {
        return Err(ValidationError::InvalidYear);
    }
    value.parse().map_err(|_| ValidationError::InvalidYear)
}

pub fn validate_login(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    let email = email.trim();
    check_email(email)?;
    check_password_strength(password)?;
    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_recovery_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    check_email(email)?;
    Ok(email.to_string())
}

pub fn validate_password_reset(
    code: &str,
    new_password: &str,
    repeated: &str,
) -> Result<PasswordReset, ValidationError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(ValidationError::Required("Password reset code"));
    }
    check_passwords_match(new_password, repeated)?;
    check_password_strength(new_password)?;
    Ok(PasswordReset {
        password_reset_code: code.to_string(),
        new_password: new_password.to_string(),
    })
}

/// Address and account fields shared by both registration forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountInput {
    pub email: String,
    pub password: String,
    pub password_repeat: String,
    pub citizenship: String,
    pub municipality: String,
    pub locality: String,
    pub street_name: String,
    pub street_number: String,
}

struct CheckedAccount {
    email: String,
    street_number: u32,
}

fn validate_account(input: &AccountInput) -> Result<CheckedAccount, ValidationError> {
    let email = input.email.trim();
    check_email(email)?;
    check_password_strength(&input.password)?;
    check_text_field(&input.citizenship, "Citizenship")?;
    check_text_field(&input.municipality, "Municipality")?;
    check_text_field(&input.locality, "Locality")?;
    check_text_field(&input.street_name, "Street name")?;
    let street_number = parse_street_number(input.street_number.trim())?;
    check_passwords_match(&input.password, &input.password_repeat)?;
    Ok(CheckedAccount {
        email: email.to_string(),
        street_number,
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonInput {
    pub account: AccountInput,
    pub first_name: String,
    pub last_name: String,
    /// `MALE` or `FEMALE`.
    pub sex: String,
    pub dob: String,
    pub jmbg: String,
}

/// Check a citizen registration and build its request body.
pub fn validate_person(input: &PersonInput, today: NaiveDate) -> Result<NewPerson, ValidationError> {
    let account = validate_account(&input.account)?;
    check_name(&input.first_name, "First name")?;
    check_name(&input.last_name, "Last name")?;
    let dob = check_adult(&input.dob, today)?;
    check_jmbg(&input.jmbg)?;
    let sex = Sex::parse(&input.sex).ok_or(ValidationError::MissingChoice("sex"))?;

    let a = &input.account;
    Ok(NewPerson {
        email: account.email,
        password: a.password.clone(),
        first_name: input.first_name.clone(),
        last_name: input.last_name.clone(),
        sex,
        citizenship: a.citizenship.clone(),
        dob: dob.format("%Y-%m-%d").to_string(),
        jmbg: input.jmbg.clone(),
        role: Role::User,
        municipality: a.municipality.clone(),
        locality: a.locality.clone(),
        street_name: a.street_name.clone(),
        street_number: account.street_number,
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegalEntityInput {
    pub account: AccountInput,
    pub name: String,
    pub pib: String,
    pub mb: String,
}

/// Check a company registration and build its request body.
pub fn validate_legal_entity(input: &LegalEntityInput) -> Result<NewLegalEntity, ValidationError> {
    let account = validate_account(&input.account)?;
    check_name(&input.name, "Name")?;
    check_pib(&input.pib)?;
    check_mb(&input.mb)?;

    let a = &input.account;
    Ok(NewLegalEntity {
        email: account.email,
        password: a.password.clone(),
        name: input.name.clone(),
        citizenship: a.citizenship.clone(),
        pib: input.pib.clone(),
        mb: input.mb.clone(),
        role: Role::User,
        municipality: a.municipality.clone(),
        locality: a.locality.clone(),
        street_name: a.street_name.clone(),
        street_number: account.street_number,
    })
}
