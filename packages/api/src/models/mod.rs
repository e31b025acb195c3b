//! Wire records exchanged with the backend services.
//!
//! Every record is flat, camelCase on the wire, and owned by the server: the
//! client only displays what it received and requests transitions
//! (create/approve/decline/reschedule), then re-fetches.

pub mod court;
pub mod mup;
pub mod police;
pub mod statistics;
pub mod user;

pub use court::{CourtHearing, NewHearing, NewSuspension, NewWarrant, RescheduleHearing, Suspension, Warrant};
pub use mup::{DrivingBan, DrivingPermit, NewDrivingBan, NewVehicle, PermitHolder, PermitPerson, Registration, Vehicle};
pub use police::{
    AlcoholLevelCheck, CheckAll, CheckOutcome, DriverCheck, TireCheck, TireType, TrafficViolation,
    VehicleRegistrationCheck,
};
pub use statistics::{BrandCount, RegisteredVehicles, TrafficStatistic, YearlyCounts};
pub use user::{Credentials, NewLegalEntity, NewPerson, PasswordRecovery, PasswordReset, Sex, UserToken};

/// Render a wire timestamp the way the portal shows dates:
/// `2024-06-07T10:30:00Z` → `2024-06-07 10:30:00`.
pub fn display_timestamp(raw: &str) -> String {
    raw.replacen('T', " ", 1).trim_end_matches('Z').to_string()
}
