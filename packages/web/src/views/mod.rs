mod section;

mod layout;
pub use layout::PortalLayout;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod password;
pub use password::{PasswordRecovery, PasswordReset};

mod home;
pub use home::Home;

mod mup;
pub use mup::Mup;

mod police;
pub use police::Police;

mod court;
pub use court::Court;

mod statistics;
pub use statistics::Statistics;

mod not_found;
pub use not_found::NotFound;
