//! Reusable list and record views.

mod list;
mod ping;
mod record;

pub use list::{ActionEvent, EmptyState, ListAction, RecordCardView, RecordList};
pub use ping::PingButton;
pub use record::{cards_of, Card, Record};
