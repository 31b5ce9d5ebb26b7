pub mod record_card;
pub mod stat_card;
pub mod ui;

pub use record_card::RecordCard;
pub use stat_card::StatCard;
