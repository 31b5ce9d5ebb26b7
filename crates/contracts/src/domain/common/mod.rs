//! Общие типы для всех записей предметной области

pub mod ids;
pub mod warranty;

pub use ids::{LotNumber, VendorId};
pub use warranty::WarrantyPeriod;
