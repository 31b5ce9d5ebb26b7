pub mod d100_vendor;
pub mod d200_inspector;
pub mod d300_admin;
pub mod tabs;

pub use tabs::{DashboardTab, TabSelector};
