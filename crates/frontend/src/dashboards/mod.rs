pub mod d100_vendor;
pub mod d200_inspector;
pub mod d300_admin;

pub use d100_vendor::ui::VendorDashboard;
pub use d200_inspector::ui::InspectorDashboard;
pub use d300_admin::ui::AdminDashboard;
