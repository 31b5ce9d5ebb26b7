pub mod alert_severity;
pub mod batch_status;
pub mod inspection_result;
pub mod user_role;
pub mod vendor_standing;

pub use alert_severity::AlertSeverity;
pub use batch_status::BatchStatus;
pub use inspection_result::InspectionResult;
pub use user_role::UserRole;
pub use vendor_standing::VendorStanding;
