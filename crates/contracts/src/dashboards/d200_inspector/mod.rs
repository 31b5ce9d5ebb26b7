pub mod scanner;
pub mod tabs;

pub use scanner::{InspectionSubmission, ScannerState};
pub use tabs::InspectorTab;
