pub mod dto;
pub mod tabs;

pub use dto::{ReportDescriptor, ReportKind, SystemStats};
pub use tabs::AdminTab;
