mod dashboard;
mod history;
mod scanner;

pub use dashboard::InspectorDashboard;
