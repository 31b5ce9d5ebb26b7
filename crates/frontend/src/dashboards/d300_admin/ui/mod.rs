mod alerts;
mod dashboard;
mod overview;
mod reports;

pub use dashboard::AdminDashboard;
