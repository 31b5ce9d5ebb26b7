mod batches;
mod dashboard;
mod product_entry;

pub use dashboard::VendorDashboard;
