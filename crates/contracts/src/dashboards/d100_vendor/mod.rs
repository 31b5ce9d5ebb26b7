pub mod product_entry;
pub mod tabs;

pub use tabs::VendorTab;
