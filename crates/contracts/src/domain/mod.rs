pub mod a001_batch;
pub mod a002_inspection;
pub mod a003_scanned_item;
pub mod a004_vendor_performance;
pub mod a005_alert;
pub mod a006_product_entry;
pub mod common;
