use crate::domain::common::VendorId;
use crate::enums::VendorStanding;
use serde::{Deserialize, Serialize};

/// Показатели качества поставщика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorPerformance {
    pub id: VendorId,
    pub name: String,
    /// Доля принятых изделий, %
    pub pass_rate: f64,
    pub total_items: u32,
    pub standing: VendorStanding,
}

impl VendorPerformance {
    pub fn pass_rate_label(&self) -> String {
        format!("{:.1}% Pass Rate", self.pass_rate)
    }

    pub fn total_items_label(&self) -> String {
        format!("{} items", self.total_items)
    }
}
