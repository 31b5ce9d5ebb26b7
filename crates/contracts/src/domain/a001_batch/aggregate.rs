use crate::enums::BatchStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Партия продукции поставщика (отчёт "My Batches")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: String,
    pub product: String,
    pub quantity: u32,
    pub date: NaiveDate,
    pub status: BatchStatus,
}

impl Batch {
    pub fn new(
        id: impl Into<String>,
        product: impl Into<String>,
        quantity: u32,
        date: NaiveDate,
        status: BatchStatus,
    ) -> Self {
        Self {
            id: id.into(),
            product: product.into(),
            quantity,
            date,
            status,
        }
    }

    /// Подпись количества: "Qty: 500"
    pub fn quantity_label(&self) -> String {
        format!("Qty: {}", self.quantity)
    }
}
