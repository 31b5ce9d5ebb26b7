use crate::domain::common::{LotNumber, VendorId};
use crate::enums::InspectionResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Завершённая проверка (история инспектора)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub id: String,
    pub lot_number: LotNumber,
    pub product: String,
    pub result: InspectionResult,
    pub date: NaiveDate,
    pub vendor_id: VendorId,
}

impl Inspection {
    pub fn is_pass(&self) -> bool {
        self.result.is_pass()
    }
}
