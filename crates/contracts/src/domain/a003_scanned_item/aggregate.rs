use crate::domain::common::{LotNumber, VendorId, WarrantyPeriod};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Данные, полученные при (имитированном) сканировании QR-кода изделия
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedItem {
    pub lot_number: LotNumber,
    pub vendor_id: VendorId,
    pub product: String,
    pub mfg_date: NaiveDate,
    pub warranty_period: WarrantyPeriod,
    pub specifications: String,
}

impl ScannedItem {
    pub fn warranty_expires_on(&self) -> Option<NaiveDate> {
        self.warranty_period.expires_on(self.mfg_date)
    }

    /// Гарантия истекла на указанную дату (день окончания ещё считается действующим)
    pub fn is_warranty_expired(&self, today: NaiveDate) -> bool {
        self.warranty_expires_on()
            .map(|expires| today > expires)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ScannedItem {
        ScannedItem {
            lot_number: LotNumber::new("LOT-2024-004"),
            vendor_id: VendorId::new("VND-001"),
            product: "Track Clips".into(),
            mfg_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            warranty_period: WarrantyPeriod::years(5),
            specifications: "spec".into(),
        }
    }

    #[test]
    fn test_warranty_expiry() {
        let item = item();
        let expires = NaiveDate::from_ymd_opt(2029, 1, 10).unwrap();
        assert_eq!(item.warranty_expires_on(), Some(expires));
        assert!(!item.is_warranty_expired(expires));
        assert!(item.is_warranty_expired(expires.succ_opt().unwrap()));
    }
}
