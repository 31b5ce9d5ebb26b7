use crate::domain::common::{LotNumber, VendorId, WarrantyPeriod};
use serde::{Deserialize, Serialize};

/// Поставщик, под которым работает форма (поле только для чтения)
pub const DEFAULT_VENDOR_ID: &str = "VND-001";

/// Черновик формы "New Product Entry".
///
/// Поля хранятся строками, как их ввёл пользователь; разбор происходит
/// только при проверке и отправке.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntryDraft {
    pub lot_number: String,
    pub product_type: String,
    pub quantity: String,
    /// ISO дата из `<input type="date">`, может быть пустой
    pub mfg_date: String,
    pub warranty_years: String,
    pub vendor_id: VendorId,
    pub specifications: String,
}

impl Default for ProductEntryDraft {
    fn default() -> Self {
        Self {
            lot_number: String::new(),
            product_type: String::new(),
            quantity: String::new(),
            mfg_date: String::new(),
            warranty_years: String::new(),
            vendor_id: VendorId::new(DEFAULT_VENDOR_ID),
            specifications: String::new(),
        }
    }
}

impl ProductEntryDraft {
    /// Количество, если введено положительное целое
    pub fn parsed_quantity(&self) -> Option<u32> {
        self.quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|q| *q > 0)
    }

    pub fn parsed_lot_number(&self) -> Option<LotNumber> {
        LotNumber::from_string(&self.lot_number).ok()
    }

    pub fn parsed_warranty(&self) -> Option<WarrantyPeriod> {
        self.warranty_years
            .trim()
            .parse::<u32>()
            .ok()
            .map(WarrantyPeriod::years)
    }

    /// Гарантия не указана либо указана целым числом лет
    pub fn has_valid_warranty(&self) -> bool {
        self.warranty_years.trim().is_empty() || self.parsed_warranty().is_some()
    }

    /// Можно ли отправить форму ("Generate QR & Submit")
    pub fn is_submittable(&self) -> bool {
        self.parsed_lot_number().is_some()
            && !self.product_type.trim().is_empty()
            && self.parsed_quantity().is_some()
            && self.has_valid_warranty()
    }

    /// JSON для журнала: введённые строки и разобранные значения
    pub fn to_log_json(&self) -> serde_json::Value {
        serde_json::json!({
            "lot_number": self.lot_number.trim(),
            "product_type": self.product_type.trim(),
            "quantity": self.parsed_quantity(),
            "mfg_date": self.mfg_date,
            "warranty_years": self.parsed_warranty().map(|w| w.years),
            "vendor_id": self.vendor_id.as_str(),
            "specifications": self.specifications,
        })
    }

    /// Очистить форму, сохранив поставщика
    pub fn reset(&mut self) {
        let vendor_id = self.vendor_id.clone();
        *self = Self {
            vendor_id,
            ..Self::default()
        };
    }
}
