use serde::{Deserialize, Serialize};

/// Оценка качества поставщика в панели администратора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStanding {
    Excellent,
    Good,
    Warning,
}

impl VendorStanding {
    pub fn code(&self) -> &'static str {
        match self {
            VendorStanding::Excellent => "excellent",
            VendorStanding::Good => "good",
            VendorStanding::Warning => "warning",
        }
    }

    pub fn badge_label(&self) -> String {
        self.code().to_uppercase()
    }
}
