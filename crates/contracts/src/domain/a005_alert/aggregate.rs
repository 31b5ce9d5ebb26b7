use crate::enums::AlertSeverity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Источник системного уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Quality,
    Warranty,
    Inventory,
}

impl AlertKind {
    pub fn code(&self) -> &'static str {
        match self {
            AlertKind::Quality => "quality",
            AlertKind::Warranty => "warranty",
            AlertKind::Inventory => "inventory",
        }
    }
}

/// Системное уведомление для администратора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    pub severity: AlertSeverity,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_code_matches_serialized_type() {
        for kind in [AlertKind::Quality, AlertKind::Warranty, AlertKind::Inventory] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.code());
        }
    }
}
