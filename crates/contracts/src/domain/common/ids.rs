use serde::{Deserialize, Serialize};
use std::fmt;

/// Идентификатор поставщика, например `VND-001`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(String);

impl VendorId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Создать ID из строки (пустая строка недопустима)
    pub fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Vendor ID must not be empty".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Номер производственной партии (лота), например `LOT-2024-004`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LotNumber(String);

impl LotNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Lot number must not be empty".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for LotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_trims() {
        assert_eq!(VendorId::from_string("  VND-002 ").unwrap().as_str(), "VND-002");
        assert_eq!(LotNumber::from_string("LOT-2024-001").unwrap().to_string(), "LOT-2024-001");
    }

    #[test]
    fn test_from_string_rejects_blank() {
        assert!(VendorId::from_string("   ").is_err());
        assert!(LotNumber::from_string("").is_err());
    }

    #[test]
    fn test_serialized_as_plain_string() {
        let json = serde_json::to_string(&VendorId::new("VND-001")).unwrap();
        assert_eq!(json, "\"VND-001\"");
    }
}
