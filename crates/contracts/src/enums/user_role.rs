use serde::{Deserialize, Serialize};
use std::fmt;

/// Роль пользователя. Определяет, какой дашборд будет открыт после входа.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Vendor,
    Inspector,
    Admin,
}

impl UserRole {
    /// Получить код роли
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Vendor => "vendor",
            UserRole::Inspector => "inspector",
            UserRole::Admin => "admin",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Vendor => "Vendor",
            UserRole::Inspector => "Inspector",
            UserRole::Admin => "Admin",
        }
    }

    /// Краткое описание роли для карточки выбора
    pub fn description(&self) -> &'static str {
        match self {
            UserRole::Vendor => "Product entry and batch management",
            UserRole::Inspector => "QR scanning and quality inspection",
            UserRole::Admin => "System monitoring and reporting",
        }
    }

    /// Получить все роли в порядке отображения
    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Vendor, UserRole::Inspector, UserRole::Admin]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "vendor" => Some(UserRole::Vendor),
            "inspector" => Some(UserRole::Inspector),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_every_role() {
        for role in UserRole::all() {
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(UserRole::from_code("operator"), None);
        assert_eq!(UserRole::from_code("Vendor"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&UserRole::Inspector).unwrap();
        assert_eq!(json, "\"inspector\"");
    }
}
