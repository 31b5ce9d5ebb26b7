use crate::enums::UserRole;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Логин и пароль из формы входа.
///
/// Данные нигде не проверяются и не передаются: вход имитируется.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Оба поля заполнены (пробелы считаются содержимым)
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Запрос на вход, который форма выбора роли передаёт наверх
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub role: UserRole,
    pub credentials: Credentials,
}

impl LoginRequest {
    /// JSON для журнала: пароль заменён звёздочками
    pub fn to_log_json(&self) -> serde_json::Value {
        serde_json::json!({
            "role": self.role,
            "credentials": {
                "username": self.credentials.username,
                "password": "***",
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete() {
        assert!(Credentials::new("inspector1", "secret").is_complete());
        assert!(Credentials::new(" ", " ").is_complete());
        assert!(!Credentials::new("", "secret").is_complete());
        assert!(!Credentials::new("inspector1", "").is_complete());
    }

    #[test]
    fn test_password_never_logged() {
        let request = LoginRequest {
            role: UserRole::Admin,
            credentials: Credentials::new("root", "hunter2"),
        };
        assert!(!format!("{:?}", request).contains("hunter2"));
        let json = request.to_log_json().to_string();
        assert!(!json.contains("hunter2"));
        assert!(json.contains("\"admin\""));
    }
}
