//! Двухшаговая форма: выбор роли, затем логин и пароль.

use crate::enums::UserRole;
use crate::system::auth::{Credentials, LoginRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSelectionState {
    pub selected_role: Option<UserRole>,
    pub credentials: Credentials,
}

impl RoleSelectionState {
    /// Второй шаг (форма входа) открыт
    pub fn is_credentials_step(&self) -> bool {
        self.selected_role.is_some()
    }

    /// Запрос на вход, если форма заполнена полностью
    pub fn login_request(&self) -> Option<LoginRequest> {
        let role = self.selected_role?;
        if !self.credentials.is_complete() {
            return None;
        }
        Some(LoginRequest {
            role,
            credentials: self.credentials.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    PickRole(UserRole),
    /// Назад со второго шага к списку ролей
    ClearRole,
    /// Назад с первого шага на заставку
    Back,
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    BackToSplash,
    Login(LoginRequest),
}

pub fn update(state: &mut RoleSelectionState, message: Message) -> Event {
    match message {
        Message::PickRole(role) => {
            state.selected_role = Some(role);
            Event::None
        }
        Message::ClearRole => {
            state.selected_role = None;
            Event::None
        }
        Message::Back => {
            if state.is_credentials_step() {
                state.selected_role = None;
                Event::None
            } else {
                Event::BackToSplash
            }
        }
        Message::UsernameChanged(value) => {
            state.credentials.username = value;
            Event::None
        }
        Message::PasswordChanged(value) => {
            state.credentials.password = value;
            Event::None
        }
        Message::Submit => match state.login_request() {
            Some(request) => Event::Login(request),
            None => Event::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(state: &mut RoleSelectionState, username: &str, password: &str) {
        update(state, Message::UsernameChanged(username.into()));
        update(state, Message::PasswordChanged(password.into()));
    }

    #[test]
    fn test_submit_with_role_and_credentials_emits_login() {
        for role in UserRole::all() {
            let mut state = RoleSelectionState::default();
            update(&mut state, Message::PickRole(role));
            fill(&mut state, "user", "pass");
            assert_eq!(
                update(&mut state, Message::Submit),
                Event::Login(LoginRequest {
                    role,
                    credentials: Credentials::new("user", "pass"),
                })
            );
        }
    }

    #[test]
    fn test_submit_with_empty_field_does_nothing() {
        let mut state = RoleSelectionState::default();
        update(&mut state, Message::PickRole(UserRole::Vendor));

        fill(&mut state, "", "pass");
        assert_eq!(update(&mut state, Message::Submit), Event::None);

        fill(&mut state, "user", "");
        assert_eq!(update(&mut state, Message::Submit), Event::None);

        fill(&mut state, "", "");
        assert_eq!(update(&mut state, Message::Submit), Event::None);
    }

    #[test]
    fn test_submit_without_role_does_nothing() {
        let mut state = RoleSelectionState::default();
        fill(&mut state, "user", "pass");
        assert_eq!(update(&mut state, Message::Submit), Event::None);
    }

    #[test]
    fn test_back_steps() {
        let mut state = RoleSelectionState::default();
        update(&mut state, Message::PickRole(UserRole::Admin));
        fill(&mut state, "user", "pass");

        assert_eq!(update(&mut state, Message::Back), Event::None);
        assert!(!state.is_credentials_step());
        // введённые данные сохраняются
        assert_eq!(state.credentials.username, "user");

        assert_eq!(update(&mut state, Message::Back), Event::BackToSplash);
    }

    #[test]
    fn test_clear_role() {
        let mut state = RoleSelectionState::default();
        update(&mut state, Message::PickRole(UserRole::Inspector));
        assert!(state.is_credentials_step());
        update(&mut state, Message::ClearRole);
        assert_eq!(state.selected_role, None);
    }
}
