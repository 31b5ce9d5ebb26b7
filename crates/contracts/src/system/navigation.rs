//! Контроллер экранов верхнего уровня: заставка, выбор роли, дашборд.

use crate::enums::UserRole;
use crate::system::auth::LoginRequest;

/// Экран верхнего уровня
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Splash,
    RoleSelection,
    Dashboard,
}

/// Состояние навигации. Роль задана тогда и только тогда, когда открыт дашборд.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    screen: Screen,
    role: Option<UserRole>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role
    }

    /// Роль открытого дашборда, если открыт дашборд
    pub fn active_dashboard(&self) -> Option<UserRole> {
        match self.screen {
            Screen::Dashboard => self.role,
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    GetStarted,
    Back,
    Login(LoginRequest),
    Logout,
}

/// Переходы, о которых узнаёт вызывающая сторона (для журнала)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ShowRoleSelection,
    ShowSplash,
    LoggedIn(LoginRequest),
    LoggedOut(UserRole),
}

/// Применить сообщение к состоянию навигации.
///
/// Сообщения, неуместные на текущем экране, игнорируются.
pub fn update(state: &mut AppState, message: Message) -> Event {
    match (state.screen, message) {
        (Screen::Splash, Message::GetStarted) => {
            state.screen = Screen::RoleSelection;
            Event::ShowRoleSelection
        }
        (Screen::RoleSelection, Message::Back) => {
            state.screen = Screen::Splash;
            Event::ShowSplash
        }
        (Screen::RoleSelection, Message::Login(request)) => {
            state.screen = Screen::Dashboard;
            state.role = Some(request.role);
            Event::LoggedIn(request)
        }
        (Screen::Dashboard, Message::Logout) => {
            state.screen = Screen::Splash;
            match state.role.take() {
                Some(role) => Event::LoggedOut(role),
                None => Event::ShowSplash,
            }
        }
        _ => Event::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::Credentials;

    fn login(role: UserRole) -> Message {
        Message::Login(LoginRequest {
            role,
            credentials: Credentials::new("user", "pass"),
        })
    }

    fn at_role_selection() -> AppState {
        let mut state = AppState::new();
        update(&mut state, Message::GetStarted);
        state
    }

    #[test]
    fn test_initial_state_is_splash() {
        let state = AppState::new();
        assert_eq!(state.screen(), Screen::Splash);
        assert_eq!(state.role(), None);
    }

    #[test]
    fn test_get_started_and_back() {
        let mut state = AppState::new();
        assert_eq!(update(&mut state, Message::GetStarted), Event::ShowRoleSelection);
        assert_eq!(state.screen(), Screen::RoleSelection);
        assert_eq!(update(&mut state, Message::Back), Event::ShowSplash);
        assert_eq!(state, AppState::new());
    }

    #[test]
    fn test_login_opens_dashboard_for_every_role() {
        for role in UserRole::all() {
            let mut state = at_role_selection();
            let event = update(&mut state, login(role));
            assert!(matches!(event, Event::LoggedIn(ref r) if r.role == role));
            assert_eq!(state.screen(), Screen::Dashboard);
            assert_eq!(state.active_dashboard(), Some(role));
        }
    }

    #[test]
    fn test_logout_returns_to_splash_and_clears_role() {
        for role in UserRole::all() {
            let mut state = at_role_selection();
            update(&mut state, login(role));
            assert_eq!(update(&mut state, Message::Logout), Event::LoggedOut(role));
            assert_eq!(state.screen(), Screen::Splash);
            assert_eq!(state.role(), None);
            assert_eq!(state.active_dashboard(), None);
        }
    }

    #[test]
    fn test_out_of_place_messages_are_ignored() {
        let mut state = AppState::new();
        assert_eq!(update(&mut state, Message::Logout), Event::None);
        assert_eq!(update(&mut state, Message::Back), Event::None);
        assert_eq!(update(&mut state, login(UserRole::Admin)), Event::None);
        assert_eq!(state, AppState::new());

        let mut state = at_role_selection();
        update(&mut state, login(UserRole::Vendor));
        let before = state.clone();
        assert_eq!(update(&mut state, Message::GetStarted), Event::None);
        assert_eq!(update(&mut state, Message::Back), Event::None);
        assert_eq!(update(&mut state, login(UserRole::Admin)), Event::None);
        assert_eq!(state, before);
    }
}
