use crate::shared::reducer::apply;
use contracts::system::navigation::{self, AppState, Event, Message};
use leptos::prelude::*;

/// Navigation state shared by the whole app: current screen and active role.
///
/// Nothing is persisted; a reload always starts on the splash screen.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<AppState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AppState::new()),
        }
    }

    pub fn dispatch(&self, message: Message) {
        let event = apply(self.state, |state| navigation::update(state, message));
        log_event(&event);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

fn log_event(event: &Event) {
    match event {
        Event::None => {}
        Event::ShowRoleSelection => log::debug!("navigation: role selection"),
        Event::ShowSplash => log::debug!("navigation: splash"),
        // вход имитируется: учётные данные не проверяются
        Event::LoggedIn(request) => log::info!("Login attempted: {}", request.to_log_json()),
        Event::LoggedOut(role) => log::info!("Logged out from {} dashboard", role),
    }
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
