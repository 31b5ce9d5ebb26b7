//! Application Shell - picks the top-level screen.
//!
//! Exactly one of: splash, role selection, or the dashboard of the active role.

use crate::dashboards::{AdminDashboard, InspectorDashboard, VendorDashboard};
use crate::system::pages::{RoleSelection, SplashScreen};
use crate::system::session::use_session;
use contracts::enums::UserRole;
use contracts::system::auth::LoginRequest;
use contracts::system::navigation::{Message, Screen};
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_session();
    let current = Memo::new(move |_| {
        session
            .state
            .with(|s| (s.screen(), s.active_dashboard()))
    });

    let on_get_started = Callback::new(move |_: ()| session.dispatch(Message::GetStarted));
    let on_back = Callback::new(move |_: ()| session.dispatch(Message::Back));
    let on_login = Callback::new(move |request: LoginRequest| session.dispatch(Message::Login(request)));
    let on_logout = Callback::new(move |_: ()| session.dispatch(Message::Logout));

    move || match current.get() {
        (Screen::RoleSelection, _) => view! {
            <RoleSelection on_back=on_back on_login=on_login />
        }
        .into_any(),
        (Screen::Dashboard, Some(UserRole::Vendor)) => view! {
            <VendorDashboard on_logout=on_logout />
        }
        .into_any(),
        (Screen::Dashboard, Some(UserRole::Inspector)) => view! {
            <InspectorDashboard on_logout=on_logout />
        }
        .into_any(),
        (Screen::Dashboard, Some(UserRole::Admin)) => view! {
            <AdminDashboard on_logout=on_logout />
        }
        .into_any(),
        (Screen::Splash, _) | (Screen::Dashboard, None) => view! {
            <SplashScreen on_get_started=on_get_started />
        }
        .into_any(),
    }
}
