pub mod auth;
pub mod navigation;
pub mod role_selection;
