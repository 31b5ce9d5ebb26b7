pub mod role_selection;
pub mod splash;

pub use role_selection::RoleSelection;
pub use splash::SplashScreen;
