pub mod app_config;
pub mod pages;
pub mod session;
