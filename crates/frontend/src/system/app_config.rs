use contracts::shared::config::{default_config, load_config, AppConfig};
use leptos::prelude::*;

/// Load the packaging config.
///
/// A TOML override can be baked in at build time through `RAIL_GUARD_APP_CONFIG`;
/// if it does not parse, the embedded default is used.
pub fn load_app_config() -> Result<AppConfig, String> {
    if let Some(override_toml) = option_env!("RAIL_GUARD_APP_CONFIG") {
        match load_config(Some(override_toml)) {
            Ok(config) => return Ok(config),
            Err(e) => log::warn!("Invalid RAIL_GUARD_APP_CONFIG, using default: {}", e),
        }
    }
    default_config().map_err(|e| format!("Failed to load default config: {}", e))
}

/// Set the browser tab title
pub fn apply_document_title(config: &AppConfig) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&config.app.title);
    }
}

/// Hook to access the app config
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in component tree")
}
