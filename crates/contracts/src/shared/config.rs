use serde::Deserialize;

/// Параметры упаковки приложения (название, заставка при запуске)
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub splash: SplashConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub id: String,
    pub name: String,
    /// Каталог собранного веб-приложения
    pub web_dir: String,
    /// Заголовок вкладки браузера
    pub title: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SplashConfig {
    pub launch_show_duration_ms: u32,
    pub background_color: String,
    pub android_splash_resource_name: String,
    pub android_scale_type: String,
    pub show_spinner: bool,
    pub full_screen: bool,
    pub immersive: bool,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r##"
[app]
id = "app.railguard.iq"
name = "rail-guard-iq"
web_dir = "dist"
title = "Railway Track Inspector"

[splash]
launch_show_duration_ms = 2000
background_color = "#1e3a8a"
android_splash_resource_name = "splash"
android_scale_type = "CENTER_CROP"
show_spinner = false
full_screen = true
immersive = true
"##;

/// Load configuration
///
/// Parses `override_toml` when given, otherwise the embedded default.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    let source = override_toml.unwrap_or(DEFAULT_CONFIG);
    let config: AppConfig = toml::from_str(source)?;
    validate(&config)?;
    Ok(config)
}

/// Embedded default configuration
pub fn default_config() -> anyhow::Result<AppConfig> {
    load_config(None)
}

fn validate(config: &AppConfig) -> anyhow::Result<()> {
    if config.app.name.trim().is_empty() {
        anyhow::bail!("app.name must not be empty");
    }
    let color = &config.splash.background_color;
    let is_hex = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !is_hex {
        anyhow::bail!("splash.background_color must be #RRGGBB, got {:?}", color);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.app.id, "app.railguard.iq");
        assert_eq!(config.app.name, "rail-guard-iq");
        assert_eq!(config.app.web_dir, "dist");
        assert_eq!(config.splash.launch_show_duration_ms, 2000);
        assert_eq!(config.splash.background_color, "#1e3a8a");
        assert!(!config.splash.show_spinner);
    }

    #[test]
    fn test_override() {
        let toml = DEFAULT_CONFIG.replace("rail-guard-iq", "rail-guard-staging");
        let config = load_config(Some(&toml)).unwrap();
        assert_eq!(config.app.name, "rail-guard-staging");
    }

    #[test]
    fn test_missing_section_fails() {
        assert!(load_config(Some("[app]\nid = \"x\"")).is_err());
    }

    #[test]
    fn test_bad_color_fails() {
        let toml = DEFAULT_CONFIG.replace("#1e3a8a", "navy");
        let err = load_config(Some(&toml)).unwrap_err();
        assert!(err.to_string().contains("background_color"));
    }
}
