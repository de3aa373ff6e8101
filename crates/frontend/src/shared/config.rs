use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub editor: EditorConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix for every request. Empty means same origin, which is how the
    /// dev server proxies the records service.
    pub base: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EditorConfig {
    /// Pause between a successful update and the return to the list
    pub redirect_delay_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base = ""

[editor]
redirect_delay_ms = 1500
"#;

/// localStorage key that overrides `api.base` at runtime
pub const API_BASE_STORAGE_KEY: &str = "employee_intake.api_base";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Configuration for this page load. The first call reads it; later calls
/// reuse that result, so a changed localStorage value needs a reload.
pub fn config() -> &'static AppConfig {
    cached(&CONFIG, load_config)
}

fn cached(cell: &'static OnceCell<AppConfig>, load: impl FnOnce() -> AppConfig) -> &'static AppConfig {
    cell.get_or_init(load)
}

/// Load the embedded configuration and apply browser overrides.
///
/// Falls back to the built-in values if the document does not parse.
pub fn load_config() -> AppConfig {
    let mut config = parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::warn!("Embedded config is invalid ({}), using built-in values", e);
        AppConfig::builtin()
    });
    if let Some(base) = stored_api_base() {
        log::info!("Using API base from localStorage: {}", base);
        config.api.base = base;
    }
    config
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(contents)?;
    config.api.base = config.api.base.trim().trim_end_matches('/').to_string();
    Ok(config)
}

impl AppConfig {
    fn builtin() -> Self {
        Self {
            api: ApiConfig {
                base: String::new(),
            },
            editor: EditorConfig {
                redirect_delay_ms: 1500,
            },
        }
    }
}

fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    let value = storage.get_item(API_BASE_STORAGE_KEY).ok().flatten()?;
    let value = value.trim().trim_end_matches('/').to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::builtin());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = parse_config(
            r#"
            [api]
            base = "http://localhost:8080/"

            [editor]
            redirect_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base, "http://localhost:8080");
        assert_eq!(config.editor.redirect_delay_ms, 0);
    }

    #[test]
    fn test_config_is_read_once() {
        static CELL: OnceCell<AppConfig> = OnceCell::new();
        let loads = std::cell::Cell::new(0);
        let load = || {
            loads.set(loads.get() + 1);
            AppConfig::builtin()
        };

        let first = cached(&CELL, load);
        let second = cached(&CELL, load);

        assert_eq!(loads.get(), 1);
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.editor.redirect_delay_ms, 1500);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[api]\nbase = \"\"\n").is_err());
    }
}
