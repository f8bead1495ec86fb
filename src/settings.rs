//! User settings stored as settings.json in the app data directory

use crate::constants::{DEFAULT_PROVIDER_URL, PROVIDER_URL_ENV};
use crate::types::NavSection;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Wallet provider JSON-RPC endpoint; empty disables wallet connect
    pub provider_url: Option<String>,

    // Navigation
    pub last_section: NavSection,

    // Session-only endpoint from the environment, never written back
    #[serde(skip)]
    pub provider_override: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            provider_url: Some(DEFAULT_PROVIDER_URL.to_string()),
            last_section: NavSection::default(),
            provider_override: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Apply the provider endpoint override from the environment, if set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(PROVIDER_URL_ENV) {
            info!(endpoint = %url, "Provider endpoint overridden from environment");
            self.provider_override = Some(url);
        }
    }

    /// Endpoint in effect for this session, `None` when unset or blank.
    /// An override takes precedence over the saved value.
    pub fn provider_url(&self) -> Option<&str> {
        self.provider_override
            .as_deref()
            .or(self.provider_url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1280.0),
            window_h: Some(720.0),
            provider_url: Some("http://localhost:8545".into()),
            last_section: NavSection::Policies,
            ..Settings::default()
        };
        settings.save(dir.path());

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_w, Some(1280.0));
        assert_eq!(loaded.provider_url(), Some("http://localhost:8545"));
        assert_eq!(loaded.last_section, NavSection::Policies);
    }

    #[test]
    fn missing_or_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()).provider_url(), Some(DEFAULT_PROVIDER_URL));

        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.last_section, NavSection::About);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"last_section":"signup"}"#).unwrap();
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.last_section, NavSection::Signup);
        assert_eq!(loaded.provider_url(), Some(DEFAULT_PROVIDER_URL));
    }

    #[test]
    fn blank_endpoint_disables_provider() {
        let settings = Settings { provider_url: Some("  ".into()), ..Settings::default() };
        assert_eq!(settings.provider_url(), None);
        let settings = Settings { provider_url: None, ..Settings::default() };
        assert_eq!(settings.provider_url(), None);
    }

    #[test]
    fn endpoint_override_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        Settings::default().save(dir.path());

        let mut settings = Settings::load(dir.path());
        settings.provider_override = Some("http://10.0.0.9:9999".into());
        assert_eq!(settings.provider_url(), Some("http://10.0.0.9:9999"));
        settings.save(dir.path());

        let next = Settings::load(dir.path());
        assert_eq!(next.provider_override, None);
        assert_eq!(next.provider_url(), Some(DEFAULT_PROVIDER_URL));
    }

    #[test]
    fn blank_override_disables_provider_for_the_session() {
        let settings = Settings { provider_override: Some(String::new()), ..Settings::default() };
        assert_eq!(settings.provider_url(), None);
    }
}
