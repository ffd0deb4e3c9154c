//! Config file load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::i18n::Lang;
use crate::widgets::keyboard::DEFAULT_COPIED_RESET_MS;
use crate::widgets::newsletter::DEFAULT_SUBMIT_DELAY_MS;

/// Kabiyè config
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KabiyeConfig {
    /// Display language; detected from the locale when absent
    #[serde(default)]
    pub lang: Option<Lang>,
    /// How long the copy button shows "Copied!" (ms)
    #[serde(default = "default_copied_reset_ms")]
    pub copied_reset_ms: u64,
    /// Artificial newsletter submission delay (ms)
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// Directory that static assets (`/audio/...`) are resolved against
    #[serde(default = "default_asset_base")]
    pub asset_base: PathBuf,
}

fn default_copied_reset_ms() -> u64 {
    DEFAULT_COPIED_RESET_MS
}

fn default_submit_delay_ms() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

fn default_asset_base() -> PathBuf {
    PathBuf::from("public")
}

impl Default for KabiyeConfig {
    fn default() -> Self {
        Self {
            lang: None,
            copied_reset_ms: default_copied_reset_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            asset_base: default_asset_base(),
        }
    }
}

impl KabiyeConfig {
    /// Configured language, or the one detected from the environment
    pub fn resolve_lang(&self) -> Lang {
        self.lang.unwrap_or_else(Lang::detect)
    }
}

/// Config path: $XDG_CONFIG_HOME/kabiye/config.json, else ~/.config/kabiye/config.json
pub fn config_path() -> PathBuf {
    let valid_dir = |p: &PathBuf| p.is_absolute() && p.is_dir();

    if let Some(xdg) = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .filter(valid_dir)
    {
        return xdg.join("kabiye").join("config.json");
    }

    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(valid_dir)
        .unwrap_or_else(|| {
            // HOME unset or invalid: fall back to /var/tmp
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("kabiye").join("config.json")
}

/// Load config (defaults when the file is missing or malformed)
pub fn load_config() -> KabiyeConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("config parse failed ({}): {}", path.display(), e);
            KabiyeConfig::default()
        }),
        Err(_) => KabiyeConfig::default(),
    }
}

/// Save config
pub fn save_config(config: &KabiyeConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("failed to create config dir: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("serialize failed: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("failed to write config: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KabiyeConfig::default();
        assert_eq!(config.lang, None);
        assert_eq!(config.copied_reset_ms, 2000);
        assert_eq!(config.submit_delay_ms, 1000);
        assert_eq!(config.asset_base, PathBuf::from("public"));
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = KabiyeConfig {
            lang: Some(Lang::Fr),
            copied_reset_ms: 500,
            submit_delay_ms: 0,
            asset_base: PathBuf::from("/srv/kabiye"),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: KabiyeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.lang, Some(Lang::Fr));
        assert_eq!(parsed.copied_reset_ms, 500);
        assert_eq!(parsed.submit_delay_ms, 0);
        assert_eq!(parsed.asset_base, PathBuf::from("/srv/kabiye"));
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // older files without the delay fields use defaults
        let json = r#"{"lang": "en"}"#;
        let config: KabiyeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.lang, Some(Lang::En));
        assert_eq!(config.copied_reset_ms, 2000);
        assert_eq!(config.submit_delay_ms, 1000);
    }

    #[test]
    fn test_explicit_lang_wins_over_detection() {
        let config = KabiyeConfig {
            lang: Some(Lang::Fr),
            ..KabiyeConfig::default()
        };
        assert_eq!(config.resolve_lang(), Lang::Fr);
    }
}
