use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PmanError, Result};

/// User configuration, loaded from `~/.pman.toml` (or `$PMAN_CONFIG`).
///
/// Every field has a sensible default so pman works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Vault file to use when neither `--vault` nor `PMAN_VAULT` is given.
    #[serde(default)]
    pub vault: Option<PathBuf>,

    /// Minimum length for a newly chosen vault passphrase (default: 8).
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,

    /// Show the "days since modified" column in listings (default: true).
    #[serde(default = "default_show_age")]
    pub show_age: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_min_password_len() -> usize {
    8
}

fn default_show_age() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault: None,
            min_password_len: default_min_password_len(),
            show_age: default_show_age(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the home directory.
    const FILE_NAME: &'static str = ".pman.toml";

    /// Where the config file lives: `$PMAN_CONFIG`, else `$HOME/.pman.toml`.
    ///
    /// Returns `None` when neither variable is set.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(p) = std::env::var_os("PMAN_CONFIG").filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(p));
        }
        std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(|home| PathBuf::from(home).join(Self::FILE_NAME))
    }

    /// Load settings from `config_path`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PmanError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        tracing::debug!(path = %config_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load from `default_path()`, or defaults if there is none.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert!(s.vault.is_none());
        assert_eq!(s.min_password_len, 8);
        assert!(s.show_age);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(&tmp.path().join(".pman.toml")).unwrap();
        assert_eq!(settings.min_password_len, 8);
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".pman.toml");
        let config = r#"
vault = "/home/niek/creds.vault"
min_password_len = 12
show_age = false
"#;
        fs::write(&path, config).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(
            settings.vault,
            Some(PathBuf::from("/home/niek/creds.vault"))
        );
        assert_eq!(settings.min_password_len, 12);
        assert!(!settings.show_age);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".pman.toml");
        fs::write(&path, "min_password_len = 4\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.min_password_len, 4);
        assert!(settings.vault.is_none());
        assert!(settings.show_age);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".pman.toml");
        fs::write(&path, "not valid {{toml").unwrap();

        let result = Settings::load(&path);
        assert!(matches!(result, Err(PmanError::ConfigError(_))));
    }
}
