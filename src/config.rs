//! Configuration - recipes directory and calorie threshold.
//!
//! Sources, lowest to highest precedence: built-in defaults,
//! `gourmet/config.toml` under each `$XDG_CONFIG_DIRS` entry then
//! `$XDG_CONFIG_HOME`, the `GOURMET_RECIPES_PATH` environment variable,
//! and finally command-line flags.

use crate::catalog::DEFAULT_CALORIE_THRESHOLD;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_RECIPES_DIR: &str = "Recipes";
pub const RECIPES_PATH_ENV: &str = "GOURMET_RECIPES_PATH";

const CONFIG_APP_DIR: &str = "gourmet";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
struct ConfigToml {
    recipes_dir: Option<PathBuf>,
    calorie_threshold: Option<u64>,
}

impl ConfigToml {
    fn merge(&mut self, other: ConfigToml) {
        if other.recipes_dir.is_some() {
            self.recipes_dir = other.recipes_dir;
        }
        if other.calorie_threshold.is_some() {
            self.calorie_threshold = other.calorie_threshold;
        }
    }
}

/// Effective settings for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub recipes_dir: PathBuf,
    pub calorie_threshold: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recipes_dir: PathBuf::from(DEFAULT_RECIPES_DIR),
            calorie_threshold: DEFAULT_CALORIE_THRESHOLD,
        }
    }
}

/// Values that override whatever the config files say.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub recipes_dir: Option<PathBuf>,
    pub calorie_threshold: Option<u64>,
}

/// Candidate config files, lowest precedence first: every `$XDG_CONFIG_DIRS`
/// entry (default `/etc/xdg`), then the user config directory.
pub fn config_file_candidates() -> Vec<PathBuf> {
    let system_dirs = std::env::var("XDG_CONFIG_DIRS").unwrap_or_else(|_| "/etc/xdg".to_owned());
    let user_dir = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .unwrap_or_else(|| PathBuf::from(".config"));

    system_dirs
        .split(':')
        .map(str::trim)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .chain(std::iter::once(user_dir))
        .map(|dir| dir.join(CONFIG_APP_DIR).join(CONFIG_FILE_NAME))
        .collect()
}

fn read_toml(path: &Path) -> Result<ConfigToml> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid TOML in {}", path.display()))
}

fn merge_files(paths: &[PathBuf]) -> Result<ConfigToml> {
    let mut merged = ConfigToml::default();
    for path in paths {
        if !path.exists() {
            continue;
        }
        tracing::debug!(path = %path.display(), "reading config");
        merged.merge(read_toml(path)?);
    }
    Ok(merged)
}

impl Config {
    /// Resolve settings from the given config files plus overrides.
    pub fn from_files(paths: &[PathBuf], overrides: &Overrides) -> Result<Self> {
        let mut merged = merge_files(paths)?;
        merged.merge(ConfigToml {
            recipes_dir: overrides.recipes_dir.clone(),
            calorie_threshold: overrides.calorie_threshold,
        });

        let defaults = Config::default();
        Ok(Self {
            recipes_dir: merged.recipes_dir.unwrap_or(defaults.recipes_dir),
            calorie_threshold: merged.calorie_threshold.unwrap_or(defaults.calorie_threshold),
        })
    }

    /// Resolve settings from the XDG config locations and the environment.
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut overrides = overrides;
        if overrides.recipes_dir.is_none()
            && let Ok(path) = std::env::var(RECIPES_PATH_ENV)
            && !path.trim().is_empty()
        {
            overrides.recipes_dir = Some(PathBuf::from(path));
        }
        Self::from_files(&config_file_candidates(), &overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        let cfg = Config::from_files(&[missing], &Overrides::default()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.recipes_dir, PathBuf::from("Recipes"));
        assert_eq!(cfg.calorie_threshold, 300);
    }

    #[test]
    fn test_later_file_overrides_per_key() {
        let dir = TempDir::new().unwrap();
        let system = write(dir.path(), "system.toml", "recipes_dir = \"/srv/recipes\"\ncalorie_threshold = 500\n");
        let user = write(dir.path(), "user.toml", "calorie_threshold = 250\n");

        let cfg = Config::from_files(&[system, user], &Overrides::default()).unwrap();
        assert_eq!(cfg.recipes_dir, PathBuf::from("/srv/recipes"));
        assert_eq!(cfg.calorie_threshold, 250);
    }

    #[test]
    fn test_overrides_win() {
        let dir = TempDir::new().unwrap();
        let file = write(dir.path(), "c.toml", "recipes_dir = \"from-file\"\ncalorie_threshold = 10\n");
        let overrides = Overrides {
            recipes_dir: Some(PathBuf::from("from-cli")),
            calorie_threshold: None,
        };

        let cfg = Config::from_files(&[file], &overrides).unwrap();
        assert_eq!(cfg.recipes_dir, PathBuf::from("from-cli"));
        assert_eq!(cfg.calorie_threshold, 10);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let dir = TempDir::new().unwrap();
        let file = write(dir.path(), "c.toml", "theme = \"dark\"\n");
        let cfg = Config::from_files(&[file], &Overrides::default()).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_invalid_toml_names_file() {
        let dir = TempDir::new().unwrap();
        let file = write(dir.path(), "broken.toml", "calorie_threshold = \"lots\"\n");
        let err = Config::from_files(&[file], &Overrides::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.toml"));
    }

    #[test]
    fn test_candidates_end_with_config_file() {
        let candidates = config_file_candidates();
        assert!(!candidates.is_empty());
        for path in candidates {
            assert!(path.ends_with("gourmet/config.toml"));
        }
    }
}
