//! Launch configuration.
//!
//! Read from `portal.json` in the data directory. Every field has a
//! default, so a missing file or a partial file is fine. Command-line
//! flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::clock::Millis;
use crate::door::NAVIGATION_DWELL_MS;
use crate::error::{PortalError, PortalResult};
use crate::showcase::HOME_PARTICLE_COUNT;
use crate::toast::DEFAULT_TOAST_DURATION_MS;

/// File name of the config inside the data directory
pub const CONFIG_FILE: &str = "portal.json";

/// Which set of doors the home screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeLayout {
    /// One door per showcase page
    #[default]
    Classic,
    /// Character-named doors; two of them lead to the same page
    Gallery,
}

impl std::str::FromStr for HomeLayout {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(HomeLayout::Classic),
            "gallery" => Ok(HomeLayout::Gallery),
            other => Err(PortalError::Config(format!("unknown home layout '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub home_layout: HomeLayout,
    pub toast_duration_ms: Millis,
    pub door_dwell_ms: Millis,
    pub home_particle_count: usize,
    /// Prefix for share links; a custom scheme is used when unset
    pub share_base_url: Option<String>,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            home_layout: HomeLayout::Classic,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            door_dwell_ms: NAVIGATION_DWELL_MS,
            home_particle_count: HOME_PARTICLE_COUNT,
            share_base_url: None,
            window_width: 1200.0,
            window_height: 900.0,
        }
    }
}

impl PortalConfig {
    /// Parse a config file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> PortalResult<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| PortalError::Config(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load `portal.json` from a data directory.
    pub fn load_from_dir(data_dir: impl AsRef<Path>) -> PortalResult<Self> {
        Self::load(Self::path_in(data_dir))
    }

    pub fn path_in(data_dir: impl AsRef<Path>) -> PathBuf {
        data_dir.as_ref().join(CONFIG_FILE)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> PortalResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = PortalConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            PortalConfig::path_in(temp.path()),
            r#"{ "home_layout": "gallery", "toast_duration_ms": 5000 }"#,
        )
        .unwrap();

        let config = PortalConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.home_layout, HomeLayout::Gallery);
        assert_eq!(config.toast_duration_ms, 5_000);
        assert_eq!(config.door_dwell_ms, NAVIGATION_DWELL_MS);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(PortalConfig::path_in(temp.path()), "{ not json").unwrap();
        let err = PortalConfig::load_from_dir(temp.path()).unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = PortalConfig::path_in(temp.path().join("nested"));
        let config = PortalConfig {
            share_base_url: Some("https://example.org".to_string()),
            ..PortalConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(PortalConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("Gallery".parse::<HomeLayout>().unwrap(), HomeLayout::Gallery);
        assert!("grid".parse::<HomeLayout>().is_err());
    }
}
