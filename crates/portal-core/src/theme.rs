//! Light/dark theme preference.
//!
//! Precedence at startup is persisted preference, then the OS color scheme,
//! then light. Once the user toggles, the choice is persisted and OS
//! color-scheme changes are ignored for good.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::storage::PreferenceStore;
use crate::toast::ToastMessage;

/// Storage key holding `"light"` or `"dark"`
pub const THEME_KEY: &str = "theme";

/// Key written by the plain-DOM site (`"true"` / `"false"`). Read-only fallback.
pub const LEGACY_DARK_MODE_KEY: &str = "darkMode";

/// Document-wide visual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    /// Class set on the document root; styling keys dark rules off it
    pub fn root_class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "",
            ThemeMode::Dark => "dark",
        }
    }

    /// Which half of the sun/moon indicator pair is shown
    pub fn icon(&self) -> ModeIcon {
        match self {
            ThemeMode::Light => ModeIcon::Sun,
            ThemeMode::Dark => ModeIcon::Moon,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(PortalError::InvalidPreference {
                key: THEME_KEY.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeIcon {
    Sun,
    Moon,
}

/// Owns the single authoritative theme value.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    mode: ThemeMode,
    explicit: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            mode: ThemeMode::default(),
            explicit: false,
        }
    }

    /// Apply the persisted preference, if any. Needs no OS signal.
    ///
    /// Returns the restored mode; `None` leaves the mode for [`initialize`](Self::initialize).
    pub fn restore(&mut self) -> Option<ThemeMode> {
        if self.explicit {
            return Some(self.mode);
        }
        let mode = self.load_persisted()?;
        self.mode = mode;
        self.explicit = true;
        tracing::info!(mode = %self.mode, "Theme restored");
        Some(mode)
    }

    /// Resolve the startup mode. Never emits a toast.
    ///
    /// An explicit preference (restored or toggled) always wins over the OS.
    pub fn initialize(&mut self, os_prefers_dark: bool) -> ThemeMode {
        if self.restore().is_none() {
            self.mode = ThemeMode::from_dark(os_prefers_dark);
        }

        tracing::info!(mode = %self.mode, explicit = self.explicit, "Theme initialized");
        self.mode
    }

    /// Flip the mode, persist it and return the confirmation toast.
    ///
    /// A storage failure is logged; the new mode still applies for this session.
    pub fn toggle(&mut self) -> ToastMessage {
        self.mode = self.mode.toggled();
        self.explicit = true;

        if let Err(e) = self.store.set(THEME_KEY, self.mode.as_str()) {
            tracing::warn!("Theme preference not persisted: {}", e);
        }

        tracing::info!(mode = %self.mode, "Theme toggled");
        ToastMessage::new(format!("{} Mode Activated", self.mode.display_name()))
    }

    /// React to an OS color-scheme change.
    ///
    /// Returns the new mode if it changed. Ignored once an explicit
    /// preference exists.
    pub fn os_preference_changed(&mut self, prefers_dark: bool) -> Option<ThemeMode> {
        if self.explicit {
            tracing::debug!("Ignoring OS color-scheme change, explicit preference set");
            return None;
        }

        let mode = ThemeMode::from_dark(prefers_dark);
        if mode == self.mode {
            return None;
        }
        self.mode = mode;
        tracing::info!(mode = %self.mode, "Theme follows OS color scheme");
        Some(mode)
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn icon(&self) -> ModeIcon {
        self.mode.icon()
    }

    /// Whether the user's own choice (stored or toggled) is in force
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load_persisted(&self) -> Option<ThemeMode> {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => match value.parse() {
                Ok(mode) => return Some(mode),
                Err(e) => tracing::warn!("Ignoring stored theme: {}", e),
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Theme preference unavailable: {}", e);
                return None;
            }
        }

        match self.store.get(LEGACY_DARK_MODE_KEY) {
            Ok(Some(value)) => match value.trim() {
                "true" => Some(ThemeMode::Dark),
                "false" => Some(ThemeMode::Light),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalResult;
    use crate::storage::MemoryStore;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> PortalResult<Option<String>> {
            Err(PortalError::Storage("unavailable".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> PortalResult<()> {
            Err(PortalError::Storage("unavailable".to_string()))
        }
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_icons_match_mode() {
        assert_eq!(ThemeMode::Light.icon(), ModeIcon::Sun);
        assert_eq!(ThemeMode::Dark.icon(), ModeIcon::Moon);
        assert_eq!(ThemeMode::Dark.root_class(), "dark");
    }

    #[test]
    fn test_defaults_to_light() {
        let mut theme = ThemeController::new(MemoryStore::new());
        assert_eq!(theme.initialize(false), ThemeMode::Light);
        assert!(!theme.is_explicit());
    }

    #[test]
    fn test_stored_preference_beats_os() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "light").unwrap();

        let mut theme = ThemeController::new(store);
        assert_eq!(theme.initialize(true), ThemeMode::Light);
        assert!(theme.is_explicit());
        assert_eq!(theme.os_preference_changed(true), None);
    }

    #[test]
    fn test_restore_applies_stored_mode_without_os() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();

        let mut theme = ThemeController::new(store);
        assert_eq!(theme.restore(), Some(ThemeMode::Dark));
        assert_eq!(theme.mode(), ThemeMode::Dark);

        // The OS answer arriving later does not override it
        assert_eq!(theme.initialize(false), ThemeMode::Dark);
    }

    #[test]
    fn test_restore_without_stored_mode_waits_for_os() {
        let mut theme = ThemeController::new(MemoryStore::new());
        assert_eq!(theme.restore(), None);
        assert!(!theme.is_explicit());
        assert_eq!(theme.initialize(true), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_before_os_answer_is_kept() {
        let mut theme = ThemeController::new(FailingStore);
        assert_eq!(theme.restore(), None);

        theme.toggle();
        assert_eq!(theme.initialize(false), ThemeMode::Dark);
    }

    #[test]
    fn test_legacy_key_fallback() {
        let store = MemoryStore::new();
        store.set(LEGACY_DARK_MODE_KEY, "true").unwrap();

        let mut theme = ThemeController::new(store);
        assert_eq!(theme.initialize(false), ThemeMode::Dark);
    }

    #[test]
    fn test_garbage_preference_falls_back_to_os() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();

        let mut theme = ThemeController::new(store);
        assert_eq!(theme.initialize(true), ThemeMode::Dark);
        assert!(!theme.is_explicit());
    }

    #[test]
    fn test_toggle_persists_and_toasts() {
        let mut theme = ThemeController::new(MemoryStore::new());
        theme.initialize(false);

        let toast = theme.toggle();
        assert_eq!(toast.title, "Dark Mode Activated");
        assert_eq!(theme.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_os_changes_followed_until_toggle() {
        let mut theme = ThemeController::new(MemoryStore::new());
        theme.initialize(false);

        assert_eq!(theme.os_preference_changed(true), Some(ThemeMode::Dark));
        assert_eq!(theme.os_preference_changed(true), None);

        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(theme.os_preference_changed(true), None);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_unavailable_storage_degrades_to_session() {
        let mut theme = ThemeController::new(FailingStore);
        assert_eq!(theme.initialize(true), ThemeMode::Dark);

        let toast = theme.toggle();
        assert_eq!(toast.title, "Light Mode Activated");
        assert_eq!(theme.mode(), ThemeMode::Light);
    }
}
