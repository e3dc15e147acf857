//! The closed set of pages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named full-page view. Navigation carries no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortalRoute {
    Home,
    Warrior,
    WaterBreather,
    Creature,
}

impl PortalRoute {
    pub const ALL: [PortalRoute; 4] = [
        PortalRoute::Home,
        PortalRoute::Warrior,
        PortalRoute::WaterBreather,
        PortalRoute::Creature,
    ];

    /// Canonical path
    pub fn path(&self) -> &'static str {
        match self {
            PortalRoute::Home => "/",
            PortalRoute::Warrior => "/warrior",
            PortalRoute::WaterBreather => "/water-breather",
            PortalRoute::Creature => "/creature",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PortalRoute::Home => "Home",
            PortalRoute::Warrior => "Warrior",
            PortalRoute::WaterBreather => "Water Breather",
            PortalRoute::Creature => "Creature",
        }
    }

    /// Resolve a path or page name.
    ///
    /// Case-insensitive, ignores a trailing slash, and accepts the static
    /// page names (`warrior.html`, `index.html`) as aliases.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_start_matches("./").trim_matches('/');
        let name = trimmed.strip_suffix(".html").unwrap_or(trimmed);

        match name.to_ascii_lowercase().as_str() {
            "" | "index" => Some(PortalRoute::Home),
            "warrior" => Some(PortalRoute::Warrior),
            "water-breather" => Some(PortalRoute::WaterBreather),
            "creature" => Some(PortalRoute::Creature),
            _ => None,
        }
    }

    pub fn is_showcase(&self) -> bool {
        !matches!(self, PortalRoute::Home)
    }
}

impl fmt::Display for PortalRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
