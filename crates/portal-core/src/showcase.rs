//! Showcase subjects and the home-screen door catalog.
//!
//! Copy and asset paths are opaque data here; the pages only care about
//! the route, the accent color and the particle tint.

use crate::config::HomeLayout;
use crate::door::DoorConfig;
use crate::particles::ParticleSpec;
use crate::routes::PortalRoute;
use crate::toast::{ToastMessage, ToastVariant};

/// Tint of the home screen's ambient particles
pub const HOME_PARTICLE_COLOR: &str = "rgba(59, 130, 246, 0.5)";

pub const HOME_PARTICLE_COUNT: usize = 30;

/// Scheme used for share links when no base URL is configured
pub const SHARE_SCHEME: &str = "cosplayer-portal";

/// Fade-in stagger of the three home doors
const DOOR_REVEAL_DELAYS_MS: [u64; 3] = [300, 600, 900];

const WARRIOR_ACCENT: &str = "#D90429";
const WATER_BREATHER_ACCENT: &str = "#0096C7";
const CREATURE_ACCENT: &str = "#2B9348";

const WARRIOR_IMAGE: &str = "assets/doors/warrior.png";
const WATER_BREATHER_IMAGE: &str = "assets/doors/water-breather.png";
const CREATURE_IMAGE: &str = "assets/doors/creature.png";

/// One showcase page.
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    pub route: PortalRoute,
    /// Short name used in toasts ("Warrior cosplay has been added...")
    pub subject: &'static str,
    pub title: &'static str,
    pub accent_color: &'static str,
    pub image_src: &'static str,
    pub particle_color: &'static str,
    pub particle_count: usize,
    pub description: &'static str,
    pub highlights: [&'static str; 3],
}

static SHOWCASES: [Showcase; 3] = [
    Showcase {
        route: PortalRoute::Warrior,
        subject: "Warrior",
        title: "The Crimson Warrior",
        accent_color: WARRIOR_ACCENT,
        image_src: WARRIOR_IMAGE,
        particle_color: "rgba(220, 38, 38, 0.6)",
        particle_count: 25,
        description: "A fierce warrior cosplay drawing on ancient battle traditions, with intricate armor and red-tinted lighting.",
        highlights: [
            "Hand-crafted metal embellishments with a battle-worn finish",
            "Traditional fabric techniques with contemporary styling",
            "Custom lighting setup for a dramatic atmosphere",
        ],
    },
    Showcase {
        route: PortalRoute::WaterBreather,
        subject: "Water Breather",
        title: "Water Breather Tanjiro",
        accent_color: WATER_BREATHER_ACCENT,
        image_src: WATER_BREATHER_IMAGE,
        particle_color: "rgba(56, 189, 248, 0.6)",
        particle_count: 35,
        description: "A water-inspired cosplay where flowing wave patterns meet a turquoise and black color scheme.",
        highlights: [
            "Handmade patterned fabrics with wave-like designs",
            "Cloth projection techniques for the water effects",
            "Hand-painted accessories and a handmade sword",
        ],
    },
    Showcase {
        route: PortalRoute::Creature,
        subject: "Creature",
        title: "Ethereal Creature",
        accent_color: CREATURE_ACCENT,
        image_src: CREATURE_IMAGE,
        particle_color: "rgba(16, 185, 129, 0.6)",
        particle_count: 25,
        description: "A haunting creature cosplay with an otherworldly silhouette, a teal robe and glowing red eyes.",
        highlights: [
            "Custom-crafted mask with built-in LED lighting",
            "Layered fabric for the flowing supernatural look",
            "Atmospheric staging and specialized photography",
        ],
    },
];

/// Buttons on a showcase page that answer with a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Save,
    /// `copied` reports whether the link reached the clipboard
    Share { copied: bool },
}

impl Showcase {
    /// Showcase for a route; `None` for the home page.
    pub fn for_route(route: PortalRoute) -> Option<&'static Showcase> {
        SHOWCASES.iter().find(|s| s.route == route)
    }

    pub fn all() -> &'static [Showcase] {
        &SHOWCASES
    }

    /// Page-wide ambient particles in this subject's tint
    pub fn particle_spec(&self) -> ParticleSpec {
        ParticleSpec::ambient(self.particle_count, self.particle_color)
    }

    /// Particles behind the hero image
    pub fn hero_particle_spec(&self) -> ParticleSpec {
        ParticleSpec::character(30, self.particle_color)
    }

    /// Link copied by the share button
    pub fn share_link(&self, base_url: Option<&str>) -> String {
        let path = self.route.path().trim_start_matches('/');
        match base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), path),
            None => format!("{}://{}", SHARE_SCHEME, path),
        }
    }

    pub fn action_toast(&self, action: PageAction) -> ToastMessage {
        match action {
            PageAction::Save => ToastMessage::new("Saved to Collection").with_description(format!(
                "{} cosplay has been added to your collection.",
                self.subject
            )),
            PageAction::Share { copied: true } => ToastMessage::new("Link Copied")
                .with_description("URL has been copied to clipboard. Share it with your friends!"),
            PageAction::Share { copied: false } => ToastMessage::new("Share Unavailable")
                .with_description("The clipboard could not be reached.")
                .with_variant(ToastVariant::Destructive),
        }
    }
}

/// Doors on the home screen for a layout, in display order.
pub fn home_doors(layout: HomeLayout) -> Vec<DoorConfig> {
    let doors = match layout {
        HomeLayout::Classic => [
            (PortalRoute::Warrior, "Warrior", WARRIOR_ACCENT, WARRIOR_IMAGE),
            (
                PortalRoute::WaterBreather,
                "Water Breather",
                WATER_BREATHER_ACCENT,
                WATER_BREATHER_IMAGE,
            ),
            (PortalRoute::Creature, "Creature", CREATURE_ACCENT, CREATURE_IMAGE),
        ],
        // Two doors deliberately share the creature route in this layout
        HomeLayout::Gallery => [
            (PortalRoute::Warrior, "Sun Wukong", WARRIOR_ACCENT, WARRIOR_IMAGE),
            (PortalRoute::Creature, "Tanjiro", WATER_BREATHER_ACCENT, WATER_BREATHER_IMAGE),
            (PortalRoute::Creature, "Statue of God", CREATURE_ACCENT, CREATURE_IMAGE),
        ],
    };

    doors
        .into_iter()
        .zip(DOOR_REVEAL_DELAYS_MS)
        .map(|((route, label, accent, image), delay)| {
            DoorConfig::new(route, label, accent)
                .with_image(image)
                .with_reveal_delay(delay)
        })
        .collect()
}
