//! Cosplayer Portal Core Library
//!
//! Timer-driven state machines behind the portal's decorative UI.
//!
//! ## Overview
//!
//! The portal is a door-selection home screen in front of a handful of
//! showcase pages. Everything that moves on screen is owned by one of four
//! components, each independent of the others:
//!
//! - **ThemeController**: the persisted light/dark preference
//! - **ParticleField**: a constant-population, forever-recycled particle set
//! - **DoorNavigator**: hidden → visible → opening, then one navigation
//! - **ToastNotifier**: FIFO stack of self-dismissing notifications
//!
//! Nothing here reads a wall clock. Callers pass `now` in milliseconds and
//! call [`Timed::advance`] when [`Timed::next_deadline`] has passed, which
//! keeps every component deterministic under test.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portal_core::{DoorConfig, DoorEvent, DoorNavigator, PortalRoute, Timed};
//!
//! let mut door = DoorNavigator::new(DoorConfig::new(PortalRoute::Warrior, "Warrior", "#D90429"));
//! door.reveal(300, 0);
//! door.advance(300);
//! if let portal_core::Activation::Opened { toast } = door.activate(1_000) {
//!     println!("{}", toast.title);
//! }
//! assert_eq!(door.advance(2_500), vec![DoorEvent::Navigate(PortalRoute::Warrior)]);
//! ```

pub mod clock;
pub mod config;
pub mod door;
pub mod error;
pub mod intro;
pub mod logging;
pub mod particles;
pub mod routes;
pub mod showcase;
pub mod storage;
pub mod theme;
pub mod toast;

// Re-exports
pub use clock::{Millis, MonotonicClock, Timed, TimerId, TimerQueue};
pub use config::{HomeLayout, PortalConfig};
pub use door::{Activation, DoorConfig, DoorEvent, DoorNavigator, DoorState, NAVIGATION_DWELL_MS};
pub use error::{PortalError, PortalResult};
pub use intro::{IntroStage, PageIntro};
pub use particles::{
    ContainerId, Particle, ParticleBurst, ParticleChange, ParticleField, ParticleId, ParticleSpec,
};
pub use routes::PortalRoute;
pub use showcase::{home_doors, PageAction, Showcase, HOME_PARTICLE_COLOR};
pub use storage::{MemoryStore, PreferenceStore, Storage};
pub use theme::{ModeIcon, ThemeController, ThemeMode, THEME_KEY};
pub use toast::{ToastChange, ToastEntry, ToastId, ToastMessage, ToastNotifier, ToastPhase, ToastVariant};
