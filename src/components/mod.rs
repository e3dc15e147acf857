//! Stateful UI components for the Cosplayer Portal.
//!
//! Each one owns a `portal-core` state machine and drives it with
//! `use_timed`; presentational pieces come from `portal-ui`.

mod ambient_particles;
mod back_button;
mod door;
mod theme_toggle;
mod toast_overlay;

pub use ambient_particles::AmbientParticles;
pub use back_button::BackButton;
pub use door::Door;
pub use theme_toggle::ThemeToggle;
pub use toast_overlay::ToastOverlay;
