//! Page components for the Cosplayer Portal.

mod index;
mod not_found;
mod showcase;

pub use index::Index;
pub use not_found::NotFound;
pub use showcase::{Creature, WaterBreather, Warrior};
