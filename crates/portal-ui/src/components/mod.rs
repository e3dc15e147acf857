//! Reusable UI components

mod button;
mod mode_icon;
mod particle_layer;
mod toast_stack;

pub use button::*;
pub use mode_icon::*;
pub use particle_layer::*;
pub use toast_stack::*;
