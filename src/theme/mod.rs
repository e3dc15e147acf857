//! Global styling for the portal.

mod styles;

pub use styles::GLOBAL_STYLES;
