//! Cosplayer Portal UI Components
//!
//! Stateless Dioxus views over `portal-core` state. Nothing here owns a
//! timer or touches storage; the app shell drives the state machines and
//! hands their current snapshot to these components.
//!
//! ## Styling
//!
//! Every component renders plain class names (`btn-action`, `toast-stack`,
//! `particle`, ...). The rules behind them live in the app's global style
//! sheet, including the `.dark` overrides.

pub mod components;

pub use components::*;
