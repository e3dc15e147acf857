//! Absolutely positioned particle overlay.

use dioxus::prelude::*;
use portal_core::Particle;

/// Renders particles inside a container that owns the positioning context.
///
/// `id` is the container id the field was started with, so callers can
/// tell a missing container apart from an empty one.
#[component]
pub fn ParticleLayer(id: String, particles: Vec<Particle>, #[props(default)] class: Option<String>) -> Element {
    let class = match class.as_deref() {
        Some(extra) => format!("particle-layer {}", extra),
        None => "particle-layer".to_string(),
    };

    rsx! {
        div { id: "{id}", class: "{class}", "aria-hidden": "true",
            for particle in particles.iter() {
                div {
                    key: "{particle.id.key()}",
                    class: "particle",
                    style: "{particle.style()}",
                }
            }
        }
    }
}
