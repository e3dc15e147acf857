//! Self-replenishing particle field bound to the component lifecycle.

use dioxus::prelude::*;
use portal_core::{ContainerId, ParticleField, ParticleSpec};
use portal_ui::ParticleLayer;

use crate::context::{now, use_timed};

/// Props for an ambient particle field.
#[derive(Props, Clone, PartialEq)]
pub struct AmbientParticlesProps {
    pub spec: ParticleSpec,
    /// DOM id of the container the particles live in
    pub container_id: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Starts its field on mount; unmounting drops the field and its timers.
#[component]
pub fn AmbientParticles(props: AmbientParticlesProps) -> Element {
    let spec = props.spec.clone();
    let container = props.container_id.clone();
    let mut field = use_signal(move || ParticleField::new(spec));

    use_hook(move || {
        field
            .write()
            .start(Some(ContainerId::new(container)), now());
    });
    use_timed(field, |_| {});

    let particles = field.read().particles().to_vec();

    rsx! {
        ParticleLayer {
            id: props.container_id.clone(),
            particles: particles,
            class: props.class.clone(),
        }
    }
}
