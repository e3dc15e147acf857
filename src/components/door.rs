//! Door - one animated entrance on the home screen.
//!
//! Fades in after its stagger delay, glows and sparks on hover, and swings
//! open on click. Navigation happens once the opening animation is done.

use dioxus::prelude::*;
use portal_core::door::HOVER_FRAMES;
use portal_core::{Activation, DoorConfig, DoorEvent, DoorNavigator, ParticleSpec};
use portal_ui::ParticleLayer;

use super::AmbientParticles;
use crate::app::Route;
use crate::context::{now, use_timed, use_toaster};

/// Props for a door.
#[derive(Props, Clone, PartialEq)]
pub struct DoorProps {
    pub config: DoorConfig,
    /// Position on the screen; doors may share a destination
    pub index: usize,
}

#[component]
pub fn Door(props: DoorProps) -> Element {
    let navigator = use_navigator();
    let toaster = use_toaster();

    let config = props.config.clone();
    let mut door = use_signal(move || DoorNavigator::new(config));

    let reveal_delay = props.config.reveal_delay_ms;
    use_hook(move || {
        door.write().reveal(reveal_delay, now());
    });

    use_timed(door, move |events| {
        for event in events {
            if let DoorEvent::Navigate(route) = event {
                navigator.push(Route::from(route));
            }
        }
    });

    let state = door.read().state();
    let hovering = door.read().is_hovering();
    let glow_class = if door.read().is_glowing() { "door-glow" } else { "" };
    let frames: Vec<Vec<_>> = (0..HOVER_FRAMES)
        .map(|frame| door.read().sparks().particles_on(frame).cloned().collect())
        .collect();

    let accent = props.config.accent_color.clone();
    let label = props.config.label.clone();
    let image = props.config.image_src.clone();
    let key = format!("door-{}", props.index);

    rsx! {
        div {
            class: "door {state.class()} {glow_class}",
            style: "--accent: {accent};",
            role: "button",
            tabindex: "0",
            "aria-label": "Enter the {label} world",
            onmouseenter: move |_| {
                door.write().hover_start(now());
            },
            onmouseleave: move |_| door.write().hover_end(),
            onclick: move |_| {
                let at = now();
                if let Activation::Opened { toast } = door.write().activate(at) {
                    toaster.show(toast);
                }
            },

            div { class: "door-glow-layer" }

            for (frame, particles) in frames.into_iter().enumerate() {
                ParticleLayer {
                    key: "{frame}",
                    id: "{key}-frame-{frame}",
                    particles,
                    class: format!("door-frame door-frame-{frame}"),
                }
            }

            if hovering {
                AmbientParticles {
                    spec: ParticleSpec::door_hover(accent.clone()),
                    container_id: "{key}-hover",
                    class: "door-hover-particles".to_string(),
                }
            }

            div { class: "door-panel",
                img { class: "door-image", src: "{image}", alt: "{label}" }
                div { class: "door-handle" }
            }
            p { class: "door-label", "{label}" }
        }
    }
}
