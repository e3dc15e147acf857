//! Home page - the door selection screen.
//!
//! Header slides in first, the doors fade in one after another, and the
//! instructions appear last.

use dioxus::prelude::*;
use portal_core::{home_doors, PageIntro, ParticleSpec, HOME_PARTICLE_COLOR};

use crate::components::{AmbientParticles, Door};
use crate::context::{now, use_portal_config, use_timed};

#[component]
pub fn Index() -> Element {
    let config = use_portal_config();

    let mut intro = use_signal(PageIntro::new);
    use_hook(move || intro.write().start(now()));
    use_timed(intro, |_| {});

    let doors: Vec<_> = home_doors(config.home_layout)
        .into_iter()
        .map(|door| door.with_dwell(config.door_dwell_ms))
        .collect();
    let particles = ParticleSpec::ambient(config.home_particle_count, HOME_PARTICLE_COLOR);

    let header_class = if intro.read().header_visible() { "is-visible" } else { "" };
    let instructions_class = if intro.read().instructions_visible() { "is-visible" } else { "" };

    rsx! {
        main { class: "home",
            AmbientParticles {
                spec: particles,
                container_id: "home-particles",
                class: "page-particles".to_string(),
            }

            header { class: "home-header {header_class}",
                h1 { class: "page-title", "Cosplayer Portal" }
                p { class: "tagline", "Choose a door and step into a cosplay world" }
            }

            section { class: "door-row",
                for (index, door) in doors.into_iter().enumerate() {
                    Door { key: "{index}", config: door, index }
                }
            }

            p { class: "home-instructions {instructions_class}",
                "Hover over a door to feel its energy. Click to enter."
            }
        }
    }
}
