//! Showcase pages - one parameterized layout for every subject.

use dioxus::prelude::*;
use portal_core::{PageAction, PortalRoute, Showcase};
use portal_ui::{Button, ButtonVariant};

use super::NotFound;
use crate::components::{AmbientParticles, BackButton};
use crate::context::{use_portal_config, use_toaster};

#[component]
pub fn Warrior() -> Element {
    rsx! { ShowcasePage { route: PortalRoute::Warrior } }
}

#[component]
pub fn WaterBreather() -> Element {
    rsx! { ShowcasePage { route: PortalRoute::WaterBreather } }
}

#[component]
pub fn Creature() -> Element {
    rsx! { ShowcasePage { route: PortalRoute::Creature } }
}

/// Full showcase page for one subject.
#[component]
fn ShowcasePage(route: PortalRoute) -> Element {
    let config = use_portal_config();
    let toaster = use_toaster();

    let Some(showcase) = Showcase::for_route(route) else {
        return rsx! { NotFound { segments: Vec::new() } };
    };

    let base_url = config.share_base_url.clone();

    rsx! {
        main { class: "showcase", style: "--accent: {showcase.accent_color};",
            AmbientParticles {
                spec: showcase.particle_spec(),
                container_id: "page-particles",
                class: "page-particles".to_string(),
            }

            nav { class: "showcase-nav", BackButton {} }

            section { class: "showcase-hero",
                div { class: "hero-frame",
                    AmbientParticles {
                        spec: showcase.hero_particle_spec(),
                        container_id: "character-particles",
                        class: "hero-particles".to_string(),
                    }
                    img {
                        class: "hero-image",
                        src: "{showcase.image_src}",
                        alt: "{showcase.title}",
                    }
                }

                div { class: "hero-copy",
                    h1 { class: "showcase-title", "{showcase.title}" }
                    p { class: "showcase-description", "{showcase.description}" }

                    ul { class: "showcase-highlights",
                        for highlight in showcase.highlights {
                            li { "{highlight}" }
                        }
                    }

                    div { class: "showcase-actions",
                        Button {
                            variant: ButtonVariant::Action,
                            accent: showcase.accent_color.to_string(),
                            onclick: move |_| {
                                toaster.show(showcase.action_toast(PageAction::Save));
                            },
                            "Save to Collection"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                let link = showcase.share_link(base_url.as_deref());
                                let copied = copy_to_clipboard(&link);
                                toaster.show(showcase.action_toast(PageAction::Share { copied }));
                            },
                            "Share"
                        }
                    }
                }
            }
        }
    }
}

/// Put `text` on the system clipboard. Returns whether it got there.
fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Clipboard unavailable: {}", e);
            false
        }
    }
}
