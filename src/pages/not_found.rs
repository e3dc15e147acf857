//! Fallback for unknown paths.
//!
//! Legacy page names (`warrior.html`, `INDEX.HTML`, ...) are forwarded to
//! their route instead of showing the error.

use dioxus::prelude::*;
use portal_core::PortalRoute;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = format!("/{}", segments.join("/"));
    let forward = PortalRoute::from_path(&path);

    use_effect(move || {
        if let Some(route) = forward {
            tracing::info!("Forwarding legacy path to {}", route);
            navigator.replace(Route::from(route));
        }
    });

    if forward.is_some() {
        return rsx! {};
    }

    tracing::debug!("No page at {}", path);

    rsx! {
        main { class: "not-found",
            h1 { class: "page-title", "404" }
            p { class: "tagline", "This door leads nowhere." }
            Link { class: "btn-back", to: Route::Index {}, "Return to the doors" }
        }
    }
}
