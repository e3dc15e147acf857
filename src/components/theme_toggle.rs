//! Floating light/dark switch.

use dioxus::prelude::*;
use portal_ui::{toggle_label, IconButton, ModeIconView};

use crate::context::{use_theme, use_toaster};

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let toaster = use_toaster();

    let icon = theme.read().icon();

    rsx! {
        IconButton {
            class: "theme-toggle btn-round".to_string(),
            aria_label: toggle_label(icon).to_string(),
            onclick: move |_| {
                let toast = theme.write().toggle();
                toaster.show(toast);
            },
            ModeIconView { icon }
        }
    }
}
