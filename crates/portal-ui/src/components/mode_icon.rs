//! Sun / moon indicator for the theme toggle.

use dioxus::prelude::*;
use portal_core::ModeIcon;

/// Accessible label announcing what a click will do
pub fn toggle_label(icon: ModeIcon) -> &'static str {
    match icon {
        ModeIcon::Sun => "Switch to dark mode",
        ModeIcon::Moon => "Switch to light mode",
    }
}

/// Line-art icon: sun in light mode, moon in dark mode.
#[component]
pub fn ModeIconView(icon: ModeIcon) -> Element {
    match icon {
        ModeIcon::Sun => rsx! {
            svg {
                class: "mode-icon mode-icon-sun",
                view_box: "0 0 24 24",
                width: "20",
                height: "20",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                circle { cx: "12", cy: "12", r: "4" }
                path { d: "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" }
            }
        },
        ModeIcon::Moon => rsx! {
            svg {
                class: "mode-icon mode-icon-moon",
                view_box: "0 0 24 24",
                width: "20",
                height: "20",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_describes_next_mode() {
        assert_eq!(toggle_label(ModeIcon::Sun), "Switch to dark mode");
        assert_eq!(toggle_label(ModeIcon::Moon), "Switch to light mode");
    }
}
