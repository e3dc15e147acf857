//! Return-to-doors button shown on every showcase page.

use dioxus::prelude::*;
use portal_ui::{Button, ButtonVariant};

use crate::app::Route;

#[component]
pub fn BackButton() -> Element {
    let navigator = use_navigator();

    rsx! {
        Button {
            variant: ButtonVariant::Back,
            class: "back-button".to_string(),
            onclick: move |_| {
                tracing::info!("Back to the doors");
                navigator.push(Route::Index {});
            },
            "\u{2190} Back to Doors"
        }
    }
}
