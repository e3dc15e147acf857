//! Viewport-anchored toast stack.

use dioxus::prelude::*;
use portal_ui::ToastStack;

use crate::context::use_toaster;

#[component]
pub fn ToastOverlay() -> Element {
    let toaster = use_toaster();
    let entries = toaster.stack().read().entries().to_vec();

    rsx! {
        div { class: "toast-viewport",
            ToastStack {
                entries,
                on_dismiss: move |id| {
                    toaster.dismiss(id);
                },
            }
        }
    }
}
