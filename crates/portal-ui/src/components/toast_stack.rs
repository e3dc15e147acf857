//! Toast stack view.
//!
//! Renders a snapshot of the notifier in insertion order. Leaving toasts
//! stay in the DOM with an exit class until the notifier removes them.

use dioxus::prelude::*;
use portal_core::{ToastEntry, ToastId, ToastPhase};

use super::button::CloseButton;

/// CSS classes for one toast
pub fn toast_class(entry: &ToastEntry) -> String {
    let phase = match entry.phase {
        ToastPhase::Shown => "toast-shown",
        ToastPhase::Leaving => "toast-leaving",
    };
    format!("toast {} {}", entry.message.variant.class(), phase)
}

#[derive(Clone, PartialEq, Props)]
pub struct ToastStackProps {
    pub entries: Vec<ToastEntry>,
    /// Close button clicked
    pub on_dismiss: EventHandler<ToastId>,
}

#[component]
pub fn ToastStack(props: ToastStackProps) -> Element {
    rsx! {
        ol { class: "toast-stack", role: "status", "aria-live": "polite",
            for entry in props.entries.iter() {
                ToastCard {
                    key: "{entry.id.key()}",
                    entry: entry.clone(),
                    on_dismiss: props.on_dismiss,
                }
            }
        }
    }
}

#[component]
fn ToastCard(entry: ToastEntry, on_dismiss: EventHandler<ToastId>) -> Element {
    let class = toast_class(&entry);
    let id = entry.id;

    rsx! {
        li { class: "{class}",
            div { class: "toast-body",
                p { class: "toast-title", "{entry.message.title}" }
                if let Some(description) = entry.message.description.as_ref() {
                    p { class: "toast-description", "{description}" }
                }
            }
            CloseButton { onclick: move |_| on_dismiss.call(id) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::{ToastMessage, ToastNotifier, ToastVariant};

    #[test]
    fn class_tracks_variant_and_phase() {
        let mut toasts = ToastNotifier::new();
        let id = toasts.show(
            ToastMessage::new("Share Unavailable").with_variant(ToastVariant::Destructive),
            0,
        );

        let entry = toasts.get(id).unwrap().clone();
        assert_eq!(toast_class(&entry), "toast toast-destructive toast-shown");

        toasts.dismiss(id, 10);
        let entry = toasts.get(id).unwrap().clone();
        assert_eq!(toast_class(&entry), "toast toast-destructive toast-leaving");
    }
}
