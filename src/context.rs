//! Shared state for the portal's components.
//!
//! The theme controller and the toast stack are provided once by `App` and
//! read everywhere else through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! // In any component
//! let toaster = use_toaster();
//! toaster.show(ToastMessage::new("Saved to Collection"));
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use dioxus::prelude::*;
use portal_core::{
    Millis, MonotonicClock, PortalConfig, PreferenceStore, ThemeController, Timed, ToastId,
    ToastMessage, ToastNotifier,
};

/// Poll interval of the timer drivers, roughly one frame
const FRAME: Duration = Duration::from_millis(16);

/// Theme controller as held in context; the store is redb or the in-memory fallback.
pub type PortalTheme = ThemeController<Box<dyn PreferenceStore>>;

/// Everything resolved before the window opens
#[derive(Debug, Clone, Default)]
pub struct LaunchSettings {
    pub data_dir: PathBuf,
    pub config: PortalConfig,
}

static LAUNCH: OnceLock<LaunchSettings> = OnceLock::new();

static CLOCK: OnceLock<MonotonicClock> = OnceLock::new();

/// Record the launch settings. Only the first call has any effect.
pub fn set_launch_settings(settings: LaunchSettings) {
    let _ = LAUNCH.set(settings);
}

pub fn launch_settings() -> LaunchSettings {
    LAUNCH.get().cloned().unwrap_or_default()
}

/// Milliseconds since the app started. Every component shares this origin.
pub fn now() -> Millis {
    CLOCK.get_or_init(MonotonicClock::new).now()
}

/// Hook to access the theme controller.
pub fn use_theme() -> Signal<PortalTheme> {
    use_context::<Signal<PortalTheme>>()
}

pub fn use_portal_config() -> PortalConfig {
    use_context::<PortalConfig>()
}

/// Handle for raising toasts from any component.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    toasts: Signal<ToastNotifier>,
}

impl Toaster {
    pub fn new(toasts: Signal<ToastNotifier>) -> Self {
        Self { toasts }
    }

    /// Show a toast. Messages without a duration get the configured one.
    pub fn show(mut self, message: ToastMessage) -> ToastId {
        self.toasts.write().show(message, now())
    }

    pub fn dismiss(mut self, id: ToastId) -> bool {
        self.toasts.write().dismiss(id, now())
    }

    pub fn stack(&self) -> Signal<ToastNotifier> {
        self.toasts
    }
}

/// Hook to access the toast stack.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

/// Drive a [`Timed`] component from the UI loop.
///
/// Spawns a task scoped to the calling component that advances `state`
/// whenever its next deadline has passed and hands the events to
/// `on_events`. The task ends when the component unmounts, so nothing
/// fires for an unmounted component.
pub fn use_timed<T, F>(mut state: Signal<T>, on_events: F)
where
    T: Timed + 'static,
    F: FnMut(Vec<T::Event>) + 'static,
{
    use_hook(move || {
        let mut on_events = on_events;
        spawn(async move {
            loop {
                tokio::time::sleep(FRAME).await;
                let at = now();
                if !state.peek().is_due(at) {
                    continue;
                }
                let events = state.write().advance(at);
                if !events.is_empty() {
                    on_events(events);
                }
            }
        });
    });
}
