use std::path::Path;

use dioxus::prelude::*;
use portal_core::{MemoryStore, PortalRoute, PreferenceStore, Storage, ThemeController, ToastNotifier};

use crate::components::{ThemeToggle, ToastOverlay};
use crate::context::{launch_settings, use_timed, PortalTheme, Toaster};
use crate::pages::{Creature, Index, NotFound, Warrior, WaterBreather};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Door selection screen
/// - `/warrior`, `/water-breather`, `/creature` - Showcase pages
/// - anything else - Not Found, which forwards legacy page names
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Index {},
    #[route("/warrior")]
    Warrior {},
    #[route("/water-breather")]
    WaterBreather {},
    #[route("/creature")]
    Creature {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<PortalRoute> for Route {
    fn from(route: PortalRoute) -> Self {
        match route {
            PortalRoute::Home => Route::Index {},
            PortalRoute::Warrior => Route::Warrior {},
            PortalRoute::WaterBreather => Route::WaterBreather {},
            PortalRoute::Creature => Route::Creature {},
        }
    }
}

/// Listens to `prefers-color-scheme`: sends the current value, then every change.
const COLOR_SCHEME_WATCHER: &str = r#"
const query = window.matchMedia('(prefers-color-scheme: dark)');
dioxus.send(query.matches);
query.addEventListener('change', (event) => dioxus.send(event.matches));
await new Promise(() => {});
"#;

/// Root application component.
///
/// Provides global styles, the theme and toast contexts, and routing.
#[component]
pub fn App() -> Element {
    let settings = launch_settings();

    // A stored choice applies on the first frame; only the OS fallback waits for the webview
    let theme: Signal<PortalTheme> = use_signal(|| {
        let mut theme = ThemeController::new(open_preferences(&settings.data_dir));
        theme.restore();
        theme
    });
    let toasts: Signal<ToastNotifier> = use_signal(|| {
        ToastNotifier::with_default_duration(settings.config.toast_duration_ms)
    });

    use_context_provider(|| theme);
    use_context_provider(|| Toaster::new(toasts));
    use_context_provider(|| settings.config.clone());

    use_timed(toasts, |_| {});

    // Fall back to the OS scheme when nothing was stored, then follow it
    use_future(move || watch_color_scheme(theme));

    let root_class = theme.read().mode().root_class();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "portal {root_class}",
            Router::<Route> {}
            ThemeToggle {}
            ToastOverlay {}
        }
    }
}

/// Preference storage, falling back to session-only memory.
fn open_preferences(data_dir: &Path) -> Box<dyn PreferenceStore> {
    match Storage::open_in(data_dir) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!("Preferences unavailable, theme will not persist: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}

async fn watch_color_scheme(mut theme: Signal<PortalTheme>) {
    let mut watcher = document::eval(COLOR_SCHEME_WATCHER);

    let prefers_dark = match watcher.recv::<bool>().await {
        Ok(dark) => dark,
        Err(e) => {
            tracing::debug!("Color scheme query failed: {:?}", e);
            false
        }
    };
    theme.write().initialize(prefers_dark);

    while let Ok(dark) = watcher.recv::<bool>().await {
        theme.write().os_preference_changed(dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_paths_match_portal_routes() {
        for route in PortalRoute::ALL {
            assert_eq!(Route::from(route).to_string(), route.path());
        }
    }

    #[test]
    fn unknown_paths_land_on_not_found() {
        let route: Route = "/dragon".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
