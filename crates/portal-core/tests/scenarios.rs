//! End-to-end scenarios across the portal components.
//!
//! Each test drives components with explicit timestamps the way the UI
//! host does: check the deadline, advance, react to the events.

use portal_core::{
    home_doors, Activation, ContainerId, DoorConfig, DoorEvent, DoorNavigator, DoorState,
    HomeLayout, MemoryStore, ModeIcon, ParticleField, ParticleSpec, PortalRoute, PreferenceStore,
    Storage, ThemeController, ThemeMode, Timed, ToastNotifier, THEME_KEY,
};
use tempfile::TempDir;

// ============================================================================
// Theme
// ============================================================================

/// No stored theme, OS prefers dark: dark + moon, silent. Toggle: light + sun,
/// "light" stored, one toast.
#[test]
fn test_theme_first_launch_then_toggle() {
    let store = MemoryStore::new();
    let mut theme = ThemeController::new(store.clone());
    let mut toasts = ToastNotifier::new();

    assert_eq!(theme.initialize(true), ThemeMode::Dark);
    assert_eq!(theme.icon(), ModeIcon::Moon);
    assert!(toasts.is_empty(), "startup is silent");

    let toast = theme.toggle();
    toasts.show(toast, 0);

    assert_eq!(theme.mode(), ThemeMode::Light);
    assert_eq!(theme.icon(), ModeIcon::Sun);
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts.entries()[0].message.title, "Light Mode Activated");
}

/// The toggled choice survives a restart against the same database.
#[test]
fn test_theme_persists_across_launches() {
    let temp = TempDir::new().unwrap();

    {
        let mut theme = ThemeController::new(Storage::open_in(temp.path()).unwrap());
        theme.initialize(false);
        theme.toggle();
    }

    let mut theme = ThemeController::new(Storage::open_in(temp.path()).unwrap());
    assert_eq!(theme.initialize(false), ThemeMode::Dark);
    assert!(theme.is_explicit());
    assert_eq!(theme.os_preference_changed(false), None);
}

// ============================================================================
// Doors
// ============================================================================

/// Delay 900: hidden at 500, visible at 1000, opening on click, navigates
/// exactly once 1500ms later.
#[test]
fn test_door_reveal_click_navigate() {
    let mut door = DoorNavigator::new(
        DoorConfig::new(PortalRoute::Creature, "Creature", "#2B9348").with_reveal_delay(900),
    );
    door.reveal(door.config().reveal_delay_ms, 0);

    door.advance(500);
    assert_eq!(door.state(), DoorState::Hidden);

    door.advance(1_000);
    assert_eq!(door.state(), DoorState::Visible);

    assert!(matches!(door.activate(1_000), Activation::Opened { .. }));
    assert_eq!(door.state(), DoorState::Opening);

    let mut navigations = Vec::new();
    for t in (1_000..=3_000).step_by(100) {
        for event in door.advance(t) {
            if let DoorEvent::Navigate(route) = event {
                navigations.push((t, route));
            }
        }
    }
    assert_eq!(navigations, vec![(2_500, PortalRoute::Creature)]);
}

/// Two activations in a row: one toast, one navigation.
#[test]
fn test_double_activation_is_idempotent() {
    let mut door = DoorNavigator::new(DoorConfig::new(PortalRoute::Warrior, "Warrior", "#D90429"));
    let mut toasts = ToastNotifier::new();

    door.reveal(0, 0);
    door.advance(0);

    for now in [100, 101] {
        if let Activation::Opened { toast } = door.activate(now) {
            toasts.show(toast, now);
        }
    }

    let navigations = door
        .advance(10_000)
        .into_iter()
        .filter(|e| matches!(e, DoorEvent::Navigate(_)))
        .count();
    assert_eq!(navigations, 1);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts.entries()[0].message.title, "Entering Warrior world...");
}

/// The home screen doors reveal in stagger order.
#[test]
fn test_home_doors_reveal_in_sequence() {
    let mut doors: Vec<_> = home_doors(HomeLayout::Classic)
        .into_iter()
        .map(DoorNavigator::new)
        .collect();
    for door in &mut doors {
        let delay = door.config().reveal_delay_ms;
        door.reveal(delay, 0);
    }

    let visible_at = |doors: &mut Vec<DoorNavigator>, t| {
        doors
            .iter_mut()
            .map(|d| {
                d.advance(t);
                d.state() == DoorState::Visible
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(visible_at(&mut doors, 299), vec![false, false, false]);
    assert_eq!(visible_at(&mut doors, 300), vec![true, false, false]);
    assert_eq!(visible_at(&mut doors, 600), vec![true, true, false]);
    assert_eq!(visible_at(&mut doors, 900), vec![true, true, true]);
}

// ============================================================================
// Particles
// ============================================================================

/// Population stays at `count` across many lifetimes once the fill window is over.
#[test]
fn test_particle_population_is_constant() {
    let mut field = ParticleField::seeded(ParticleSpec::ambient(30, "rgba(59, 130, 246, 0.5)"), 42);
    field.start(Some(ContainerId::new("home-particles")), 0);

    // Initial fill window
    field.advance(2_000);

    for t in (2_000..=120_000).step_by(250) {
        field.advance(t);
        assert_eq!(field.population(), 30, "at t={}", t);
    }
    assert!(field.spawned_total() > 30 * 5, "particles must churn");
}

/// Teardown leaves nothing scheduled.
#[test]
fn test_particle_teardown_leaks_no_timers() {
    let mut field = ParticleField::seeded(ParticleSpec::character(30, "rgba(249, 115, 22, 0.7)"), 1);
    field.start(Some(ContainerId::new("character-particles")), 0);
    field.advance(5_000);

    field.stop();
    assert_eq!(field.next_deadline(), None);
    assert!(!field.is_due(u64::MAX));
}
