//! Property-based tests for the portal state machines
//!
//! Uses proptest to check the invariants that must hold for any input
//! sequence, not just the hand-picked scenarios.

use proptest::prelude::*;
use portal_core::{
    Activation, ContainerId, DoorConfig, DoorEvent, DoorNavigator, DoorState, MemoryStore,
    ParticleField, ParticleSpec, PortalRoute, PreferenceStore, ThemeController, ThemeMode, Timed,
    ToastMessage, ToastNotifier, THEME_KEY,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Things that can happen to the theme after startup
#[derive(Debug, Clone)]
enum ThemeOp {
    Toggle,
    OsChange(bool),
}

fn theme_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<ThemeOp>> {
    prop::collection::vec(
        prop_oneof![
            1 => Just(ThemeOp::Toggle),
            2 => any::<bool>().prop_map(ThemeOp::OsChange),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After any toggle, the mode is whatever the last toggle produced,
    /// no matter what the OS reports afterwards.
    #[test]
    fn last_toggle_wins(os_dark in any::<bool>(), ops in theme_ops_strategy(40)) {
        let store = MemoryStore::new();
        let mut theme = ThemeController::new(store.clone());
        theme.initialize(os_dark);

        let mut after_last_toggle: Option<ThemeMode> = None;
        for op in ops {
            match op {
                ThemeOp::Toggle => {
                    theme.toggle();
                    after_last_toggle = Some(theme.mode());
                }
                ThemeOp::OsChange(dark) => {
                    theme.os_preference_changed(dark);
                }
            }
        }

        if let Some(expected) = after_last_toggle {
            prop_assert_eq!(theme.mode(), expected);
            prop_assert_eq!(store.get(THEME_KEY).unwrap(), Some(expected.as_str().to_string()));
        }
    }

    /// Without any toggle, the mode tracks the latest OS signal.
    #[test]
    fn os_signal_followed_without_toggle(os_dark in any::<bool>(), changes in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut theme = ThemeController::new(MemoryStore::new());
        theme.initialize(os_dark);

        let mut last = os_dark;
        for dark in changes {
            theme.os_preference_changed(dark);
            last = dark;
        }
        prop_assert_eq!(theme.mode(), ThemeMode::from_dark(last));
    }

    /// Live population equals `count` at every sample after the fill window.
    #[test]
    fn particle_population_invariant(
        seed in any::<u64>(),
        count in 1usize..40,
        samples in prop::collection::vec(2_000u64..60_000, 1..50),
    ) {
        let mut field = ParticleField::seeded(ParticleSpec::ambient(count, "white"), seed);
        field.start(Some(ContainerId::new("c")), 0);

        let mut samples = samples;
        samples.sort_unstable();
        for t in samples {
            field.advance(t);
            prop_assert_eq!(field.population(), count);
        }
    }

    /// Any burst of clicks yields one toast and one navigation.
    #[test]
    fn door_navigates_once(clicks in prop::collection::vec(0u64..3_000, 1..10)) {
        let mut door = DoorNavigator::new(DoorConfig::new(PortalRoute::WaterBreather, "Water Breather", "#0096C7"));
        door.reveal(600, 0);

        let mut clicks = clicks;
        clicks.sort_unstable();

        let mut toasts = 0;
        let mut navigations = 0;
        for t in clicks {
            navigations += door.advance(t).iter().filter(|e| matches!(e, DoorEvent::Navigate(_))).count();
            if let Activation::Opened { .. } = door.activate(t) {
                toasts += 1;
            }
        }
        navigations += door.advance(10_000).iter().filter(|e| matches!(e, DoorEvent::Navigate(_))).count();

        prop_assert_eq!(toasts, 1);
        prop_assert_eq!(navigations, 1);
        prop_assert_eq!(door.state(), DoorState::Opening);
    }

    /// Toasts always display in insertion order and all leave eventually.
    #[test]
    fn toasts_fifo_and_drain(durations in prop::collection::vec(100u64..5_000, 1..15)) {
        let mut toasts = ToastNotifier::new();
        let ids: Vec<_> = durations
            .iter()
            .enumerate()
            .map(|(i, d)| toasts.show(ToastMessage::new(format!("t{}", i)).with_duration(*d), i as u64))
            .collect();

        let shown: Vec<_> = toasts.entries().iter().map(|e| e.id).collect();
        prop_assert_eq!(shown, ids);

        toasts.advance(1_000_000);
        prop_assert!(toasts.is_empty());
    }
}
