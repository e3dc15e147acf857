//! Door controls on the home screen.
//!
//! Each door walks `Hidden → Visible → Opening`. Opening is terminal: the
//! door announces the destination, waits for the opening animation, then
//! asks the host to navigate exactly once.

use rand::rngs::StdRng;
use rand::Rng;

use crate::clock::{Millis, Timed, TimerQueue};
use crate::particles::{ParticleBurst, ParticleSpec};
use crate::routes::PortalRoute;
use crate::toast::ToastMessage;

/// Time between activation and navigation; long enough for the door to swing open
pub const NAVIGATION_DWELL_MS: Millis = 1_500;

/// Decorative ring ornaments on each door frame (top-left, bottom-right)
pub const HOVER_FRAMES: usize = 2;

/// Sparks spawned on each ornament per hover
pub const HOVER_PARTICLES_PER_FRAME: usize = 5;

/// One navigable door.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorConfig {
    pub destination: PortalRoute,
    pub label: String,
    pub accent_color: String,
    pub image_src: String,
    /// Stagger before the door fades in
    pub reveal_delay_ms: Millis,
    pub dwell_ms: Millis,
}

impl DoorConfig {
    pub fn new(
        destination: PortalRoute,
        label: impl Into<String>,
        accent_color: impl Into<String>,
    ) -> Self {
        Self {
            destination,
            label: label.into(),
            accent_color: accent_color.into(),
            image_src: String::new(),
            reveal_delay_ms: 0,
            dwell_ms: NAVIGATION_DWELL_MS,
        }
    }

    pub fn with_image(mut self, image_src: impl Into<String>) -> Self {
        self.image_src = image_src.into();
        self
    }

    pub fn with_reveal_delay(mut self, delay_ms: Millis) -> Self {
        self.reveal_delay_ms = delay_ms;
        self
    }

    pub fn with_dwell(mut self, dwell_ms: Millis) -> Self {
        self.dwell_ms = dwell_ms;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorState {
    #[default]
    Hidden,
    Visible,
    Opening,
}

impl DoorState {
    /// Returns the CSS class for this state
    pub fn class(&self) -> &'static str {
        match self {
            DoorState::Hidden => "door-hidden",
            DoorState::Visible => "door-visible",
            DoorState::Opening => "door-opening",
        }
    }
}

/// Result of [`DoorNavigator::activate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The door started opening; show this toast
    Opened { toast: ToastMessage },
    /// Already opening
    Ignored,
}

/// Emitted by [`DoorNavigator::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorEvent {
    Revealed,
    /// Change the active page. Emitted at most once per door.
    Navigate(PortalRoute),
    /// Hover sparks timed out and left the frame
    SparksFaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DoorTimer {
    Reveal,
    Navigate,
}

/// Per-door state machine.
#[derive(Debug)]
pub struct DoorNavigator<R = StdRng> {
    config: DoorConfig,
    state: DoorState,
    timers: TimerQueue<DoorTimer>,
    reveal_requested: bool,
    navigated: bool,
    hovering: bool,
    sparks: ParticleBurst<R>,
}

impl DoorNavigator<StdRng> {
    pub fn new(config: DoorConfig) -> Self {
        let sparks = ParticleBurst::new(ParticleSpec::burst(config.accent_color.clone()));
        Self::with_sparks(config, sparks)
    }
}

impl<R: Rng> DoorNavigator<R> {
    pub fn with_sparks(config: DoorConfig, sparks: ParticleBurst<R>) -> Self {
        Self {
            config,
            state: DoorState::Hidden,
            timers: TimerQueue::new(),
            reveal_requested: false,
            navigated: false,
            hovering: false,
            sparks,
        }
    }

    /// Schedule the fade-in. Only the first call has any effect.
    pub fn reveal(&mut self, delay_ms: Millis, now: Millis) -> bool {
        if self.reveal_requested || self.state != DoorState::Hidden {
            return false;
        }
        self.reveal_requested = true;
        self.timers.schedule_after(now, delay_ms, DoorTimer::Reveal);
        true
    }

    /// Open the door and schedule navigation.
    ///
    /// Repeated activation while opening is ignored, so rapid clicks
    /// navigate once.
    pub fn activate(&mut self, now: Millis) -> Activation {
        if self.state == DoorState::Opening {
            tracing::debug!(door = %self.config.label, "Door already opening");
            return Activation::Ignored;
        }

        self.state = DoorState::Opening;
        self.timers.cancel_where(|t| *t == DoorTimer::Reveal);
        self.timers
            .schedule_after(now, self.config.dwell_ms, DoorTimer::Navigate);

        tracing::info!(
            door = %self.config.label,
            destination = %self.config.destination,
            "Door opening"
        );
        Activation::Opened {
            toast: ToastMessage::new(format!("Entering {} world...", self.config.label)),
        }
    }

    /// Pointer entered the door. Spawns frame sparks unless opening.
    pub fn hover_start(&mut self, now: Millis) -> bool {
        if self.state == DoorState::Opening {
            return false;
        }
        self.hovering = true;
        self.sparks
            .burst(HOVER_FRAMES, HOVER_PARTICLES_PER_FRAME, now);
        true
    }

    /// Pointer left. Sparks already spawned fade on their own.
    pub fn hover_end(&mut self) {
        self.hovering = false;
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    pub fn config(&self) -> &DoorConfig {
        &self.config
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether the glow behind the door is lit
    pub fn is_glowing(&self) -> bool {
        self.hovering || self.state == DoorState::Opening
    }

    pub fn has_navigated(&self) -> bool {
        self.navigated
    }

    pub fn sparks(&self) -> &ParticleBurst<R> {
        &self.sparks
    }
}

impl<R: Rng> Timed for DoorNavigator<R> {
    type Event = DoorEvent;

    fn next_deadline(&self) -> Option<Millis> {
        match (self.timers.next_deadline(), self.sparks.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn advance(&mut self, now: Millis) -> Vec<DoorEvent> {
        let mut events = Vec::new();

        while let Some((_, timer)) = self.timers.pop_due(now) {
            match timer {
                DoorTimer::Reveal => {
                    if self.state == DoorState::Hidden {
                        self.state = DoorState::Visible;
                        events.push(DoorEvent::Revealed);
                    }
                }
                DoorTimer::Navigate => {
                    if !self.navigated {
                        self.navigated = true;
                        tracing::info!(destination = %self.config.destination, "Navigating");
                        events.push(DoorEvent::Navigate(self.config.destination));
                    }
                }
            }
        }

        if !self.sparks.advance(now).is_empty() {
            events.push(DoorEvent::SparksFaded);
        }

        events
    }
}
