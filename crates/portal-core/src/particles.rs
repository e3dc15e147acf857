//! Decorative particles.
//!
//! [`ParticleField`] keeps exactly `count` particles alive in a container,
//! forever: when one expires it is removed and a freshly randomized
//! replacement is spawned in the same step. [`ParticleBurst`] is the
//! non-replenishing variant used for hover effects.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::{Millis, Timed, TimerQueue};

/// How long a hover burst particle stays before it removes itself
pub const BURST_TIMEOUT_MS: Millis = 3_000;

/// Identifies the element a field renders into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Randomization bounds for one call site.
///
/// Ranges are half-open; an empty range yields its start value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    /// Live population
    pub count: usize,
    /// CSS color, chosen by the caller to suit the page
    pub color: String,
    pub size_px: Range<f32>,
    pub opacity: Range<f32>,
    /// How long one particle lives before it is replaced
    pub lifetime_ms: Range<Millis>,
    /// CSS animation delay, staggers the visible motion
    pub animation_delay_ms: Range<Millis>,
    /// Delay before each initial spawn, avoids synchronized pulsing
    pub initial_stagger_ms: Range<Millis>,
}

impl ParticleSpec {
    /// Full-page floating particles.
    pub fn ambient(count: usize, color: impl Into<String>) -> Self {
        Self {
            count,
            color: color.into(),
            size_px: 3.0..8.0,
            opacity: 0.2..0.8,
            lifetime_ms: 5_000..15_000,
            animation_delay_ms: 0..5_000,
            initial_stagger_ms: 0..2_000,
        }
    }

    /// Denser, smaller particles behind a showcase hero image.
    pub fn character(count: usize, color: impl Into<String>) -> Self {
        Self {
            size_px: 2.0..8.0,
            opacity: 0.5..1.0,
            animation_delay_ms: 0..3_000,
            ..Self::ambient(count, color)
        }
    }

    /// Field shown around a door while the pointer is over it.
    pub fn door_hover(color: impl Into<String>) -> Self {
        Self::ambient(15, color)
    }

    /// Short-lived sparks on a door's frame ornaments.
    pub fn burst(color: impl Into<String>) -> Self {
        Self {
            count: 0,
            color: color.into(),
            size_px: 3.0..8.0,
            opacity: 0.3..1.0,
            lifetime_ms: 2_000..5_000,
            animation_delay_ms: 0..0,
            initial_stagger_ms: 0..0,
        }
    }

    pub fn with_lifetime(mut self, lifetime_ms: Range<Millis>) -> Self {
        self.lifetime_ms = lifetime_ms;
        self
    }
}

/// Render key, unique within one field or burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(u64);

impl ParticleId {
    pub fn key(&self) -> u64 {
        self.0
    }
}

/// One live particle. Positions are percentages of the container.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub x_pct: f32,
    pub y_pct: f32,
    pub size_px: f32,
    pub opacity: f32,
    pub color: String,
    pub lifetime_ms: Millis,
    pub animation_delay_ms: Millis,
    pub spawned_at: Millis,
}

impl Particle {
    pub fn expires_at(&self) -> Millis {
        self.spawned_at.saturating_add(self.lifetime_ms)
    }

    /// Inline style for the particle element
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; background-color: {}; opacity: {:.2}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x_pct,
            self.y_pct,
            self.size_px,
            self.size_px,
            self.color,
            self.opacity,
            self.lifetime_ms as f64 / 1_000.0,
            self.animation_delay_ms as f64 / 1_000.0,
        )
    }
}

/// Emitted by [`ParticleField::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleChange {
    Spawned(ParticleId),
    Expired(ParticleId),
}

fn sample_f32(rng: &mut impl Rng, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.random_range(range.clone())
    } else {
        range.start
    }
}

fn sample_millis(rng: &mut impl Rng, range: &Range<Millis>) -> Millis {
    if range.start < range.end {
        rng.random_range(range.clone())
    } else {
        range.start
    }
}

/// Shortest lifetime a particle can get; a zero lifetime would respawn forever within one step
pub const MIN_LIFETIME_MS: Millis = 1;

fn roll_particle(rng: &mut impl Rng, spec: &ParticleSpec, id: ParticleId, now: Millis) -> Particle {
    Particle {
        id,
        x_pct: rng.random_range(0.0..100.0),
        y_pct: rng.random_range(0.0..100.0),
        size_px: sample_f32(rng, &spec.size_px),
        opacity: sample_f32(rng, &spec.opacity),
        color: spec.color.clone(),
        lifetime_ms: sample_millis(rng, &spec.lifetime_ms).max(MIN_LIFETIME_MS),
        animation_delay_ms: sample_millis(rng, &spec.animation_delay_ms),
        spawned_at: now,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldTimer {
    Spawn,
    Expire(ParticleId),
}

/// Constant-population, self-replenishing particle set.
#[derive(Debug)]
pub struct ParticleField<R = StdRng> {
    spec: ParticleSpec,
    rng: R,
    container: Option<ContainerId>,
    live: Vec<Particle>,
    timers: TimerQueue<FieldTimer>,
    next_id: u64,
    spawned_total: u64,
}

impl ParticleField<StdRng> {
    pub fn new(spec: ParticleSpec) -> Self {
        Self::with_rng(spec, StdRng::from_os_rng())
    }

    /// Deterministic field for tests and reproducible layouts
    pub fn seeded(spec: ParticleSpec, seed: u64) -> Self {
        Self::with_rng(spec, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(spec: ParticleSpec, rng: R) -> Self {
        Self {
            spec,
            rng,
            container: None,
            live: Vec::new(),
            timers: TimerQueue::new(),
            next_id: 0,
            spawned_total: 0,
        }
    }

    /// Schedule the initial population into `container`.
    ///
    /// Without a container the field stays idle. Starting a running field
    /// does nothing. Returns whether spawns were scheduled.
    pub fn start(&mut self, container: Option<ContainerId>, now: Millis) -> bool {
        let Some(container) = container else {
            tracing::debug!("Particle field has no container, staying idle");
            return false;
        };
        if self.container.is_some() {
            return false;
        }

        for _ in 0..self.spec.count {
            let delay = sample_millis(&mut self.rng, &self.spec.initial_stagger_ms);
            self.timers.schedule_after(now, delay, FieldTimer::Spawn);
        }

        tracing::debug!(
            container = container.as_str(),
            count = self.spec.count,
            "Particle field started"
        );
        self.container = Some(container);
        true
    }

    /// Remove every particle and cancel every pending spawn.
    pub fn stop(&mut self) {
        self.timers.clear();
        self.live.clear();
        if let Some(container) = self.container.take() {
            tracing::debug!(
                container = container.as_str(),
                spawned = self.spawned_total,
                "Particle field stopped"
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.container.is_some()
    }

    pub fn container(&self) -> Option<&ContainerId> {
        self.container.as_ref()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.live
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Particles created over the field's lifetime, replacements included
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    pub fn spec(&self) -> &ParticleSpec {
        &self.spec
    }

    fn spawn(&mut self, at: Millis) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.spawned_total += 1;

        let particle = roll_particle(&mut self.rng, &self.spec, id, at);
        self.timers
            .schedule(particle.expires_at(), FieldTimer::Expire(id));
        self.live.push(particle);
        id
    }
}

impl<R: Rng> Timed for ParticleField<R> {
    type Event = ParticleChange;

    fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    fn advance(&mut self, now: Millis) -> Vec<ParticleChange> {
        let mut changes = Vec::new();

        while let Some((due, timer)) = self.timers.pop_due(now) {
            match timer {
                FieldTimer::Spawn => {
                    changes.push(ParticleChange::Spawned(self.spawn(due)));
                }
                FieldTimer::Expire(id) => {
                    self.live.retain(|p| p.id != id);
                    changes.push(ParticleChange::Expired(id));
                    changes.push(ParticleChange::Spawned(self.spawn(due)));
                }
            }
        }

        changes
    }
}

/// Fixed-size groups of particles spread over decorative frame elements.
///
/// Bursts never replenish; every particle leaves after [`BURST_TIMEOUT_MS`].
#[derive(Debug)]
pub struct ParticleBurst<R = StdRng> {
    spec: ParticleSpec,
    rng: R,
    live: Vec<(usize, Particle)>,
    timers: TimerQueue<ParticleId>,
    next_id: u64,
}

impl ParticleBurst<StdRng> {
    pub fn new(spec: ParticleSpec) -> Self {
        Self::with_rng(spec, StdRng::from_os_rng())
    }

    pub fn seeded(spec: ParticleSpec, seed: u64) -> Self {
        Self::with_rng(spec, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleBurst<R> {
    pub fn with_rng(spec: ParticleSpec, rng: R) -> Self {
        Self {
            spec,
            rng,
            live: Vec::new(),
            timers: TimerQueue::new(),
            next_id: 0,
        }
    }

    /// Spawn `per_frame` particles on each of `frames` frame elements.
    pub fn burst(&mut self, frames: usize, per_frame: usize, now: Millis) -> Vec<ParticleId> {
        let mut spawned = Vec::with_capacity(frames * per_frame);
        for frame in 0..frames {
            for _ in 0..per_frame {
                let id = ParticleId(self.next_id);
                self.next_id += 1;

                let particle = roll_particle(&mut self.rng, &self.spec, id, now);
                self.timers.schedule_after(now, BURST_TIMEOUT_MS, id);
                self.live.push((frame, particle));
                spawned.push(id);
            }
        }
        spawned
    }

    /// Particles currently on frame element `frame`
    pub fn particles_on(&self, frame: usize) -> impl Iterator<Item = &Particle> + '_ {
        self.live
            .iter()
            .filter(move |(f, _)| *f == frame)
            .map(|(_, p)| p)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.live.clear();
        self.timers.clear();
    }
}

impl<R: Rng> Timed for ParticleBurst<R> {
    type Event = ParticleId;

    fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    fn advance(&mut self, now: Millis) -> Vec<ParticleId> {
        let mut removed = Vec::new();
        while let Some((_, id)) = self.timers.pop_due(now) {
            self.live.retain(|(_, p)| p.id != id);
            removed.push(id);
        }
        removed
    }
}
