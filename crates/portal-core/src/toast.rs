//! Transient notifications.
//!
//! Toasts stack in insertion order, dismiss themselves after their duration
//! and play a short exit animation before leaving the stack.

use serde::{Deserialize, Serialize};

use crate::clock::{Millis, Timed, TimerQueue};

/// How long a toast stays up when the caller does not say otherwise
pub const DEFAULT_TOAST_DURATION_MS: Millis = 3_000;

/// Length of the exit animation between dismissal and removal
pub const TOAST_EXIT_MS: Millis = 300;

/// Visual severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Success,
    Destructive,
}

impl ToastVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast-default",
            ToastVariant::Success => "toast-success",
            ToastVariant::Destructive => "toast-destructive",
        }
    }
}

/// What a component wants to tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    /// `None` leaves the choice to the notifier's default
    pub duration_ms: Option<Millis>,
}

impl ToastMessage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: ToastVariant::Default,
            duration_ms: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_duration(mut self, duration_ms: Millis) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Handle returned by [`ToastNotifier::show`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Stable render key
    pub fn key(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// On screen, waiting for its timeout or a close click
    Shown,
    /// Exit animation running
    Leaving,
}

/// A toast currently in the stack
#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: ToastId,
    pub message: ToastMessage,
    pub phase: ToastPhase,
    pub shown_at: Millis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastTimer {
    Expire(ToastId),
    Remove(ToastId),
}

/// Emitted by [`ToastNotifier::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastChange {
    Leaving(ToastId),
    Removed(ToastId),
}

/// Shared, append-ordered notification stack.
#[derive(Debug)]
pub struct ToastNotifier {
    entries: Vec<ToastEntry>,
    timers: TimerQueue<ToastTimer>,
    next_id: u64,
    default_duration_ms: Millis,
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::with_default_duration(DEFAULT_TOAST_DURATION_MS)
    }
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier whose toasts without an explicit duration stay up for `duration_ms`.
    pub fn with_default_duration(duration_ms: Millis) -> Self {
        Self {
            entries: Vec::new(),
            timers: TimerQueue::new(),
            next_id: 0,
            default_duration_ms: duration_ms,
        }
    }

    pub fn default_duration_ms(&self) -> Millis {
        self.default_duration_ms
    }

    /// Append a toast and schedule its auto-dismissal.
    pub fn show(&mut self, message: ToastMessage, now: Millis) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let duration = message.duration_ms.unwrap_or(self.default_duration_ms);
        tracing::debug!(toast = id.0, title = %message.title, duration, "Showing toast");
        self.timers
            .schedule_after(now, duration, ToastTimer::Expire(id));
        self.entries.push(ToastEntry {
            id,
            message,
            phase: ToastPhase::Shown,
            shown_at: now,
        });
        id
    }

    /// Close a toast before its timeout.
    ///
    /// Returns false if the toast is unknown or already leaving.
    pub fn dismiss(&mut self, id: ToastId, now: Millis) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        if entry.phase == ToastPhase::Leaving {
            return false;
        }

        entry.phase = ToastPhase::Leaving;
        self.timers
            .cancel_where(|t| *t == ToastTimer::Expire(id));
        self.timers
            .schedule_after(now, TOAST_EXIT_MS, ToastTimer::Remove(id));
        true
    }

    /// Toasts in display order (oldest first).
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn get(&self, id: ToastId) -> Option<&ToastEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Timed for ToastNotifier {
    type Event = ToastChange;

    fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    fn advance(&mut self, now: Millis) -> Vec<ToastChange> {
        let mut changes = Vec::new();

        while let Some((due, timer)) = self.timers.pop_due(now) {
            match timer {
                ToastTimer::Expire(id) => {
                    if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
                        entry.phase = ToastPhase::Leaving;
                        self.timers
                            .schedule_after(due, TOAST_EXIT_MS, ToastTimer::Remove(id));
                        changes.push(ToastChange::Leaving(id));
                    }
                }
                ToastTimer::Remove(id) => {
                    self.entries.retain(|e| e.id != id);
                    changes.push(ToastChange::Removed(id));
                }
            }
        }

        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let msg = ToastMessage::new("Saved");
        assert_eq!(msg.duration_ms, None);
        assert_eq!(msg.variant, ToastVariant::Default);
        assert!(msg.description.is_none());
    }

    #[test]
    fn test_auto_dismiss_runs_exit_animation() {
        let mut toasts = ToastNotifier::new();
        let id = toasts.show(ToastMessage::new("Hello").with_duration(1_000), 0);

        assert!(toasts.advance(999).is_empty());
        assert_eq!(toasts.advance(1_000), vec![ToastChange::Leaving(id)]);
        assert_eq!(toasts.get(id).map(|e| e.phase), Some(ToastPhase::Leaving));

        assert!(toasts.advance(1_299).is_empty());
        assert_eq!(toasts.advance(1_300), vec![ToastChange::Removed(id)]);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_explicit_duration_beats_notifier_default() {
        let mut toasts = ToastNotifier::with_default_duration(5_000);
        let stock = toasts.show(ToastMessage::new("Stock"), 0);
        let explicit = toasts.show(
            ToastMessage::new("Explicit").with_duration(DEFAULT_TOAST_DURATION_MS),
            0,
        );

        assert_eq!(toasts.advance(3_000), vec![ToastChange::Leaving(explicit)]);
        assert!(toasts.advance(4_999).iter().all(|c| *c != ToastChange::Leaving(stock)));
        assert!(toasts.advance(5_000).contains(&ToastChange::Leaving(stock)));
    }

    #[test]
    fn test_late_advance_processes_whole_lifecycle() {
        let mut toasts = ToastNotifier::new();
        let id = toasts.show(ToastMessage::new("Hello"), 0);

        let changes = toasts.advance(10_000);
        assert_eq!(changes, vec![ToastChange::Leaving(id), ToastChange::Removed(id)]);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_explicit_dismiss_cancels_timeout() {
        let mut toasts = ToastNotifier::new();
        let id = toasts.show(ToastMessage::new("Bye"), 0);

        assert!(toasts.dismiss(id, 100));
        assert!(!toasts.dismiss(id, 150), "second dismiss is a no-op");

        assert_eq!(toasts.advance(400), vec![ToastChange::Removed(id)]);
        // The 3s auto-dismiss must not fire for a removed toast
        assert!(toasts.advance(5_000).is_empty());
        assert_eq!(toasts.next_deadline(), None);
    }

    #[test]
    fn test_fifo_order_without_dedup() {
        let mut toasts = ToastNotifier::new();
        let a = toasts.show(ToastMessage::new("Same"), 0);
        let b = toasts.show(ToastMessage::new("Same"), 10);
        let c = toasts.show(ToastMessage::new("Other"), 20);

        let order: Vec<_> = toasts.entries().iter().map(|e| e.id).collect();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn test_dismiss_unknown() {
        let mut toasts = ToastNotifier::new();
        let id = toasts.show(ToastMessage::new("x"), 0);
        toasts.advance(10_000);
        assert!(!toasts.dismiss(id, 10_000));
    }
}
