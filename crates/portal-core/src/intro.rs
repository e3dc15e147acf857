//! Staged page entrance: header first, secondary copy after it.

use crate::clock::{Millis, Timed, TimerQueue};

/// Delay before the header slides in
pub const HEADER_DELAY_MS: Millis = 500;

/// Delay between the header and the instructions below the doors
pub const INSTRUCTIONS_DELAY_MS: Millis = 700;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum IntroStage {
    #[default]
    Loading,
    Header,
    Complete,
}

#[derive(Debug, Default)]
pub struct PageIntro {
    stage: IntroStage,
    timers: TimerQueue<IntroStage>,
}

impl PageIntro {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule both stages relative to `now`. Later calls are ignored.
    pub fn start(&mut self, now: Millis) {
        if self.stage != IntroStage::Loading || !self.timers.is_empty() {
            return;
        }
        self.timers
            .schedule_after(now, HEADER_DELAY_MS, IntroStage::Header);
        self.timers.schedule_after(
            now,
            HEADER_DELAY_MS + INSTRUCTIONS_DELAY_MS,
            IntroStage::Complete,
        );
    }

    pub fn stage(&self) -> IntroStage {
        self.stage
    }

    pub fn header_visible(&self) -> bool {
        self.stage >= IntroStage::Header
    }

    pub fn instructions_visible(&self) -> bool {
        self.stage == IntroStage::Complete
    }
}

impl Timed for PageIntro {
    type Event = IntroStage;

    fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    fn advance(&mut self, now: Millis) -> Vec<IntroStage> {
        let mut reached = Vec::new();
        while let Some((_, stage)) = self.timers.pop_due(now) {
            self.stage = self.stage.max(stage);
            reached.push(stage);
        }
        reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_in_order() {
        let mut intro = PageIntro::new();
        intro.start(0);

        intro.advance(499);
        assert!(!intro.header_visible());

        assert_eq!(intro.advance(500), vec![IntroStage::Header]);
        assert!(intro.header_visible());
        assert!(!intro.instructions_visible());

        assert_eq!(intro.advance(1_200), vec![IntroStage::Complete]);
        assert!(intro.instructions_visible());
    }

    #[test]
    fn test_restart_ignored() {
        let mut intro = PageIntro::new();
        intro.start(0);
        intro.start(10_000);
        intro.advance(1_200);
        assert_eq!(intro.stage(), IntroStage::Complete);
        assert_eq!(intro.next_deadline(), None);
    }
}
