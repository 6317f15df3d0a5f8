// SPDX-License-Identifier: MPL-2.0
//! Edge-triggered scroll sentinel.
//!
//! The gallery scrollable reports its relative vertical offset on every
//! scroll; the sentinel turns that stream into discrete "near the end"
//! signals. It fires once per crossing of the threshold and stays quiet
//! until the offset retreats below it again, so a user parked at the bottom
//! of the grid does not produce a trigger per scroll event. Fetch admission
//! itself is the feed's phase gate; the sentinel only decides *when to ask*.

/// Relative offset at which the feed is asked for the next page.
pub const DEFAULT_THRESHOLD: f32 = 0.9;

#[derive(Debug, Clone)]
pub struct ScrollSentinel {
    threshold: f32,
    armed: bool,
}

impl Default for ScrollSentinel {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl ScrollSentinel {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            armed: true,
        }
    }

    /// Feeds one relative offset (0.0 top, 1.0 bottom) into the sentinel.
    /// Returns `true` exactly once per threshold crossing.
    pub fn observe(&mut self, relative_offset: f32) -> bool {
        if relative_offset >= self.threshold {
            let fired = self.armed;
            self.armed = false;
            fired
        } else {
            self.armed = true;
            false
        }
    }

    /// Re-arms the sentinel. Called on query change so a trigger bound to
    /// the previous query's scroll position cannot carry over, and after a
    /// page merge so the next crossing can fire again.
    pub fn rearm(&mut self) {
        self.armed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_crossing() {
        let mut sentinel = ScrollSentinel::new(0.9);
        assert!(!sentinel.observe(0.2));
        assert!(sentinel.observe(0.95));
        // Parked at the bottom: no further triggers.
        assert!(!sentinel.observe(0.97));
        assert!(!sentinel.observe(1.0));
    }

    #[test]
    fn rearms_after_retreating_below_threshold() {
        let mut sentinel = ScrollSentinel::new(0.9);
        assert!(sentinel.observe(0.95));
        assert!(!sentinel.observe(0.99));
        assert!(!sentinel.observe(0.5));
        assert!(sentinel.observe(0.92));
    }

    #[test]
    fn explicit_rearm_allows_refiring_at_the_bottom() {
        let mut sentinel = ScrollSentinel::new(0.9);
        assert!(sentinel.observe(1.0));
        assert!(!sentinel.observe(1.0));

        // New content was appended (or the query changed): fire again even
        // though the offset never dipped below the threshold.
        sentinel.rearm();
        assert!(sentinel.observe(1.0));
    }

    #[test]
    fn fires_immediately_when_content_is_too_short_to_scroll() {
        // A grid shorter than the viewport reports offset 0.0 but a
        // threshold of 0.0 would fire; the default threshold does not.
        let mut sentinel = ScrollSentinel::default();
        assert!(!sentinel.observe(0.0));

        let mut eager = ScrollSentinel::new(0.0);
        assert!(eager.observe(0.0));
    }

    #[test]
    fn threshold_is_clamped_to_unit_range() {
        let mut sentinel = ScrollSentinel::new(7.5);
        assert!(sentinel.observe(1.0));
    }
}
