//! A boolean flag that self-resets after a fixed delay.
//!
//! Used for transient confirmations like the "copied to clipboard"
//! indicator. The generation counter is the re-arm token: each `trigger`
//! bumps it, and a scheduled reset carries the generation it was armed
//! with. A reset whose generation is no longer current is stale and is
//! discarded, so re-triggering restarts the delay instead of stacking
//! resets, and exactly one reset ever fires per arming sequence.

use std::time::Duration;

/// How long the flag stays set after the latest trigger.
pub const RESET_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimedFlag {
    active: bool,
    generation: u64,
}

impl TimedFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Arms the flag and returns the new generation. The caller schedules a
    /// reset carrying this value; any previously scheduled reset becomes
    /// stale the moment this returns.
    pub fn trigger(&mut self) -> u64 {
        self.active = true;
        self.generation += 1;
        self.generation
    }

    /// Clears the flag iff `generation` is still current. Returns whether
    /// the reset took effect; stale timers get false and change nothing.
    pub fn reset(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.active {
            self.active = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive() {
        assert!(!TimedFlag::new().is_active());
    }

    #[test]
    fn trigger_then_reset() {
        let mut flag = TimedFlag::new();
        let generation = flag.trigger();
        assert!(flag.is_active());
        assert!(flag.reset(generation));
        assert!(!flag.is_active());
    }

    #[test]
    fn retrigger_restarts_the_delay() {
        let mut flag = TimedFlag::new();
        let first = flag.trigger();
        // second trigger lands within the delay window
        let second = flag.trigger();

        // the first timer fires late and must not clobber the newer arming
        assert!(!flag.reset(first));
        assert!(flag.is_active());

        // only the timer armed by the second trigger resets the flag
        assert!(flag.reset(second));
        assert!(!flag.is_active());
    }

    #[test]
    fn reset_after_reset_is_a_no_op() {
        let mut flag = TimedFlag::new();
        let generation = flag.trigger();
        assert!(flag.reset(generation));
        assert!(!flag.reset(generation));
        assert!(!flag.is_active());
    }

    #[test]
    fn exactly_one_reset_fires_across_many_triggers() {
        let mut flag = TimedFlag::new();
        let generations: Vec<_> = (0..5).map(|_| flag.trigger()).collect();
        let effective: Vec<_> = generations
            .iter()
            .filter(|generation| flag.reset(**generation))
            .collect();
        assert_eq!(effective, vec![generations.last().unwrap()]);
        assert!(!flag.is_active());
    }
}
