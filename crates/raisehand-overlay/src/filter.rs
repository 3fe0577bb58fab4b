use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

/// Decision of the [`DedupFilter`] for a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    /// Arrived too soon after the previous event that passed the throttle.
    Throttled,
    /// The same text was shown within the dedup window.
    Duplicate,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Verdict::Accepted
    }
}

/// Suppresses repeated signals produced by DOM mutation storms.
///
/// Two gates are applied in order, and both have to pass:
/// - a global micro-throttle over all events, and
/// - a per-text window keyed by the rendered notification text.
#[derive(Debug, Clone)]
pub struct DedupFilter {
    throttle: Duration,
    window: Duration,
    last_passed: Option<Instant>, // last event that got through the throttle gate
    shown: HashMap<String, Instant>,
}

impl DedupFilter {
    pub fn new(throttle: Duration, window: Duration) -> Self {
        Self {
            throttle,
            window,
            last_passed: None,
            shown: HashMap::new(),
        }
    }

    /// Runs `key` through both gates at time `now`.
    pub fn accept(&mut self, key: &str, now: Instant) -> Verdict {
        if let Some(last) = self.last_passed
            && now.saturating_duration_since(last) < self.throttle
        {
            return Verdict::Throttled;
        }
        self.last_passed = Some(now);

        if let Some(&shown_at) = self.shown.get(key)
            && now.saturating_duration_since(shown_at) < self.window
        {
            return Verdict::Duplicate;
        }

        self.shown.insert(key.to_owned(), now);
        self.purge(now);
        Verdict::Accepted
    }

    pub fn set_timing(&mut self, throttle: Duration, window: Duration) {
        self.throttle = throttle;
        self.window = window;
    }

    /// Drops the record of `key`, so the next identical text is not treated
    /// as a duplicate.
    pub fn forget(&mut self, key: &str) {
        self.shown.remove(key);
    }

    /// Number of texts currently remembered.
    pub fn tracked(&self) -> usize {
        self.shown.len()
    }

    // entries older than twice the window can no longer suppress anything
    fn purge(&mut self, now: Instant) {
        let horizon = self.window * 2;
        self.shown
            .retain(|_, shown_at| now.saturating_duration_since(*shown_at) <= horizon);
    }
}

impl Default for DedupFilter {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(crate::THROTTLE_MILLISECONDS),
            Duration::from_millis(crate::DEDUP_WINDOW_MILLISECONDS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, milliseconds: u64) -> Instant {
        base + Duration::from_millis(milliseconds)
    }

    #[test]
    fn bursts_are_throttled() {
        let base = Instant::now();
        let mut filter = DedupFilter::default();

        assert_eq!(filter.accept("a", at(base, 0)), Verdict::Accepted);
        assert_eq!(filter.accept("b", at(base, 50)), Verdict::Throttled);
        assert_eq!(filter.accept("c", at(base, 119)), Verdict::Throttled);
        assert_eq!(filter.accept("d", at(base, 120)), Verdict::Accepted);
    }

    #[test]
    fn throttled_events_do_not_extend_the_throttle() {
        let base = Instant::now();
        let mut filter = DedupFilter::default();

        assert!(filter.accept("a", at(base, 0)).is_accepted());
        assert_eq!(filter.accept("b", at(base, 100)), Verdict::Throttled);
        assert!(filter.accept("c", at(base, 130)).is_accepted());
    }

    #[test]
    fn duplicates_still_reset_the_throttle_clock() {
        let base = Instant::now();
        let mut filter = DedupFilter::default();

        assert!(filter.accept("a", at(base, 0)).is_accepted());
        assert_eq!(filter.accept("a", at(base, 200)), Verdict::Duplicate);
        assert_eq!(filter.accept("b", at(base, 250)), Verdict::Throttled);
        assert!(filter.accept("b", at(base, 320)).is_accepted());
    }

    #[test]
    fn same_text_is_suppressed_within_the_window() {
        let base = Instant::now();
        let mut filter = DedupFilter::default();

        assert!(filter.accept("Maria raised their hand.", at(base, 0)).is_accepted());
        assert_eq!(
            filter.accept("Maria raised their hand.", at(base, 4_999)),
            Verdict::Duplicate
        );
        assert!(filter.accept("Maria raised their hand.", at(base, 5_120)).is_accepted());
    }

    #[test]
    fn window_ends_exactly_after_five_seconds() {
        let base = Instant::now();
        let mut filter = DedupFilter::default();

        assert!(filter.accept("Maria raised their hand.", at(base, 0)).is_accepted());
        assert!(filter.accept("Maria raised their hand.", at(base, 5_000)).is_accepted());
    }

    #[test]
    fn old_entries_are_purged_on_acceptance() {
        let base = Instant::now();
        let mut filter = DedupFilter::default();

        assert!(filter.accept("first", at(base, 0)).is_accepted());
        assert!(filter.accept("second", at(base, 1_000)).is_accepted());
        assert_eq!(filter.tracked(), 2);

        assert!(filter.accept("third", at(base, 10_500)).is_accepted());
        assert_eq!(filter.tracked(), 2);

        assert!(filter.accept("fourth", at(base, 30_000)).is_accepted());
        assert_eq!(filter.tracked(), 1);
    }

    #[test]
    fn forgotten_text_is_accepted_again() {
        let base = Instant::now();
        let mut filter = DedupFilter::default();

        assert!(filter.accept("retry", at(base, 0)).is_accepted());
        filter.forget("retry");
        assert!(filter.accept("retry", at(base, 500)).is_accepted());
    }
}
