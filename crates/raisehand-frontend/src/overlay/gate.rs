use std::time::Instant;

/// Most page events kept while waiting for the configuration.
pub const MAX_PENDING: usize = 64;

/// Holds back page events until the configuration is known, so that the
/// first toasts already honour the mute flag and the language.
#[derive(Debug)]
pub struct FeedGate {
    pending: Option<Vec<(String, Instant)>>,
}

impl FeedGate {
    pub fn new() -> Self {
        Self {
            pending: Some(Vec::new()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_none()
    }

    /// Returns the payload back when it can be handled right away.
    pub fn offer(&mut self, payload: &str, now: Instant) -> Option<String> {
        let Some(pending) = &mut self.pending else {
            return Some(payload.to_owned());
        };

        if pending.len() >= MAX_PENDING {
            log::warn!("Too many page events before the configuration, dropping the oldest");
            pending.remove(0);
        }
        pending.push((payload.to_owned(), now));
        None
    }

    /// Opens the gate, returning the held events with their arrival times,
    /// oldest first.
    pub fn open(&mut self) -> Vec<(String, Instant)> {
        self.pending.take().unwrap_or_default()
    }
}

impl Default for FeedGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn events_wait_for_the_configuration() {
        let base = Instant::now();
        let later = base + Duration::from_millis(300);
        let mut gate = FeedGate::new();

        assert_eq!(gate.offer("first", base), None);
        assert_eq!(gate.offer("second", later), None);
        assert!(!gate.is_open());

        assert_eq!(
            gate.open(),
            vec![("first".to_owned(), base), ("second".to_owned(), later)]
        );
        assert!(gate.is_open());
        assert_eq!(gate.offer("third", later).as_deref(), Some("third"));

        // a second configuration does not replay anything
        assert!(gate.open().is_empty());
    }

    #[test]
    fn held_events_are_bounded() {
        let now = Instant::now();
        let mut gate = FeedGate::new();
        for i in 0..=MAX_PENDING {
            gate.offer(&i.to_string(), now);
        }

        let held = gate.open();
        assert_eq!(held.len(), MAX_PENDING);
        assert_eq!(held[0].0, "1");
    }
}
