//! Transient "not a word" flag
//!
//! Raising the flag records a deadline instead of sleeping, so the caller never
//! blocks. Whoever drives the event loop calls `expire` with the current time;
//! once the deadline has passed the flag drops unconditionally.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvalidFlag {
    deadline: Option<Instant>,
}

impl InvalidFlag {
    /// Set the flag until `now + display`
    ///
    /// Raising again while set replaces the deadline with the newer one.
    pub fn raise(&mut self, now: Instant, display: Duration) {
        self.deadline = Some(now + display);
    }

    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the flag will drop, if it is set
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drop the flag if its deadline has passed; returns whether it dropped
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.deadline.is_some_and(|deadline| now >= deadline) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISPLAY: Duration = Duration::from_millis(500);

    #[test]
    fn flag_starts_clear() {
        assert!(!InvalidFlag::default().is_set());
    }

    #[test]
    fn flag_clears_after_deadline() {
        let now = Instant::now();
        let mut flag = InvalidFlag::default();
        flag.raise(now, DISPLAY);
        assert!(flag.is_set());

        assert!(!flag.expire(now + Duration::from_millis(499)));
        assert!(flag.is_set());

        assert!(flag.expire(now + DISPLAY));
        assert!(!flag.is_set());
    }

    #[test]
    fn raising_again_extends_deadline() {
        let now = Instant::now();
        let mut flag = InvalidFlag::default();
        flag.raise(now, DISPLAY);
        flag.raise(now + Duration::from_millis(300), DISPLAY);

        assert!(!flag.expire(now + DISPLAY));
        assert!(flag.expire(now + Duration::from_millis(800)));
    }

    #[test]
    fn expire_on_clear_flag_is_noop() {
        let mut flag = InvalidFlag::default();
        assert!(!flag.expire(Instant::now()));
        assert_eq!(flag.deadline(), None);
    }
}
