//! Explicit deadline values passed across call boundaries.

use std::time::{Duration, Instant};

/// An absolute point in time after which an in-flight operation is abandoned
/// and reported as failed.
///
/// A deadline is either bounded or unbounded ([`Deadline::none`]). Each hop
/// derives its own child deadline with [`Deadline::cap`], so the tightest
/// budget always wins: a caller with plenty of time left does not widen an
/// inner hop's own budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// An unbounded deadline, used as the root of a request.
    pub fn none() -> Self {
        Self { at: None }
    }

    /// A deadline expiring `budget` from now.
    pub fn within(budget: Duration) -> Self {
        Self {
            at: Some(Instant::now() + budget),
        }
    }

    /// Derives a child deadline: whichever of `self` and `now + budget`
    /// comes first. The result is always bounded.
    pub fn cap(self, budget: Duration) -> Self {
        let own = Instant::now() + budget;
        let at = match self.at {
            Some(parent) if parent < own => parent,
            _ => own,
        };
        Self { at: Some(at) }
    }

    /// Time left before expiry, or `None` when unbounded.
    pub fn remaining(&self) -> Option<Duration> {
        self.at.map(|at| at.saturating_duration_since(Instant::now()))
    }

    /// True once a bounded deadline has passed. An unbounded deadline never
    /// elapses.
    pub fn is_elapsed(&self) -> bool {
        matches!(self.at, Some(at) if at <= Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_root_never_elapses() {
        let root = Deadline::none();
        assert!(!root.is_elapsed());
        assert_eq!(root.remaining(), None);
    }

    #[test]
    fn cap_bounds_an_unbounded_parent() {
        let child = Deadline::none().cap(Duration::from_millis(200));
        let remaining = child.remaining().unwrap();
        assert!(remaining <= Duration::from_millis(200));
        assert!(remaining > Duration::from_millis(100));
    }

    #[test]
    fn cap_keeps_the_tighter_parent() {
        let parent = Deadline::within(Duration::from_millis(5));
        let child = parent.cap(Duration::from_secs(10));
        assert!(child.remaining().unwrap() <= Duration::from_millis(5));
    }

    #[test]
    fn zero_budget_is_immediately_elapsed() {
        let deadline = Deadline::within(Duration::ZERO);
        assert!(deadline.is_elapsed());
        assert_eq!(deadline.remaining(), Some(Duration::ZERO));
    }
}
