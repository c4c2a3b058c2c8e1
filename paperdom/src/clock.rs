use std::time::Duration;

/// Handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TimerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(TimerId)
    }
}

/// A virtual clock with a cancellable timer queue.
///
/// Time only moves when the host calls `advance`, so delayed transitions
/// (tooltip show/hide) are deterministic under test. Timers fire in deadline
/// order; ties fire in scheduling order.
#[derive(Debug, Default)]
pub struct Timers {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    id: TimerId,
    deadline: Duration,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a timer `delay` from now.
    pub fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            deadline: self.now + delay,
        });
        id
    }

    /// Cancel a pending timer. Returns false when it already fired or never
    /// existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    /// Advance virtual time, returning the timers that fired, in order.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerId> {
        self.now += dt;
        let now = self.now;

        let mut fired: Vec<PendingTimer> = self
            .pending
            .iter()
            .copied()
            .filter(|t| t.deadline <= now)
            .collect();
        self.pending.retain(|t| t.deadline > now);
        fired.sort_by_key(|t| (t.deadline, t.id.0));
        fired.into_iter().map(|t| t.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order() {
        let mut timers = Timers::new();
        let slow = timers.schedule(Duration::from_millis(200));
        let fast = timers.schedule(Duration::from_millis(100));

        assert_eq!(timers.advance(Duration::from_millis(50)), vec![]);
        assert_eq!(timers.advance(Duration::from_millis(200)), vec![fast, slow]);
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut timers = Timers::new();
        let id = timers.schedule(Duration::from_millis(100));
        assert!(timers.is_pending(id));
        assert!(timers.cancel(id));
        assert!(!timers.is_pending(id));
        assert_eq!(timers.advance(Duration::from_millis(200)), vec![]);
        assert!(!timers.cancel(id));
    }
}
