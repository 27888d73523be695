use std::time::{Duration, Instant};

/// Wall-clock budget for one search call, polled cooperatively.
#[derive(Debug, Clone, Copy)]
pub struct SearchClock {
    started_at: Instant,
    // `None` when the budget is too large to represent.
    deadline: Option<Instant>,
}

impl SearchClock {
    pub fn start(budget: Duration) -> Self {
        let started_at = Instant::now();
        Self {
            started_at,
            deadline: started_at.checked_add(budget),
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        match self.deadline {
            Some(limit) => Instant::now() >= limit,
            None => false,
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::SearchClock;
    use std::time::Duration;

    #[test]
    fn zero_budget_is_expired_immediately() {
        assert!(SearchClock::start(Duration::ZERO).is_expired());
    }

    #[test]
    fn huge_budget_never_expires() {
        let clock = SearchClock::start(Duration::MAX);
        assert!(!clock.is_expired());
    }
}
