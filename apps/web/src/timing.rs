//! Rate limiting for UI event handlers.
//!
//! Both types read `tokio::time::Instant`, so tests can drive them with
//! paused time.

use std::time::Duration;

use tokio::time::Instant;

/// Leading-edge throttle: the first call in a window runs, the rest are dropped.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    last_run: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            last_run: None,
        }
    }

    /// Returns true when the caller should run now, and starts a new window.
    pub fn try_run(&mut self) -> bool {
        let now = Instant::now();
        match self.last_run {
            Some(last) if now.duration_since(last) < self.limit => false,
            _ => {
                self.last_run = Some(now);
                true
            }
        }
    }
}

/// Trailing-edge debounce: fires once, `wait` after the most recent call.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Records a call, pushing the deadline back.
    pub fn call(&mut self) {
        self.deadline = Some(Instant::now() + self.wait);
    }

    /// Consumes a pending call whose quiet period has elapsed.
    pub fn fire_if_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Waits out the current quiet period. Returns false if nothing was pending.
    pub async fn settled(&mut self) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        tokio::time::sleep_until(deadline).await;
        self.deadline = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn test_throttle_drops_calls_inside_window() {
        let mut throttle = Throttle::new(Duration::from_millis(100));
        assert!(throttle.try_run());
        assert!(!throttle.try_run());
        advance(Duration::from_millis(99)).await;
        assert!(!throttle.try_run());
        advance(Duration::from_millis(1)).await;
        assert!(throttle.try_run());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_restarts_on_each_call() {
        let mut debounce = Debounce::new(Duration::from_millis(300));
        debounce.call();
        advance(Duration::from_millis(200)).await;
        debounce.call();
        advance(Duration::from_millis(200)).await;
        assert!(!debounce.fire_if_due());
        advance(Duration::from_millis(100)).await;
        assert!(debounce.fire_if_due());
        assert!(!debounce.fire_if_due());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_settled() {
        let mut debounce = Debounce::new(Duration::from_secs(1));
        assert!(!debounce.settled().await);
        debounce.call();
        let start = Instant::now();
        assert!(debounce.settled().await);
        assert!(start.elapsed() >= Duration::from_secs(1));
        assert!(!debounce.settled().await);
    }
}
