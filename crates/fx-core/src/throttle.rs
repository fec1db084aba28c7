//! Rate-limiting primitives driven by explicit millisecond timestamps.

/// Leading-edge throttle: the first call in a window fires immediately and
/// later calls inside the window are dropped, not queued.
#[derive(Clone, Debug)]
pub struct LeadingThrottle {
    window_ms: f64,
    last_fire_ms: Option<f64>,
}

impl LeadingThrottle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_fire_ms: None,
        }
    }

    /// Returns `true` if the call at `now_ms` should run.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        match self.last_fire_ms {
            Some(last) if now_ms - last < self.window_ms => false,
            _ => {
                self.last_fire_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Trailing debounce: fires once, `wait_ms` after the most recent call.
///
/// The caller owns the timer. `call` (re)arms the deadline and returns it;
/// `poll` reports whether the deadline has passed and disarms.
#[derive(Clone, Debug)]
pub struct Debounce {
    wait_ms: f64,
    deadline_ms: Option<f64>,
}

impl Debounce {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            deadline_ms: None,
        }
    }

    pub fn call(&mut self, now_ms: f64) -> f64 {
        let deadline = now_ms + self.wait_ms;
        self.deadline_ms = Some(deadline);
        deadline
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Time left until the armed deadline, `None` when nothing is pending.
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.deadline_ms.map(|deadline| (deadline - now_ms).max(0.0))
    }
}
