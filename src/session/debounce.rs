/// A single deferred action that only fires after `wait_ms` of quiet.
///
/// Every `trigger` replaces the pending value and restarts the wait; `poll`
/// hands the value out once the deadline has passed.
pub struct Debouncer<T> {
    wait_ms: f64,
    pending: Option<Pending<T>>,
}

struct Pending<T> {
    due_ms: f64,
    value: T,
}

impl<T> Debouncer<T> {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }

    /// Replace any pending action; returns the new deadline
    pub fn trigger(&mut self, now_ms: f64, value: T) -> f64 {
        let due_ms = now_ms + self.wait_ms;
        self.pending = Some(Pending { due_ms, value });
        due_ms
    }

    /// Take the pending value if its deadline has passed
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.due_ms => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Take the pending value now, regardless of its deadline
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due_ms(&self) -> Option<f64> {
        self.pending.as_ref().map(|p| p.due_ms)
    }
}
