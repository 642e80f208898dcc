use std::cell::Cell;

/// Hands out one token per camera selection so that a response arriving
/// after a newer selection can be recognised and dropped.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Cell<u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; every earlier token becomes stale
    pub fn issue(&self) -> u64 {
        let token = self.latest.get() + 1;
        self.latest.set(token);
        token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest.get() == token
    }

    pub fn latest(&self) -> u64 {
        self.latest.get()
    }
}
