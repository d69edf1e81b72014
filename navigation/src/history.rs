//! History backend seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`crate::router::Router`] keeps the authoritative entry stack in memory
//! and mirrors each change to a backend. In the browser the backend drives
//! `window.history`; elsewhere [`MemoryHistory`] records the calls.
//!
//! Indices are positions in the router's entry stack. Backends that persist
//! state (the browser's `history.state`) store the index so a later
//! `popstate` can be mapped back to the exact entry.

/// Side effects a router asks of the environment's history.
pub trait HistoryBackend {
    /// A new entry at `index`, replacing any forward entries.
    fn push(&mut self, index: usize, href: &str);
    /// Overwrite the entry at `index`.
    fn replace(&mut self, index: usize, href: &str);
    /// Traverse by `delta` entries.
    fn go(&mut self, delta: isize);
}

/// One recorded [`HistoryBackend`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryCall {
    Push { index: usize, href: String },
    Replace { index: usize, href: String },
    Go(isize),
}

/// In-memory backend that records every call.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    calls: Vec<HistoryCall>,
}

impl MemoryHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calls(&self) -> &[HistoryCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<HistoryCall> {
        std::mem::take(&mut self.calls)
    }
}

impl HistoryBackend for MemoryHistory {
    fn push(&mut self, index: usize, href: &str) {
        self.calls.push(HistoryCall::Push { index, href: href.to_owned() });
    }

    fn replace(&mut self, index: usize, href: &str) {
        self.calls.push(HistoryCall::Replace { index, href: href.to_owned() });
    }

    fn go(&mut self, delta: isize) {
        self.calls.push(HistoryCall::Go(delta));
    }
}
