//! # Fetch State
//!
//! The three states a photo fetch can be in, and the events that move
//! between them.
//!
//! ```text
//!             Initiated                Resolved(Ok(n))
//!   (any) ─────────────▶ Pending ─────────────────────▶ Succeeded { count: n }
//!                           │
//!                           │ Resolved(Err(_))
//!                           ▼
//!                         Failed
//! ```
//!
//! Transitions are a pure function of (state, event). Writes happen only in
//! the controller, which owns the value.

use std::fmt;

use crate::api::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Pending,
    Succeeded {
        count: usize,
    },
    /// Network and protocol errors both land here.
    Failed,
}

/// Something that happened to a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    /// A fetch was dispatched (initial or refetch).
    Initiated,
    /// A dispatched fetch finished with this many items, or with an error.
    Resolved(Result<usize, FetchError>),
}

impl FetchState {
    /// Returns the state after `event`.
    ///
    /// `Resolved` is applied whatever the current state is. With two fetches in
    /// flight, the one that finishes last decides the result, even if it was
    /// dispatched first.
    pub fn apply(self, event: FetchEvent) -> FetchState {
        match event {
            FetchEvent::Initiated => FetchState::Pending,
            FetchEvent::Resolved(Ok(count)) => FetchState::Succeeded { count },
            FetchEvent::Resolved(Err(_)) => FetchState::Failed,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    /// True once the latest fetch has resolved either way.
    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    /// Number of photos, if the last fetch succeeded.
    pub fn count(&self) -> Option<usize> {
        match self {
            FetchState::Succeeded { count } => Some(*count),
            _ => None,
        }
    }
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchState::Pending => write!(f, "Loading photos..."),
            FetchState::Succeeded { count } => write!(f, "Success: {count} Mars photos retrieved"),
            FetchState::Failed => write!(f, "Failed to load photos"),
        }
    }
}
