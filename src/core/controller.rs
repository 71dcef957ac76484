//! # Fetch Controller
//!
//! Owns one [`FetchState`] and the fetch tasks that feed it.
//!
//! ```text
//! FetchController
//! ├── source: Arc<dyn ResourceSource>        // shared API client in production
//! ├── state: Arc<watch::Sender<FetchState>>  // current value + change notification
//! ├── cancel: CancellationToken              // tripped on drop
//! └── abort_handles: Vec<AbortHandle>        // tasks dispatched and not yet reaped
//! ```
//!
//! Every fetch runs as its own tokio task. Refetching does not cancel the
//! earlier task, so with two in flight the last one to finish wins. Dropping
//! the controller cancels all of them; after `drop` returns no task can write.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, FetchError, Resource, ResourceSource};
use crate::core::state::{FetchEvent, FetchState};

pub struct FetchController {
    source: Arc<dyn ResourceSource>,
    state: Arc<watch::Sender<FetchState>>,
    cancel: CancellationToken,
    abort_handles: Vec<AbortHandle>,
}

impl FetchController {
    /// Creates a controller on the shared API client and starts the first fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        Self::with_source(ApiClient::shared())
    }

    /// Creates a controller on any source and starts the first fetch.
    pub fn with_source(source: Arc<dyn ResourceSource>) -> Self {
        let (state, _) = watch::channel(FetchState::Pending);
        let mut controller = Self {
            source,
            state: Arc::new(state),
            cancel: CancellationToken::new(),
            abort_handles: Vec::new(),
        };
        controller.dispatch();
        controller
    }

    pub fn current_state(&self) -> FetchState {
        *self.state.borrow()
    }

    /// A receiver that is notified on every state write.
    ///
    /// Don't hold a `borrow()` guard from it across a call into the controller.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Goes back to `Pending` and dispatches a new fetch.
    ///
    /// Fetches already in flight keep running.
    pub fn refetch(&mut self) {
        info!("Refetch requested ({} fetches in flight)", self.in_flight());
        self.dispatch();
    }

    /// Number of dispatched fetches that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.abort_handles.iter().filter(|h| !h.is_finished()).count()
    }

    fn dispatch(&mut self) {
        self.abort_handles.retain(|h| !h.is_finished());
        self.state.send_modify(|current| *current = current.apply(FetchEvent::Initiated));

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let cancel = self.cancel.clone();

        info!("Dispatching fetch from {}", source.name());
        let handle = tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Fetch cancelled before it resolved");
                    return;
                }
                outcome = source.fetch_resources() => outcome,
            };
            apply_outcome(&state, &cancel, outcome);
        });
        self.abort_handles.push(handle.abort_handle());
    }
}

impl Drop for FetchController {
    fn drop(&mut self) {
        debug!(
            "Tearing down fetch controller ({} fetches in flight)",
            self.in_flight()
        );
        // Trip the token under the state lock so no task is halfway through a write
        self.state.send_if_modified(|_| {
            self.cancel.cancel();
            false
        });
        for handle in self.abort_handles.drain(..) {
            handle.abort();
        }
    }
}

/// Applies one fetch result, unless the owning controller is gone.
///
/// Returns whether the state was written.
fn apply_outcome(
    state: &watch::Sender<FetchState>,
    cancel: &CancellationToken,
    outcome: Result<Vec<Resource>, FetchError>,
) -> bool {
    state.send_if_modified(|current| {
        if cancel.is_cancelled() {
            debug!("Dropping fetch result: controller torn down");
            return false;
        }
        let event = match outcome {
            Ok(resources) => {
                info!("Fetch succeeded with {} photos", resources.len());
                FetchEvent::Resolved(Ok(resources.len()))
            }
            Err(e) => {
                warn!("Fetch failed: {}", e);
                FetchEvent::Resolved(Err(e))
            }
        };
        *current = current.apply(event);
        true
    })
}
