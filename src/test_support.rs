//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{oneshot, watch};

use crate::api::types::decode_resources;
use crate::api::{FetchError, Resource, ResourceSource};
use crate::core::state::FetchState;

pub type Outcome = Result<Vec<Resource>, FetchError>;

/// Builds `n` decoded photos with ids "0".."n-1".
pub fn photos(n: usize) -> Vec<Resource> {
    let items: Vec<String> = (0..n)
        .map(|i| format!(r#"{{"id":"{i}","img_src":"http://mars.test/{i}.jpg"}}"#))
        .collect();
    decode_resources(format!("[{}]", items.join(",")).as_bytes()).unwrap()
}

/// Answers every call immediately with the same outcome.
pub struct StaticSource {
    outcome: Result<usize, FetchError>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn ok(count: usize) -> Self {
        Self {
            outcome: Ok(count),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn err(error: FetchError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_resources(&self) -> Outcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map(photos)
    }
}

/// Each call parks on the next scripted gate until the test sends its outcome.
pub struct GatedSource {
    gates: Mutex<VecDeque<oneshot::Receiver<Outcome>>>,
    calls: AtomicUsize,
}

impl GatedSource {
    /// A source with `n` gates, in call order, plus the senders that open them.
    pub fn new(n: usize) -> (Self, Vec<oneshot::Sender<Outcome>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..n).map(|_| oneshot::channel()).unzip();
        let source = Self {
            gates: Mutex::new(receivers),
            calls: AtomicUsize::new(0),
        };
        (source, senders)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Yields until `n` calls have reached their gate.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl ResourceSource for GatedSource {
    fn name(&self) -> &str {
        "gated"
    }

    async fn fetch_resources(&self) -> Outcome {
        let gate = self.gates.lock().unwrap().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);
        match gate {
            Some(gate) => gate
                .await
                .unwrap_or_else(|_| Err(FetchError::Network("gate dropped".to_string()))),
            None => Err(FetchError::Network("no gate scripted".to_string())),
        }
    }
}

/// Waits (bounded) until the observed state satisfies `f`.
pub async fn wait_for_state(
    rx: &mut watch::Receiver<FetchState>,
    f: impl FnMut(&FetchState) -> bool,
) -> FetchState {
    let state = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(f))
        .await
        .expect("timed out waiting for state")
        .expect("state channel closed");
    *state
}
