//! Photofetch: fetches the Mars photo list and tracks the fetch's progress.

pub mod api;
pub mod core;

#[cfg(test)]
pub mod test_support;

pub use api::{ApiClient, FetchError, Resource, ResourceSource};
pub use crate::core::{FetchController, FetchState};
