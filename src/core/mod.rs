//! # Core Fetch Logic
//!
//! Tracks the progress of the photo fetch for one observer.
//! It knows nothing about how the state ends up on screen.
//!
//! ```text
//!   presentation layer
//!        │  new() / current_state() / subscribe() / refetch() / drop
//!        ▼
//!   ┌──────────────────────┐   fetch_resources()   ┌───────────────────┐
//!   │   FetchController    │ ────────────────────▶ │  ResourceSource   │
//!   │  (this module)       │ ◀──────────────────── │  (ApiClient)      │
//!   └──────────┬───────────┘   Vec<Resource> / err └───────────────────┘
//!              │ FetchEvent
//!              ▼
//!         FetchState
//! ```
//!
//! ## Modules
//!
//! - [`config`]: compiled-in endpoint and timeout
//! - [`state`]: `FetchState` and its transitions
//! - [`controller`]: `FetchController`, which owns a state and its fetch tasks

pub mod config;
pub mod controller;
pub mod state;

pub use controller::FetchController;
pub use state::{FetchEvent, FetchState};
