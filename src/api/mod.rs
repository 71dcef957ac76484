pub mod client;
pub mod source;
pub mod types;

pub use client::ApiClient;
pub use source::{FetchError, ResourceSource};
pub use types::Resource;
