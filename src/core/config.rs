//! # Configuration
//!
//! Everything here is compiled in. The library reads no config file and no
//! environment variables; the only endpoint is `{BASE_URL}{PHOTOS_PATH}`.

use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

pub const BASE_URL: &str = "https://android-kotlin-fun-mars-server.appspot.com";
pub const PHOTOS_PATH: &str = "/photos";

/// Upper bound on one GET, connect through last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Joins a base address and the photos path, tolerating a trailing slash on the base.
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PHOTOS_PATH)
}
