//! Wire types for the photos endpoint.

use serde::Deserialize;

/// One photo entry from the remote list.
///
/// Only ever produced by decoding; there is no public constructor and the
/// fields cannot be changed once decoded.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    id: String,
    #[serde(rename = "img_src")]
    image_url: String,
}

impl Resource {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Location of the image. Not validated as a URL here.
    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

/// Decodes a `/photos` response body.
///
/// Returns a message describing the first problem when the body is not an
/// array of `{ "id", "img_src" }` objects, or when an entry has an empty id.
pub fn decode_resources(body: &[u8]) -> Result<Vec<Resource>, String> {
    let resources: Vec<Resource> = serde_json::from_slice(body).map_err(|e| e.to_string())?;

    if let Some(index) = resources.iter().position(|r| r.id.is_empty()) {
        return Err(format!("entry {index} has an empty id"));
    }

    Ok(resources)
}
