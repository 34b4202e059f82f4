//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use serde_json::Value;

/// Generate link request
///
/// Both fields are optional at the wire level; presence and shape are
/// checked by the handler and the link service so the error messages stay
/// under our control instead of serde's.
#[derive(Debug, Deserialize)]
pub struct GenerateLinkRequest {
    /// Wire name of the link type (e.g. "invitation")
    #[serde(rename = "type")]
    pub link_type: Option<String>,

    /// Untyped payload bag; required keys depend on the link type
    #[serde(default)]
    pub payload: Option<Value>,
}
