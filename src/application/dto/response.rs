//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::DeepLink;

/// Successful link generation response
#[derive(Debug, Serialize)]
pub struct GenerateLinkResponse {
    pub success: bool,
    pub link: DeepLink,
}

impl GenerateLinkResponse {
    pub fn new(link: DeepLink) -> Self {
        Self {
            success: true,
            link,
        }
    }
}
