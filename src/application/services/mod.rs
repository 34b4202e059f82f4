//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **LinkService**: Payload validation and deep link composition

pub mod link_service;

// Re-export link service types
pub use link_service::{LinkError, LinkService};
