//! Infrastructure Layer
//!
//! External-facing implementations. For this service that is limited to
//! metrics collection; there is no persistence or caching by design.

pub mod metrics;
