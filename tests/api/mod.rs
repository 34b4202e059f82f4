//! REST API Tests

mod health_tests;
mod link_tests;
