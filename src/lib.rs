//! # Link Server Library
//!
//! This crate provides the Snapora deep-link generation service:
//! - A single `POST /generate-link` endpoint that turns a link type and
//!   payload into a universal deep link with deferred-deep-linking
//!   fallback parameters
//! - Health and metrics endpoints for operations
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The link vocabulary (link types, typed link requests)
//! - **Application Layer**: The link formatter service and DTOs
//! - **Infrastructure Layer**: Metrics collection
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! link_server/
//! +-- config/        Configuration management
//! +-- domain/        Link types and typed link requests
//! +-- application/   Link formatter service and DTOs
//! +-- infrastructure/ Metrics collection
//! +-- presentation/  HTTP routes, handlers, and middleware
//! +-- shared/        Common utilities (errors, encoding)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core link vocabulary
pub mod domain;

// Application layer - Link formatter
pub mod application;

// Infrastructure layer - Metrics
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
