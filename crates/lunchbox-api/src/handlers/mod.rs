//! HTTP request handlers for the Lunchbox API.
//!
//! Handlers follow a consistent pattern:
//! - Input validation with the error taxonomy in [`crate::error`]
//! - Tracing for observability
//! - Plain-text responses on the command path, JSON on the probe path
//!
//! Handlers are grouped by functionality:
//! - `slash` - The slash-command endpoint
//! - `health` - Health check and readiness probes

pub mod health;
pub mod slash;

// Re-export handlers for convenient access
pub use health::{health_check, liveness_check, readiness_check};
pub use slash::{method_not_allowed, slash_command};
