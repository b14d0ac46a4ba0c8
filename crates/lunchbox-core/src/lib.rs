//! Core domain types for the Lunchbox slash-command service.
//!
//! Provides the restaurant domain model, slash-command parsing, error
//! handling, and the PostgreSQL storage layer. The HTTP crate depends on
//! these foundational types for type safety and consistency.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod models;
pub mod storage;

pub use command::Command;
pub use error::{CoreError, Result};
pub use models::{Restaurant, RestaurantId};
