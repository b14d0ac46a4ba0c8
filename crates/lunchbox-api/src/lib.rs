//! Lunchbox HTTP API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use server::{create_router, start_server, AppState};
pub use store::{PostgresRestaurantStore, RestaurantStore};
