//! Web API module for anonboard.
//!
//! This module exposes the board over HTTP: JSON views for reading and
//! creating threads and replies, plain-text outcomes for deleting and
//! reporting them.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
