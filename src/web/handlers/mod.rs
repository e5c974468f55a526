//! API handlers for the anonboard Web API.

use std::sync::Arc;

use crate::Database;

pub mod board;

pub use board::*;

/// Shared database handle.
pub type SharedDatabase = Arc<Database>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: SharedDatabase,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: SharedDatabase) -> Self {
        Self { db }
    }
}
