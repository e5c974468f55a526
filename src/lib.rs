//! anonboard - Anonymous message board
//!
//! Boards hold threads, threads hold replies. Posting needs no account:
//! every thread and reply carries its own delete password, anyone may
//! report content, and replying bumps a thread to the top of its board.

pub mod board;
pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{BoardService, Outcome, ReplyView, ThreadView};
pub use config::Config;
pub use db::Database;
pub use error::{BoardError, Result};
