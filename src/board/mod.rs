//! Board module for anonboard.
//!
//! This module provides the anonymous board:
//! - Thread and reply models
//! - Storage of threads with their replies
//! - The board service enforcing listing limits, delete passwords,
//!   reporting and bump ordering
//! - Client-facing views that never expose delete passwords

mod service;
mod thread;
mod thread_repository;
mod view;

pub use service::{
    BoardService, DELETED_REPLY_TEXT, MAX_REPLY_LENGTH, RECENT_THREAD_LIMIT, REPLY_PREVIEW_LIMIT,
};
pub use thread::{NewReply, NewThread, Reply, Thread};
pub use thread_repository::ThreadRepository;
pub use view::{Outcome, ReplyView, ThreadView};
