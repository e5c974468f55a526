//! Board service for anonboard.
//!
//! This module provides the board's domain rules on top of the thread
//! repository: input validation, listing limits, delete-password checks,
//! reporting and reply tombstones.

use tracing::{debug, info, warn};

use crate::db::Database;
use crate::{BoardError, Result};

use super::thread::{NewReply, NewThread, Thread};
use super::thread_repository::ThreadRepository;
use super::view::{Outcome, ThreadView};

/// Number of threads shown when listing a board.
pub const RECENT_THREAD_LIMIT: i64 = 10;

/// Number of replies shown per thread when listing a board.
pub const REPLY_PREVIEW_LIMIT: usize = 3;

/// Maximum length for reply text (in characters).
pub const MAX_REPLY_LENGTH: usize = 500;

/// Text left in place of a deleted reply.
pub const DELETED_REPLY_TEXT: &str = "[deleted]";

/// Validate that a required field is present, returning it trimmed.
fn require<'s>(field: &str, value: &'s str) -> Result<&'s str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BoardError::Validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Validate a delete password. Passwords are compared verbatim, so they are
/// checked for presence but never trimmed.
fn require_password(value: &str) -> Result<()> {
    require("delete_password", value).map(|_| ())
}

/// Validate reply text, returning it trimmed.
fn validate_reply_text(text: &str) -> Result<&str> {
    let text = require("text", text)?;
    if text.chars().count() > MAX_REPLY_LENGTH {
        return Err(BoardError::Validation(format!(
            "text must be at most {MAX_REPLY_LENGTH} characters"
        )));
    }
    Ok(text)
}

fn thread_not_found() -> BoardError {
    BoardError::NotFound("thread".to_string())
}

fn reply_not_found() -> BoardError {
    BoardError::NotFound("reply".to_string())
}

/// Service for board operations.
pub struct BoardService<'a> {
    db: &'a Database,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn threads(&self) -> ThreadRepository<'a> {
        ThreadRepository::new(self.db.pool())
    }

    async fn find_thread(&self, thread_id: i64) -> Result<Thread> {
        self.threads()
            .get_by_id(thread_id)
            .await?
            .ok_or_else(thread_not_found)
    }

    /// Start a new thread on a board.
    pub async fn create_thread(
        &self,
        board: &str,
        text: &str,
        delete_password: &str,
    ) -> Result<ThreadView> {
        let board = require("board", board)?;
        let text = require("text", text)?;
        require_password(delete_password)?;

        let thread = self
            .threads()
            .create(&NewThread::new(board, text, delete_password))
            .await?;

        info!(thread_id = thread.id, board = %thread.board, "Thread created");
        Ok(ThreadView::full(thread))
    }

    /// List the most recently bumped threads on a board.
    ///
    /// Each thread shows only its newest replies, oldest of those first.
    pub async fn list_recent_threads(&self, board: &str) -> Result<Vec<ThreadView>> {
        let board = require("board", board)?;
        let threads = self
            .threads()
            .list_by_board(board, RECENT_THREAD_LIMIT)
            .await?;

        debug!(board, count = threads.len(), "Listed recent threads");
        Ok(threads
            .into_iter()
            .map(|t| ThreadView::preview(t, REPLY_PREVIEW_LIMIT))
            .collect())
    }

    /// Get a thread with all of its replies.
    pub async fn get_thread(&self, thread_id: i64) -> Result<ThreadView> {
        let thread = self.find_thread(thread_id).await?;
        Ok(ThreadView::full(thread))
    }

    /// Delete a thread and its replies if the password matches.
    pub async fn delete_thread(&self, thread_id: i64, delete_password: &str) -> Result<Outcome> {
        let thread = self.find_thread(thread_id).await?;

        if thread.delete_password != delete_password {
            warn!(thread_id, "Thread delete rejected: incorrect password");
            return Ok(Outcome::IncorrectPassword);
        }

        if !self.threads().delete(thread_id).await? {
            return Err(thread_not_found());
        }

        info!(thread_id, board = %thread.board, "Thread deleted");
        Ok(Outcome::Success)
    }

    /// Flag a thread as reported. Needs no password; repeating is harmless.
    pub async fn report_thread(&self, thread_id: i64) -> Result<Outcome> {
        self.threads()
            .set_reported(thread_id)
            .await?
            .ok_or_else(thread_not_found)?;

        info!(thread_id, "Thread reported");
        Ok(Outcome::Reported)
    }

    /// Reply to a thread, bumping it to the top of its board.
    ///
    /// Returns the whole thread; unlike the board listing it is never
    /// truncated.
    pub async fn create_reply(
        &self,
        board: &str,
        thread_id: i64,
        text: &str,
        delete_password: &str,
    ) -> Result<ThreadView> {
        let board = require("board", board)?;
        let text = validate_reply_text(text)?;
        require_password(delete_password)?;

        let thread = self.find_thread(thread_id).await?;
        if thread.board != board {
            return Err(thread_not_found());
        }

        let thread = self
            .threads()
            .append_reply(thread_id, &NewReply::new(text, delete_password))
            .await?
            .ok_or_else(thread_not_found)?;

        info!(
            thread_id,
            board,
            reply_count = thread.replies.len(),
            "Reply created"
        );
        Ok(ThreadView::full(thread))
    }

    /// Delete a reply if the password matches.
    ///
    /// The reply stays in the thread with its text replaced by
    /// [`DELETED_REPLY_TEXT`]; the thread is not bumped.
    pub async fn delete_reply(
        &self,
        thread_id: i64,
        reply_id: i64,
        delete_password: &str,
    ) -> Result<Outcome> {
        let thread = self.find_thread(thread_id).await?;
        let reply = thread.find_reply(reply_id).ok_or_else(reply_not_found)?;

        if reply.delete_password != delete_password {
            warn!(thread_id, reply_id, "Reply delete rejected: incorrect password");
            return Ok(Outcome::IncorrectPassword);
        }

        self.threads()
            .set_reply_text(thread_id, reply_id, DELETED_REPLY_TEXT)
            .await?
            .ok_or_else(reply_not_found)?;

        info!(thread_id, reply_id, "Reply deleted");
        Ok(Outcome::Success)
    }

    /// Flag a reply as reported.
    pub async fn report_reply(&self, thread_id: i64, reply_id: i64) -> Result<Outcome> {
        let repo = self.threads();
        if repo.set_reply_reported(thread_id, reply_id).await?.is_none() {
            // Nothing was flagged; tell a missing thread from a missing reply.
            return Err(if repo.exists(thread_id).await? {
                reply_not_found()
            } else {
                thread_not_found()
            });
        }

        info!(thread_id, reply_id, "Reply reported");
        Ok(Outcome::Reported)
    }
}
