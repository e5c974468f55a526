//! Outward-facing board views and moderation outcomes.
//!
//! Views are the only serializable shapes of threads and replies. None of
//! them carries a delete password.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::thread::{Reply, Thread};

/// Result of a delete or report request that reached an existing entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The password matched and the deletion was applied.
    Success,
    /// The password did not match; nothing was changed.
    IncorrectPassword,
    /// The report flag is set.
    Reported,
}

impl Outcome {
    /// Literal signal sent to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::IncorrectPassword => "incorrect password",
            Outcome::Reported => "reported",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reply as shown to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyView {
    pub id: i64,
    pub text: String,
    pub created_on: DateTime<Utc>,
    pub reported: bool,
}

impl From<Reply> for ReplyView {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text,
            created_on: reply.created_on,
            reported: reply.reported,
        }
    }
}

/// Thread as shown to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadView {
    pub id: i64,
    pub board: String,
    pub text: String,
    pub created_on: DateTime<Utc>,
    pub bumped_on: DateTime<Utc>,
    pub reported: bool,
    /// Total number of replies, including any left out of `replies`.
    pub reply_count: usize,
    pub replies: Vec<ReplyView>,
}

impl ThreadView {
    /// View with every reply.
    pub fn full(thread: Thread) -> Self {
        Self::preview(thread, usize::MAX)
    }

    /// View with only the `max_replies` most recent replies, oldest first.
    pub fn preview(thread: Thread, max_replies: usize) -> Self {
        let reply_count = thread.replies.len();
        let skip = reply_count.saturating_sub(max_replies);
        let replies = thread
            .replies
            .into_iter()
            .skip(skip)
            .map(ReplyView::from)
            .collect();

        Self {
            id: thread.id,
            board: thread.board,
            text: thread.text,
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            reported: thread.reported,
            reply_count,
            replies,
        }
    }
}
