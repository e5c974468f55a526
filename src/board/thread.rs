//! Thread and reply models for anonboard.

use chrono::{DateTime, Utc};

/// Reply entity, owned by exactly one thread.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Unique reply ID.
    pub id: i64,
    /// Reply body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Whether the reply has been reported.
    pub reported: bool,
    /// Secret required to delete the reply.
    pub delete_password: String,
}

/// Thread entity: a top-level post with its replies in chronological order.
#[derive(Debug, Clone)]
pub struct Thread {
    /// Unique thread ID.
    pub id: i64,
    /// Name of the board the thread belongs to.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last time a reply was added (equals `created_on` until then).
    pub bumped_on: DateTime<Utc>,
    /// Whether the thread has been reported.
    pub reported: bool,
    /// Secret required to delete the thread.
    pub delete_password: String,
    /// Replies, oldest first.
    pub replies: Vec<Reply>,
}

impl Thread {
    /// Find a reply in this thread by ID.
    pub fn find_reply(&self, reply_id: i64) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == reply_id)
    }
}

/// Data for creating a new thread.
#[derive(Debug, Clone)]
pub struct NewThread {
    /// Board to post in.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Delete password.
    pub delete_password: String,
}

impl NewThread {
    /// Create a new thread with required fields.
    pub fn new(
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        Self {
            board: board.into(),
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}

/// Data for creating a new reply.
#[derive(Debug, Clone)]
pub struct NewReply {
    /// Reply body.
    pub text: String,
    /// Delete password.
    pub delete_password: String,
}

impl NewReply {
    /// Create a new reply with required fields.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}
