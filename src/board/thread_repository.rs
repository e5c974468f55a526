//! Thread repository for anonboard.
//!
//! This module provides storage primitives for threads and the replies they
//! own. It applies no domain rules: absent ids come back as `None`/`false`
//! and the caller decides what that means.

use super::thread::{NewReply, NewThread, Reply, Thread};
use crate::datetime;
use crate::db::DbPool;
use crate::{BoardError, Result};

const THREAD_COLUMNS: &str = "id, board, text, created_on, bumped_on, reported, delete_password";
const REPLY_COLUMNS: &str = "id, text, created_on, reported, delete_password";

/// Row type for thread queries.
#[derive(sqlx::FromRow)]
struct ThreadRow {
    id: i64,
    board: String,
    text: String,
    created_on: String,
    bumped_on: String,
    reported: bool,
    delete_password: String,
}

impl ThreadRow {
    fn into_thread(self, replies: Vec<Reply>) -> Result<Thread> {
        Ok(Thread {
            id: self.id,
            board: self.board,
            text: self.text,
            created_on: datetime::from_db(&self.created_on)?,
            bumped_on: datetime::from_db(&self.bumped_on)?,
            reported: self.reported,
            delete_password: self.delete_password,
            replies,
        })
    }
}

/// Row type for reply queries.
#[derive(sqlx::FromRow)]
struct ReplyRow {
    id: i64,
    text: String,
    created_on: String,
    reported: bool,
    delete_password: String,
}

impl ReplyRow {
    fn into_reply(self) -> Result<Reply> {
        Ok(Reply {
            id: self.id,
            text: self.text,
            created_on: datetime::from_db(&self.created_on)?,
            reported: self.reported,
            delete_password: self.delete_password,
        })
    }
}

/// Repository for thread and reply storage.
pub struct ThreadRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ThreadRepository<'a> {
    /// Create a new ThreadRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new thread with no replies.
    ///
    /// `created_on` and `bumped_on` are both set to the current time.
    pub async fn create(&self, new_thread: &NewThread) -> Result<Thread> {
        let now = datetime::to_db(&datetime::now());
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO threads (board, text, created_on, bumped_on, delete_password)
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&new_thread.board)
        .bind(&new_thread.text)
        .bind(&now)
        .bind(&now)
        .bind(&new_thread.delete_password)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))
    }

    /// Get a thread by ID, with all of its replies.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Thread>> {
        let sql = format!("SELECT {THREAD_COLUMNS} FROM threads WHERE id = ?");
        let row: Option<ThreadRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        match row {
            Some(row) => {
                let replies = self.list_replies(row.id).await?;
                Ok(Some(row.into_thread(replies)?))
            }
            None => Ok(None),
        }
    }

    /// List up to `limit` threads in a board, most recently bumped first.
    pub async fn list_by_board(&self, board: &str, limit: i64) -> Result<Vec<Thread>> {
        let sql = format!(
            "SELECT {THREAD_COLUMNS} FROM threads WHERE board = ?
             ORDER BY bumped_on DESC, id DESC LIMIT ?"
        );
        let rows: Vec<ThreadRow> = sqlx::query_as(&sql)
            .bind(board)
            .bind(limit)
            .fetch_all(self.pool)
            .await?;

        let mut threads = Vec::with_capacity(rows.len());
        for row in rows {
            let replies = self.list_replies(row.id).await?;
            threads.push(row.into_thread(replies)?);
        }
        Ok(threads)
    }

    /// Check whether a thread exists without loading it.
    pub async fn exists(&self, thread_id: i64) -> Result<bool> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM threads WHERE id = ?)")
            .bind(thread_id)
            .fetch_one(self.pool)
            .await?;
        Ok(found != 0)
    }

    /// Append a reply and bump the thread in one transaction.
    ///
    /// `bumped_on` never moves backwards, even if the clock does.
    /// Returns the updated thread, or None if the thread does not exist.
    pub async fn append_reply(&self, thread_id: i64, new_reply: &NewReply) -> Result<Option<Thread>> {
        let now = datetime::to_db(&datetime::now());
        let mut tx = self.pool.begin().await?;

        let bumped = sqlx::query("UPDATE threads SET bumped_on = MAX(bumped_on, ?) WHERE id = ?")
            .bind(&now)
            .bind(thread_id)
            .execute(&mut *tx)
            .await?;

        if bumped.rows_affected() == 0 {
            return Ok(None);
        }

        sqlx::query(
            "INSERT INTO replies (thread_id, text, created_on, delete_password)
             VALUES (?, ?, ?, ?)",
        )
        .bind(thread_id)
        .bind(&new_reply.text)
        .bind(&now)
        .bind(&new_reply.delete_password)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get_by_id(thread_id).await
    }

    /// Delete a thread by ID.
    ///
    /// Returns true if a thread was deleted, false if not found.
    /// Its replies are removed by the foreign key cascade.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM threads WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove one reply from a thread. `bumped_on` is left untouched.
    ///
    /// Returns the updated thread, or None if the thread or reply is absent.
    pub async fn delete_reply(&self, thread_id: i64, reply_id: i64) -> Result<Option<Thread>> {
        let result = sqlx::query("DELETE FROM replies WHERE id = ? AND thread_id = ?")
            .bind(reply_id)
            .bind(thread_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_by_id(thread_id).await
    }

    /// Flag a thread as reported.
    pub async fn set_reported(&self, thread_id: i64) -> Result<Option<Thread>> {
        let result = sqlx::query("UPDATE threads SET reported = 1 WHERE id = ?")
            .bind(thread_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_by_id(thread_id).await
    }

    /// Flag a reply as reported.
    pub async fn set_reply_reported(
        &self,
        thread_id: i64,
        reply_id: i64,
    ) -> Result<Option<Thread>> {
        let result = sqlx::query("UPDATE replies SET reported = 1 WHERE id = ? AND thread_id = ?")
            .bind(reply_id)
            .bind(thread_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_by_id(thread_id).await
    }

    /// Overwrite the text of one reply. `bumped_on` is left untouched.
    pub async fn set_reply_text(
        &self,
        thread_id: i64,
        reply_id: i64,
        text: &str,
    ) -> Result<Option<Thread>> {
        let result = sqlx::query("UPDATE replies SET text = ? WHERE id = ? AND thread_id = ?")
            .bind(text)
            .bind(reply_id)
            .bind(thread_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_by_id(thread_id).await
    }

    /// List the replies of a thread, oldest first.
    async fn list_replies(&self, thread_id: i64) -> Result<Vec<Reply>> {
        let sql = format!(
            "SELECT {REPLY_COLUMNS} FROM replies WHERE thread_id = ?
             ORDER BY created_on ASC, id ASC"
        );
        let rows: Vec<ReplyRow> = sqlx::query_as(&sql)
            .bind(thread_id)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(ReplyRow::into_reply).collect()
    }
}
