//! Database schema and migrations for anonboard.
//!
//! Migrations are applied in order the first time a database is opened or
//! when it is upgraded. The schema_version table records what has run.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: threads
    r#"
CREATE TABLE threads (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    board           TEXT NOT NULL,
    text            TEXT NOT NULL,
    created_on      TEXT NOT NULL,
    bumped_on       TEXT NOT NULL,
    reported        INTEGER NOT NULL DEFAULT 0,
    delete_password TEXT NOT NULL
);

CREATE INDEX idx_threads_board_bumped_on ON threads(board, bumped_on DESC);
"#,
    // v2: replies, owned by a thread and removed with it
    r#"
CREATE TABLE replies (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    thread_id       INTEGER NOT NULL REFERENCES threads(id) ON DELETE CASCADE,
    text            TEXT NOT NULL,
    created_on      TEXT NOT NULL,
    reported        INTEGER NOT NULL DEFAULT 0,
    delete_password TEXT NOT NULL
);

CREATE INDEX idx_replies_thread_id ON replies(thread_id, created_on);
"#,
];
