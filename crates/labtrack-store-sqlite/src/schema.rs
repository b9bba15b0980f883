//! SQL schema for the labtrack SQLite store.
//!
//! `PRAGMA user_version` doubles as the "already created" marker: `0` means
//! the file is new and must be created and seeded.

/// Schema version written by [`SCHEMA`].
pub const SCHEMA_VERSION: i64 = 1;

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS subject (
    id     INTEGER PRIMARY KEY,
    title  TEXT NOT NULL CHECK (length(title) > 0)
);

-- `id` repeats across subjects, so identity is (subject_id, id).
-- subject_id is deliberately not a foreign key; orphan labs are tolerated.
CREATE TABLE IF NOT EXISTS lab (
    id            INTEGER NOT NULL,
    subject_id    INTEGER NOT NULL,
    title         TEXT    NOT NULL CHECK (length(title) > 0),
    description   TEXT    NOT NULL,
    comment       TEXT    NOT NULL DEFAULT '',
    is_completed  INTEGER NOT NULL DEFAULT 0,
    in_progress   INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (subject_id, id)
);

PRAGMA user_version = 1;
";
