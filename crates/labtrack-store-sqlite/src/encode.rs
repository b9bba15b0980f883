//! Mapping between domain types and SQLite rows.
//!
//! The statements live here rather than in `store.rs` because the seed loader
//! runs them directly against the transaction that creates the schema.
//! Flags are stored as `INTEGER` 0/1 via rusqlite's `bool` conversions.

use labtrack_core::{lab::Lab, subject::Subject};
use rusqlite::{Connection, Row, params};

// ─── Columns ─────────────────────────────────────────────────────────────────

pub const SUBJECT_COLS: &str = "id, title";

pub const LAB_COLS: &str =
  "id, subject_id, title, description, comment, is_completed, in_progress";

// ─── Rows ────────────────────────────────────────────────────────────────────

/// Decode a row selected with [`SUBJECT_COLS`].
pub fn subject_from_row(row: &Row<'_>) -> rusqlite::Result<Subject> {
  Ok(Subject {
    id:    row.get(0)?,
    title: row.get(1)?,
  })
}

/// Decode a row selected with [`LAB_COLS`].
pub fn lab_from_row(row: &Row<'_>) -> rusqlite::Result<Lab> {
  Ok(Lab {
    id:           row.get(0)?,
    subject_id:   row.get(1)?,
    title:        row.get(2)?,
    description:  row.get(3)?,
    comment:      row.get(4)?,
    is_completed: row.get(5)?,
    in_progress:  row.get(6)?,
  })
}

// ─── Inserts ─────────────────────────────────────────────────────────────────

pub fn insert_subject(conn: &Connection, subject: &Subject) -> rusqlite::Result<()> {
  conn.execute(
    "INSERT OR REPLACE INTO subject (id, title) VALUES (?1, ?2)",
    params![subject.id, subject.title],
  )?;
  Ok(())
}

pub fn insert_lab(conn: &Connection, lab: &Lab) -> rusqlite::Result<()> {
  conn.execute(
    "INSERT OR REPLACE INTO lab (
       id, subject_id, title, description, comment, is_completed, in_progress
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    params![
      lab.id,
      lab.subject_id,
      lab.title,
      lab.description,
      lab.comment,
      lab.is_completed,
      lab.in_progress,
    ],
  )?;
  Ok(())
}
