//! [`SqliteStore`] — the SQLite implementation of [`StudyStore`].

use std::path::Path;

use labtrack_core::{lab::Lab, store::StudyStore, subject::Subject};
use rusqlite::OptionalExtension as _;

use crate::{
  encode::{LAB_COLS, SUBJECT_COLS, insert_lab, insert_subject, lab_from_row, subject_from_row},
  schema::{SCHEMA, SCHEMA_VERSION},
  seed::{self, Catalogue, SeedReport},
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A labtrack store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted, and every
/// clone talks to the same background thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn:        tokio_rusqlite::Connection,
  seed_report: Option<SeedReport>,
}

impl SqliteStore {
  /// Open (or create) a store at `path`. A new file is seeded with
  /// [`Catalogue::standard`].
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    Self::open_with(path, Some(Catalogue::standard())).await
  }

  /// Open (or create) a store at `path`, seeding a new file with `seed`.
  pub async fn open_with(path: impl AsRef<Path>, seed: Option<Catalogue>) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "opening store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::init(conn, seed).await
  }

  /// Open a seeded in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    Self::open_in_memory_with(Some(Catalogue::standard())).await
  }

  /// Open an in-memory store seeded with `seed`, or empty for `None`.
  pub async fn open_in_memory_with(seed: Option<Catalogue>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::init(conn, seed).await
  }

  /// The seed outcome if this open created and seeded the store. `None` when
  /// the store already existed or was created without a catalogue.
  pub fn seed_report(&self) -> Option<SeedReport> { self.seed_report }

  async fn init(conn: tokio_rusqlite::Connection, seed: Option<Catalogue>) -> Result<Self> {
    let found: i64 = conn
      .call(|conn| {
        // journal_mode answers with the mode in effect ("memory" in memory).
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
          row.get::<_, String>(0)
        })?;
        Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
      })
      .await?;

    if found > SCHEMA_VERSION {
      return Err(Error::UnsupportedSchemaVersion { found, supported: SCHEMA_VERSION });
    }
    if found == SCHEMA_VERSION {
      tracing::debug!(version = found, "store already initialised");
      return Ok(Self { conn, seed_report: None });
    }

    // Schema, seed rows and the version marker commit together, so a crash
    // here leaves a file that is still treated as new.
    let seed_report = conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(SCHEMA)?;
        let report = seed.as_ref().map(|catalogue| seed::load(&tx, catalogue));
        tx.commit()?;
        Ok(report)
      })
      .await?;

    match &seed_report {
      Some(r) => tracing::info!(
        subjects = r.subjects,
        labs = r.labs,
        failures = r.failures,
        "created store and loaded seed catalogue"
      ),
      None => tracing::info!("created empty store"),
    }

    Ok(Self { conn, seed_report })
  }
}

// ─── StudyStore impl ─────────────────────────────────────────────────────────

impl StudyStore for SqliteStore {
  type Error = Error;

  // ── Subjects ──────────────────────────────────────────────────────────────

  async fn create_subject(&self, subject: &Subject) -> Result<()> {
    let subject = subject.clone();
    tracing::debug!(subject_id = subject.id, "create subject");

    self
      .conn
      .call(move |conn| {
        insert_subject(conn, &subject)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_subjects(&self) -> Result<Vec<Subject>> {
    let subjects = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {SUBJECT_COLS} FROM subject ORDER BY id"))?;
        let rows = stmt
          .query_map([], subject_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(subjects)
  }

  async fn get_subject(&self, id: i64) -> Result<Option<Subject>> {
    let subject = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {SUBJECT_COLS} FROM subject WHERE id = ?1"),
              rusqlite::params![id],
              subject_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(subject)
  }

  // ── Labs ──────────────────────────────────────────────────────────────────

  async fn create_lab(&self, lab: &Lab) -> Result<()> {
    let lab = lab.clone();
    tracing::debug!(lab = %lab.key(), "create lab");

    self
      .conn
      .call(move |conn| {
        insert_lab(conn, &lab)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_labs(&self, subject_id: i64) -> Result<Vec<Lab>> {
    let labs = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {LAB_COLS} FROM lab WHERE subject_id = ?1 ORDER BY id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![subject_id], lab_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(labs)
  }

  async fn update_lab(&self, lab: &Lab) -> Result<()> {
    let key = lab.key();
    let lab = lab.clone();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE lab
             SET title = ?3, description = ?4, comment = ?5,
                 is_completed = ?6, in_progress = ?7
           WHERE subject_id = ?1 AND id = ?2",
          rusqlite::params![
            lab.subject_id,
            lab.id,
            lab.title,
            lab.description,
            lab.comment,
            lab.is_completed,
            lab.in_progress,
          ],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(labtrack_core::Error::LabNotFound(key).into());
    }
    tracing::debug!(lab = %key, "updated lab");
    Ok(())
  }
}
