//! [`StoreCell`] — the application-scoped owner of the store handle.

use std::path::{Path, PathBuf};

use tokio::sync::OnceCell;

use crate::{Result, SqliteStore};

/// Opens the store at a fixed path on first use and hands out the same
/// handle afterwards.
///
/// Construct one per process and pass it (or the handle it yields) to
/// whatever needs the store. Concurrent first calls to [`StoreCell::get`]
/// open the file once; a failed open leaves the cell empty.
pub struct StoreCell {
  path: PathBuf,
  cell: OnceCell<SqliteStore>,
}

impl StoreCell {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into(), cell: OnceCell::new() }
  }

  pub fn path(&self) -> &Path { &self.path }

  /// Open the store if this is the first call, then return the handle.
  pub async fn get(&self) -> Result<&SqliteStore> {
    self
      .cell
      .get_or_try_init(|| SqliteStore::open(&self.path))
      .await
  }

  /// Whether [`StoreCell::get`] has succeeded yet.
  pub fn is_open(&self) -> bool { self.cell.initialized() }
}
