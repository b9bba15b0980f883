//! Error type for `labtrack-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] labtrack_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The file was written by a newer labtrack; it is never downgraded.
  #[error("unsupported schema version {found} (newest supported is {supported})")]
  UnsupportedSchemaVersion { found: i64, supported: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
