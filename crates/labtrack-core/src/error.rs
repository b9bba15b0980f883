//! Error types for `labtrack-core`.

use thiserror::Error;

use crate::lab::LabKey;

#[derive(Debug, Error)]
pub enum Error {
  #[error("subject not found: {0}")]
  SubjectNotFound(i64),

  #[error("lab not found: {0}")]
  LabNotFound(LabKey),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
