//! Subject — a course or topic that groups labs.

use serde::{Deserialize, Serialize};

/// A subject row. The id is assigned by the caller, not by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
  pub id:    i64,
  pub title: String,
}

impl Subject {
  pub fn new(id: i64, title: impl Into<String>) -> Self {
    Self { id, title: title.into() }
  }
}
