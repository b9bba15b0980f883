//! Lab — an assignment under a subject, with two status flags and a comment.
//!
//! A lab's `id` is only unique within its subject; the seed catalogue reuses
//! `id = 1` under two subjects. Storage identity is therefore the composite
//! [`LabKey`] of `(subject_id, id)`.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Key ─────────────────────────────────────────────────────────────────────

/// The storage identity of a lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabKey {
  pub subject_id: i64,
  pub id:         i64,
}

impl fmt::Display for LabKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.subject_id, self.id)
  }
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// Progress of a lab as derived from its two flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabStatus {
  NotStarted,
  InProgress,
  Completed,
}

// ─── Lab ─────────────────────────────────────────────────────────────────────

/// A lab row.
///
/// `is_completed` and `in_progress` are meant to be mutually exclusive. The
/// store does not enforce it; [`Lab::set_completed`] and
/// [`Lab::set_in_progress`] do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lab {
  pub id:           i64,
  pub subject_id:   i64,
  pub title:        String,
  pub description:  String,
  #[serde(default)]
  pub comment:      String,
  #[serde(default)]
  pub is_completed: bool,
  #[serde(default)]
  pub in_progress:  bool,
}

impl Lab {
  /// Convenience constructor with the comment empty and both flags cleared.
  pub fn new(
    subject_id: i64,
    id: i64,
    title: impl Into<String>,
    description: impl Into<String>,
  ) -> Self {
    Self {
      id,
      subject_id,
      title: title.into(),
      description: description.into(),
      comment: String::new(),
      is_completed: false,
      in_progress: false,
    }
  }

  pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
    self.comment = comment.into();
    self
  }

  pub fn completed(mut self) -> Self {
    self.set_completed(true);
    self
  }

  pub fn started(mut self) -> Self {
    self.set_in_progress(true);
    self
  }

  pub fn key(&self) -> LabKey {
    LabKey { subject_id: self.subject_id, id: self.id }
  }

  /// Set the completed flag. Turning it on clears `in_progress`.
  pub fn set_completed(&mut self, on: bool) {
    self.is_completed = on;
    if on {
      self.in_progress = false;
    }
  }

  /// Set the in-progress flag. Turning it on clears `is_completed`.
  pub fn set_in_progress(&mut self, on: bool) {
    self.in_progress = on;
    if on {
      self.is_completed = false;
    }
  }

  /// A row with both flags set (possible only if written around the
  /// setters) reads as completed.
  pub fn status(&self) -> LabStatus {
    if self.is_completed {
      LabStatus::Completed
    } else if self.in_progress {
      LabStatus::InProgress
    } else {
      LabStatus::NotStarted
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lab() -> Lab { Lab::new(1, 1, "VLANs", "Configure trunk ports") }

  #[test]
  fn completing_clears_in_progress() {
    let mut l = lab().started();
    assert!(l.in_progress);

    l.set_completed(true);
    assert!(l.is_completed);
    assert!(!l.in_progress);
    assert_eq!(l.status(), LabStatus::Completed);
  }

  #[test]
  fn starting_clears_completed() {
    let mut l = lab().completed();
    l.set_in_progress(true);
    assert!(l.in_progress);
    assert!(!l.is_completed);
    assert_eq!(l.status(), LabStatus::InProgress);
  }

  #[test]
  fn turning_a_flag_off_leaves_the_other_alone() {
    let mut l = lab().started();
    l.set_completed(false);
    assert!(l.in_progress);

    l.set_in_progress(false);
    assert_eq!(l.status(), LabStatus::NotStarted);
  }

  #[test]
  fn both_flags_read_as_completed() {
    let mut l = lab();
    l.is_completed = true;
    l.in_progress = true;
    assert_eq!(l.status(), LabStatus::Completed);
  }

  #[test]
  fn key_display() {
    assert_eq!(Lab::new(2, 7, "t", "d").key().to_string(), "2/7");
  }
}
