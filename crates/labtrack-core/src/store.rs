//! The `StudyStore` trait.
//!
//! Implemented by storage backends (e.g. `labtrack-store-sqlite`). The view
//! layer in `labtrack-cli` depends on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use crate::{lab::Lab, subject::Subject};

/// Abstraction over a labtrack store backend.
///
/// Every operation is asynchronous; backends must keep blocking I/O off the
/// calling task. All methods return `Send` futures so the trait can be used
/// from multi-threaded runtimes.
pub trait StudyStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Subjects ──────────────────────────────────────────────────────────

  /// Insert a subject, replacing any existing row with the same id.
  fn create_subject<'a>(
    &'a self,
    subject: &'a Subject,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// List all subjects in ascending id order.
  fn list_subjects(
    &self,
  ) -> impl Future<Output = Result<Vec<Subject>, Self::Error>> + Send + '_;

  /// Retrieve a subject by id. Returns `None` if not found.
  fn get_subject(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Subject>, Self::Error>> + Send + '_;

  // ── Labs ──────────────────────────────────────────────────────────────

  /// Insert a lab, replacing any existing row with the same
  /// [`LabKey`](crate::lab::LabKey).
  fn create_lab<'a>(
    &'a self,
    lab: &'a Lab,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// List the labs of one subject in ascending id order.
  fn list_labs(
    &self,
    subject_id: i64,
  ) -> impl Future<Output = Result<Vec<Lab>, Self::Error>> + Send + '_;

  /// Write every mutable field of `lab` back, matched by its key.
  ///
  /// Returns an error if no row has that key.
  fn update_lab<'a>(
    &'a self,
    lab: &'a Lab,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
