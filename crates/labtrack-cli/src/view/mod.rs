//! Framework-independent view state.
//!
//! Each view instance loads its data once, holds a local copy, and writes
//! user edits straight back through a [`StudyStore`]. Rendering lives in
//! [`crate::ui`] and only reads from here.
//!
//! [`StudyStore`]: labtrack_core::store::StudyStore

pub mod subject_detail;
pub mod subject_list;

pub use subject_detail::{DetailState, SubjectDetailView};
pub use subject_list::SubjectListView;

/// One-shot load state of a view instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Load<T> {
  Loading,
  Loaded(T),
}

impl<T> Load<T> {
  pub fn is_loaded(&self) -> bool { matches!(self, Self::Loaded(_)) }
}
