//! Subject detail view state: one subject and its labs as editable cards.
//!
//! Each edit mutates the card's local copy first and then writes the whole
//! lab back with [`StudyStore::update_lab`]. Nothing is read back; the local
//! copy stays authoritative for the life of the view.

use labtrack_core::{lab::Lab, store::StudyStore, subject::Subject};

// ─── State ───────────────────────────────────────────────────────────────────

/// One lab as shown and edited in the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabCard {
  pub lab: Lab,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
  Loading,
  /// The requested subject does not exist.
  Missing,
  Loaded { subject: Subject, cards: Vec<LabCard> },
}

#[derive(Debug)]
pub struct SubjectDetailView {
  subject_id: i64,
  state:      DetailState,
  cursor:     usize,
}

impl SubjectDetailView {
  pub fn new(subject_id: i64) -> Self {
    Self { subject_id, state: DetailState::Loading, cursor: 0 }
  }

  pub fn subject_id(&self) -> i64 { self.subject_id }

  pub fn state(&self) -> &DetailState { &self.state }

  pub fn subject(&self) -> Option<&Subject> {
    match &self.state {
      DetailState::Loaded { subject, .. } => Some(subject),
      _ => None,
    }
  }

  pub fn cards(&self) -> &[LabCard] {
    match &self.state {
      DetailState::Loaded { cards, .. } => cards,
      _ => &[],
    }
  }

  fn card_mut(&mut self, index: usize) -> Option<&mut LabCard> {
    match &mut self.state {
      DetailState::Loaded { cards, .. } => cards.get_mut(index),
      _ => None,
    }
  }

  // ── Loading ───────────────────────────────────────────────────────────────

  /// Fetch the subject and its labs. Does nothing once this instance has
  /// left `Loading`.
  pub async fn load<S: StudyStore>(&mut self, store: &S) -> Result<(), S::Error> {
    if self.state != DetailState::Loading {
      return Ok(());
    }

    let Some(subject) = store.get_subject(self.subject_id).await? else {
      tracing::info!(subject_id = self.subject_id, "subject not found");
      self.state = DetailState::Missing;
      return Ok(());
    };

    let labs = store.list_labs(self.subject_id).await?;
    tracing::debug!(subject_id = self.subject_id, labs = labs.len(), "loaded subject");

    self.state = DetailState::Loaded {
      subject,
      cards: labs.into_iter().map(|lab| LabCard { lab }).collect(),
    };
    self.cursor = 0;
    Ok(())
  }

  // ── Cursor ────────────────────────────────────────────────────────────────

  pub fn cursor(&self) -> usize { self.cursor }

  pub fn move_down(&mut self) {
    if self.cursor + 1 < self.cards().len() {
      self.cursor += 1;
    }
  }

  pub fn move_up(&mut self) { self.cursor = self.cursor.saturating_sub(1); }

  // ── Edits ─────────────────────────────────────────────────────────────────

  /// Flip the completed flag of card `index`. Completing clears in-progress.
  pub async fn toggle_completed<S: StudyStore>(
    &mut self,
    index: usize,
    store: &S,
  ) -> Result<(), S::Error> {
    self
      .edit(index, store, |lab| lab.set_completed(!lab.is_completed))
      .await
  }

  /// Flip the in-progress flag of card `index`. Starting clears completed.
  pub async fn toggle_in_progress<S: StudyStore>(
    &mut self,
    index: usize,
    store: &S,
  ) -> Result<(), S::Error> {
    self
      .edit(index, store, |lab| lab.set_in_progress(!lab.in_progress))
      .await
  }

  pub async fn set_comment<S: StudyStore>(
    &mut self,
    index: usize,
    comment: impl Into<String>,
    store: &S,
  ) -> Result<(), S::Error> {
    let comment = comment.into();
    self.edit(index, store, |lab| lab.comment = comment).await
  }

  pub async fn push_comment<S: StudyStore>(
    &mut self,
    index: usize,
    ch: char,
    store: &S,
  ) -> Result<(), S::Error> {
    self.edit(index, store, |lab| lab.comment.push(ch)).await
  }

  pub async fn pop_comment<S: StudyStore>(
    &mut self,
    index: usize,
    store: &S,
  ) -> Result<(), S::Error> {
    self
      .edit(index, store, |lab| {
        lab.comment.pop();
      })
      .await
  }

  /// Apply `change` to card `index` and write the result through. An
  /// out-of-range index or a change that alters nothing writes nothing.
  async fn edit<S: StudyStore>(
    &mut self,
    index: usize,
    store: &S,
    change: impl FnOnce(&mut Lab),
  ) -> Result<(), S::Error> {
    let Some(card) = self.card_mut(index) else {
      return Ok(());
    };
    let before = card.lab.clone();
    change(&mut card.lab);
    if card.lab == before {
      return Ok(());
    }
    let lab = card.lab.clone();

    store.update_lab(&lab).await.inspect_err(|e| {
      tracing::warn!(lab = %lab.key(), error = %e, "lab write-through failed");
    })
  }
}

#[cfg(test)]
mod tests {
  use labtrack_core::lab::LabStatus;
  use labtrack_store_sqlite::SqliteStore;

  use super::*;

  async fn loaded(store: &SqliteStore, subject_id: i64) -> SubjectDetailView {
    let mut view = SubjectDetailView::new(subject_id);
    view.load(store).await.unwrap();
    view
  }

  #[tokio::test]
  async fn loads_subject_and_its_labs() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let view = loaded(&store, 1).await;

    assert_eq!(view.subject().map(|s| s.id), Some(1));
    assert_eq!(view.cards().len(), 6);
    assert!(view.cards().iter().all(|c| c.lab.subject_id == 1));
  }

  #[tokio::test]
  async fn unknown_subject_is_missing() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let view = loaded(&store, 404).await;

    assert_eq!(view.state(), &DetailState::Missing);
    assert!(view.cards().is_empty());
    assert!(view.subject().is_none());
  }

  #[tokio::test]
  async fn completing_writes_through_and_clears_in_progress() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut view = loaded(&store, 1).await;
    // Seed lab 2 of subject 1 starts in progress.
    assert_eq!(view.cards()[1].lab.status(), LabStatus::InProgress);

    view.toggle_completed(1, &store).await.unwrap();
    assert_eq!(view.cards()[1].lab.status(), LabStatus::Completed);

    let stored = &store.list_labs(1).await.unwrap()[1];
    assert!(stored.is_completed);
    assert!(!stored.in_progress);
  }

  #[tokio::test]
  async fn starting_a_completed_lab_clears_completed() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut view = loaded(&store, 1).await;
    assert_eq!(view.cards()[0].lab.status(), LabStatus::Completed);

    view.toggle_in_progress(0, &store).await.unwrap();

    let stored = &store.list_labs(1).await.unwrap()[0];
    assert!(stored.in_progress);
    assert!(!stored.is_completed);
  }

  #[tokio::test]
  async fn unchecking_leaves_lab_not_started() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut view = loaded(&store, 1).await;

    view.toggle_in_progress(2, &store).await.unwrap();
    assert_eq!(view.cards()[2].lab.status(), LabStatus::NotStarted);
    assert_eq!(store.list_labs(1).await.unwrap()[2].status(), LabStatus::NotStarted);
  }

  #[tokio::test]
  async fn comment_keystrokes_are_written_through() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut view = loaded(&store, 1).await;

    for ch in "ok!".chars() {
      view.push_comment(3, ch, &store).await.unwrap();
    }
    view.pop_comment(3, &store).await.unwrap();
    assert_eq!(view.cards()[3].lab.comment, "ok");
    assert_eq!(store.list_labs(1).await.unwrap()[3].comment, "ok");

    view.set_comment(3, "done on friday", &store).await.unwrap();
    let stored = &store.list_labs(1).await.unwrap()[3];
    assert_eq!(stored.comment, "done on friday");
    assert!(stored.in_progress);
  }

  #[tokio::test]
  async fn edits_on_subject_two_do_not_touch_subject_one() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut view = loaded(&store, 2).await;
    assert_eq!(view.cards().len(), 1);

    view.set_comment(0, "second subject", &store).await.unwrap();
    assert_eq!(store.list_labs(2).await.unwrap()[0].comment, "second subject");
    assert_eq!(store.list_labs(1).await.unwrap()[0].comment, "ноу");
  }

  #[tokio::test]
  async fn failed_write_keeps_local_state() {
    let seeded = SqliteStore::open_in_memory().await.unwrap();
    let empty = SqliteStore::open_in_memory_with(None).await.unwrap();
    let mut view = loaded(&seeded, 1).await;

    let result = view.set_comment(0, "lost", &empty).await;
    assert!(result.is_err());
    assert_eq!(view.cards()[0].lab.comment, "lost");
  }

  #[tokio::test]
  async fn out_of_range_and_no_op_edits_write_nothing() {
    let seeded = SqliteStore::open_in_memory().await.unwrap();
    let empty = SqliteStore::open_in_memory_with(None).await.unwrap();
    let mut view = loaded(&seeded, 1).await;

    // Either would fail against the empty store if it tried to write.
    view.toggle_completed(99, &empty).await.unwrap();
    view.set_comment(0, "ноу", &empty).await.unwrap();
  }

  #[tokio::test]
  async fn second_load_keeps_local_edits() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut view = loaded(&store, 1).await;
    view.move_down();
    view.set_comment(0, "edited", &store).await.unwrap();

    view.load(&store).await.unwrap();
    assert_eq!(view.cursor(), 1);
    assert_eq!(view.cards()[0].lab.comment, "edited");
  }
}
