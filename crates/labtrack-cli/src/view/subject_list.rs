//! Subject list view state.

use labtrack_core::{store::StudyStore, subject::Subject};

use super::Load;

/// All subjects plus a cursor. Loaded once per instance.
#[derive(Debug)]
pub struct SubjectListView {
  state:  Load<Vec<Subject>>,
  cursor: usize,
}

impl Default for SubjectListView {
  fn default() -> Self { Self::new() }
}

impl SubjectListView {
  pub fn new() -> Self {
    Self { state: Load::Loading, cursor: 0 }
  }

  pub fn state(&self) -> &Load<Vec<Subject>> { &self.state }

  /// Loaded subjects; empty while still loading.
  pub fn subjects(&self) -> &[Subject] {
    match &self.state {
      Load::Loaded(subjects) => subjects,
      Load::Loading => &[],
    }
  }

  /// Fetch all subjects. Does nothing once this instance has loaded.
  pub async fn load<S: StudyStore>(&mut self, store: &S) -> Result<(), S::Error> {
    if self.state.is_loaded() {
      return Ok(());
    }
    let subjects = store.list_subjects().await?;
    tracing::debug!(count = subjects.len(), "loaded subjects");
    self.state = Load::Loaded(subjects);
    self.cursor = 0;
    Ok(())
  }

  pub fn cursor(&self) -> usize { self.cursor }

  pub fn move_down(&mut self) {
    if self.cursor + 1 < self.subjects().len() {
      self.cursor += 1;
    }
  }

  pub fn move_up(&mut self) { self.cursor = self.cursor.saturating_sub(1); }

  /// Id of the subject under the cursor, to hand to a detail view.
  pub fn selected(&self) -> Option<i64> {
    self.subjects().get(self.cursor).map(|s| s.id)
  }
}

#[cfg(test)]
mod tests {
  use labtrack_store_sqlite::SqliteStore;

  use super::*;

  #[tokio::test]
  async fn starts_loading_then_holds_seed_subjects() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut view = SubjectListView::new();
    assert_eq!(view.state(), &Load::Loading);
    assert!(view.selected().is_none());

    view.load(&store).await.unwrap();
    assert_eq!(view.subjects().len(), 3);
    assert_eq!(view.selected(), Some(1));
  }

  #[tokio::test]
  async fn second_load_does_not_refetch() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut view = SubjectListView::new();
    view.load(&store).await.unwrap();

    store.create_subject(&Subject::new(4, "Compilers")).await.unwrap();
    view.load(&store).await.unwrap();
    assert_eq!(view.subjects().len(), 3);

    let mut fresh = SubjectListView::new();
    fresh.load(&store).await.unwrap();
    assert_eq!(fresh.subjects().len(), 4);
  }

  #[tokio::test]
  async fn cursor_stays_in_bounds() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut view = SubjectListView::new();
    view.load(&store).await.unwrap();

    view.move_up();
    assert_eq!(view.cursor(), 0);
    for _ in 0..10 {
      view.move_down();
    }
    assert_eq!(view.cursor(), 2);
    assert_eq!(view.selected(), Some(3));
  }
}
