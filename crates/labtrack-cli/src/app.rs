//! Application state machine and event dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use labtrack_store_sqlite::SqliteStore;

use crate::view::{SubjectDetailView, SubjectListView};

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Focus on the subject list; right pane is empty.
  SubjectList,
  /// Focus on the lab cards of the open subject.
  SubjectDetail,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// Subject list, loaded once at startup.
  pub list: SubjectListView,

  /// The open subject, if any. A fresh instance per opening.
  pub detail: Option<SubjectDetailView>,

  /// Whether keystrokes go into the selected lab's comment.
  pub editing: bool,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Shared store handle.
  store: SqliteStore,
}

impl App {
  pub fn new(store: SqliteStore) -> Self {
    Self {
      screen: Screen::SubjectList,
      list: SubjectListView::new(),
      detail: None,
      editing: false,
      status_msg: String::new(),
      store,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch all subjects into the list view.
  pub async fn load_subjects(&mut self) -> anyhow::Result<()> {
    self.status_msg = "Loading subjects…".into();
    match self.list.load(&self.store).await {
      Ok(()) => {
        self.status_msg = String::new();
        Ok(())
      }
      Err(e) => {
        self.status_msg = format!("Error: {e}");
        Err(e.into())
      }
    }
  }

  /// Transition to `SubjectDetail` for `subject_id` with a fresh view. A
  /// failed read keeps the list focused and shows the error.
  async fn open_detail(&mut self, subject_id: i64) {
    let mut detail = SubjectDetailView::new(subject_id);
    if let Err(e) = detail.load(&self.store).await {
      tracing::warn!(subject_id, error = %e, "failed to load subject");
      self.status_msg = format!("Error: {e}");
      return;
    }
    self.detail = Some(detail);
    self.editing = false;
    self.screen = Screen::SubjectDetail;
    self.status_msg.clear();
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    if self.editing {
      self.handle_edit_key(key).await;
      return Ok(true);
    }

    match self.screen {
      Screen::SubjectList => self.handle_list_key(key).await,
      Screen::SubjectDetail => self.handle_detail_key(key).await,
    }
  }

  async fn handle_list_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Char('q') => return Ok(false),

      KeyCode::Down | KeyCode::Char('j') => self.list.move_down(),
      KeyCode::Up | KeyCode::Char('k') => self.list.move_up(),

      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if let Some(id) = self.list.selected() {
          self.open_detail(id).await;
        }
      }

      _ => {}
    }
    Ok(true)
  }

  async fn handle_detail_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    let Some(detail) = self.detail.as_mut() else {
      self.screen = Screen::SubjectList;
      return Ok(true);
    };
    let cursor = detail.cursor();

    let written = match key.code {
      KeyCode::Char('q') => return Ok(false),

      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.screen = Screen::SubjectList;
        self.detail = None;
        return Ok(true);
      }

      KeyCode::Down | KeyCode::Char('j') => {
        detail.move_down();
        Ok(())
      }
      KeyCode::Up | KeyCode::Char('k') => {
        detail.move_up();
        Ok(())
      }

      KeyCode::Char('c') => detail.toggle_completed(cursor, &self.store).await,
      KeyCode::Char('p') => detail.toggle_in_progress(cursor, &self.store).await,
      KeyCode::Char('x') => detail.set_comment(cursor, "", &self.store).await,

      KeyCode::Char('e') | KeyCode::Enter => {
        if !detail.cards().is_empty() {
          self.editing = true;
        }
        Ok(())
      }

      _ => Ok(()),
    };

    self.report(written);
    Ok(true)
  }

  /// Comment editing: every keystroke is written through immediately.
  async fn handle_edit_key(&mut self, key: KeyEvent) {
    let Some(detail) = self.detail.as_mut() else {
      self.editing = false;
      return;
    };
    let cursor = detail.cursor();

    let written = match key.code {
      KeyCode::Esc | KeyCode::Enter => {
        self.editing = false;
        Ok(())
      }
      KeyCode::Backspace => detail.pop_comment(cursor, &self.store).await,
      KeyCode::Char(ch) => detail.push_comment(cursor, ch, &self.store).await,
      _ => Ok(()),
    };

    self.report(written);
  }

  /// Write failures are already logged by the view; surface the last one in
  /// the status bar and clear it on the next success.
  fn report(&mut self, written: labtrack_store_sqlite::Result<()>) {
    match written {
      Ok(()) => self.status_msg.clear(),
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }
}
