//! Subject list pane — left panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, Screen};

/// Render the subject list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let subjects = app.list.subjects();

  let border = if app.screen == Screen::SubjectList {
    Style::default().fg(Color::Cyan)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  let block = Block::default()
    .title(format!(" Subjects ({}) ", subjects.len()))
    .borders(Borders::ALL)
    .border_style(border);

  if !app.list.state().is_loaded() {
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("Loading…").style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let items: Vec<ListItem> = subjects
    .iter()
    .map(|s| ListItem::new(s.title.clone()))
    .collect();

  let mut state = ListState::default();
  state.select((!subjects.is_empty()).then_some(app.list.cursor()));

  f.render_stateful_widget(
    List::new(items).block(block).highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    area,
    &mut state,
  );
}
