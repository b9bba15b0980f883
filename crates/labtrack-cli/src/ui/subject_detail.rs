//! Subject detail pane — right panel, one card per lab.

use labtrack_core::lab::Lab;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::view::{DetailState, SubjectDetailView};

// ─── Public entry ─────────────────────────────────────────────────────────────

/// Render the open subject into `area`.
pub fn draw(f: &mut Frame, area: Rect, detail: &SubjectDetailView, editing: bool) {
  let title = match (detail.state(), detail.subject()) {
    (DetailState::Missing, _) => format!("Subject {}", detail.subject_id()),
    (_, Some(subject)) => subject.title.clone(),
    (_, None) => "Loading…".into(),
  };

  let block = Block::default()
    .title(format!(" {title} "))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));

  let inner = block.inner(area);
  f.render_widget(block, area);

  let placeholder = match detail.state() {
    DetailState::Loading => Some("Loading…"),
    DetailState::Missing => Some("This subject does not exist."),
    DetailState::Loaded { cards, .. } if cards.is_empty() => Some("No labs yet."),
    DetailState::Loaded { .. } => None,
  };
  if let Some(text) = placeholder {
    f.render_widget(
      Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let mut lines: Vec<Line> = Vec::new();
  let mut heights = Vec::with_capacity(detail.cards().len());
  for (i, card) in detail.cards().iter().enumerate() {
    let selected = i == detail.cursor();
    let card = card_lines(&card.lab, selected, selected && editing);
    heights.push(card.len());
    lines.extend(card);
  }

  let scroll = scroll_offset(&heights, detail.cursor(), inner.height);
  f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

/// Rows to scroll so the card at `cursor` ends inside a viewport of
/// `viewport` rows.
fn scroll_offset(heights: &[usize], cursor: usize, viewport: u16) -> u16 {
  let bottom: usize = heights
    .iter()
    .take(cursor.saturating_add(1))
    .fold(0, |acc, h| acc.saturating_add(*h));
  let offset = bottom.saturating_sub(usize::from(viewport));
  u16::try_from(offset).unwrap_or(u16::MAX)
}

// ─── Card ─────────────────────────────────────────────────────────────────────

fn card_lines(lab: &Lab, selected: bool, editing: bool) -> Vec<Line<'static>> {
  let marker = if selected { "▌ " } else { "  " };
  let title_style = if selected {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::Gray)
  };
  let dim = Style::default().fg(Color::DarkGray);

  let comment = if editing {
    Span::styled(format!("{}_", lab.comment), Style::default().fg(Color::Yellow))
  } else if lab.comment.is_empty() {
    Span::styled("(no comment)", dim)
  } else {
    Span::raw(lab.comment.clone())
  };

  // Titles may carry their own line breaks; continuation lines hang under
  // the first.
  let number = format!("{}. ", lab.id);
  let indent = " ".repeat(number.chars().count() + 2);
  let mut lines: Vec<Line<'static>> = lab
    .title
    .lines()
    .map(str::trim_end)
    .filter(|l| !l.is_empty())
    .enumerate()
    .map(|(i, text)| match i {
      0 => Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{number}{text}"), title_style),
      ]),
      _ => Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(text.to_owned(), title_style),
      ]),
    })
    .collect();
  if lines.is_empty() {
    lines.push(Line::from(vec![
      Span::styled(marker, Style::default().fg(Color::Cyan)),
      Span::styled(number, title_style),
    ]));
  }

  lines.extend([
    Line::from(vec![Span::raw("  "), Span::styled(lab.description.clone(), dim)]),
    Line::from(vec![
      Span::raw("  "),
      checkbox(lab.is_completed, "Completed"),
      Span::raw("   "),
      checkbox(lab.in_progress, "In Progress"),
    ]),
    Line::from(vec![Span::styled("  Comment: ", dim), comment]),
    Line::from(""),
  ]);
  lines
}

fn checkbox(checked: bool, label: &'static str) -> Span<'static> {
  if checked {
    Span::styled(format!("[x] {label}"), Style::default().fg(Color::Green))
  } else {
    Span::styled(format!("[ ] {label}"), Style::default().fg(Color::Gray))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn multi_line_titles_render_one_row_per_line() {
    let lab = Lab::new(1, 2, "FIRST \nSECOND\n", "desc");
    let lines = card_lines(&lab, false, false);

    // Two title rows, description, flags, comment, separator.
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0].to_string(), "  2. FIRST");
    assert_eq!(lines[1].to_string(), "     SECOND");
  }

  #[test]
  fn scroll_keeps_selected_card_visible() {
    assert_eq!(scroll_offset(&[5, 7, 5], 0, 20), 0);
    assert_eq!(scroll_offset(&[5, 7, 5], 2, 10), 7);
    assert_eq!(scroll_offset(&[5, 7, 5], 1, 4), 8);
  }

  #[test]
  fn scroll_offset_does_not_overflow_on_long_lists() {
    let heights = vec![5; 20_000];
    assert_eq!(scroll_offset(&heights, 19_999, 10), u16::MAX);
    assert_eq!(scroll_offset(&heights, 1_000, 10), 4_995);
  }
}
