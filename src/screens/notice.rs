// src/screens/notice.rs
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    prelude::Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::Transition;
use crate::state::{Action, Notice};
use crate::ui::layout::centered_rect_abs;
use crate::ui::style::{button_spans, Palette};

/// OK-only modal for a `Notice`. Blocks every other key until dismissed.
pub fn draw(f: &mut Frame<'_>, size: Rect, notice: &Notice, palette: &Palette) {
    let lines = notice.lines();
    let ok_label = "OK";

    // width: max of content and button
    let content_w = lines
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0)
        .max(4 + ok_label.len()) as u16; // "< " + label + " >"

    let inner_width = content_w.max(36);
    let inner_height = (lines.len() as u16).max(1) + 2; // lines + spacer + button
    let total_w = inner_width + 4;
    let total_h = inner_height + 3;

    let area = centered_rect_abs(total_w, total_h, size);
    let inner = area.inner(&Margin { horizontal: 2, vertical: 1 });

    // vertical layout: lines..., spacer, button row
    let mut constraints = Vec::new();
    for _ in &lines {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1)); // spacer
    constraints.push(Constraint::Length(1)); // buttons

    let vchunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    f.render_widget(Clear, area);
    f.render_widget(Block::default().borders(Borders::ALL).border_style(palette.border()), area);

    for (i, text) in lines.iter().enumerate() {
        let p = Paragraph::new(Line::from(vec![Span::raw(text.clone())])).alignment(Alignment::Center);
        f.render_widget(p, vchunks[i]);
    }

    let buttons_line = Paragraph::new(Line::from(button_spans(ok_label, true, palette)))
        .alignment(Alignment::Center);
    f.render_widget(buttons_line, vchunks[vchunks.len() - 1]);
}

pub fn on_key(k: KeyEvent) -> Transition {
    match k.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => Transition::Dispatch(Action::DismissNotice),
        _ => Transition::Stay,
    }
}
