use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    prelude::Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::Transition;
use crate::ui::layout::centered_rect_abs;
use crate::ui::style::{self, Palette};

pub struct ConfirmQuitScreen {
    selected: usize, // 0 = Don't Quit, 1 = Quit
}

impl Default for ConfirmQuitScreen {
    fn default() -> Self { Self::new() }
}

impl ConfirmQuitScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn draw(&self, f: &mut Frame<'_>, size: Rect, palette: &Palette) {
        let msg = "Do you really want to leave Daily Mind Boost?";
        let left_label = "Don't Quit";
        let right_label = "Quit";

        // Compute width
        let btn_len = |label: &str| 4 + label.len(); // "< " + label + " >"
        let buttons_len = btn_len(left_label) + 3 + btn_len(right_label);

        let inner_w_needed = msg.len().max(buttons_len) as u16;
        let inner_width = inner_w_needed.max(36);
        let inner_height = 4;

        let total_w = inner_width + 4;
        let total_h = inner_height + 3;

        let area = centered_rect_abs(total_w, total_h, size);
        let inner = area.inner(&Margin { horizontal: 2, vertical: 1 });

        let vchunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let msg_line = Paragraph::new(Line::from(vec![Span::raw(msg)])).alignment(Alignment::Center);

        let mut btn_spans = Vec::new();
        btn_spans.extend(style::button_spans(left_label, self.selected == 0, palette));
        btn_spans.push(Span::raw("   "));
        btn_spans.extend(style::button_spans(right_label, self.selected == 1, palette));

        let buttons_line = Paragraph::new(Line::from(btn_spans)).alignment(Alignment::Center);

        f.render_widget(Clear, area);
        f.render_widget(Block::default().borders(Borders::ALL).border_style(palette.border()), area);
        f.render_widget(msg_line, vchunks[1]);
        f.render_widget(buttons_line, vchunks[3]);
    }

    pub fn on_key(&mut self, k: KeyEvent) -> Transition {
        match k.code {
            KeyCode::Esc => return Transition::Pop,
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.selected = 1 - self.selected;
            }
            KeyCode::Enter => {
                return if self.selected == 1 { Transition::Quit } else { Transition::Pop };
            }
            _ => {}
        }
        Transition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_defaults_to_dont_quit() {
        let mut screen = ConfirmQuitScreen::new();
        assert_eq!(screen.on_key(key(KeyCode::Enter)), Transition::Pop);
    }

    #[test]
    fn test_toggle_then_enter_quits() {
        let mut screen = ConfirmQuitScreen::new();
        screen.on_key(key(KeyCode::Right));
        assert_eq!(screen.on_key(key(KeyCode::Enter)), Transition::Quit);
    }
}
