use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Frame,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{ScreenWidget, Transition, ViewCtx};
use crate::state::{Action, AppState};
use crate::ui::common_nav::is_ctrl;
use crate::ui::components::TextArea;
use crate::ui::help::help_reflect;
use crate::ui::style::button_row;

const PLACEHOLDER: &str = "Write a quick reflection here...";

/// Journal editor. The text itself lives in `AppState`; only the cursor is local.
#[derive(Default)]
pub struct ReflectScreen {
    // None until the user moves it: sits at the end of the saved entry
    cursor: Option<usize>,
}

impl ReflectScreen {
    fn cursor_in(&self, text: &str) -> usize {
        self.cursor.unwrap_or(text.len())
    }

    fn edit(&mut self, state: &AppState, op: impl FnOnce(&mut TextArea)) -> Transition {
        let mut area = TextArea::with(&state.reflection, self.cursor_in(&state.reflection));
        op(&mut area);
        self.cursor = Some(area.cursor);
        if area.text == state.reflection {
            Transition::Stay
        } else {
            Transition::Dispatch(Action::SetReflection(area.text))
        }
    }
}

impl ScreenWidget for ReflectScreen {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, ctx: &ViewCtx<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3), // editor
                Constraint::Length(1),
                Constraint::Length(1), // save button
            ])
            .split(area);

        f.render_widget(Paragraph::new("Reflection Journal").style(ctx.palette.heading()), chunks[0]);

        let block = Block::default().borders(Borders::ALL).border_style(ctx.palette.border());
        let inner = block.inner(chunks[2]);
        f.render_widget(block, chunks[2]);

        let editor = TextArea::with(&ctx.state.reflection, self.cursor_in(&ctx.state.reflection));
        let lines: Vec<Line> = if editor.text.is_empty() {
            let mut lines = editor.lines(true, Style::default());
            lines.push(Line::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)));
            lines
        } else {
            editor.lines(true, Style::default())
        };

        // keep the cursor row in view
        let row = editor.cursor_row() as u16;
        let scroll = row.saturating_sub(inner.height.saturating_sub(1));
        f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);

        let save = button_row(&[("Save Reflection (Ctrl+S)", true)], Some(0), &ctx.palette);
        f.render_widget(Paragraph::new(save).alignment(Alignment::Center), chunks[4]);
    }

    fn on_key(&mut self, k: KeyEvent, state: &AppState) -> Transition {
        if is_ctrl(k, 's') {
            return Transition::Dispatch(Action::SaveReflection);
        }
        match k.code {
            KeyCode::Enter => self.edit(state, TextArea::newline),
            KeyCode::Backspace => self.edit(state, TextArea::backspace),
            KeyCode::Delete => self.edit(state, TextArea::delete),
            KeyCode::Left => self.edit(state, TextArea::move_left),
            KeyCode::Right => self.edit(state, TextArea::move_right),
            KeyCode::Up => self.edit(state, TextArea::move_up),
            KeyCode::Down => self.edit(state, TextArea::move_down),
            KeyCode::Home => self.edit(state, TextArea::home),
            KeyCode::End => self.edit(state, TextArea::end),
            KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit(state, |a| a.insert_char(c))
            }
            _ => Transition::Stay,
        }
    }

    fn typing(&self) -> bool {
        true
    }

    fn legend(&self) -> Paragraph<'static> {
        help_reflect()
    }
}
