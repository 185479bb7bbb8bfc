use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Frame,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
};
use textwrap::wrap;

use crate::app::{ScreenWidget, Transition, ViewCtx};
use crate::defaults::Defaults;
use crate::state::AppState;
use crate::ui::help::help_explore;

#[derive(Default)]
pub struct ExploreScreen {
    scroll: u16,
}

impl ExploreScreen {
    fn quote_lines(state: &AppState, width: usize, ctx: &ViewCtx<'_>) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (i, quote) in state.quotes.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            let text = format!("\"{}\"", quote.text);
            for seg in wrap(&text, width) {
                lines.push(Line::styled(seg.to_string(), ctx.palette.quote()));
            }
        }
        lines
    }
}

impl ScreenWidget for ExploreScreen {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, ctx: &ViewCtx<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        f.render_widget(Paragraph::new("Explore Quotes").style(ctx.palette.heading()), chunks[0]);

        if ctx.state.quotes.is_empty() {
            let p = Paragraph::new(Defaults::LOADING_QUOTE).style(Style::default().fg(Color::DarkGray));
            f.render_widget(p, chunks[2]);
            return;
        }

        let lines = Self::quote_lines(ctx.state, chunks[2].width.max(1) as usize, ctx);
        let max_scroll = (lines.len() as u16).saturating_sub(chunks[2].height);
        let p = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll.min(max_scroll), 0));
        f.render_widget(p, chunks[2]);
    }

    fn on_key(&mut self, k: KeyEvent, state: &AppState) -> Transition {
        // generous upper bound; draw clamps to the real height
        let limit = (state.quotes.len() as u16).saturating_mul(4);
        match k.code {
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = (self.scroll + 1).min(limit),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(5),
            KeyCode::PageDown => self.scroll = (self.scroll + 5).min(limit),
            _ => {}
        }
        Transition::Stay
    }

    fn legend(&self) -> Paragraph<'static> {
        help_explore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::Quote;
    use crate::ui::style::Palette;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn with_quotes(n: usize) -> AppState {
        AppState {
            quotes: (0..n).map(|i| Quote { text: format!("quote {i}"), author: None }).collect(),
            ..AppState::default()
        }
    }

    #[test]
    fn test_scroll_stops_at_bound_and_at_zero() {
        let state = with_quotes(2);
        let mut screen = ExploreScreen::default();

        for _ in 0..20 {
            screen.on_key(key(KeyCode::Down), &state);
        }
        assert_eq!(screen.scroll, 8);
        screen.on_key(key(KeyCode::PageDown), &state);
        assert_eq!(screen.scroll, 8);

        screen.on_key(key(KeyCode::PageUp), &state);
        assert_eq!(screen.scroll, 3);
        for _ in 0..10 {
            screen.on_key(key(KeyCode::Up), &state);
        }
        assert_eq!(screen.scroll, 0);
    }

    #[test]
    fn test_no_scroll_without_quotes() {
        let mut screen = ExploreScreen::default();
        screen.on_key(key(KeyCode::PageDown), &AppState::default());
        assert_eq!(screen.scroll, 0);
    }

    #[test]
    fn test_draw_clamps_scroll_to_content() {
        let state = with_quotes(3);
        let screen = ExploreScreen { scroll: 12 };
        let ctx = ViewCtx { state: &state, palette: Palette::for_theme(false), greeting: "" };

        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                screen.draw(f, area, &ctx);
            })
            .unwrap();

        // five content lines fit in the area, so nothing scrolls away
        let buffer = terminal.backend().buffer();
        let row: String = (0..40).map(|x| buffer.get(x, 2).symbol().to_string()).collect();
        assert!(row.starts_with("\"quote 0\""), "{row:?}");
    }
}
