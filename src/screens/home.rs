use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Frame,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;
use time::{OffsetDateTime, UtcOffset};

use crate::app::{ScreenWidget, Transition, ViewCtx};
use crate::state::{Action, AppState, Screen};
use crate::ui::help::help_home;
use crate::ui::style::button_row;

const NEXT: usize = 0;
const REFLECT: usize = 1;
const UNLOCK: usize = 2;

pub fn greeting(hour: u8, name: &str) -> String {
    let part = match hour {
        0..=11 => "Morning",
        12..=17 => "Afternoon",
        _ => "Evening",
    };
    format!("Good {part}, {name}!")
}

/// Greeting for "now", using the offset captured before any threads started.
pub fn greeting_now(offset: UtcOffset, name: &str) -> String {
    greeting(OffsetDateTime::now_utc().to_offset(offset).hour(), name)
}

#[derive(Default)]
pub struct HomeScreen {
    selected: usize,
}

impl HomeScreen {
    fn activate(&self, state: &AppState) -> Transition {
        match self.selected {
            NEXT if state.can_cycle() => Transition::Dispatch(Action::NextQuote),
            REFLECT => Transition::Dispatch(Action::NavigateTo(Screen::Reflect)),
            UNLOCK => Transition::Dispatch(Action::UnlockTheme),
            _ => Transition::Stay,
        }
    }
}

impl ScreenWidget for HomeScreen {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, ctx: &ViewCtx<'_>) {
        let card_width = area.width.saturating_sub(4).max(1) as usize;
        let quote = format!("\"{}\"", ctx.state.current_quote_text());
        let quote_lines: Vec<Line> = wrap(&quote, card_width)
            .into_iter()
            .map(|seg| Line::from(seg.to_string()))
            .collect();
        let card_height = quote_lines.len() as u16 + 4;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),           // greeting
                Constraint::Length(1),
                Constraint::Length(card_height), // quote card
                Constraint::Length(1),
                Constraint::Length(1),           // buttons
                Constraint::Length(1),
                Constraint::Length(3),           // ad banner
                Constraint::Min(0),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(ctx.greeting.to_string()).style(ctx.palette.heading()),
            chunks[0],
        );

        let card = Block::default().borders(Borders::ALL).border_style(ctx.palette.border());
        let card_inner = card.inner(chunks[2]);
        f.render_widget(card, chunks[2]);
        let mut body = vec![Line::from("")];
        body.extend(quote_lines);
        f.render_widget(
            Paragraph::new(body).style(ctx.palette.quote()).alignment(Alignment::Center),
            card_inner,
        );

        let buttons = button_row(
            &[
                ("Next Quote", ctx.state.can_cycle()),
                ("Reflect", true),
                ("Unlock More", true),
            ],
            Some(self.selected),
            &ctx.palette,
        );
        f.render_widget(Paragraph::new(buttons).alignment(Alignment::Center), chunks[4]);

        let banner = Paragraph::new("[Ad Banner Placeholder]")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
        f.render_widget(banner, chunks[6]);
    }

    fn on_key(&mut self, k: KeyEvent, state: &AppState) -> Transition {
        match k.code {
            KeyCode::Left => self.selected = (self.selected + 2) % 3,
            KeyCode::Right => self.selected = (self.selected + 1) % 3,
            KeyCode::Enter | KeyCode::Char(' ') => return self.activate(state),
            KeyCode::Char('n') => return Transition::Dispatch(Action::NextQuote),
            KeyCode::Char('u') => return Transition::Dispatch(Action::UnlockTheme),
            _ => {}
        }
        Transition::Stay
    }

    fn legend(&self) -> Paragraph<'static> {
        help_home()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::Quote;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting(7, "Sarah"), "Good Morning, Sarah!");
        assert_eq!(greeting(12, "Sarah"), "Good Afternoon, Sarah!");
        assert_eq!(greeting(23, "Ada"), "Good Evening, Ada!");
    }

    #[test]
    fn test_enter_activates_selected_button() {
        let state = AppState {
            quotes: vec![Quote { text: "a".into(), author: None }],
            ..AppState::default()
        };
        let mut home = HomeScreen::default();
        assert_eq!(home.on_key(key(KeyCode::Enter), &state), Transition::Dispatch(Action::NextQuote));

        home.on_key(key(KeyCode::Right), &state);
        assert_eq!(
            home.on_key(key(KeyCode::Enter), &state),
            Transition::Dispatch(Action::NavigateTo(Screen::Reflect))
        );

        home.on_key(key(KeyCode::Right), &state);
        assert_eq!(home.on_key(key(KeyCode::Enter), &state), Transition::Dispatch(Action::UnlockTheme));

        home.on_key(key(KeyCode::Right), &state);
        assert_eq!(home.selected, NEXT);
    }

    #[test]
    fn test_next_quote_button_disabled_without_quotes() {
        let mut home = HomeScreen::default();
        assert_eq!(home.on_key(key(KeyCode::Enter), &AppState::default()), Transition::Stay);
    }
}
