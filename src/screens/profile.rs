use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Frame,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{ScreenWidget, Transition, ViewCtx};
use crate::state::AppState;
use crate::ui::help::help_profile;

#[derive(Default)]
pub struct ProfileScreen;

impl ScreenWidget for ProfileScreen {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, ctx: &ViewCtx<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        f.render_widget(Paragraph::new("Profile Settings").style(ctx.palette.heading()), chunks[0]);

        let mut lines = Vec::new();
        if ctx.state.theme_unlocked {
            lines.push(Line::styled(
                "✨ Theme Unlocked!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        } else {
            lines.push(Line::from("Coming soon: Reminder settings, theme preferences, and more!"));
            if ctx.state.unlock_pending {
                lines.push(Line::styled(
                    "Unlocking your theme…",
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(ctx.palette.border()));
        f.render_widget(card, chunks[2]);
    }

    fn on_key(&mut self, _k: KeyEvent, _state: &AppState) -> Transition {
        Transition::Stay
    }

    fn legend(&self) -> Paragraph<'static> {
        help_profile()
    }
}
