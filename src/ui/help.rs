
use ratatui::{
    text::Line,
    widgets::{Paragraph, Wrap},
};

use super::style::{span_key, span_sep, span_text};

pub fn help_home<'a>() -> Paragraph<'a> {
    let line = Line::from(vec![
        span_key("←/→"), span_text(" Move"), span_sep(),
        span_key("Enter"), span_text(" Select"), span_sep(),
        span_key("n/u"), span_text(" Next/Unlock"), span_sep(),
        span_key("1-4/Tab"), span_text(" Screens"), span_sep(),
        span_key("Ctrl+Q"), span_text(" Quit"),
    ]);
    Paragraph::new(line).wrap(Wrap { trim: true })
}

pub fn help_explore<'a>() -> Paragraph<'a> {
    let line = Line::from(vec![
        span_key("↑/↓"), span_text(" Scroll"), span_sep(),
        span_key("1-4/Tab"), span_text(" Screens"), span_sep(),
        span_key("Ctrl+Q"), span_text(" Quit"),
    ]);
    Paragraph::new(line).wrap(Wrap { trim: true })
}

pub fn help_reflect<'a>() -> Paragraph<'a> {
    let line = Line::from(vec![
        span_key("Ctrl+S"), span_text(" Save"), span_sep(),
        span_key("Arrows/Home/End"), span_text(" Cursor"), span_sep(),
        span_key("F1-F4/Tab"), span_text(" Screens"), span_sep(),
        span_key("Ctrl+Q"), span_text(" Quit"),
    ]);
    Paragraph::new(line).wrap(Wrap { trim: true })
}

pub fn help_profile<'a>() -> Paragraph<'a> {
    let line = Line::from(vec![
        span_key("1-4/Tab"), span_text(" Screens"), span_sep(),
        span_key("Ctrl+Q"), span_text(" Quit"),
    ]);
    Paragraph::new(line).wrap(Wrap { trim: true })
}

pub fn help_modal<'a>() -> Paragraph<'a> {
    let line = Line::from(vec![
        span_key("Enter/Esc"), span_text(" Dismiss"),
    ]);
    Paragraph::new(line).wrap(Wrap { trim: true })
}
