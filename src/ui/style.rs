// style.rs
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::borrow::Cow;

pub fn span_key(s: &'static str) -> Span<'static> {
    Span::styled(s, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}
pub fn span_sep() -> Span<'static> {
    Span::styled("  |  ", Style::default().fg(Color::DarkGray))
}
pub fn span_text(s: &'static str) -> Span<'static> {
    Span::raw(s)
}

/* ---------- Palettes: indigo by default, warm yellow once the theme is unlocked ---------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,   // headings, brackets, borders
    pub selected: Color, // focused button / active tab
    pub idle: Color,     // other buttons
    pub quote: Color,
}

const INDIGO: Palette = Palette {
    accent: Color::Rgb(67, 56, 202),
    selected: Color::Rgb(129, 140, 248),
    idle: Color::Blue,
    quote: Color::Gray,
};

const SUNRISE: Palette = Palette {
    accent: Color::Rgb(202, 138, 4),
    selected: Color::Rgb(250, 204, 21),
    idle: Color::Yellow,
    quote: Color::White,
};

impl Palette {
    pub fn for_theme(unlocked: bool) -> Palette {
        if unlocked { SUNRISE } else { INDIGO }
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn quote(&self) -> Style {
        Style::default().fg(self.quote).add_modifier(Modifier::ITALIC)
    }
}

/// Core painter: "< " + LABEL + " >"
pub fn button_spans<S: Into<Cow<'static, str>>>(
    label: S,
    selected: bool,
    palette: &Palette,
) -> Vec<Span<'static>> {
    let label = label.into();
    vec![
        Span::styled("< ", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
        Span::styled(
            label,
            Style::default()
                .fg(if selected { palette.selected } else { palette.idle })
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" >", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
    ]
}

/// Same look, but visually “disabled”
pub fn button_spans_disabled<S: Into<Cow<'static, str>>>(label: S) -> Vec<Span<'static>> {
    let label = label.into();
    vec![
        Span::styled("< ", Style::default().fg(Color::DarkGray)),
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(" >", Style::default().fg(Color::DarkGray)),
    ]
}

/// A row of buttons separated by three spaces. `None` for `selected` means no focus.
pub fn button_row(labels: &[(&'static str, bool)], selected: Option<usize>, palette: &Palette) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, (label, enabled)) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        if *enabled {
            spans.extend(button_spans(*label, selected == Some(i), palette));
        } else {
            spans.extend(button_spans_disabled(*label));
        }
    }
    Line::from(spans)
}
