use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Multi-line edit buffer. `cursor` is a byte offset, always on a char boundary.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TextArea {
    pub text: String,
    pub cursor: usize,
}

impl TextArea {
    pub fn with(text: &str, cursor: usize) -> Self {
        let mut area = Self { text: text.into(), cursor: 0 };
        area.cursor = area.floor_boundary(cursor.min(text.len()));
        area
    }

    fn floor_boundary(&self, mut i: usize) -> usize {
        while i > 0 && !self.text.is_char_boundary(i) {
            i -= 1;
        }
        i
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.cursor)
    }

    fn line_start(&self) -> usize {
        self.text[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self) -> usize {
        self.text[self.cursor..].find('\n').map(|i| self.cursor + i).unwrap_or(self.text.len())
    }

    // column in chars, so vertical moves land on the same visual column
    fn column(&self) -> usize {
        self.text[self.line_start()..self.cursor].chars().count()
    }

    fn offset_at_column(&self, start: usize, col: usize) -> usize {
        let line = &self.text[start..];
        let line = &line[..line.find('\n').unwrap_or(line.len())];
        line.char_indices().nth(col).map(|(i, _)| start + i).unwrap_or(start + line.len())
    }

    pub fn insert_char(&mut self, c: char) { self.text.insert(self.cursor, c); self.cursor += c.len_utf8(); }
    pub fn newline(&mut self) { self.insert_char('\n'); }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) { self.cursor = self.prev_boundary(); }
    pub fn move_right(&mut self) { self.cursor = self.next_boundary(); }
    pub fn home(&mut self) { self.cursor = self.line_start(); }
    pub fn end(&mut self) { self.cursor = self.line_end(); }

    pub fn move_up(&mut self) {
        let start = self.line_start();
        if start == 0 {
            return;
        }
        let col = self.column();
        let prev_start = self.text[..start - 1].rfind('\n').map(|i| i + 1).unwrap_or(0);
        self.cursor = self.offset_at_column(prev_start, col);
    }

    pub fn move_down(&mut self) {
        let end = self.line_end();
        if end == self.text.len() {
            return;
        }
        let col = self.column();
        self.cursor = self.offset_at_column(end + 1, col);
    }

    /// Row of the cursor, counted in '\n'-separated lines.
    pub fn cursor_row(&self) -> usize {
        self.text[..self.cursor].matches('\n').count()
    }

    // Bash-style block cursor that covers the char (no shifting)
    pub fn lines<'a>(&self, focused: bool, style: Style) -> Vec<Line<'a>> {
        let cursor_row = self.cursor_row();
        let col = self.column();
        let block = |s: String| {
            Span::styled(s, Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD))
        };

        self.text
            .split('\n')
            .enumerate()
            .map(|(row, line)| {
                if !focused || row != cursor_row {
                    return Line::from(Span::styled(line.to_string(), style));
                }
                let split = line.char_indices().nth(col).map(|(i, _)| i).unwrap_or(line.len());
                let (left, rest) = line.split_at(split);
                let mut spans = vec![Span::styled(left.to_string(), style)];
                match rest.chars().next() {
                    Some(ch) => {
                        spans.push(block(ch.to_string()));
                        spans.push(Span::styled(rest[ch.len_utf8()..].to_string(), style));
                    }
                    None => spans.push(block(" ".to_string())),
                }
                Line::from(spans)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextArea {
        let mut area = TextArea::default();
        for c in s.chars() {
            if c == '\n' { area.newline() } else { area.insert_char(c) }
        }
        area
    }

    #[test]
    fn test_typing_appends_and_tracks_cursor() {
        let area = typed("héllo\nwörld");
        assert_eq!(area.text, "héllo\nwörld");
        assert_eq!(area.cursor, area.text.len());
        assert_eq!(area.cursor_row(), 1);
    }

    #[test]
    fn test_backspace_and_delete_handle_multibyte() {
        let mut area = typed("ab✨");
        area.backspace();
        assert_eq!(area.text, "ab");

        let mut area = typed("✨b");
        area.home();
        area.delete();
        assert_eq!(area.text, "b");
        assert_eq!(area.cursor, 0);
        area.backspace();
        assert_eq!(area.text, "b");
    }

    #[test]
    fn test_with_clamps_cursor_to_char_boundary() {
        let area = TextArea::with("é", 1);
        assert_eq!(area.cursor, 0);
        let area = TextArea::with("abc", 99);
        assert_eq!(area.cursor, 3);
    }

    #[test]
    fn test_vertical_moves_keep_column() {
        let mut area = typed("first line\nab\nthird line");
        area.move_up();
        assert_eq!(area.cursor_row(), 1);
        assert_eq!(&area.text[area.cursor..area.cursor + 1], "\n"); // clamped to end of "ab"
        area.move_up();
        assert_eq!(area.cursor_row(), 0);
        assert_eq!(area.cursor, 2);
        area.move_up();
        assert_eq!(area.cursor, 2);
        area.move_down();
        area.move_down();
        assert_eq!(area.cursor_row(), 2);
        area.end();
        area.move_down();
        assert_eq!(area.cursor, area.text.len());
    }

    #[test]
    fn test_lines_render_block_cursor_on_cursor_row() {
        let mut area = typed("one\ntwo");
        area.home();
        let lines = area.lines(true, Style::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[1].spans[1].content, "t");
    }
}
