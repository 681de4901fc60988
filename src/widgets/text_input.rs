// ABOUTME: Value-controlled single-line text input
// Keeps only the cursor; every edit takes the caller's value and returns the new one

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::components::theme::Palette;

/// Input flavour, controls accepted characters and masking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Phone,
    /// Digits only
    Number,
    /// Rendered masked
    Password,
}

impl InputKind {
    fn accepts(&self, c: char) -> bool {
        match self {
            Self::Number => c.is_ascii_digit(),
            _ => !c.is_control(),
        }
    }
}

/// Cursor state for the focused text field (cursor counted in chars)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub cursor: usize,
    pub kind: InputKind,
}

fn byte_index(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map_or(value.len(), |(i, _)| i)
}

impl TextInput {
    pub fn new(kind: InputKind) -> Self {
        Self { cursor: 0, kind }
    }

    /// Input focused with the cursor at the end of `value`
    pub fn focused_at_end(kind: InputKind, value: &str) -> Self {
        Self {
            cursor: value.chars().count(),
            kind,
        }
    }

    fn clamp(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.chars().count());
    }

    /// Insert a character at the cursor. Returns None if the kind rejects it.
    pub fn insert(&mut self, value: &str, c: char) -> Option<String> {
        if !self.kind.accepts(c) {
            return None;
        }
        self.clamp(value);
        let mut next = value.to_string();
        next.insert(byte_index(value, self.cursor), c);
        self.cursor += 1;
        Some(next)
    }

    /// Insert a pasted string, keeping only accepted characters
    pub fn insert_str(&mut self, value: &str, text: &str) -> Option<String> {
        let accepted: String = text.chars().filter(|c| self.kind.accepts(*c)).collect();
        if accepted.is_empty() {
            return None;
        }
        self.clamp(value);
        let mut next = value.to_string();
        next.insert_str(byte_index(value, self.cursor), &accepted);
        self.cursor += accepted.chars().count();
        Some(next)
    }

    pub fn backspace(&mut self, value: &str) -> Option<String> {
        self.clamp(value);
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let mut next = value.to_string();
        next.remove(byte_index(value, self.cursor));
        Some(next)
    }

    pub fn delete(&mut self, value: &str) -> Option<String> {
        self.clamp(value);
        if self.cursor >= value.chars().count() {
            return None;
        }
        let mut next = value.to_string();
        next.remove(byte_index(value, self.cursor));
        Some(next)
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self, value: &str) {
        self.cursor = (self.cursor + 1).min(value.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self, value: &str) {
        self.cursor = value.chars().count();
    }

    /// Text as it should be displayed
    pub fn display(&self, value: &str) -> String {
        match self.kind {
            InputKind::Password => "•".repeat(value.chars().count()),
            _ => value.to_string(),
        }
    }
}

/// Render a labelled input box
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    label: &str,
    value: &str,
    placeholder: &str,
    input: Option<&TextInput>,
    kind: InputKind,
) {
    let focused = input.is_some();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { palette.primary } else { palette.border }))
        .title(Span::styled(format!(" {label} "), Style::default().fg(palette.muted)));

    let shown = TextInput::new(kind).display(value);
    let line = if value.is_empty() && !focused {
        Line::from(Span::styled(placeholder.to_string(), Style::default().fg(palette.muted)))
    } else if let Some(input) = input {
        // Split around the cursor so it can be highlighted
        let cursor = input.cursor.min(shown.chars().count());
        let before: String = shown.chars().take(cursor).collect();
        let at: String = shown.chars().skip(cursor).take(1).collect();
        let after: String = shown.chars().skip(cursor + 1).collect();
        Line::from(vec![
            Span::styled(before, Style::default().fg(palette.text)),
            Span::styled(
                if at.is_empty() { " ".to_string() } else { at },
                Style::default().fg(palette.background).bg(palette.primary),
            ),
            Span::styled(after, Style::default().fg(palette.text)),
        ])
    } else {
        Line::from(Span::styled(shown, Style::default().fg(palette.text)))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new(InputKind::Text);
        let v = input.insert("", 'a').unwrap();
        let v = input.insert(&v, 'b').unwrap();
        assert_eq!(v, "ab");
        assert_eq!(input.cursor, 2);

        let v = input.backspace(&v).unwrap();
        assert_eq!(v, "a");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_insert_mid_string_multibyte() {
        let mut input = TextInput::focused_at_end(InputKind::Text, "café");
        input.move_left();
        let v = input.insert("café", 'X').unwrap();
        assert_eq!(v, "cafXé");

        input.home();
        let v = input.delete(&v).unwrap();
        assert_eq!(v, "afXé");
    }

    #[test]
    fn test_number_rejects_letters() {
        let mut input = TextInput::new(InputKind::Number);
        assert_eq!(input.insert("5", 'x'), None);
        assert_eq!(input.cursor, 0);
        assert_eq!(input.insert_str("", "1a2"), Some("12".to_string()));
    }

    #[test]
    fn test_edges_are_noops() {
        let mut input = TextInput::new(InputKind::Text);
        assert_eq!(input.backspace("abc"), None);
        input.end("abc");
        assert_eq!(input.delete("abc"), None);
        input.move_right("abc");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_stale_cursor_is_clamped() {
        let mut input = TextInput {
            cursor: 10,
            kind: InputKind::Text,
        };
        assert_eq!(input.backspace("ab"), Some("a".to_string()));
    }

    #[test]
    fn test_password_masked() {
        let input = TextInput::new(InputKind::Password);
        assert_eq!(input.display("hunter2"), "•••••••");
    }
}
