// ABOUTME: Path prompt standing in for a native file chooser
// Accepted extensions are only a hint; any non-empty path is returned

use std::path::{Path, PathBuf};

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::overlay::DismissibleOverlay;
use super::text_input::{InputKind, TextInput};
use crate::components::theme::Palette;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic"];
pub const PDF_EXTENSIONS: &[&str] = &["pdf"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePromptState {
    pub overlay: DismissibleOverlay,
    pub path: String,
    pub input: TextInput,
    pub accept: &'static [&'static str],
}

impl FilePromptState {
    pub fn new(accept: &'static [&'static str]) -> Self {
        Self {
            accept,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn open(&mut self) {
        self.path.clear();
        self.input = TextInput::new(InputKind::Text);
        self.overlay.open();
    }

    pub fn close(&mut self) {
        self.overlay.close();
        self.path.clear();
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(next) = self.input.insert(&self.path, c) {
            self.path = next;
        }
    }

    pub fn paste(&mut self, text: &str) {
        if let Some(next) = self.input.insert_str(&self.path, text.trim_end_matches(['\n', '\r'])) {
            self.path = next;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(next) = self.input.backspace(&self.path) {
            self.path = next;
        }
    }

    /// The entered path, expanding a leading `~`. Closes the prompt; None if empty.
    pub fn submit(&mut self) -> Option<PathBuf> {
        let raw = self.path.trim().to_string();
        self.close();
        if raw.is_empty() {
            return None;
        }
        Some(expand_home(&raw))
    }

    /// Whether the typed path has one of the hinted extensions
    pub fn matches_hint(&self) -> bool {
        has_extension(Path::new(self.path.trim()), self.accept)
    }
}

pub fn has_extension(path: &Path, accept: &[&str]) -> bool {
    if accept.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| accept.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}

/// Centered prompt dialog
pub fn render_file_prompt(frame: &mut Frame, palette: &Palette, title: &str, state: &mut FilePromptState) {
    if !state.is_open() {
        return;
    }
    let screen = frame.size();
    let width = screen.width.saturating_sub(8).min(70);
    let height = 6.min(screen.height);
    let popup = Rect::new(
        screen.x + screen.width.saturating_sub(width) / 2,
        screen.y + screen.height.saturating_sub(height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.panel))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let hint = if state.path.trim().is_empty() || state.matches_hint() {
        Span::styled(
            format!("Accepted: {}", state.accept.join(", ")),
            Style::default().fg(palette.muted),
        )
    } else {
        Span::styled(
            format!("Not a usual type ({}), will still be accepted", state.accept.join(", ")),
            Style::default().fg(palette.warning),
        )
    };
    let cursor = state.input.cursor.min(state.path.chars().count());
    let before: String = state.path.chars().take(cursor).collect();
    let after: String = state.path.chars().skip(cursor).collect();
    let lines = vec![
        Line::from(vec![
            Span::styled("Path: ", Style::default().fg(palette.muted)),
            Span::styled(before, Style::default().fg(palette.text)),
            Span::styled("█", Style::default().fg(palette.primary)),
            Span::styled(after, Style::default().fg(palette.text)),
        ]),
        Line::from(hint),
        Line::from(Span::styled(
            "Enter to attach · Esc to cancel",
            Style::default().fg(palette.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    state.overlay.register_region(popup);
}
