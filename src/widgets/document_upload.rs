// ABOUTME: Four fixed document slots with required markers

use std::path::Path;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::file_prompt::{FilePromptState, PDF_EXTENSIONS};
use crate::components::theme::Palette;
use crate::wizard::form::Documents;
use crate::wizard::types::DocumentSlot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUploadState {
    /// Index into DocumentSlot::all()
    pub selected: usize,
    pub prompt: FilePromptState,
}

impl Default for DocumentUploadState {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentUploadState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            prompt: FilePromptState::new(PDF_EXTENSIONS),
        }
    }

    pub fn selected_slot(&self) -> DocumentSlot {
        let slots = DocumentSlot::all();
        slots[self.selected.min(slots.len() - 1)]
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1).min(DocumentSlot::all().len() - 1);
    }

    /// Slot and display name for the submitted path. Only the name is kept.
    pub fn pick(&mut self) -> Option<(DocumentSlot, String)> {
        let slot = self.selected_slot();
        let path = self.prompt.submit()?;
        Some((slot, display_name(&path)))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn render_document_upload(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    documents: &Documents,
    state: &DocumentUploadState,
    focused: bool,
) {
    let slots = DocumentSlot::all();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(slots.iter().map(|_| Constraint::Length(3)).collect::<Vec<_>>())
        .split(area);

    for (idx, slot) in slots.iter().enumerate() {
        let selected = focused && idx == state.selected;
        let filled = documents.is_filled(*slot);

        let mut title = vec![Span::styled(
            format!(" {} ", slot.label()),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )];
        if slot.is_required() && !filled {
            title.push(Span::styled(
                " REQUIRED ",
                Style::default().fg(palette.background).bg(palette.error),
            ));
        }

        let body = match documents.get(*slot) {
            Some(name) if filled => Line::from(vec![
                Span::styled("✓ ", Style::default().fg(palette.success)),
                Span::styled(name.to_string(), Style::default().fg(palette.success)),
            ]),
            _ => Line::from(Span::styled(
                "⬆ Upload PDF",
                Style::default().fg(palette.muted),
            )),
        };

        let border = if selected {
            palette.accent
        } else if filled {
            palette.success
        } else {
            palette.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(Line::from(title));
        frame.render_widget(Paragraph::new(body).block(block), rows[idx]);
    }
}
