// ABOUTME: Photo gallery with an add tile, cover badge and placeholders

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::file_prompt::{FilePromptState, IMAGE_EXTENSIONS};
use crate::components::theme::Palette;
use crate::wizard::form::{PhotoRef, MIN_PHOTOS};

const TILE_WIDTH: u16 = 18;
const TILE_HEIGHT: u16 = 5;

/// Selection over the gallery tiles. The last tile (index == photos.len()) is "add".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUploadState {
    pub selected: usize,
    pub prompt: FilePromptState,
}

impl Default for PhotoUploadState {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoUploadState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            prompt: FilePromptState::new(IMAGE_EXTENSIONS),
        }
    }

    /// Keep the selection inside photos plus the add tile
    pub fn clamp(&mut self, photos: &[PhotoRef]) {
        self.selected = self.selected.min(photos.len());
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self, photos: &[PhotoRef]) {
        self.selected = (self.selected + 1).min(photos.len());
    }

    pub fn on_add_tile(&self, photos: &[PhotoRef]) -> bool {
        self.selected >= photos.len()
    }

    /// Index to remove if a photo (not the add tile) is selected
    pub fn removal_target(&self, photos: &[PhotoRef]) -> Option<usize> {
        (self.selected < photos.len()).then_some(self.selected)
    }

    /// Turn the submitted prompt path into a new photo reference
    pub fn pick(&mut self) -> Option<PhotoRef> {
        self.prompt.submit().map(|path| PhotoRef::from_path(&path))
    }
}

enum Tile<'a> {
    Photo(usize, &'a PhotoRef),
    Placeholder,
    Add,
}

pub fn render_photo_upload(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    photos: &[PhotoRef],
    state: &PhotoUploadState,
    focused: bool,
) {
    let mut tiles: Vec<Tile> = photos.iter().enumerate().map(|(i, p)| Tile::Photo(i, p)).collect();
    tiles.push(Tile::Add);
    tiles.extend((0..MIN_PHOTOS.saturating_sub(photos.len())).map(|_| Tile::Placeholder));

    let per_row = usize::from((area.width / TILE_WIDTH).max(1));
    for (idx, tile) in tiles.iter().enumerate() {
        let x = area.x + (idx % per_row) as u16 * TILE_WIDTH;
        let y = area.y + (idx / per_row) as u16 * TILE_HEIGHT;
        if y + TILE_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, TILE_WIDTH - 1, TILE_HEIGHT);

        let (selected, title, body, color) = match tile {
            Tile::Add => (
                focused && state.on_add_tile(photos),
                String::new(),
                vec![
                    Line::from(Span::styled("+", Style::default().fg(palette.primary).add_modifier(Modifier::BOLD))),
                    Line::from(Span::styled("Add Photo", Style::default().fg(palette.muted))),
                ],
                palette.primary,
            ),
            Tile::Photo(i, photo) => (
                focused && state.selected == *i,
                if *i == 0 { " COVER ".to_string() } else { String::new() },
                vec![
                    Line::from(Span::styled("🖼", Style::default().fg(palette.text))),
                    Line::from(Span::styled(photo.file_name.clone(), Style::default().fg(palette.text))),
                ],
                palette.border,
            ),
            Tile::Placeholder => (
                false,
                String::new(),
                vec![Line::from(Span::styled("·", Style::default().fg(palette.border)))],
                palette.border,
            ),
        };

        let border_color = if selected { palette.accent } else { color };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                title,
                Style::default().fg(palette.background).bg(palette.accent).add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(
            Paragraph::new(body)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn photos(n: usize) -> Vec<PhotoRef> {
        (0..n)
            .map(|i| PhotoRef::from_path(Path::new(&format!("shot{i}.jpg"))))
            .collect()
    }

    #[test]
    fn test_selection_walks_to_add_tile() {
        let list = photos(2);
        let mut state = PhotoUploadState::new();
        assert_eq!(state.removal_target(&list), Some(0));
        state.move_right(&list);
        state.move_right(&list);
        state.move_right(&list);
        assert!(state.on_add_tile(&list));
        assert_eq!(state.removal_target(&list), None);
    }

    #[test]
    fn test_clamp_after_removal() {
        let mut state = PhotoUploadState::new();
        state.selected = 4;
        state.clamp(&photos(1));
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_pick_creates_reference() {
        let mut state = PhotoUploadState::new();
        state.prompt.open();
        state.prompt.paste("/srv/van.png");
        let photo = state.pick().unwrap();
        assert_eq!(photo.file_name, "van.png");
        assert!(state.pick().is_none());
    }
}
