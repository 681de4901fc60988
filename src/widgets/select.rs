// ABOUTME: Dropdown select with optional type-to-filter search
// Emits the chosen option value; the caller owns the current value

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

use super::overlay::DismissibleOverlay;
use crate::components::theme::Palette;

const MAX_VISIBLE_OPTIONS: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options whose label contains `query`, ignoring case. Empty query keeps everything.
pub fn filter_options<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    if query.is_empty() {
        return options.iter().collect();
    }
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .collect()
}

/// Ephemeral dropdown state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectState {
    pub overlay: DismissibleOverlay,
    pub query: String,
    pub highlighted: usize,
    pub searchable: bool,
}

impl SelectState {
    pub fn new(searchable: bool) -> Self {
        Self {
            searchable,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Open with the highlight on the current value, if present
    pub fn open(&mut self, options: &[SelectOption], current: &str) {
        self.query.clear();
        self.highlighted = options.iter().position(|o| o.value == current).unwrap_or(0);
        self.overlay.open();
    }

    pub fn close(&mut self) {
        self.overlay.close();
        self.query.clear();
        self.highlighted = 0;
    }

    pub fn filtered<'a>(&self, options: &'a [SelectOption]) -> Vec<&'a SelectOption> {
        filter_options(options, &self.query)
    }

    pub fn push_query(&mut self, c: char) {
        if self.searchable {
            self.query.push(c);
            self.highlighted = 0;
        }
    }

    pub fn pop_query(&mut self) {
        if self.searchable {
            self.query.pop();
            self.highlighted = 0;
        }
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self, options: &[SelectOption]) {
        let count = self.filtered(options).len();
        if count > 0 && self.highlighted + 1 < count {
            self.highlighted += 1;
        }
    }

    /// Value of the highlighted option; closes the dropdown.
    /// Returns None (and stays open) when the filter matches nothing.
    pub fn choose(&mut self, options: &[SelectOption]) -> Option<String> {
        let value = self
            .filtered(options)
            .get(self.highlighted)
            .map(|o| o.value.clone())?;
        self.close();
        Some(value)
    }
}

/// Label for a stored value
pub fn label_for<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.as_str())
}

/// Render the anchor box and, when open, the option popup below it.
/// Registers the overlay's dismiss region while open.
#[allow(clippy::too_many_arguments)]
pub fn render_select(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    label: &str,
    value: &str,
    options: &[SelectOption],
    state: &mut SelectState,
    focused: bool,
) {
    let shown = label_for(options, value).unwrap_or("Select...");
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { palette.primary } else { palette.border }))
        .title(Span::styled(format!(" {label} "), Style::default().fg(palette.muted)));
    let arrow = if state.is_open() { "▲" } else { "▼" };
    let value_style = if value.is_empty() {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(palette.text)
    };
    let line = Line::from(vec![
        Span::styled(shown.to_string(), value_style),
        Span::raw(" "),
        Span::styled(arrow, Style::default().fg(palette.muted)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if !state.is_open() {
        return;
    }

    let filtered = state.filtered(options);
    let search_rows = u16::from(state.searchable);
    let list_rows = (filtered.len() as u16).clamp(1, MAX_VISIBLE_OPTIONS);
    let screen = frame.size();
    let below = area.y.saturating_add(area.height);
    let height = (list_rows + search_rows + 2).min(screen.height.saturating_sub(below));
    let popup = Rect::new(area.x, below, area.width, height);
    if popup.height < 3 {
        state.overlay.register_region(area);
        return;
    }

    frame.render_widget(Clear, popup);
    let popup_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.panel));
    let inner = popup_block.inner(popup);
    frame.render_widget(popup_block, popup);

    let mut list_area = inner;
    if state.searchable && inner.height > 1 {
        let query_line = Line::from(vec![
            Span::styled("🔍 ", Style::default().fg(palette.muted)),
            Span::styled(state.query.clone(), Style::default().fg(palette.text)),
            Span::styled("█", Style::default().fg(palette.primary)),
        ]);
        frame.render_widget(Paragraph::new(query_line), Rect::new(inner.x, inner.y, inner.width, 1));
        list_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);
    }

    let visible = usize::from(list_area.height.max(1));
    let offset = state.highlighted.saturating_sub(visible.saturating_sub(1));
    let items: Vec<ListItem> = if filtered.is_empty() {
        vec![ListItem::new(Span::styled(
            "No results found",
            Style::default().fg(palette.muted),
        ))]
    } else {
        filtered
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, option)| {
                let style = if idx == state.highlighted {
                    Style::default()
                        .fg(palette.background)
                        .bg(palette.primary)
                        .add_modifier(Modifier::BOLD)
                } else if option.value == value {
                    Style::default().fg(palette.accent)
                } else {
                    Style::default().fg(palette.text)
                };
                ListItem::new(Span::styled(option.label.clone(), style))
            })
            .collect()
    };
    frame.render_widget(List::new(items), list_area);

    state.overlay.register_region(area.union(popup));
}
