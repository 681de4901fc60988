// ABOUTME: Button rendering with variants, sizes, disabled and loading states

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::components::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// Single line, no border
    Dense,
    #[default]
    Standard,
}

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button<'a> {
    pub label: &'a str,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub loading: bool,
    pub focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Primary,
            size: ButtonSize::Standard,
            disabled: false,
            loading: false,
            focused: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// A loading button is inert as well
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Label text, with a spinner frame while loading
    pub fn text(&self, tick: usize) -> String {
        if self.loading {
            format!("{} {}", SPINNER_FRAMES[tick % SPINNER_FRAMES.len()], self.label)
        } else {
            self.label.to_string()
        }
    }

    fn colors(&self, palette: &Palette) -> (Color, Color) {
        if !self.is_interactive() && !self.loading {
            return (palette.muted, palette.border);
        }
        match self.variant {
            ButtonVariant::Primary => (palette.background, palette.primary),
            ButtonVariant::Secondary => (palette.text, palette.panel),
            ButtonVariant::Ghost => (palette.primary, palette.background),
            ButtonVariant::Destructive => (palette.background, palette.error),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, tick: usize) {
        let (fg, bg) = self.colors(palette);
        let mut style = Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);
        if self.focused && self.is_interactive() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let paragraph = Paragraph::new(Span::styled(self.text(tick), style))
            .alignment(Alignment::Center)
            .style(Style::default().bg(bg));

        match self.size {
            ButtonSize::Dense => frame.render_widget(paragraph, area),
            ButtonSize::Standard => {
                let border = if self.focused { palette.accent } else { bg };
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border));
                frame.render_widget(paragraph.block(block), area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_shows_spinner_and_blocks() {
        let button = Button::new("Sign In").loading(true);
        assert!(!button.is_interactive());
        assert_eq!(button.text(0), "◐ Sign In");
        assert_eq!(button.text(5), "◓ Sign In");
    }

    #[test]
    fn test_disabled() {
        let button = Button::new("Continue").disabled(true);
        assert!(!button.is_interactive());
        assert_eq!(button.text(0), "Continue");
        assert!(Button::new("Continue").is_interactive());
    }
}
