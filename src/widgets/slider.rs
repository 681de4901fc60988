// ABOUTME: Integer range slider rendered as a filled track

use ratatui::{prelude::*, widgets::Paragraph};

use crate::components::theme::Palette;

/// Bounds and step of a slider. The value itself lives with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl Slider {
    pub fn new(min: u32, max: u32, step: u32) -> Self {
        Self {
            min,
            max: max.max(min),
            step: step.max(1),
        }
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    pub fn increment(&self, value: u32) -> u32 {
        self.clamp(value.saturating_add(self.step))
    }

    pub fn decrement(&self, value: u32) -> u32 {
        self.clamp(value.saturating_sub(self.step))
    }

    /// Fill percentage 0..=100
    pub fn percent(&self, value: u32) -> u32 {
        let span = self.max - self.min;
        if span == 0 {
            return 100;
        }
        (self.clamp(value) - self.min) * 100 / span
    }
}

pub fn render_slider(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    slider: &Slider,
    value: u32,
    focused: bool,
) {
    let width = u32::from(area.width.max(1));
    let filled = (slider.percent(value) * width / 100) as usize;
    let empty = (width as usize).saturating_sub(filled);
    let fill_color = if focused { palette.primary } else { palette.muted };
    let line = Line::from(vec![
        Span::styled("━".repeat(filled), Style::default().fg(fill_color)),
        Span::styled("─".repeat(empty), Style::default().fg(palette.border)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_clamp_to_bounds() {
        let slider = Slider::new(0, 100, 5);
        assert_eq!(slider.increment(98), 100);
        assert_eq!(slider.decrement(3), 0);
        assert_eq!(slider.increment(25), 30);
    }

    #[test]
    fn test_percent() {
        let slider = Slider::new(0, 100, 1);
        assert_eq!(slider.percent(25), 25);
        assert_eq!(slider.percent(500), 100);

        let offset = Slider::new(10, 20, 1);
        assert_eq!(offset.percent(15), 50);
        assert_eq!(offset.percent(0), 0);
        assert_eq!(Slider::new(5, 5, 1).percent(5), 100);
    }
}
