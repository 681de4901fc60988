// ABOUTME: Seven-day availability grid for one service
// Toggles and time edits each emit a complete new WeeklySchedule

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::time_picker::{display_value, render_time_popup, TimeParseError, TimePickerState};
use crate::components::theme::Palette;
use crate::wizard::schedule::{TimeField, WeeklySchedule};

/// Cell of a day row that has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridColumn {
    #[default]
    Toggle,
    Start,
    End,
}

impl GridColumn {
    fn time_field(&self) -> Option<TimeField> {
        match self {
            Self::Toggle => None,
            Self::Start => Some(TimeField::Start),
            Self::End => Some(TimeField::End),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityPickerState {
    /// Focused day, 0 = Monday
    pub row: usize,
    pub column: GridColumn,
    pub time_picker: TimePickerState,
}

impl AvailabilityPickerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.row = (self.row + 1).min(6);
    }

    pub fn move_left(&mut self) {
        self.column = match self.column {
            GridColumn::Toggle | GridColumn::Start => GridColumn::Toggle,
            GridColumn::End => GridColumn::Start,
        };
    }

    /// Time cells of an unavailable day are skipped
    pub fn move_right(&mut self, schedule: &WeeklySchedule) {
        let available = schedule.day(self.row).is_some_and(|d| d.available);
        self.column = match self.column {
            GridColumn::Toggle if available => GridColumn::Start,
            GridColumn::Toggle => GridColumn::Toggle,
            GridColumn::Start | GridColumn::End => GridColumn::End,
        };
    }

    /// Flip availability of the focused day
    pub fn toggle_day(&self, schedule: &WeeklySchedule) -> WeeklySchedule {
        schedule.with_day_toggled(self.row)
    }

    /// Open the time picker on the focused time cell. Returns false on the toggle column
    /// or an unavailable day.
    pub fn open_time_picker(&mut self, schedule: &WeeklySchedule) -> bool {
        let available = schedule.day(self.row).is_some_and(|d| d.available);
        if self.column.time_field().is_none() || !available {
            return false;
        }
        self.time_picker.open();
        true
    }

    /// Step the open picker's active column on the focused cell
    pub fn adjust_time(
        &self,
        schedule: &WeeklySchedule,
        delta: i32,
    ) -> Result<Option<WeeklySchedule>, TimeParseError> {
        let Some(field) = self.column.time_field() else {
            return Ok(None);
        };
        let Some(day) = schedule.day(self.row) else {
            return Ok(None);
        };
        let value = self.time_picker.adjust(day.time(field), delta)?;
        Ok(Some(schedule.with_time(self.row, field, value)))
    }
}

/// Render the grid. The active picker popup, if open, is drawn last so it overlaps rows.
pub fn render_availability(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    schedule: &WeeklySchedule,
    state: &mut AvailabilityPickerState,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { palette.primary } else { palette.border }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut popup_anchor = None;
    for (idx, day) in schedule.days().iter().enumerate() {
        let y = inner.y + idx as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let row_focused = focused && idx == state.row;
        let cell_style = |column: GridColumn, base: Style| {
            if row_focused && state.column == column {
                base.fg(palette.background).bg(palette.primary)
            } else {
                base
            }
        };

        let marker = if day.available { "[✓]" } else { "[ ]" };
        let marker_color = if day.available { palette.success } else { palette.muted };
        let label_style = if day.available {
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };

        let mut spans = vec![
            Span::styled(
                marker,
                cell_style(GridColumn::Toggle, Style::default().fg(marker_color)),
            ),
            Span::raw(" "),
            Span::styled(format!("{:<10}", day.day.label()), label_style),
        ];
        if day.available {
            let time_style = Style::default().fg(palette.text);
            spans.push(Span::styled(
                format!(" {} ", display_value(&day.start)),
                cell_style(GridColumn::Start, time_style),
            ));
            spans.push(Span::styled(" to ", Style::default().fg(palette.muted)));
            spans.push(Span::styled(
                format!(" {} ", display_value(&day.end)),
                cell_style(GridColumn::End, time_style),
            ));
        } else {
            spans.push(Span::styled(
                " Unavailable",
                Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
            ));
        }

        let row_area = Rect::new(inner.x, y, inner.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);

        if idx == state.row {
            // Label column is 14 cells wide; start cell is 12, separator 4
            let offset = match state.column {
                GridColumn::Start => 14,
                _ => 30,
            };
            popup_anchor = Some((
                Rect::new(inner.x + offset, y, 12, 1).intersection(row_area),
                day.clone(),
            ));
        }
    }

    if let (Some((anchor, day)), Some(field)) = (popup_anchor, state.column.time_field()) {
        render_time_popup(frame, anchor, palette, day.time(field), &mut state.time_picker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toggle_only_flips_focused_day() {
        let schedule = WeeklySchedule::default_week();
        let mut picker = AvailabilityPickerState::new();
        picker.row = 5;
        let next = picker.toggle_day(&schedule);
        assert!(next.days()[5].available);
        assert_eq!(next.days()[5].start, "09:00");
        assert_eq!(next.available_days(), 6);
    }

    #[test]
    fn test_adjust_time_writes_one_field() {
        let schedule = WeeklySchedule::default_week();
        let mut picker = AvailabilityPickerState::new();
        picker.row = 1;
        picker.move_right(&schedule);
        picker.move_right(&schedule);
        assert_eq!(picker.column, GridColumn::End);
        assert!(picker.open_time_picker(&schedule));

        let next = picker.adjust_time(&schedule, 1).unwrap().unwrap();
        assert_eq!(next.days()[1].end, "18:00");
        assert_eq!(next.days()[1].start, "09:00");
        assert_eq!(next.days()[0], schedule.days()[0]);
    }

    #[test]
    fn test_unavailable_day_blocks_time_edit() {
        let schedule = WeeklySchedule::default_week();
        let mut picker = AvailabilityPickerState::new();
        picker.row = 6;
        picker.move_right(&schedule);
        assert_eq!(picker.column, GridColumn::Toggle);
        assert!(!picker.open_time_picker(&schedule));
        assert_eq!(picker.adjust_time(&schedule, 1), Ok(None));
    }

    #[test]
    fn test_row_bounds() {
        let mut picker = AvailabilityPickerState::new();
        picker.move_up();
        assert_eq!(picker.row, 0);
        for _ in 0..10 {
            picker.move_down();
        }
        assert_eq!(picker.row, 6);
    }
}
