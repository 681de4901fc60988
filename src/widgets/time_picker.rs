// ABOUTME: 12-hour time picker over a 24-hour "HH:mm" value
// Hour, quarter-hour minute and AM/PM columns; every change emits a new 24-hour value

use std::fmt;
use std::str::FromStr;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use thiserror::Error;

use super::overlay::DismissibleOverlay;
use crate::components::theme::Palette;

pub const MINUTE_STEPS: [u8; 4] = [0, 15, 30, 45];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("expected HH:mm, got {0:?}")]
    Format(String),
    #[error("hour {0} out of range")]
    Hour(u8),
    #[error("minute {0} out of range")]
    Minute(u8),
}

/// A 24-hour wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeParseError> {
        if hour > 23 {
            return Err(TimeParseError::Hour(hour));
        }
        if minute > 59 {
            return Err(TimeParseError::Minute(minute));
        }
        Ok(Self { hour, minute })
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || TimeParseError::Format(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(format_err)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(format_err());
        }
        let hour: u8 = h.parse().map_err(|_| format_err())?;
        let minute: u8 = m.parse().map_err(|_| format_err())?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Am => Self::Pm,
            Self::Pm => Self::Am,
        }
    }
}

/// The picker's view of a time: 12-hour clock with quarter-hour minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    /// 1-12
    pub hour: u8,
    /// One of MINUTE_STEPS
    pub minute: u8,
    pub meridiem: Meridiem,
}

impl TimeParts {
    /// Split a 24-hour time. Minutes off a quarter snap down to the previous quarter.
    pub fn decompose(time: ClockTime) -> Self {
        let meridiem = if time.hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
        let hour = match time.hour % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hour,
            minute: time.minute - time.minute % 15,
            meridiem,
        }
    }

    /// 12 AM is 00, 12 PM is 12, other PM hours add 12
    pub fn recombine(&self) -> ClockTime {
        let base = self.hour % 12;
        let hour = match self.meridiem {
            Meridiem::Am => base,
            Meridiem::Pm => base + 12,
        };
        ClockTime {
            hour,
            minute: self.minute,
        }
    }

    pub fn display(&self) -> String {
        format!("{:02}:{:02} {}", self.hour, self.minute, self.meridiem.label())
    }
}

/// Column of the open picker receiving arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerColumn {
    #[default]
    Hour,
    Minute,
    Meridiem,
}

impl PickerColumn {
    fn next(&self) -> Self {
        match self {
            Self::Hour => Self::Minute,
            Self::Minute => Self::Meridiem,
            Self::Meridiem => Self::Hour,
        }
    }

    fn previous(&self) -> Self {
        match self {
            Self::Hour => Self::Meridiem,
            Self::Minute => Self::Hour,
            Self::Meridiem => Self::Minute,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimePickerState {
    pub overlay: DismissibleOverlay,
    pub column: PickerColumn,
}

impl TimePickerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn open(&mut self) {
        self.column = PickerColumn::Hour;
        self.overlay.open();
    }

    pub fn close(&mut self) {
        self.overlay.close();
    }

    pub fn next_column(&mut self) {
        self.column = self.column.next();
    }

    pub fn previous_column(&mut self) {
        self.column = self.column.previous();
    }

    /// Step the active column by `delta`, wrapping within it. Returns the new 24-hour value.
    pub fn adjust(&self, value: &str, delta: i32) -> Result<String, TimeParseError> {
        let mut parts = TimeParts::decompose(value.parse()?);
        match self.column {
            PickerColumn::Hour => {
                let zero_based = i32::from(parts.hour) - 1;
                parts.hour = (zero_based + delta).rem_euclid(12) as u8 + 1;
            }
            PickerColumn::Minute => {
                let idx = MINUTE_STEPS
                    .iter()
                    .position(|m| *m == parts.minute)
                    .unwrap_or(0) as i32;
                parts.minute = MINUTE_STEPS[(idx + delta).rem_euclid(4) as usize];
            }
            PickerColumn::Meridiem => {
                if delta % 2 != 0 {
                    parts.meridiem = parts.meridiem.toggled();
                }
            }
        }
        Ok(parts.recombine().to_string())
    }
}

/// Label shown in the anchor box, falling back to the raw value
pub fn display_value(value: &str) -> String {
    value
        .parse::<ClockTime>()
        .map(|t| TimeParts::decompose(t).display())
        .unwrap_or_else(|_| value.to_string())
}

/// Draw the open picker's popup just below `anchor` and register its dismiss region
pub fn render_time_popup(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    value: &str,
    state: &mut TimePickerState,
) {
    if !state.is_open() {
        return;
    }
    let Ok(time) = value.parse::<ClockTime>() else {
        state.overlay.register_region(area);
        return;
    };
    let parts = TimeParts::decompose(time);

    let screen = frame.size();
    let below = area.y.saturating_add(area.height);
    let popup = Rect::new(area.x, below, area.width.max(22), 3).intersection(screen);
    if popup.height < 3 {
        state.overlay.register_region(area);
        return;
    }

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.panel));

    let cell = |text: String, column: PickerColumn| {
        let style = if state.column == column {
            Style::default()
                .fg(palette.background)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        Span::styled(format!(" ◀ {text} ▶ "), style)
    };
    let line = Line::from(vec![
        cell(format!("{:02}", parts.hour), PickerColumn::Hour),
        Span::raw(":"),
        cell(format!("{:02}", parts.minute), PickerColumn::Minute),
        cell(parts.meridiem.label().to_string(), PickerColumn::Meridiem),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), popup);

    state.overlay.register_region(area.union(popup));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_every_quarter_hour() {
        for hour in 0..24u8 {
            for minute in MINUTE_STEPS {
                let time = ClockTime::new(hour, minute).unwrap();
                let text = time.to_string();
                let parsed: ClockTime = text.parse().unwrap();
                assert_eq!(TimeParts::decompose(parsed).recombine(), time, "{text}");
            }
        }
    }

    #[test]
    fn test_midnight_and_noon() {
        let midnight = TimeParts::decompose("00:00".parse().unwrap());
        assert_eq!(midnight.hour, 12);
        assert_eq!(midnight.meridiem, Meridiem::Am);

        let noon = TimeParts {
            hour: 12,
            minute: 0,
            meridiem: Meridiem::Pm,
        };
        assert_eq!(noon.recombine().to_string(), "12:00");

        let twelve_am = TimeParts {
            hour: 12,
            minute: 30,
            meridiem: Meridiem::Am,
        };
        assert_eq!(twelve_am.recombine().to_string(), "00:30");
    }

    #[test]
    fn test_off_quarter_minutes_snap_down() {
        let parts = TimeParts::decompose("09:44".parse().unwrap());
        assert_eq!(parts.minute, 30);
        let parts = TimeParts::decompose("23:59".parse().unwrap());
        assert_eq!(parts.minute, 45);
        assert_eq!(parts.recombine().to_string(), "23:45");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("9".parse::<ClockTime>(), Err(TimeParseError::Format(_))));
        assert!(matches!("ab:cd".parse::<ClockTime>(), Err(TimeParseError::Format(_))));
        assert_eq!("24:00".parse::<ClockTime>(), Err(TimeParseError::Hour(24)));
        assert_eq!("10:60".parse::<ClockTime>(), Err(TimeParseError::Minute(60)));
    }

    #[test]
    fn test_adjust_columns() {
        let mut picker = TimePickerState::new();
        picker.open();

        assert_eq!(picker.adjust("09:00", 1).unwrap(), "10:00");
        // Hour wraps within the same meridiem: 11 AM -> 12 AM, 12 PM -> 11 PM
        assert_eq!(picker.adjust("11:00", 1).unwrap(), "00:00");
        assert_eq!(picker.adjust("12:15", -1).unwrap(), "23:15");

        picker.next_column();
        assert_eq!(picker.adjust("09:45", 1).unwrap(), "09:00");
        assert_eq!(picker.adjust("09:00", -1).unwrap(), "09:45");

        picker.next_column();
        assert_eq!(picker.adjust("09:00", 1).unwrap(), "21:00");
        assert_eq!(picker.adjust("21:00", -1).unwrap(), "09:00");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value("17:30"), "05:30 PM");
        assert_eq!(display_value("00:00"), "12:00 AM");
        assert_eq!(display_value("junk"), "junk");
    }
}
