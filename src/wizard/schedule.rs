// ABOUTME: Weekly availability schedule types for the onboarding wizard
// Seven fixed day entries with 24-hour "HH:mm" start/end times

use serde::{Deserialize, Serialize};

/// Days of the week in schedule order (Monday first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in schedule order
    pub fn all() -> &'static [Weekday; 7] {
        &[
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

/// Which time of a day entry is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

/// One day of a weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Weekday,
    pub available: bool,
    /// 24-hour "HH:mm"
    pub start: String,
    /// 24-hour "HH:mm"
    pub end: String,
}

impl DaySchedule {
    pub fn time(&self, field: TimeField) -> &str {
        match field {
            TimeField::Start => &self.start,
            TimeField::End => &self.end,
        }
    }
}

pub const DEFAULT_START: &str = "09:00";
pub const DEFAULT_END: &str = "17:00";

/// Seven day entries, Monday..Sunday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl WeeklySchedule {
    /// Weekdays available 09:00-17:00, weekends unavailable (times still 09:00-17:00)
    pub fn default_week() -> Self {
        let days = (*Weekday::all()).map(|day| DaySchedule {
            day,
            available: !day.is_weekend(),
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
        });
        Self { days }
    }

    pub fn days(&self) -> &[DaySchedule; 7] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Option<&DaySchedule> {
        self.days.get(index)
    }

    /// Copy of this schedule with one day's availability flipped.
    /// Times are left untouched.
    pub fn with_day_toggled(&self, index: usize) -> Self {
        let mut next = self.clone();
        if let Some(entry) = next.days.get_mut(index) {
            entry.available = !entry.available;
        }
        next
    }

    /// Copy of this schedule with one time field of one day replaced
    pub fn with_time(&self, index: usize, field: TimeField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(entry) = next.days.get_mut(index) {
            match field {
                TimeField::Start => entry.start = value.into(),
                TimeField::End => entry.end = value.into(),
            }
        }
        next
    }

    pub fn available_days(&self) -> usize {
        self.days.iter().filter(|d| d.available).count()
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::default_week()
    }
}
