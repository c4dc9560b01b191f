use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// recurring weekly period during which a rule applies. a window whose end is
/// before its start runs past midnight.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    /// days the window opens on. empty means every day
    pub weekdays: Vec<Weekday>,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(weekdays: Vec<Weekday>, start: NaiveTime, end: NaiveTime) -> TimeWindow {
        TimeWindow {
            weekdays,
            start,
            end,
        }
    }

    pub fn contains(&self, time: &DateTime<Utc>) -> bool {
        let t = time.time();
        let on_day = |day: Weekday| self.weekdays.is_empty() || self.weekdays.contains(&day);
        if self.start <= self.end {
            on_day(time.weekday()) && self.start <= t && t < self.end
        } else if t >= self.start {
            on_day(time.weekday())
        } else if t < self.end {
            // the window opened the previous evening
            on_day(time.weekday().pred())
        } else {
            false
        }
    }
}
