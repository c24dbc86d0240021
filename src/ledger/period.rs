//! Calendar bucket keys for grouping ledger entries.
//!
//! Week keys follow ISO-8601 numbering and carry only the week number. Days
//! at the turn of the year therefore land in the week ISO assigns them: 30
//! December 2024 is in week 1, and 1 January 2021 is in week 53. That is
//! accepted as-is; a ledger spanning several years shares week rows across
//! years.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Calendar month bucket, ordered chronologically. Renders (and serializes)
/// as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeriodKey {
    pub year: i32,
    pub month: u32,
}

impl PeriodKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PeriodKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("`{}` is not a YYYY-MM period", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("`{}` has an invalid year", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("`{}` has an invalid month", s))?;
        if !(1..=12).contains(&month) {
            return Err(format!("`{}` has an invalid month", s));
        }
        Ok(PeriodKey::new(year, month))
    }
}

impl Serialize for PeriodKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeriodKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// ISO week number (1..=53).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey(pub u32);

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{:02}", self.0)
    }
}

/// Day of week with a fixed Monday-first ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeekdayKey {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekdayKey {
    /// Column order of every weekday pivot.
    pub const ALL: [WeekdayKey; 7] = [
        WeekdayKey::Monday,
        WeekdayKey::Tuesday,
        WeekdayKey::Wednesday,
        WeekdayKey::Thursday,
        WeekdayKey::Friday,
        WeekdayKey::Saturday,
        WeekdayKey::Sunday,
    ];

    /// Zero-based column index, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            WeekdayKey::Monday => "Monday",
            WeekdayKey::Tuesday => "Tuesday",
            WeekdayKey::Wednesday => "Wednesday",
            WeekdayKey::Thursday => "Thursday",
            WeekdayKey::Friday => "Friday",
            WeekdayKey::Saturday => "Saturday",
            WeekdayKey::Sunday => "Sunday",
        }
    }

    pub fn short_label(self) -> &'static str {
        &self.name()[..3]
    }
}

impl From<Weekday> for WeekdayKey {
    fn from(day: Weekday) -> Self {
        WeekdayKey::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for WeekdayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn bucket_month(date: NaiveDate) -> PeriodKey {
    PeriodKey::new(date.year(), date.month())
}

pub fn bucket_week(date: NaiveDate) -> WeekKey {
    WeekKey(date.iso_week().week())
}

pub fn bucket_weekday(date: NaiveDate) -> WeekdayKey {
    WeekdayKey::from(date.weekday())
}
