//! Weekly schedule slots and the pairwise overlap test.
//!
//! A slot is a recurring day-of-week plus a time range, not tied to any
//! calendar date. Slots on different days never overlap. Slots on the same day
//! overlap when `a.start < b.end && a.end > b.start`, so slots that merely
//! touch (one ends exactly when the other starts) are NOT overlapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudyError};
use crate::time::WallClock;

/// Day of the week a slot recurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Labels accepted when parsing, besides the English name itself.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Day::Monday => &["mon", "lunes"],
            Day::Tuesday => &["tue", "martes"],
            Day::Wednesday => &["wed", "miércoles", "miercoles"],
            Day::Thursday => &["thu", "jueves"],
            Day::Friday => &["fri", "viernes"],
            Day::Saturday => &["sat", "sábado", "sabado"],
            Day::Sunday => &["sun", "domingo"],
        }
    }
}

impl FromStr for Day {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim().to_lowercase();
        Day::ALL
            .into_iter()
            .find(|day| {
                day.name().to_lowercase() == label || day.aliases().contains(&label.as_str())
            })
            .ok_or_else(|| StudyError::validation(format!("unknown day '{s}'")))
    }
}

impl TryFrom<String> for Day {
    type Error = StudyError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.name().to_string()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One recurring weekly time block. `start` is always strictly before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSlot")]
pub struct ScheduleSlot {
    pub day: Day,
    pub start: WallClock,
    pub end: WallClock,
}

#[derive(Deserialize)]
struct RawSlot {
    day: Day,
    start: WallClock,
    end: WallClock,
}

impl TryFrom<RawSlot> for ScheduleSlot {
    type Error = StudyError;

    fn try_from(raw: RawSlot) -> Result<Self> {
        ScheduleSlot::new(raw.day, raw.start, raw.end)
    }
}

impl ScheduleSlot {
    /// Build a slot, rejecting empty or inverted ranges.
    pub fn new(day: Day, start: WallClock, end: WallClock) -> Result<Self> {
        if start >= end {
            return Err(StudyError::InvalidSlot {
                day: day.to_string(),
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(ScheduleSlot { day, start, end })
    }

    /// Parse a slot from its textual parts, e.g. `("Mon", "08:00", "10:00")`.
    pub fn parse(day: &str, start: &str, end: &str) -> Result<Self> {
        ScheduleSlot::new(day.parse()?, start.parse()?, end.parse()?)
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether this slot conflicts with `other`. See [`overlaps`].
    pub fn overlaps(&self, other: &ScheduleSlot) -> bool {
        overlaps(self, other)
    }
}

impl fmt::Display for ScheduleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}

/// Decide whether two weekly slots overlap.
///
/// Different days never overlap. On the same day the ranges are treated as
/// half-open, so `08:00-10:00` and `10:00-12:00` do not conflict.
pub fn overlaps(a: &ScheduleSlot, b: &ScheduleSlot) -> bool {
    if a.day != b.day {
        return false;
    }

    let (start_a, end_a) = (a.start.minutes(), a.end.minutes());
    let (start_b, end_b) = (b.start.minutes(), b.end.minutes());

    start_a < end_b && end_a > start_b
}
