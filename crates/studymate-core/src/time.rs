//! Wall-clock times of day in strict 24-hour `HH:MM` form.
//!
//! Parsing is strict: exactly two digits, a colon, two digits, with hours in
//! 0-23 and minutes in 0-59. Anything else is rejected with
//! [`StudyError::InvalidTime`] rather than producing a garbage minute count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudyError};

/// Convert an `HH:MM` string to minutes since midnight.
///
/// ```
/// use studymate_core::time::to_minutes;
///
/// assert_eq!(to_minutes("08:30").unwrap(), 510);
/// assert!(to_minutes("8:30").is_err());
/// ```
pub fn to_minutes(time: &str) -> Result<u16> {
    let invalid = || StudyError::InvalidTime(time.to_string());

    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    let [h1, h2, m1, m2] = digits.map(|d| u16::from(d - b'0'));
    let hours = h1 * 10 + h2;
    let minutes = m1 * 10 + m2;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// A time of day, stored as minutes since midnight.
///
/// Serializes back to the same zero-padded `HH:MM` text it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WallClock(u16);

impl WallClock {
    /// Build from an hour/minute pair.
    pub fn from_hm(hours: u16, minutes: u16) -> Result<Self> {
        if hours > 23 || minutes > 59 {
            return Err(StudyError::InvalidTime(format!("{hours}:{minutes}")));
        }
        Ok(WallClock(hours * 60 + minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl FromStr for WallClock {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self> {
        to_minutes(s).map(WallClock)
    }
}

impl TryFrom<String> for WallClock {
    type Error = StudyError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<WallClock> for String {
    fn from(t: WallClock) -> Self {
        t.to_string()
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}
