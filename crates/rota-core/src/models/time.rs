//! Wall-clock time of day with minute resolution.

use std::fmt;
use std::str::FromStr;

use jiff::civil;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TimetableError};

/// A wall-clock time with hour/minute resolution in the 24-hour range
/// 00:00–23:59.
///
/// Wraps [`jiff::civil::Time`] so comparisons follow wall-clock order. The
/// textual and serialized form is always the zero-padded `HH:MM` string;
/// anything else is rejected when parsing (`"9:00"` and `"25:61"` are both
/// invalid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(civil::Time);

impl ClockTime {
    /// Creates a clock time from numeric components.
    pub fn new(hour: i8, minute: i8) -> Result<Self> {
        civil::Time::new(hour, minute, 0, 0)
            .map(Self)
            .map_err(|_| TimetableError::InvalidTimeFormat {
                value: format!("{hour}:{minute}"),
            })
    }

    /// Hour component (0–23).
    pub fn hour(&self) -> i8 {
        self.0.hour()
    }

    /// Minute component (0–59).
    pub fn minute(&self) -> i8 {
        self.0.minute()
    }
}

impl FromStr for ClockTime {
    type Err = TimetableError;

    /// Parses a strict `HH:MM` token, both fields zero-padded.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TimetableError::InvalidTimeFormat {
            value: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let hour: i8 = s[0..2].parse().map_err(|_| invalid())?;
        let minute: i8 = s[3..5].parse().map_err(|_| invalid())?;
        civil::Time::new(hour, minute, 0, 0)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
