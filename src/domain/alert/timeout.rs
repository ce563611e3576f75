//! Timeout value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidTimeoutError;

/// How long alerter keeps a notification on screen before giving up.
///
/// Whole seconds, never negative. Zero means the notification stays until
/// the user acts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timeout {
    seconds: u32,
}

impl Timeout {
    /// Never time out
    pub const NEVER: Self = Self { seconds: 0 };

    /// Create a timeout from seconds
    pub const fn from_secs(seconds: u32) -> Self {
        Self { seconds }
    }

    /// Create a timeout from a signed number of seconds.
    ///
    /// Negative values (and values that do not fit in `u32`) are rejected.
    pub fn try_from_secs(seconds: i64) -> Result<Self, InvalidTimeoutError> {
        u32::try_from(seconds)
            .map(Self::from_secs)
            .map_err(|_| InvalidTimeoutError {
                input: seconds.to_string(),
            })
    }

    /// Get timeout in seconds
    pub const fn as_secs(&self) -> u32 {
        self.seconds
    }

    /// Whether this timeout means "stay until dismissed"
    pub const fn is_never(&self) -> bool {
        self.seconds == 0
    }
}

impl TryFrom<i64> for Timeout {
    type Error = InvalidTimeoutError;

    fn try_from(seconds: i64) -> Result<Self, Self::Error> {
        Self::try_from_secs(seconds)
    }
}

impl FromStr for Timeout {
    type Err = InvalidTimeoutError;

    /// Supported formats: "10", "0", "never", "30s", "2m", "1m30s"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let invalid = || InvalidTimeoutError {
            input: s.to_string(),
        };

        if input == "never" {
            return Ok(Self::NEVER);
        }

        if let Ok(seconds) = input.parse::<i64>() {
            return Self::try_from_secs(seconds).map_err(|_| invalid());
        }

        let mut minutes: Option<u64> = None;
        let mut seconds: Option<u64> = None;
        let mut current_num = String::new();

        for ch in input.chars() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
                continue;
            }

            // Each unit at most once, and only after a number
            let slot = match ch {
                'm' => &mut minutes,
                's' => &mut seconds,
                _ => return Err(invalid()),
            };
            if current_num.is_empty() || slot.is_some() {
                return Err(invalid());
            }
            *slot = Some(current_num.parse().map_err(|_| invalid())?);
            current_num.clear();
        }

        if !current_num.is_empty() || (minutes.is_none() && seconds.is_none()) {
            return Err(invalid());
        }

        let total = minutes
            .unwrap_or(0)
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds.unwrap_or(0)))
            .and_then(|t| u32::try_from(t).ok())
            .ok_or_else(invalid)?;

        Ok(Self::from_secs(total))
    }
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_never() {
            return write!(f, "never");
        }

        let minutes = self.seconds / 60;
        let seconds = self.seconds % 60;

        if minutes == 0 {
            write!(f, "{}s", seconds)
        } else if seconds == 0 {
            write!(f, "{}m", minutes)
        } else {
            write!(f, "{}m{}s", minutes, seconds)
        }
    }
}
