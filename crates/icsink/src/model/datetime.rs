//! Date and time primitives (RFC 5545 §3.3.4, §3.3.5, §3.3.14).

use chrono::{NaiveDate, NaiveDateTime};

/// A calendar date (§3.3.4), rendered as `YYYYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date(pub NaiveDate);

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d"))
    }
}

/// Whether a date-time floats (local wall clock) or is anchored to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateTimeForm {
    /// No timezone designator; interpreted in local time.
    #[default]
    Floating,
    /// Absolute time, rendered with a trailing `Z`.
    Utc,
}

/// A date with time of day (§3.3.5), rendered as `YYYYMMDDTHHMMSS[Z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    /// The wall-clock value.
    pub value: NaiveDateTime,
    /// Floating or UTC.
    pub form: DateTimeForm,
}

impl DateTime {
    /// Creates a floating (timezone-less) date-time.
    #[must_use]
    pub const fn floating(value: NaiveDateTime) -> Self {
        Self {
            value,
            form: DateTimeForm::Floating,
        }
    }

    /// Creates a UTC date-time.
    #[must_use]
    pub const fn utc(value: NaiveDateTime) -> Self {
        Self {
            value,
            form: DateTimeForm::Utc,
        }
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value.format("%Y%m%dT%H%M%S"))?;
        if self.form == DateTimeForm::Utc {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

/// A UTC offset (§3.3.14), rendered as `+HHMM` / `-HHMM` with optional
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    /// Offset from UTC in seconds, negative west of Greenwich.
    pub seconds: i32,
}

impl UtcOffset {
    /// Creates an offset from hours and minutes east of Greenwich.
    #[must_use]
    pub const fn hours_minutes(hours: i32, minutes: i32) -> Self {
        Self {
            seconds: hours * 3600 + minutes * 60,
        }
    }
}

impl std::fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let total = self.seconds.abs();
        let hours = total / 3600;
        let minutes = total % 3600 / 60;
        let seconds = total % 60;
        write!(f, "{sign}{hours:02}{minutes:02}")?;
        if seconds > 0 {
            write!(f, "{seconds:02}")?;
        }
        Ok(())
    }
}
