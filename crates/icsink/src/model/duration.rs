//! Duration values (RFC 5545 §3.3.6).

/// A signed duration, rendered as `P15DT5H0M20S`, `PT1H`, `P2W`, `-PT5M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    /// Whether the duration is negative.
    pub negative: bool,
    /// Whole weeks.
    pub weeks: u32,
    /// Whole days.
    pub days: u32,
    /// Hours portion of the time component.
    pub hours: u32,
    /// Minutes portion of the time component.
    pub minutes: u32,
    /// Seconds portion of the time component.
    pub seconds: u32,
}

impl Duration {
    /// Creates a duration of whole weeks.
    #[must_use]
    pub const fn weeks(weeks: u32) -> Self {
        Self {
            negative: false,
            weeks,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Creates a duration of whole days.
    #[must_use]
    pub const fn days(days: u32) -> Self {
        Self {
            negative: false,
            weeks: 0,
            days,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Creates a time-of-day duration.
    #[must_use]
    pub const fn time(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            negative: false,
            weeks: 0,
            days: 0,
            hours,
            minutes,
            seconds,
        }
    }

    /// Returns this duration with the sign flipped.
    #[must_use]
    pub const fn negated(mut self) -> Self {
        self.negative = !self.negative;
        self
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;

        let has_time = self.hours > 0 || self.minutes > 0 || self.seconds > 0;

        // The grammar does not allow weeks alongside other units; a pure
        // week count renders as nW, anything mixed folds weeks into days.
        if self.weeks > 0 && self.days == 0 && !has_time {
            return write!(f, "{}W", self.weeks);
        }

        let days = self.days + self.weeks * 7;
        if days > 0 {
            write!(f, "{days}D")?;
        }
        if has_time || days == 0 {
            f.write_str("T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 || !has_time {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weeks_only() {
        assert_eq!(Duration::weeks(2).to_string(), "P2W");
    }

    #[test]
    fn days_and_time() {
        let dur = Duration {
            negative: false,
            weeks: 0,
            days: 15,
            hours: 5,
            minutes: 0,
            seconds: 20,
        };
        assert_eq!(dur.to_string(), "P15DT5H20S");
    }

    #[test]
    fn time_only() {
        assert_eq!(Duration::time(1, 0, 0).to_string(), "PT1H");
        assert_eq!(Duration::time(0, 5, 0).negated().to_string(), "-PT5M");
    }

    #[test]
    fn zero_duration() {
        assert_eq!(Duration::default().to_string(), "PT0S");
    }

    #[test]
    fn weeks_mixed_fold_into_days() {
        let dur = Duration {
            negative: false,
            weeks: 1,
            days: 1,
            hours: 0,
            minutes: 0,
            seconds: 0,
        };
        assert_eq!(dur.to_string(), "P8D");
    }
}
