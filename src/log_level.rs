use core::{fmt, str::FromStr};

use crate::log_level_error::ParseSeverityError;

/// Upper-case names of the valid levels, indexed by raw value.
const LEVEL_NAMES: [&str; 6] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"];

/// Placeholder returned by [`Severity::name`] for anything outside the valid range.
pub const UNKNOWN_NAME: &str = "(unknown)";

/// Defines the severity levels for log messages.
///
/// Valid levels occupy the contiguous raw range `0..=5`, from [`Severity::TRACE`]
/// to [`Severity::FATAL`]. Any other raw value can still be carried around (the
/// dynamic logging path forwards levels it has not validated) and simply
/// compares numerically against the runtime threshold. [`Severity::UNKNOWN`] is
/// the distinguished "not a level" value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Severity(i32);

impl Severity {
    /// Designates very fine-grained informational events.
    pub const TRACE: Self = Self(0);
    /// Designates fine-grained informational events that are most useful to debug an application.
    pub const DEBUG: Self = Self(1);
    /// Designates informational messages that highlight the progress of the application at coarse-grained level.
    pub const INFO: Self = Self(2);
    /// Designates potentially harmful situations.
    pub const WARN: Self = Self(3);
    /// Designates error events that might still allow the application to continue running.
    pub const ERROR: Self = Self(4);
    /// Designates errors the application cannot recover from.
    pub const FATAL: Self = Self(5);
    /// Not a valid level. Returned by failed name lookups.
    pub const UNKNOWN: Self = Self(-1);

    /// Every valid level in ascending order.
    pub const ALL: [Self; 6] = [
        Self::TRACE,
        Self::DEBUG,
        Self::INFO,
        Self::WARN,
        Self::ERROR,
        Self::FATAL,
    ];

    /// Wraps a raw level value without validating it.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Returns `true` if the level lies within `TRACE..=FATAL`.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= Self::TRACE.0 && self.0 <= Self::FATAL.0
    }

    /// Returns the upper-case name of the level, or `"(unknown)"` when the
    /// level is not valid.
    #[must_use]
    pub const fn name(self) -> &'static str {
        if self.is_valid() {
            LEVEL_NAMES[self.0 as usize]
        } else {
            UNKNOWN_NAME
        }
    }

    /// Looks a level up by its exact, case-sensitive name.
    ///
    /// Returns [`Severity::UNKNOWN`] when `name` is not one of the six level
    /// names. There is no prefix matching and no case folding.
    ///
    /// # Example
    ///
    /// ```
    /// use femtolog::Severity;
    ///
    /// assert_eq!(Severity::from_name("WARN"), Severity::WARN);
    /// assert_eq!(Severity::from_name("warn"), Severity::UNKNOWN);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|level| level.name() == name)
            .unwrap_or(Self::UNKNOWN)
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::TRACE
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            f.write_str(self.name())
        } else {
            f.debug_tuple("Severity").field(&self.0).finish()
        }
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = Self::from_name(s);
        if level.is_valid() {
            Ok(level)
        } else {
            Err(ParseSeverityError)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use test_case::test_case;

    #[test_case(Severity::TRACE, "TRACE")]
    #[test_case(Severity::DEBUG, "DEBUG")]
    #[test_case(Severity::INFO, "INFO")]
    #[test_case(Severity::WARN, "WARN")]
    #[test_case(Severity::ERROR, "ERROR")]
    #[test_case(Severity::FATAL, "FATAL")]
    fn valid_level_name_round_trips(level: Severity, name: &str) {
        assert!(level.is_valid());
        assert_eq!(level.name(), name);
        assert_eq!(Severity::from_name(level.name()), level);
    }

    #[test_case(Severity::UNKNOWN ; "unknown sentinel")]
    #[test_case(Severity::from_raw(6) ; "one past fatal")]
    #[test_case(Severity::from_raw(-2) ; "below unknown")]
    #[test_case(Severity::from_raw(i32::MAX) ; "max raw")]
    #[test_case(Severity::from_raw(i32::MIN) ; "min raw")]
    fn invalid_level_degrades_to_placeholder(level: Severity) {
        assert!(!level.is_valid());
        assert_eq!(level.name(), "(unknown)");
    }

    #[test_case("" ; "empty")]
    #[test_case("trace" ; "lower case")]
    #[test_case("Info" ; "mixed case")]
    #[test_case("WARNING" ; "longer name")]
    #[test_case("ERR" ; "prefix")]
    #[test_case(" FATAL" ; "leading space")]
    #[test_case("(unknown)" ; "placeholder")]
    fn non_exact_name_is_unknown(name: &str) {
        assert_eq!(Severity::from_name(name), Severity::UNKNOWN);
    }

    #[test]
    fn levels_are_ordered_and_contiguous() {
        for (i, level) in Severity::ALL.iter().enumerate() {
            assert_eq!(level.raw(), i as i32);
        }
        assert!(Severity::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(Severity::UNKNOWN < Severity::TRACE);
    }

    #[test]
    fn parse_accepts_only_exact_names() {
        assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::ERROR));
        assert_eq!("error".parse::<Severity>(), Err(ParseSeverityError));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Severity::INFO), "INFO");
        assert_eq!(format!("{}", Severity::from_raw(42)), "(unknown)");
        assert_eq!(format!("{:?}", Severity::WARN), "WARN");
        assert_eq!(format!("{:?}", Severity::UNKNOWN), "Severity(-1)");
    }
}
