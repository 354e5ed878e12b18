use core::fmt;

/// Returned when a string is not one of the six exact level names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSeverityError;

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected one of TRACE, DEBUG, INFO, WARN, ERROR, FATAL")
    }
}

impl core::error::Error for ParseSeverityError {}
