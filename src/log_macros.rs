//! Leveled logging macros for the default logger and for explicit [`Logger`](crate::Logger) handles.
//!
//! # Feature Flags
//! The compile-time minimum level is controlled by cargo features:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`, `log-fatal`.
//! Each one implies the more severe ones; with none enabled the minimum is INFO.
//!
//! Below the minimum the corresponding macros expand to `()`, removing the call
//! and the evaluation of its arguments at compile time. FATAL is never removed.
//! `log_dynamic!` and `logger_log!` take the level as a runtime value and are
//! never removed either; they are filtered by the runtime threshold only.
//!
//! A call site is valid or invalid independently of the feature set: compiled-out
//! macros accept exactly the same input as compiled-in ones, so an empty call is
//! rejected whatever the minimum level is.
//!
//! ```compile_fail
//! femtolog::log_trace!();
//! ```
//!
//! ```compile_fail
//! let logger = femtolog::Logger::<femtolog::NoopLogSink>::new();
//! femtolog::logger_debug!(logger);
//! ```
//!
//! This whole module is gated on the `macros` feature.

// ============================================================================
// 1. DYNAMIC-LEVEL MACROS (never elided)
// ============================================================================

/// Logs at a runtime-chosen level through the default logger.
///
/// ```
/// use femtolog::{Severity, log_dynamic};
///
/// let level = Severity::from_name("WARN");
/// log_dynamic!(level, "retrying in {}s", 5);
/// ```
#[macro_export]
macro_rules! log_dynamic {
    ($lvl:expr, $($arg:tt)+) => {{
        $crate::default_logger::vlog($lvl, ::core::format_args!($($arg)+))
    }};
}

/// Logs at a runtime-chosen level through an explicit logger.
#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {{
        $logger.vlog($lvl, ::core::format_args!($($arg)+))
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! log_trace    { ($($arg:tt)+)               => { $crate::log_dynamic!($crate::Severity::TRACE, $($arg)+) } }
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! logger_trace { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Severity::TRACE, $($arg)+) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)+) => {
        ()
    };
}
#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! logger_trace {
    ($logger:expr, $($arg:tt)+) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug    { ($($arg:tt)+)               => { $crate::log_dynamic!($crate::Severity::DEBUG, $($arg)+) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Severity::DEBUG, $($arg)+) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($logger:expr, $($arg:tt)+) => {
        ()
    };
}

// ---------------------- INFO ----------------------
// Also enabled when no `log-*` feature is selected at all (every one of them implies `log-fatal`).
#[cfg(any(feature = "log-info", not(feature = "log-fatal")))]
#[macro_export]
macro_rules! log_info    { ($($arg:tt)+)               => { $crate::log_dynamic!($crate::Severity::INFO, $($arg)+) } }
#[cfg(any(feature = "log-info", not(feature = "log-fatal")))]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Severity::INFO, $($arg)+) } }

#[cfg(all(feature = "log-fatal", not(feature = "log-info")))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        ()
    };
}
#[cfg(all(feature = "log-fatal", not(feature = "log-info")))]
#[macro_export]
macro_rules! logger_info {
    ($logger:expr, $($arg:tt)+) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(any(feature = "log-warn", not(feature = "log-fatal")))]
#[macro_export]
macro_rules! log_warn    { ($($arg:tt)+)               => { $crate::log_dynamic!($crate::Severity::WARN, $($arg)+) } }
#[cfg(any(feature = "log-warn", not(feature = "log-fatal")))]
#[macro_export]
macro_rules! logger_warn { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Severity::WARN, $($arg)+) } }

#[cfg(all(feature = "log-fatal", not(feature = "log-warn")))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        ()
    };
}
#[cfg(all(feature = "log-fatal", not(feature = "log-warn")))]
#[macro_export]
macro_rules! logger_warn {
    ($logger:expr, $($arg:tt)+) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(any(feature = "log-error", not(feature = "log-fatal")))]
#[macro_export]
macro_rules! log_error    { ($($arg:tt)+)               => { $crate::log_dynamic!($crate::Severity::ERROR, $($arg)+) } }
#[cfg(any(feature = "log-error", not(feature = "log-fatal")))]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Severity::ERROR, $($arg)+) } }

#[cfg(all(feature = "log-fatal", not(feature = "log-error")))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        ()
    };
}
#[cfg(all(feature = "log-fatal", not(feature = "log-error")))]
#[macro_export]
macro_rules! logger_error {
    ($logger:expr, $($arg:tt)+) => {
        ()
    };
}

// ---------------------- FATAL ----------------------
// Never elided: it is the highest level, so every compile-time minimum admits it.
#[macro_export]
macro_rules! log_fatal    { ($($arg:tt)+)               => { $crate::log_dynamic!($crate::Severity::FATAL, $($arg)+) } }
#[macro_export]
macro_rules! logger_fatal { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Severity::FATAL, $($arg)+) } }

// ============================================================================
// 3. LOG-AND-EXIT (hosted only)
// ============================================================================

/// Logs at FATAL through the default logger, then exits the process with
/// status 1. The exit happens even if the message was filtered or no sink is
/// installed.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! log_fatal_exit {
    ($($arg:tt)+) => {{
        $crate::log_fatal!($($arg)+);
        $crate::default_logger::__exit_failure()
    }};
}

/// [`log_fatal_exit!`] for an explicit logger.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! logger_fatal_exit {
    ($logger:expr, $($arg:tt)+) => {{
        $crate::logger_fatal!($logger, $($arg)+);
        $crate::default_logger::__exit_failure()
    }};
}
