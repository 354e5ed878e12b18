//! Build-time minimum level.
//!
//! The minimum is selected with the `log-*` cargo features:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`, `log-fatal`.
//! Each feature implies every more severe one, so the minimum is the lowest
//! enabled level. With no `log-*` feature at all the minimum is INFO.
//!
//! The per-level macros consult the same features: below the minimum they
//! expand to `()`, removing the call and its argument evaluation entirely.

use crate::log_level::Severity;

/// Lowest level whose call sites survive compilation.
pub const COMPILE_TIME_MIN: Severity = if cfg!(feature = "log-trace") {
    Severity::TRACE
} else if cfg!(feature = "log-debug") {
    Severity::DEBUG
} else if cfg!(feature = "log-info") {
    Severity::INFO
} else if cfg!(feature = "log-warn") {
    Severity::WARN
} else if cfg!(feature = "log-error") {
    Severity::ERROR
} else if cfg!(feature = "log-fatal") {
    Severity::FATAL
} else {
    Severity::INFO
};

const _: () = assert!(
    COMPILE_TIME_MIN.is_valid(),
    "compile-time minimum level must be one of TRACE..=FATAL"
);

/// Returns `true` if call sites at `level` are compiled in.
///
/// The per-level macros already honour this; it is exposed for hosts that
/// build without the `macros` feature and call [`vlog`](crate::vlog) directly:
///
/// ```
/// use femtolog::{Severity, enabled_at_compile_time, vlog};
///
/// if enabled_at_compile_time(Severity::DEBUG) {
///     vlog(Severity::DEBUG, format_args!("expensive: {}", 6 * 7));
/// }
/// ```
#[inline]
#[must_use]
pub const fn enabled_at_compile_time(level: Severity) -> bool {
    level.raw() >= COMPILE_TIME_MIN.raw()
}
