//! femtolog is a small leveled logger for hosted programs and for freestanding
//! targets such as bootloaders and firmware.
//!
//! Messages carry one of six [`Severity`] levels and pass two filters before
//! reaching the host-supplied [`LogSink`]:
//!
//! 1. **Compile time**: the `log-*` cargo features pick a minimum level. Macro
//!    call sites below it expand to nothing, arguments included.
//! 2. **Run time**: the logger's threshold, changeable at any point with
//!    [`set_threshold`].
//!
//! The crate never allocates and never performs I/O itself; rendering and
//! delivery belong to the sink. It builds without `std` when the default
//! `std` feature is disabled.
//!
//! ```
//! use femtolog::{Severity, StderrLogSink, log_debug, log_warn};
//!
//! femtolog::init(Severity::INFO, &StderrLogSink);
//! log_debug!("not shown: {}", 1);
//! log_warn!("battery at {}%", 9);
//! femtolog::set_threshold(Severity::ERROR);
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

/// Build-time minimum level.
pub mod compile_filter;
/// Process-wide default logger used by the `log_*` macros.
pub mod default_logger;
/// Sink rendering into a `core::fmt::Write` target.
pub mod fmt_log_sink;
/// Severity levels and name conversions.
pub mod log_level;
/// Error returned when parsing a level name fails.
pub mod log_level_error;
#[cfg(feature = "macros")]
pub mod log_macros;
/// The output sink contract.
pub mod log_sink;
/// Explicit logger handle: runtime threshold, sink and dispatch.
pub mod logger;
/// Sink that discards every message.
pub mod noop_log_sink;
/// Sinks writing to `std::io` targets.
#[cfg(feature = "std")]
pub mod write_log_sink;

pub use compile_filter::{COMPILE_TIME_MIN, enabled_at_compile_time};
pub use default_logger::{
    StaticLogSink, enabled, init, set_sink, set_threshold, sink, take_sink, threshold, vlog,
};
pub use fmt_log_sink::FmtLogSink;
pub use log_level::Severity;
pub use log_level_error::ParseSeverityError;
pub use log_sink::{FnLogSink, LogSink};
pub use logger::Logger;
pub use noop_log_sink::NoopLogSink;
#[cfg(feature = "std")]
pub use write_log_sink::{StderrLogSink, WriteLogSink};

/// Version reported by the `TRACE` line emitted on initialization.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
