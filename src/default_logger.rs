//! Process-wide default [`Logger`].
//!
//! The `log_*` macros and the free functions re-exported at the crate root
//! all operate on this instance. The sink must be `'static` and `Sync`
//! because any thread may dispatch through it.
//!
//! The state sits behind a spinlock that is held only while the threshold and
//! sink reference are copied in or out. Dispatch runs on that copy with the
//! lock released, so a sink may itself log without deadlocking, and a
//! `set_threshold` racing with a dispatch affects either that message or the
//! next one.

use core::fmt;

use spin::Mutex;

use crate::{log_level::Severity, log_sink::LogSink, logger::Logger};

/// Sink reference stored by the default logger.
pub type StaticLogSink = &'static (dyn LogSink + Sync);

static DEFAULT_LOGGER: Mutex<Logger<StaticLogSink>> = Mutex::new(Logger::new());

#[inline]
fn snapshot() -> Logger<StaticLogSink> {
    *DEFAULT_LOGGER.lock()
}

/// Sets the threshold (ignored if invalid), installs `sink` and emits the
/// version line at `TRACE`.
///
/// Like [`Logger::init`], the version line only depends on `TRACE` being
/// compiled in (`log-trace`). The runtime threshold set here does not filter
/// it, even though a later [`vlog`] at `TRACE` is dropped.
///
/// ```
/// use femtolog::{Severity, StderrLogSink, log_info};
///
/// femtolog::init(Severity::INFO, &StderrLogSink);
/// log_info!("listening on port {}", 8080);
/// ```
pub fn init(threshold: Severity, sink: StaticLogSink) {
    let logger = {
        let mut logger = DEFAULT_LOGGER.lock();
        logger.set_threshold(threshold);
        logger.set_sink(sink);
        *logger
    };
    logger.announce();
}

#[must_use]
pub fn threshold() -> Severity {
    DEFAULT_LOGGER.lock().threshold()
}

/// Sets the runtime threshold; invalid levels are ignored.
pub fn set_threshold(level: Severity) {
    DEFAULT_LOGGER.lock().set_threshold(level);
}

#[must_use]
pub fn sink() -> Option<StaticLogSink> {
    DEFAULT_LOGGER.lock().sink().copied()
}

pub fn set_sink(sink: StaticLogSink) {
    DEFAULT_LOGGER.lock().set_sink(sink);
}

/// Removes the sink so later messages are dropped, returning it.
pub fn take_sink() -> Option<StaticLogSink> {
    DEFAULT_LOGGER.lock().take_sink()
}

/// Runtime filter of the default logger.
#[must_use]
pub fn enabled(level: Severity) -> bool {
    DEFAULT_LOGGER.lock().enabled(level)
}

/// Dispatches one message through the default logger.
///
/// This is the primitive the macros expand to. It is never removed at compile
/// time, whatever `level` is.
pub fn vlog(level: Severity, args: fmt::Arguments<'_>) {
    snapshot().vlog(level, args);
}

#[doc(hidden)]
#[cfg(feature = "std")]
pub fn __exit_failure() -> ! {
    std::process::exit(1)
}
