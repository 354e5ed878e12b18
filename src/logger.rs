use core::fmt;

use crate::{VERSION, compile_filter, log_level::Severity, log_sink::LogSink};

/// Logger state: the runtime threshold and the installed sink.
///
/// A `Logger` is an explicit handle. Hosts that need several independent
/// loggers create one per destination; the crate-level functions
/// ([`init`](crate::init), [`vlog`](crate::vlog), ...) operate on a single
/// default instance.
///
/// # Filtering
///
/// A message at `level` reaches the sink iff `level >= threshold()` and a
/// sink is installed. Levels are compared as raw values and never clamped, so
/// an out-of-range level below `TRACE` is always dropped and one above
/// `FATAL` always passes.
///
/// # Example
///
/// ```
/// use femtolog::{FnLogSink, Logger, Severity, logger_debug, logger_error};
///
/// let mut logger = Logger::new();
/// logger.init(Severity::WARN, FnLogSink::new(|name, args| eprintln!("{name}: {args}")));
///
/// logger_debug!(logger, "dropped"); // below threshold
/// logger_error!(logger, "link down on port {}", 3);
/// ```
#[derive(Clone, Copy)]
pub struct Logger<S> {
    threshold: Severity,
    sink: Option<S>,
}

impl<S> Logger<S> {
    /// Creates an uninitialized logger: threshold `TRACE`, no sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            threshold: Severity::TRACE,
            sink: None,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Sets the runtime threshold. Invalid levels are ignored and the
    /// previous threshold is kept.
    pub fn set_threshold(&mut self, level: Severity) {
        if level.is_valid() {
            self.threshold = level;
        }
    }

    #[must_use]
    pub const fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Installs `sink`, discarding any previous one.
    pub fn set_sink(&mut self, sink: S) {
        self.sink = Some(sink);
    }

    /// Removes the sink and hands it back, leaving the logger silent.
    pub fn take_sink(&mut self) -> Option<S> {
        self.sink.take()
    }

    /// Runtime filter: `true` if a message at `level` passes the threshold.
    #[inline]
    #[must_use]
    pub fn enabled(&self, level: Severity) -> bool {
        level >= self.threshold
    }
}

impl<S: LogSink> Logger<S> {
    /// Sets the threshold (ignored if invalid), installs `sink` and emits the
    /// version line at `TRACE` whenever `TRACE` call sites are compiled in.
    ///
    /// The version line is not filtered by `threshold`: with the `log-trace`
    /// feature, `init(Severity::INFO, sink)` still writes one `TRACE` line,
    /// while any later `TRACE` message is dropped. The line does not go through
    /// [`Logger::vlog`], which would drop it for any threshold above `TRACE`.
    ///
    /// Calling it again simply overwrites the state and emits the line again.
    pub fn init(&mut self, threshold: Severity, sink: S) {
        self.set_threshold(threshold);
        self.set_sink(sink);
        self.announce();
    }

    /// Dispatches one message.
    ///
    /// Returns without effect if `level` is below the threshold or no sink is
    /// installed. Otherwise the sink receives the level name and the
    /// unrendered arguments exactly once.
    #[inline]
    pub fn vlog(&self, level: Severity, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        if let Some(sink) = &self.sink {
            sink.log(level.name(), args);
        }
    }

    /// Emits the version line. It is subject to the compile-time filter only:
    /// the runtime threshold just set by `init` does not suppress it.
    pub(crate) fn announce(&self) {
        if !compile_filter::enabled_at_compile_time(Severity::TRACE) {
            return;
        }
        if let Some(sink) = &self.sink {
            sink.log(Severity::TRACE.name(), format_args!("femtolog v{VERSION}"));
        }
    }
}

impl<S> Default for Logger<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for Logger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
