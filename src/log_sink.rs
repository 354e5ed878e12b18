use core::fmt;

/// Destination for accepted log messages.
///
/// The dispatcher calls [`log`](LogSink::log) at most once per accepted
/// message, synchronously, on the caller's own context. The sink owns the
/// rendering: whether to prefix `level_name`, how to terminate the line and
/// when to flush. It is the only place where I/O happens.
pub trait LogSink {
    fn log(&self, level_name: &'static str, args: fmt::Arguments<'_>);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    #[inline]
    fn log(&self, level_name: &'static str, args: fmt::Arguments<'_>) {
        (**self).log(level_name, args);
    }
}

/// Adapts a closure into a [`LogSink`].
///
/// ```
/// use femtolog::{FnLogSink, Logger, Severity, logger_warn};
///
/// let mut logger = Logger::new();
/// logger.init(
///     Severity::INFO,
///     FnLogSink::new(|name, args| eprintln!("[{name}] {args}")),
/// );
/// logger_warn!(logger, "disk {}% full", 93);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FnLogSink<F>(pub F);

impl<F> FnLogSink<F>
where
    F: Fn(&'static str, fmt::Arguments<'_>),
{
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> LogSink for FnLogSink<F>
where
    F: Fn(&'static str, fmt::Arguments<'_>),
{
    #[inline]
    fn log(&self, level_name: &'static str, args: fmt::Arguments<'_>) {
        (self.0)(level_name, args);
    }
}
