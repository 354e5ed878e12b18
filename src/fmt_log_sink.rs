use core::fmt::{self, Write};

use spin::Mutex;

use crate::log_sink::LogSink;

/// Renders `LEVEL: message\n` into a [`core::fmt::Write`] target.
///
/// Meant for freestanding targets where the only output is a serial port or
/// a framebuffer console. The writer sits behind a spinlock so the sink is
/// `Sync` whenever `W: Send` and can be installed in the default logger.
/// Write errors are dropped.
pub struct FmtLogSink<W> {
    writer: Mutex<W>,
}

impl<W> FmtLogSink<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Runs `f` with exclusive access to the writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut *self.writer.lock())
    }
}

impl<W: Write> LogSink for FmtLogSink<W> {
    fn log(&self, level_name: &'static str, args: fmt::Arguments<'_>) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{level_name}: {args}");
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::{log_level::Severity, logger::Logger};

    #[test]
    fn renders_prefixed_line() {
        let sink = FmtLogSink::new(String::new());
        sink.log("WARN", format_args!("fan at {} rpm", 1200));
        sink.log("(unknown)", format_args!("odd"));
        assert_eq!(sink.into_inner(), "WARN: fan at 1200 rpm\n(unknown): odd\n");
    }

    #[test]
    fn works_as_logger_sink() {
        let sink = FmtLogSink::new(String::new());
        let mut logger = Logger::new();
        logger.set_threshold(Severity::ERROR);
        logger.set_sink(&sink);

        logger.vlog(Severity::INFO, format_args!("skipped"));
        logger.vlog(Severity::ERROR, format_args!("kept"));

        assert_eq!(sink.with_writer(|s| s.clone()), "ERROR: kept\n");
    }
}
