use core::fmt;
use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use crate::log_sink::LogSink;

/// Writes `LEVEL: message\n` to standard error and flushes.
///
/// This is the line format hosted programs get by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLogSink;

impl LogSink for StderrLogSink {
    fn log(&self, level_name: &'static str, args: fmt::Arguments<'_>) {
        let mut err = io::stderr().lock();
        let _ = write_line(&mut err, level_name, args);
    }
}

/// Writes `LEVEL: message\n` to any [`std::io::Write`] and flushes after
/// every line.
///
/// Useful for files and pipes. I/O errors are dropped, never reported back to
/// the call site; a writer that keeps failing just produces no output.
pub struct WriteLogSink<W> {
    writer: Mutex<W>,
}

impl<W: Write> WriteLogSink<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> LogSink for WriteLogSink<W> {
    fn log(&self, level_name: &'static str, args: fmt::Arguments<'_>) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = write_line(&mut *writer, level_name, args);
    }
}

fn write_line(out: &mut impl Write, level_name: &str, args: fmt::Arguments<'_>) -> io::Result<()> {
    writeln!(out, "{level_name}: {args}")?;
    out.flush()
}
