use core::fmt;

use crate::log_sink::LogSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log(&self, _level_name: &'static str, _args: fmt::Arguments<'_>) {}
}
