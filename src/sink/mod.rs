//! Line sinks used by [`DebugTree`](crate::DebugTree).
//!
//! A sink is the platform log buffer as seen from grove: it writes one line
//! at a priority with a tag, and has a separate path for assert-level lines.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::priority::Priority;

/// Destination for already-chunked log lines.
pub trait LogSink: Send + Sync {
    /// Write one line at `priority`.
    fn println(&self, priority: Priority, tag: Option<&str>, message: &str);

    /// Write one assert-level line.
    fn wtf(&self, tag: Option<&str>, message: &str) {
        self.println(Priority::ASSERT, tag, message);
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    #[inline]
    fn println(&self, _priority: Priority, _tag: Option<&str>, _message: &str) {}
}

/// Writes `<letter>/<tag>: <message>` lines, logcat style.
///
/// Defaults to stderr. Write errors are dropped: logging never fails the
/// caller.
pub struct ConsoleSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn write_line(&self, letter: char, tag: Option<&str>, message: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(out, "{}/{}: {}", letter, tag.unwrap_or(""), message);
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

impl LogSink for ConsoleSink {
    fn println(&self, priority: Priority, tag: Option<&str>, message: &str) {
        self.write_line(priority.letter(), tag, message);
    }

    fn wtf(&self, tag: Option<&str>, message: &str) {
        self.write_line(Priority::ASSERT.letter(), tag, message);
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = out.flush();
    }
}
