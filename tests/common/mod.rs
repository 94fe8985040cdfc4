//! Shared trees and sinks for integration tests.

use std::sync::Mutex;

use grove::{LogSink, Priority, Record, TagSlot, Tree};

/// What a tree was asked to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub priority: Priority,
    pub tag: Option<String>,
    pub message: String,
    pub error: Option<String>,
}

/// Tree that records every emitted record.
#[derive(Default)]
pub struct RecordingTree {
    slot: TagSlot,
    min_priority: Option<Priority>,
    seen: Mutex<Vec<Emitted>>,
}

#[allow(dead_code)]
impl RecordingTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_least(priority: Priority) -> Self {
        Self {
            min_priority: Some(priority),
            ..Self::default()
        }
    }

    pub fn seen(&self) -> Vec<Emitted> {
        self.seen.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.seen().into_iter().map(|e| e.message).collect()
    }

    pub fn tags(&self) -> Vec<Option<String>> {
        self.seen().into_iter().map(|e| e.tag).collect()
    }
}

impl Tree for RecordingTree {
    fn tag_slot(&self) -> &TagSlot {
        &self.slot
    }

    fn is_loggable(&self, priority: Priority) -> bool {
        self.min_priority.map_or(true, |min| priority >= min)
    }

    fn emit(&self, record: &Record<'_>) {
        self.seen.lock().unwrap().push(Emitted {
            priority: record.priority,
            tag: record.tag.map(str::to_string),
            message: record.message.to_string(),
            error: record.error.map(|e| e.to_string()),
        });
    }
}

/// A line written to a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub assert_path: bool,
    pub priority: Priority,
    pub tag: Option<String>,
    pub message: String,
}

/// Sink that keeps every line in memory.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<Line>>,
}

#[allow(dead_code)]
impl MemorySink {
    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for MemorySink {
    fn println(&self, priority: Priority, tag: Option<&str>, message: &str) {
        self.lines.lock().unwrap().push(Line {
            assert_path: false,
            priority,
            tag: tag.map(str::to_string),
            message: message.to_string(),
        });
    }

    fn wtf(&self, tag: Option<&str>, message: &str) {
        self.lines.lock().unwrap().push(Line {
            assert_path: true,
            priority: Priority::ASSERT,
            tag: tag.map(str::to_string),
            message: message.to_string(),
        });
    }
}

/// Error with a source, for rendering checks.
#[derive(Debug, thiserror::Error)]
#[error("request failed")]
pub struct RequestFailed(#[source] pub std::io::Error);
