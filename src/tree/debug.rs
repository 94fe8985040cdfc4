//! Reference tree for development builds.
//!
//! # Responsibilities
//! - Infer a tag from the call site when no one-shot tag is set
//! - Split long messages so each line fits the sink's line limit
//! - Route assert-level records through the sink's assert path

use std::path::Path;
use std::sync::Arc;

use crate::priority::Priority;
use crate::sink::{ConsoleSink, LogSink};
use crate::tree::{CallSite, Record, TagSlot, Tree, TreeError};

/// Longest line written to the sink in one call, in characters.
pub const MAX_LOG_LENGTH: usize = 4000;

const ANONYMOUS_SEGMENT: &str = "::{{closure}}";

/// Custom tag inference, replacing [`site_tag`].
pub type TagFn = fn(&CallSite) -> String;

/// A tree that infers its tag from the calling module and writes chunked
/// lines to a [`LogSink`].
pub struct DebugTree {
    slot: TagSlot,
    sink: Arc<dyn LogSink>,
    min_priority: Priority,
    max_line_length: usize,
    tag_fn: Option<TagFn>,
}

impl DebugTree {
    /// Debug tree writing to stderr.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(ConsoleSink::stderr()))
    }

    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self {
            slot: TagSlot::new(),
            sink,
            min_priority: Priority::VERBOSE,
            max_line_length: MAX_LOG_LENGTH,
            tag_fn: None,
        }
    }

    /// Drop records below `priority`.
    pub fn min_priority(mut self, priority: Priority) -> Self {
        self.min_priority = priority;
        self
    }

    /// Override the chunk size. Values below 1 are treated as 1.
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.max_line_length = length.max(1);
        self
    }

    /// Replace the default call-site tag inference.
    pub fn tag_fn(mut self, f: TagFn) -> Self {
        self.tag_fn = Some(f);
        self
    }

    fn write(&self, priority: Priority, tag: Option<&str>, part: &str) {
        if priority == Priority::ASSERT {
            self.sink.wtf(tag, part);
        } else {
            self.sink.println(priority, tag, part);
        }
    }
}

impl Default for DebugTree {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DebugTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugTree")
            .field("min_priority", &self.min_priority)
            .field("max_line_length", &self.max_line_length)
            .finish_non_exhaustive()
    }
}

impl Tree for DebugTree {
    fn tag_slot(&self) -> &TagSlot {
        &self.slot
    }

    fn is_loggable(&self, priority: Priority) -> bool {
        priority >= self.min_priority
    }

    fn infer_tag(&self, site: &CallSite) -> Result<Option<String>, TreeError> {
        match self.tag_fn {
            Some(f) => Ok(Some(f(site))),
            None => site_tag(site).map(Some),
        }
    }

    fn emit(&self, record: &Record<'_>) {
        for part in split_message(record.message, self.max_line_length) {
            self.write(record.priority, record.tag, part);
        }
    }
}

/// Default tag for a call site.
///
/// Uses the last segment of the module path. Without a module path the file
/// stem is used, or the directory name for `mod.rs`, `lib.rs` and `main.rs`.
///
/// `module_path!()` never names closures, but a `CallSite` built by hand from
/// `std::any::type_name` can end in `::{{closure}}` segments. Those are
/// removed first, so `app::net::{{closure}}` becomes `net`.
pub fn site_tag(site: &CallSite) -> Result<String, TreeError> {
    let mut path = site.module_path;
    while let Some(stripped) = path.strip_suffix(ANONYMOUS_SEGMENT) {
        path = stripped;
    }
    if let Some(segment) = path.rsplit("::").next().filter(|s| !s.is_empty()) {
        return Ok(segment.to_string());
    }

    let file = Path::new(site.file);
    let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let tag = match stem {
        "mod" | "lib" | "main" => file
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .unwrap_or(stem),
        _ => stem,
    };
    if tag.is_empty() {
        return Err(TreeError::MissingCallSite { line: site.line });
    }
    Ok(tag.to_string())
}

/// Split `message` into sink-sized parts.
///
/// Messages shorter than `max` characters go out whole. Longer ones are split
/// on newlines, then each line into `max`-character chunks. Empty lines yield
/// empty parts; a final trailing newline does not.
pub fn split_message(message: &str, max: usize) -> Vec<&str> {
    let max = max.max(1);
    if message.chars().count() < max {
        return vec![message];
    }

    let body = message.strip_suffix('\n').unwrap_or(message);
    let mut parts = Vec::new();
    for line in body.split('\n') {
        if line.is_empty() {
            parts.push(line);
            continue;
        }
        let mut rest = line;
        while !rest.is_empty() {
            let end = rest
                .char_indices()
                .nth(max)
                .map_or(rest.len(), |(index, _)| index);
            parts.push(&rest[..end]);
            rest = &rest[end..];
        }
    }
    parts
}
