//! Trees: the backends a forest fans log calls out to.
//!
//! # Data Flow
//! ```text
//! macro / TreeExt method
//!     → Tree::prepare_log (pipeline.rs: filter, compose, tag)
//!     → Tree::emit(Record)
//!         - debug.rs  (chunked lines into a LogSink)
//!         - bridge.rs (tracing events)
//! ```
//!
//! # Design Decisions
//! - Small closed trait: implementors supply `tag_slot` and `emit`, and
//!   optionally `is_loggable` and `infer_tag`
//! - The resolved tag travels inside the `Record`, never through shared state
//! - Call sites are captured explicitly instead of walking the stack

pub mod bridge;
pub mod debug;
pub mod pipeline;
pub mod tag;

use std::error::Error;
use std::fmt;
use std::panic::Location;

use crate::priority::Priority;

pub use bridge::TracingTree;
pub use debug::DebugTree;
pub use tag::TagSlot;

/// Where a logging call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// `module_path!()` of the caller. Empty when captured via `#[track_caller]`.
    pub module_path: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(module_path: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            module_path,
            file,
            line,
        }
    }

    /// Capture the location of the (tracked) caller. The module path is
    /// unknown at this point and left empty.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            module_path: "",
            file: location.file(),
            line: location.line(),
        }
    }
}

/// A fully prepared log record, handed to [`Tree::emit`].
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub priority: Priority,
    /// Explicit one-shot tag or the tree's inferred tag.
    pub tag: Option<&'a str>,
    /// Formatted message, with the rendered error appended if there is one.
    pub message: &'a str,
    pub error: Option<&'a (dyn Error + 'static)>,
    pub site: &'a CallSite,
}

/// Errors raised while preparing a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Tag inference found neither a module path nor a file at the call site.
    #[error(
        "call site at line {line} has no module path or file to infer a tag from: \
         is the logging call routed through a wrapper that discards caller information?"
    )]
    MissingCallSite { line: u32 },
}

/// A backend that receives log records.
///
/// Plant implementations into a [`Forest`](crate::Forest). Only
/// [`tag_slot`](Tree::tag_slot) and [`emit`](Tree::emit) are required.
pub trait Tree: Send + Sync {
    /// This tree's one-shot tag storage.
    fn tag_slot(&self) -> &TagSlot;

    /// Whether a record at `priority` should be logged at all.
    fn is_loggable(&self, priority: Priority) -> bool {
        let _ = priority;
        true
    }

    /// Tag to use when no one-shot tag is pending.
    fn infer_tag(&self, site: &CallSite) -> Result<Option<String>, TreeError> {
        let _ = site;
        Ok(None)
    }

    /// Write a prepared record to its destination.
    fn emit(&self, record: &Record<'_>);

    /// Set the one-shot tag for the next call on this thread.
    fn set_tag(&self, tag: &str) {
        self.tag_slot().set(tag);
    }

    /// Filter, resolve the tag, compose the message and emit it.
    fn prepare_log(
        &self,
        priority: Priority,
        error: Option<&(dyn Error + 'static)>,
        message: Option<fmt::Arguments<'_>>,
        site: &CallSite,
    ) {
        pipeline::prepare_log(self, priority, error, message, site);
    }
}

/// Method form of the logging macros, for code that holds a tree.
///
/// Call sites are captured with `#[track_caller]`, so inferred tags come
/// from the caller's file rather than its module path.
pub trait TreeExt: Tree {
    #[track_caller]
    fn log(&self, priority: Priority, args: fmt::Arguments<'_>) {
        self.prepare_log(priority, None, Some(args), &CallSite::caller());
    }

    #[track_caller]
    fn log_with(&self, priority: Priority, error: &(dyn Error + 'static), args: fmt::Arguments<'_>) {
        self.prepare_log(priority, Some(error), Some(args), &CallSite::caller());
    }

    #[track_caller]
    fn log_error(&self, priority: Priority, error: &(dyn Error + 'static)) {
        self.prepare_log(priority, Some(error), None, &CallSite::caller());
    }

    #[track_caller]
    fn v(&self, args: fmt::Arguments<'_>) {
        self.prepare_log(Priority::VERBOSE, None, Some(args), &CallSite::caller());
    }

    #[track_caller]
    fn d(&self, args: fmt::Arguments<'_>) {
        self.prepare_log(Priority::DEBUG, None, Some(args), &CallSite::caller());
    }

    #[track_caller]
    fn i(&self, args: fmt::Arguments<'_>) {
        self.prepare_log(Priority::INFO, None, Some(args), &CallSite::caller());
    }

    #[track_caller]
    fn w(&self, args: fmt::Arguments<'_>) {
        self.prepare_log(Priority::WARN, None, Some(args), &CallSite::caller());
    }

    #[track_caller]
    fn e(&self, args: fmt::Arguments<'_>) {
        self.prepare_log(Priority::ERROR, None, Some(args), &CallSite::caller());
    }

    #[track_caller]
    fn wtf(&self, args: fmt::Arguments<'_>) {
        self.prepare_log(Priority::ASSERT, None, Some(args), &CallSite::caller());
    }
}

impl<T: Tree + ?Sized> TreeExt for T {}
