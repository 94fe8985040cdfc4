//! Bridge from grove records to `tracing` events.

use tracing::Level;

use crate::priority::Priority;
use crate::tree::{Record, TagSlot, Tree};

/// Forwards every record as a `tracing` event with target `grove`.
#[derive(Debug)]
pub struct TracingTree {
    slot: TagSlot,
    min_priority: Priority,
}

impl TracingTree {
    pub fn new() -> Self {
        Self {
            slot: TagSlot::new(),
            min_priority: Priority::VERBOSE,
        }
    }

    /// Drop records below `priority` before they reach `tracing`.
    pub fn min_priority(mut self, priority: Priority) -> Self {
        self.min_priority = priority;
        self
    }
}

impl Default for TracingTree {
    fn default() -> Self {
        Self::new()
    }
}

/// `tracing` level for a priority. Raw values off the scale clamp to the
/// nearest end.
pub fn tracing_level(priority: Priority) -> Level {
    match priority.value() {
        i32::MIN..=2 => Level::TRACE,
        3 => Level::DEBUG,
        4 => Level::INFO,
        5 => Level::WARN,
        _ => Level::ERROR,
    }
}

macro_rules! forward {
    ($level:expr, $record:expr) => {
        tracing::event!(
            target: "grove",
            $level,
            tag = $record.tag.unwrap_or(""),
            priority = %$record.priority,
            module = $record.site.module_path,
            line = $record.site.line,
            "{}",
            $record.message
        )
    };
}

impl Tree for TracingTree {
    fn tag_slot(&self) -> &TagSlot {
        &self.slot
    }

    fn is_loggable(&self, priority: Priority) -> bool {
        priority >= self.min_priority
    }

    fn emit(&self, record: &Record<'_>) {
        let level = tracing_level(record.priority);
        if level == Level::TRACE {
            forward!(Level::TRACE, record);
        } else if level == Level::DEBUG {
            forward!(Level::DEBUG, record);
        } else if level == Level::INFO {
            forward!(Level::INFO, record);
        } else if level == Level::WARN {
            forward!(Level::WARN, record);
        } else {
            forward!(Level::ERROR, record);
        }
    }
}
