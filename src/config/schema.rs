//! Configuration schema definitions.
//!
//! This module defines which trees a process plants and how they filter.
//! All types derive Serde traits for deserialization from config files.

use std::sync::Arc;

use serde::Deserialize;

use crate::forest::{Forest, ForestError};
use crate::priority::Priority;
use crate::tree::debug::MAX_LOG_LENGTH;
use crate::tree::{DebugTree, TracingTree, Tree};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GroveConfig {
    /// Console tree with call-site tags.
    pub debug_tree: DebugTreeConfig,

    /// Bridge into the `tracing` ecosystem.
    pub tracing_tree: TracingTreeConfig,
}

/// Settings for the [`DebugTree`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugTreeConfig {
    pub enabled: bool,

    /// Records below this priority are dropped.
    pub min_priority: Priority,

    /// Longest line handed to the sink, in characters.
    pub max_line_length: usize,
}

impl Default for DebugTreeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_priority: Priority::VERBOSE,
            max_line_length: MAX_LOG_LENGTH,
        }
    }
}

/// Settings for the [`TracingTree`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TracingTreeConfig {
    pub enabled: bool,

    /// Records below this priority are dropped.
    pub min_priority: Priority,
}

impl Default for TracingTreeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_priority: Priority::INFO,
        }
    }
}

impl GroveConfig {
    /// Build the enabled trees, in a fixed order: debug tree first.
    pub fn trees(&self) -> Vec<Arc<dyn Tree>> {
        let mut trees: Vec<Arc<dyn Tree>> = Vec::new();
        if self.debug_tree.enabled {
            trees.push(Arc::new(
                DebugTree::new()
                    .min_priority(self.debug_tree.min_priority)
                    .max_line_length(self.debug_tree.max_line_length),
            ));
        }
        if self.tracing_tree.enabled {
            trees.push(Arc::new(
                TracingTree::new().min_priority(self.tracing_tree.min_priority),
            ));
        }
        trees
    }

    /// Plant the enabled trees into `forest`.
    pub fn plant_into(&self, forest: &Forest) -> Result<(), ForestError> {
        let trees = self.trees();
        tracing::debug!(
            target: "grove::config",
            debug_tree = self.debug_tree.enabled,
            tracing_tree = self.tracing_tree.enabled,
            trees = trees.len(),
            "Planting configured trees"
        );
        forest.plant_all(trees)
    }
}
