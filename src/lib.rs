//! grove: a logging facade with pluggable trees.
//!
//! Call sites log through the macros (`v!`, `d!`, `i!`, `w!`, `e!`, `wtf!`,
//! `log!`). Each call fans out to every tree planted in a [`Forest`]; the
//! process-wide forest is used unless a tree is named with `in`.
//!
//! ```
//! use std::sync::Arc;
//!
//! grove::plant(Arc::new(grove::DebugTree::new())).unwrap();
//! grove::i!("listening on {}", 8080);
//! grove::w!(in grove::tag("Net"), "slow handshake");
//! grove::uproot_all();
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod forest;
pub mod priority;
pub mod sink;
pub mod tree;

pub use config::GroveConfig;
pub use forest::global::{as_tree, forest, global, plant, plant_all, tag, tree_count, uproot, uproot_all};
pub use forest::{Forest, ForestError, Trees};
pub use priority::Priority;
pub use sink::{ConsoleSink, LogSink, NoopSink};
pub use tree::{CallSite, DebugTree, Record, TagSlot, TracingTree, Tree, TreeError, TreeExt};
