//! The process-wide forest behind the free functions and macros.

use std::sync::{Arc, OnceLock};

use crate::forest::{Forest, ForestError, Trees};
use crate::tree::Tree;

static GLOBAL: OnceLock<Forest> = OnceLock::new();

/// The process-wide forest, created empty on first use.
pub fn global() -> &'static Forest {
    GLOBAL.get_or_init(Forest::new)
}

/// Plant a tree into the process-wide forest.
pub fn plant(tree: Arc<dyn Tree>) -> Result<(), ForestError> {
    global().plant(tree)
}

/// Plant several trees into the process-wide forest.
pub fn plant_all<I>(trees: I) -> Result<(), ForestError>
where
    I: IntoIterator<Item = Arc<dyn Tree>>,
{
    global().plant_all(trees)
}

/// Remove a planted tree from the process-wide forest.
pub fn uproot<T: Tree + ?Sized>(tree: &Arc<T>) -> Result<(), ForestError> {
    global().uproot(tree)
}

/// Remove every tree from the process-wide forest.
pub fn uproot_all() {
    global().uproot_all();
}

/// Snapshot of the trees planted in the process-wide forest.
pub fn forest() -> Trees {
    global().forest()
}

pub fn tree_count() -> usize {
    global().tree_count()
}

/// The process-wide forest as a single injectable tree.
pub fn as_tree() -> Arc<dyn Tree> {
    global().as_tree()
}

/// One-shot tag for the next call on this thread.
///
/// ```
/// grove::d!(in grove::tag("Net"), "connected to {}", "example.org");
/// ```
pub fn tag(tag: &str) -> &'static Forest {
    global().tag(tag)
}
