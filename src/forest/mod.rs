//! The forest: planted trees and the composite that fans out to them.
//!
//! # Data Flow
//! ```text
//! plant / uproot / uproot_all
//!     → lock `planted` (single writer at a time)
//!     → mutate the list
//!     → publish an immutable copy through ArcSwap
//!
//! log call
//!     → load the published copy (no lock)
//!     → Tree::prepare_log on every planted tree, in planting order
//! ```
//!
//! # Design Decisions
//! - Readers never block on writers and never see a half-updated list
//! - Duplicates are allowed; uproot removes one occurrence by identity
//! - The composite itself can never be planted (it would recurse forever)

pub mod global;

use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;

use crate::priority::Priority;
use crate::tree::{CallSite, Record, TagSlot, Tree};

/// Shared, immutable view of the planted trees.
pub type Trees = Arc<Vec<Arc<dyn Tree>>>;

/// Misuse of the planting API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForestError {
    #[error("cannot plant a forest into itself")]
    PlantedIntoItself,

    #[error("cannot uproot a tree which is not planted")]
    NotPlanted,
}

/// The composite tree. Every planted tree gets every call.
struct Canopy {
    slot: TagSlot,
    planted: Mutex<Vec<Arc<dyn Tree>>>,
    published: ArcSwap<Vec<Arc<dyn Tree>>>,
}

impl Canopy {
    fn publish(&self, planted: &[Arc<dyn Tree>]) {
        self.published.store(Arc::new(planted.to_vec()));
    }
}

impl Tree for Canopy {
    fn tag_slot(&self) -> &TagSlot {
        &self.slot
    }

    fn emit(&self, record: &Record<'_>) {
        for tree in self.published.load().iter() {
            if tree.is_loggable(record.priority) {
                tree.emit(record);
            }
        }
    }

    fn set_tag(&self, tag: &str) {
        for tree in self.published.load().iter() {
            tree.set_tag(tag);
        }
    }

    fn prepare_log(
        &self,
        priority: Priority,
        error: Option<&(dyn Error + 'static)>,
        message: Option<fmt::Arguments<'_>>,
        site: &CallSite,
    ) {
        for tree in self.published.load().iter() {
            tree.prepare_log(priority, error, message, site);
        }
    }
}

/// A set of planted trees plus the composite tree that logs to all of them.
///
/// Cloning a `Forest` yields another handle to the same trees. The forest
/// is itself a [`Tree`], so it can be handed to code that wants a single
/// logger.
#[derive(Clone)]
pub struct Forest {
    canopy: Arc<Canopy>,
}

impl Forest {
    pub fn new() -> Self {
        Self {
            canopy: Arc::new(Canopy {
                slot: TagSlot::new(),
                planted: Mutex::new(Vec::new()),
                published: ArcSwap::from_pointee(Vec::new()),
            }),
        }
    }

    /// Add a tree. Fails if `tree` is this forest's own composite.
    pub fn plant(&self, tree: Arc<dyn Tree>) -> Result<(), ForestError> {
        self.plant_all([tree])
    }

    /// Add several trees at once. Nothing is planted if any of them is this
    /// forest's own composite.
    pub fn plant_all<I>(&self, trees: I) -> Result<(), ForestError>
    where
        I: IntoIterator<Item = Arc<dyn Tree>>,
    {
        let trees: Vec<Arc<dyn Tree>> = trees.into_iter().collect();
        if trees.iter().any(|tree| self.is_canopy(&**tree)) {
            return Err(ForestError::PlantedIntoItself);
        }

        let mut planted = self.canopy.planted.lock().unwrap_or_else(PoisonError::into_inner);
        planted.extend(trees);
        self.canopy.publish(&planted);

        tracing::debug!(target: "grove::forest", trees = planted.len(), "Tree planted");
        Ok(())
    }

    /// Remove the first planted occurrence of `tree`, by identity.
    pub fn uproot<T: Tree + ?Sized>(&self, tree: &Arc<T>) -> Result<(), ForestError> {
        let target = Arc::as_ptr(tree).cast::<()>();

        let mut planted = self.canopy.planted.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(index) = planted
            .iter()
            .position(|candidate| Arc::as_ptr(candidate).cast::<()>() == target)
        else {
            tracing::debug!(target: "grove::forest", "Uproot of a tree which is not planted");
            return Err(ForestError::NotPlanted);
        };
        planted.remove(index);
        self.canopy.publish(&planted);

        tracing::debug!(target: "grove::forest", trees = planted.len(), "Tree uprooted");
        Ok(())
    }

    /// Remove every planted tree.
    pub fn uproot_all(&self) {
        let mut planted = self.canopy.planted.lock().unwrap_or_else(PoisonError::into_inner);
        planted.clear();
        self.canopy.publish(&planted);

        tracing::debug!(target: "grove::forest", "All trees uprooted");
    }

    /// Snapshot of the planted trees in planting order. Later planting
    /// changes do not affect a snapshot already taken.
    pub fn forest(&self) -> Trees {
        self.canopy.published.load_full()
    }

    pub fn tree_count(&self) -> usize {
        self.canopy.published.load().len()
    }

    /// The composite as a plain tree, for injection into code that takes a
    /// single `Arc<dyn Tree>`.
    pub fn as_tree(&self) -> Arc<dyn Tree> {
        self.canopy.clone()
    }

    /// Set a one-shot tag on every planted tree for the next call on this
    /// thread, and return the forest for chaining.
    pub fn tag(&self, tag: &str) -> &Self {
        self.canopy.set_tag(tag);
        self
    }

    fn is_canopy(&self, tree: &dyn Tree) -> bool {
        tree.tag_slot().id() == self.canopy.slot.id()
    }
}

impl Default for Forest {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forest")
            .field("trees", &self.tree_count())
            .finish()
    }
}

impl Tree for Forest {
    fn tag_slot(&self) -> &TagSlot {
        &self.canopy.slot
    }

    fn emit(&self, record: &Record<'_>) {
        self.canopy.emit(record);
    }

    fn set_tag(&self, tag: &str) {
        self.canopy.set_tag(tag);
    }

    fn prepare_log(
        &self,
        priority: Priority,
        error: Option<&(dyn Error + 'static)>,
        message: Option<fmt::Arguments<'_>>,
        site: &CallSite,
    ) {
        self.canopy.prepare_log(priority, error, message, site);
    }
}
