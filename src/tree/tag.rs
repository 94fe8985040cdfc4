//! One-shot tag storage.
//!
//! Every tree owns a [`TagSlot`]. A slot holds at most one tag per thread;
//! reading it clears it, so a tag set for one call never leaks into a later
//! unrelated call on the same thread.
//!
//! Each pending entry carries a weak handle to its slot. A slot dropped on
//! another thread leaves a dead entry behind, which the next `set` on the
//! owning thread prunes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

static NEXT_SLOT_ID: AtomicU64 = AtomicU64::new(0);

struct Pending {
    alive: Weak<()>,
    tag: String,
}

thread_local! {
    static EXPLICIT_TAGS: RefCell<HashMap<u64, Pending>> = RefCell::new(HashMap::new());
}

/// Per-tree, per-thread one-shot tag.
///
/// Slot ids are never reused, so a dropped tree's pending tag can never be
/// picked up by a tree created later.
#[derive(Debug)]
pub struct TagSlot {
    id: u64,
    alive: Arc<()>,
}

impl TagSlot {
    pub fn new() -> Self {
        Self {
            id: NEXT_SLOT_ID.fetch_add(1, Ordering::Relaxed),
            alive: Arc::new(()),
        }
    }

    /// Process-unique id of this slot. Doubles as the owning tree's identity.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Store `tag` for the next call on the current thread, replacing any
    /// pending tag.
    pub fn set(&self, tag: &str) {
        EXPLICIT_TAGS.with(|tags| {
            let mut tags = tags.borrow_mut();
            tags.retain(|_, pending| pending.alive.strong_count() > 0);
            tags.insert(
                self.id,
                Pending {
                    alive: Arc::downgrade(&self.alive),
                    tag: tag.to_string(),
                },
            );
        });
    }

    /// Take the pending tag for the current thread, leaving the slot empty.
    pub fn take(&self) -> Option<String> {
        EXPLICIT_TAGS
            .try_with(|tags| tags.borrow_mut().remove(&self.id))
            .ok()
            .flatten()
            .map(|pending| pending.tag)
    }

    /// Whether a tag is pending on the current thread.
    pub fn is_set(&self) -> bool {
        EXPLICIT_TAGS
            .try_with(|tags| tags.borrow().contains_key(&self.id))
            .unwrap_or(false)
    }
}

impl Default for TagSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TagSlot {
    fn drop(&mut self) {
        // Entries on other threads go dead here and are pruned by their
        // thread's next `set`.
        let _ = self.take();
    }
}
