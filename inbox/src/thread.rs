//! Id-ordered message lists.
//!
//! Both conversation threads and collaboration sessions hold messages sorted
//! by their server id, which is monotonically assigned. Merging a fetched
//! batch never duplicates an id already held.

#[cfg(test)]
#[path = "thread_test.rs"]
mod thread_test;

use wire::{CollaborationMessage, ConversationMessage, Id};

/// Anything with a server-assigned, monotonically increasing id.
pub trait Keyed {
    fn key(&self) -> Id;
}

impl Keyed for ConversationMessage {
    fn key(&self) -> Id {
        self.id
    }
}

impl Keyed for CollaborationMessage {
    fn key(&self) -> Id {
        self.id
    }
}

/// Highest held id, or `0` for an empty list.
#[must_use]
pub fn last_id<T: Keyed>(items: &[T]) -> Id {
    items.iter().map(Keyed::key).max().unwrap_or(0)
}

/// Merge `incoming` into `held`, skipping ids already present, keeping the
/// list sorted by id. Returns how many items were added.
pub fn merge_by_id<T: Keyed>(held: &mut Vec<T>, incoming: Vec<T>) -> usize {
    let before = held.len();
    let mut sorted = held.windows(2).all(|pair| pair[0].key() < pair[1].key());
    let mut tail = last_id(held);
    for item in incoming {
        let key = item.key();
        if held.iter().any(|existing| existing.key() == key) {
            continue;
        }
        if key < tail {
            sorted = false;
        }
        tail = tail.max(key);
        held.push(item);
    }
    if !sorted {
        held.sort_by_key(Keyed::key);
    }
    held.len() - before
}
