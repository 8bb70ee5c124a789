//! Addressable min-priority queue keyed by `f64` scores.
//!
//! Both ear clipping and convex merging need "lowest score first" plus
//! erase/update of an arbitrary known entry. A plain heap cannot do the
//! latter, so this pairs an ordered map `(score, seq) → key` with a reverse
//! map `key → (score, seq)`, updated together on every operation.
//!
//! Ties: entries with equal scores are extracted in insertion order; an
//! `update` counts as a fresh insertion.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use ordered_float::OrderedFloat;

type Slot = (OrderedFloat<f64>, u64);

#[derive(Clone, Debug)]
pub struct PriorityQueue<K> {
    queue: BTreeMap<Slot, K>,
    reverse: HashMap<K, Slot>,
    seq: u64,
}

impl<K> Default for PriorityQueue<K> {
    fn default() -> Self {
        Self {
            queue: BTreeMap::new(),
            reverse: HashMap::new(),
            seq: 0,
        }
    }
}

impl<K: Copy + Eq + Hash> PriorityQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.reverse.contains_key(&key)
    }

    /// Insert `key`; an existing entry for `key` is replaced.
    pub fn insert(&mut self, key: K, priority: f64) {
        self.erase(key);
        let slot = (OrderedFloat(priority), self.seq);
        self.seq += 1;
        self.queue.insert(slot, key);
        self.reverse.insert(key, slot);
    }

    /// Re-score an existing entry. Returns `false` (and does nothing) if absent.
    pub fn update(&mut self, key: K, priority: f64) -> bool {
        if !self.contains(key) {
            return false;
        }
        self.insert(key, priority);
        true
    }

    /// Remove `key`, returning its priority if it was queued.
    pub fn erase(&mut self, key: K) -> Option<f64> {
        let slot = self.reverse.remove(&key)?;
        self.queue.remove(&slot);
        Some(slot.0.into_inner())
    }

    /// Lowest-priority entry without removing it.
    pub fn peek(&self) -> Option<(K, f64)> {
        self.queue
            .first_key_value()
            .map(|(slot, key)| (*key, slot.0.into_inner()))
    }

    /// Remove and return the lowest-priority entry.
    pub fn extract(&mut self) -> Option<(K, f64)> {
        let (slot, key) = self.queue.pop_first()?;
        self.reverse.remove(&key);
        Some((key, slot.0.into_inner()))
    }
}
