//! Bidirectional index from canonical edge identity to the heap slot
//! currently representing it (§4.C). The sole source of truth for "is this
//! edge in the queue, and where".

use std::collections::HashMap;
use std::hash::Hash;

use super::priority::SlotId;

pub struct QueueMapper<K> {
    slots: HashMap<K, SlotId>,
}

impl<K: Eq + Hash + Clone> Default for QueueMapper<K> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> QueueMapper<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<SlotId> {
        self.slots.get(key).copied()
    }

    pub fn insert(&mut self, key: K, slot: SlotId) {
        self.slots.insert(key, slot);
    }

    pub fn remove(&mut self, key: &K) -> Option<SlotId> {
        self.slots.remove(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &SlotId)> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimation::priority::PriorityQueue;

    #[test]
    fn survives_unrelated_mutation_while_iterating_snapshot() {
        let mut queue: PriorityQueue<u32, f64> = PriorityQueue::new();
        let mut m: QueueMapper<u32> = QueueMapper::new();
        m.insert(1, queue.push(1, 1.0));
        m.insert(2, queue.push(2, 2.0));
        let snapshot: Vec<_> = m.iter().map(|(k, s)| (*k, *s)).collect();
        m.remove(&1);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(m.len(), 1);
    }
}
