//! Adaptable min-priority queue
//!
//! Binary min-heap over `(key, value)` entries. `insert` hands back an
//! [`EntryHandle`] that stays valid across every other queue operation until
//! its own entry is removed, and can be used to change the entry's key in
//! O(log n).
//!
//! Handles are generation-checked: once an entry leaves the queue its handle
//! is rejected even if the slot is recycled for a later insert.
//!
//! Keys only need `PartialOrd`. Incomparable keys (e.g. NaN) are treated as
//! equal and never move past each other.

/// Stable reference to a queued entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHandle {
    slot: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    /// Position in `heap`
    pos: usize,
}

#[derive(Debug, Clone)]
struct Slot<K, V> {
    generation: u32,
    entry: Option<Entry<K, V>>,
}

/// Min-heap with key replacement through stable handles
#[derive(Debug, Clone)]
pub struct AdaptablePriorityQueue<K, V> {
    slots: Vec<Slot<K, V>>,
    /// Heap-ordered slot indices
    heap: Vec<usize>,
    free: Vec<usize>,
}

impl<K: PartialOrd, V> AdaptablePriorityQueue<K, V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            heap: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            heap: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert an entry, O(log n)
    pub fn insert(&mut self, key: K, value: V) -> EntryHandle {
        let pos = self.heap.len();
        let entry = Entry { key, value, pos };

        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot].entry = Some(entry);
                slot
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                self.slots.len() - 1
            }
        };

        self.heap.push(slot);
        self.sift_up(pos);

        EntryHandle {
            slot,
            generation: self.slots[slot].generation,
        }
    }

    /// Minimum entry without removing it
    pub fn min(&self) -> Option<(&K, &V)> {
        let slot = *self.heap.first()?;
        self.slots[slot]
            .entry
            .as_ref()
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Remove and return the minimum entry, O(log n); `None` when empty
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }
        self.remove_at(0)
    }

    /// Change the key of a live entry and restore heap order, O(log n)
    ///
    /// Works for both decreases and increases. Returns the previous key, or
    /// `None` if the handle no longer refers to a queued entry.
    pub fn replace_key(&mut self, handle: EntryHandle, key: K) -> Option<K> {
        let pos = self.position(handle)?;
        let entry = self.slots[handle.slot].entry.as_mut()?;
        let old = std::mem::replace(&mut entry.key, key);

        self.sift_up(pos);
        // sift_up may have moved the entry; re-read before sifting down
        if let Some(pos) = self.position(handle) {
            self.sift_down(pos);
        }
        Some(old)
    }

    /// Remove an arbitrary live entry, O(log n)
    pub fn remove(&mut self, handle: EntryHandle) -> Option<(K, V)> {
        let pos = self.position(handle)?;
        self.remove_at(pos)
    }

    pub fn key(&self, handle: EntryHandle) -> Option<&K> {
        self.live_entry(handle).map(|entry| &entry.key)
    }

    pub fn value(&self, handle: EntryHandle) -> Option<&V> {
        self.live_entry(handle).map(|entry| &entry.value)
    }

    pub fn contains(&self, handle: EntryHandle) -> bool {
        self.live_entry(handle).is_some()
    }

    fn live_entry(&self, handle: EntryHandle) -> Option<&Entry<K, V>> {
        let slot = self.slots.get(handle.slot)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.entry.as_ref()
    }

    fn position(&self, handle: EntryHandle) -> Option<usize> {
        self.live_entry(handle).map(|entry| entry.pos)
    }

    fn remove_at(&mut self, pos: usize) -> Option<(K, V)> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(pos, last);
        let slot = self.heap.pop()?;

        let entry = self.slots[slot].entry.take()?;
        self.slots[slot].generation = self.slots[slot].generation.wrapping_add(1);
        self.free.push(slot);

        if pos < self.heap.len() {
            self.sift_up(pos);
            self.sift_down(pos);
        }

        Some((entry.key, entry.value))
    }

    fn key_at(&self, pos: usize) -> Option<&K> {
        let slot = *self.heap.get(pos)?;
        self.slots[slot].entry.as_ref().map(|entry| &entry.key)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        match (self.key_at(a), self.key_at(b)) {
            (Some(ka), Some(kb)) => ka < kb,
            _ => false,
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        for pos in [a, b] {
            let slot = self.heap[pos];
            if let Some(entry) = self.slots[slot].entry.as_mut() {
                entry.pos = pos;
            }
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, pos) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }
}

impl<K: PartialOrd, V> Default for AdaptablePriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
