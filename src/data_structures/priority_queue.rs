use std::fmt::Debug;

use crate::{Error, Result};

/// Handle to an item pushed into a [`PriorityQueue`]
///
/// A handle stays valid until its item is popped or the queue is cleared.
/// Slots are recycled, so every handle carries the generation of the slot it
/// was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemHandle {
    slot: usize,
    generation: u64,
}

/// A queued (vertex, priority) pair and the arena slot tracking its position
#[derive(Debug, Clone)]
struct Entry<V, P> {
    priority: P,
    vertex: V,
    slot: usize,
}

#[derive(Debug, Clone, Default)]
struct SlotState {
    generation: u64,
    /// Index of the entry in `heap`, `None` once popped
    position: Option<usize>,
}

/// A binary min-heap over (vertex, priority) pairs with in-place priority updates
///
/// The same vertex may be queued any number of times; the queue knows nothing
/// about graphs and never deduplicates. Ties between equal priorities are
/// broken arbitrarily.
#[derive(Debug, Clone)]
pub struct PriorityQueue<V, P>
where
    V: Copy + Debug,
    P: Copy + Ord + Debug,
{
    /// Heap-ordered entries: `heap[i].priority <= heap[2i+1].priority, heap[2i+2].priority`
    heap: Vec<Entry<V, P>>,

    /// Position tokens, indexed by `Entry::slot`
    slots: Vec<SlotState>,

    /// Slots whose items have left the heap
    free: Vec<usize>,
}

impl<V, P> PriorityQueue<V, P>
where
    V: Copy + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        PriorityQueue {
            heap: Vec::new(),
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, vertex: V, priority: P) -> ItemHandle {
        let position = self.heap.len();
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot].position = Some(position);
                slot
            }
            None => {
                self.slots.push(SlotState {
                    generation: 0,
                    position: Some(position),
                });
                self.slots.len() - 1
            }
        };

        self.heap.push(Entry {
            priority,
            vertex,
            slot,
        });
        self.sift_up(position);

        ItemHandle {
            slot,
            generation: self.slots[slot].generation,
        }
    }

    /// Removes and returns the element with the smallest priority
    pub fn pop(&mut self) -> Result<(V, P)> {
        let last = self.heap.len().checked_sub(1).ok_or(Error::EmptyQueue)?;
        self.swap(0, last);
        let entry = self.heap.pop().ok_or(Error::EmptyQueue)?;

        let state = &mut self.slots[entry.slot];
        state.position = None;
        state.generation += 1;
        self.free.push(entry.slot);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.vertex, entry.priority))
    }

    /// Returns the element with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.first().map(|entry| (entry.vertex, entry.priority))
    }

    /// Lowers the priority of a queued item and restores heap order
    pub fn decrease_priority(&mut self, handle: ItemHandle, priority: P) -> Result<()> {
        let position = self.position(handle).ok_or(Error::StaleHandle)?;
        if priority > self.heap[position].priority {
            return Err(Error::PriorityIncrease);
        }
        self.heap[position].priority = priority;
        self.sift_up(position);
        Ok(())
    }

    /// Returns the current priority of a queued item
    pub fn priority(&self, handle: ItemHandle) -> Option<P> {
        self.position(handle).map(|position| self.heap[position].priority)
    }

    /// Returns true if the handle still refers to a queued item
    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.position(handle).is_some()
    }

    /// Clears the priority queue, invalidating every outstanding handle
    pub fn clear(&mut self) {
        for entry in self.heap.drain(..) {
            let state = &mut self.slots[entry.slot];
            state.position = None;
            state.generation += 1;
            self.free.push(entry.slot);
        }
    }

    /// Checks the heap-order property over the whole structure
    pub fn is_heap_ordered(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[(i - 1) / 2].priority <= self.heap[i].priority)
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(i, entry)| self.slots[entry.slot].position == Some(i))
    }

    fn position(&self, handle: ItemHandle) -> Option<usize> {
        self.slots
            .get(handle.slot)
            .filter(|state| state.generation == handle.generation)
            .and_then(|state| state.position)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.slots[self.heap[i].slot].position = Some(i);
        self.slots[self.heap[j].slot].position = Some(j);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.heap[position].priority >= self.heap[parent].priority {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;

            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == position {
                break;
            }
            self.swap(position, smallest);
            position = smallest;
        }
    }
}

impl<V, P> Default for PriorityQueue<V, P>
where
    V: Copy + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
