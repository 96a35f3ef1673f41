/*!
A min-heap on some subset of elements with fixed indicies.

In other words, a heap backed by a vector of values with a companion vector which tracks the
current location of each (external) index in the heap. The companion vector makes two operations
cheap which a plain binary heap lacks:

- [submit](IndexHeap::submit) revalues an element wherever it sits and restores the heap property
  around it, in O(log n).
- [remove](IndexHeap::remove) detaches an element from the heap without disturbing the others.

The heap is used to order atoms for bounded variable elimination: the weight of an atom is a
function of the occurrence counts of its two literals, counts change as clauses are removed or
added, and elimination always wants the atom of least weight next.

```rust
# use winnow_sat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.submit(6, 1.0);
heap.submit(0, 7.0);
heap.submit(0, 0.5);

assert_eq!(heap.pop_min(), Some(0));
assert_eq!(heap.pop_min(), Some(6));
assert_eq!(heap.pop_min(), None);
```
*/

use std::cmp::Ordering;

/// The index heap struct.
///
/// The backing vectors grow to fit the largest index submitted, so sparse indicies are
/// transparent (at the cost of space).
pub struct IndexHeap<V: PartialOrd + Default> {
    /// The value of each index, whether or not the index is on the heap.
    values: Vec<V>,

    /// Where each index sits on the heap, if anywhere.
    position: Vec<Option<usize>>,

    /// The heap itself, as indicies into `values`.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Grows the backing vectors so `count` indicies are addressable.
    pub fn grow_to(&mut self, count: usize) {
        if self.values.len() < count {
            self.values.resize_with(count, V::default);
            self.position.resize(count, None);
        }
    }

    /// Sets the value of `index` and places (or repositions) it on the heap.
    pub fn submit(&mut self, index: usize, value: V) {
        self.grow_to(index + 1);
        self.values[index] = value;

        match self.position[index] {
            Some(slot) => {
                self.sift_up(slot);
                // Sifting up may have moved the element, so re-read its slot.
                if let Some(slot) = self.position[index] {
                    self.sift_down(slot);
                }
            }
            None => {
                let slot = self.heap.len();
                self.heap.push(index);
                self.position[index] = Some(slot);
                self.sift_up(slot);
            }
        }
    }

    /// Removes `index` from the heap, if present.
    /// Returns true if `index` was removed, false otherwise.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(slot) = self.position.get(index).copied().flatten() else {
            return false;
        };

        let last = self.heap.len() - 1;
        self.heap.swap(slot, last);
        self.position[self.heap[slot]] = Some(slot);
        self.heap.pop();
        self.position[index] = None;

        if slot < self.heap.len() {
            self.sift_down(slot);
            self.sift_up(slot);
        }
        true
    }

    /// Pops the index of least value off the heap.
    pub fn pop_min(&mut self) -> Option<usize> {
        let min = *self.heap.first()?;
        self.remove(min);
        Some(min)
    }

    /// The index of least value, left on the heap.
    pub fn peek_min(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// True if `index` is on the heap, false otherwise.
    pub fn active(&self, index: usize) -> bool {
        self.position.get(index).copied().flatten().is_some()
    }

    /// The value stored for `index` (the default value, if never submitted).
    pub fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// A count of indicies on the heap.
    pub fn active_count(&self) -> usize {
        self.heap.len()
    }

    /// True if no index is on the heap, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// True when the value at heap slot `a` is strictly less than the value at heap slot `b`.
    fn slot_less(&self, a: usize, b: usize) -> bool {
        matches!(
            self.values[self.heap[a]].partial_cmp(&self.values[self.heap[b]]),
            Some(Ordering::Less)
        )
    }

    /// Swaps the contents of two heap slots, keeping the position vector in step.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    /// Shuffles the slot up through the heap while smaller than its parent.
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.slot_less(slot, parent) {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Shuffles the slot down through the heap while larger than a child.
    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = (2 * slot) + 1;
            if left >= self.heap.len() {
                break;
            }

            let mut update = slot;
            if self.slot_less(left, update) {
                update = left;
            }

            let right = left + 1;
            if right < self.heap.len() && self.slot_less(right, update) {
                update = right;
            }

            if update == slot {
                break;
            }
            self.swap_slots(slot, update);
            slot = update;
        }
    }
}
