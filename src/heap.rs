use std::cmp::Ordering;

use crate::config::HeapConfig;
use crate::order::{ComparerOrder, KeyOrder, KeyedOrder, NaturalOrder};
use crate::sequence::{IntoSorted, Sort};
use crate::work_stack::WorkStack;

/// Which end of the order sits on top of the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapKind {
    /// Smallest first; ascending output.
    Min,
    /// Largest first; descending output.
    Max,
}

impl HeapKind {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            HeapKind::Min
        } else {
            HeapKind::Max
        }
    }

    pub fn is_ascending(self) -> bool {
        self == HeapKind::Min
    }

    /// Whether an element comparing `ord` against another belongs above it.
    fn prefers(self, ord: Ordering) -> bool {
        match self {
            HeapKind::Min => ord == Ordering::Less,
            HeapKind::Max => ord == Ordering::Greater,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unbuilt,
    Active,
    Complete,
}

/// Binary heap over a snapshot of `T`, ordered through `O`.
///
/// The snapshot and any cached keys never move. Only `heap_map`, a
/// permutation of indices into the snapshot, is rearranged. Extracted
/// indices accumulate at the tail of `heap_map` in reverse extraction order.
#[derive(Debug)]
pub struct PriorityHeap<T, O = NaturalOrder> {
    elements: Vec<T>,
    state: HeapState<O>,
}

#[derive(Debug)]
pub(crate) struct HeapState<O> {
    heap_map: Vec<usize>,
    order: O,
    kind: HeapKind,
    insertion_threshold: usize,
    total_sorted: usize,
    residual_sorted: bool,
    phase: Phase,
    work: WorkStack,
}

impl<T: Ord> PriorityHeap<T, NaturalOrder> {
    pub fn new(source: impl IntoIterator<Item = T>) -> Self {
        Self::with_kind(source, HeapKind::Min)
    }

    pub fn with_kind(source: impl IntoIterator<Item = T>, kind: HeapKind) -> Self {
        Self::with_config(source, |_| NaturalOrder, HeapConfig::new(kind))
    }
}

impl<T, K: Ord> PriorityHeap<T, KeyedOrder<K>> {
    pub fn by_key(source: impl IntoIterator<Item = T>, key_of: impl FnMut(&T) -> K) -> Self {
        Self::by_key_with_kind(source, key_of, HeapKind::Min)
    }

    pub fn by_key_with_kind(
        source: impl IntoIterator<Item = T>,
        key_of: impl FnMut(&T) -> K,
        kind: HeapKind,
    ) -> Self {
        Self::with_config(
            source,
            |elements| KeyedOrder::project(elements, key_of),
            HeapConfig::new(kind),
        )
    }
}

impl<T, K, C> PriorityHeap<T, ComparerOrder<K, C>>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn by_key_with_comparer(
        source: impl IntoIterator<Item = T>,
        key_of: impl FnMut(&T) -> K,
        comparer: C,
    ) -> Self {
        Self::by_key_with_comparer_and_kind(source, key_of, comparer, HeapKind::Min)
    }

    pub fn by_key_with_comparer_and_kind(
        source: impl IntoIterator<Item = T>,
        key_of: impl FnMut(&T) -> K,
        comparer: C,
        kind: HeapKind,
    ) -> Self {
        Self::with_config(
            source,
            |elements| ComparerOrder::project(elements, key_of, comparer),
            HeapConfig::new(kind),
        )
    }
}

impl<T, O: KeyOrder<T>> PriorityHeap<T, O> {
    /// Snapshots `source`, derives the ordering from the snapshot, and
    /// leaves the heap unbuilt. No comparisons happen here.
    pub fn with_config(
        source: impl IntoIterator<Item = T>,
        make_order: impl FnOnce(&[T]) -> O,
        config: HeapConfig,
    ) -> Self {
        let elements: Vec<T> = source.into_iter().collect();
        let order = make_order(&elements);
        let len = elements.len();
        PriorityHeap {
            elements,
            state: HeapState {
                heap_map: (0..len).collect(),
                order,
                kind: config.kind,
                insertion_threshold: config.insertion_threshold,
                total_sorted: 0,
                residual_sorted: false,
                phase: Phase::Unbuilt,
                work: WorkStack::for_heap_of(len),
            },
        }
    }

    /// Builds the heap in linear time. Does nothing once built.
    pub fn build(&mut self) {
        self.state.ensure_built(&self.elements);
    }

    /// Removes the current extreme element, building the heap first if needed.
    pub fn pop(&mut self) -> Option<&T> {
        self.state.ensure_built(&self.elements);
        let index = self.state.pop(&self.elements)?;
        Some(&self.elements[index])
    }

    /// The element the next pop would return, if the heap has been built.
    pub fn peek(&self) -> Option<&T> {
        self.state.peek().map(|index| &self.elements[index])
    }

    /// Lazily yields the remaining elements in priority order.
    pub fn sort(&mut self) -> Sort<'_, T, O> {
        Sort::new(&self.elements, &mut self.state)
    }

    pub fn into_sorted(self) -> IntoSorted<T, O>
    where
        T: Clone,
    {
        IntoSorted::new(self)
    }

    /// Elements already popped, in the order they were popped.
    pub fn extracted(&self) -> impl Iterator<Item = &T> + '_ {
        let len = self.state.heap_map.len();
        self.state.heap_map[len - self.state.total_sorted..]
            .iter()
            .rev()
            .map(move |&index| &self.elements[index])
    }
}

impl<T, O> PriorityHeap<T, O> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn order(&self) -> &O {
        &self.state.order
    }

    pub fn kind(&self) -> HeapKind {
        self.state.kind
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn total_sorted(&self) -> usize {
        self.state.total_sorted
    }

    pub fn remaining(&self) -> usize {
        self.state.remaining()
    }

    pub fn is_sorted(&self) -> bool {
        self.state.phase == Phase::Complete
    }

    pub fn heap_map(&self) -> &[usize] {
        &self.state.heap_map
    }
}

impl<O> HeapState<O> {
    pub(crate) fn remaining(&self) -> usize {
        self.heap_map.len() - self.total_sorted
    }

    fn peek(&self) -> Option<usize> {
        if self.phase != Phase::Active {
            return None;
        }
        if self.residual_sorted {
            Some(self.heap_map[self.remaining() - 1])
        } else {
            Some(self.heap_map[0])
        }
    }

    /// Whether the entry at heap position `a` belongs above the one at `b`.
    fn wins<T>(&self, elements: &[T], a: usize, b: usize) -> bool
    where
        O: KeyOrder<T>,
    {
        let ord = self
            .order
            .compare_keys(elements, self.heap_map[a], self.heap_map[b]);
        self.kind.prefers(ord)
    }

    pub(crate) fn ensure_built<T>(&mut self, elements: &[T])
    where
        O: KeyOrder<T>,
    {
        if self.phase == Phase::Unbuilt {
            self.build_heap(elements);
        }
    }

    fn build_heap<T>(&mut self, elements: &[T])
    where
        O: KeyOrder<T>,
    {
        debug_assert_eq!(self.phase, Phase::Unbuilt);
        let len = self.heap_map.len();
        for i in (0..len / 2).rev() {
            self.sift_down(elements, i, len);
        }
        self.phase = if len == 0 {
            Phase::Complete
        } else {
            Phase::Active
        };
        tracing::debug!(len, kind = ?self.kind, "built priority heap");
    }

    /// Restores the heap property below `index` within `heap_map[..bound]`.
    fn sift_down<T>(&mut self, elements: &[T], index: usize, bound: usize)
    where
        O: KeyOrder<T>,
    {
        self.work.clear();
        self.work.push(index);
        while let Some(node) = self.work.pop() {
            let left = 2 * node + 1;
            if left >= bound {
                continue;
            }
            let right = left + 1;

            let mut best = node;
            if self.wins(elements, left, best) {
                best = left;
            }
            if right < bound && self.wins(elements, right, best) {
                best = right;
            }

            if best != node {
                self.heap_map.swap(node, best);
                self.work.push(best);
            }
        }
        debug_assert!(self.work.is_empty());
    }

    /// Sorts `heap_map[..size]` so the most extreme entry ends up last,
    /// letting the residual be popped from the back in order.
    fn insertion_sort<T>(&mut self, elements: &[T], size: usize)
    where
        O: KeyOrder<T>,
    {
        for i in 1..size {
            let mut j = i;
            while j > 0 && self.wins(elements, j - 1, j) {
                self.heap_map.swap(j - 1, j);
                j -= 1;
            }
        }
    }

    /// Extracts the next index. `None` once every element has been popped.
    pub(crate) fn pop<T>(&mut self, elements: &[T]) -> Option<usize>
    where
        O: KeyOrder<T>,
    {
        if self.phase != Phase::Active {
            return None;
        }
        let remaining = self.remaining();

        let root = if remaining > self.insertion_threshold {
            let last = remaining - 1;
            let root = self.heap_map[0];
            self.heap_map.swap(0, last);
            self.sift_down(elements, 0, last);
            root
        } else {
            if !self.residual_sorted {
                tracing::debug!(remaining, "switching residual to insertion sort");
                self.insertion_sort(elements, remaining);
                self.residual_sorted = true;
            }
            self.heap_map[remaining - 1]
        };

        self.total_sorted += 1;
        tracing::trace!(index = root, total_sorted = self.total_sorted, "popped");
        if self.total_sorted == self.heap_map.len() {
            self.phase = Phase::Complete;
            tracing::debug!(len = self.heap_map.len(), "priority heap exhausted");
        }
        Some(root)
    }
}
