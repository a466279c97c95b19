use std::iter::FusedIterator;

use crate::heap::{HeapState, PriorityHeap};
use crate::order::KeyOrder;

/// Borrowing extraction sequence returned by [`PriorityHeap::sort`].
///
/// The heap is built on the first call to `next`, and every later call pops
/// exactly one element. Dropping the iterator early leaves the unpopped
/// remainder untouched.
pub struct Sort<'a, T, O> {
    elements: &'a [T],
    state: &'a mut HeapState<O>,
}

impl<'a, T, O> Sort<'a, T, O> {
    pub(crate) fn new(elements: &'a [T], state: &'a mut HeapState<O>) -> Self {
        Sort { elements, state }
    }
}

impl<'a, T, O: KeyOrder<T>> Iterator for Sort<'a, T, O> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.state.ensure_built(self.elements);
        let elements = self.elements;
        self.state.pop(elements).map(|index| &elements[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.state.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, O: KeyOrder<T>> ExactSizeIterator for Sort<'_, T, O> {}

impl<T, O: KeyOrder<T>> FusedIterator for Sort<'_, T, O> {}

/// Owning extraction sequence; yields clones out of the heap's snapshot.
pub struct IntoSorted<T, O> {
    heap: PriorityHeap<T, O>,
}

impl<T, O> IntoSorted<T, O> {
    pub(crate) fn new(heap: PriorityHeap<T, O>) -> Self {
        IntoSorted { heap }
    }

    /// The heap driving this sequence, for inspecting progress.
    pub fn heap(&self) -> &PriorityHeap<T, O> {
        &self.heap
    }
}

impl<T: Clone, O: KeyOrder<T>> Iterator for IntoSorted<T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.heap.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Clone, O: KeyOrder<T>> ExactSizeIterator for IntoSorted<T, O> {}

impl<T: Clone, O: KeyOrder<T>> FusedIterator for IntoSorted<T, O> {}
