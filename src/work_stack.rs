/// LIFO of heap positions still waiting to be sifted.
///
/// Sift-down drains this instead of recursing, so the call depth stays
/// constant no matter how deep the heap is.
#[derive(Debug, Default)]
pub(crate) struct WorkStack {
    positions: Vec<usize>,
}

impl WorkStack {
    /// Room for one root-to-leaf path of a heap holding `len` elements.
    pub(crate) fn for_heap_of(len: usize) -> Self {
        let depth = (usize::BITS - len.leading_zeros()) as usize;
        WorkStack {
            positions: Vec::with_capacity(depth.max(1)),
        }
    }

    pub(crate) fn push(&mut self, position: usize) {
        self.positions.push(position);
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.positions.pop()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.positions.clear();
    }
}
