use std::cmp::Ordering;

/// Orders two elements of a heap's snapshot, identified by their index.
///
/// Implementations that project keys compute them once at construction and
/// compare only the cached keys afterwards; `elements` is passed for the
/// natural-order case and ignored otherwise.
pub trait KeyOrder<T> {
    fn compare_keys(&self, elements: &[T], left: usize, right: usize) -> Ordering;
}

/// The element type's own `Ord`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord> KeyOrder<T> for NaturalOrder {
    fn compare_keys(&self, elements: &[T], left: usize, right: usize) -> Ordering {
        elements[left].cmp(&elements[right])
    }
}

/// Cached keys ordered by `K: Ord`.
#[derive(Debug, Clone)]
pub struct KeyedOrder<K> {
    keys: Vec<K>,
}

impl<K> KeyedOrder<K> {
    pub fn project<T>(elements: &[T], key_of: impl FnMut(&T) -> K) -> Self {
        KeyedOrder {
            keys: elements.iter().map(key_of).collect(),
        }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}

impl<T, K: Ord> KeyOrder<T> for KeyedOrder<K> {
    fn compare_keys(&self, _elements: &[T], left: usize, right: usize) -> Ordering {
        self.keys[left].cmp(&self.keys[right])
    }
}

/// Cached keys ordered by a caller-supplied comparer; `K` needs no `Ord`.
#[derive(Clone)]
pub struct ComparerOrder<K, C> {
    keys: Vec<K>,
    comparer: C,
}

impl<K, C> ComparerOrder<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn project<T>(elements: &[T], key_of: impl FnMut(&T) -> K, comparer: C) -> Self {
        ComparerOrder {
            keys: elements.iter().map(key_of).collect(),
            comparer,
        }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}

impl<T, K, C> KeyOrder<T> for ComparerOrder<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn compare_keys(&self, _elements: &[T], left: usize, right: usize) -> Ordering {
        (self.comparer)(&self.keys[left], &self.keys[right])
    }
}
