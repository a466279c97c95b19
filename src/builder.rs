use std::cmp::Ordering;

use crate::config::HeapConfig;
use crate::error::{Error, Result};
use crate::heap::{HeapKind, PriorityHeap};
use crate::order::{ComparerOrder, KeyedOrder, NaturalOrder};

/// Checked construction for callers whose inputs may be absent.
///
/// Nothing is projected or compared until every required input is present;
/// a missing source or key selector is reported from `build*` instead.
#[derive(Debug)]
pub struct PriorityBuilder<T> {
    source: Option<Vec<T>>,
    config: HeapConfig,
}

impl<T> PriorityBuilder<T> {
    pub fn new() -> Self {
        PriorityBuilder {
            source: None,
            config: HeapConfig::default(),
        }
    }

    pub fn source(mut self, source: impl IntoIterator<Item = T>) -> Self {
        self.source = Some(source.into_iter().collect());
        self
    }

    pub fn maybe_source<I>(mut self, source: Option<I>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.source = source.map(|s| s.into_iter().collect());
        self
    }

    pub fn config(mut self, config: HeapConfig) -> Self {
        self.config = config;
        self
    }

    pub fn ascending(mut self, ascending: bool) -> Self {
        self.config.kind = HeapKind::from_ascending(ascending);
        self
    }

    pub fn descending(self) -> Self {
        self.ascending(false)
    }

    pub fn insertion_threshold(mut self, threshold: usize) -> Self {
        self.config.insertion_threshold = threshold;
        self
    }

    fn take_source(&mut self) -> Result<Vec<T>> {
        self.source.take().ok_or(Error::MissingSource)
    }

    pub fn build(mut self) -> Result<PriorityHeap<T, NaturalOrder>>
    where
        T: Ord,
    {
        let source = self.take_source()?;
        Ok(PriorityHeap::with_config(source, |_| NaturalOrder, self.config))
    }

    pub fn build_by_key<K, F>(mut self, key_of: Option<F>) -> Result<PriorityHeap<T, KeyedOrder<K>>>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let source = self.take_source()?;
        let key_of = key_of.ok_or(Error::MissingKeySelector)?;
        Ok(PriorityHeap::with_config(
            source,
            |elements| KeyedOrder::project(elements, key_of),
            self.config,
        ))
    }

    pub fn build_by_key_with<K, F, C>(
        mut self,
        key_of: Option<F>,
        comparer: C,
    ) -> Result<PriorityHeap<T, ComparerOrder<K, C>>>
    where
        F: FnMut(&T) -> K,
        C: Fn(&K, &K) -> Ordering,
    {
        let source = self.take_source()?;
        let key_of = key_of.ok_or(Error::MissingKeySelector)?;
        Ok(PriorityHeap::with_config(
            source,
            |elements| ComparerOrder::project(elements, key_of, comparer),
            self.config,
        ))
    }
}

impl<T> Default for PriorityBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
