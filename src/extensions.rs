//! Sequence-level entry points: each builds the matching heap and hands back
//! its lazy extraction sequence.

use std::cmp::Ordering;

use crate::heap::{HeapKind, PriorityHeap};
use crate::order::{ComparerOrder, KeyedOrder, NaturalOrder};
use crate::sequence::IntoSorted;

pub fn priority_order<I>(source: I) -> IntoSorted<I::Item, NaturalOrder>
where
    I: IntoIterator,
    I::Item: Ord + Clone,
{
    PriorityHeap::with_kind(source, HeapKind::Min).into_sorted()
}

pub fn priority_order_descending<I>(source: I) -> IntoSorted<I::Item, NaturalOrder>
where
    I: IntoIterator,
    I::Item: Ord + Clone,
{
    PriorityHeap::with_kind(source, HeapKind::Max).into_sorted()
}

pub fn priority_order_by<I, K, F>(source: I, key_of: F) -> IntoSorted<I::Item, KeyedOrder<K>>
where
    I: IntoIterator,
    I::Item: Clone,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    PriorityHeap::by_key_with_kind(source, key_of, HeapKind::Min).into_sorted()
}

pub fn priority_order_by_descending<I, K, F>(
    source: I,
    key_of: F,
) -> IntoSorted<I::Item, KeyedOrder<K>>
where
    I: IntoIterator,
    I::Item: Clone,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    PriorityHeap::by_key_with_kind(source, key_of, HeapKind::Max).into_sorted()
}

pub fn priority_order_by_with<I, K, F, C>(
    source: I,
    key_of: F,
    comparer: C,
) -> IntoSorted<I::Item, ComparerOrder<K, C>>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(&I::Item) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    PriorityHeap::by_key_with_comparer_and_kind(source, key_of, comparer, HeapKind::Min)
        .into_sorted()
}

pub fn priority_order_by_with_descending<I, K, F, C>(
    source: I,
    key_of: F,
    comparer: C,
) -> IntoSorted<I::Item, ComparerOrder<K, C>>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(&I::Item) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    PriorityHeap::by_key_with_comparer_and_kind(source, key_of, comparer, HeapKind::Max)
        .into_sorted()
}

/// Method-call form of the free functions above, for any `IntoIterator`.
///
/// ```
/// use priority_sort::PriorityOrder;
///
/// let top: Vec<u32> = vec![5, 1, 9, 3, 7].priority_order_descending().take(2).collect();
/// assert_eq!(top, vec![9, 7]);
/// ```
pub trait PriorityOrder: IntoIterator + Sized {
    fn priority_order(self) -> IntoSorted<Self::Item, NaturalOrder>
    where
        Self::Item: Ord + Clone,
    {
        priority_order(self)
    }

    fn priority_order_descending(self) -> IntoSorted<Self::Item, NaturalOrder>
    where
        Self::Item: Ord + Clone,
    {
        priority_order_descending(self)
    }

    fn priority_order_by<K, F>(self, key_of: F) -> IntoSorted<Self::Item, KeyedOrder<K>>
    where
        Self::Item: Clone,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        priority_order_by(self, key_of)
    }

    fn priority_order_by_descending<K, F>(
        self,
        key_of: F,
    ) -> IntoSorted<Self::Item, KeyedOrder<K>>
    where
        Self::Item: Clone,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        priority_order_by_descending(self, key_of)
    }

    fn priority_order_by_with<K, F, C>(
        self,
        key_of: F,
        comparer: C,
    ) -> IntoSorted<Self::Item, ComparerOrder<K, C>>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item) -> K,
        C: Fn(&K, &K) -> Ordering,
    {
        priority_order_by_with(self, key_of, comparer)
    }

    fn priority_order_by_with_descending<K, F, C>(
        self,
        key_of: F,
        comparer: C,
    ) -> IntoSorted<Self::Item, ComparerOrder<K, C>>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item) -> K,
        C: Fn(&K, &K) -> Ordering,
    {
        priority_order_by_with_descending(self, key_of, comparer)
    }
}

impl<I: IntoIterator> PriorityOrder for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Player {
        name: &'static str,
        score: u32,
    }

    fn roster() -> Vec<Player> {
        vec![
            Player { name: "ada", score: 40 },
            Player { name: "bo", score: 95 },
            Player { name: "cy", score: 12 },
            Player { name: "dee", score: 67 },
        ]
    }

    #[test]
    fn priority_order_ascends() {
        let out: Vec<i32> = vec![4, 1, 3, 2].priority_order().collect();
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn priority_order_descending_descends() {
        let out: Vec<i32> = vec![4, 1, 3, 2].priority_order_descending().collect();
        assert_eq!(out, vec![4, 3, 2, 1]);
    }

    #[test]
    fn priority_order_over_borrowed_items() {
        let values = vec![10, 30, 20];
        let out: Vec<&i32> = values.iter().priority_order_descending().collect();
        assert_eq!(out, vec![&30, &20, &10]);
        assert_eq!(values, vec![10, 30, 20]);
    }

    #[test]
    fn priority_order_by_uses_key() {
        let names: Vec<&str> = roster()
            .priority_order_by(|p| p.score)
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["cy", "ada", "dee", "bo"]);
    }

    #[test]
    fn priority_order_by_descending_takes_top() {
        let top: Vec<&str> = roster()
            .priority_order_by_descending(|p| p.score)
            .take(2)
            .map(|p| p.name)
            .collect();
        assert_eq!(top, vec!["bo", "dee"]);
    }

    #[test]
    fn priority_order_by_with_custom_comparer() {
        let mut longest: Vec<&str> = roster()
            .priority_order_by_with(|p| p.name.len(), |a: &usize, b: &usize| b.cmp(a))
            .take(2)
            .map(|p| p.name)
            .collect();
        longest.sort();
        assert_eq!(longest, vec!["ada", "dee"]);
    }

    #[test]
    fn priority_order_by_with_descending_reverses_comparer() {
        let scores: Vec<u32> = roster()
            .priority_order_by_with_descending(|p| p.score, |a: &u32, b: &u32| b.cmp(a))
            .map(|p| p.score)
            .collect();
        assert_eq!(scores, vec![12, 40, 67, 95]);
    }

    #[test]
    fn free_functions_match_methods() {
        let values = vec![9, 2, 7, 4];
        let by_fn: Vec<i32> = priority_order_descending(values.clone()).collect();
        let by_method: Vec<i32> = values.priority_order_descending().collect();
        assert_eq!(by_fn, by_method);
    }

    #[test]
    fn empty_source_yields_nothing() {
        let out: Vec<i32> = Vec::<i32>::new().priority_order().collect();
        assert!(out.is_empty());
    }
}
