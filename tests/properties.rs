use priority_sort::{HeapConfig, HeapKind, NaturalOrder, PriorityHeap, PriorityOrder};
use proptest::prelude::*;

const VEC_SIZE: usize = 300;
const PROPTEST_CASES: u32 = 256;

fn reference(values: &[i32], kind: HeapKind) -> Vec<i32> {
    let mut expected = values.to_vec();
    expected.sort();
    if kind == HeapKind::Max {
        expected.reverse();
    }
    expected
}

fn kinds() -> impl Strategy<Value = HeapKind> {
    prop_oneof![Just(HeapKind::Min), Just(HeapKind::Max)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn full_sort_matches_reference(
        values in proptest::collection::vec(-1000..1000i32, 0..VEC_SIZE),
        kind in kinds()
    ) {
        let mut heap = PriorityHeap::with_kind(values.clone(), kind);
        let out: Vec<i32> = heap.sort().copied().collect();
        prop_assert_eq!(out, reference(&values, kind));
        prop_assert_eq!(heap.total_sorted(), values.len());
        prop_assert!(heap.is_sorted());
    }

    #[test]
    fn every_prefix_matches_reference(
        values in proptest::collection::vec(0..50i32, 0..80),
        kind in kinds()
    ) {
        let expected = reference(&values, kind);
        for k in 0..=values.len() {
            let mut heap = PriorityHeap::with_kind(values.clone(), kind);
            let prefix: Vec<i32> = heap.sort().take(k).copied().collect();
            prop_assert_eq!(&prefix[..], &expected[..k]);
            prop_assert_eq!(heap.total_sorted(), k);
        }
    }

    #[test]
    fn input_arrangement_does_not_matter(
        (values, shuffled) in proptest::collection::vec(0..100i32, 0..VEC_SIZE)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        kind in kinds()
    ) {
        let a: Vec<i32> = PriorityHeap::with_kind(values, kind).into_sorted().collect();
        let b: Vec<i32> = PriorityHeap::with_kind(shuffled, kind).into_sorted().collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn insertion_threshold_never_changes_output(
        values in proptest::collection::vec(0..30i32, 0..VEC_SIZE),
        threshold in 0usize..64,
        kind in kinds()
    ) {
        let disabled = HeapConfig::new(kind).with_insertion_threshold(0);
        let tuned = HeapConfig::new(kind).with_insertion_threshold(threshold);
        let a: Vec<i32> = PriorityHeap::with_config(values.clone(), |_| NaturalOrder, disabled)
            .into_sorted()
            .collect();
        let b: Vec<i32> = PriorityHeap::with_config(values, |_| NaturalOrder, tuned)
            .into_sorted()
            .collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn keyed_sort_orders_keys(
        words in proptest::collection::vec("[a-z]{0,12}", 0..100)
    ) {
        let lengths: Vec<usize> = words
            .clone()
            .priority_order_by_descending(|w| w.len())
            .map(|w| w.len())
            .collect();
        let mut expected: Vec<usize> = words.iter().map(|w| w.len()).collect();
        expected.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(lengths, expected);
    }

    #[test]
    fn comparer_sort_orders_keys(
        values in proptest::collection::vec(-500..500i32, 0..VEC_SIZE)
    ) {
        let out: Vec<i32> = values
            .clone()
            .priority_order_by_with(|v| v.abs(), |a: &i32, b: &i32| b.cmp(a))
            .map(|v| v.abs())
            .collect();
        let mut expected: Vec<i32> = values.iter().map(|v| v.abs()).collect();
        expected.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn sequence_length_is_exact(
        values in proptest::collection::vec(any::<u16>(), 0..VEC_SIZE)
    ) {
        let mut seq = values.clone().priority_order();
        prop_assert_eq!(seq.len(), values.len());
        let mut pulled = 0;
        while seq.next().is_some() {
            pulled += 1;
        }
        prop_assert_eq!(pulled, values.len());
        prop_assert!(seq.next().is_none());
    }
}
