//! Lazy partial sorting.
//!
//! A [`PriorityHeap`] snapshots its input and orders a permutation of indices
//! into that snapshot. Building costs O(n) and each element pulled from the
//! extraction sequence costs O(log n), so taking the first `k` of `n`
//! elements costs O(n + k log n) rather than a full sort.
//!
//! ```
//! use priority_sort::{HeapKind, PriorityHeap};
//!
//! let mut heap = PriorityHeap::with_kind(vec![3, 1, 6, 23, 2, 99, 98], HeapKind::Max);
//! let top: Vec<i32> = heap.sort().take(3).copied().collect();
//! assert_eq!(top, vec![99, 98, 23]);
//! assert_eq!(heap.total_sorted(), 3);
//! ```

mod builder;
mod config;
mod error;
mod extensions;
mod heap;
mod order;
mod sequence;
mod work_stack;

pub use builder::PriorityBuilder;
pub use config::{HeapConfig, DESCENDING_VAR, INSERTION_THRESHOLD_VAR};
pub use error::{Error, Result};
pub use extensions::{
    priority_order, priority_order_by, priority_order_by_descending, priority_order_by_with,
    priority_order_by_with_descending, priority_order_descending, PriorityOrder,
};
pub use heap::{HeapKind, Phase, PriorityHeap};
pub use order::{ComparerOrder, KeyOrder, KeyedOrder, NaturalOrder};
pub use sequence::{IntoSorted, Sort};
