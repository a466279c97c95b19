use crate::error::{Error, Result};
use crate::heap::HeapKind;

pub const INSERTION_THRESHOLD_VAR: &str = "PRIORITY_SORT_INSERTION_THRESHOLD";
pub const DESCENDING_VAR: &str = "PRIORITY_SORT_DESCENDING";

/// Tuning knobs for a [`PriorityHeap`](crate::PriorityHeap).
///
/// `insertion_threshold` is the residual size at which popping switches from
/// heap maintenance to a one-off insertion sort. It never changes the output
/// order; `0` disables the switch entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    pub kind: HeapKind,
    pub insertion_threshold: usize,
}

impl HeapConfig {
    pub const DEFAULT_INSERTION_THRESHOLD: usize = 10;

    pub fn new(kind: HeapKind) -> Self {
        HeapConfig {
            kind,
            insertion_threshold: Self::DEFAULT_INSERTION_THRESHOLD,
        }
    }

    pub fn with_kind(mut self, kind: HeapKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_insertion_threshold(mut self, threshold: usize) -> Self {
        self.insertion_threshold = threshold;
        self
    }

    /// Reads overrides from `PRIORITY_SORT_INSERTION_THRESHOLD` and
    /// `PRIORITY_SORT_DESCENDING`. Unset or empty variables keep the default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self> {
        let mut config = HeapConfig::default();
        if let Some(value) = non_empty(lookup(INSERTION_THRESHOLD_VAR)) {
            config.insertion_threshold =
                value.trim().parse().map_err(|_| Error::InvalidConfig {
                    var: INSERTION_THRESHOLD_VAR,
                    value: value.clone(),
                })?;
        }
        if let Some(value) = non_empty(lookup(DESCENDING_VAR)) {
            let descending = match value.as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(Error::InvalidConfig {
                        var: DESCENDING_VAR,
                        value,
                    })
                }
            };
            config.kind = HeapKind::from_ascending(!descending);
        }
        Ok(config)
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::new(HeapKind::Min)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
