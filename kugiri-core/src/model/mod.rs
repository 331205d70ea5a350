//! The statistical n-gram model
//!
//! A model is thirteen fixed-arity weight tables plus the precomputed sum
//! of every weight. It is immutable once built, so sharing one instance
//! across threads needs no synchronization.

mod loader;

use crate::error::ModelResult;
use std::collections::HashMap;

/// Number of unigram slots (`UW1`..`UW6`)
pub const UNIGRAM_SLOTS: usize = 6;
/// Number of bigram slots (`BW1`..`BW3`)
pub const BIGRAM_SLOTS: usize = 3;
/// Number of trigram slots (`TW1`..`TW4`)
pub const TRIGRAM_SLOTS: usize = 4;

/// An immutable mapping from a fixed-length codepoint window to a weight
///
/// One generic type covers all three arities (1, 2, 3). Keys shorter than
/// `N` are stored right-padded with `'\0'`; the loader rejects keys longer
/// than `N`.
#[derive(Debug, Clone, Default)]
pub struct NgramTable<const N: usize> {
    entries: HashMap<[char; N], i32>,
}

impl<const N: usize> NgramTable<N> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, key: [char; N], weight: i32) {
        self.entries.insert(key, weight);
    }

    /// Weight stored under `key`, if any
    pub fn get(&self, key: [char; N]) -> Option<i32> {
        self.entries.get(&key).copied()
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn total(&self) -> i64 {
        self.entries.values().map(|&w| i64::from(w)).sum()
    }
}

/// A loaded segmentation model: 13 n-gram tables plus their weight sum
///
/// Built exclusively by [`Model::from_json`]; a value of this type always
/// has every slot populated. All storage is released on drop.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) uni: [NgramTable<1>; UNIGRAM_SLOTS],
    pub(crate) bi: [NgramTable<2>; BIGRAM_SLOTS],
    pub(crate) tri: [NgramTable<3>; TRIGRAM_SLOTS],
    total_weight: i64,
}

impl Model {
    /// Build a model from its JSON description.
    ///
    /// The root must be an object; the slots `UW1`..`UW6`, `BW1`..`BW3`
    /// and `TW1`..`TW4` must each map n-gram strings to integer weights,
    /// and all 13 must be present. Unrecognized top-level keys are
    /// ignored. No partially built model is ever returned.
    pub fn from_json(bytes: &[u8]) -> ModelResult<Self> {
        loader::build(bytes)
    }

    /// Sum of every weight across all 13 tables
    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    /// The constant added to every raw position score before the
    /// accept/reject test: `-0.5 * total_weight`.
    pub(crate) fn bias(&self) -> f64 {
        -0.5 * self.total_weight as f64
    }

    /// The six unigram tables, `UW1`..`UW6`
    pub fn unigrams(&self) -> &[NgramTable<1>; UNIGRAM_SLOTS] {
        &self.uni
    }

    /// The three bigram tables, `BW1`..`BW3`
    pub fn bigrams(&self) -> &[NgramTable<2>; BIGRAM_SLOTS] {
        &self.bi
    }

    /// The four trigram tables, `TW1`..`TW4`
    pub fn trigrams(&self) -> &[NgramTable<3>; TRIGRAM_SLOTS] {
        &self.tri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup_and_padding() {
        let mut table: NgramTable<3> = NgramTable::default();
        table.insert(['A', '\0', '\0'], 7);
        assert_eq!(table.get(['A', '\0', '\0']), Some(7));
        assert_eq!(table.get(['A', 'B', '\0']), None);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_model_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Model>();
    }
}
