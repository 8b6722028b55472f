// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The orbit table: one representative per translation class seen so far.

use crate::group::{is_translate, Action, Subset};
use crate::interval::{is_homometric, IntervalVector};

/// A representative and, when caching is enabled, its interval vector under
/// the action being searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitEntry {
    pub subset: Subset,
    pub vector: Option<IntervalVector>,
}

impl OrbitEntry {
    /// Whether `x` (with its vector, if cached) could share this entry's
    /// interval vector. Without a cached vector on both sides, anything may.
    fn may_share_vector(&self, x_vector: Option<&IntervalVector>) -> bool {
        match (&self.vector, x_vector) {
            (Some(own), Some(other)) => own == other,
            _ => true,
        }
    }
}

/// Append-only list of orbit representatives, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct OrbitTable {
    entries: Vec<OrbitEntry>,
}

impl OrbitTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OrbitEntry> {
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&OrbitEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitEntry> {
        self.entries.iter()
    }

    /// Representatives in discovery order.
    pub fn subsets(&self) -> impl Iterator<Item = &Subset> {
        self.entries.iter().map(|e| &e.subset)
    }

    pub fn push(&mut self, subset: Subset, vector: Option<IntervalVector>) {
        self.entries.push(OrbitEntry { subset, vector });
    }

    /// Index of the first entry that `x` is a `dedup`-translate of.
    ///
    /// `x_vector` is x's interval vector under the searched action, the
    /// complement of `dedup`. Translates share it, so entries with a different
    /// cached vector are skipped without a translation test.
    pub fn find_translate(
        &self,
        x: &Subset,
        dedup: Action,
        x_vector: Option<&IntervalVector>,
    ) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.may_share_vector(x_vector) && is_translate(&e.subset, x, dedup))
    }

    /// Indices of every entry homometric with `x` under `action`, in table order.
    pub fn homometric_matches(
        &self,
        x: &Subset,
        action: Action,
        x_vector: Option<&IntervalVector>,
    ) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| match (&e.vector, x_vector) {
                (Some(own), Some(other)) => own == other,
                _ => is_homometric(&e.subset, x, action),
            })
            .map(|(i, _)| i)
            .collect()
    }
}
