// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use dihedral_homometry::context::SearchContext;
use dihedral_homometry::state::{HomometricPair, Statistics};
use dihedral_homometry::{Action, Enumeration, Predicate, PredicateResult, SearchConfig, Subset};

/// The subset with canonical encoding `value` in D_2n.
pub fn subset(value: u128, n: usize) -> Subset {
    Subset::from_encoding(value, n).unwrap()
}

pub fn config(n: usize, p: usize, action: Action, enumeration: Enumeration) -> SearchConfig {
    SearchConfig::new(n, p, action)
        .unwrap()
        .with_enumeration(enumeration)
        .with_progress_interval(0)
}

/// Run a search, keeping every pair in memory.
pub fn collect(config: &SearchConfig) -> (Statistics, Vec<HomometricPair>) {
    let mut pairs: Vec<HomometricPair> = Vec::new();
    let statistics = dihedral_homometry::run(config, &mut pairs).unwrap();
    (statistics, pairs)
}

/// The (earlier, later) encodings of each pair.
pub fn encodings(pairs: &[HomometricPair]) -> Vec<(u128, u128)> {
    pairs
        .iter()
        .map(|p| (p.earlier.encoding().unwrap(), p.later.encoding().unwrap()))
        .collect()
}

/// Offers each integer in `[start, end)` as one choice.
#[derive(Debug)]
pub struct IntegerRangePredicate {
    start: usize,
    end: usize,
}

impl IntegerRangePredicate {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl Predicate for IntegerRangePredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
        PredicateResult::Choices(self.end - self.start)
    }

    fn retry_pred(&mut self, _ctx: &mut SearchContext, _choice: usize) -> PredicateResult {
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "IntegerRange"
    }
}

/// A deterministic step that always succeeds.
#[derive(Debug)]
pub struct PassPredicate;

impl Predicate for PassPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Pass"
    }
}

/// A context for engine tests; the predicates under test ignore it.
pub fn scratch_context() -> SearchContext {
    SearchContext::new(SearchConfig::new(3, 2, Action::Left).unwrap())
}
