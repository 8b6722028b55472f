// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! The predicates hand work down the pipeline through [`SearchState`]: the
//! candidate under test, its interval vector when caching, the orbit table,
//! and the pair about to be reported. Nothing is undone on backtracking; each
//! predicate overwrites the slot it owns.

pub mod orbits;
pub mod pair;
pub mod statistics;

pub use orbits::{OrbitEntry, OrbitTable};
pub use pair::{CrossOutcome, HomometricPair};
pub use statistics::{Counters, Statistics};

use crate::group::Subset;
use crate::interval::IntervalVector;

#[derive(Debug, Default)]
pub struct SearchState {
    /// The subset produced by the enumeration, until it is classified.
    pub candidate: Option<Subset>,

    /// Interval vector of `candidate` when vectors are cached.
    pub candidate_vector: Option<IntervalVector>,

    /// Orbit representatives found so far.
    pub orbits: OrbitTable,

    /// Table indices homometric with the newest representative.
    pub matches: Vec<usize>,

    /// The pair the current solution reports.
    pub pair: Option<HomometricPair>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }
}
