// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates of the homometry pipeline. Each
//! predicate is one stage of the per-candidate work.
//!
//! # Organization
//!
//! - `subsets`: SubsetsPredicate, the enumeration choice point
//! - `classify`: ClassifyPredicate, drops pure cyclic subsets and translates
//! - `homometry`: HomometryPredicate, new orbits and their homometric partners
//! - `witness`: CrossWitnessPredicate, the complementary-action witness search
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod classify;
pub mod homometry;
pub mod subsets;
pub mod witness;

// Re-export main predicates for convenience
pub use classify::ClassifyPredicate;
pub use homometry::HomometryPredicate;
pub use subsets::SubsetsPredicate;
pub use witness::CrossWitnessPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with
/// it explores every alternative and reports nothing.
///
/// # Example
///
/// ```
/// use dihedral_homometry::config::SearchConfig;
/// use dihedral_homometry::context::SearchContext;
/// use dihedral_homometry::engine::EngineBuilder;
/// use dihedral_homometry::group::Action;
/// use dihedral_homometry::predicates::{FailPredicate, SubsetsPredicate};
///
/// let config = SearchConfig::new(3, 2, Action::Left).unwrap();
/// let engine = EngineBuilder::new()
///     .add(Box::new(SubsetsPredicate::new(&config).unwrap()))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all subsets then fail
/// let mut ctx = SearchContext::new(config);
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution.
///
/// The homometry pipeline ends with it: each suspension hands one pair to the
/// driver, and resuming looks for the next.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(&mut self, _ctx: &mut SearchContext, _choice: usize) -> PredicateResult {
        // Suspend predicate never retries
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

/// Implement TerminalPredicate for SuspendPredicate.
impl TerminalPredicate for SuspendPredicate {}
