// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence over a shared [`SearchContext`].
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! The execution model is WAM-like:
//! 1. Call try_pred on each predicate
//! 2. If Success: advance to next predicate
//! 3. If Choices(n): enter choice mode, call retry_pred(0..n-1)
//! 4. If Failure: backtrack to previous stack entry
//! 5. If Suspend: pause and return control to caller
//!
//! A deterministic entry (one that answered `try_pred` without `Choices`) is
//! popped when the search backtracks into it; only choice points are retried.
//! Resuming a suspended engine backtracks out of the suspending predicate, so
//! a search that suspends once per solution enumerates all solutions.
//!
//! There is no trail: predicates that need to undo state on backtracking do
//! so in their own `retry_pred`.
//!
//! # Example
//!
//! ```
//! use dihedral_homometry::config::SearchConfig;
//! use dihedral_homometry::context::SearchContext;
//! use dihedral_homometry::engine::{EngineBuilder, Predicate, PredicateResult};
//! use dihedral_homometry::group::Action;
//! use dihedral_homometry::predicates::SuspendPredicate;
//!
//! #[derive(Debug)]
//! struct ThreeWays;
//!
//! impl Predicate for ThreeWays {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
//!         PredicateResult::Choices(3)
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SearchContext, _choice: usize) -> PredicateResult {
//!         PredicateResult::Success
//!     }
//! }
//!
//! let mut ctx = SearchContext::new(SearchConfig::new(3, 2, Action::Left).unwrap());
//! let mut engine = EngineBuilder::new()
//!     .add(Box::new(ThreeWays))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! let mut solutions = 0;
//! while let Some(resumed) = engine.search(&mut ctx) {
//!     solutions += 1;
//!     engine = resumed;
//! }
//! assert_eq!(solutions, 3);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const INITIAL_STACK_SIZE: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Whether try_pred has already run for this entry.
    called: bool,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,
}

impl StackEntry {
    fn new(predicate_index: usize) -> Self {
        Self {
            predicate_index,
            called: false,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// True while the top of the stack is a suspended predicate.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search to the next solution.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended; calling `search` on it continues from
    ///   the suspension point
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Solutions are communicated through `ctx`, not the return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or SUSPEND),
    /// or if `retry_pred` answers `Choices` or `Suspend`.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        self.try_count = 0;
        self.retry_count = 0;

        if self.suspended {
            self.suspended = false;
            self.stack.pop();
        } else {
            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }
            self.stack.clear();
            self.stack.push(StackEntry::new(0));
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None; // Search exhausted (all choices failed)
            };

            if !entry.in_choice_mode {
                if entry.called {
                    // Backtracked into a deterministic predicate
                    self.stack.pop();
                    continue;
                }
                entry.called = true;
                let pred_idx = entry.predicate_index;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx);

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                        }
                    }
                    PredicateResult::Suspend => {
                        self.suspended = true;
                        return Some(self);
                    }
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let (pred_idx, choice) = (entry.predicate_index, entry.current_choice);
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[pred_idx].name(),
                            result
                        );
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All WAM programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry::new(next_index));
    }

    /// Get statistics about the most recent call to [`search`](Self::search).
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builds a [`SearchEngine`] whose program ends in a terminal predicate.
///
/// ```
/// use dihedral_homometry::engine::EngineBuilder;
/// use dihedral_homometry::predicates::FailPredicate;
///
/// let engine = EngineBuilder::new()
///     .terminal(Box::new(FailPredicate))
///     .build();
/// # let _ = engine;
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate, closing the program.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// An [`EngineBuilder`] after its terminal predicate was added.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
