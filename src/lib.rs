// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of homometric subsets in dihedral groups.
//!
//! The dihedral group D_2n acts on itself by left and by right
//! multiplication. Each action gives an interval vector for a subset X of
//! D_2n, counting the displacements between members of X. Two subsets are
//! left (right) homometric when their left (right) interval vectors agree.
//! Translates under the *other* action are homometric for trivial reasons,
//! so the search keeps one representative per such translation class and
//! reports the non-trivial pairs. This generalizes the Z-relation of
//! pitch-class set theory from cyclic to dihedral groups.
//!
//! # Architecture
//!
//! ## Algebra
//!
//! - [`group`]: elements, subsets as 2N-bit bitsets, translation tests
//! - [`interval`]: left and right interval vectors, homometry, and the
//!   cross-homometry witness search
//! - [`combinations`]: fixed-popcount enumeration of bit patterns
//!
//! ## Search
//!
//! A run is a program of predicates on a small backtracking [`engine`]:
//!
//! 1. **SubsetsPredicate**: one choice per candidate subset
//! 2. **ClassifyPredicate**: drop pure cyclic subsets and known translates
//! 3. **HomometryPredicate**: add the new orbit, one choice per homometric partner
//! 4. **CrossWitnessPredicate**: look for a translate homometric under both actions
//!
//! The program suspends once per pair, and [`search::run`] streams each pair
//! to a [`report::PairSink`].
//!
//! # Example
//!
//! ```
//! use dihedral_homometry::config::SearchConfig;
//! use dihedral_homometry::group::Action;
//! use dihedral_homometry::state::{Counters, HomometricPair};
//!
//! let config = SearchConfig::new(4, 4, Action::Left).unwrap();
//! let mut pairs: Vec<HomometricPair> = Vec::new();
//! let statistics = dihedral_homometry::run(&config, &mut pairs).unwrap();
//! assert_eq!(statistics.get(Counters::OrbitsFound), 12);
//! assert_eq!(pairs.len(), 1);
//! ```

pub mod combinations;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod group;
pub mod interval;
pub mod predicates;
pub mod report;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use config::{Enumeration, SearchConfig};
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::{Error, Result};
pub use group::{Action, Element, Subset};
pub use interval::IntervalVector;
pub use search::run;
