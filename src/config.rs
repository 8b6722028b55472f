// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! A [`SearchConfig`] fixes everything a run depends on. It is built with
//! [`SearchConfig::new`] and the `with_*` methods, and checked once by
//! [`SearchConfig::validate`] before the pipeline starts.

use crate::combinations::pattern_count;
use crate::error::{Error, Result};
use crate::group::Action;
use strum_macros::{Display, EnumString};

/// Default number of visited subsets between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1_000_000;

/// Which subsets the enumeration visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Enumeration {
    /// Only subsets containing `(0,+)`: patterns of `P - 1` ones in `2N - 1`
    /// bits, mapped to the encoding `1 + 2x`. Every orbit that is not pure
    /// cyclic has a representative here.
    #[default]
    Anchored,
    /// Every subset of cardinality P.
    Full,
}

impl Enumeration {
    /// `(width, weight)` of the bit patterns enumerated for `(order, cardinality)`.
    pub fn pattern_shape(self, order: usize, cardinality: usize) -> (usize, usize) {
        match self {
            Enumeration::Anchored => (2 * order - 1, cardinality.saturating_sub(1)),
            Enumeration::Full => (2 * order, cardinality),
        }
    }

    /// Number of candidates visited for `(order, cardinality)`.
    ///
    /// Anchored enumeration of cardinality 0 is empty: no subset of size 0
    /// contains `(0,+)`.
    pub fn pattern_count(self, order: usize, cardinality: usize) -> Result<u64> {
        if self == Enumeration::Anchored && cardinality == 0 {
            return Ok(0);
        }
        let (width, weight) = self.pattern_shape(order, cardinality);
        pattern_count(width, weight)
    }
}

/// Parameters of one homometry search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// N, for the group D_2n.
    pub order: usize,
    /// P, the cardinality of the subsets enumerated.
    pub cardinality: usize,
    /// Which interval vector defines homometry. Deduplication uses the other.
    pub action: Action,
    pub enumeration: Enumeration,
    /// Keep each orbit representative's interval vector in the table.
    pub cache_vectors: bool,
    /// Search for a complementary-action witness for each pair.
    pub cross_search: bool,
    /// Subsets between progress log lines; 0 disables them.
    pub progress_interval: u64,
}

impl SearchConfig {
    /// Anchored enumeration, no vector cache, cross search on.
    ///
    /// Fails with `InvalidArgument` if `order` is 0 or `cardinality > 2 * order`.
    pub fn new(order: usize, cardinality: usize, action: Action) -> Result<Self> {
        if order == 0 {
            return Err(Error::invalid("group order N must be at least 1"));
        }
        if cardinality > 2 * order {
            return Err(Error::invalid(format!(
                "cardinality {} exceeds the {} elements of D_{}",
                cardinality,
                2 * order,
                2 * order
            )));
        }
        Ok(Self {
            order,
            cardinality,
            action,
            enumeration: Enumeration::default(),
            cache_vectors: false,
            cross_search: true,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        })
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    pub fn with_enumeration(mut self, enumeration: Enumeration) -> Self {
        self.enumeration = enumeration;
        self
    }

    pub fn with_cache_vectors(mut self, cache_vectors: bool) -> Self {
        self.cache_vectors = cache_vectors;
        self
    }

    pub fn with_cross_search(mut self, cross_search: bool) -> Self {
        self.cross_search = cross_search;
        self
    }

    pub fn with_progress_interval(mut self, progress_interval: u64) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    /// Width in bits of a subset of D_2n.
    pub fn subset_width(&self) -> usize {
        2 * self.order
    }

    /// Check the configuration and return how many patterns the run visits.
    ///
    /// The pattern count must fit a `u64` and the platform's `usize`, or the
    /// run fails with `ArithmeticLimit`.
    pub fn validate(&self) -> Result<u64> {
        if self.order == 0 {
            return Err(Error::invalid("group order N must be at least 1"));
        }
        if self.cardinality > self.subset_width() {
            return Err(Error::invalid(format!(
                "cardinality {} exceeds the {} elements of D_{}",
                self.cardinality,
                self.subset_width(),
                self.subset_width()
            )));
        }
        let count = self
            .enumeration
            .pattern_count(self.order, self.cardinality)?;
        if usize::try_from(count).is_err() {
            return Err(Error::limit(format!(
                "{} patterns exceed the platform's address range",
                count
            )));
        }
        Ok(count)
    }
}
