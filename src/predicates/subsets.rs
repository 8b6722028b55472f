// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SubsetsPredicate: the enumeration choice point.
//!
//! One choice per bit pattern of the run. Choices are consumed in order, so
//! each `retry_pred` advances the underlying iterator by one pattern and
//! places the corresponding subset in `ctx.state.candidate`.

use crate::combinations::{SameWeightBits, SameWeightWords};
use crate::config::{Enumeration, SearchConfig};
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::error::Result;
use crate::group::subset::MAX_ENCODING_BITS;
use crate::group::{Bits, Subset};
use crate::state::Counters;
use bitvec::field::BitField;
use tracing::{debug, info};

/// Pattern source: native words while subsets fit 128 bits, bit arrays beyond.
#[derive(Debug)]
enum Patterns {
    Words(SameWeightWords),
    Bits(SameWeightBits),
}

#[derive(Debug)]
pub struct SubsetsPredicate {
    patterns: Patterns,
    order: usize,
    anchored: bool,
    count: usize,
    progress_interval: u64,
}

impl SubsetsPredicate {
    /// Fails if the configuration does not validate.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let count = config.validate()?;
        let (width, weight) = config
            .enumeration
            .pattern_shape(config.order, config.cardinality);
        let patterns = if config.subset_width() <= MAX_ENCODING_BITS {
            Patterns::Words(SameWeightWords::new(width, weight)?)
        } else {
            Patterns::Bits(SameWeightBits::new(width, weight))
        };
        Ok(Self {
            patterns,
            order: config.order,
            anchored: config.enumeration == Enumeration::Anchored,
            // validate() checked the count fits usize
            count: count as usize,
            progress_interval: config.progress_interval,
        })
    }

    /// Number of subsets this predicate offers.
    pub fn count(&self) -> usize {
        self.count
    }

    fn next_bits(&mut self) -> Option<Bits> {
        let width = 2 * self.order;
        match &mut self.patterns {
            Patterns::Words(words) => {
                let pattern = words.next()?;
                let value = if self.anchored {
                    (pattern << 1) | 1
                } else {
                    pattern
                };
                let mut bits = Bits::repeat(false, width);
                bits.store_le::<u128>(value);
                Some(bits)
            }
            Patterns::Bits(arrays) => {
                let pattern = arrays.next()?;
                if self.anchored {
                    let mut bits = Bits::with_capacity(width);
                    bits.push(true);
                    bits.extend_from_bitslice(pattern.as_bitslice());
                    Some(bits)
                } else {
                    Some(pattern)
                }
            }
        }
    }

    fn report_progress(&self, ctx: &SearchContext) {
        let visited = ctx.statistics.get(Counters::SubsetsVisited);
        if self.progress_interval > 0 && visited % self.progress_interval == 0 {
            info!(
                "[Search] {} of {} subsets visited, {} orbits, {} homometric pairs",
                visited,
                self.count,
                ctx.statistics.get(Counters::OrbitsFound),
                ctx.statistics.get(Counters::HomometricPairs)
            );
        }
    }
}

impl Predicate for SubsetsPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
        debug!("[Search] Enumerating {} candidate subsets", self.count);
        if self.count == 0 {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(self.count)
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _choice: usize) -> PredicateResult {
        let Some(bits) = self.next_bits() else {
            return PredicateResult::Failure;
        };
        ctx.statistics.increment_counter(Counters::SubsetsVisited);
        self.report_progress(ctx);
        ctx.state.candidate = Some(Subset::from_parts(bits, self.order));
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Subsets"
    }
}
