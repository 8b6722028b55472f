// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! HomometryPredicate: admits a new orbit and enumerates its partners.
//!
//! `try_pred` compares the classified candidate against every representative
//! in the table, appends it as a new representative, and offers one choice
//! per homometric partner. Each `retry_pred` publishes one pair.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::{Counters, CrossOutcome, HomometricPair};
use tracing::debug;

#[derive(Debug, Default)]
pub struct HomometryPredicate;

impl Predicate for HomometryPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        let Some(x) = ctx.state.candidate.take() else {
            return PredicateResult::Failure;
        };
        let vector = ctx.state.candidate_vector.take();
        let action = ctx.config.action;

        let matches = ctx
            .state
            .orbits
            .homometric_matches(&x, action, vector.as_ref());
        ctx.state.orbits.push(x, vector);
        ctx.statistics.increment_counter(Counters::OrbitsFound);
        ctx.state.matches = matches;

        if ctx.state.matches.is_empty() {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(ctx.state.matches.len())
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, choice: usize) -> PredicateResult {
        let orbits = &ctx.state.orbits;
        let (Some(earlier), Some(later)) = (
            ctx.state.matches.get(choice).and_then(|&i| orbits.get(i)),
            orbits.last(),
        ) else {
            return PredicateResult::Failure;
        };

        let pair = HomometricPair {
            sequence: ctx.statistics.get(Counters::HomometricPairs),
            action: ctx.config.action,
            earlier: earlier.subset.clone(),
            later: later.subset.clone(),
            cross: CrossOutcome::NotSearched,
        };
        debug!(
            "[Search] {} homometric pair {}: {} ~ {}",
            pair.action, pair.sequence, pair.earlier, pair.later
        );
        ctx.state.pair = Some(pair);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Homometry"
    }
}
