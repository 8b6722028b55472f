// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ClassifyPredicate: discards candidates that cannot start a new orbit.
//!
//! A candidate is dropped if it is pure cyclic, or if it is a translate of an
//! existing representative under the action complementary to the one being
//! searched. Such translates share their interval vector trivially.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::interval::interval_vector;
use crate::state::Counters;
use tracing::trace;

#[derive(Debug, Default)]
pub struct ClassifyPredicate;

impl Predicate for ClassifyPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        let Some(x) = ctx.state.candidate.as_ref() else {
            return PredicateResult::Failure;
        };
        if x.is_pure_cyclic() {
            trace!("[Search] {} is pure cyclic", x);
            ctx.statistics.increment_counter(Counters::PureCyclicSkipped);
            return PredicateResult::Failure;
        }

        let action = ctx.config.action;
        let vector = ctx.config.cache_vectors.then(|| interval_vector(x, action));
        if let Some(index) = ctx
            .state
            .orbits
            .find_translate(x, action.complement(), vector.as_ref())
        {
            trace!(
                "[Search] {} is a {} translate of orbit {}",
                x,
                action.complement(),
                index
            );
            ctx.statistics.increment_counter(Counters::TranslatesSkipped);
            return PredicateResult::Failure;
        }

        ctx.state.candidate_vector = vector;
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Classify"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::group::{Action, Subset};

    fn classify(ctx: &mut SearchContext, value: u128) -> PredicateResult {
        ctx.state.candidate = Some(Subset::from_encoding(value, ctx.config.order).unwrap());
        ClassifyPredicate.try_pred(ctx)
    }

    #[test]
    fn test_pure_cyclic_is_skipped() {
        let mut ctx = SearchContext::new(SearchConfig::new(3, 2, Action::Left).unwrap());
        assert_eq!(classify(&mut ctx, 0b000_011), PredicateResult::Failure);
        assert_eq!(classify(&mut ctx, 0b011_000), PredicateResult::Failure);
        assert_eq!(ctx.statistics.get(Counters::PureCyclicSkipped), 2);
    }

    #[test]
    fn test_dedup_uses_complementary_action() {
        // right search dedups by left translation
        let mut ctx = SearchContext::new(SearchConfig::new(3, 2, Action::Right).unwrap());
        ctx.state.orbits.push(Subset::from_encoding(0b001_001, 3).unwrap(), None);
        assert_eq!(classify(&mut ctx, 0b010_010), PredicateResult::Failure);
        assert_eq!(classify(&mut ctx, 0b100_010), PredicateResult::Success);
        assert_eq!(ctx.statistics.get(Counters::TranslatesSkipped), 1);
    }

    #[test]
    fn test_cached_vector_is_passed_on() {
        let config = SearchConfig::new(3, 2, Action::Left)
            .unwrap()
            .with_cache_vectors(true);
        let mut ctx = SearchContext::new(config);
        assert_eq!(classify(&mut ctx, 0b001_001), PredicateResult::Success);
        assert!(ctx.state.candidate_vector.is_some());
    }
}
