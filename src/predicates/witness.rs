// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CrossWitnessPredicate: attaches the cross-homometry outcome to the pair.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::interval::find_cross_witness;
use crate::state::CrossOutcome;
use tracing::debug;

#[derive(Debug, Default)]
pub struct CrossWitnessPredicate;

impl Predicate for CrossWitnessPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        let Some(pair) = ctx.state.pair.as_mut() else {
            return PredicateResult::Failure;
        };
        pair.cross = match find_cross_witness(&pair.earlier, &pair.later, pair.action) {
            Some(g) => CrossOutcome::Witness(g),
            None => CrossOutcome::NoWitness,
        };
        debug!("[Search] pair {} cross search: {:?}", pair.sequence, pair.cross);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "CrossWitness"
    }
}

/// Whether the current pair has a cross-homometry witness.
pub fn has_witness(ctx: &SearchContext) -> bool {
    matches!(
        ctx.state.pair,
        Some(ref pair) if matches!(pair.cross, CrossOutcome::Witness(_))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::group::{Action, Element, Subset};
    use crate::state::HomometricPair;

    #[test]
    fn test_witness_is_recorded() {
        let mut ctx = SearchContext::new(SearchConfig::new(5, 5, Action::Left).unwrap());
        ctx.state.pair = Some(HomometricPair {
            sequence: 0,
            action: Action::Left,
            earlier: Subset::from_encoding(107, 5).unwrap(),
            later: Subset::from_encoding(179, 5).unwrap(),
            cross: CrossOutcome::NotSearched,
        });
        assert!(!has_witness(&ctx));
        assert_eq!(CrossWitnessPredicate.try_pred(&mut ctx), PredicateResult::Success);
        assert_eq!(
            ctx.state.pair.as_ref().unwrap().cross,
            CrossOutcome::Witness(Element::new(3, false))
        );
        assert!(has_witness(&ctx));
    }
}
