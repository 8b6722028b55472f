// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Discovered homometric pairs.

use crate::group::{Action, Element, Subset};

/// Result of the complementary-action witness search for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossOutcome {
    /// The search was disabled for this run.
    NotSearched,
    /// Translating the later subset by this element makes the pair
    /// homometric under both actions.
    Witness(Element),
    /// No translate of the later subset works.
    NoWitness,
}

/// Two orbit representatives with equal interval vectors under `action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomometricPair {
    /// 0-based position in the run's output.
    pub sequence: u64,
    pub action: Action,
    /// The representative already in the orbit table.
    pub earlier: Subset,
    /// The newly added representative.
    pub later: Subset,
    pub cross: CrossOutcome,
}

impl HomometricPair {
    pub fn witness(&self) -> Option<Element> {
        match self.cross {
            CrossOutcome::Witness(g) => Some(g),
            _ => None,
        }
    }
}
