// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context.
//!
//! The SearchContext combines what one run needs:
//! - the immutable [`SearchConfig`]
//! - the mutable [`SearchState`] the predicates share
//! - the run's [`Statistics`]
//!
//! Each run owns its context, so independent runs never share a table.

use crate::config::SearchConfig;
use crate::state::{SearchState, Statistics};

#[derive(Debug)]
pub struct SearchContext {
    /// Run parameters
    pub config: SearchConfig,
    /// Mutable search state
    pub state: SearchState,
    /// Counters
    pub statistics: Statistics,
}

impl SearchContext {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            state: SearchState::new(),
            statistics: Statistics::new(),
        }
    }
}
