// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The homometry search driver.
//!
//! One run is a predicate program on the [`SearchEngine`]:
//!
//! ```text
//! Subsets -> Classify -> Homometry -> count pairs
//!         [-> CrossWitness -> count witnesses] -> Suspend
//! ```
//!
//! Every suspension carries one pair in `ctx.state.pair`, which the driver
//! hands to the sink before resuming. The run ends when the enumeration is
//! exhausted.

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::Result;
use crate::predicates::witness::has_witness;
use crate::predicates::{
    ClassifyPredicate, CrossWitnessPredicate, HomometryPredicate, SubsetsPredicate,
    SuspendPredicate,
};
use crate::report::PairSink;
use crate::state::{Counters, Statistics};
use tracing::{debug, info};

/// The predicate program for `config`.
pub fn build_engine(config: &SearchConfig) -> Result<SearchEngine> {
    let mut builder = EngineBuilder::new()
        .add(Box::new(SubsetsPredicate::new(config)?))
        .add(Box::new(ClassifyPredicate))
        .add(Box::new(HomometryPredicate))
        .add(Statistics::counting_predicate(Counters::HomometricPairs, None));
    if config.cross_search {
        builder = builder
            .add(Box::new(CrossWitnessPredicate))
            .add(Statistics::counting_predicate(
                Counters::CrossWitnesses,
                Some(has_witness),
            ));
    }
    Ok(builder.terminal(Box::new(SuspendPredicate)).build())
}

/// Run a search, streaming every homometric pair to `sink`.
///
/// The configuration is validated before anything is enumerated. Sink errors
/// end the run.
pub fn run<S: PairSink + ?Sized>(config: &SearchConfig, sink: &mut S) -> Result<Statistics> {
    let count = config.validate()?;
    let group = 2 * config.order;
    info!(
        "[Search] Building the collection of D_{} subsets of cardinality {} ({} {} candidates)",
        group, config.cardinality, count, config.enumeration
    );

    let mut engine = build_engine(config)?;
    let mut ctx = SearchContext::new(config.clone());
    while let Some(suspended) = engine.search(&mut ctx) {
        if let Some(pair) = ctx.state.pair.take() {
            sink.record(&pair)?;
        }
        engine = suspended;
    }
    sink.finish()?;

    let statistics = ctx.statistics;
    info!(
        "[Search] Found {} D_{} ensembles of cardinality {}",
        statistics.get(Counters::OrbitsFound),
        group,
        config.cardinality
    );
    info!(
        "[Search] {} {} homometric ensembles found",
        statistics.get(Counters::HomometricPairs),
        config.action
    );
    if config.cross_search {
        info!(
            "[Search] {} of them also {} homometric after translation",
            statistics.get(Counters::CrossWitnesses),
            config.action.complement()
        );
    }
    for (counter, value) in statistics.iter() {
        debug!("[Search] {}: {}", counter, value);
    }
    Ok(statistics)
}
