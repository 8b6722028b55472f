// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line argument parsing for d2n-homometry

use clap::{Parser, ValueEnum};
use dihedral_homometry::config::{Enumeration, SearchConfig, DEFAULT_PROGRESS_INTERVAL};
use dihedral_homometry::{Action, Result};
use std::path::{Path, PathBuf};

/// Enumerate subsets of D_2n and report left or right homometric pairs
#[derive(Parser, Debug)]
#[command(name = "d2n-homometry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// N, for the dihedral group D_2n of order 2N
    #[arg(value_name = "ORDER")]
    pub order: usize,

    /// Cardinality of the subsets
    #[arg(value_name = "CARDINALITY")]
    pub cardinality: usize,

    /// Which interval vector defines homometry
    #[arg(value_name = "DIRECTION", value_enum)]
    pub direction: Direction,

    /// Output file; omitted or "-" writes to standard output
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Enumerate every subset instead of those containing (0,+)
    #[arg(long)]
    pub all_subsets: bool,

    /// Keep interval vectors of orbit representatives in memory
    #[arg(long)]
    pub cache_vectors: bool,

    /// Skip the search for translates homometric under both actions
    #[arg(long)]
    pub no_cross_search: bool,

    /// Print the homometric family histogram to stderr
    #[arg(long)]
    pub summary: bool,

    /// With --summary, also run the other direction and count shared families
    #[arg(long, requires = "summary")]
    pub shared: bool,

    /// Subsets between progress messages (0 disables them)
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_every: u64,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Action::Left,
            Direction::Right => Action::Right,
        }
    }
}

impl Cli {
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        let level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        };

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(EnvFilter::new(level))
            .init();
    }

    /// The search configuration these arguments describe.
    pub fn config(&self) -> Result<SearchConfig> {
        let enumeration = if self.all_subsets {
            Enumeration::Full
        } else {
            Enumeration::Anchored
        };
        Ok(
            SearchConfig::new(self.order, self.cardinality, self.direction.into())?
                .with_enumeration(enumeration)
                .with_cache_vectors(self.cache_vectors)
                .with_cross_search(!self.no_cross_search)
                .with_progress_interval(self.progress_every),
        )
    }

    /// The output file, or `None` for standard output.
    pub fn output_path(&self) -> Option<&Path> {
        self.output
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}
