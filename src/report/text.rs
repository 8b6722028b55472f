// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The text record format.
//!
//! ```text
//! ===== 0 ======
//! 107-179
//! {0+,1+,3+,0-,1-,}
//! {0+,1+,4+,0-,2-,}
//! <<<< Right homometric by right multiplication of B by (3,+) >>>>
//! *******************
//! ```
//!
//! The witness line is omitted when the cross search was disabled.

use super::PairSink;
use crate::error::Result;
use crate::state::{CrossOutcome, HomometricPair};
use std::io::Write;

/// Writes one record per pair to `W`.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The witness line's statement, if the cross search ran.
///
/// B is the later subset; the action named is the one complementary to the
/// search.
pub fn witness_statement(pair: &HomometricPair) -> Option<String> {
    let other = pair.action.complement();
    match pair.cross {
        CrossOutcome::NotSearched => None,
        CrossOutcome::Witness(g) => Some(format!(
            "{} homometric by {} multiplication of B by {}",
            other.title(),
            other.name(),
            g
        )),
        CrossOutcome::NoWitness => Some(format!(
            "No {} homometry obtained by {} multiplication of B",
            other.name(),
            other.name()
        )),
    }
}

impl<W: Write> PairSink for TextSink<W> {
    fn record(&mut self, pair: &HomometricPair) -> Result<()> {
        writeln!(self.out, "===== {} ======", pair.sequence)?;
        writeln!(self.out, "{}-{}", pair.earlier.label(), pair.later.label())?;
        writeln!(self.out, "{}", pair.earlier)?;
        writeln!(self.out, "{}", pair.later)?;
        if let Some(statement) = witness_statement(pair) {
            writeln!(self.out, "<<<< {} >>>>", statement)?;
        }
        writeln!(self.out, "*******************")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
