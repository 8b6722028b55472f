// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Consumers of discovered pairs.
//!
//! The search streams each [`HomometricPair`] to a [`PairSink`] as soon as it
//! is found. Sinks compose: `Vec<HomometricPair>` collects, [`TextSink`]
//! writes the record format, [`Families`] groups pairs into homometric
//! families, and a tuple `(A, B)` feeds both of its members.

pub mod families;
pub mod text;

pub use families::Families;
pub use text::TextSink;

use crate::error::Result;
use crate::state::HomometricPair;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub trait PairSink {
    fn record(&mut self, pair: &HomometricPair) -> Result<()>;

    /// Called once after the last pair.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl PairSink for Vec<HomometricPair> {
    fn record(&mut self, pair: &HomometricPair) -> Result<()> {
        self.push(pair.clone());
        Ok(())
    }
}

impl<A: PairSink, B: PairSink> PairSink for (A, B) {
    fn record(&mut self, pair: &HomometricPair) -> Result<()> {
        self.0.record(pair)?;
        self.1.record(pair)
    }

    fn finish(&mut self) -> Result<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

impl<S: PairSink + ?Sized> PairSink for &mut S {
    fn record(&mut self, pair: &HomometricPair) -> Result<()> {
        (**self).record(pair)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Buffered writer to `path`, or to standard output for `None`.
///
/// Fails with `Error::Io` if the file cannot be created.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::group::{Action, Subset};
    use crate::state::CrossOutcome;

    fn pair() -> HomometricPair {
        HomometricPair {
            sequence: 0,
            action: Action::Left,
            earlier: Subset::from_encoding(107, 5).unwrap(),
            later: Subset::from_encoding(179, 5).unwrap(),
            cross: CrossOutcome::NotSearched,
        }
    }

    #[test]
    fn test_tee_feeds_both() {
        let mut sink = (Vec::new(), Vec::new());
        sink.record(&pair()).unwrap();
        sink.finish().unwrap();
        assert_eq!(sink.0.len(), 1);
        assert_eq!(sink.0, sink.1);
    }

    #[test]
    fn test_open_output_missing_directory() {
        let path = Path::new("/nonexistent-directory/for/output.txt");
        assert!(matches!(open_output(Some(path)), Err(Error::Io(_))));
    }
}
