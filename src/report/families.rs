// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Homometric families.
//!
//! Homometry is an equivalence relation, so the reported pairs link orbit
//! representatives into families: the connected components of the pair
//! graph. A family of size k is a "k-uple" of mutually homometric subsets.
//! Components are tracked with a union-find over the subsets seen.

use super::PairSink;
use crate::error::Result;
use crate::group::Subset;
use crate::state::HomometricPair;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Write;

#[derive(Debug, Default, Clone)]
pub struct Families {
    index: HashMap<Subset, usize>,
    subsets: Vec<Subset>,
    parent: Vec<usize>,
}

impl Families {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subsets that appear in at least one pair.
    pub fn subset_count(&self) -> usize {
        self.subsets.len()
    }

    fn intern(&mut self, subset: &Subset) -> usize {
        if let Some(&i) = self.index.get(subset) {
            return i;
        }
        let i = self.subsets.len();
        self.index.insert(subset.clone(), i);
        self.subsets.push(subset.clone());
        self.parent.push(i);
        i
    }

    fn root(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Join the families of `x` and `y`.
    pub fn link(&mut self, x: &Subset, y: &Subset) {
        let a = self.intern(x);
        let b = self.intern(y);
        let (ra, rb) = (self.root(a), self.root(b));
        if ra != rb {
            // keep the earlier-seen subset as the root
            let (low, high) = (ra.min(rb), ra.max(rb));
            self.parent[high] = low;
        }
    }

    /// All families, each sorted, in order of their smallest member.
    pub fn families(&self) -> Vec<Vec<Subset>> {
        let mut parent = self.parent.clone();
        let mut groups: HashMap<usize, Vec<Subset>> = HashMap::new();
        for i in 0..parent.len() {
            let mut r = i;
            while parent[r] != r {
                r = parent[r];
            }
            parent[i] = r;
            groups.entry(r).or_default().push(self.subsets[i].clone());
        }
        let mut families: Vec<Vec<Subset>> = groups
            .into_values()
            .map(|mut family| {
                family.sort();
                family
            })
            .collect();
        families.sort();
        families
    }

    /// Family size to number of families of that size.
    pub fn size_histogram(&self) -> BTreeMap<usize, usize> {
        histogram(&self.families())
    }

    /// Families that appear, with exactly the same members, in `other` too.
    ///
    /// Used to find the families homometric under both actions, from one
    /// left search and one right search of the same (N, P).
    pub fn shared_with(&self, other: &Families) -> Vec<Vec<Subset>> {
        let theirs: BTreeSet<Vec<Subset>> = other.families().into_iter().collect();
        self.families()
            .into_iter()
            .filter(|family| theirs.contains(family))
            .collect()
    }

    /// Print the histogram in `Number of k-uples: count` lines.
    pub fn write_summary<W: Write>(&self, out: W, heading: &str) -> Result<()> {
        write_histogram(out, heading, &self.families())
    }
}

/// A heading line, then one `Number of k-uples: count` line per family size.
pub fn write_histogram<W: Write>(
    mut out: W,
    heading: &str,
    families: &[Vec<Subset>],
) -> Result<()> {
    writeln!(out, "{}: {} homometric families", heading, families.len())?;
    for (size, count) in histogram(families) {
        writeln!(out, "  Number of {}-uples: {}", size, count)?;
    }
    Ok(())
}

/// Family size to number of families of that size.
pub fn histogram(families: &[Vec<Subset>]) -> BTreeMap<usize, usize> {
    let mut sizes = BTreeMap::new();
    for family in families {
        *sizes.entry(family.len()).or_insert(0) += 1;
    }
    sizes
}

impl PairSink for Families {
    fn record(&mut self, pair: &HomometricPair) -> Result<()> {
        self.link(&pair.earlier, &pair.later);
        Ok(())
    }
}
