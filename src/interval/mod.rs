// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interval vectors of subsets of D_2n.
//!
//! The interval vector of X is a histogram of the "displacement" between every
//! ordered pair of members. It has two halves of length N: `same` counts pairs
//! within one coset, `cross` counts pairs across the cosets. Every ordered
//! pair lands in exactly one bucket, so the entries sum to `|X|^2`.
//!
//! Index arithmetic, with `X0`, `X1` the coset flags:
//!
//! ```text
//! left   same[k]  += X0[i] X0[j] + X1[i] X1[j]               (i - j) = k
//!        cross[k] += X1[i] X0[j] + X0[i] X1[j]               (i + j) = k
//! right  same[k]  += X0[i] X0[j] at (j - i) = k,  X1[i] X1[j] at (i - j) = k
//!        cross[k] += X0[i] X1[j] at (j - i) = k,  X1[i] X0[j] at (i - j) = k
//! ```
//!
//! The left vector is unchanged by right translation and the right vector by
//! left translation. Two subsets are left (right) homometric when their left
//! (right) vectors are equal.
//!
//! The `is_*_homometric` predicates compare correlation counts offset by
//! offset instead of building both vectors; they agree with vector equality.

pub mod cross;

pub use cross::find_cross_witness;

use crate::group::{rotate_add, rotate_sub, Action, Subset};

/// The pair of histograms `(IV0, IV1)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalVector {
    /// Same-coset displacement counts (IV0).
    pub same: Vec<u32>,
    /// Cross-coset displacement counts (IV1).
    pub cross: Vec<u32>,
}

impl IntervalVector {
    fn zero(n: usize) -> Self {
        Self {
            same: vec![0; n],
            cross: vec![0; n],
        }
    }

    /// Total number of ordered pairs counted.
    pub fn total(&self) -> u64 {
        self.same
            .iter()
            .chain(self.cross.iter())
            .map(|&c| c as u64)
            .sum()
    }
}

/// Left interval vector of `x`.
pub fn left_interval_vector(x: &Subset) -> IntervalVector {
    let n = x.order();
    let (x0, x1) = (x.coset(false), x.coset(true));
    let mut iv = IntervalVector::zero(n);

    for i in 0..n {
        for j in 0..n {
            let difference = rotate_sub(i, j, n);
            let sum = rotate_add(i, j, n);
            iv.same[difference] += (x0[i] & x0[j]) as u32 + (x1[i] & x1[j]) as u32;
            iv.cross[sum] += (x1[i] & x0[j]) as u32 + (x0[i] & x1[j]) as u32;
        }
    }
    iv
}

/// Right interval vector of `x`.
pub fn right_interval_vector(x: &Subset) -> IntervalVector {
    let n = x.order();
    let (x0, x1) = (x.coset(false), x.coset(true));
    let mut iv = IntervalVector::zero(n);

    for i in 0..n {
        for j in 0..n {
            let forward = rotate_sub(j, i, n);
            let backward = rotate_sub(i, j, n);
            iv.same[forward] += (x0[i] & x0[j]) as u32;
            iv.same[backward] += (x1[i] & x1[j]) as u32;
            iv.cross[forward] += (x0[i] & x1[j]) as u32;
            iv.cross[backward] += (x1[i] & x0[j]) as u32;
        }
    }
    iv
}

/// Interval vector for the given action.
pub fn interval_vector(x: &Subset, action: Action) -> IntervalVector {
    match action {
        Action::Left => left_interval_vector(x),
        Action::Right => right_interval_vector(x),
    }
}

/// True if `x` and `y` have equal left interval vectors.
pub fn is_left_homometric(x: &Subset, y: &Subset) -> bool {
    is_homometric(x, y, Action::Left)
}

/// True if `x` and `y` have equal right interval vectors.
pub fn is_right_homometric(x: &Subset, y: &Subset) -> bool {
    is_homometric(x, y, Action::Right)
}

/// Homometry under `action`, decided offset by offset.
///
/// The same-coset correlation at offset `k` is `sum_j X0[j] X0[j+k] + X1[j]
/// X1[j+k]` for both actions. The cross-coset correlation is
/// `sum_j X0[j] X1[k-j]` for the left action and `sum_j X0[j] X1[j+k]` for the
/// right; each is half of the corresponding interval vector entry.
pub fn is_homometric(x: &Subset, y: &Subset, action: Action) -> bool {
    let n = x.order();
    if n != y.order() || x.len() != y.len() {
        return false;
    }
    (0..n).all(|k| same_correlation(x, k) == same_correlation(y, k))
        && (0..n).all(|k| cross_correlation(x, k, action) == cross_correlation(y, k, action))
}

fn same_correlation(x: &Subset, k: usize) -> u32 {
    let n = x.order();
    let (x0, x1) = (x.coset(false), x.coset(true));
    (0..n)
        .map(|j| {
            let shifted = rotate_add(j, k, n);
            (x0[j] & x0[shifted]) as u32 + (x1[j] & x1[shifted]) as u32
        })
        .sum()
}

fn cross_correlation(x: &Subset, k: usize, action: Action) -> u32 {
    let n = x.order();
    let (x0, x1) = (x.coset(false), x.coset(true));
    (0..n)
        .map(|j| {
            let partner = match action {
                Action::Left => rotate_sub(k, j, n),
                Action::Right => rotate_add(j, k, n),
            };
            (x0[j] & x1[partner]) as u32
        })
        .sum()
}
