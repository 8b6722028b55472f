// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-popcount enumeration of bit patterns.
//!
//! Both iterators produce every `width`-bit pattern with exactly `weight` bits
//! set, in strictly increasing numeric order, starting from `2^weight - 1`.
//!
//! - [`SameWeightWords`] works on native integers with the same-popcount
//!   successor trick and handles widths up to 128 bits.
//! - [`SameWeightBits`] simulates the same ripple over an explicit bit array
//!   and has no width limit.
//!
//! # Examples
//!
//! ```
//! use dihedral_homometry::combinations::{next_same_weight, SameWeightWords};
//!
//! assert_eq!(next_same_weight(0b0111), Some(0b1011));
//! let all: Vec<u128> = SameWeightWords::new(4, 2).unwrap().collect();
//! assert_eq!(all, vec![0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100]);
//! ```

pub mod bits;
pub mod words;

pub use bits::SameWeightBits;
pub use words::{next_same_weight, SameWeightWords};

use crate::error::{Error, Result};

/// Binomial coefficient `C(n, k)`, or `None` if it does not fit a `u64`.
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // result * (n - i) / (i + 1) stays integral at every step
        result = result.checked_mul((n - i) as u128)? / (i as u128 + 1);
        if result > u64::MAX as u128 {
            return None;
        }
    }
    Some(result as u64)
}

/// Number of patterns the iterators produce for `(width, weight)`.
///
/// Fails with `ArithmeticLimit` when the count does not fit a `u64`, which
/// bounds how many choices a single run can make.
pub fn pattern_count(width: usize, weight: usize) -> Result<u64> {
    binomial(width, weight).ok_or_else(|| {
        Error::limit(format!(
            "C({}, {}) combinations do not fit a 64-bit counter",
            width, weight
        ))
    })
}
