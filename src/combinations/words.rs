// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Same-popcount enumeration on native integers.

use crate::error::{Error, Result};

/// The smallest `y > x` with the same number of set bits.
///
/// Returns `None` for `x = 0` (no larger value has zero bits set) and when
/// the successor would not fit in 128 bits.
///
/// With `s` the lowest set bit of `x`, adding `s` ripples the lowest block of
/// ones into the next zero; the ones lost in the ripple are put back at the
/// bottom.
#[inline]
pub fn next_same_weight(x: u128) -> Option<u128> {
    if x == 0 {
        return None;
    }
    let smallest = x & x.wrapping_neg();
    let ripple = x.checked_add(smallest)?;
    let new_smallest = ripple & ripple.wrapping_neg();
    let ones = ((new_smallest / smallest) >> 1) - 1;
    Some(ripple | ones)
}

/// Iterator over all `width`-bit integers with `weight` bits set, ascending.
#[derive(Debug, Clone)]
pub struct SameWeightWords {
    width: usize,
    next: Option<u128>,
}

impl SameWeightWords {
    /// Iterate patterns of `weight` ones in `width` bits.
    ///
    /// Fails with `ArithmeticLimit` if `width` exceeds 128. A `weight` larger
    /// than `width` yields nothing.
    pub fn new(width: usize, weight: usize) -> Result<Self> {
        if width > u128::BITS as usize {
            return Err(Error::limit(format!(
                "{}-bit patterns do not fit a 128-bit word",
                width
            )));
        }
        let first = if weight > width {
            None
        } else if weight == u128::BITS as usize {
            Some(u128::MAX)
        } else {
            Some((1u128 << weight) - 1)
        };
        Ok(Self { width, next: first })
    }

    fn in_range(&self, value: u128) -> bool {
        self.width >= u128::BITS as usize || value >> self.width == 0
    }
}

impl Iterator for SameWeightWords {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        let current = self.next?;
        self.next = next_same_weight(current).filter(|&v| self.in_range(v));
        Some(current)
    }
}
