// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Same-popcount enumeration over an explicit bit array.
//!
//! The successor is the integer trick done by hand: clear the lowest set bit
//! and propagate the carry upwards, then refill the ones the ripple consumed
//! at the bottom. The carry leaving the top of the array marks the last
//! pattern (all ones packed at the high end).

use crate::group::Bits;
use bitvec::prelude::*;

/// Iterator over all `width`-bit arrays with `weight` bits set, in increasing
/// numeric order (bit 0 least significant).
#[derive(Debug, Clone)]
pub struct SameWeightBits {
    next: Option<Bits>,
}

impl SameWeightBits {
    /// A `weight` larger than `width` yields nothing.
    pub fn new(width: usize, weight: usize) -> Self {
        let next = (weight <= width).then(|| {
            let mut bits = Bits::repeat(false, width);
            bits[..weight].fill(true);
            bits
        });
        Self { next }
    }
}

/// The next array with the same popcount, or `None` after the last one.
pub fn ripple_successor(bits: &BitSlice<u64, Lsb0>) -> Option<Bits> {
    let smallest = bits.first_one()?;
    let mut next = bits.to_bitvec();

    next.set(smallest, false);
    let mut carry_at = smallest + 1;
    loop {
        if carry_at == next.len() {
            return None;
        }
        if next[carry_at] {
            next.set(carry_at, false);
            carry_at += 1;
        } else {
            next.set(carry_at, true);
            break;
        }
    }

    let refill = carry_at - smallest - 1;
    next[..refill].fill(true);
    Some(next)
}

impl Iterator for SameWeightBits {
    type Item = Bits;

    fn next(&mut self) -> Option<Bits> {
        let current = self.next.take()?;
        self.next = ripple_successor(&current);
        Some(current)
    }
}
