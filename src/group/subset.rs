// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Subsets of D_2n.
//!
//! A subset is stored as one bitset of 2N bits: bit `p` is set if `t^p` is a
//! member (coset 0) and bit `N + p` is set if `t^p s` is a member (coset 1).
//! Read as a little-endian integer, the bitset is the canonical encoding used
//! to identify subsets and to drive enumeration, so the two views cannot
//! disagree.
//!
//! # Examples
//!
//! ```
//! use dihedral_homometry::group::Subset;
//!
//! // N = 3: bits 0..3 are coset 0, bits 3..6 are coset 1.
//! let x = Subset::from_encoding(0b100_001, 3).unwrap();
//! assert_eq!(x.len(), 2);
//! assert_eq!(x.to_string(), "{0+,2-,}");
//! assert_eq!(x.encoding(), Some(0b100_001));
//! assert!(!x.is_pure_cyclic());
//! ```

use crate::error::{Error, Result};
use crate::group::Element;
use bitvec::prelude::*;
use std::cmp::Ordering;
use std::fmt;

/// Bit storage for subsets and enumeration.
pub type Bits = BitVec<u64, Lsb0>;

/// Widest encoding that converts to a native integer.
pub const MAX_ENCODING_BITS: usize = u128::BITS as usize;

/// An immutable subset of D_2n.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subset {
    order: usize,
    bits: Bits,
}

impl Subset {
    /// Build from an explicit sequence of 2N membership flags.
    pub fn from_bit_sequence(sequence: &[bool], order: usize) -> Result<Self> {
        Self::from_bits(sequence.iter().copied().collect(), order)
    }

    /// Build from a bitset of exactly 2N bits.
    pub fn from_bits(bits: Bits, order: usize) -> Result<Self> {
        if order == 0 {
            return Err(Error::invalid("group order must be positive"));
        }
        if bits.len() != 2 * order {
            return Err(Error::invalid(format!(
                "bit sequence has length {}, expected 2N = {}",
                bits.len(),
                2 * order
            )));
        }
        Ok(Self { order, bits })
    }

    /// Wrap a bitset the caller has already sized to 2N.
    pub(crate) fn from_parts(bits: Bits, order: usize) -> Self {
        debug_assert!(order > 0 && bits.len() == 2 * order);
        Self { order, bits }
    }

    /// Build from the canonical integer encoding.
    ///
    /// Bit `i` of `value` is coset-0 membership at rotation `i`, bit `N + i`
    /// coset-1 membership. Fails when 2N exceeds the integer width, or when
    /// `value` has bits at or above 2N.
    pub fn from_encoding(value: u128, order: usize) -> Result<Self> {
        if order == 0 {
            return Err(Error::invalid("group order must be positive"));
        }
        let width = order
            .checked_mul(2)
            .filter(|&w| w <= MAX_ENCODING_BITS)
            .ok_or_else(|| {
                Error::limit(format!(
                    "D_{} subsets need {} bits, more than a {}-bit encoding",
                    2 * order as u128,
                    2 * order as u128,
                    MAX_ENCODING_BITS,
                ))
            })?;
        if width < MAX_ENCODING_BITS && value >> width != 0 {
            return Err(Error::invalid(format!(
                "encoding {} has bits beyond the {} bits of D_{}",
                value,
                width,
                width
            )));
        }
        let mut bits = Bits::repeat(false, width);
        bits.store_le::<u128>(value);
        Ok(Self { order, bits })
    }

    /// Build from a list of group elements. Duplicates are ignored.
    pub fn from_members<I>(order: usize, members: I) -> Result<Self>
    where
        I: IntoIterator<Item = Element>,
    {
        if order == 0 {
            return Err(Error::invalid("group order must be positive"));
        }
        let mut bits = Bits::repeat(false, 2 * order);
        for e in members {
            if e.rotation_index() >= order {
                return Err(Error::invalid(format!(
                    "element {} is not in D_{}",
                    e,
                    2 * order
                )));
            }
            bits.set(e.coset() * order + e.rotation_index(), true);
        }
        Ok(Self { order, bits })
    }

    /// The N of D_2n.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Cardinality (number of members).
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// The underlying 2N-bit encoding.
    pub fn bits(&self) -> &BitSlice<u64, Lsb0> {
        &self.bits
    }

    /// Membership flags of one coset: `false` for `{t^p}`, `true` for `{t^p s}`.
    pub fn coset(&self, reflection: bool) -> &BitSlice<u64, Lsb0> {
        if reflection {
            &self.bits[self.order..]
        } else {
            &self.bits[..self.order]
        }
    }

    /// Member counts of coset 0 and coset 1.
    pub fn coset_counts(&self) -> (usize, usize) {
        (
            self.coset(false).count_ones(),
            self.coset(true).count_ones(),
        )
    }

    pub fn contains(&self, e: Element) -> bool {
        e.rotation_index() < self.order && self.bits[e.coset() * self.order + e.rotation_index()]
    }

    /// True if all members lie in a single coset.
    ///
    /// The empty subset counts as pure cyclic.
    pub fn is_pure_cyclic(&self) -> bool {
        let (c0, c1) = self.coset_counts();
        c0 == 0 || c1 == 0
    }

    /// The canonical encoding as an integer, if it fits 128 bits.
    pub fn encoding(&self) -> Option<u128> {
        if self.bits.len() <= MAX_ENCODING_BITS {
            Some(self.bits.load_le::<u128>())
        } else {
            None
        }
    }

    /// Identifier for reports: decimal encoding, or hexadecimal when the
    /// encoding is wider than 128 bits.
    pub fn label(&self) -> String {
        if let Some(value) = self.encoding() {
            return value.to_string();
        }
        let mut label = String::from("0x");
        for (i, chunk) in self.bits.chunks(64).rev().enumerate() {
            let word = chunk.load_le::<u64>();
            // only the leading word drops its zero padding
            if i == 0 {
                label.push_str(&format!("{:x}", word));
            } else {
                label.push_str(&format!("{:016x}", word));
            }
        }
        label
    }

    /// Members in rendering order: coset 0 by rotation, then coset 1.
    pub fn members(&self) -> impl Iterator<Item = Element> + '_ {
        let order = self.order;
        self.bits
            .iter_ones()
            .map(move |i| Element::new(i % order, i >= order))
    }

    /// The left translate `{g x : x in self}`.
    pub fn left_translate(&self, g: Element) -> Subset {
        self.map_members(|x| g.compose(x, self.order))
    }

    /// The right translate `{x g : x in self}`.
    pub fn right_translate(&self, g: Element) -> Subset {
        self.map_members(|x| x.compose(g, self.order))
    }

    fn map_members(&self, f: impl Fn(Element) -> Element) -> Subset {
        let mut bits = Bits::repeat(false, 2 * self.order);
        for x in self.members() {
            let y = f(x);
            bits.set(y.coset() * self.order + y.rotation_index(), true);
        }
        Subset {
            order: self.order,
            bits,
        }
    }

    /// Human-readable set notation, e.g. `{0+,1+,2-,}`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Subset {
    /// Coset-0 members suffixed `+`, then coset-1 members suffixed `-`, each
    /// followed by a comma.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for p in self.coset(false).iter_ones() {
            write!(f, "{}+,", p)?;
        }
        for p in self.coset(true).iter_ones() {
            write!(f, "{}-,", p)?;
        }
        write!(f, "}}")
    }
}

impl PartialOrd for Subset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Subset {
    /// Orders by group order, then by numeric value of the encoding.
    fn cmp(&self, other: &Self) -> Ordering {
        self.order.cmp(&other.order).then_with(|| {
            let high_first = |bits: &Bits| bits.iter().map(|b| *b).rev().collect::<Vec<bool>>();
            high_first(&self.bits).cmp(&high_first(&other.bits))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bit_sequence() {
        let x = Subset::from_bit_sequence(&[true, false, true, false, true, false], 3).unwrap();
        assert_eq!(x.order(), 3);
        assert_eq!(x.len(), 3);
        assert_eq!(x.coset_counts(), (2, 1));
        assert!(x.contains(Element::new(0, false)));
        assert!(x.contains(Element::new(2, false)));
        assert!(x.contains(Element::new(1, true)));
        assert!(!x.contains(Element::new(0, true)));
        assert_eq!(x.to_string(), "{0+,2+,1-,}");
    }

    #[test]
    fn test_from_bit_sequence_rejects_bad_input() {
        assert!(matches!(
            Subset::from_bit_sequence(&[true, false], 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Subset::from_bit_sequence(&[true, false, true], 2),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_encoding() {
        let x = Subset::from_encoding(0b0110_1001, 4).unwrap();
        assert_eq!(x.to_string(), "{0+,3+,1-,2-,}");
        assert_eq!(x.encoding(), Some(0b0110_1001));
    }

    #[test]
    fn test_from_encoding_limits() {
        assert!(matches!(
            Subset::from_encoding(1, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Subset::from_encoding(1, 65),
            Err(Error::ArithmeticLimit(_))
        ));
        // 2N = 6 bits, bit 6 is out of range.
        assert!(matches!(
            Subset::from_encoding(1 << 6, 3),
            Err(Error::InvalidArgument(_))
        ));
        let widest = Subset::from_encoding(u128::MAX, 64).unwrap();
        assert_eq!(widest.len(), 128);
        assert_eq!(widest.encoding(), Some(u128::MAX));
    }

    #[test]
    fn test_encoding_round_trip_small() {
        for n in 1..=4 {
            for e in 0..(1u128 << (2 * n)) {
                let x = Subset::from_encoding(e, n).unwrap();
                assert_eq!(x.encoding(), Some(e));
                assert_eq!(x.len(), e.count_ones() as usize);
            }
        }
    }

    #[test]
    fn test_is_pure_cyclic() {
        // N = 4, coset 0 full, coset 1 empty.
        let full_rotations = Subset::from_encoding(0b0000_1111, 4).unwrap();
        assert!(full_rotations.is_pure_cyclic());

        let reflections_only = Subset::from_encoding(0b1010_0000, 4).unwrap();
        assert!(reflections_only.is_pure_cyclic());

        let empty = Subset::from_encoding(0, 4).unwrap();
        assert!(empty.is_empty());
        assert!(empty.is_pure_cyclic());

        let mixed = Subset::from_encoding(0b0001_0001, 4).unwrap();
        assert!(!mixed.is_pure_cyclic());
    }

    #[test]
    fn test_render_empty_and_full() {
        assert_eq!(Subset::from_encoding(0, 2).unwrap().render(), "{}");
        assert_eq!(
            Subset::from_encoding(0b1111, 2).unwrap().render(),
            "{0+,1+,0-,1-,}"
        );
    }

    #[test]
    fn test_from_members() {
        let x = Subset::from_members(
            5,
            [Element::new(4, true), Element::new(0, false), Element::new(4, true)],
        )
        .unwrap();
        assert_eq!(x.len(), 2);
        assert_eq!(x.to_string(), "{0+,4-,}");
        let members: Vec<_> = x.members().collect();
        assert_eq!(members, vec![Element::new(0, false), Element::new(4, true)]);

        assert!(Subset::from_members(3, [Element::new(3, false)]).is_err());
    }

    #[test]
    fn test_translate_by_identity() {
        let x = Subset::from_encoding(0b011_101, 3).unwrap();
        assert_eq!(x.left_translate(Element::IDENTITY), x);
        assert_eq!(x.right_translate(Element::IDENTITY), x);
    }

    #[test]
    fn test_translate_by_rotation() {
        // {0+, 0-} in D_6
        let x = Subset::from_encoding(0b001_001, 3).unwrap();
        let t = Element::rotation(1);
        // t * t^0 = t^1, t * s = t s
        assert_eq!(x.left_translate(t).to_string(), "{1+,1-,}");
        // t^0 * t = t, s * t = t^-1 s
        assert_eq!(x.right_translate(t).to_string(), "{1+,2-,}");
    }

    #[test]
    fn test_translate_by_reflection_swaps_cosets() {
        let x = Subset::from_encoding(0b000_011, 3).unwrap(); // {0+,1+}
        let s = Element::new(0, true);
        assert_eq!(x.right_translate(s).to_string(), "{0-,1-,}");
        assert_eq!(x.left_translate(s).to_string(), "{0-,2-,}");
    }

    #[test]
    fn test_label() {
        assert_eq!(Subset::from_encoding(33, 3).unwrap().label(), "33");

        let mut bits = Bits::repeat(false, 130);
        bits.set(0, true);
        bits.set(129, true);
        let wide = Subset::from_bits(bits, 65).unwrap();
        assert_eq!(wide.encoding(), None);
        assert_eq!(wide.label(), "0x200000000000000000000000000000001");

        // inner words keep their leading zeros
        let mut bits = Bits::repeat(false, 130);
        bits.set(64, true);
        bits.set(128, true);
        let padded = Subset::from_bits(bits, 65).unwrap();
        assert_eq!(padded.label(), "0x100000000000000010000000000000000");
    }

    #[test]
    fn test_numeric_ordering() {
        let a = Subset::from_encoding(0b010_001, 3).unwrap();
        let b = Subset::from_encoding(0b100_000, 3).unwrap();
        let c = Subset::from_encoding(0b100_001, 3).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }
}
