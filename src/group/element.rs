// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Elements of D_2n.
//!
//! An element `(g, h)` stands for `t^g s^h`. Using `s t = t^-1 s`, the product
//! is
//!
//! ```text
//! (a, h) * (b, q) = (a + (-1)^h b, h xor q)
//! ```
//!
//! # Examples
//!
//! ```
//! use dihedral_homometry::group::Element;
//!
//! let r = Element::rotation(1);
//! let s = Element::new(0, true);
//! // s t s = t^-1
//! assert_eq!(s.compose(r, 5).compose(s, 5), Element::rotation(4));
//! assert_eq!(format!("{}", Element::new(2, true)), "(2,-)");
//! ```

use super::{rotate_add, rotate_sub};
use std::fmt;

/// A group element `t^rotation s^reflection`.
///
/// The rotation index is kept reduced modulo the group order by every
/// operation that takes the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element {
    rotation: usize,
    reflection: bool,
}

impl Element {
    /// The identity `(0, +)`.
    pub const IDENTITY: Element = Element {
        rotation: 0,
        reflection: false,
    };

    pub const fn new(rotation: usize, reflection: bool) -> Self {
        Self {
            rotation,
            reflection,
        }
    }

    /// The pure rotation `t^p`.
    pub const fn rotation(p: usize) -> Self {
        Self::new(p, false)
    }

    pub fn rotation_index(self) -> usize {
        self.rotation
    }

    pub fn is_reflection(self) -> bool {
        self.reflection
    }

    /// Coset index: 0 for `t^p`, 1 for `t^p s`.
    pub fn coset(self) -> usize {
        self.reflection as usize
    }

    /// Group product `self * other` in D_2n of the given order.
    pub fn compose(self, other: Element, order: usize) -> Element {
        let a = self.rotation % order;
        let b = other.rotation % order;
        let rotation = if self.reflection {
            rotate_sub(a, b, order)
        } else {
            rotate_add(a, b, order)
        };
        Element::new(rotation, self.reflection ^ other.reflection)
    }

    /// Group inverse. Reflections are involutions.
    pub fn inverse(self, order: usize) -> Element {
        if self.reflection {
            Element::new(self.rotation % order, true)
        } else {
            Element::rotation(rotate_sub(0, self.rotation % order, order))
        }
    }

    /// All 2N elements in search order: increasing rotation, and at each
    /// rotation the pure rotation before the reflection.
    pub fn all(order: usize) -> impl Iterator<Item = Element> {
        (0..order).flat_map(|p| [Element::new(p, false), Element::new(p, true)])
    }
}

impl fmt::Display for Element {
    /// Format as `(p,+)` for a rotation and `(p,-)` for a reflection.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.reflection { '-' } else { '+' };
        write!(f, "({},{})", self.rotation, sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        for e in Element::all(5) {
            assert_eq!(Element::IDENTITY.compose(e, 5), e);
            assert_eq!(e.compose(Element::IDENTITY, 5), e);
        }
    }

    #[test]
    fn test_presentation_relations() {
        let n = 7;
        let t = Element::rotation(1);
        let s = Element::new(0, true);

        let mut power = Element::IDENTITY;
        for _ in 0..n {
            power = power.compose(t, n);
        }
        assert_eq!(power, Element::IDENTITY); // t^n = 1
        assert_eq!(s.compose(s, n), Element::IDENTITY); // s^2 = 1
        assert_eq!(s.compose(t, n).compose(s, n), t.inverse(n)); // sts = t^-1
    }

    #[test]
    fn test_inverse() {
        for n in 1..6 {
            for e in Element::all(n) {
                assert_eq!(e.compose(e.inverse(n), n), Element::IDENTITY);
                assert_eq!(e.inverse(n).compose(e, n), Element::IDENTITY);
            }
        }
    }

    #[test]
    fn test_associativity() {
        let n = 4;
        for a in Element::all(n) {
            for b in Element::all(n) {
                for c in Element::all(n) {
                    assert_eq!(
                        a.compose(b, n).compose(c, n),
                        a.compose(b.compose(c, n), n)
                    );
                }
            }
        }
    }

    #[test]
    fn test_search_order() {
        let all: Vec<_> = Element::all(2).collect();
        assert_eq!(
            all,
            vec![
                Element::new(0, false),
                Element::new(0, true),
                Element::new(1, false),
                Element::new(1, true),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Element::rotation(3).to_string(), "(3,+)");
        assert_eq!(Element::new(0, true).to_string(), "(0,-)");
    }
}
