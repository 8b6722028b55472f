// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cross-homometry search.
//!
//! A search under action A reports pairs (X, Y) that share their A-interval
//! vector but are not translates under the complementary action B. Every
//! B-translate of Y keeps Y's A-interval vector, so if some B-translate `Y'`
//! also matches X's B-interval vector then X and `Y'` are homometric under
//! both actions at once.

use super::interval_vector;
use crate::group::{Action, Element, Subset};

/// The first element `g` such that the `action.complement()`-translate of `y`
/// by `g` has the same complementary interval vector as `x`.
///
/// Candidates are scanned by increasing rotation, the pure rotation before the
/// reflection at each step. `None` once all 2N have been tried.
pub fn find_cross_witness(x: &Subset, y: &Subset, action: Action) -> Option<Element> {
    if x.order() != y.order() || x.len() != y.len() {
        return None;
    }
    let other = action.complement();
    let target = interval_vector(x, other);

    Element::all(x.order()).find(|&g| {
        let translate = match other {
            Action::Left => y.left_translate(g),
            Action::Right => y.right_translate(g),
        };
        interval_vector(&translate, other) == target
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::{is_homometric, left_interval_vector, right_interval_vector};

    fn subset(value: u128, n: usize) -> Subset {
        Subset::from_encoding(value, n).unwrap()
    }

    #[test]
    fn test_identity_translate_reproduces_interval_vector() {
        let y = subset(0b00111_01001, 5);
        assert_eq!(
            right_interval_vector(&y.right_translate(Element::IDENTITY)),
            right_interval_vector(&y)
        );
        assert_eq!(find_cross_witness(&y, &y, Action::Left), Some(Element::IDENTITY));
        assert_eq!(find_cross_witness(&y, &y, Action::Right), Some(Element::IDENTITY));
    }

    #[test]
    fn test_witness_for_left_search() {
        // {0+,1+,3+,0-,1-,} and {0+,1+,4+,0-,2-,} in D_10
        let x = subset(107, 5);
        let y = subset(179, 5);
        assert_eq!(left_interval_vector(&x), left_interval_vector(&y));

        let g = find_cross_witness(&x, &y, Action::Left).unwrap();
        assert_eq!(g, Element::new(3, false));
        let translate = y.right_translate(g);
        assert!(is_homometric(&x, &translate, Action::Left));
        assert!(is_homometric(&x, &translate, Action::Right));
    }

    #[test]
    fn test_witness_for_right_search() {
        let x = subset(107, 5);
        let y = subset(167, 5);
        assert_eq!(right_interval_vector(&x), right_interval_vector(&y));

        let g = find_cross_witness(&x, &y, Action::Right).unwrap();
        assert_eq!(g, Element::new(2, false));
        let translate = y.left_translate(g);
        assert!(is_homometric(&x, &translate, Action::Left));
        assert!(is_homometric(&x, &translate, Action::Right));
    }

    #[test]
    fn test_no_witness_between_different_coset_sizes() {
        // Coset sizes (3, 1) and (2, 2): translations only swap the sizes.
        let x = subset(0b0001_0111, 4);
        let y = subset(0b0011_0011, 4);
        assert_eq!(find_cross_witness(&x, &y, Action::Left), None);
        assert_eq!(find_cross_witness(&x, &y, Action::Right), None);
    }

    #[test]
    fn test_mismatched_cardinality() {
        let x = subset(0b0001_0111, 4);
        let y = subset(0b0001_0011, 4);
        assert_eq!(find_cross_witness(&x, &y, Action::Left), None);
    }
}
