// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Translation equivalence of subsets.
//!
//! Two subsets X and Y are left (right) translates if some element `(p, q)`
//! satisfies `(p, q) X = Y` (`X (p, q) = Y`). The group is small, so the check
//! is exhaustive: for each rotation `p` the two hypotheses `q = 0` and `q = 1`
//! are scored by counting matching positions over both cosets, and a
//! hypothesis that matches all 2N positions is a translation.
//!
//! Coset index arithmetic for `Y = g X`:
//!
//! ```text
//! left,  q = 0:  X0[i] = Y0[i + p]   X1[i] = Y1[i + p]
//! left,  q = 1:  X0[i] = Y1[p - i]   X1[i] = Y0[p - i]
//! right, q = 0:  X0[i] = Y0[i + p]   X1[i] = Y1[i - p]
//! right, q = 1:  X0[i] = Y1[i + p]   X1[i] = Y0[i - p]
//! ```

use super::{rotate_add, rotate_sub, Action, Element, Subset};

/// True if `y = g x` for some `g` in D_2n.
pub fn is_left_translate(x: &Subset, y: &Subset) -> bool {
    find_translation(x, y, Action::Left).is_some()
}

/// True if `y = x g` for some `g` in D_2n.
pub fn is_right_translate(x: &Subset, y: &Subset) -> bool {
    find_translation(x, y, Action::Right).is_some()
}

/// True if `y` is a translate of `x` under the given action.
pub fn is_translate(x: &Subset, y: &Subset, action: Action) -> bool {
    find_translation(x, y, action).is_some()
}

/// The first element carrying `x` to `y` under `action`, scanning rotations
/// in increasing order and `q = 0` before `q = 1`.
///
/// Subsets of different order or cardinality are never translates.
pub fn find_translation(x: &Subset, y: &Subset, action: Action) -> Option<Element> {
    let n = x.order();
    if n != y.order() || x.len() != y.len() {
        return None;
    }
    let (x0, x1) = (x.coset(false), x.coset(true));
    let (y0, y1) = (y.coset(false), y.coset(true));

    for p in 0..n {
        let mut rotated = 0;
        let mut reflected = 0;
        for i in 0..n {
            match action {
                Action::Left => {
                    let forward = rotate_add(i, p, n);
                    let mirrored = rotate_sub(p, i, n);
                    rotated += (x0[i] == y0[forward]) as usize;
                    rotated += (x1[i] == y1[forward]) as usize;
                    reflected += (x0[i] == y1[mirrored]) as usize;
                    reflected += (x1[i] == y0[mirrored]) as usize;
                }
                Action::Right => {
                    let forward = rotate_add(i, p, n);
                    let backward = rotate_sub(i, p, n);
                    rotated += (x0[i] == y0[forward]) as usize;
                    rotated += (x1[i] == y1[backward]) as usize;
                    reflected += (x0[i] == y1[forward]) as usize;
                    reflected += (x1[i] == y0[backward]) as usize;
                }
            }
        }
        if rotated == 2 * n {
            return Some(Element::new(p, false));
        }
        if reflected == 2 * n {
            return Some(Element::new(p, true));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subset(value: u128, n: usize) -> Subset {
        Subset::from_encoding(value, n).unwrap()
    }

    #[test]
    fn test_self_is_translate() {
        for value in 0..64 {
            let x = subset(value, 3);
            assert!(is_left_translate(&x, &x));
            assert!(is_right_translate(&x, &x));
            assert_eq!(find_translation(&x, &x, Action::Left), Some(Element::IDENTITY));
        }
    }

    #[test]
    fn test_witness_matches_group_product() {
        let n = 5;
        let x = Subset::from_members(
            n,
            [Element::new(0, false), Element::new(1, false), Element::new(3, true)],
        )
        .unwrap();
        for g in Element::all(n) {
            let left = x.left_translate(g);
            let found = find_translation(&x, &left, Action::Left).unwrap();
            assert_eq!(x.left_translate(found), left);

            let right = x.right_translate(g);
            let found = find_translation(&x, &right, Action::Right).unwrap();
            assert_eq!(x.right_translate(found), right);
        }
    }

    #[test]
    fn test_left_and_right_orbits_differ() {
        // {0+,0-} in D_6: right orbit is {0+0-, 1+2-, 2+1-},
        // left orbit is {0+0-, 1+1-, 2+2-}.
        let x = subset(0b001_001, 3);
        let diagonal = subset(0b010_010, 3); // {1+,1-}
        let anti = subset(0b100_010, 3); // {1+,2-}

        assert!(is_left_translate(&x, &diagonal));
        assert!(!is_right_translate(&x, &diagonal));
        assert!(is_right_translate(&x, &anti));
        assert!(!is_left_translate(&x, &anti));
    }

    #[test]
    fn test_different_cardinality_is_not_translate() {
        let x = subset(0b001_001, 3);
        let y = subset(0b011_001, 3);
        assert!(!is_translate(&x, &y, Action::Left));
        assert!(!is_translate(&x, &y, Action::Right));
    }

    #[test]
    fn test_different_order_is_not_translate() {
        let x = subset(0b01_01, 2);
        let y = subset(0b001_001, 3);
        assert!(!is_left_translate(&x, &y));
    }
}
