// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The dihedral group D_2n and its subsets.
//!
//! D_2n is given by the presentation `<s, t | t^n = 1, s^2 = 1, sts = t^-1>`.
//! Every element is written `t^g s^h` with `g` in Z_n and `h` in {0, 1}, which
//! splits the group into two cosets: the rotations `{t^p}` and the
//! rotation-then-reflections `{t^p s}`.
//!
//! ## Module Structure
//!
//! - `action`: Left/right group action selector
//! - `element`: Group elements and their product
//! - `subset`: Subsets of D_2n stored as a 2N-bit bitset
//! - `translate`: Translation equivalence under either action

pub mod action;
pub mod element;
pub mod subset;
pub mod translate;

pub use action::Action;
pub use element::Element;
pub use subset::{Bits, Subset};
pub use translate::{find_translation, is_left_translate, is_right_translate, is_translate};

/// `(a + b) mod n` for rotation indices already reduced mod n.
#[inline]
pub(crate) fn rotate_add(a: usize, b: usize, n: usize) -> usize {
    (a + b) % n
}

/// `(a - b) mod n` for rotation indices already reduced mod n.
#[inline]
pub(crate) fn rotate_sub(a: usize, b: usize, n: usize) -> usize {
    (a + n - b) % n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modular_helpers() {
        assert_eq!(rotate_add(2, 2, 3), 1);
        assert_eq!(rotate_add(0, 0, 1), 0);
        assert_eq!(rotate_sub(0, 1, 3), 2);
        assert_eq!(rotate_sub(2, 2, 5), 0);
        assert_eq!(rotate_sub(1, 4, 5), 2);
    }
}
