// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selector for the left or right action of D_2n on itself.

use std::fmt;

/// Which side a group element multiplies from.
///
/// The same selector names the homometry type being searched (left or right
/// interval vector) and the kind of translation being tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
}

impl Action {
    /// The other side.
    ///
    /// Translates under the complementary action share an interval vector, so
    /// a search for `self`-homometric pairs deduplicates by
    /// `self.complement()` translation.
    pub fn complement(self) -> Self {
        match self {
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }

    /// Lower-case name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
        }
    }

    /// Capitalized name for report lines.
    pub fn title(self) -> &'static str {
        match self {
            Action::Left => "Left",
            Action::Right => "Right",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
