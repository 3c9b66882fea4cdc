/*
cell.rs

Copyright 2026 Hexroutes Contributors

This file is part of Hexroutes.

Hexroutes is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexroutes is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexroutes. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Grid cells and their forcings.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Constraint painted onto a cell.
///
/// - `None` leaves the cell unconstrained (default).
/// - `Entrance` forces the cell to be a path entrance, where enemies come from.
/// - `Exit` forces the cell to be a path exit, where enemies leave.
/// - `NotTraversable` makes the cell impassable: it cannot be part of any path.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default, FromRepr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Forcing {
    #[default]
    None,
    Entrance,
    Exit,
    NotTraversable,
}

impl Forcing {
    /// All the forcings, ordered by their integer code.
    pub const ALL: [Forcing; 4] = [
        Forcing::None,
        Forcing::Entrance,
        Forcing::Exit,
        Forcing::NotTraversable,
    ];

    /// Integer code used in exported grids.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Name used in exported grids.
    pub fn name(self) -> &'static str {
        match self {
            Forcing::None => "NONE",
            Forcing::Entrance => "ENTRANCE",
            Forcing::Exit => "EXIT",
            Forcing::NotTraversable => "NOT_TRAVERSABLE",
        }
    }

    /// Forcing with the given export name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Forcing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A position in the grid with its forcing.
///
/// The row and the column never change after creation. Only the forcing can be updated.
/// Equality compares all the attributes, which makes two equal cells "identical".
/// Use [`Cell::cospatial`] to only compare positions.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    column: usize,
    forcing: Forcing,
}

impl Cell {
    /// Create a [`Cell`] object with no forcing.
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            forcing: Forcing::None,
        }
    }

    /// Row of the cell, counted from the top of the grid.
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The (row, column) pair.
    pub fn coordinates(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub fn forcing(&self) -> Forcing {
        self.forcing
    }

    /// Set the forcing. A cell only has one forcing at a time.
    pub fn set_forcing(&mut self, forcing: Forcing) {
        self.forcing = forcing;
    }

    /// Whether a path can go through the cell.
    pub fn is_traversable(&self) -> bool {
        self.forcing != Forcing::NotTraversable
    }

    pub fn is_entrance(&self) -> bool {
        self.forcing == Forcing::Entrance
    }

    pub fn is_exit(&self) -> bool {
        self.forcing == Forcing::Exit
    }

    /// Whether the two cells are at the same position, regardless of their forcing.
    pub fn cospatial(&self, other: &Cell) -> bool {
        self.row == other.row && self.column == other.column
    }

    /// Whether the two cells are at the same position and have the same forcing.
    pub fn identical(&self, other: &Cell) -> bool {
        self == other
    }

    /// Return a copy of the cell that keeps its forcing only if it is listed in `keep`.
    pub fn copy_keeping(&self, keep: &[Forcing]) -> Self {
        let mut copy: Cell = Cell::new(self.row, self.column);
        if keep.contains(&self.forcing) {
            copy.forcing = self.forcing;
        }
        copy
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Cell({}, {}, {})", self.row, self.column, self.forcing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forcing_codes_and_names() {
        for (i, f) in Forcing::ALL.iter().enumerate() {
            assert_eq!(f.code() as usize, i);
            assert_eq!(Forcing::from_repr(i as u8), Some(*f));
            assert_eq!(Forcing::from_name(f.name()), Some(*f));
        }
        assert_eq!(Forcing::from_name("WALL"), None);
        assert_eq!(
            serde_json::to_string(&Forcing::NotTraversable).unwrap(),
            "\"NOT_TRAVERSABLE\""
        );
    }

    #[test]
    fn cospatial_and_identical() {
        let a: Cell = Cell::new(2, 3);
        let mut b: Cell = Cell::new(2, 3);
        b.set_forcing(Forcing::Exit);
        assert!(a.cospatial(&b));
        assert!(!a.identical(&b));
        assert!(!a.cospatial(&Cell::new(3, 2)));
        b.set_forcing(Forcing::None);
        assert!(a.identical(&b));
    }

    #[test]
    fn traversable_unless_wall() {
        let mut c: Cell = Cell::new(0, 0);
        assert!(c.is_traversable());
        c.set_forcing(Forcing::Entrance);
        assert!(c.is_traversable() && c.is_entrance() && !c.is_exit());
        c.set_forcing(Forcing::NotTraversable);
        assert!(!c.is_traversable());
    }

    #[test]
    fn copy_keeping_filters_forcing() {
        let mut c: Cell = Cell::new(1, 4);
        c.set_forcing(Forcing::NotTraversable);
        assert_eq!(c.copy_keeping(&[Forcing::NotTraversable]), c);
        assert_eq!(c.copy_keeping(&[]).forcing(), Forcing::None);
        c.set_forcing(Forcing::Entrance);
        let copy: Cell = c.copy_keeping(&[Forcing::NotTraversable]);
        assert_eq!(copy.forcing(), Forcing::None);
        assert!(copy.cospatial(&c));
    }
}
