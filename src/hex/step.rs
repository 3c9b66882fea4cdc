/*
step.rs

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

//! How a route crosses each of its cells.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::direction::Direction;
use super::grid::Grid;

/// Sides of a cell through which a route enters and leaves it.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Step {
    /// Side the route comes from.
    pub from: Direction,

    /// Side the route goes to.
    pub to: Direction,
}

impl Step {
    /// Compute the step of the `current` cell, coming from `previous` and going to `next`.
    ///
    /// Without a previous cell (route entrance), the route comes from the first side of the
    /// cell that has no neighbor, east if there is none.
    /// Without a next cell (route exit), the route leaves through the first side that has no
    /// neighbor, west if there is none.
    pub fn through(
        grid: &Grid,
        previous: Option<&Cell>,
        current: &Cell,
        next: Option<&Cell>,
    ) -> Self {
        let from: Direction = match previous {
            Some(p) => Grid::direction_toward(current, p),
            None => grid.first_open_side(current, Direction::E),
        };
        let to: Direction = match next {
            Some(n) => Grid::direction_toward(current, n),
            None => grid.first_open_side(current, Direction::W),
        };
        Self { from, to }
    }

    /// Whether the route goes straight through the cell.
    pub fn is_straight(&self) -> bool {
        self.from.opposite() == self.to
    }
}

/// Compute the steps for all the cells of a route.
pub fn route_steps(grid: &Grid, cells: &[Cell]) -> Vec<Step> {
    (0..cells.len())
        .map(|i| {
            let previous: Option<&Cell> = if i > 0 { cells.get(i - 1) } else { None };
            Step::through(grid, previous, &cells[i], cells.get(i + 1))
        })
        .collect()
}
