/*
path.rs

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

//! Route across the grid.

use serde::{Deserialize, Serialize};

use crate::hex::step::{self, Step};
use crate::hex::{Cell, Grid};

/// Path object.
///
/// A path is an ordered list of cells, where each cell is adjacent to the previous one.
/// Cells can appear several times: random walks do not avoid the cells they already visited.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl Path {
    /// Add a cell at the end of the path.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return a reference to the cells of the path.
    pub fn get(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<&Cell> {
        self.cells.first()
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<&Cell> {
        self.cells.last()
    }

    /// Return the position of the first cell at the same coordinates as the given cell.
    pub fn cell_index(&self, cell: &Cell) -> Option<usize> {
        self.cells.iter().position(|c| c.cospatial(cell))
    }

    /// Keep the cells before `index` and append the given cells.
    pub fn splice_from(&mut self, index: usize, cells: &[Cell]) {
        self.cells.truncate(index);
        self.cells.extend_from_slice(cells);
    }

    /// Coordinates of the path cells, as (row, column) pairs.
    pub fn coordinates(&self) -> Vec<(usize, usize)> {
        self.cells.iter().map(|c| c.coordinates()).collect()
    }

    /// Whether every cell is traversable and adjacent to the previous one.
    pub fn is_connected(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|c| {
            grid.cell(c.row(), c.column())
                .is_some_and(|g| g.is_traversable())
        }) && self
            .cells
            .windows(2)
            .all(|w| grid.is_adjacent(&w[0], &w[1]))
    }

    /// Sides through which the path enters and leaves each of its cells.
    pub fn steps(&self, grid: &Grid) -> Vec<Step> {
        step::route_steps(grid, &self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::Forcing;

    fn path_of(grid: &Grid, coords: &[(usize, usize)]) -> Path {
        coords
            .iter()
            .map(|(r, c)| *grid.cell(*r, *c).unwrap())
            .collect::<Vec<Cell>>()
            .into()
    }

    #[test]
    fn built_from_cells() {
        let g: Grid = Grid::new(4, 8);
        let mut p: Path = Path::from(vec![*g.cell(1, 2).unwrap()]);
        assert_eq!(p.len(), 1);
        assert!(!p.is_empty());
        assert_eq!(p.get_first(), p.get_last());

        p.push(*g.cell(1, 3).unwrap());
        assert_eq!(p.coordinates(), vec![(1, 2), (1, 3)]);
        assert!(p.is_connected(&g));
    }

    #[test]
    fn connected_paths() {
        let mut g: Grid = Grid::new(4, 8);
        let p: Path = path_of(&g, &[(0, 0), (0, 1), (1, 1), (2, 1)]);
        assert!(p.is_connected(&g));
        assert_eq!(p.get_first().unwrap().coordinates(), (0, 0));
        assert_eq!(p.get_last().unwrap().coordinates(), (2, 1));
        assert_eq!(p.steps(&g).len(), 4);

        // A gap between (0, 1) and (2, 1)
        let p: Path = path_of(&g, &[(0, 0), (0, 1), (2, 1)]);
        assert!(!p.is_connected(&g));

        // A wall on the way
        let p: Path = path_of(&g, &[(0, 0), (0, 1), (1, 1), (2, 1)]);
        g.set_forcing(1, 1, Forcing::NotTraversable);
        assert!(!p.is_connected(&g));
    }

    #[test]
    fn splice_replaces_the_tail() {
        let g: Grid = Grid::new(4, 8);
        let mut p: Path = path_of(&g, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        let detour: Vec<Cell> = vec![*g.cell(1, 1).unwrap(), *g.cell(0, 2).unwrap()];
        p.splice_from(2, &detour);
        assert_eq!(p.coordinates(), vec![(0, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(p.cell_index(g.cell(1, 1).unwrap()), Some(2));
        assert_eq!(p.cell_index(g.cell(3, 3).unwrap()), None);
    }
}
