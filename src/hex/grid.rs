/*
grid.rs

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

//! Hexagonal grid of cells.

use log::{Level, debug, log_enabled};
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Forcing};
use super::direction::{self, Direction};

/// Container of the grid cells.
///
/// Cells are arranged vertex-up. Columns are shared between rows, so a row holds about half of
/// the nominal number of columns: the odd rows are shifted right by half a cell width, and sit
/// between the cells of the even rows.
///
/// For a grid requested with `columns` nominal columns, even rows have `ceil(columns / 2)` cells
/// and odd rows have `floor(columns / 2)` cells.
/// The shape is fixed at creation; only the cell forcings can change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grid {
    /// Cells, by row and then by column.
    cells: Vec<Vec<Cell>>,

    /// Number of cells on the rows with an even index (0, 2, ...).
    columns_even: usize,

    /// Number of cells on the rows with an odd index (1, 3, ...).
    columns_odd: usize,

    /// Total number of cells.
    num_cells: usize,
}

impl Grid {
    /// Create a [`Grid`] object with the given number of rows and nominal columns.
    ///
    /// When the number of columns is odd, the extra column goes to the even rows.
    pub fn new(rows: usize, columns: usize) -> Self {
        let columns_even: usize = columns / 2 + columns % 2;
        let columns_odd: usize = columns / 2;

        let cells: Vec<Vec<Cell>> = (0..rows)
            .map(|row| {
                let n: usize = if row % 2 == 0 { columns_even } else { columns_odd };
                (0..n).map(|column| Cell::new(row, column)).collect()
            })
            .collect();

        Self::from_cells(cells, columns_even, columns_odd)
    }

    fn from_cells(cells: Vec<Vec<Cell>>, columns_even: usize, columns_odd: usize) -> Self {
        let rows_even: usize = cells.len().div_ceil(2);
        let rows_odd: usize = cells.len() - rows_even;
        Self {
            cells,
            columns_even,
            columns_odd,
            num_cells: rows_even * columns_even + rows_odd * columns_odd,
        }
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells in the given row.
    pub fn column_count(&self, row: usize) -> usize {
        if row % 2 == 0 {
            self.columns_even
        } else {
            self.columns_odd
        }
    }

    /// Number of cells on the rows with an even index (0, 2, ...).
    pub fn columns_on_even_rows(&self) -> usize {
        self.columns_even
    }

    /// Number of cells on the rows with an odd index (1, 3, ...).
    pub fn columns_on_odd_rows(&self) -> usize {
        self.columns_odd
    }

    /// Nominal number of columns the grid was created with.
    pub fn nominal_columns(&self) -> usize {
        self.columns_even + self.columns_odd
    }

    pub fn cell_count(&self) -> usize {
        self.num_cells
    }

    /// Get the cell at the given coordinates.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(column))
    }

    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row).and_then(|r| r.get_mut(column))
    }

    /// Set the forcing of the cell at the given coordinates.
    ///
    /// Return `false` if there is no such cell.
    pub fn set_forcing(&mut self, row: usize, column: usize, forcing: Forcing) -> bool {
        match self.cell_mut(row, column) {
            Some(c) => {
                c.set_forcing(forcing);
                true
            }
            None => false,
        }
    }

    /// Return the neighbor of the cell in the given direction, or `None` at the grid edges.
    pub fn neighbor(&self, cell: &Cell, direction: Direction) -> Option<&Cell> {
        let (dr, dc) = direction.offset(cell.row());
        let row: usize = cell.row().checked_add_signed(dr)?;
        let column: usize = cell.column().checked_add_signed(dc)?;
        self.cell(row, column)
    }

    /// Return the neighbor in the direction of the given unit-circle angle.
    pub fn neighbor_toward_angle(&self, cell: &Cell, angle_radians: f64) -> Option<&Cell> {
        self.neighbor(cell, Direction::from_angle(angle_radians))
    }

    /// Return all the existing neighbors of the cell, in direction order.
    pub fn neighbors(&self, cell: &Cell) -> Vec<&Cell> {
        Direction::ALL
            .iter()
            .filter_map(|d| self.neighbor(cell, *d))
            .collect()
    }

    /// Whether the two cells are neighbors.
    pub fn is_adjacent(&self, a: &Cell, b: &Cell) -> bool {
        Direction::ALL
            .iter()
            .filter_map(|d| self.neighbor(a, *d))
            .any(|n| n.cospatial(b))
    }

    /// Angle in radians between the centers of two cells (see [`direction::angle_between`]).
    pub fn angle_toward(source: &Cell, destination: &Cell) -> f64 {
        direction::angle_between(
            source.row(),
            source.column(),
            destination.row(),
            destination.column(),
        )
    }

    /// Direction of a single step from the source toward the destination. The cells do not need
    /// to be adjacent.
    pub fn direction_toward(source: &Cell, destination: &Cell) -> Direction {
        direction::direction_between(
            source.row(),
            source.column(),
            destination.row(),
            destination.column(),
        )
    }

    /// Return the first direction in which the cell has no neighbor, or `default` if the cell is
    /// surrounded.
    pub fn first_open_side(&self, cell: &Cell, default: Direction) -> Direction {
        Direction::ALL
            .into_iter()
            .find(|d| self.neighbor(cell, *d).is_none())
            .unwrap_or(default)
    }

    /// Return the cells on the outside boundary of the grid: the whole first and last rows, and
    /// the first and last cells of the rows in between.
    pub fn boundary_cells(&self) -> Vec<&Cell> {
        let last_row: usize = self.cells.len().saturating_sub(1);
        let mut boundary: Vec<&Cell> = Vec::new();

        for (i, row) in self.cells.iter().enumerate() {
            if i == 0 || i == last_row {
                boundary.extend(row.iter());
            } else {
                if let Some(first) = row.first() {
                    boundary.push(first);
                }
                if row.len() > 1
                    && let Some(last) = row.last()
                {
                    boundary.push(last);
                }
            }
        }
        boundary
    }

    /// Return the cells forced to be entrances, in row-major order.
    pub fn entrances(&self) -> Vec<&Cell> {
        self.iter().filter(|c| c.is_entrance()).collect()
    }

    /// Return the cells forced to be exits, in row-major order.
    pub fn exits(&self) -> Vec<&Cell> {
        self.iter().filter(|c| c.is_exit()).collect()
    }

    /// Iterate over the cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut().flatten()
    }

    /// Return a copy of the grid in which the cells only keep the forcings listed in `keep`.
    ///
    /// For an exact copy, use [`Clone`].
    pub fn deep_copy(&self, keep: &[Forcing]) -> Self {
        let cells: Vec<Vec<Cell>> = self
            .cells
            .iter()
            .map(|row| row.iter().map(|c| c.copy_keeping(keep)).collect())
            .collect();
        Self::from_cells(cells, self.columns_even, self.columns_odd)
    }

    /// Print the grid forcings.
    pub fn debug(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        debug!(
            "Grid: {} rows, {}/{} columns, {} cells",
            self.row_count(),
            self.columns_even,
            self.columns_odd,
            self.num_cells
        );
        let mut s: String = String::new();
        for (i, row) in self.cells.iter().enumerate() {
            s.clear();
            if i % 2 == 1 {
                s.push(' ');
            }
            for c in row {
                match c.forcing() {
                    Forcing::None => s.push_str(". "),
                    Forcing::Entrance => s.push_str("I "),
                    Forcing::Exit => s.push_str("O "),
                    Forcing::NotTraversable => s.push_str("# "),
                }
            }
            debug!("{s}");
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Vec<Cell>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn shape_for_odd_and_even_columns() {
        let g: Grid = Grid::new(8, 35);
        assert_eq!(g.columns_on_even_rows(), 18);
        assert_eq!(g.columns_on_odd_rows(), 17);
        assert_eq!(g.cell_count(), 4 * 18 + 4 * 17);
        assert_eq!(g.iter().count(), g.cell_count());
        assert_eq!(g.nominal_columns(), 35);

        let g: Grid = Grid::new(3, 4);
        assert_eq!(g.column_count(0), 2);
        assert_eq!(g.column_count(1), 2);
        assert_eq!(g.cell_count(), 6);
    }

    #[test]
    fn row_major_iteration() {
        let g: Grid = Grid::new(3, 5);
        let coords: Vec<(usize, usize)> = g.iter().map(|c| c.coordinates()).collect();
        assert_eq!(
            coords,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }

    #[test]
    fn neighbors_of_even_and_odd_rows() {
        let g: Grid = Grid::new(5, 10);

        let c: Cell = *g.cell(2, 2).unwrap();
        let expect: [(Direction, (usize, usize)); 6] = [
            (Direction::E, (2, 3)),
            (Direction::NE, (1, 2)),
            (Direction::NW, (1, 1)),
            (Direction::W, (2, 1)),
            (Direction::SW, (3, 1)),
            (Direction::SE, (3, 2)),
        ];
        for (d, coords) in expect {
            assert_eq!(g.neighbor(&c, d).unwrap().coordinates(), coords, "{d}");
        }

        let c: Cell = *g.cell(1, 2).unwrap();
        let expect: [(Direction, (usize, usize)); 6] = [
            (Direction::E, (1, 3)),
            (Direction::NE, (0, 3)),
            (Direction::NW, (0, 2)),
            (Direction::W, (1, 1)),
            (Direction::SW, (2, 2)),
            (Direction::SE, (2, 3)),
        ];
        for (d, coords) in expect {
            assert_eq!(g.neighbor(&c, d).unwrap().coordinates(), coords, "{d}");
        }
    }

    #[test]
    fn no_neighbor_past_the_edges() {
        let g: Grid = Grid::new(4, 6);
        let corner: Cell = *g.cell(0, 0).unwrap();
        assert!(g.neighbor(&corner, Direction::NE).is_none());
        assert!(g.neighbor(&corner, Direction::NW).is_none());
        assert!(g.neighbor(&corner, Direction::W).is_none());
        assert!(g.neighbor(&corner, Direction::SW).is_none());
        assert_eq!(g.neighbors(&corner).len(), 2);
        assert_eq!(g.first_open_side(&corner, Direction::W), Direction::NE);

        // The last cell of an odd row has nothing on its east side
        let c: Cell = *g.cell(1, 2).unwrap();
        assert!(g.neighbor(&c, Direction::E).is_none());
        assert!(g.neighbor(&c, Direction::NE).is_none());
        assert!(g.neighbor(&c, Direction::SE).is_none());
        assert_eq!(g.neighbors(&c).len(), 3);
    }

    #[test]
    fn boundary_cells() {
        let g: Grid = Grid::new(4, 6);
        let coords: Vec<(usize, usize)> =
            g.boundary_cells().iter().map(|c| c.coordinates()).collect();
        assert_eq!(
            coords,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 2),
                (3, 0),
                (3, 1),
                (3, 2)
            ]
        );

        // Rows with a single cell do not report it twice
        let g: Grid = Grid::new(3, 2);
        assert_eq!(g.boundary_cells().len(), 3);
    }

    #[test]
    fn forced_entrances_and_exits() {
        let mut g: Grid = Grid::new(4, 6);
        assert!(g.set_forcing(3, 1, Forcing::Entrance));
        assert!(g.set_forcing(0, 2, Forcing::Entrance));
        assert!(g.set_forcing(2, 2, Forcing::Exit));
        assert!(!g.set_forcing(1, 3, Forcing::Exit));
        let entrances: Vec<(usize, usize)> =
            g.entrances().iter().map(|c| c.coordinates()).collect();
        assert_eq!(entrances, vec![(0, 2), (3, 1)]);
        assert_eq!(g.exits().len(), 1);
    }

    #[test]
    fn deep_copy_keeps_requested_forcings_only() {
        let mut g: Grid = Grid::new(4, 6);
        g.set_forcing(0, 0, Forcing::Entrance);
        g.set_forcing(1, 1, Forcing::NotTraversable);
        g.set_forcing(3, 2, Forcing::Exit);

        let copy: Grid = g.deep_copy(&[Forcing::NotTraversable]);
        assert_eq!(copy.cell(0, 0).unwrap().forcing(), Forcing::None);
        assert_eq!(copy.cell(1, 1).unwrap().forcing(), Forcing::NotTraversable);
        assert_eq!(copy.cell(3, 2).unwrap().forcing(), Forcing::None);
        assert_eq!(g.cell(0, 0).unwrap().forcing(), Forcing::Entrance);

        let full: Grid = g.deep_copy(&Forcing::ALL);
        assert_eq!(full, g);
    }

    #[test]
    fn neighbors_toward_angles() {
        let g: Grid = Grid::new(6, 12);
        for (row, column) in [(2, 3), (3, 3)] {
            let c: &Cell = g.cell(row, column).unwrap();
            for (i, d) in Direction::ALL.iter().enumerate() {
                let center: f64 = i as f64 * PI / 3.0;
                assert_eq!(
                    g.neighbor_toward_angle(c, center),
                    g.neighbor(c, *d),
                    "{d} from ({row}, {column})"
                );
                assert!(g.neighbor_toward_angle(c, center).is_some());
            }
            // Angles above a full turn wrap around
            assert_eq!(
                g.neighbor_toward_angle(c, TAU + PI / 3.0),
                g.neighbor(c, Direction::NE)
            );
            assert_eq!(
                g.neighbor_toward_angle(c, -PI / 3.0),
                g.neighbor(c, Direction::SE)
            );
        }

        let corner: &Cell = g.cell(0, 0).unwrap();
        assert!(g.neighbor_toward_angle(corner, PI).is_none());
        assert!(g.neighbor_toward_angle(corner, PI / 3.0).is_none());
        assert_eq!(
            g.neighbor_toward_angle(corner, 0.0).unwrap().coordinates(),
            (0, 1)
        );
    }

    #[test]
    fn angles_between_distant_cells() {
        let g: Grid = Grid::new(8, 12);
        for ((r1, c1), (r2, c2)) in [((0, 3), (6, 1)), ((1, 0), (4, 5)), ((7, 2), (2, 2))] {
            let a: &Cell = g.cell(r1, c1).unwrap();
            let b: &Cell = g.cell(r2, c2).unwrap();
            assert_eq!(Grid::angle_toward(a, b), direction::angle_between(r1, c1, r2, c2));
            assert_eq!(
                Grid::direction_toward(a, b),
                Direction::from_angle(Grid::angle_toward(a, b))
            );
        }
        let a: &Cell = g.cell(0, 3).unwrap();
        let b: &Cell = g.cell(6, 1).unwrap();
        assert_eq!(Grid::direction_toward(a, b), Direction::SW);
    }

    proptest! {
        #[test]
        fn shape_survives_copies(rows in 2usize..40, columns in 2usize..40) {
            let g: Grid = Grid::new(rows, columns);
            let copy: Grid = g.deep_copy(&[]);
            for grid in [&g, &copy] {
                prop_assert_eq!(grid.row_count(), rows);
                for row in 0..rows {
                    let expected: usize =
                        if row % 2 == 0 { columns.div_ceil(2) } else { columns / 2 };
                    prop_assert_eq!(grid.column_count(row), expected);
                    prop_assert_eq!(grid.cells[row].len(), expected);
                }
                prop_assert_eq!(grid.iter().count(), grid.cell_count());
            }
        }

        #[test]
        fn interior_cells_have_six_neighbors(rows in 2usize..20, columns in 2usize..20) {
            let g: Grid = Grid::new(rows, columns);
            let boundary: Vec<(usize, usize)> =
                g.boundary_cells().iter().map(|c| c.coordinates()).collect();
            for c in g.iter() {
                let n: usize = g.neighbors(c).len();
                if boundary.contains(&c.coordinates()) {
                    prop_assert!(n < 6, "{} has {} neighbors", c, n);
                } else {
                    prop_assert_eq!(n, 6, "{}", c);
                }
            }
        }

        #[test]
        fn adjacent_directions_are_antipodal(rows in 2usize..20, columns in 2usize..20) {
            let g: Grid = Grid::new(rows, columns);
            for c in g.iter() {
                for d in Direction::ALL {
                    if let Some(n) = g.neighbor(c, d) {
                        prop_assert_eq!(Grid::direction_toward(c, n), d);
                        prop_assert_eq!(Grid::direction_toward(n, c), d.opposite());
                        prop_assert!(g.is_adjacent(n, c));
                    }
                }
            }
        }
    }
}
