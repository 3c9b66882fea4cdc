/*
direct.rs

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

//! Generate cost-weighted shortest routes.
//!
//! A fresh [`CostSurface`] is generated for every invocation and shared by all the routes of
//! that invocation.
//! Each (entrance, exit) pair is then connected with a Dijkstra search where the weight of an
//! edge is the cost of the cell it leads to.

use log::{debug, trace};
use rand::Rng;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use super::config::DirectConfig;
use super::cost_surface::CostSurface;
use super::error::GeneratorError;
use super::path::Path;
use super::terminals::{self, TerminalPair};
use crate::hex::{Cell, Forcing, Grid};

/// Cell waiting in the search frontier.
///
/// The ordering is reversed so that [`BinaryHeap`] pops the closest cell first.
/// Equal distances are broken by the lowest row, then the lowest column, so that the routes do
/// not depend on the insertion order.
#[derive(Debug, Copy, Clone)]
struct Candidate {
    distance: f64,
    row: usize,
    column: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.row.cmp(&self.row))
            .then_with(|| other.column.cmp(&self.column))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Generate one route per (entrance, exit) pair.
///
/// # Errors
///
/// The function returns an error if the settings are not valid, if the entrances and exits
/// cannot be selected, or if any of the pairs cannot be connected. No partial result is
/// returned.
pub fn generate<R: Rng + ?Sized>(
    grid: &Grid,
    config: &DirectConfig,
    rng: &mut R,
) -> Result<Vec<Path>, GeneratorError> {
    config.validate()?;
    let pairs: Vec<TerminalPair> =
        terminals::extract_path_terminals(grid, config.num_entrances, config.num_exits, rng)?;
    let surface: CostSurface = CostSurface::generate(grid, config.randomness, rng);

    pairs
        .iter()
        .map(|p| shortest_path(grid, &surface, &p.entrance, &p.exit))
        .collect()
}

/// Route between two arbitrary cells.
///
/// The search runs on a copy of the grid that only keeps the walls, with `start` forced as the
/// only entrance and `stop` as the only exit.
/// If the two cells are at the same position, the route is the single `stop` cell.
///
/// # Errors
///
/// The function returns an error if `randomness` is not between 0 and 1, or if the two cells
/// cannot be connected.
pub fn route_between<R: Rng + ?Sized>(
    grid: &Grid,
    start: &Cell,
    stop: &Cell,
    randomness: f64,
    rng: &mut R,
) -> Result<Path, GeneratorError> {
    if start.cospatial(stop) {
        return Ok(Path::from(vec![*stop]));
    }

    let mut working: Grid = grid.deep_copy(&[Forcing::NotTraversable]);
    working.set_forcing(start.row(), start.column(), Forcing::Entrance);
    working.set_forcing(stop.row(), stop.column(), Forcing::Exit);

    let config: DirectConfig = DirectConfig {
        num_entrances: 1,
        num_exits: 1,
        randomness,
    };
    let route: Path = generate(&working, &config, rng)?
        .into_iter()
        .next()
        .ok_or(GeneratorError::MissingTerminals)?;

    // Return the cells of the caller's grid, not the ones with the temporary forcings
    Ok(route
        .iter()
        .map(|c| *grid.cell(c.row(), c.column()).unwrap_or(c))
        .collect::<Vec<Cell>>()
        .into())
}

/// Dijkstra search between two cells of the grid.
///
/// Only traversable cells are visited. The returned path starts with `source` and ends with
/// `destination`.
///
/// # Errors
///
/// The function returns an error if the frontier is exhausted before reaching the destination,
/// or if the chain of predecessors does not lead back to the source.
pub fn shortest_path(
    grid: &Grid,
    surface: &CostSurface,
    source: &Cell,
    destination: &Cell,
) -> Result<Path, GeneratorError> {
    let start: Instant = Instant::now();
    let no_path = || GeneratorError::NoPath {
        from: source.coordinates(),
        to: destination.coordinates(),
    };

    let num_rows: usize = grid.row_count();
    let mut distance: Vec<Vec<f64>> = (0..num_rows)
        .map(|r| vec![f64::INFINITY; grid.column_count(r)])
        .collect();
    let mut previous: Vec<Vec<Option<(usize, usize)>>> = (0..num_rows)
        .map(|r| vec![None; grid.column_count(r)])
        .collect();
    let mut finalized: Vec<Vec<bool>> = (0..num_rows)
        .map(|r| vec![false; grid.column_count(r)])
        .collect();

    let (source_row, source_column) = source.coordinates();
    if grid.cell(source_row, source_column).is_none() {
        return Err(no_path());
    }
    distance[source_row][source_column] = 0.0;

    let mut frontier: BinaryHeap<Candidate> = BinaryHeap::new();
    frontier.push(Candidate {
        distance: 0.0,
        row: source_row,
        column: source_column,
    });

    let mut iteration: usize = 0;
    let mut reached: bool = false;
    while let Some(Candidate {
        distance: d,
        row,
        column,
    }) = frontier.pop()
    {
        // Stale entry for a cell that was reached through a shorter route
        if finalized[row][column] {
            continue;
        }
        finalized[row][column] = true;
        iteration += 1;
        trace!("Iteration {iteration}: ({row}, {column}) at distance {d}");

        if (row, column) == destination.coordinates() {
            reached = true;
            break;
        }

        let Some(current) = grid.cell(row, column) else {
            continue;
        };
        for n in grid.neighbors(current) {
            let (nr, nc) = n.coordinates();
            if !n.is_traversable() || finalized[nr][nc] {
                continue;
            }
            let Some(cost) = surface.get(nr, nc) else {
                continue;
            };
            let alternative: f64 = d + cost;
            if alternative < distance[nr][nc] {
                distance[nr][nc] = alternative;
                previous[nr][nc] = Some((row, column));
                frontier.push(Candidate {
                    distance: alternative,
                    row: nr,
                    column: nc,
                });
            }
        }
    }

    debug!(
        "Search {:?} -> {:?}: iterations = {}  duration = {}",
        source.coordinates(),
        destination.coordinates(),
        iteration,
        start.elapsed().as_secs_f32()
    );

    if !reached {
        return Err(no_path());
    }
    reconstruct(grid, &previous, source, destination)
}

/// Walk the predecessors back from the destination to the source.
fn reconstruct(
    grid: &Grid,
    previous: &[Vec<Option<(usize, usize)>>],
    source: &Cell,
    destination: &Cell,
) -> Result<Path, GeneratorError> {
    let mut cells: Vec<Cell> = Vec::new();
    let mut at: (usize, usize) = destination.coordinates();

    loop {
        let cell: &Cell = grid
            .cell(at.0, at.1)
            .ok_or(GeneratorError::Reconstruction { at })?;
        cells.push(*cell);
        if at == source.coordinates() {
            break;
        }
        // A chain longer than the grid means a loop in the predecessors
        if cells.len() > grid.cell_count() {
            return Err(GeneratorError::Reconstruction { at });
        }
        at = previous[at.0][at.1].ok_or(GeneratorError::Reconstruction { at })?;
    }

    cells.reverse();
    Ok(Path::from(cells))
}
