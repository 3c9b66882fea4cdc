/*
drunkard.rs

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

//! Generate routes by stumbling across the grid until the exit is reached.

use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;

use super::config::DrunkardConfig;
use super::error::GeneratorError;
use super::path::Path;
use super::terminals::{self, TerminalPair};
use crate::hex::{Cell, Direction, Grid};

/// Generate one random walk per (entrance, exit) pair.
///
/// The walks can go through the same cells several times.
///
/// # Errors
///
/// The function returns an error if the entrances and exits cannot be selected, if a walk
/// reaches a cell without traversable neighbors, or if a walk takes more than
/// [`DrunkardConfig::max_steps`] steps.
pub fn generate<R: Rng + ?Sized>(
    grid: &Grid,
    config: &DrunkardConfig,
    rng: &mut R,
) -> Result<Vec<Path>, GeneratorError> {
    let pairs: Vec<TerminalPair> =
        terminals::extract_path_terminals(grid, config.num_entrances, config.num_exits, rng)?;

    pairs
        .iter()
        .map(|p| walk(grid, &p.entrance, &p.exit, config.max_steps, rng))
        .collect()
}

/// Random walk from `entrance` until a cell at the position of `exit` is reached.
fn walk<R: Rng + ?Sized>(
    grid: &Grid,
    entrance: &Cell,
    exit: &Cell,
    max_steps: usize,
    rng: &mut R,
) -> Result<Path, GeneratorError> {
    let start: Instant = Instant::now();
    let mut path: Path = Path::from(vec![*entrance]);
    let mut current: Cell = *entrance;
    let mut iteration: usize = 0;

    while !current.cospatial(exit) {
        if iteration >= max_steps {
            debug!("Walk from {entrance} abandoned after {iteration} steps");
            return Err(GeneratorError::StepLimitExceeded { limit: max_steps });
        }
        current = *traversable_neighbor(grid, &current, rng).ok_or(
            GeneratorError::NoValidNeighbor {
                at: current.coordinates(),
            },
        )?;
        path.push(current);
        iteration += 1;
        trace!("Iteration {iteration}: {current}");
    }

    debug!(
        "Walk {:?} -> {:?}: iterations = {}  duration = {}",
        entrance.coordinates(),
        exit.coordinates(),
        iteration,
        start.elapsed().as_secs_f32()
    );
    Ok(path)
}

/// Return a random traversable neighbor of the cell.
fn traversable_neighbor<'a, R: Rng + ?Sized>(
    grid: &'a Grid,
    cell: &Cell,
    rng: &mut R,
) -> Option<&'a Cell> {
    let mut directions: [Direction; 6] = Direction::ALL;
    directions.shuffle(rng);
    directions
        .iter()
        .filter_map(|d| grid.neighbor(cell, *d))
        .find(|n| n.is_traversable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::Forcing;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config(max_steps: usize) -> DrunkardConfig {
        DrunkardConfig {
            num_entrances: 1,
            num_exits: 1,
            max_steps,
        }
    }

    #[test]
    fn walks_reach_the_exit() {
        let mut g: Grid = Grid::new(6, 10);
        g.set_forcing(0, 0, Forcing::Entrance);
        g.set_forcing(5, 4, Forcing::Exit);
        g.set_forcing(2, 2, Forcing::NotTraversable);
        g.set_forcing(3, 2, Forcing::NotTraversable);

        for seed in 0..10 {
            let mut rng: ChaCha8Rng = ChaCha8Rng::seed_from_u64(seed);
            let paths: Vec<Path> = generate(&g, &config(1_000_000), &mut rng).unwrap();
            assert_eq!(paths.len(), 1);
            let p: &Path = &paths[0];
            assert_eq!(p.get_first().unwrap().coordinates(), (0, 0));
            assert_eq!(p.get_last().unwrap().coordinates(), (5, 4));
            assert!(p.is_connected(&g));
        }
    }

    #[test]
    fn entrance_on_exit() {
        let g: Grid = Grid::new(4, 4);
        let c: Cell = *g.cell(1, 1).unwrap();
        let mut rng: ChaCha8Rng = ChaCha8Rng::seed_from_u64(1);
        let p: Path = walk(&g, &c, &c, 0, &mut rng).unwrap();
        assert_eq!(p.coordinates(), vec![(1, 1)]);
    }

    #[test]
    fn wall_exhausts_the_steps() {
        let mut g: Grid = Grid::new(6, 10);
        g.set_forcing(0, 2, Forcing::Entrance);
        g.set_forcing(5, 2, Forcing::Exit);
        for column in 0..g.column_count(3) {
            g.set_forcing(3, column, Forcing::NotTraversable);
        }
        let mut rng: ChaCha8Rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(
            generate(&g, &config(5000), &mut rng),
            Err(GeneratorError::StepLimitExceeded { limit: 5000 })
        );
    }

    #[test]
    fn walled_in_entrance() {
        let mut g: Grid = Grid::new(6, 10);
        g.set_forcing(2, 2, Forcing::Entrance);
        g.set_forcing(5, 2, Forcing::Exit);
        let entrance: Cell = *g.cell(2, 2).unwrap();
        let around: Vec<(usize, usize)> =
            g.neighbors(&entrance).iter().map(|c| c.coordinates()).collect();
        for (r, c) in around {
            g.set_forcing(r, c, Forcing::NotTraversable);
        }
        let mut rng: ChaCha8Rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(
            generate(&g, &config(100), &mut rng),
            Err(GeneratorError::NoValidNeighbor { at: (2, 2) })
        );
    }

    #[test]
    fn neighbor_is_traversable() {
        let mut g: Grid = Grid::new(4, 6);
        let c: Cell = *g.cell(0, 0).unwrap();
        g.set_forcing(0, 1, Forcing::NotTraversable);
        let mut rng: ChaCha8Rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..50 {
            let n: &Cell = traversable_neighbor(&g, &c, &mut rng).unwrap();
            assert_eq!(n.coordinates(), (1, 0));
        }
    }
}
