/*
gnome.rs

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

//! Generate direct routes with some sightseeing along the way.
//!
//! The gnome first computes a direct route between the entrance and the exit, using the
//! `wandering` setting as the randomness of the cost surface.
//! Then, every few cells along that route, the gnome picks a nearby cell, walks to it, and
//! computes a new direct route from there to the exit.
//!
//! The interval between two detours shrinks as `wandering` grows. With a `wandering` of 0, no
//! detour is taken.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::config::GnomeConfig;
use super::direct;
use super::error::GeneratorError;
use super::path::Path;
use super::terminals::{self, TerminalPair};
use crate::hex::{Cell, Grid};

/// Maximum Euclidean distance, in rows and columns, between the start and the destination of a
/// detour.
const DETOUR_MAX_DISTANCE: f64 = 7.0;

/// Smallest number of cells between two detours.
const MIN_DETOUR_INTERVAL: usize = 2;

/// Generate one route per (entrance, exit) pair.
///
/// # Errors
///
/// The function returns an error if `wandering` is not between 0 and 1, if the entrances and
/// exits cannot be selected, or if the direct route of a pair cannot be computed.
/// A detour that cannot be computed is skipped.
pub fn generate<R: Rng + ?Sized>(
    grid: &Grid,
    config: &GnomeConfig,
    rng: &mut R,
) -> Result<Vec<Path>, GeneratorError> {
    config.validate()?;
    let pairs: Vec<TerminalPair> =
        terminals::extract_path_terminals(grid, config.num_entrances, config.num_exits, rng)?;

    pairs
        .iter()
        .map(|p| travel(grid, &p.entrance, &p.exit, config.wandering, rng))
        .collect()
}

/// Number of cells between the end of a detour and the start of the next one.
///
/// Half the length of the direct route is used so that, with little wandering, the only detour
/// is taken around the middle of the route rather than close to the exit.
fn detour_interval(route_len: usize, wandering: f64) -> usize {
    if wandering == 0.0 {
        return usize::MAX;
    }
    let interval: f64 = (route_len as f64 / 2.0 * (1.0 - wandering)).ceil();
    (interval as usize).max(MIN_DETOUR_INTERVAL)
}

/// Route from the entrance to the exit, with detours.
fn travel<R: Rng + ?Sized>(
    grid: &Grid,
    entrance: &Cell,
    exit: &Cell,
    wandering: f64,
    rng: &mut R,
) -> Result<Path, GeneratorError> {
    let mut path: Path = direct::route_between(grid, entrance, exit, wandering, rng)?;
    let interval: usize = detour_interval(path.len(), wandering);
    debug!(
        "Gnome route {:?} -> {:?}: {} cells, detour every {} cells",
        entrance.coordinates(),
        exit.coordinates(),
        path.len(),
        interval
    );

    let mut next_detour: usize = interval;
    let mut num_detours: usize = 0;
    while next_detour < path.len().saturating_sub(1) {
        let old_len: usize = path.len();
        if take_a_detour(grid, &mut path, next_detour, wandering, rng) {
            num_detours += 1;
        }
        let growth: isize = path.len() as isize - old_len as isize;
        let step: isize = isize::try_from(interval).unwrap_or(isize::MAX);
        let next: isize = (next_detour as isize + growth).saturating_add(step);
        // Always move forward, even if the detour shortened the route
        next_detour = next.max(next_detour as isize + 1) as usize;
    }

    debug!("Gnome route done: {} cells, {} detours", path.len(), num_detours);
    Ok(path)
}

/// Replace the end of the path, from `start_index`, with a detour followed by a direct route to
/// the exit.
///
/// Return `false` and leave the path unchanged if one of the two legs cannot be computed.
fn take_a_detour<R: Rng + ?Sized>(
    grid: &Grid,
    path: &mut Path,
    start_index: usize,
    wandering: f64,
    rng: &mut R,
) -> bool {
    let (Some(start), Some(exit)) = (
        path.get().get(start_index).copied(),
        path.get_last().copied(),
    ) else {
        return false;
    };
    let destination: Cell = detour_destination(grid, &start, rng);

    let to_destination: Path =
        match direct::route_between(grid, &start, &destination, wandering, rng) {
            Ok(p) => p,
            Err(e) => {
                debug!("Detour from {start} to {destination} skipped: {e}");
                return false;
            }
        };
    let to_exit: Path = match direct::route_between(grid, &destination, &exit, wandering, rng) {
        Ok(p) => p,
        Err(e) => {
            debug!("Detour from {destination} to {exit} skipped: {e}");
            return false;
        }
    };

    // The destination is the last cell of the first leg and the first cell of the second one
    let mut tail: Vec<Cell> = to_destination.get().to_vec();
    tail.extend_from_slice(to_exit.get().get(1..).unwrap_or_default());
    path.splice_from(start_index, &tail);
    true
}

/// Pick a random traversable cell close to the start of the detour.
///
/// If no cell qualifies, the start cell itself is returned.
fn detour_destination<R: Rng + ?Sized>(grid: &Grid, start: &Cell, rng: &mut R) -> Cell {
    let mut candidates: Vec<&Cell> = grid.iter().collect();
    candidates.shuffle(rng);
    candidates
        .into_iter()
        .find(|c| c.is_traversable() && distance(start, c) <= DETOUR_MAX_DISTANCE)
        .copied()
        .unwrap_or(*start)
}

/// Euclidean distance between the (row, column) positions of the two cells.
fn distance(a: &Cell, b: &Cell) -> f64 {
    let dr: f64 = a.row() as f64 - b.row() as f64;
    let dc: f64 = a.column() as f64 - b.column() as f64;
    (dr * dr + dc * dc).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::config::DirectConfig;
    use crate::hex::Forcing;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config(wandering: f64) -> GnomeConfig {
        GnomeConfig {
            num_entrances: 1,
            num_exits: 1,
            wandering,
        }
    }

    #[test]
    fn intervals() {
        assert_eq!(detour_interval(20, 0.0), usize::MAX);
        assert_eq!(detour_interval(20, 0.5), 5);
        assert_eq!(detour_interval(21, 0.5), 6);
        assert_eq!(detour_interval(20, 1.0), 2);
        assert_eq!(detour_interval(3, 0.9), 2);
    }

    #[test]
    fn no_wandering_is_a_direct_route() {
        let mut g: Grid = Grid::new(8, 20);
        g.set_forcing(2, 0, Forcing::Entrance);
        g.set_forcing(5, 8, Forcing::Exit);

        let mut rng: ChaCha8Rng = ChaCha8Rng::seed_from_u64(1);
        let gnome: Vec<Path> = generate(&g, &config(0.0), &mut rng).unwrap();
        let direct_config: DirectConfig = DirectConfig {
            num_entrances: 1,
            num_exits: 1,
            randomness: 0.0,
        };
        let shortest: Vec<Path> = direct::generate(&g, &direct_config, &mut rng).unwrap();
        assert_eq!(gnome, shortest);
    }

    #[test]
    fn routes_are_connected() {
        let mut g: Grid = Grid::new(10, 30);
        g.set_forcing(4, 7, Forcing::NotTraversable);
        g.set_forcing(5, 7, Forcing::NotTraversable);
        g.set_forcing(6, 7, Forcing::NotTraversable);

        for (seed, wandering) in [(1, 0.2), (2, 0.5), (3, 0.8), (4, 1.0)] {
            let mut rng: ChaCha8Rng = ChaCha8Rng::seed_from_u64(seed);
            let c: GnomeConfig = GnomeConfig {
                num_entrances: 2,
                num_exits: 1,
                wandering,
            };
            let paths: Vec<Path> = generate(&g, &c, &mut rng).unwrap();
            assert_eq!(paths.len(), 2);
            // Both routes lead to the same exit
            assert!(
                paths[0]
                    .get_last()
                    .unwrap()
                    .cospatial(paths[1].get_last().unwrap())
            );
            for p in &paths {
                assert!(p.is_connected(&g));
                assert!(p.iter().all(|c| c.forcing() == Forcing::None));
            }
        }
    }

    #[test]
    fn wall_blocks_the_route() {
        let mut g: Grid = Grid::new(6, 10);
        g.set_forcing(0, 2, Forcing::Entrance);
        g.set_forcing(5, 2, Forcing::Exit);
        for column in 0..g.column_count(2) {
            g.set_forcing(2, column, Forcing::NotTraversable);
        }
        let mut rng: ChaCha8Rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(
            generate(&g, &config(0.5), &mut rng),
            Err(GeneratorError::NoPath {
                from: (0, 2),
                to: (5, 2)
            })
        );
    }

    #[test]
    fn detour_keeps_the_ends() {
        let g: Grid = Grid::new(8, 30);
        let entrance: Cell = *g.cell(3, 0).unwrap();
        let exit: Cell = *g.cell(3, 14).unwrap();
        for seed in 0..5 {
            let mut rng: ChaCha8Rng = ChaCha8Rng::seed_from_u64(seed);
            let mut p: Path = direct::route_between(&g, &entrance, &exit, 0.0, &mut rng).unwrap();
            assert!(take_a_detour(&g, &mut p, 4, 0.3, &mut rng));
            assert_eq!(p.get_first().unwrap().coordinates(), (3, 0));
            assert_eq!(p.get_last().unwrap().coordinates(), (3, 14));
            assert!(p.is_connected(&g));
        }
    }

    #[test]
    fn destination_is_close_and_open() {
        let mut g: Grid = Grid::new(20, 40);
        for c in g.iter_mut() {
            if c.row() % 3 == 0 {
                c.set_forcing(Forcing::NotTraversable);
            }
        }
        let start: Cell = *g.cell(10, 10).unwrap();
        let mut rng: ChaCha8Rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..50 {
            let d: Cell = detour_destination(&g, &start, &mut rng);
            assert!(d.is_traversable());
            assert!(distance(&start, &d) <= DETOUR_MAX_DISTANCE);
        }
    }

    #[test]
    fn isolated_start_is_its_own_destination() {
        let mut g: Grid = Grid::new(4, 4);
        for c in g.iter_mut() {
            c.set_forcing(Forcing::NotTraversable);
        }
        let start: Cell = *g.cell(1, 1).unwrap();
        let mut rng: ChaCha8Rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(detour_destination(&g, &start, &mut rng), start);
    }
}
