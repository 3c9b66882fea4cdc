/*
terminals.rs

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

//! Select the entrance and exit of each route.
//!
//! Forced entrances and exits always win. When one side (or both) has no forced cell, the
//! missing cells are drawn at random from the traversable cells on the grid boundary.
//! Entrances and exits are then paired: there are as many pairs as the longest of the two lists,
//! and the shorter list is reused, reshuffled every time it runs out.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::error::GeneratorError;
use crate::hex::{Cell, Grid};

/// One (entrance, exit) pair that a route must connect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TerminalPair {
    pub entrance: Cell,
    pub exit: Cell,
}

/// Extract the entrance and exit pairs for the routes to generate.
///
/// `num_entrances` and `num_exits` are only used when the grid has no forced entrance (or exit).
///
/// # Errors
///
/// The function returns an error when there are not enough traversable boundary cells for the
/// requested entrances and exits, or when one of the two lists ends up empty.
pub fn extract_path_terminals<R: Rng + ?Sized>(
    grid: &Grid,
    num_entrances: usize,
    num_exits: usize,
    rng: &mut R,
) -> Result<Vec<TerminalPair>, GeneratorError> {
    let mut entrances: Vec<Cell> = grid.entrances().into_iter().copied().collect();
    let mut exits: Vec<Cell> = grid.exits().into_iter().copied().collect();

    // Only draw from the boundary for the sides without forced cells
    let (draw_entrances, draw_exits) = match (entrances.is_empty(), exits.is_empty()) {
        (true, true) => (num_entrances, num_exits),
        (true, false) => (num_entrances, 0),
        (false, true) => (0, num_exits),
        (false, false) => (0, 0),
    };

    let requested: usize = draw_entrances + draw_exits;
    if requested > 0 {
        let mut boundary: Vec<Cell> = grid
            .boundary_cells()
            .into_iter()
            .filter(|c| c.is_traversable() && !c.is_entrance() && !c.is_exit())
            .copied()
            .collect();
        if boundary.len() < requested {
            return Err(GeneratorError::InsufficientBoundary {
                requested,
                available: boundary.len(),
            });
        }
        boundary.shuffle(rng);
        entrances.extend_from_slice(&boundary[..draw_entrances]);
        exits.extend_from_slice(&boundary[draw_entrances..requested]);
    }

    if entrances.is_empty() || exits.is_empty() {
        return Err(GeneratorError::MissingTerminals);
    }

    debug!(
        "Entrances: {:?}  Exits: {:?}",
        entrances.iter().map(|c| c.coordinates()).collect::<Vec<_>>(),
        exits.iter().map(|c| c.coordinates()).collect::<Vec<_>>()
    );

    Ok(pair_terminals(&entrances, &exits, rng))
}

/// Pair the entrances with the exits.
///
/// Each list is shuffled, then consumed in order; when a list runs out before the pairing is
/// complete, it is reshuffled and consumed again.
fn pair_terminals<R: Rng + ?Sized>(
    entrances: &[Cell],
    exits: &[Cell],
    rng: &mut R,
) -> Vec<TerminalPair> {
    let total: usize = entrances.len().max(exits.len());
    let mut available_entrances: Vec<Cell> = Vec::with_capacity(entrances.len());
    let mut available_exits: Vec<Cell> = Vec::with_capacity(exits.len());
    let mut pairs: Vec<TerminalPair> = Vec::with_capacity(total);

    for _ in 0..total {
        let (Some(entrance), Some(exit)) = (
            next_terminal(&mut available_entrances, entrances, rng),
            next_terminal(&mut available_exits, exits, rng),
        ) else {
            break;
        };
        pairs.push(TerminalPair { entrance, exit });
    }
    pairs
}

/// Take the next cell from `available`, refilling it with a reshuffled `all` when it is empty.
fn next_terminal<R: Rng + ?Sized>(
    available: &mut Vec<Cell>,
    all: &[Cell],
    rng: &mut R,
) -> Option<Cell> {
    if available.is_empty() {
        available.extend_from_slice(all);
        available.shuffle(rng);
    }
    available.pop()
}
