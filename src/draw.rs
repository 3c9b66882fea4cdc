/*
draw.rs

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

//! Draw grids and routes as text.
//!
//! Each cell takes two characters, followed by a space. Rows with an odd index are shifted two
//! characters to the right, which is close enough to the half-cell shift of the grid.
//!
//! * `##` is a cell that cannot be traversed.
//! * `I` and `O` in the first character mark entrances and exits.
//! * The second character is an arrow that shows the side through which a route leaves the cell,
//!   or `.` if no route leaves the cell.
//!
//! For example, a route going east from an entrance, then south-east to an exit:
//!
//! ```text
//! I>  \
//!    . O.
//! ```

use std::collections::HashMap;
use std::fmt::Write;

use crate::generator::path::Path;
use crate::hex::{Direction, Forcing, Grid};

/// Arrow character for a direction.
///
/// Opposite directions share the same character, except east and west.
fn arrow(direction: Direction) -> char {
    match direction {
        Direction::E => '>',
        Direction::W => '<',
        Direction::NE | Direction::SW => '/',
        Direction::NW | Direction::SE => '\\',
    }
}

/// Render the grid and its routes.
///
/// When several routes leave the same cell, or a random walk leaves it several times, the last
/// step wins.
pub fn render(grid: &Grid, paths: &[Path]) -> String {
    let mut arrows: HashMap<(usize, usize), char> = HashMap::new();
    let mut ends: HashMap<(usize, usize), char> = HashMap::new();

    for p in paths {
        let last: usize = p.len().saturating_sub(1);
        for (i, (cell, step)) in p.iter().zip(p.steps(grid)).enumerate() {
            if i < last {
                arrows.insert(cell.coordinates(), arrow(step.to));
            }
        }
        if let Some(c) = p.get_first() {
            ends.insert(c.coordinates(), 'I');
        }
        if let Some(c) = p.get_last() {
            ends.insert(c.coordinates(), 'O');
        }
    }

    let mut out: String = String::new();
    for row in 0..grid.row_count() {
        if row % 2 == 1 {
            out.push_str("  ");
        }
        let tokens: Vec<String> = (0..grid.column_count(row))
            .filter_map(|column| grid.cell(row, column))
            .map(|c| {
                let at: (usize, usize) = c.coordinates();
                let mark: char = match c.forcing() {
                    Forcing::NotTraversable => return "##".to_string(),
                    Forcing::Entrance => 'I',
                    Forcing::Exit => 'O',
                    Forcing::None => ends.get(&at).copied().unwrap_or(' '),
                };
                let way: char = arrows.get(&at).copied().unwrap_or('.');
                format!("{mark}{way}")
            })
            .collect();
        out.push_str(&tokens.join(" "));
        out.push('\n');
    }
    out
}

/// List the routes, one line per route, as `(row, column)` coordinates.
pub fn describe_paths(paths: &[Path]) -> String {
    let mut out: String = String::new();
    for (i, p) in paths.iter().enumerate() {
        let cells: Vec<String> = p
            .iter()
            .map(|c| format!("({}, {})", c.row(), c.column()))
            .collect();
        // Writing to a String cannot fail
        let _ = writeln!(out, "Route {} ({} cells): {}", i + 1, p.len(), cells.join(" "));
    }
    out
}
