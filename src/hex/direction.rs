/*
direction.rs

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

//! Compass directions in the hexagonal grid and angle resolution between cells.
//!
//! Rows are numbered from top to bottom and columns from left to right.
//! Odd rows are shifted to the right by half a cell width, so the north-east neighbor of a cell
//! on an even row has the same column number despite being to the right.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::fmt;
use strum_macros::FromRepr;

const SQRT_3: f64 = 1.732_050_807_568_877_2_f64;
const PI_OVER_SIX: f64 = PI / 6.0;

// Upper bounds of the angle buckets. Each bucket is 60 degrees wide and centered on its
// direction.
const E_END: f64 = PI_OVER_SIX;
const NE_END: f64 = 3.0 * PI_OVER_SIX;
const NW_END: f64 = 5.0 * PI_OVER_SIX;
const W_END: f64 = 7.0 * PI_OVER_SIX;
const SW_END: f64 = 9.0 * PI_OVER_SIX;
const SE_END: f64 = 11.0 * PI_OVER_SIX;

/// The six neighbor directions of a vertex-up hexagon, counter-clockwise from east.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, FromRepr,
)]
#[repr(usize)]
pub enum Direction {
    E,
    NE,
    NW,
    W,
    SW,
    SE,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::E => write!(f, "E"),
            Direction::NE => write!(f, "NE"),
            Direction::NW => write!(f, "NW"),
            Direction::W => write!(f, "W"),
            Direction::SW => write!(f, "SW"),
            Direction::SE => write!(f, "SE"),
        }
    }
}

impl Direction {
    /// All the directions, in their fixed order.
    pub const ALL: [Direction; 6] = [
        Direction::E,
        Direction::NE,
        Direction::NW,
        Direction::W,
        Direction::SW,
        Direction::SE,
    ];

    /// Direction pointing the other way (three steps around the hexagon).
    pub fn opposite(self) -> Self {
        Self::rotate(self, 3)
    }

    /// Direction `steps` sixths of a turn counter-clockwise from this one.
    pub fn rotate(self, steps: usize) -> Self {
        Direction::from_repr((self as usize + steps) % 6).unwrap_or(self)
    }

    /// Direction whose bucket contains the given unit-circle angle.
    ///
    /// The angle is first brought back into `[0, 2π)`. Exactly on a bucket boundary, the angle
    /// belongs to the following bucket; at the top of the range the direction wraps back to
    /// east.
    pub fn from_angle(angle_radians: f64) -> Self {
        let angle: f64 = angle_radians.rem_euclid(TAU);
        if angle < E_END {
            Direction::E
        } else if angle < NE_END {
            Direction::NE
        } else if angle < NW_END {
            Direction::NW
        } else if angle < W_END {
            Direction::W
        } else if angle < SW_END {
            Direction::SW
        } else if angle < SE_END {
            Direction::SE
        } else {
            Direction::E
        }
    }

    /// Row and column offsets to the neighbor in this direction, for a cell on the given row.
    ///
    /// Rows on the even index are not shifted, so moving diagonally from them lands one column
    /// further left than moving diagonally from an odd row.
    pub fn offset(self, row: usize) -> (isize, isize) {
        let shift: isize = if row % 2 == 0 { -1 } else { 0 };
        match self {
            Direction::E => (0, 1),
            Direction::NE => (-1, 1 + shift),
            Direction::NW => (-1, shift),
            Direction::W => (0, -1),
            Direction::SW => (1, shift),
            Direction::SE => (1, 1 + shift),
        }
    }
}

/// Angle in radians, between 0 and 2π, from the center of the source cell to the center of the
/// destination cell.
///
/// The cells do not need to be adjacent. The computation accounts for the half-cell shift of odd
/// rows and for the width to height ratio of a hexagon (2 : √3).
pub fn angle_between(row_src: usize, col_src: usize, row_dst: usize, col_dst: usize) -> f64 {
    // Only when one row is odd and the other even is there a shift to apply
    let x_shift: f64 = -0.5 * ((row_src % 2) as f64 - (row_dst % 2) as f64);
    let x_diff: f64 = col_dst as f64 - col_src as f64 + x_shift;

    // Rows grow downward, so the vertical difference is reversed
    let y_diff: f64 = row_src as f64 - row_dst as f64;

    let angle: f64 = (2.0 * y_diff).atan2(SQRT_3 * x_diff);
    if angle < 0.0 { TAU + angle } else { angle }
}

/// Closest direction for a single step from the source cell toward the destination cell.
pub fn direction_between(
    row_src: usize,
    col_src: usize,
    row_dst: usize,
    col_dst: usize,
) -> Direction {
    Direction::from_angle(angle_between(row_src, col_src, row_dst, col_dst))
}
