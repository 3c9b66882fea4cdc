/*
hex.rs

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

//! Hexagonal grid model.
//!
//! The grid uses offset-row addressing: a cell is identified by its row, counted from the top,
//! and its column in that row.
//! Odd rows are shifted right by half a cell width:
//!
//! ```text
//!  (0,0) (0,1) (0,2)
//!     (1,0) (1,1) (1,2)
//!  (2,0) (2,1) (2,2)
//! ```
//!
//! * [`direction::Direction`] names the six neighbors of a cell and resolves the direction from a
//!   cell toward any other cell.
//! * [`cell::Cell`] is a position with its [`cell::Forcing`] (entrance, exit, impassable).
//! * [`grid::Grid`] owns the cells and answers neighbor and boundary queries.
//! * [`step::Step`] describes how a route crosses a cell, for display layers.

pub mod cell;
pub mod direction;
pub mod grid;
pub mod step;

pub use cell::{Cell, Forcing};
pub use direction::Direction;
pub use grid::Grid;
