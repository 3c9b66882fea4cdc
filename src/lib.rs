/*
lib.rs

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

//! Generate enemy routes across hexagonal tower-defense grids.
//!
//! The [`hex`] module describes the grid: its cells, their forcings (entrance, exit, wall), and
//! how cells connect to their six neighbors.
//! The [`generator`] module builds routes across a grid with one of three algorithms.
//! The [`export`] module saves grids with their routes as JSON, and [`draw`] renders them as
//! text.
//!
//! ```
//! use hexroutes::generator::Generator;
//! use hexroutes::generator::config::{AlgorithmConfig, DirectConfig};
//! use hexroutes::hex::{Forcing, Grid};
//!
//! let mut grid = Grid::new(2, 4);
//! grid.set_forcing(0, 0, Forcing::Entrance);
//! grid.set_forcing(1, 1, Forcing::Exit);
//!
//! let config = AlgorithmConfig::Direct(DirectConfig::default());
//! let paths = Generator::seeded(7).generate(&grid, &config).unwrap();
//! assert_eq!(paths[0].coordinates(), vec![(0, 0), (0, 1), (1, 1)]);
//! ```

pub mod config;
pub mod draw;
pub mod export;
pub mod generator;
pub mod hex;
