/*
config.rs

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

//! Application-wide constants.

/// Number of rows of a new grid.
pub const DEFAULT_ROWS: usize = 8;

/// Nominal number of columns of a new grid (each row gets about half of them).
pub const DEFAULT_COLUMNS: usize = 35;

pub const MIN_ROWS: usize = 2;
pub const MAX_ROWS: usize = 100;
pub const MIN_COLUMNS: usize = 2;
pub const MAX_COLUMNS: usize = 100;

/// Algorithm used when the user does not select one.
pub const DEFAULT_ALGORITHM: &str = "The Traveling Gnome";

/// Names of the path generation algorithms, in the order they are presented.
pub const GENERATOR_ALGORITHMS: [&str; 3] = ["Direct", "Drunkard", "The Traveling Gnome"];

/// Long version text for `--version`.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2026 Hexroutes Contributors
License GPL-3.0-or-later <https://www.gnu.org/licenses/>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);
