/*
error.rs

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

//! Errors raised while generating routes.

use thiserror::Error;

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// A configuration value is outside its range.
    #[error("{name} must be between 0 and 1, but it was {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Not enough traversable boundary cells to pick the requested entrances and exits.
    #[error(
        "Not enough boundary cells for entrances and exits: {requested} requested, {available} available"
    )]
    InsufficientBoundary { requested: usize, available: usize },

    /// No entrance or no exit to connect.
    #[error("At least one entrance and one exit are required")]
    MissingTerminals,

    /// The weighted search could not connect the two cells.
    #[error("No path between {from:?} and {to:?}")]
    NoPath {
        from: (usize, usize),
        to: (usize, usize),
    },

    /// The random walk reached a cell with no traversable neighbor.
    #[error("Cannot find a valid neighbor for {at:?}")]
    NoValidNeighbor { at: (usize, usize) },

    /// The random walk did not reach the exit within the allowed number of steps.
    #[error("No exit reached after {limit} steps")]
    StepLimitExceeded { limit: usize },

    /// The back-pointer chain of the weighted search is broken.
    #[error("Path reconstruction failed at {at:?}")]
    Reconstruction { at: (usize, usize) },

    /// The algorithm name is not known.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}
