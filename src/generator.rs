/*
generator.rs

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

//! Generate enemy routes across a grid.
//!
//! Three algorithms are available, selected with an [`config::AlgorithmConfig`] object:
//!
//! * [`direct`] connects each entrance to an exit with a shortest path over a random cost
//!   surface. The `randomness` setting controls how circuitous the routes are.
//!
//! * [`drunkard`] takes a random walk from each entrance until it stumbles on the exit.
//!
//! * [`gnome`] (The Traveling Gnome) follows a direct route, but takes detours to nearby cells
//!   along the way. The `wandering` setting controls the number of detours.
//!
//! All the algorithms first select the entrances and exits with
//! [`terminals::extract_path_terminals`].
//! Forced entrances and exits in the grid win over the configured numbers of entrances and
//! exits.
//!
//! The [`Generator`] object owns the random number generator that all the algorithms draw from.
//! Use [`Generator::seeded`] to get reproducible routes.

pub mod config;
pub mod cost_surface;
pub mod direct;
pub mod drunkard;
pub mod error;
pub mod gnome;
pub mod path;
pub mod terminals;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

use crate::hex::Grid;
use config::{Algorithm, AlgorithmConfig};
use error::GeneratorError;
use path::Path;

/// Route generator.
pub struct Generator<R: Rng> {
    rng: R,
}

impl Generator<ChaCha8Rng> {
    /// Create a generator that always produces the same routes for the same seed, grid, and
    /// settings.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create a generator seeded from the thread random number generator.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate the routes for the grid with the given algorithm and settings.
    ///
    /// The grid is not modified.
    ///
    /// # Errors
    ///
    /// The method returns an error if the settings are out of range, if the entrances and
    /// exits cannot be selected, or if a route cannot be generated. No partial result is
    /// returned.
    pub fn generate(
        &mut self,
        grid: &Grid,
        config: &AlgorithmConfig,
    ) -> Result<Vec<Path>, GeneratorError> {
        config.validate()?;
        grid.debug();

        let start: Instant = Instant::now();
        let paths: Vec<Path> = match config {
            AlgorithmConfig::Direct(c) => direct::generate(grid, c, &mut self.rng),
            AlgorithmConfig::Drunkard(c) => drunkard::generate(grid, c, &mut self.rng),
            AlgorithmConfig::TravelingGnome(c) => gnome::generate(grid, c, &mut self.rng),
        }?;

        info!(
            "{}: {} routes generated in {} seconds",
            config.algorithm(),
            paths.len(),
            start.elapsed().as_secs_f32()
        );
        for (i, p) in paths.iter().enumerate() {
            debug!("Route {i}: {:?}", p.coordinates());
        }
        Ok(paths)
    }

    /// Generate the routes with the default settings of the algorithm with the given name, such
    /// as `The Traveling Gnome`.
    ///
    /// # Errors
    ///
    /// The method returns [`GeneratorError::UnknownAlgorithm`] for an unknown name, or any of the
    /// [`Generator::generate`] errors.
    pub fn generate_named(&mut self, grid: &Grid, name: &str) -> Result<Vec<Path>, GeneratorError> {
        let algorithm: Algorithm = name.parse()?;
        self.generate(grid, &AlgorithmConfig::for_algorithm(algorithm))
    }
}
