/*
cost_surface.rs

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

//! Procedural cost surface used to shape the direct routes.
//!
//! The surface looks (roughly) like mountainous terrain: random peaks raise the cost of the
//! cells around them, and a gradient raises the cost near the grid boundary so that routes
//! prefer the interior.
//! The result is blended with a uniform cost of 1 according to the `randomness` parameter.

use log::{Level, debug, log_enabled};
use rand::Rng;
use std::f64::consts::PI;

use crate::hex::Grid;

// Maximum height of a peak. It only needs to be large enough to have an effect.
const MAX_PEAK_COST: f64 = 1000.0;

// Proportion of the row width (in cells) that the radius of the widest peak can reach.
const MAX_PEAK_WIDTH_PROP: f64 = 0.15;

// Maximum proportion of a cell cost that the final perturbation adds or removes.
const MAX_PERTURBATION_PROP: f64 = 0.4;

// Probability for a cell to be a peak.
const PEAK_PROPORTION: f64 = 0.25;

// Cost on the boundary that encourages routes to stay in the interior. It decreases to zero
// toward the center of the grid.
const MAX_INTERIOR_INCENTIVE: f64 = MAX_PEAK_COST * 0.5;

/// Center of a "mountain" of cost.
#[derive(Debug, Copy, Clone)]
struct Peak {
    row: usize,
    column: usize,
    height: f64,
    radius: f64,
}

impl Peak {
    /// Cost that the peak adds to the cell at the given coordinates.
    ///
    /// The contribution is a raised cosine: full height at the peak, zero at the radius and
    /// beyond.
    fn contribution(&self, row: usize, column: usize) -> f64 {
        let dr: f64 = row as f64 - self.row as f64;
        let dc: f64 = column as f64 - self.column as f64;
        let distance: f64 = (dr * dr + dc * dc).sqrt();

        if distance > self.radius {
            return 0.0;
        }
        if self.radius <= 0.0 {
            // The peak only covers its own cell
            return self.height;
        }
        (0.5 * self.height * (1.0 + (distance * PI / self.radius).cos())).max(0.0)
    }
}

/// Cost of entering each cell of a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CostSurface {
    cost: Vec<Vec<f64>>,
}

impl CostSurface {
    /// Uniform surface where every cell costs 1.
    pub fn uniform(grid: &Grid) -> Self {
        Self {
            cost: (0..grid.row_count())
                .map(|row| vec![1.0; grid.column_count(row)])
                .collect(),
        }
    }

    /// Generate a new random surface for the grid.
    ///
    /// Every cell ends up with a cost between `1 - randomness` and `1`.
    /// With a `randomness` of 0, every cell costs exactly 1.
    pub fn generate<R: Rng + ?Sized>(grid: &Grid, randomness: f64, rng: &mut R) -> Self {
        let mut cost: Vec<Vec<f64>> = Self::interior_incentive(grid);
        let peaks: Vec<Peak> = Self::scatter_peaks(grid, rng);
        debug!("Cost surface: {} peaks", peaks.len());

        // Accumulate the height from all the nearby peaks rather than keeping the highest one,
        // to avoid sudden cliffs. Then perturb each cell.
        let mut max_cost: f64 = 0.0;
        for (row, costs) in cost.iter_mut().enumerate() {
            for (column, c) in costs.iter_mut().enumerate() {
                let mut cell_cost: f64 = *c;
                for p in &peaks {
                    cell_cost += p.contribution(row, column);
                }
                let perturbation: f64 =
                    cell_cost * MAX_PERTURBATION_PROP * rng.random_range(-1.0..=1.0);
                cell_cost += perturbation;
                *c = cell_cost;
                if cell_cost > max_cost {
                    max_cost = cell_cost;
                }
            }
        }

        // Scale the random part between 0 and `randomness`, and add the deterministic part
        let determinism: f64 = 1.0 - randomness;
        for c in cost.iter_mut().flatten() {
            let scaled: f64 = if max_cost > 0.0 {
                randomness * (*c / max_cost)
            } else {
                0.0
            };
            *c = scaled + determinism;
        }

        let surface: Self = Self { cost };
        if log_enabled!(Level::Trace) {
            surface.trace();
        }
        surface
    }

    /// Initial cost, decreasing from the boundary toward the center of the grid.
    fn interior_incentive(grid: &Grid) -> Vec<Vec<f64>> {
        let num_rows: usize = grid.row_count();
        let half_rows: f64 = num_rows as f64 / 2.0;

        (0..num_rows)
            .map(|row| {
                let num_columns: usize = grid.column_count(row);
                let half_columns: f64 = num_columns as f64 / 2.0;
                // Distance from the boundary, as a proportion of the distance between the
                // boundary and the center
                let row_prop: f64 = row.min(num_rows - 1 - row) as f64 / half_rows;
                (0..num_columns)
                    .map(|column| {
                        let column_prop: f64 =
                            column.min(num_columns - 1 - column) as f64 / half_columns;
                        (MAX_INTERIOR_INCENTIVE * (1.0 - row_prop.min(column_prop))).max(0.0)
                    })
                    .collect()
            })
            .collect()
    }

    /// Randomly select the peaks and their attributes.
    fn scatter_peaks<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Vec<Peak> {
        let mut peaks: Vec<Peak> = Vec::new();
        for cell in grid {
            if rng.random_bool(PEAK_PROPORTION) {
                let height: f64 = rng.random::<f64>() * MAX_PEAK_COST;
                let radius: f64 = rng.random::<f64>()
                    * MAX_PEAK_WIDTH_PROP
                    * grid.column_count(cell.row()) as f64;
                peaks.push(Peak {
                    row: cell.row(),
                    column: cell.column(),
                    height,
                    radius,
                });
            }
        }
        peaks
    }

    /// Cost of entering the cell at the given coordinates.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.cost.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Print the surface.
    fn trace(&self) {
        for costs in &self.cost {
            let s: String = costs
                .iter()
                .map(|c| format!("{c:5.2}"))
                .collect::<Vec<String>>()
                .join(" ");
            log::trace!("{s}");
        }
    }
}
