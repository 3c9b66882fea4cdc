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

//! Route generation algorithms and their settings.
//!
//! The settings are serialized with the field names used in exported grids, for example:
//!
//! ```json
//! {
//!   "algorithm": "The Traveling Gnome",
//!   "algorithmSettings": { "numEntrances": 1, "numExits": 2, "wandering": 0.5 }
//! }
//! ```
//!
//! Missing fields take their default values.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::FromRepr;

use super::error::GeneratorError;
use crate::config::GENERATOR_ALGORITHMS;

/// Maximum number of steps of a random walk before giving up.
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Route generation algorithm.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(usize)]
pub enum Algorithm {
    /// Cost-weighted shortest path from entrance to exit.
    Direct,

    /// Random walk from entrance to exit.
    Drunkard,

    /// Direct route with random detours along the way.
    #[default]
    #[serde(rename = "The Traveling Gnome")]
    #[value(name = "gnome", alias = "the-traveling-gnome")]
    TheTravelingGnome,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", GENERATOR_ALGORITHMS[*self as usize])
    }
}

impl FromStr for Algorithm {
    type Err = GeneratorError;

    /// Parse the display name of an algorithm, such as `The Traveling Gnome`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GENERATOR_ALGORITHMS
            .iter()
            .position(|name| *name == s)
            .and_then(Algorithm::from_repr)
            .ok_or_else(|| GeneratorError::UnknownAlgorithm(s.to_string()))
    }
}

/// Verify that the value is between 0 and 1.
fn check_unit_interval(name: &'static str, value: f64) -> Result<(), GeneratorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidParameter { name, value })
    }
}

/// Settings for the [`Algorithm::Direct`] algorithm.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DirectConfig {
    /// Number of entrances when none are forced in the grid.
    pub num_entrances: usize,

    /// Number of exits when none are forced in the grid.
    pub num_exits: usize,

    /// How much the route is affected by random perturbations (0-1).
    /// At 0, the route is a shortest path in number of cells.
    pub randomness: f64,
}

impl Default for DirectConfig {
    fn default() -> Self {
        Self {
            num_entrances: 1,
            num_exits: 1,
            randomness: 0.0,
        }
    }
}

impl DirectConfig {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        check_unit_interval("Randomness", self.randomness)
    }
}

/// Settings for the [`Algorithm::Drunkard`] algorithm.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DrunkardConfig {
    pub num_entrances: usize,
    pub num_exits: usize,

    /// Number of steps after which a walk that has not found its exit is abandoned.
    pub max_steps: usize,
}

impl Default for DrunkardConfig {
    fn default() -> Self {
        Self {
            num_entrances: 1,
            num_exits: 1,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Settings for the [`Algorithm::TheTravelingGnome`] algorithm.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GnomeConfig {
    pub num_entrances: usize,
    pub num_exits: usize,

    /// How much wandering the gnome does in its travels (0-1). This affects the tortuosity of
    /// the routes as well as the number of detours.
    pub wandering: f64,
}

impl Default for GnomeConfig {
    fn default() -> Self {
        Self {
            num_entrances: 1,
            num_exits: 1,
            wandering: 0.5,
        }
    }
}

impl GnomeConfig {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        check_unit_interval("Wandering", self.wandering)
    }
}

/// Algorithm with its settings.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(tag = "algorithm", content = "algorithmSettings")]
pub enum AlgorithmConfig {
    Direct(DirectConfig),
    Drunkard(DrunkardConfig),
    #[serde(rename = "The Traveling Gnome")]
    TravelingGnome(GnomeConfig),
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self::for_algorithm(Algorithm::default())
    }
}

impl AlgorithmConfig {
    /// Default settings for the given algorithm.
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Direct => Self::Direct(DirectConfig::default()),
            Algorithm::Drunkard => Self::Drunkard(DrunkardConfig::default()),
            Algorithm::TheTravelingGnome => Self::TravelingGnome(GnomeConfig::default()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Direct(_) => Algorithm::Direct,
            Self::Drunkard(_) => Algorithm::Drunkard,
            Self::TravelingGnome(_) => Algorithm::TheTravelingGnome,
        }
    }

    /// Verify that the settings are within their ranges.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        match self {
            Self::Direct(c) => c.validate(),
            Self::Drunkard(_) => Ok(()),
            Self::TravelingGnome(c) => c.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names() {
        for name in GENERATOR_ALGORITHMS {
            let a: Algorithm = name.parse().unwrap();
            assert_eq!(a.to_string(), name);
        }
        assert_eq!(
            "Sightseer".parse::<Algorithm>(),
            Err(GeneratorError::UnknownAlgorithm("Sightseer".to_string()))
        );
        assert_eq!(Algorithm::default().to_string(), crate::config::DEFAULT_ALGORITHM);
    }

    #[test]
    fn ranges_are_validated() {
        let mut c: DirectConfig = DirectConfig::default();
        assert!(c.validate().is_ok());
        c.randomness = 1.0;
        assert!(c.validate().is_ok());
        c.randomness = 1.5;
        assert_eq!(
            c.validate(),
            Err(GeneratorError::InvalidParameter {
                name: "Randomness",
                value: 1.5
            })
        );

        let g: GnomeConfig = GnomeConfig {
            wandering: -0.1,
            ..GnomeConfig::default()
        };
        assert!(AlgorithmConfig::TravelingGnome(g).validate().is_err());
        let g: GnomeConfig = GnomeConfig {
            wandering: f64::NAN,
            ..GnomeConfig::default()
        };
        assert!(g.validate().is_err());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let c: AlgorithmConfig = serde_json::from_str(
            r#"{"algorithm": "The Traveling Gnome", "algorithmSettings": {"numExits": 3}}"#,
        )
        .unwrap();
        assert_eq!(
            c,
            AlgorithmConfig::TravelingGnome(GnomeConfig {
                num_entrances: 1,
                num_exits: 3,
                wandering: 0.5
            })
        );

        let c: AlgorithmConfig =
            serde_json::from_str(r#"{"algorithm": "Drunkard", "algorithmSettings": {}}"#).unwrap();
        assert_eq!(c, AlgorithmConfig::for_algorithm(Algorithm::Drunkard));
    }

    #[test]
    fn settings_serialize_with_export_names() {
        let c: AlgorithmConfig = AlgorithmConfig::Direct(DirectConfig {
            num_entrances: 2,
            num_exits: 1,
            randomness: 0.25,
        });
        let v: serde_json::Value = serde_json::to_value(c).unwrap();
        assert_eq!(v["algorithm"], "Direct");
        assert_eq!(v["algorithmSettings"]["numEntrances"], 2);
        assert_eq!(v["algorithmSettings"]["randomness"], 0.25);
    }
}
