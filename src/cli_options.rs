/*
cli_options.rs

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

//! Process command-line options.
//!
//! Hexroutes generates the routes for a grid and prints them.
//! The grid is either a new grid of the given size or a grid loaded from an export file.
//! Entrances, exits, and walls can be painted on the grid from the command line.
//!
//! # Examples
//!
//! Generate two routes with the default algorithm (The Traveling Gnome) on a small grid:
//!
//! ```text
//! $ hexroutes --rows 6 --columns 16 --entrances 2 --seed 3
//! ```
//!
//! Paint a wall, use the Direct algorithm, and save the result:
//!
//! ```text
//! $ hexroutes -a direct --randomness 0.4 --entrance 0,2 --exit 7,3 --wall 4,1 -o routes.json
//! ```

use clap::Parser;
use log::{debug, warn};
use std::env;
use std::path::PathBuf;

use hexroutes::config::{
    COPYRIGHT_NOTICE, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_COLUMNS, MAX_ROWS, MIN_COLUMNS, MIN_ROWS,
};
use hexroutes::draw;
use hexroutes::export::{ExportFile, ExportRecord};
use hexroutes::generator::Generator;
use hexroutes::generator::config::{Algorithm, AlgorithmConfig};
use hexroutes::generator::path::Path;
use hexroutes::hex::{Forcing, Grid};

/// Generate enemy routes across hexagonal tower-defense grids.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of rows in the grid
    #[arg(long, default_value_t = DEFAULT_ROWS, value_parser = parse_rows)]
    rows: usize,

    /// Nominal number of columns in the grid (even rows get the extra column when odd)
    #[arg(long, default_value_t = DEFAULT_COLUMNS, value_parser = parse_columns)]
    columns: usize,

    /// Route generation algorithm
    #[arg(value_enum, short, long, default_value_t = Algorithm::default())]
    algorithm: Algorithm,

    /// Number of entrances to draw when the grid has no forced entrance
    #[arg(long)]
    entrances: Option<usize>,

    /// Number of exits to draw when the grid has no forced exit
    #[arg(long)]
    exits: Option<usize>,

    /// Randomness of the Direct routes, between 0 and 1
    #[arg(long)]
    randomness: Option<f64>,

    /// Wandering of The Traveling Gnome, between 0 and 1
    #[arg(long)]
    wandering: Option<f64>,

    /// Maximum number of steps of a Drunkard walk
    #[arg(long)]
    max_steps: Option<usize>,

    /// Force an entrance at ROW,COLUMN (repeatable)
    #[arg(long, value_name = "ROW,COLUMN", value_parser = parse_position)]
    entrance: Vec<(usize, usize)>,

    /// Force an exit at ROW,COLUMN (repeatable)
    #[arg(long, value_name = "ROW,COLUMN", value_parser = parse_position)]
    exit: Vec<(usize, usize)>,

    /// Make the cell at ROW,COLUMN impassable (repeatable)
    #[arg(long, value_name = "ROW,COLUMN", value_parser = parse_position)]
    wall: Vec<(usize, usize)>,

    /// Load the grid size and forcings from an export file
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// Seed for reproducible routes
    #[arg(long)]
    seed: Option<u64>,

    /// Save the grid and its routes to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse a `ROW,COLUMN` pair.
fn parse_position(s: &str) -> Result<(usize, usize), String> {
    let (row, column) = s
        .split_once(',')
        .ok_or_else(|| format!("'{s}' is not in the ROW,COLUMN format"))?;
    let row: usize = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row '{row}': {e}"))?;
    let column: usize = column
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{column}': {e}"))?;
    Ok((row, column))
}

fn parse_bounded(s: &str, min: usize, max: usize) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|e| format!("'{s}': {e}"))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not between {min} and {max}"))
    }
}

fn parse_rows(s: &str) -> Result<usize, String> {
    parse_bounded(s, MIN_ROWS, MAX_ROWS)
}

fn parse_columns(s: &str) -> Result<usize, String> {
    parse_bounded(s, MIN_COLUMNS, MAX_COLUMNS)
}

/// Parse and process command-line options.
///
/// Return the exit status of the program.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("{args:?}");

    run(&args)
}

/// Generate and print the routes.
fn run(args: &Args) -> u8 {
    //
    // Build the grid
    //
    let mut grid: Grid = match &args.load {
        Some(file) => match ExportFile::new(file.clone()).load() {
            Ok(record) => match record.to_grid() {
                Ok(g) => g,
                Err(e) => {
                    eprintln!("Error: {}: {e}", file.display());
                    return 1;
                }
            },
            Err(e) => {
                eprintln!("Error: cannot load {}: {e}", file.display());
                return 1;
            }
        },
        None => Grid::new(args.rows, args.columns),
    };

    let paint: [(&Vec<(usize, usize)>, Forcing); 3] = [
        (&args.wall, Forcing::NotTraversable),
        (&args.entrance, Forcing::Entrance),
        (&args.exit, Forcing::Exit),
    ];
    for (positions, forcing) in paint {
        for (row, column) in positions {
            if !grid.set_forcing(*row, *column, forcing) {
                eprintln!("Error: cell ({row}, {column}) is outside the grid");
                return 1;
            }
        }
    }

    //
    // Generate the routes
    //
    let config: AlgorithmConfig = build_config(args);
    let mut generator: Generator<_> = match args.seed {
        Some(seed) => Generator::seeded(seed),
        None => Generator::from_entropy(),
    };
    let paths: Vec<Path> = match generator.generate(&grid, &config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    print!("{}", draw::render(&grid, &paths));
    print!("{}", draw::describe_paths(&paths));

    //
    // Save the result
    //
    if let Some(file) = &args.output {
        let record: ExportRecord = ExportRecord::new(&grid, &paths, &config);
        if let Err(e) = ExportFile::new(file.clone()).save(&record) {
            eprintln!("Error: cannot save {}: {e}", file.display());
            return 1;
        }
    }
    0
}

/// Settings of the selected algorithm, with the values from the command line.
fn build_config(args: &Args) -> AlgorithmConfig {
    let mut config: AlgorithmConfig = AlgorithmConfig::for_algorithm(args.algorithm);
    match &mut config {
        AlgorithmConfig::Direct(c) => {
            c.num_entrances = args.entrances.unwrap_or(c.num_entrances);
            c.num_exits = args.exits.unwrap_or(c.num_exits);
            c.randomness = args.randomness.unwrap_or(c.randomness);
        }
        AlgorithmConfig::Drunkard(c) => {
            c.num_entrances = args.entrances.unwrap_or(c.num_entrances);
            c.num_exits = args.exits.unwrap_or(c.num_exits);
            c.max_steps = args.max_steps.unwrap_or(c.max_steps);
        }
        AlgorithmConfig::TravelingGnome(c) => {
            c.num_entrances = args.entrances.unwrap_or(c.num_entrances);
            c.num_exits = args.exits.unwrap_or(c.num_exits);
            c.wandering = args.wandering.unwrap_or(c.wandering);
        }
    }

    let ignored: [(&str, bool); 3] = [
        ("--randomness", args.randomness.is_some() && args.algorithm != Algorithm::Direct),
        ("--max-steps", args.max_steps.is_some() && args.algorithm != Algorithm::Drunkard),
        (
            "--wandering",
            args.wandering.is_some() && args.algorithm != Algorithm::TheTravelingGnome,
        ),
    ];
    for (option, is_ignored) in ignored {
        if is_ignored {
            warn!("{option} is ignored by the {} algorithm", args.algorithm);
        }
    }
    config
}
