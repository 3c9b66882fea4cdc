/*
export.rs

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

//! Export and import grids with their routes.
//!
//! The exported record is a JSON document with the following structure:
//!
//! ```json
//! {
//!   "forcings": { "NONE": 0, "ENTRANCE": 1, "EXIT": 2, "NOT_TRAVERSABLE": 3 },
//!   "grid": {
//!     "nRows": 8,
//!     "nColumnsOnEvenIndexRows": 18,
//!     "nColumnsOnOddIndexRows": 17,
//!     "cells": { "0": { "3": 1 }, "7": { "10": 2 } }
//!   },
//!   "paths": [[[0, 3], [1, 3], ...]],
//!   "settings": {
//!     "algorithm": "Direct",
//!     "algorithmSettings": { "numEntrances": 1, "numExits": 1, "randomness": 0.3 }
//!   },
//!   "created": "2026-10-16T09:12:44.102518+02:00"
//! }
//! ```
//!
//! Only the cells with a forcing are listed in `cells`.
//! The codes are decoded through the `forcings` table of the record itself.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use thiserror::Error;

use crate::generator::config::AlgorithmConfig;
use crate::generator::path::Path;
use crate::hex::{Forcing, Grid};

/// Type of errors when rebuilding a grid from a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error("Unknown forcing name in the forcing table: {0}")]
    UnknownForcingName(String),

    #[error("Unknown forcing code {code} for cell ({row}, {column})")]
    UnknownForcingCode { row: usize, column: usize, code: u8 },

    #[error("Cell ({row}, {column}) is outside the grid")]
    OutOfGrid { row: usize, column: usize },

    #[error("Inconsistent grid size: {even} columns on even rows, {odd} on odd rows")]
    InconsistentShape { even: usize, odd: usize },
}

/// Size and forcings of the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridRecord {
    pub n_rows: usize,
    pub n_columns_on_even_index_rows: usize,
    pub n_columns_on_odd_index_rows: usize,

    /// Forcing codes, by row then by column. Cells without forcing are not listed.
    pub cells: BTreeMap<usize, BTreeMap<usize, u8>>,
}

/// Exported grid, with its routes and the settings used to generate them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub forcings: BTreeMap<String, u8>,
    pub grid: GridRecord,
    pub paths: Vec<Vec<[usize; 2]>>,
    pub settings: AlgorithmConfig,
    pub created: String,
}

impl ExportRecord {
    /// Build the record for the given grid and routes.
    pub fn new(grid: &Grid, paths: &[Path], settings: &AlgorithmConfig) -> Self {
        let forcings: BTreeMap<String, u8> = Forcing::ALL
            .iter()
            .map(|f| (f.name().to_string(), f.code()))
            .collect();

        let mut cells: BTreeMap<usize, BTreeMap<usize, u8>> = BTreeMap::new();
        for c in grid.iter().filter(|c| c.forcing() != Forcing::None) {
            cells
                .entry(c.row())
                .or_default()
                .insert(c.column(), c.forcing().code());
        }

        Self {
            forcings,
            grid: GridRecord {
                n_rows: grid.row_count(),
                n_columns_on_even_index_rows: grid.columns_on_even_rows(),
                n_columns_on_odd_index_rows: grid.columns_on_odd_rows(),
                cells,
            },
            paths: paths
                .iter()
                .map(|p| p.iter().map(|c| [c.row(), c.column()]).collect())
                .collect(),
            settings: *settings,
            created: chrono::Local::now().to_rfc3339(),
        }
    }

    /// Rebuild the grid, with its forcings.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid size is not consistent, if a cell is outside the
    /// grid, or if a forcing cannot be decoded.
    pub fn to_grid(&self) -> Result<Grid, ExportError> {
        let even: usize = self.grid.n_columns_on_even_index_rows;
        let odd: usize = self.grid.n_columns_on_odd_index_rows;
        if even != odd && even != odd + 1 {
            return Err(ExportError::InconsistentShape { even, odd });
        }

        let mut codes: HashMap<u8, Forcing> = HashMap::new();
        for (name, code) in &self.forcings {
            let forcing: Forcing = Forcing::from_name(name)
                .ok_or_else(|| ExportError::UnknownForcingName(name.clone()))?;
            codes.insert(*code, forcing);
        }

        let mut grid: Grid = Grid::new(self.grid.n_rows, even + odd);
        for (row, columns) in &self.grid.cells {
            for (column, code) in columns {
                let (row, column) = (*row, *column);
                let forcing: Forcing = *codes.get(code).ok_or(ExportError::UnknownForcingCode {
                    row,
                    column,
                    code: *code,
                })?;
                if !grid.set_forcing(row, column, forcing) {
                    return Err(ExportError::OutOfGrid { row, column });
                }
            }
        }
        Ok(grid)
    }
}

/// Object to save and load export records.
pub struct ExportFile {
    /// Path to the JSON file.
    file: PathBuf,
}

impl ExportFile {
    pub fn new(file: PathBuf) -> Self {
        debug!("Export file: {file:?}");
        ExportFile { file }
    }

    /// Read the record from the file.
    pub fn load(&self) -> Result<ExportRecord, Box<dyn std::error::Error>> {
        let file: File = File::open(&self.file)?;
        let reader: BufReader<File> = BufReader::new(file);
        let record: ExportRecord = serde_json::from_reader(reader)?;
        Ok(record)
    }

    /// Write the record to the file, replacing any previous content.
    pub fn save(&self, record: &ExportRecord) -> Result<(), Box<dyn std::error::Error>> {
        let file: File = File::create(&self.file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, record)?;
        writer.flush()?;
        Ok(())
    }
}
