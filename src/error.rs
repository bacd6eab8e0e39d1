/*
  Aether Tuner, a Texel-style evaluation tuner for the Aether chess engine.
  Copyright (C) 2025 The Aether Authors

  Aether Tuner is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Aether Tuner is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Errors produced by the tuning pipeline.
//!
//! Every error here is fatal: there are no retries and no partial-epoch
//! resumption, so the binary reports the failing stage and exits.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The ways a tuning run can fail.
#[derive(Debug, Error)]
pub enum TuneError {
    /// The dataset header does not follow the metadata-block convention.
    #[error("bad dataset header: {0}")]
    Schema(String),

    /// A data cell could not be parsed as a number.
    /// Rows are numbered by file line, with the header on line 1.
    #[error("row {row}, column `{col}`: cannot parse {value:?} as a number")]
    Parse {
        row: usize,
        col: String,
        value: String,
    },

    /// A data row does not have the same number of columns as the header.
    #[error("row {row}: expected {expected} columns, found {found}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The weight vector and the feature columns have drifted apart,
    /// which would silently mispair weights with feature names.
    #[error("{weights} weights for {features} feature columns")]
    Shape { weights: usize, features: usize },

    /// Reading the dataset or writing the weight map failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
