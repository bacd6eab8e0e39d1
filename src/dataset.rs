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

//! Loading labeled training positions from a delimited text file.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    error::TuneError,
    schema::{Schema, METADATA_COLUMNS},
};

/// A loaded training dataset: one labeled position per row.
///
/// The feature matrix is stored row-major, with one `f32` per feature column,
/// in the column order of the source file.
/// Metadata columns other than `label` are validated as numeric and then
/// discarded, since they are data-generation diagnostics rather than model
/// inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    schema: Schema,
    features: Vec<f32>,
    labels: Vec<f32>,
}

impl Dataset {
    /// Load a dataset from a comma-delimited text file with a header row.
    ///
    /// # Errors
    ///
    /// * `TuneError::Io` if the file cannot be opened or read.
    /// * `TuneError::Schema` if the header does not match the metadata-block
    ///   convention. This is checked before any data row is parsed.
    /// * `TuneError::Ragged` if a row's column count disagrees with the
    ///   header's.
    /// * `TuneError::Parse` if a cell is not numeric. Rows are never silently
    ///   skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Dataset, TuneError> {
        let path = path.as_ref();
        let io_err = |source| TuneError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let mut lines = BufReader::new(file).lines();

        let header_line = match lines.next() {
            Some(line) => line.map_err(io_err)?,
            None => return Err(TuneError::Schema("empty file".into())),
        };
        let header: Vec<&str> = header_line.split(',').map(str::trim).collect();
        let schema = Schema::from_header(&header)?;

        let n_columns = schema.n_columns();
        let mut features = Vec::new();
        let mut labels = Vec::new();
        for (line_idx, line) in lines.enumerate() {
            // line 1 is the header
            let row = line_idx + 2;
            let line = line.map_err(io_err)?;
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            if cells.len() != n_columns {
                return Err(TuneError::Ragged {
                    row,
                    expected: n_columns,
                    found: cells.len(),
                });
            }
            for (col_idx, cell) in cells.iter().enumerate() {
                let value: f32 = cell.parse().map_err(|_| TuneError::Parse {
                    row,
                    col: schema.column_name(col_idx).to_string(),
                    value: (*cell).to_string(),
                })?;
                if col_idx == 0 {
                    labels.push(value);
                } else if col_idx >= METADATA_COLUMNS.len() {
                    features.push(value);
                }
            }
        }

        Ok(Dataset {
            schema,
            features,
            labels,
        })
    }

    #[cfg(test)]
    /// Assemble a dataset directly, without a backing file.
    pub(crate) fn from_parts(schema: Schema, features: Vec<f32>, labels: Vec<f32>) -> Dataset {
        assert_eq!(features.len(), labels.len() * schema.n_features());
        Dataset {
            schema,
            features,
            labels,
        }
    }

    #[must_use]
    /// Get the number of rows.
    pub fn n_rows(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    /// Get the number of feature columns.
    pub fn n_features(&self) -> usize {
        self.schema.n_features()
    }

    #[must_use]
    /// Get the feature-column names, in dataset order.
    pub fn feature_names(&self) -> &[String] {
        self.schema.feature_names()
    }

    #[must_use]
    /// Get the feature values of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn row(&self, index: usize) -> &[f32] {
        let width = self.n_features();
        &self.features[index * width..(index + 1) * width]
    }

    #[must_use]
    /// Get the label of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn label(&self, index: usize) -> f32 {
        self.labels[index]
    }

    #[must_use]
    /// Get the label vector.
    pub fn labels(&self) -> &[f32] {
        &self.labels
    }
}
