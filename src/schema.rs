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

//! The fixed column layout of a training dataset.
//!
//! Every dataset begins with the same five metadata columns, and everything
//! after them is a model feature.
//! The engine's data generator emits features in (midgame, endgame) pairs with
//! `_mg`/`_eg` suffixes, but the tuner never interprets the names: it only
//! preserves their order, since the exported weight map is paired with feature
//! columns positionally.

use crate::error::TuneError;

/// The metadata columns that must begin every dataset, in order.
/// `label` is the regression target; the rest are diagnostics from data
/// generation and are not model inputs.
pub const METADATA_COLUMNS: [&str; 5] = ["label", "phase", "score_mg", "score_eg", "eval"];

/// The column layout of one dataset: the metadata block followed by the named
/// feature columns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schema {
    feature_names: Vec<String>,
}

impl Schema {
    /// Parse a header row into a schema.
    ///
    /// # Errors
    ///
    /// Returns `TuneError::Schema` if the header has fewer columns than the
    /// metadata block, or if the metadata columns are misnamed or out of
    /// order.
    pub fn from_header(header: &[&str]) -> Result<Schema, TuneError> {
        if header.len() < METADATA_COLUMNS.len() {
            return Err(TuneError::Schema(format!(
                "expected at least {} columns, found {}",
                METADATA_COLUMNS.len(),
                header.len()
            )));
        }
        for (found, expected) in header.iter().zip(METADATA_COLUMNS) {
            if *found != expected {
                return Err(TuneError::Schema(format!(
                    "expected metadata column `{expected}`, found `{found}`"
                )));
            }
        }

        Ok(Schema {
            feature_names: header[METADATA_COLUMNS.len()..]
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        })
    }

    #[must_use]
    /// Get the names of the feature columns, in dataset order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    #[must_use]
    /// Get the number of feature columns.
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    #[must_use]
    /// Get the total number of columns a data row must have.
    pub fn n_columns(&self) -> usize {
        METADATA_COLUMNS.len() + self.feature_names.len()
    }

    #[must_use]
    /// Get the name of the column at `index`, counting metadata columns.
    pub fn column_name(&self, index: usize) -> &str {
        if index < METADATA_COLUMNS.len() {
            METADATA_COLUMNS[index]
        } else {
            &self.feature_names[index - METADATA_COLUMNS.len()]
        }
    }
}
