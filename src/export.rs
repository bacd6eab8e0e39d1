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

//! Writing tuned weights back out as a named integer weight map.
//!
//! The map is what Aether's evaluation configuration consumes: each feature
//! name from the dataset header, mapped to its learned weight rounded to an
//! integer centipawn value.
//! A fresh map is produced on every run; nothing is merged from a previous
//! export.

use std::{fs, path::Path};

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};

use crate::error::TuneError;

/// Pair each feature name with its weight, rounded to an integer centipawn
/// value.
///
/// Rounding is half-away-from-zero (`f32::round`), so `12.4` exports as `12`
/// and `-7.6` as `-8`.
/// Names keep their dataset column order in the returned map.
///
/// # Errors
///
/// Returns `TuneError::Shape` if the name and weight counts differ, since
/// pairing them positionally would mislabel every weight after the drift.
pub fn export(feature_names: &[String], weights: &[f32]) -> Result<Map<String, Value>, TuneError> {
    if feature_names.len() != weights.len() {
        return Err(TuneError::Shape {
            weights: weights.len(),
            features: feature_names.len(),
        });
    }

    let mut map = Map::new();
    for (name, &w) in feature_names.iter().zip(weights.iter()) {
        map.insert(name.clone(), Value::from(w.round() as i64));
    }

    Ok(map)
}

/// Serialize a weight map to `path` as indented JSON, overwriting any
/// existing file.
///
/// The map is written to a sibling temporary file and renamed into place, so
/// the destination is never left half-written.
///
/// # Errors
///
/// Returns `TuneError::Io` if the temporary file cannot be written or the
/// rename fails.
pub fn write(map: &Map<String, Value>, path: impl AsRef<Path>) -> Result<(), TuneError> {
    let path = path.as_ref();
    let io_err = |source| TuneError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    map.serialize(&mut ser).map_err(|e| io_err(e.into()))?;
    buf.push(b'\n');

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &buf).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    /// Test the documented rounding example: 12.4 down, -7.6 away from zero.
    fn rounds_to_integers() {
        let map = export(&names(&["f0_mg", "f0_eg"]), &[12.4, -7.6]).unwrap();
        assert_eq!(map["f0_mg"], 12);
        assert_eq!(map["f0_eg"], -8);
    }

    #[test]
    fn halves_round_away_from_zero() {
        let map = export(&names(&["a", "b", "c"]), &[0.5, -0.5, 2.5]).unwrap();
        assert_eq!(map["a"], 1);
        assert_eq!(map["b"], -1);
        assert_eq!(map["c"], 3);
    }

    #[test]
    /// Test that the map iterates in dataset column order, not alphabetical
    /// order.
    fn column_order_is_preserved() {
        let map = export(&names(&["z_mg", "a_mg", "m_mg"]), &[1., 2., 3.]).unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["z_mg", "a_mg", "m_mg"]);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let result = export(&names(&["f0_mg"]), &[1., 2.]);
        assert!(matches!(
            result,
            Err(TuneError::Shape {
                weights: 2,
                features: 1
            })
        ));
    }

    #[test]
    /// Test that writing replaces an existing map wholesale.
    fn write_overwrites_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.json");

        let first = export(&names(&["old_mg"]), &[100.]).unwrap();
        write(&first, &path).unwrap();
        let second = export(&names(&["new_mg"]), &[-25.]).unwrap();
        write(&second, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let read: Map<String, Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(read, second);
        assert!(!text.contains("old_mg"));
    }

    #[test]
    fn output_is_indented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.json");
        let map = export(&names(&["f0_mg"]), &[7.]).unwrap();
        write(&map, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n    \"f0_mg\": 7\n}\n");
    }

    #[test]
    fn unwritable_destination_is_io_error() {
        let map = export(&names(&["f0_mg"]), &[7.]).unwrap();
        let result = write(&map, "no/such/directory/weights.json");
        assert!(matches!(result, Err(TuneError::Io { .. })));
    }
}
