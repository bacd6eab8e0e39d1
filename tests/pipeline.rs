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

//! End-to-end run of the tuning pipeline on a synthetic dataset.

use std::{fs, io::Write};

use aether_tuner::{
    dataset::Dataset,
    export,
    model::{Model, DEFAULT_SCALE},
    train::{train, TrainOptions},
};

#[test]
/// A sign-separable single feature must end up with a positive integer weight
/// in the written map, and the fitted model must put the winning side above
/// 1/2.
fn separable_dataset_tunes_to_positive_weight() {
    let dir = tempfile::tempdir().unwrap();
    let data_path = dir.path().join("positions.csv");
    let out_path = dir.path().join("weights.json");

    let mut file = fs::File::create(&data_path).unwrap();
    write!(
        file,
        "label,phase,score_mg,score_eg,eval,init_mg\n\
         1,24,10,5,8,1\n\
         1,18,12,6,9,1\n\
         0,24,-10,-5,-8,-1\n\
         0,18,-12,-6,-9,-1\n"
    )
    .unwrap();
    drop(file);

    let data = Dataset::load(&data_path).unwrap();
    assert_eq!(data.n_rows(), 4);
    assert_eq!(data.feature_names(), ["init_mg"]);

    let mut model = Model::new(data.n_features(), DEFAULT_SCALE);
    let opts = TrainOptions {
        epochs: 500,
        learning_rate: 0.5,
        batch_size: 2,
        seed: Some(1),
    };
    let losses = train(&mut model, &data, &opts).unwrap();
    assert!(losses.last().unwrap() < losses.first().unwrap());
    assert!(model.predict(&[1.]) > 0.5);
    assert!(model.predict(&[-1.]) < 0.5);

    let map = export::export(data.feature_names(), model.weights()).unwrap();
    export::write(&map, &out_path).unwrap();

    let text = fs::read_to_string(&out_path).unwrap();
    let read: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(read["init_mg"].as_i64().unwrap() > 0);
}
