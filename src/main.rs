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

//! Command-line entry point for the tuner.
//!
//! One invocation is one training run: load the dataset, fit from zero for
//! the configured number of epochs, and write the weight map.
//! Nothing is warm-started from a previous run.

use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use aether_tuner::{
    dataset::Dataset,
    export,
    model::{Model, DEFAULT_SCALE},
    train::{train, TrainOptions},
};

#[derive(Parser, Debug)]
#[command(name = "aether_tuner", version, about, long_about = None)]
struct Args {
    /// Training dataset emitted by the engine's data-generation pipeline.
    data: PathBuf,
    /// Destination for the tuned weight map.
    out: PathBuf,
    /// Number of passes over the dataset.
    #[arg(long, default_value_t = 100)]
    epochs: usize,
    /// Gradient descent step size.
    #[arg(long, default_value_t = 0.5)]
    lr: f32,
    /// Rows per mini-batch.
    #[arg(long, default_value_t = 16384)]
    batch: usize,
    /// Sigmoid scale constant tying the weights to the engine's centipawn
    /// scale.
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: f32,
    /// Shuffle seed, for bit-reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let tic = Instant::now();
    let data = Dataset::load(&args.data).context("failed to load dataset")?;
    info!(
        "loaded {} rows with {} feature columns in {:.2}s",
        data.n_rows(),
        data.n_features(),
        tic.elapsed().as_secs_f32()
    );

    let mut model = Model::new(data.n_features(), args.scale);
    let opts = TrainOptions {
        epochs: args.epochs,
        learning_rate: args.lr,
        batch_size: args.batch,
        seed: args.seed,
    };
    let tic = Instant::now();
    train(&mut model, &data, &opts).context("training failed")?;
    info!(
        "trained {} epochs in {:.2}s",
        args.epochs,
        tic.elapsed().as_secs_f32()
    );

    let map = export::export(data.feature_names(), model.weights())
        .context("failed to pair weights with feature names")?;
    export::write(&map, &args.out).context("failed to write weight map")?;
    info!("weights saved to {}", args.out.display());

    Ok(())
}
