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

//! Mini-batch gradient descent on binary cross-entropy.
//!
//! Each epoch reshuffles the row indices, walks them in batches, and applies
//! one Adam update per batch.
//! Training runs for exactly the configured number of epochs; there is no
//! early stopping.
//! The per-epoch mean loss is the convergence-monitoring surface.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::info;

use crate::{dataset::Dataset, error::TuneError, model::Model};

/// Hyperparameters for one training run.
#[derive(Clone, Debug)]
pub struct TrainOptions {
    /// Number of passes over the dataset.
    pub epochs: usize,
    /// Adam step size.
    pub learning_rate: f32,
    /// Rows per mini-batch. The final batch of an epoch may be smaller.
    pub batch_size: usize,
    /// Seed for the per-epoch shuffle. Seeded runs are bit-reproducible;
    /// unseeded runs draw from entropy.
    pub seed: Option<u64>,
}

impl Default for TrainOptions {
    fn default() -> TrainOptions {
        TrainOptions {
            epochs: 100,
            learning_rate: 0.5,
            batch_size: 16384,
            seed: None,
        }
    }
}

/// Adam moment decay rates and divide-by-zero guard.
const BETA1: f32 = 0.9;
const BETA2: f32 = 0.999;
const ADAM_EPSILON: f32 = 1e-8;

/// Keeps the loss finite when the sigmoid saturates to 0 or 1 in `f32`.
/// Only the logarithms are clamped; the gradient uses the raw prediction.
const PROB_EPSILON: f32 = 1e-7;

/// Fit `model` to `data`, mutating its weights in place.
///
/// Returns the batch-size-weighted mean loss of each epoch (accumulated batch
/// losses divided by the total row count), which trends downward on a
/// well-scaled problem.
///
/// # Errors
///
/// Returns `TuneError::Shape` if the model's weight count does not match the
/// dataset's feature count. This is checked before the first epoch.
pub fn train(
    model: &mut Model,
    data: &Dataset,
    opts: &TrainOptions,
) -> Result<Vec<f32>, TuneError> {
    let n_features = data.n_features();
    if model.n_features() != n_features {
        return Err(TuneError::Shape {
            weights: model.n_features(),
            features: n_features,
        });
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let batch_size = opts.batch_size.max(1);
    let n_rows = data.n_rows();
    let mut indices: Vec<usize> = (0..n_rows).collect();

    // Adam first and second moment accumulators, one per weight.
    let mut moment1 = vec![0.; n_features];
    let mut moment2 = vec![0.; n_features];
    let mut step = 0;

    let mut grad = vec![0.; n_features];
    let mut epoch_losses = Vec::with_capacity(opts.epochs);
    for epoch in 0..opts.epochs {
        indices.shuffle(&mut rng);
        let mut loss_sum = 0.;
        for batch in indices.chunks(batch_size) {
            grad.fill(0.);
            for &i in batch {
                let x = data.row(i);
                let y = data.label(i);
                let p = model.predict(x);

                let p_safe = p.clamp(PROB_EPSILON, 1. - PROB_EPSILON);
                loss_sum -= y * p_safe.ln() + (1. - y) * (1. - p_safe).ln();

                // d(BCE)/d(score) for a scaled sigmoid is scale * (p - y)
                let coeff = model.scale() * (p - y);
                for (g_j, &x_j) in grad.iter_mut().zip(x.iter()) {
                    *g_j += coeff * x_j;
                }
            }

            step += 1;
            let bias1 = 1. - BETA1.powi(step);
            let bias2 = 1. - BETA2.powi(step);
            let batch_scale = 1. / batch.len() as f32;
            let weights = model.weights_mut();
            for j in 0..n_features {
                let g = grad[j] * batch_scale;
                moment1[j] = BETA1 * moment1[j] + (1. - BETA1) * g;
                moment2[j] = BETA2 * moment2[j] + (1. - BETA2) * g * g;
                let m_hat = moment1[j] / bias1;
                let v_hat = moment2[j] / bias2;
                weights[j] -= opts.learning_rate * m_hat / (v_hat.sqrt() + ADAM_EPSILON);
            }
        }

        // an empty dataset trains nothing and reports zero loss
        let mean_loss = if n_rows == 0 {
            0.
        } else {
            loss_sum / n_rows as f32
        };
        info!(
            "epoch {}/{}: loss {:.6}",
            epoch + 1,
            opts.epochs,
            mean_loss
        );
        epoch_losses.push(mean_loss);
    }

    Ok(epoch_losses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::DEFAULT_SCALE, schema::Schema};

    /// Build a one-feature dataset from (feature, label) pairs.
    fn one_feature(rows: &[(f32, f32)]) -> Dataset {
        let schema = Schema::from_header(&[
            "label", "phase", "score_mg", "score_eg", "eval", "f0_mg",
        ])
        .unwrap();
        let features = rows.iter().map(|&(x, _)| x).collect();
        let labels = rows.iter().map(|&(_, y)| y).collect();
        Dataset::from_parts(schema, features, labels)
    }

    fn opts(epochs: usize, batch_size: usize, seed: u64) -> TrainOptions {
        TrainOptions {
            epochs,
            learning_rate: 0.5,
            batch_size,
            seed: Some(seed),
        }
    }

    #[test]
    /// Test that a sign-separable feature is driven away from zero in the
    /// separating direction, and that the epoch loss trends downward.
    fn separable_feature_learns_positive_weight() {
        let data = one_feature(&[(1., 1.), (1., 1.), (-1., 0.), (-1., 0.)]);
        let mut model = Model::new(1, DEFAULT_SCALE);

        let losses = train(&mut model, &data, &opts(300, 2, 42)).unwrap();

        assert!(model.weights()[0] > 0.);
        assert!(model.predict(&[1.]) > 0.5);
        assert!(model.predict(&[-1.]) < 0.5);
        assert!(losses.last().unwrap() < losses.first().unwrap());
    }

    #[test]
    /// Test that an all-zero feature matrix never moves the weights: the
    /// prediction is pinned at 1/2 and every epoch's loss is ln 2.
    fn zero_features_never_learn() {
        let data = one_feature(&[(0., 1.), (0., 0.), (0., 1.), (0., 0.)]);
        let mut model = Model::new(1, DEFAULT_SCALE);

        let losses = train(&mut model, &data, &opts(10, 2, 0)).unwrap();

        assert_eq!(model.weights()[0], 0.);
        for loss in losses {
            assert!((loss - std::f32::consts::LN_2).abs() < 1e-6);
        }
    }

    #[test]
    /// Test that two runs with the same seed produce bit-identical weights.
    fn seeded_runs_are_reproducible() {
        let data = one_feature(&[(2., 1.), (-0.5, 0.), (1., 1.), (-3., 0.), (0.25, 1.)]);

        let mut first = Model::new(1, DEFAULT_SCALE);
        let mut second = Model::new(1, DEFAULT_SCALE);
        let losses_a = train(&mut first, &data, &opts(50, 2, 9001)).unwrap();
        let losses_b = train(&mut second, &data, &opts(50, 2, 9001)).unwrap();

        assert_eq!(first.weights(), second.weights());
        assert_eq!(losses_a, losses_b);
    }

    #[test]
    fn one_loss_per_epoch() {
        let data = one_feature(&[(1., 1.), (-1., 0.)]);
        let mut model = Model::new(1, DEFAULT_SCALE);
        let losses = train(&mut model, &data, &opts(7, 16384, 0)).unwrap();
        assert_eq!(losses.len(), 7);
    }

    #[test]
    fn mismatched_width_is_shape_error() {
        let data = one_feature(&[(1., 1.)]);
        let mut model = Model::new(3, DEFAULT_SCALE);
        let result = train(&mut model, &data, &opts(1, 1, 0));
        assert!(matches!(
            result,
            Err(TuneError::Shape {
                weights: 3,
                features: 1
            })
        ));
    }
}
