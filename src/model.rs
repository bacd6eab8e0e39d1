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

//! The logistic model linking a linear feature combination to a win
//! probability.
//!
//! The model is a single linear layer with no bias: the score of a position is
//! the dot product of the weight vector with its feature vector.
//! Passing `scale * score` through a sigmoid turns the score into a
//! win-probability estimate, so minimizing cross-entropy against game outcomes
//! pulls the weights toward values whose linear combination predicts results.
//!
//! The scale constant is a hyperparameter, never learned.
//! Holding it fixed at [`DEFAULT_SCALE`] keeps the fitted weights on Aether's
//! centipawn scale, so they can be exported without a post-hoc rescale.

use libm::expf;

/// The default sigmoid scale constant.
///
/// At `1/400`, a 400-centipawn advantage maps to a win probability of about
/// 73%, matching the convention of Aether's existing evaluation.
pub const DEFAULT_SCALE: f32 = 1. / 400.;

/// A trainable linear-plus-sigmoid model over one dataset's feature columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    /// One weight per feature column, in dataset column order.
    weights: Vec<f32>,
    /// Horizontal scaling applied to the score before the sigmoid.
    scale: f32,
}

impl Model {
    #[must_use]
    /// Construct a model with `n_features` weights, all zero.
    ///
    /// The cross-entropy objective is convex in the weights, so zero
    /// initialization is reproducible and cannot trap the optimizer in a
    /// local minimum.
    pub fn new(n_features: usize, scale: f32) -> Model {
        Model {
            weights: vec![0.; n_features],
            scale,
        }
    }

    #[must_use]
    /// Get the raw linear score of a feature vector, in centipawns.
    ///
    /// # Panics
    ///
    /// Panics if `features` and the weight vector are not the same length.
    pub fn score(&self, features: &[f32]) -> f32 {
        assert_eq!(features.len(), self.weights.len());

        self.weights
            .iter()
            .zip(features.iter())
            .map(|(w_i, x_i)| w_i * x_i)
            .sum()
    }

    #[must_use]
    /// Get the predicted win probability of a feature vector, strictly
    /// between 0 and 1.
    ///
    /// # Panics
    ///
    /// Panics if `features` and the weight vector are not the same length.
    pub fn predict(&self, features: &[f32]) -> f32 {
        sigmoid(self.scale * self.score(features))
    }

    #[must_use]
    /// Get the number of features this model scores.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    /// Get the weight vector, in dataset column order.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Get mutable access to the weight vector, for optimizer updates.
    pub(crate) fn weights_mut(&mut self) -> &mut [f32] {
        &mut self.weights
    }

    #[must_use]
    /// Get the sigmoid scale constant.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

#[inline(always)]
/// Compute the sigmoid function of a variable.
///
/// The mathematical function is given by the LaTeX expression
/// `f(x) = \frac{1}{1 + \exp(-x)}`.
fn sigmoid(x: f32) -> f32 {
    1. / (1. + expf(-x))
}
