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

//! Texel-style tuning of Aether's evaluation weights.
//!
//! Aether's hand-crafted evaluation is a linear combination of phase-tapered
//! positional features.
//! This crate fits the coefficients of that combination against game outcomes:
//! the engine's data-generation pipeline emits a table of labeled positions
//! with one column per feature, and the tuner performs a logistic regression
//! of outcome on features.
//! Because the sigmoid is scaled by a fixed constant, the fitted coefficients
//! land directly on the engine's centipawn scale and can be pasted back into
//! its evaluation configuration without rescaling.
//!
//! The pipeline has four steps, one module each: load the dataset
//! ([`dataset`]), build a zero-initialized model ([`model`]), fit it by
//! mini-batch gradient descent ([`train`]), and write the rounded weights back
//! out as a named map ([`export`]).

pub mod dataset;
pub mod error;
pub mod export;
pub mod model;
pub mod schema;
pub mod train;

pub use error::TuneError;
