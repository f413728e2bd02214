// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

//! Random sparse graphs with a planted perfect matching.
//!
//! Left vertex `i` always gets an edge to `perm[i]` for a hidden random
//! permutation, plus `degree - 1` further distinct right vertices, so every
//! generated graph has a left-perfect matching.

use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("cannot plant a perfect matching of {left} left vertices into {right} right vertices")]
    TooFewRight { left: usize, right: usize },
}

/// Edges per left vertex for density factor `t`: `t · ⌊log2 L⌋`, at
/// least one.
pub fn degree_for(t: f64, num_left: usize) -> usize {
    let log_l = (num_left.max(1) as f64).log2().floor();
    ((t * log_l) as usize).max(1)
}

/// Largest generated weight: `max_weight` when given, `L` otherwise.
pub fn weight_bound(max_weight: Option<u64>, num_left: usize) -> u64 {
    max_weight.unwrap_or(num_left as u64).max(1)
}

/// Uniform integer weights in `[1, hi]`.
pub fn int_weights(hi: i64) -> impl Fn(&mut ChaCha8Rng) -> i64 + Sync {
    let hi = hi.max(1);
    move |rng| rng.gen_range(1..=hi)
}

/// Uniform floating weights in `[1, hi)`.
pub fn float_weights(hi: f64) -> impl Fn(&mut ChaCha8Rng) -> f64 + Sync {
    let hi = if hi > 1.0 { hi } else { 2.0 };
    move |rng| rng.gen_range(1.0..hi)
}

/// Rows are generated in parallel, each from its own ChaCha stream, so the
/// output depends only on `seed`.
pub fn random_graph<W, F>(
    num_left: usize,
    num_right: usize,
    degree: usize,
    seed: u64,
    weight: F,
) -> Result<Vec<Vec<(usize, W)>>, GenerateError>
where
    W: Send,
    F: Fn(&mut ChaCha8Rng) -> W + Sync,
{
    if num_left > num_right {
        return Err(GenerateError::TooFewRight { left: num_left, right: num_right });
    }
    if num_left == 0 { return Ok(vec![]); }

    let degree = degree.clamp(1, num_right);
    let perm = planted_matching(num_left, num_right, seed);

    Ok((0..num_left)
        .into_par_iter()
        .map(|i| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(i as u64 + 1);
            let matched = perm[i];
            let mut row = Vec::with_capacity(degree);
            row.push((matched, weight(&mut rng)));
            for j in index::sample(&mut rng, num_right - 1, degree - 1) {
                let j = if j >= matched { j + 1 } else { j };
                row.push((j, weight(&mut rng)));
            }
            row
        })
        .collect())
}

/// The hidden permutation of [`random_graph`] for the same arguments.
pub fn planted_matching(num_left: usize, num_right: usize, seed: u64) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..num_right).collect();
    perm.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    perm.truncate(num_left);
    perm
}
