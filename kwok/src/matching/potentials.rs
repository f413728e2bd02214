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

use crate::DefInt;
use crate::common::graph::BipartiteGraph;
use crate::common::weight::{Weight, WideWeight};

/// Vertex potentials of the primal-dual method.
///
/// For every edge `(i, j, w)` the solver keeps
/// `left[i] + right[j] - w >= 0`, with equality on matched edges. Right
/// potentials never go negative and stay zero on unmatched right vertices,
/// so at termination the pair is a dual certificate of optimality.
#[derive(Clone, Debug, PartialEq)]
pub struct Potentials<D> {
    pub(crate) left: Vec<D>,
    pub(crate) right: Vec<D>,
}

impl<D: WideWeight> Potentials<D> {
    /// `left[i]` = heaviest edge of `i`, `right[j]` = 0.
    ///
    /// This is one Bellman-Ford sweep from a virtual source over the empty
    /// matching, which already reaches its fixpoint, so every reduced cost
    /// starts non-negative whatever the sign of the weights.
    pub fn initialize<W: Weight<Wide = D>>(graph: &BipartiteGraph<W>) -> Self {
        let left = (0..graph.num_left())
            .map(|i| {
                graph.index(i).neighbors
                    .iter()
                    .map(|e| e.w.widen())
                    .reduce(|a, b| if b > a { b } else { a })
                    .unwrap_or_else(D::zero)
            })
            .collect();
        Self { left, right: vec![D::zero(); graph.num_right()] }
    }

    #[inline(always)]
    pub fn reduced_cost(&self, i: usize, j: usize, w: D) -> D {
        (self.left[i] + self.right[j] - w).clamp_non_negative()
    }

    /// Shifts the potentials of everything the last search touched.
    ///
    /// `scanned` holds each left vertex whose edges were relaxed, with its
    /// distance label; `settled` the right vertices popped from the queue,
    /// whose final distances are in `dist`. `total` is the distance of the
    /// free right vertex that ended the search.
    pub fn update_after_augmentation(
        &mut self,
        scanned: &[(DefInt, D)],
        settled: &[DefInt],
        dist: &[D],
        total: D,
    ) {
        for &(k, d) in scanned {
            self.left[k as usize] -= total - d;
        }
        for &j in settled {
            let j = j as usize;
            self.right[j] += total - dist[j];
        }
    }

    pub fn left(&self) -> &[D] { &self.left }

    pub fn right(&self) -> &[D] { &self.right }

    /// Σ left + Σ right; equals the matched weight at optimum.
    pub fn dual_objective(&self) -> D {
        self.left.iter().chain(self.right.iter()).fold(D::zero(), |acc, &p| acc + p)
    }
}
