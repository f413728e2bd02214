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
use crate::common::weight::Weight;
use crate::matching::error::MatchingError;
use crate::matching::potentials::Potentials;
use crate::matching::search::UNMATCHED;

/// A maximum-weight matching covering every left vertex.
#[derive(Clone, Debug)]
pub struct MatchingResult<W: Weight> {
    /// Sum of the matched edge weights, in the wide domain of `W`.
    pub total_weight: W::Wide,
    /// `left_match[i]` is the right vertex matched to `i`.
    pub left_match: Vec<usize>,
    pub right_match: Vec<Option<usize>>,
    /// Final potentials; a dual certificate for `total_weight`.
    pub potentials: Potentials<W::Wide>,
}

impl<W: Weight> MatchingResult<W> {
    pub fn len(&self) -> usize { self.left_match.len() }

    pub fn is_empty(&self) -> bool { self.left_match.is_empty() }

    /// `(left, right)` pairs in left order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.left_match.iter().copied().enumerate()
    }

    /// Sums the matched edges and detaches the matching from solver state.
    ///
    /// `left_edge` holds the global index of each left vertex's matched
    /// edge, so parallel edges resolve to the copy actually matched.
    pub(crate) fn assemble(
        graph: &BipartiteGraph<W>,
        left_edge: &[usize],
        right_match: &[DefInt],
        potentials: &Potentials<W::Wide>,
    ) -> Result<Self, MatchingError> {
        let mut total_weight = <W::Wide as num_traits::Zero>::zero();
        let mut left_match = Vec::with_capacity(left_edge.len());
        for (i, &e) in left_edge.iter().enumerate() {
            if e == usize::MAX { return Err(MatchingError::Infeasible { left: i }); }
            let edge = graph.edge(e);
            total_weight += edge.w.widen();
            left_match.push(edge.v as usize);
        }
        let right_match = right_match
            .iter()
            .map(|&i| (i != UNMATCHED).then_some(i as usize))
            .collect();

        Ok(Self { total_weight, left_match, right_match, potentials: potentials.clone() })
    }
}
