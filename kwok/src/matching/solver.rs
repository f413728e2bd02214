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

use log::{debug, trace};
use rayon::prelude::*;

use crate::DefInt;
use crate::common::graph::BipartiteGraph;
use crate::common::weight::Weight;
use crate::matching::error::{GraphError, MatchingError};
use crate::matching::options::SolverOptions;
use crate::matching::potentials::Potentials;
use crate::matching::result::MatchingResult;
use crate::matching::search::{PathEnd, Scratch, UNMATCHED};

/// Successive shortest augmenting paths with vertex potentials.
///
/// Left vertices are matched one at a time in index order. Each round runs
/// a Dijkstra search over reduced costs from the next left vertex, flips
/// the path it finds and shifts the potentials so reduced costs stay
/// non-negative for the following round.
///
/// L: left vertices, E: edges.
/// Worst case: O(L · E · log E) time, O(L + R + E) space.
pub struct KwokSolver<'g, W: Weight> {
    graph: &'g BipartiteGraph<W>,
    potentials: Potentials<W::Wide>,
    left_edge: Vec<usize>,
    right_match: Vec<DefInt>,
    scratch: Scratch<W::Wide>,
    precheck: bool,
}

impl<'g, W: Weight> KwokSolver<'g, W> {
    pub fn new(graph: &'g BipartiteGraph<W>, options: &SolverOptions) -> Result<Self, MatchingError> {
        if !options.allow_negative_weights {
            check_non_negative(graph)?;
        }
        Ok(Self {
            graph,
            potentials: Potentials::initialize(graph),
            left_edge: vec![usize::MAX; graph.num_left()],
            right_match: vec![UNMATCHED; graph.num_right()],
            scratch: Scratch::new(graph.num_right()),
            precheck: options.pinned_precheck,
        })
    }

    pub fn solve(mut self) -> Result<MatchingResult<W>, MatchingError> {
        let g = self.graph;
        debug!(
            "kwok: solving L={} R={} m={} (integral={})",
            g.num_left(), g.num_right(), g.num_edges(), W::INTEGRAL
        );

        if self.precheck { self.check_pinned()?; }

        for s in 0..g.num_left() {
            self.augment_from(s)?;
        }

        let r = MatchingResult::assemble(g, &self.left_edge, &self.right_match, &self.potentials)?;
        debug!("kwok: matched {} left vertices, total weight {}", r.len(), r.total_weight);
        Ok(r)
    }

    /// One round: search from `s`, flip the path, update potentials.
    fn augment_from(&mut self, s: usize) -> Result<(), MatchingError> {
        let end = self.scratch
            .search(self.graph, &self.potentials, &self.right_match, s)
            .ok_or_else(|| {
                debug!("kwok: queue exhausted from left vertex {s}");
                MatchingError::Infeasible { left: s }
            })?;

        self.flip_path(s, end);
        self.potentials.update_after_augmentation(
            &self.scratch.scanned,
            &self.scratch.settled_list,
            &self.scratch.dist,
            end.dist,
        );

        trace!(
            "kwok: left {s} -> right {} (distance {:?}, settled {}, scanned {})",
            self.right_match_of(s), end.dist,
            self.scratch.settled_list.len(), self.scratch.scanned.len()
        );
        Ok(())
    }

    /// Walks parent edges back from the free right vertex, moving every
    /// left vertex on the path onto the edge that reached its new partner.
    fn flip_path(&mut self, s: usize, end: PathEnd<W::Wide>) {
        let mut j = end.right as usize;
        loop {
            let e = self.scratch.parent[j];
            let i = self.scratch.parent_left[j] as usize;
            let prev = self.left_edge[i];
            self.left_edge[i] = e;
            self.right_match[j] = i as DefInt;
            if i == s { break; }
            j = self.graph.edge(prev).v as usize;
        }
    }

    fn right_match_of(&self, i: usize) -> usize {
        self.graph.edge(self.left_edge[i]).v as usize
    }

    /// Two left vertices forced onto the same right vertex can never both
    /// be matched.
    fn check_pinned(&self) -> Result<(), MatchingError> {
        let g = self.graph;
        let clash = (0..g.num_right())
            .into_par_iter()
            .filter_map(|j| {
                // offerers repeat per parallel edge, and come sorted
                let mut pinned = g.offerers(j)
                    .iter()
                    .map(|&i| i as usize)
                    .filter(|&i| g.pinned(i) == Some(j as DefInt));
                let first = pinned.next()?;
                pinned.find(|&i| i != first)
            })
            .min();
        match clash {
            Some(left) => {
                debug!("kwok: left vertex {left} shares its only right vertex");
                Err(MatchingError::Infeasible { left })
            }
            None => Ok(()),
        }
    }
}

fn check_non_negative<W: Weight>(graph: &BipartiteGraph<W>) -> Result<(), GraphError> {
    (0..graph.num_left())
        .into_par_iter()
        .find_map_first(|i| {
            graph.index(i).neighbors
                .iter()
                .position(|e| e.w.is_negative_weight())
                .map(|position| GraphError::NegativeWeight { left: i, position })
        })
        .map_or(Ok(()), Err)
}
