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

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::DefInt;
use crate::common::graph::BipartiteGraph;
use crate::common::weight::{Weight, WideWeight};
use crate::matching::potentials::Potentials;

pub(crate) const UNMATCHED: DefInt = DefInt::MAX;

/// A tagged relaxation: right vertex `right` reached at `dist` through an
/// edge of left vertex `from`. `seq` is the push order, so equal distances
/// pop in the order their edges were met.
#[derive(Clone, Copy, Debug)]
struct QueueEntry<D> {
    dist: D,
    seq: u64,
    right: DefInt,
    from: DefInt,
}

impl<D: WideWeight> Ord for QueueEntry<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist.cmp_wide(&other.dist).then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<D: WideWeight> PartialOrd for QueueEntry<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl<D: WideWeight> PartialEq for QueueEntry<D> {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl<D: WideWeight> Eq for QueueEntry<D> {}

/// Where a successful search ended.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PathEnd<D> {
    pub right: DefInt,
    pub dist: D,
}

/// Per-search state, sized once to the right side and reused by every
/// search of a solve. Reset at the start of each search in time
/// proportional to what the previous search touched.
pub(crate) struct Scratch<D> {
    pub dist: Vec<D>,
    reached: Vec<bool>,
    settled: Vec<bool>,
    /// Global index of the edge a right vertex was last reached through,
    /// and that edge's left endpoint.
    pub parent: Vec<usize>,
    pub parent_left: Vec<DefInt>,
    touched: Vec<DefInt>,
    /// Right vertices in pop order.
    pub settled_list: Vec<DefInt>,
    /// Left vertices whose edges were relaxed, with their labels.
    pub scanned: Vec<(DefInt, D)>,
    heap: BinaryHeap<Reverse<QueueEntry<D>>>,
    seq: u64,
}

impl<D: WideWeight> Scratch<D> {
    pub fn new(num_right: usize) -> Self {
        Self {
            dist: vec![D::zero(); num_right],
            reached: vec![false; num_right],
            settled: vec![false; num_right],
            parent: vec![usize::MAX; num_right],
            parent_left: vec![UNMATCHED; num_right],
            touched: vec![],
            settled_list: vec![],
            scanned: vec![],
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    fn reset(&mut self) {
        for &j in &self.touched {
            self.reached[j as usize] = false;
            self.settled[j as usize] = false;
        }
        self.touched.clear();
        self.settled_list.clear();
        self.scanned.clear();
        self.heap.clear();
        self.seq = 0;
    }

    /// Relaxes every edge of left vertex `k`, whose label is `base`.
    fn scan<W: Weight<Wide = D>>(
        &mut self,
        graph: &BipartiteGraph<W>,
        pot: &Potentials<D>,
        k: usize,
        base: D,
    ) {
        self.scanned.push((k as DefInt, base));
        for e in graph.edge_range(k) {
            let edge = graph.edge(e);
            let j = edge.v as usize;
            if self.settled[j] { continue; }
            let nd = base + pot.reduced_cost(k, j, edge.w.widen());
            if !self.reached[j] || nd < self.dist[j] {
                if !self.reached[j] {
                    self.reached[j] = true;
                    self.touched.push(edge.v);
                }
                self.dist[j] = nd;
                self.parent[j] = e;
                self.parent_left[j] = k as DefInt;
                self.heap.push(Reverse(QueueEntry {
                    dist: nd,
                    seq: self.seq,
                    right: edge.v,
                    from: k as DefInt,
                }));
                self.seq += 1;
            }
        }
    }

    /// Shortest alternating path in reduced costs from the free left vertex
    /// `s` to any free right vertex. Matched right vertices are passed
    /// through at zero cost to their partner, whose edges are relaxed next.
    ///
    /// Returns `None` when the queue runs dry, i.e. `s` cannot be matched.
    pub fn search<W: Weight<Wide = D>>(
        &mut self,
        graph: &BipartiteGraph<W>,
        pot: &Potentials<D>,
        right_match: &[DefInt],
        s: usize,
    ) -> Option<PathEnd<D>> {
        self.reset();
        self.scan(graph, pot, s, D::zero());

        while let Some(Reverse(entry)) = self.heap.pop() {
            let j = entry.right as usize;
            if self.settled[j] || entry.dist > self.dist[j] { continue; }
            debug_assert_eq!(self.parent_left[j], entry.from);
            self.settled[j] = true;
            self.settled_list.push(entry.right);

            let k = right_match[j];
            if k == UNMATCHED {
                return Some(PathEnd { right: entry.right, dist: entry.dist });
            }
            debug_assert_ne!(k, entry.from);
            self.scan(graph, pot, k as usize, entry.dist);
        }
        None
    }
}
