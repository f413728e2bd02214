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

use std::ops::Range;

use rayon::prelude::*;

use crate::DefInt;
use crate::common::weight::Weight;
use crate::matching::error::GraphError;

// **************************************************************
//    WEIGHTED HALF EDGE
// **************************************************************

/// An edge as stored under its left endpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WghEdge<W> {
    pub v: DefInt,
    pub w: W,
}

impl<W> WghEdge<W> {
    pub fn new(v: DefInt, w: W) -> Self { Self { v, w } }
}

// **************************************************************
//    SPARSE BIPARTITE ADJACENCY REPRESENTATION
// **************************************************************

/// The edges of one left vertex, in adjacency order.
pub struct LeftVertex<'a, W> {
    pub neighbors: &'a [WghEdge<W>],
}

impl<'a, W> LeftVertex<'a, W> {
    pub fn new(n: &'a [WghEdge<W>]) -> Self { Self { neighbors: n } }
}

/// Left vertices in CSR form plus a reverse index from each right vertex to
/// the left vertices offering it an edge. Immutable once built.
#[derive(Clone, Debug)]
pub struct BipartiteGraph<W> {
    offsets: Vec<usize>,
    edges: Vec<WghEdge<W>>,
    rev_offsets: Vec<usize>,
    rev_edges: Vec<DefInt>,
    num_left: usize,
    num_right: usize,
}

impl<W: Weight> BipartiteGraph<W> {
    /// Builds and validates a graph from per-left-vertex edge lists.
    pub fn from_adjacency(
        num_left: usize,
        num_right: usize,
        adjacency: &[Vec<(usize, W)>],
    ) -> Result<Self, GraphError> {
        Self::from_rows(num_left, num_right, adjacency, |j| {
            i64::try_from(j).unwrap_or(i64::MAX)
        })
    }

    /// Same as [`from_adjacency`](Self::from_adjacency) for callers holding
    /// signed sizes and ids, e.g. values parsed from text.
    pub fn from_signed(
        num_left: i64,
        num_right: i64,
        adjacency: &[Vec<(i64, W)>],
    ) -> Result<Self, GraphError> {
        if num_left < 0 || num_right < 0 {
            return Err(GraphError::NegativeDimension { left: num_left, right: num_right });
        }
        let as_usize = |x: i64, what| usize::try_from(x)
            .map_err(|_| GraphError::TooLarge { what, count: usize::MAX });
        Self::from_rows(
            as_usize(num_left, "left vertex count")?,
            as_usize(num_right, "right vertex count")?,
            adjacency,
            |j| j,
        )
    }

    fn from_rows<J: Copy + Send + Sync>(
        num_left: usize,
        num_right: usize,
        adjacency: &[Vec<(J, W)>],
        to_signed: impl Fn(J) -> i64 + Sync,
    ) -> Result<Self, GraphError> {
        if adjacency.len() != num_left {
            return Err(GraphError::AdjacencyLength {
                expected: num_left,
                found: adjacency.len(),
            });
        }
        if num_left > DefInt::MAX as usize {
            return Err(GraphError::TooLarge { what: "left vertex count", count: num_left });
        }
        if num_right > DefInt::MAX as usize {
            return Err(GraphError::TooLarge { what: "right vertex count", count: num_right });
        }

        // lowest offending row wins, independent of scheduling
        let bad = adjacency
            .par_iter()
            .enumerate()
            .find_map_first(|(i, row)| check_row(i, row, num_right, &to_signed).err());
        if let Some(e) = bad { return Err(e); }

        let m: usize = adjacency.iter().map(Vec::len).sum();
        let mut offsets = Vec::with_capacity(num_left + 1);
        let mut edges = Vec::with_capacity(m);
        offsets.push(0);
        for row in adjacency {
            edges.extend(row.iter().map(|&(j, w)| WghEdge::new(to_signed(j) as DefInt, w)));
            offsets.push(edges.len());
        }

        let (rev_offsets, rev_edges) = reverse_index(&offsets, &edges, num_right);

        Ok(Self { offsets, edges, rev_offsets, rev_edges, num_left, num_right })
    }
}

fn check_row<J: Copy, W: Weight>(
    left: usize,
    row: &[(J, W)],
    num_right: usize,
    to_signed: &impl Fn(J) -> i64,
) -> Result<(), GraphError> {
    if row.is_empty() { return Err(GraphError::EmptyAdjacency { left }); }
    for (position, &(j, w)) in row.iter().enumerate() {
        let j = to_signed(j);
        if j < 0 || j as u64 >= num_right as u64 {
            return Err(GraphError::RightOutOfRange { left, right: j, num_right });
        }
        if !w.is_finite_weight() {
            return Err(GraphError::NonFiniteWeight { left, position });
        }
    }
    Ok(())
}

/// Counting sort of the edges by right endpoint. Left ids come out
/// ascending within each right vertex.
fn reverse_index<W>(
    offsets: &[usize],
    edges: &[WghEdge<W>],
    num_right: usize,
) -> (Vec<usize>, Vec<DefInt>) {
    let mut rev_offsets = vec![0usize; num_right + 1];
    for e in edges { rev_offsets[e.v as usize + 1] += 1; }
    for j in 0..num_right { rev_offsets[j + 1] += rev_offsets[j]; }

    let mut cursor = rev_offsets[..num_right].to_vec();
    let mut rev_edges = vec![0 as DefInt; edges.len()];
    for i in 0..offsets.len() - 1 {
        for e in &edges[offsets[i]..offsets[i + 1]] {
            let j = e.v as usize;
            rev_edges[cursor[j]] = i as DefInt;
            cursor[j] += 1;
        }
    }
    (rev_offsets, rev_edges)
}

impl<W> BipartiteGraph<W> {
    pub const fn num_left(&self) -> usize { self.num_left }

    pub const fn num_right(&self) -> usize { self.num_right }

    pub fn num_edges(&self) -> usize { self.edges.len() }

    #[inline(always)]
    pub fn index(&self, i: usize) -> LeftVertex<W> {
        debug_assert!(i < self.num_left);
        LeftVertex::new(&self.edges[self.edge_range(i)])
    }

    /// Positions of `i`'s edges in the global edge array.
    #[inline(always)]
    pub fn edge_range(&self, i: usize) -> Range<usize> {
        self.offsets[i]..self.offsets[i + 1]
    }

    #[inline(always)]
    pub fn edge(&self, e: usize) -> &WghEdge<W> { &self.edges[e] }

    /// Left vertices with an edge to `j`, ascending, repeated once per
    /// parallel edge.
    pub fn offerers(&self, j: usize) -> &[DefInt] {
        &self.rev_edges[self.rev_offsets[j]..self.rev_offsets[j + 1]]
    }

    /// The right vertex `i` is forced onto, if all its edges share one.
    pub fn pinned(&self, i: usize) -> Option<DefInt> {
        let ns = self.index(i).neighbors;
        let first = ns.first()?.v;
        ns.iter().all(|e| e.v == first).then_some(first)
    }
}
