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

//! Maximum-weight bipartite matching on sparse graphs.
//!
//! Every left vertex lists a few `(right, weight)` edges. [`solve`] returns
//! a matching that covers every left vertex and has the largest total
//! weight, or [`MatchingError::Infeasible`] when no such matching exists.
//!
//! ```
//! let adj = vec![
//!     vec![(0, 5), (1, 9)],
//!     vec![(1, 3), (2, 7)],
//!     vec![(0, 2), (2, 6)],
//! ];
//! let r = kwok::solve::<i32>(3, 3, &adj).unwrap();
//! assert_eq!(r.total_weight, 18);
//! assert_eq!(r.left_match, vec![1, 2, 0]);
//! ```

pub mod common;
pub mod matching;

/// Vertex id type of the stored graph.
pub type DefInt = u32;

pub use common::graph::{BipartiteGraph, LeftVertex, WghEdge};
pub use common::weight::{Weight, WideWeight};
pub use matching::error::{GraphError, MatchingError};
pub use matching::options::SolverOptions;
pub use matching::potentials::Potentials;
pub use matching::result::MatchingResult;
pub use matching::solver::KwokSolver;
pub use matching::{solve_batch, solve_graph};

/// Builds the graph from `adjacency` and solves it with default options.
pub fn solve<W: Weight>(
    num_left: usize,
    num_right: usize,
    adjacency: &[Vec<(usize, W)>],
) -> Result<MatchingResult<W>, MatchingError> {
    solve_with(num_left, num_right, adjacency, &SolverOptions::default())
}

pub fn solve_with<W: Weight>(
    num_left: usize,
    num_right: usize,
    adjacency: &[Vec<(usize, W)>],
    options: &SolverOptions,
) -> Result<MatchingResult<W>, MatchingError> {
    let graph = BipartiteGraph::from_adjacency(num_left, num_right, adjacency)?;
    solve_graph(&graph, options)
}
