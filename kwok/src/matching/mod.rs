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

pub mod error;
pub mod options;
pub mod potentials;
pub mod result;
pub mod solver;
mod search;

use rayon::prelude::*;

use crate::common::graph::BipartiteGraph;
use crate::common::weight::Weight;
use error::MatchingError;
use options::SolverOptions;
use result::MatchingResult;
use solver::KwokSolver;

/// Solves a prebuilt graph.
pub fn solve_graph<W: Weight>(
    graph: &BipartiteGraph<W>,
    options: &SolverOptions,
) -> Result<MatchingResult<W>, MatchingError> {
    KwokSolver::new(graph, options)?.solve()
}

/// Solves independent graphs on rayon's pool. Each solve owns its own
/// state; results come back in input order.
pub fn solve_batch<W: Weight>(
    graphs: &[BipartiteGraph<W>],
    options: &SolverOptions,
) -> Vec<Result<MatchingResult<W>, MatchingError>> {
    graphs
        .par_iter()
        .map(|g| solve_graph(g, options))
        .collect()
}
