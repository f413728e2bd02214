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

//! Benchmark and validation tooling around the `kwok` solver: random graph
//! generation, a text graph format, a dense reference solver, a result
//! checker and the timing loop shared by the binaries.

pub mod check;
pub mod generate;
pub mod graph_io;
pub mod macros;
pub mod reference;
pub mod time_loop;

use std::fmt;

use clap::ValueEnum;
use thiserror::Error;

use kwok::{solve_graph, BipartiteGraph, MatchingError, SolverOptions, Weight};

/// Weight domain of a graph file.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Domain {
    Int,
    Float,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Domain::Int => write!(f, "int"),
            Domain::Float => write!(f, "float"),
        }
    }
}

/// Integer weights in bench graphs.
pub type IntWeight = i64;
/// Floating weights in bench graphs.
pub type FloatWeight = f64;

/// Logs to stderr, `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error(transparent)]
    Kwok(#[from] MatchingError),

    #[error("the dense reference found no left-perfect matching")]
    DenseInfeasible,
}

/// One solve with either the sparse solver or the dense reference,
/// returning the matching and its total.
pub fn solve_once<W: Weight>(
    dense: bool,
    g: &BipartiteGraph<W>,
) -> Result<(Vec<usize>, W::Wide), SolveError> {
    if dense {
        reference::dense_assignment(g).ok_or(SolveError::DenseInfeasible)
    } else {
        let r = solve_graph(g, &SolverOptions::default())?;
        Ok((r.left_match, r.total_weight))
    }
}
