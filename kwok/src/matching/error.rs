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

use thiserror::Error;

/// Malformed solver input, detected before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex counts must be non-negative (left={left}, right={right})")]
    NegativeDimension { left: i64, right: i64 },

    #[error("adjacency has {found} rows but the graph has {expected} left vertices")]
    AdjacencyLength { expected: usize, found: usize },

    #[error("left vertex {left} has an edge to right vertex {right}, outside [0, {num_right})")]
    RightOutOfRange { left: usize, right: i64, num_right: usize },

    #[error("left vertex {left} has no incident edges")]
    EmptyAdjacency { left: usize },

    #[error("edge {position} of left vertex {left} has a non-finite weight")]
    NonFiniteWeight { left: usize, position: usize },

    #[error("edge {position} of left vertex {left} has a negative weight")]
    NegativeWeight { left: usize, position: usize },

    #[error("{what} ({count}) exceeds the supported vertex id range")]
    TooLarge { what: &'static str, count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchingError {
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] GraphError),

    /// No matching covers every left vertex; `left` is the vertex that
    /// could not be matched.
    #[error("no perfect matching over the left side: left vertex {left} cannot be matched")]
    Infeasible { left: usize },
}
