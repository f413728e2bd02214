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

//! Plain-text graph and matching files.
//!
//! A graph file holds one token per line:
//!
//! ```text
//! WeightedBipartiteGraph
//! <L>
//! <R>
//! <m>
//! <L offsets into the edge list>
//! <m lines of "<right> <weight>">
//! ```
//!
//! A matching file holds the right vertex of each left vertex, one per line.

use std::fmt::Display;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use kwok::{BipartiteGraph, GraphError, Weight};

pub const GRAPH_HEADER: &str = "WeightedBipartiteGraph";

#[derive(Debug, Error)]
pub enum GraphIoError {
    #[error("cannot access {path}: {source}")]
    Io { path: String, #[source] source: io::Error },

    #[error("expected header \"WeightedBipartiteGraph\", found {0:?}")]
    BadHeader(String),

    #[error("file ended while reading {0}")]
    Truncated(&'static str),

    #[error("line {line}: cannot parse {what} from {text:?}")]
    Parse { line: usize, what: &'static str, text: String },

    #[error("offsets must start at 0, never decrease and stay within {edges} edges")]
    BadOffsets { edges: usize },

    #[error(transparent)]
    InvalidGraph(#[from] GraphError),
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> GraphIoError + '_ {
    move |source| GraphIoError::Io { path: path.display().to_string(), source }
}

fn parse_tok<T: FromStr>(
    (line, text): (usize, &str),
    what: &'static str,
) -> Result<T, GraphIoError> {
    text.parse().map_err(|_| GraphIoError::Parse { line, what, text: text.to_string() })
}

pub fn parse_graph<W: Weight + FromStr>(text: &str) -> Result<BipartiteGraph<W>, GraphIoError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(n, l)| (n + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());
    let mut next = |what: &'static str| lines.next().ok_or(GraphIoError::Truncated(what));

    let (_, header) = next("header")?;
    if header != GRAPH_HEADER { return Err(GraphIoError::BadHeader(header.to_string())); }
    let num_left: i64 = parse_tok(next("left vertex count")?, "left vertex count")?;
    let num_right: i64 = parse_tok(next("right vertex count")?, "right vertex count")?;
    let m: usize = parse_tok(next("edge count")?, "edge count")?;
    if num_left < 0 || num_right < 0 {
        return Err(GraphError::NegativeDimension { left: num_left, right: num_right }.into());
    }

    // header counts are untrusted: never reserve more than the text can hold
    let mut offsets = Vec::with_capacity((num_left as usize).min(text.len()) + 1);
    for _ in 0..num_left {
        offsets.push(parse_tok::<usize>(next("offsets")?, "offset")?);
    }
    offsets.push(m);
    if offsets.first().map_or(false, |&o| o != 0) || offsets.windows(2).any(|w| w[0] > w[1]) {
        return Err(GraphIoError::BadOffsets { edges: m });
    }

    let mut edges = Vec::with_capacity(m.min(text.len()));
    for _ in 0..m {
        let (line, text) = next("edges")?;
        let mut parts = text.split_whitespace();
        let j = parts.next().unwrap_or("");
        let w = parts.next().unwrap_or("");
        if parts.next().is_some() {
            return Err(GraphIoError::Parse { line, what: "edge", text: text.to_string() });
        }
        let j: i64 = parse_tok((line, j), "right vertex")?;
        let w: W = parse_tok((line, w), "weight")?;
        edges.push((j, w));
    }

    let adjacency: Vec<Vec<(i64, W)>> = offsets
        .windows(2)
        .map(|w| edges[w[0]..w[1]].to_vec())
        .collect();
    Ok(BipartiteGraph::from_signed(num_left, num_right, &adjacency)?)
}

pub fn format_graph<W: Weight>(g: &BipartiteGraph<W>) -> String {
    let mut out: Vec<String> = Vec::with_capacity(4 + g.num_left() + g.num_edges());
    out.push(GRAPH_HEADER.to_string());
    out.push(g.num_left().to_string());
    out.push(g.num_right().to_string());
    out.push(g.num_edges().to_string());
    out.extend((0..g.num_left()).map(|i| g.edge_range(i).start.to_string()));
    out.extend((0..g.num_edges()).map(|e| {
        let edge = g.edge(e);
        format!("{} {}", edge.v, edge.w)
    }));
    out.join("\n")
}

pub fn read_graph_from_file<W, P>(fname: P) -> Result<BipartiteGraph<W>, GraphIoError>
where
    W: Weight + FromStr,
    P: AsRef<Path>,
{
    let path = fname.as_ref();
    debug!("reading graph from {}...", path.display());
    let text = fs::read_to_string(path).map_err(io_err(path))?;
    let g = parse_graph(&text)?;
    debug!("graph read (L={}, R={}, m={})", g.num_left(), g.num_right(), g.num_edges());
    Ok(g)
}

pub fn write_graph_to_file<W, P>(g: &BipartiteGraph<W>, fname: P) -> Result<(), GraphIoError>
where
    W: Weight,
    P: AsRef<Path>,
{
    let path = fname.as_ref();
    fs::write(path, format_graph(g)).map_err(io_err(path))
}

pub fn write_slice_to_file_seq<T, P>(s: &[T], fname: P) -> Result<(), GraphIoError>
where
    T: Display,
    P: AsRef<Path>,
{
    let path = fname.as_ref();
    let s: Vec<String> = s.iter().map(T::to_string).collect();
    fs::write(path, s.join("\n")).map_err(io_err(path))
}

pub fn read_matching_from_file<P: AsRef<Path>>(fname: P) -> Result<Vec<usize>, GraphIoError> {
    let path = fname.as_ref();
    let text = fs::read_to_string(path).map_err(io_err(path))?;
    parse_matching(&text)
}

pub fn parse_matching(text: &str) -> Result<Vec<usize>, GraphIoError> {
    text.lines()
        .enumerate()
        .map(|(n, l)| (n + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .map(|tok| parse_tok(tok, "right vertex"))
        .collect()
}
