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

use clap::Parser;
use log::{error, info};

use kwok::BipartiteGraph;
use kwok_bench::generate::{degree_for, float_weights, int_weights, random_graph, weight_bound};
use kwok_bench::graph_io::write_graph_to_file;
use kwok_bench::{init_logging, Domain};

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the number of left vertices
    #[clap(short, value_parser, required=true)]
    n: usize,

    /// the number of right vertices, n when omitted
    #[clap(short, long, value_parser)]
    right: Option<usize>,

    /// the density factor: every left vertex gets t * floor(log2 n) edges
    #[clap(short, value_parser, default_value_t=1.0)]
    t: f64,

    /// the random seed
    #[clap(short, long, value_parser, default_value_t=1)]
    seed: u64,

    /// the weight domain
    #[clap(short, long, value_parser, default_value_t = Domain::Int)]
    weights: Domain,

    /// upper bound on generated weights, n when omitted
    #[clap(long, value_parser)]
    max_weight: Option<u64>,

    /// the output graph's filename
    #[clap(short, long, value_parser, required=true)]
    ofname: String,
}

fn generate(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let num_right = args.right.unwrap_or(args.n);
    let degree = degree_for(args.t, args.n);
    let hi = weight_bound(args.max_weight, args.n);
    info!(
        "generating L={}, R={}, degree={}, {} weights in [1, {}]",
        args.n, num_right, degree, args.weights, hi
    );

    match args.weights {
        Domain::Int => {
            let adj = random_graph(args.n, num_right, degree, args.seed, int_weights(hi as i64))?;
            write_graph_to_file(&BipartiteGraph::from_adjacency(args.n, num_right, &adj)?, &args.ofname)?;
        }
        Domain::Float => {
            let adj = random_graph(args.n, num_right, degree, args.seed, float_weights(hi as f64))?;
            write_graph_to_file(&BipartiteGraph::from_adjacency(args.n, num_right, &adj)?, &args.ofname)?;
        }
    }
    Ok(())
}

fn main() {
    init_logging();

    let args = Args::parse();
    if let Err(e) = generate(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}
