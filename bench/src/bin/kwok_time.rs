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

use std::error::Error;
use std::str::FromStr;
use std::time::Duration;

use log::{error, info};

use kwok::{BipartiteGraph, Weight};
use kwok_bench::graph_io::{read_graph_from_file, write_slice_to_file_seq};
use kwok_bench::time_loop::time_loop;
use kwok_bench::{
    define_algs, define_args, finalize, init, solve_once, Domain, FloatWeight, IntWeight, SolveError,
};

define_args!(Algs::KWOK);

define_algs!(
    (KWOK, "kwok"),
    (DENSE, "dense")
);

fn run<W: Weight>(
    alg: Algs,
    rounds: usize,
    g: &BipartiteGraph<W>,
) -> Result<(Vec<usize>, Duration), SolveError> {
    let dense = alg == Algs::DENSE;

    // infeasible graphs fail here, before any timing
    let (mut r, total) = solve_once(dense, g)?;
    info!("{alg}: total weight {total}");

    let mean = time_loop(
        "kwok",
        rounds,
        Duration::new(1, 0),
        || {},
        || { if let Ok((m, _)) = solve_once(dense, g) { r = m; } },
        || {}
    );
    Ok((r, mean))
}

fn bench<W: Weight + FromStr>(args: &Args) -> Result<(), Box<dyn Error>> {
    let g = read_graph_from_file::<W, _>(&args.ifname)?;
    let (r, d) = run(args.algorithm, args.rounds, &g)?;

    finalize!(
        args,
        r,
        d,
        write_slice_to_file_seq(&r, &args.ofname)?
    );
    Ok(())
}

fn main() {
    init!();

    let args = Args::parse();
    let res = match args.weights {
        Domain::Int => bench::<IntWeight>(&args),
        Domain::Float => bench::<FloatWeight>(&args),
    };
    if let Err(e) = res {
        error!("{e}");
        std::process::exit(1);
    }
}
