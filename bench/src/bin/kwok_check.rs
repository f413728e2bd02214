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

use std::str::FromStr;

use clap::Parser;
use log::info;

use kwok::Weight;
use kwok_bench::check::check;
use kwok_bench::graph_io::{read_graph_from_file, read_matching_from_file, GraphIoError};
use kwok_bench::{init_logging, solve_once, Domain, FloatWeight, IntWeight};

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// matching results filename
    #[clap(value_parser, required=true)]
    rfname: String,

    /// the input graph's filename
    #[clap(value_parser, required=true)]
    ifname: String,

    /// the weight domain of the input graph
    #[clap(short, long, value_parser, default_value_t = Domain::Int)]
    weights: Domain,

    /// compare the total against the dense reference solver instead of kwok
    #[clap(long)]
    reference: bool,
}

fn run<W: Weight + FromStr>(args: &Args) -> Result<bool, GraphIoError> {
    let g = read_graph_from_file::<W, _>(&args.ifname)?;
    let r = read_matching_from_file(&args.rfname)?;

    let expected = solve_once(args.reference, &g).ok().map(|(_, t)| t);
    match expected {
        Some(t) => info!("optimal total weight {t}"),
        None => {
            println!("kwok_check: the graph has no left-perfect matching");
            return Ok(false);
        }
    }
    Ok(check(&g, &r, expected))
}

fn main() {
    init_logging();

    let args = Args::parse();
    let ok = match args.weights {
        Domain::Int => run::<IntWeight>(&args),
        Domain::Float => run::<FloatWeight>(&args),
    };
    match ok {
        Ok(true) => println!("OK"),
        Ok(false) => { println!("ERR"); std::process::exit(1); }
        Err(e) => { println!("kwok_check: {e}"); println!("ERR"); std::process::exit(1); }
    }
}
