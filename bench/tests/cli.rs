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

use kwok_bench::{define_algs, define_args, Domain};

define_args!(Algs::KWOK);

define_algs!(
    (KWOK, "kwok"),
    (DENSE, "dense")
);

#[test]
fn defaults() {
    let args = Args::try_parse_from(["kwok_time", "graph.txt"]).unwrap();
    assert_eq!(args.algorithm, Algs::KWOK);
    assert_eq!(args.ifname, "graph.txt");
    assert!(args.ofname.is_empty());
    assert_eq!(args.rounds, 1);
    assert_eq!(args.weights, Domain::Int);
}

#[test]
fn all_flags() {
    let args = Args::try_parse_from([
        "kwok_time", "-a", "dense", "-o", "out.txt", "-r", "3", "-w", "float", "graph.txt",
    ]).unwrap();
    assert_eq!(args.algorithm, Algs::DENSE);
    assert_eq!(args.ofname, "out.txt");
    assert_eq!(args.rounds, 3);
    assert_eq!(args.weights, Domain::Float);
    assert_eq!(args.algorithm.to_string(), "dense");
}

#[test]
fn unknown_algorithm_is_rejected() {
    assert!(Args::try_parse_from(["kwok_time", "-a", "auction", "graph.txt"]).is_err());
}
