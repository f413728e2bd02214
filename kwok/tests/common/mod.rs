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

#![allow(dead_code)]

use kwok::{MatchingResult, Weight};

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Best total over all matchings that cover every left vertex, by
/// exhaustive search. Parallel edges count separately.
pub fn brute_force(num_right: usize, adj: &[Vec<(usize, i64)>]) -> Option<i64> {
    fn go(i: usize, used: &mut [bool], adj: &[Vec<(usize, i64)>]) -> Option<i64> {
        if i == adj.len() { return Some(0); }
        let mut best: Option<i64> = None;
        for &(j, w) in &adj[i] {
            if used[j] { continue; }
            used[j] = true;
            if let Some(rest) = go(i + 1, used, adj) {
                best = Some(best.map_or(w + rest, |b| b.max(w + rest)));
            }
            used[j] = false;
        }
        best
    }
    go(0, &mut vec![false; num_right], adj)
}

/// Checks that `r` is a left-perfect matching on `adj` whose potentials
/// certify it: no negative reduced cost, tight matched edges, zero
/// potential on free right vertices and a dual objective equal to the
/// total.
pub fn assert_certified<W>(num_right: usize, adj: &[Vec<(usize, W)>], r: &MatchingResult<W>)
where
    W: Weight<Wide = i64>,
{
    let (u, v) = (r.potentials.left(), r.potentials.right());
    assert_eq!(r.left_match.len(), adj.len());
    assert_eq!(r.right_match.len(), num_right);

    let mut total = 0i64;
    for (i, &j) in r.left_match.iter().enumerate() {
        assert_eq!(r.right_match[j], Some(i), "left {i} and right {j} disagree");
        let w = adj[i]
            .iter()
            .filter(|e| e.0 == j)
            .map(|e| e.1.widen())
            .max()
            .expect("matched edge must exist");
        assert_eq!(u[i] + v[j], w, "matched edge ({i}, {j}) is not tight");
        total += w;
    }
    assert_eq!(total, r.total_weight);

    for (i, row) in adj.iter().enumerate() {
        for &(j, w) in row {
            assert!(u[i] + v[j] >= w.widen(), "edge ({i}, {j}) has negative reduced cost");
        }
    }
    for (j, m) in r.right_match.iter().enumerate() {
        assert!(v[j] >= 0);
        if m.is_none() { assert_eq!(v[j], 0, "free right {j} carries potential"); }
    }
    assert_eq!(r.potentials.dual_objective(), r.total_weight);
}
