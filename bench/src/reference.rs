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

//! Dense Hungarian reference solver.
//!
//! Expands the sparse graph into an L×R cost matrix in which missing edges
//! are disallowed rather than zero-weight, then runs the classic O(L²·R)
//! shortest-augmenting-path Hungarian method on it. Shares no code with the
//! sparse solver, which makes it a cross-validation baseline.

use kwok::{BipartiteGraph, Weight};

/// Maximum-weight left-perfect matching as `(left_match, total)`, or `None`
/// when no such matching exists.
pub fn dense_assignment<W: Weight>(g: &BipartiteGraph<W>) -> Option<(Vec<usize>, W::Wide)> {
    let n = g.num_left();
    let m = g.num_right();
    let zero = <W::Wide as num_traits::Zero>::zero();
    if n == 0 { return Some((vec![], zero)); }
    if n > m { return None; }

    // costs are negated weights; parallel edges keep the heaviest copy
    let mut cost: Vec<Vec<Option<W::Wide>>> = vec![vec![None; m]; n];
    for (i, row) in cost.iter_mut().enumerate() {
        for e in g.index(i).neighbors {
            let c = zero - e.w.widen();
            let slot = &mut row[e.v as usize];
            if slot.map_or(true, |old| c < old) { *slot = Some(c); }
        }
    }

    // 1-based: row 0 and column 0 are the virtual start
    let mut u = vec![zero; n + 1];
    let mut v = vec![zero; m + 1];
    let mut p = vec![0usize; m + 1];
    let mut way = vec![0usize; m + 1];

    for i in 1..=n {
        p[0] = i;
        let mut j0 = 0;
        let mut minv: Vec<Option<W::Wide>> = vec![None; m + 1];
        let mut used = vec![false; m + 1];
        loop {
            used[j0] = true;
            let i0 = p[j0];
            let mut delta: Option<W::Wide> = None;
            let mut j1 = 0;
            for j in 1..=m {
                if used[j] { continue; }
                if let Some(c) = cost[i0 - 1][j - 1] {
                    let cur = c - u[i0] - v[j];
                    if minv[j].map_or(true, |mv| cur < mv) {
                        minv[j] = Some(cur);
                        way[j] = j0;
                    }
                }
                if let Some(mv) = minv[j] {
                    if delta.map_or(true, |d| mv < d) {
                        delta = Some(mv);
                        j1 = j;
                    }
                }
            }
            // no reachable free column: row i cannot be matched
            let delta = delta?;
            for j in 0..=m {
                if used[j] {
                    u[p[j]] += delta;
                    v[j] -= delta;
                } else if let Some(mv) = minv[j].as_mut() {
                    *mv -= delta;
                }
            }
            j0 = j1;
            if p[j0] == 0 { break; }
        }
        loop {
            let j1 = way[j0];
            p[j0] = p[j1];
            j0 = j1;
            if j0 == 0 { break; }
        }
    }

    let mut left_match = vec![0usize; n];
    let mut total = zero;
    for j in 1..=m {
        if p[j] != 0 {
            left_match[p[j] - 1] = j - 1;
            total -= cost[p[j] - 1][j - 1]?;
        }
    }
    Some((left_match, total))
}
