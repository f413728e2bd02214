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

use num_traits::{ToPrimitive, Zero};

use kwok::{BipartiteGraph, Weight};

/// Relative tolerance for floating totals.
const FLOAT_TOLERANCE: f64 = 1e-9;

/// Checks that `matching` assigns every left vertex of `g` a distinct right
/// neighbor and, when `expected` is given, that its total weight matches.
/// Parallel edges count with their heaviest copy.
pub fn check<W: Weight>(g: &BipartiteGraph<W>, matching: &[usize], expected: Option<W::Wide>) -> bool {
    if matching.len() != g.num_left() {
        println!("kwok_check: {} entries for {} left vertices", matching.len(), g.num_left());
        return false;
    }

    let mut owner = vec![usize::MAX; g.num_right()];
    let mut total = W::Wide::zero();
    for (i, &j) in matching.iter().enumerate() {
        if j >= g.num_right() {
            println!("kwok_check: left {i} matched to {j}, out of range");
            return false;
        }
        if owner[j] != usize::MAX {
            println!("kwok_check: right {j} matched to both {} and {i}", owner[j]);
            return false;
        }
        owner[j] = i;

        let best = g.index(i)
            .neighbors
            .iter()
            .filter(|e| e.v as usize == j)
            .map(|e| e.w.widen())
            .fold(None, |acc: Option<W::Wide>, w| match acc {
                Some(a) if a >= w => Some(a),
                _ => Some(w),
            });
        match best {
            Some(w) => total += w,
            None => {
                println!("kwok_check: left {i} matched to {j} without an edge");
                return false;
            }
        }
    }

    let Some(expected) = expected else { return true };
    let agrees = if W::INTEGRAL {
        total == expected
    } else {
        match (total.to_f64(), expected.to_f64()) {
            (Some(t), Some(e)) => (t - e).abs() <= FLOAT_TOLERANCE * e.abs().max(1.0),
            _ => false,
        }
    };
    if !agrees {
        println!("kwok_check: total weight {total}, expected {expected}");
    }
    agrees
}
