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

//! Numeric domains for edge weights.
//!
//! A [`Weight`] is what the caller puts on an edge. Every weight type names a
//! wider [`WideWeight`] type in which potentials, search distances and the
//! matched total live, so an integral solve accumulates exactly and never
//! overflows for any realistic number of left vertices.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use num_traits::{NumAssign, ToPrimitive, Zero};

/// Accumulation domain of a weight type.
pub trait WideWeight:
    Copy + Debug + Display + PartialOrd + NumAssign + ToPrimitive + Send + Sync + 'static
{
    /// Total order used by the search queue.
    fn cmp_wide(&self, other: &Self) -> Ordering;

    /// Raises values that rounding pushed below zero back to zero.
    #[inline(always)]
    fn clamp_non_negative(self) -> Self {
        if self < Self::zero() { Self::zero() } else { self }
    }
}

/// Edge weight accepted by the solver.
pub trait Weight: Copy + Debug + Display + PartialOrd + Send + Sync + 'static {
    type Wide: WideWeight;

    /// `true` for integer domains, whose totals are exact.
    const INTEGRAL: bool;

    fn widen(self) -> Self::Wide;

    fn is_finite_weight(self) -> bool;

    fn is_negative_weight(self) -> bool;
}

macro_rules! impl_wide_ord {
    ($($t: ty),*) => {
        $(impl WideWeight for $t {
            #[inline(always)]
            fn cmp_wide(&self, other: &Self) -> Ordering { self.cmp(other) }
        })*
    }
}

impl_wide_ord!(i64, i128);

impl WideWeight for f64 {
    #[inline(always)]
    fn cmp_wide(&self, other: &Self) -> Ordering { f64::total_cmp(self, other) }
}

macro_rules! impl_int_weight {
    ($(($t: ty, $wide: ty)),*) => {
        $(impl Weight for $t {
            type Wide = $wide;
            const INTEGRAL: bool = true;

            #[inline(always)]
            fn widen(self) -> $wide { <$wide>::from(self) }

            #[inline(always)]
            fn is_finite_weight(self) -> bool { true }

            #[inline(always)]
            fn is_negative_weight(self) -> bool { self < <$t as Zero>::zero() }
        })*
    }
}

impl_int_weight!((i32, i64), (u32, i64), (i64, i128), (u64, i128));

macro_rules! impl_float_weight {
    ($($t: ty),*) => {
        $(impl Weight for $t {
            type Wide = f64;
            const INTEGRAL: bool = false;

            #[inline(always)]
            fn widen(self) -> f64 { f64::from(self) }

            #[inline(always)]
            fn is_finite_weight(self) -> bool { <$t>::is_finite(self) }

            #[inline(always)]
            fn is_negative_weight(self) -> bool { self < 0.0 }
        })*
    }
}

impl_float_weight!(f32, f64);
