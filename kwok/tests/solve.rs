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

mod common;

use kwok::{
    solve, solve_batch, solve_with, BipartiteGraph, GraphError, MatchingError, SolverOptions,
};

use common::{assert_certified, init};

mod example {
    use super::*;

    fn adj() -> Vec<Vec<(usize, i32)>> {
        vec![
            vec![(0, 5), (1, 9)],
            vec![(1, 3), (2, 7)],
            vec![(0, 2), (2, 6)],
        ]
    }

    #[test]
    fn three_by_three() {
        init();
        let r = solve(3, 3, &adj()).unwrap();
        assert_eq!(r.total_weight, 18i64);
        assert_eq!(r.left_match, vec![1, 2, 0]);
        assert_eq!(r.right_match, vec![Some(2), Some(0), Some(1)]);
        assert_certified(3, &adj(), &r);
    }

    #[test]
    fn float_weights_keep_float_total() {
        let adj: Vec<Vec<(usize, f64)>> = adj()
            .into_iter()
            .map(|row| row.into_iter().map(|(j, w)| (j, w as f64 + 0.25)).collect())
            .collect();
        let r = solve(3, 3, &adj).unwrap();
        let total: f64 = r.total_weight;
        assert!((total - 18.75).abs() < 1e-9);
        assert_eq!(r.left_match, vec![1, 2, 0]);
    }

    #[test]
    fn deterministic() {
        let a = solve(3, 3, &adj()).unwrap();
        for _ in 0..10 {
            assert_eq!(solve(3, 3, &adj()).unwrap().left_match, a.left_match);
        }
    }
}

mod shapes {
    use super::*;

    #[test]
    fn empty_graph() {
        let r = solve::<i32>(0, 0, &[]).unwrap();
        assert_eq!(r.total_weight, 0);
        assert!(r.is_empty());

        let r = solve::<f64>(0, 4, &[]).unwrap();
        assert_eq!(r.total_weight, 0.0);
        assert_eq!(r.right_match, vec![None; 4]);
    }

    #[test]
    fn more_right_than_left() {
        let adj = vec![vec![(3usize, 4u32), (1, 0)], vec![(3, 5), (0, 2)]];
        let r = solve(2, 5, &adj).unwrap();
        // 4 + 2 beats 0 + 5
        assert_eq!(r.total_weight, 6);
        assert_eq!(r.left_match, vec![3, 0]);
        assert_eq!(r.right_match, vec![Some(1), None, None, Some(0), None]);
    }

    #[test]
    fn permutation_is_recovered() {
        let n = 200;
        let p: Vec<usize> = (0..n).map(|i| (i * 37 + 11) % n).collect();
        let adj: Vec<Vec<(usize, i64)>> = (0..n)
            .map(|i| vec![((p[i] + 1) % n, 1), (p[i], 1000)])
            .collect();
        let r = solve(n, n, &adj).unwrap();
        assert_eq!(r.left_match, p);
        assert_eq!(r.total_weight, 1000 * n as i128);
    }

    #[test]
    fn displacement_chain() {
        // every left vertex prefers right 0; only the last can keep it
        let n = 6;
        let adj: Vec<Vec<(usize, i32)>> = (0..n)
            .map(|i| vec![(0, 10 + i as i32), (i + 1, 10)])
            .collect();
        let r = solve(n, n + 1, &adj).unwrap();
        assert_eq!(r.total_weight, 10 * n as i64 + (n as i64 - 1));
        assert_eq!(r.left_match[n - 1], 0);
        assert_certified(n + 1, &adj, &r);
    }
}

mod ties_and_duplicates {
    use super::*;

    #[test]
    fn first_edge_wins_on_ties() {
        let r = solve(1, 2, &[vec![(1usize, 5i32), (0, 5)]]).unwrap();
        assert_eq!(r.left_match, vec![1]);
        let r = solve(1, 2, &[vec![(0usize, 5i32), (1, 5)]]).unwrap();
        assert_eq!(r.left_match, vec![0]);
    }

    #[test]
    fn heavier_duplicate_is_matched() {
        let adj = vec![vec![(0usize, 3i32), (0, 8), (0, 5)]];
        let r = solve(1, 1, &adj).unwrap();
        assert_eq!(r.total_weight, 8);
        assert_certified(1, &adj, &r);
    }

    #[test]
    fn duplicates_of_a_pinned_vertex_are_not_a_clash() {
        let adj = vec![vec![(0usize, 3i32), (0, 4)], vec![(0, 1), (1, 1)]];
        let r = solve(2, 2, &adj).unwrap();
        assert_eq!(r.left_match, vec![0, 1]);
        assert_eq!(r.total_weight, 5);
    }
}

mod wide_totals {
    use super::*;

    #[test]
    fn i32_total_beyond_i32_range() {
        let n = 4;
        let adj: Vec<Vec<(usize, i32)>> = (0..n).map(|i| vec![(i, i32::MAX)]).collect();
        let r = solve(n, n, &adj).unwrap();
        assert_eq!(r.total_weight, 4 * i32::MAX as i64);
    }

    #[test]
    fn u64_total_beyond_u64_range() {
        let adj: Vec<Vec<(usize, u64)>> = vec![vec![(0, u64::MAX)], vec![(1, u64::MAX)]];
        let r = solve(2, 2, &adj).unwrap();
        assert_eq!(r.total_weight, 2 * u64::MAX as i128);
    }
}

mod infeasible {
    use super::*;

    #[test]
    fn shared_single_edge() {
        let adj = vec![vec![(0usize, 1i32)], vec![(0, 2)], vec![(1, 3), (2, 3)]];
        assert_eq!(solve(3, 3, &adj).unwrap_err(), MatchingError::Infeasible { left: 1 });

        let no_precheck = SolverOptions::new().pinned_precheck(false);
        assert_eq!(
            solve_with(3, 3, &adj, &no_precheck).unwrap_err(),
            MatchingError::Infeasible { left: 1 }
        );
    }

    #[test]
    fn hall_violation_found_by_search() {
        let adj = vec![vec![(0usize, 1i32), (1, 1)]; 3];
        assert_eq!(solve(3, 3, &adj).unwrap_err(), MatchingError::Infeasible { left: 2 });
    }

    #[test]
    fn more_left_than_right() {
        let adj = vec![vec![(0usize, 1.0f64), (1, 2.0)]; 3];
        assert_eq!(solve(3, 2, &adj).unwrap_err(), MatchingError::Infeasible { left: 2 });
    }
}

mod validation {
    use super::*;

    #[test]
    fn right_out_of_range() {
        let adj = vec![vec![(0usize, 1i32)], vec![(2, 1)]];
        assert_eq!(
            solve(2, 2, &adj).unwrap_err(),
            MatchingError::InvalidGraph(GraphError::RightOutOfRange { left: 1, right: 2, num_right: 2 })
        );
    }

    #[test]
    fn empty_row() {
        let adj = vec![vec![(0usize, 1i32)], vec![], vec![]];
        assert_eq!(
            solve(3, 3, &adj).unwrap_err(),
            MatchingError::InvalidGraph(GraphError::EmptyAdjacency { left: 1 })
        );
    }

    #[test]
    fn wrong_row_count() {
        let adj = vec![vec![(0usize, 1i32)]];
        assert_eq!(
            solve(2, 2, &adj).unwrap_err(),
            MatchingError::InvalidGraph(GraphError::AdjacencyLength { expected: 2, found: 1 })
        );
    }

    #[test]
    fn non_finite_weights() {
        for w in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let adj = vec![vec![(0usize, 1.0), (1, w)]];
            assert_eq!(
                solve(1, 2, &adj).unwrap_err(),
                MatchingError::InvalidGraph(GraphError::NonFiniteWeight { left: 0, position: 1 })
            );
        }
    }

    #[test]
    fn signed_input() {
        assert_eq!(
            BipartiteGraph::<i32>::from_signed(-1, 2, &[]).unwrap_err(),
            GraphError::NegativeDimension { left: -1, right: 2 }
        );
        assert_eq!(
            BipartiteGraph::from_signed(1, 2, &[vec![(-1i64, 1i32)]]).unwrap_err(),
            GraphError::RightOutOfRange { left: 0, right: -1, num_right: 2 }
        );
        let g = BipartiteGraph::from_signed(2, 2, &[vec![(1i64, 1i32)], vec![(0, 2), (1, 3)]]).unwrap();
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.offerers(1), &[0, 1]);
        assert_eq!(g.pinned(0), Some(1));
        assert_eq!(g.pinned(1), None);
    }

    #[test]
    fn left_vertex_view_follows_edge_range() {
        let adj = vec![vec![(1usize, 4i32), (0, 2), (1, 7)], vec![(0, 5)]];
        let g = BipartiteGraph::from_adjacency(2, 2, &adj).unwrap();
        let row: Vec<(u32, i32)> = g.index(0).neighbors.iter().map(|e| (e.v, e.w)).collect();
        assert_eq!(row, vec![(1, 4), (0, 2), (1, 7)]);
        assert_eq!(g.index(1).neighbors.len(), g.edge_range(1).len());
        assert_eq!(g.edge_range(1), 3..4);
    }
}

mod negative_weights {
    use super::*;

    fn adj() -> Vec<Vec<(usize, i32)>> {
        vec![vec![(0, -4), (1, -1)], vec![(0, -2), (1, -6)]]
    }

    #[test]
    fn rejected_by_default() {
        assert_eq!(
            solve(2, 2, &adj()).unwrap_err(),
            MatchingError::InvalidGraph(GraphError::NegativeWeight { left: 0, position: 0 })
        );
    }

    #[test]
    fn solved_when_allowed() {
        let opts = SolverOptions::new().allow_negative_weights(true);
        let r = solve_with(2, 2, &adj(), &opts).unwrap();
        assert_eq!(r.total_weight, -3);
        assert_eq!(r.left_match, vec![1, 0]);
        assert_certified(2, &adj(), &r);
    }
}

mod batch {
    use super::*;

    #[test]
    fn matches_sequential_solves() {
        let graphs: Vec<BipartiteGraph<i32>> = (1..20usize)
            .map(|n| {
                let adj: Vec<Vec<(usize, i32)>> = (0..n)
                    .map(|i| vec![(i, (i * 7 % 5) as i32), ((i + 1) % n, (i * 3 % 4) as i32)])
                    .collect();
                BipartiteGraph::from_adjacency(n, n, &adj).unwrap()
            })
            .collect();
        let opts = SolverOptions::default();
        let batch = solve_batch(&graphs, &opts);
        for (g, r) in graphs.iter().zip(batch) {
            let seq = kwok::solve_graph(g, &opts).unwrap();
            let r = r.unwrap();
            assert_eq!(r.left_match, seq.left_match);
            assert_eq!(r.total_weight, seq.total_weight);
        }
    }
}
