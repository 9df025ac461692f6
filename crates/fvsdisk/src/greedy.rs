//! Randomized greedy construction of a valid feedback vertex set.
//!
//! Repeatedly removes one of the `top_k` highest-degree vertices (degree
//! counted among vertices not chosen yet) until the remainder is a forest.
//! The random pick among the top vertices diversifies independent runs.

use std::cmp::Reverse;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::graph::{Candidate, DiskGraph, VertexId};
use crate::point::Point;
use crate::validate::is_valid;

/// Size of the high-degree pool the next vertex is drawn from.
pub const DEFAULT_TOP_K: usize = 5;

/// Build a valid candidate. Never fails: in the worst case every vertex is chosen.
///
/// Ties in degree keep the current order of the not-yet-chosen vertices
/// (input order with chosen vertices taken out).
pub fn greedy<R: Rng + ?Sized>(graph: &DiskGraph, top_k: usize, rng: &mut R) -> Candidate {
    let n = graph.len();
    let top_k = top_k.max(1);
    let mut rest: Vec<VertexId> = graph.vertices().collect();
    let mut in_rest = vec![true; n];
    let mut result = Candidate::empty(n);

    while !is_valid(graph, &result) {
        let mut ranked: Vec<(VertexId, usize)> = rest
            .iter()
            .map(|&v| (v, graph.degree_within(v, &in_rest)))
            .collect();
        ranked.sort_by_key(|&(_, deg)| Reverse(deg));
        let pool = &ranked[..top_k.min(ranked.len())];
        let Some(&(chosen, deg)) = pool.choose(rng) else {
            // rest is empty, so result holds every vertex and is valid
            break;
        };
        trace!(vertex = chosen.0, degree = deg, "greedy_pick");
        result.push(chosen);
        in_rest[chosen.0] = false;
        rest.retain(|&v| v != chosen);
    }
    result
}

/// Point-level form of [`greedy`] with the default pool size.
pub fn greedy_points<R: Rng + ?Sized>(points: &[Point], threshold: f64, rng: &mut R) -> Vec<Point> {
    let graph = DiskGraph::new(points, threshold);
    greedy(&graph, DEFAULT_TOP_K, rng).points(&graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn grid(w: usize, h: usize) -> Vec<Point> {
        let mut pts = Vec::with_capacity(w * h);
        for i in 0..w {
            for j in 0..h {
                pts.push(Point::new(i as f64, j as f64));
            }
        }
        pts
    }

    #[test]
    fn no_edges_gives_empty_candidate() {
        let mut rng = StdRng::seed_from_u64(1);
        let pts = grid(3, 3);
        assert!(greedy_points(&pts, 1.0, &mut rng).is_empty());
        assert!(greedy_points(&pts, 0.0, &mut rng).is_empty());
        assert!(greedy_points(&pts, -3.0, &mut rng).is_empty());
        assert!(greedy_points(&[], 5.0, &mut rng).is_empty());
    }

    #[test]
    fn result_is_valid_on_dense_grid() {
        let pts = grid(5, 4);
        // 8-neighbourhood grid: lots of triangles
        let g = DiskGraph::new(&pts, 1.5);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let c = greedy(&g, DEFAULT_TOP_K, &mut rng);
            assert!(is_valid(&g, &c));
            assert!(c.len() < g.len());
        }
    }

    #[test]
    fn single_pick_breaks_a_lone_cycle() {
        // 4-cycle: every vertex has degree 2, one removal suffices
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        let fvs = greedy_points(&pts, 1.2, &mut rng);
        assert_eq!(fvs.len(), 1);
    }

    #[test]
    fn top_one_is_deterministic_and_takes_the_hub() {
        // wheel: hub adjacent to every rim vertex, rim is a cycle
        let mut pts = vec![Point::new(0.0, 0.0)];
        for k in 0..8 {
            let th = std::f64::consts::TAU * k as f64 / 8.0;
            pts.push(Point::new(th.cos(), th.sin()));
        }
        let g = DiskGraph::new(&pts, 1.05);
        assert_eq!(g.degree(VertexId(0)), 8);
        let mut a = StdRng::seed_from_u64(10);
        let mut b = StdRng::seed_from_u64(99);
        let ca = greedy(&g, 1, &mut a);
        let cb = greedy(&g, 1, &mut b);
        assert_eq!(ca, cb);
        assert_eq!(ca.members()[0], VertexId(0));
        assert!(is_valid(&g, &ca));
    }

    #[test]
    fn same_seed_same_candidate() {
        let g = DiskGraph::new(&grid(6, 6), 1.5);
        let c1 = greedy(&g, DEFAULT_TOP_K, &mut StdRng::seed_from_u64(7));
        let c2 = greedy(&g, DEFAULT_TOP_K, &mut StdRng::seed_from_u64(7));
        assert_eq!(c1, c2);
    }
}
