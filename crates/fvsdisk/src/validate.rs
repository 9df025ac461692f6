//! Feedback-vertex-set validity: is `G - candidate` a forest?
//!
//! Colored traversal over a shrinking active pool. Each component is grown
//! breadth-first from a seed; a vertex leaves the pool once all its
//! neighbours have been scanned. Neighbour scans only see the pool, so the
//! edge back to an already finished parent is invisible, and any neighbour
//! that is already on the frontier closes a cycle.

use std::collections::VecDeque;

use crate::graph::{Candidate, DiskGraph, VertexId};
use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    /// In the pool, not reached yet.
    Active,
    /// In the pool and queued.
    Frontier,
    /// Scanned and dropped from the pool.
    Finished,
    /// Member of the candidate; never part of the pool.
    Removed,
}

/// True iff removing `candidate` from `graph` leaves an acyclic graph.
pub fn is_valid(graph: &DiskGraph, candidate: &Candidate) -> bool {
    find_cycle_witness(graph, candidate).is_none()
}

/// Point-level form: `candidate` points that are not in `all_points` are ignored.
pub fn is_valid_points(all_points: &[Point], candidate: &[Point], threshold: f64) -> bool {
    let graph = DiskGraph::new(all_points, threshold);
    let candidate = Candidate::from_points(&graph, candidate);
    is_valid(&graph, &candidate)
}

/// First edge found that closes a cycle in `graph - candidate`, as
/// `(head, neighbour)`; `None` if the remainder is a forest.
pub fn find_cycle_witness(
    graph: &DiskGraph,
    candidate: &Candidate,
) -> Option<(VertexId, VertexId)> {
    let mut mark: Vec<Mark> = candidate
        .mask()
        .iter()
        .map(|&removed| if removed { Mark::Removed } else { Mark::Active })
        .collect();
    let mut frontier: VecDeque<VertexId> = VecDeque::new();

    for seed in graph.vertices() {
        if mark[seed.0] != Mark::Active {
            continue;
        }
        mark[seed.0] = Mark::Frontier;
        frontier.push_back(seed);

        while let Some(&head) = frontier.front() {
            for &p in graph.neighbors(head) {
                match mark[p.0] {
                    // outside the pool: candidate members and the finished parent
                    Mark::Removed | Mark::Finished => continue,
                    Mark::Frontier => return Some((head, p)),
                    Mark::Active => {
                        mark[p.0] = Mark::Frontier;
                        frontier.push_back(p);
                    }
                }
            }
            frontier.pop_front();
            mark[head.0] = Mark::Finished;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId as V;

    fn ring(n: usize, radius: f64) -> Vec<Point> {
        (0..n)
            .map(|k| {
                let th = std::f64::consts::TAU * k as f64 / n as f64;
                Point::new(radius * th.cos(), radius * th.sin())
            })
            .collect()
    }

    fn side_of_ring(n: usize, radius: f64) -> f64 {
        2.0 * radius * (std::f64::consts::PI / n as f64).sin()
    }

    #[test]
    fn empty_graph_is_valid() {
        let g = DiskGraph::new(&[], 1.0);
        assert!(is_valid(&g, &Candidate::empty(0)));
    }

    #[test]
    fn path_is_a_forest() {
        let pts: Vec<Point> = (0..6).map(|i| Point::new(i as f64, 0.0)).collect();
        let g = DiskGraph::new(&pts, 1.5);
        assert_eq!(g.edge_count(), 5);
        assert!(is_valid(&g, &Candidate::empty(g.len())));
    }

    #[test]
    fn star_is_a_forest() {
        let mut pts = vec![Point::new(0.0, 0.0)];
        pts.extend(ring(5, 1.0));
        // leaves are ~1.17 apart, centre is 1.0 away from each leaf
        let g = DiskGraph::new(&pts, 1.1);
        assert_eq!(g.degree(V(0)), 5);
        assert_eq!(g.edge_count(), 5);
        assert!(is_valid(&g, &Candidate::empty(g.len())));
    }

    #[test]
    fn ring_has_a_cycle_until_one_vertex_goes() {
        let n = 7;
        let pts = ring(n, 2.0);
        let t = side_of_ring(n, 2.0) * 1.05;
        let g = DiskGraph::new(&pts, t);
        assert_eq!(g.edge_count(), n);
        assert!(find_cycle_witness(&g, &Candidate::empty(n)).is_some());
        for v in 0..n {
            assert!(is_valid(&g, &Candidate::from_vertices(n, [V(v)])));
        }
    }

    #[test]
    fn two_components_one_cyclic() {
        let mut pts: Vec<Point> = (0..4).map(|i| Point::new(i as f64, 0.0)).collect();
        pts.extend(ring(3, 0.5).into_iter().map(|p| Point::new(p.x + 50.0, p.y)));
        let g = DiskGraph::new(&pts, 1.01);
        assert!(!is_valid(&g, &Candidate::empty(g.len())));
        // cutting the path does not help, cutting the triangle does
        assert!(!is_valid(&g, &Candidate::from_vertices(g.len(), [V(1)])));
        assert!(is_valid(&g, &Candidate::from_vertices(g.len(), [V(5)])));
    }

    #[test]
    fn complete_graph_needs_n_minus_2() {
        let n = 6;
        let pts = ring(n, 1.0);
        let g = DiskGraph::new(&pts, 10.0);
        assert_eq!(g.edge_count(), n * (n - 1) / 2);
        let all: Vec<V> = g.vertices().collect();
        for k in 0..n {
            let c = Candidate::from_vertices(n, all[..k].iter().copied());
            assert_eq!(is_valid(&g, &c), k >= n - 2, "k = {k}");
        }
    }

    #[test]
    fn point_level_ignores_duplicates_and_foreign_points() {
        let pts = ring(4, 1.0);
        let t = side_of_ring(4, 1.0) * 1.1;
        let mut dup = pts.clone();
        dup.extend(pts.iter().copied());
        assert!(!is_valid_points(&dup, &[], t));
        assert!(is_valid_points(&dup, &[pts[2], Point::new(40.0, 40.0)], t));
        assert!(!is_valid_points(&dup, &[Point::new(40.0, 40.0)], t));
    }

    #[test]
    fn validation_is_pure() {
        let pts = ring(5, 1.0);
        let g = DiskGraph::new(&pts, 1.5);
        let c = Candidate::from_vertices(g.len(), [V(0)]);
        let first = is_valid(&g, &c);
        assert_eq!(first, is_valid(&g, &c));
        assert_eq!(c.members(), &[V(0)]);
    }
}
