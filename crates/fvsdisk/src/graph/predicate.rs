//! Disk-graph adjacency on raw points. Pure functions, no state.

use crate::point::Point;

/// Edge iff `p != q` and `|p - q| < threshold`. Non-positive thresholds give no edges.
#[inline]
pub fn is_edge(p: Point, q: Point, threshold: f64) -> bool {
    p != q && p.distance(q) < threshold
}

/// Number of points of `within` adjacent to `p`.
pub fn degree(p: Point, within: &[Point], threshold: f64) -> usize {
    within.iter().filter(|&&q| is_edge(p, q, threshold)).count()
}

/// Points of `within` adjacent to `p`, in the iteration order of `within`.
pub fn neighbors(p: Point, within: &[Point], threshold: f64) -> Vec<Point> {
    within
        .iter()
        .copied()
        .filter(|&q| is_edge(p, q, threshold))
        .collect()
}
