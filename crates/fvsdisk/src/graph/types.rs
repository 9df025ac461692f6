//! Disk graph with cached adjacency, and the candidate vertex set type.
//!
//! Kept small and explicit so the validator and the search operators read
//! as index manipulations over a fixed vertex list.

use std::collections::HashMap;

use super::predicate::is_edge;
use crate::point::{Point, PointSet};

/// Index into `DiskGraph::points`. Ordering follows first appearance in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// Unit-disk graph over deduplicated points.
///
/// Adjacency lists are sorted by vertex index, i.e. by input order, so a
/// neighbour scan visits vertices in the same order as a scan of the input.
/// Immutable once built.
#[derive(Clone, Debug)]
pub struct DiskGraph {
    points: Vec<Point>,
    threshold: f64,
    adj: Vec<Vec<VertexId>>,
    ids: HashMap<Point, VertexId>,
}

impl DiskGraph {
    /// Build the graph; duplicate points collapse onto their first occurrence.
    pub fn new(points: &[Point], threshold: f64) -> Self {
        let points = PointSet::from(points).into_vec();
        let n = points.len();
        let mut adj = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if is_edge(points[i], points[j], threshold) {
                    adj[i].push(VertexId(j));
                    adj[j].push(VertexId(i));
                }
            }
        }
        // Lists come out sorted: lower ids are pushed before higher ones.
        let ids = points
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, VertexId(i)))
            .collect();
        Self {
            points,
            threshold,
            adj,
            ids,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Deduplicated vertices, indexed by `VertexId`.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn point(&self, v: VertexId) -> Point {
        self.points[v.0]
    }

    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.adj[v.0]
    }

    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.adj[v.0].len()
    }

    /// Degree of `v` counting only neighbours `u` with `mask[u]` set.
    pub fn degree_within(&self, v: VertexId, mask: &[bool]) -> usize {
        self.adj[v.0].iter().filter(|u| mask[u.0]).count()
    }

    pub fn vertex_of(&self, p: &Point) -> Option<VertexId> {
        self.ids.get(p).copied()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.len()).map(VertexId)
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }
}

/// A prospective feedback vertex set: ordered, duplicate-free vertex list.
///
/// Values are never edited once handed out; operators build new candidates.
/// A candidate belongs to the graph it was sized for: every `VertexId`
/// passed in must be below that graph's `len()`, otherwise indexing panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    members: Vec<VertexId>,
    mask: Vec<bool>,
}

impl Candidate {
    /// Empty candidate over a graph with `n` vertices.
    pub fn empty(n: usize) -> Self {
        Self {
            members: Vec::new(),
            mask: vec![false; n],
        }
    }

    /// Candidate from vertex ids; repeats are dropped, order of first occurrence kept.
    ///
    /// Panics if an id is `>= n`.
    pub fn from_vertices<I: IntoIterator<Item = VertexId>>(n: usize, vertices: I) -> Self {
        let mut c = Self::empty(n);
        for v in vertices {
            c.push(v);
        }
        c
    }

    /// Candidate from points. Points that are not vertices of `graph` are ignored.
    pub fn from_points(graph: &DiskGraph, points: &[Point]) -> Self {
        Self::from_vertices(
            graph.len(),
            points.iter().filter_map(|p| graph.vertex_of(p)),
        )
    }

    pub(crate) fn push(&mut self, v: VertexId) -> bool {
        if self.mask[v.0] {
            return false;
        }
        self.mask[v.0] = true;
        self.members.push(v);
        true
    }

    /// Copy with `v` appended.
    pub fn with(&self, v: VertexId) -> Self {
        let mut c = self.clone();
        c.push(v);
        c
    }

    /// Copy without the members at positions `i` and `j`.
    pub fn without_positions(&self, i: usize, j: usize) -> Self {
        let mut c = self.clone();
        c.members = self
            .members
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != i && k != j)
            .map(|(_, &v)| v)
            .collect();
        c.mask[self.members[i].0] = false;
        c.mask[self.members[j].0] = false;
        c
    }

    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.mask[v.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[VertexId] {
        &self.members
    }

    /// Membership mask indexed by vertex id.
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    pub fn points(&self, graph: &DiskGraph) -> Vec<Point> {
        self.members.iter().map(|&v| graph.point(v)).collect()
    }
}
