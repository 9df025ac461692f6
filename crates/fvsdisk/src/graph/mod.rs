//! Unit-disk graphs: adjacency predicate and cached graph.
//!
//! Purpose
//! - `predicate`: pointwise `is_edge`/`degree`/`neighbors` over raw point lists.
//! - `types`: `DiskGraph` caches adjacency once per solve so the validator
//!   and the search operators work on vertex indices instead of recomputing
//!   distances on every query.
//!
//! Two points are adjacent iff they differ and their Euclidean distance is
//! strictly below the threshold.

mod predicate;
mod types;

pub use predicate::{degree, is_edge, neighbors};
pub use types::{Candidate, DiskGraph, VertexId};
