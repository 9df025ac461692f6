//! Feedback vertex sets of unit-disk graphs.
//!
//! Given points in the plane and a threshold, two points are adjacent iff
//! their distance is strictly below the threshold. The solver returns a
//! small (not necessarily minimum) set of points whose removal leaves a
//! forest: randomized greedy construction, remove-2-add-1 local search and
//! a small elitist population.
//!
//! Module map
//! - `point`: exact-value points and ordered point sets.
//! - `graph`: adjacency predicate and the cached `DiskGraph`/`Candidate` types.
//! - `validate`: acyclicity check of `G - candidate`.
//! - `greedy`, `local_search`: construction and improvement operators.
//! - `evolve`: population loop and the `Solver` entry point.
//! - `sample`: reproducible random instances for experiments and benches.

pub mod evolve;
pub mod graph;
pub mod greedy;
pub mod local_search;
pub mod point;
pub mod sample;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use evolve::{calcul_fvs, FvsResult, Solver, SolverCfg};
pub use point::{Point, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::evolve::{calcul_fvs, CfgError, FvsResult, Population, Solver, SolverCfg};
    pub use crate::graph::{Candidate, DiskGraph, VertexId};
    pub use crate::greedy::greedy;
    pub use crate::local_search::local_search;
    pub use crate::point::{Point, PointSet};
    pub use crate::sample::{draw_points, ReplayToken, SampleCfg};
    pub use crate::validate::{find_cycle_witness, is_valid, is_valid_points};
}
