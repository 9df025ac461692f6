//! Population search: greedy seeding, local-search mutation, elitist selection.
//!
//! Purpose
//! - Orchestrate the core operators into the top-level solve:
//!   seed `population_size` greedy candidates, then for each generation
//!   mutate every member with local search, inject one fresh greedy
//!   candidate, sort by size and drop the worst.
//! - Report progress through `tracing` only; nothing here depends on a
//!   subscriber being installed.
//!
//! Lifecycle
//! - Seeded -> Evolving(1..=generations) -> Done. The population is owned
//!   by one solve call; only the best candidate leaves it.

mod cfg;
mod population;

pub use cfg::{CfgError, SolverCfg};
pub use population::Population;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::graph::{Candidate, DiskGraph};
use crate::point::Point;

/// Outcome of one solve.
#[derive(Clone, Debug)]
pub struct FvsResult {
    /// Feedback vertex set, a subset of the deduplicated input.
    pub fvs: Vec<Point>,
    /// Distinct input points.
    pub vertices: usize,
    pub edges: usize,
    /// Best size of the seeded population.
    pub initial_best: usize,
    /// Best size after each generation.
    pub history: Vec<usize>,
}

impl FvsResult {
    #[inline]
    pub fn size(&self) -> usize {
        self.fvs.len()
    }
}

/// Stateful solver; the random stream carries over between solves.
pub struct Solver {
    cfg: SolverCfg,
    rng: StdRng,
}

impl Solver {
    pub fn new(cfg: SolverCfg) -> Result<Self, CfgError> {
        cfg.validate()?;
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { cfg, rng })
    }

    pub fn cfg(&self) -> &SolverCfg {
        &self.cfg
    }

    /// Compute a small valid feedback vertex set of the disk graph on `points`.
    pub fn solve(&mut self, points: &[Point], threshold: f64) -> FvsResult {
        let graph = DiskGraph::new(points, threshold);
        let (best, initial_best, history) = self.solve_graph(&graph);
        FvsResult {
            fvs: best.points(&graph),
            vertices: graph.len(),
            edges: graph.edge_count(),
            initial_best,
            history,
        }
    }

    /// Graph-level solve: `(best, initial best size, best size per generation)`.
    pub fn solve_graph(&mut self, graph: &DiskGraph) -> (Candidate, usize, Vec<usize>) {
        let SolverCfg {
            population_size,
            generations,
            top_k,
            ..
        } = self.cfg;
        let mut population = Population::seed(graph, population_size, top_k, &mut self.rng);
        let initial_best = population.best().len();
        info!(size = population.len(), best = initial_best, "initial_population");

        let mut history = Vec::with_capacity(generations);
        for generation in 1..=generations {
            let best = population.step(graph, top_k, &mut self.rng);
            info!(generation, best, "generation");
            history.push(best);
        }

        let best = population.into_best();
        info!(size = best.len(), "best_solution");
        (best, initial_best, history)
    }
}

/// Solve with default settings and an entropy-seeded random source.
pub fn calcul_fvs(points: &[Point], threshold: f64) -> Vec<Point> {
    let mut solver = Solver {
        cfg: SolverCfg::default(),
        rng: StdRng::from_entropy(),
    };
    solver.solve(points, threshold).fvs
}
