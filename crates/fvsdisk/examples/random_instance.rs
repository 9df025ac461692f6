//! Timing probe: one sampled instance, default solver settings.
//!
//! Prints the instance shape, the per-generation best sizes and wall time
//! so the cost of the validator-heavy local search can be eyeballed on
//! realistic sizes (pixel coordinates, threshold 55).

use std::time::Instant;

use fvsdisk::prelude::*;

fn main() {
    let cfg = SampleCfg {
        count: 120,
        width: 800.0,
        height: 600.0,
        integer: true,
    };
    let points = draw_points(cfg, ReplayToken { seed: 2024, index: 0 }).expect("valid sample cfg");
    let threshold = 55.0;

    let mut solver = Solver::new(SolverCfg::with_seed(7)).expect("valid solver cfg");
    let start = Instant::now();
    let res = solver.solve(&points, threshold);
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    assert!(is_valid_points(&points, &res.fvs, threshold));
    println!(
        "vertices={} edges={} threshold={threshold}",
        res.vertices, res.edges
    );
    println!(
        "initial_best={} history={:?} fvs_size={}",
        res.initial_best,
        res.history,
        res.size()
    );
    println!("solve_time_ms={elapsed:.3}");
}
