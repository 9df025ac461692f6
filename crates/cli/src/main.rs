use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fvsdisk::sample::{draw_points, ReplayToken, SampleCfg};
use fvsdisk::{PointSet, Solver, SolverCfg};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod check;
mod io;
mod provenance;

use io::SolveRecord;
use provenance::Provenance;

#[derive(Parser)]
#[command(name = "fvs")]
#[command(about = "Feedback vertex sets of unit-disk graphs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve an instance and write the FVS as JSON
    Solve {
        /// CSV or Parquet file with columns x,y
        #[arg(long)]
        input: PathBuf,
        /// Edge iff distance < threshold
        #[arg(long)]
        threshold: f64,
        #[command(flatten)]
        solver: SolverArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Draw a random instance and write it as CSV
    Sample {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Floor coordinates to integers
        #[arg(long)]
        integer: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Re-check a stored solve result against its instance
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        fvs: PathBuf,
        /// Defaults to the threshold stored in the result
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct SolverArgs {
    #[arg(long, default_value_t = 5)]
    population: usize,
    #[arg(long, default_value_t = 2)]
    generations: usize,
    #[arg(long, default_value_t = 5)]
    top_k: usize,
    /// Omit for an entropy-seeded run
    #[arg(long)]
    seed: Option<u64>,
}

impl From<&SolverArgs> for SolverCfg {
    fn from(a: &SolverArgs) -> Self {
        SolverCfg {
            population_size: a.population,
            generations: a.generations,
            top_k: a.top_k,
            seed: a.seed,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            threshold,
            solver,
            out,
        } => solve(input, threshold, &solver, out),
        Action::Sample {
            count,
            width,
            height,
            seed,
            index,
            integer,
            out,
        } => sample(
            SampleCfg {
                count,
                width,
                height,
                integer,
            },
            ReplayToken { seed, index },
            out,
        ),
        Action::Check {
            input,
            fvs,
            threshold,
        } => check(input, fvs, threshold),
        Action::Report => report(),
    }
}

fn solve(input: PathBuf, threshold: f64, args: &SolverArgs, out: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), threshold, out = %out.display(), "solve");
    let points = io::read_points(&input)?;
    let cfg = SolverCfg::from(args);
    let mut solver = Solver::new(cfg)?;
    let res = solver.solve(&points, threshold);
    tracing::info!(
        vertices = res.vertices,
        edges = res.edges,
        size = res.size(),
        "solved"
    );

    io::write_record(&out, &SolveRecord::new(&res, threshold, cfg.seed))?;
    let params = serde_json::json!({
        "input": input,
        "threshold": threshold,
        "population": cfg.population_size,
        "generations": cfg.generations,
        "top_k": cfg.top_k,
        "seed": cfg.seed,
    });
    let summary = serde_json::json!({
        "vertices": res.vertices,
        "edges": res.edges,
        "size": res.size(),
        "initial_best": res.initial_best,
        "history": res.history,
    });
    Provenance::new("solve", params, summary).write_for(&out)?;
    Ok(())
}

fn sample(cfg: SampleCfg, tok: ReplayToken, out: PathBuf) -> Result<()> {
    tracing::info!(count = cfg.count, seed = tok.seed, index = tok.index, "sample");
    let points = draw_points(cfg, tok)?;
    io::write_points(&out, &points)?;
    let params = serde_json::json!({
        "count": cfg.count,
        "width": cfg.width,
        "height": cfg.height,
        "integer": cfg.integer,
        "seed": tok.seed,
        "index": tok.index,
    });
    let summary = serde_json::json!({
        "points": points.len(),
        "distinct": PointSet::from(&points[..]).len(),
    });
    Provenance::new("sample", params, summary).write_for(&out)?;
    Ok(())
}

fn check(input: PathBuf, fvs: PathBuf, threshold: Option<f64>) -> Result<()> {
    let report = check::check_files(&input, &fvs, threshold)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    check::ensure_valid(&report, &fvs)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "fvsdisk_version": fvsdisk::VERSION,
        "defaults": {
            "population": SolverCfg::default().population_size,
            "generations": SolverCfg::default().generations,
            "top_k": SolverCfg::default().top_k,
        },
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&obj).context("serializing report")?
    );
    Ok(())
}
