//! Point tables in and out (polars), solve records (serde_json).

use anyhow::{bail, Context, Result};
use fvsdisk::{FvsResult, Point};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Read columns `x`, `y` from a CSV (header required) or Parquet file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
    } else {
        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    tracing::info!(rows = df.height(), path = %path.display(), "points_loaded");

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Point::new(x, y)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        }
    }
    Ok(points)
}

fn is_parquet(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("parquet"))
}

/// Write points as a two-column CSV with header `x,y`.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent(path)?;
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    Ok(())
}

/// Serialized outcome of `fvs solve`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolveRecord {
    pub threshold: f64,
    pub seed: Option<u64>,
    pub vertices: usize,
    pub edges: usize,
    pub size: usize,
    pub initial_best: usize,
    pub history: Vec<usize>,
    pub fvs: Vec<[f64; 2]>,
}

impl SolveRecord {
    pub fn new(res: &FvsResult, threshold: f64, seed: Option<u64>) -> Self {
        Self {
            threshold,
            seed,
            vertices: res.vertices,
            edges: res.edges,
            size: res.size(),
            initial_best: res.initial_best,
            history: res.history.clone(),
            fvs: res.fvs.iter().map(|p| [p.x, p.y]).collect(),
        }
    }

    pub fn points(&self) -> Vec<Point> {
        self.fvs.iter().map(|&[x, y]| Point::new(x, y)).collect()
    }
}

pub fn write_record(path: &Path, record: &SolveRecord) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn read_record(path: &Path) -> Result<SolveRecord> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
