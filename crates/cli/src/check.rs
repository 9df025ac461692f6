//! Re-validation of a stored solve result against its instance.

use anyhow::{bail, Result};
use fvsdisk::graph::{Candidate, DiskGraph};
use fvsdisk::validate::find_cycle_witness;
use fvsdisk::Point;
use serde::Serialize;
use std::path::Path;

use crate::io::{self, SolveRecord};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckReport {
    pub valid: bool,
    pub threshold: f64,
    /// Distinct FVS points that are vertices of the instance.
    pub size: usize,
    /// FVS points that are not in the instance at all.
    pub foreign_points: usize,
    /// Edge that closed a cycle in the remainder, if any.
    pub cycle_edge: Option<[[f64; 2]; 2]>,
}

/// `threshold` overrides the one stored in `record`.
pub fn check_record(
    points: &[Point],
    record: &SolveRecord,
    threshold: Option<f64>,
) -> CheckReport {
    let threshold = threshold.unwrap_or(record.threshold);
    let graph = DiskGraph::new(points, threshold);
    let fvs = record.points();
    let foreign_points = fvs.iter().filter(|p| graph.vertex_of(p).is_none()).count();
    let candidate = Candidate::from_points(&graph, &fvs);
    let cycle_edge = find_cycle_witness(&graph, &candidate).map(|(a, b)| {
        let (p, q) = (graph.point(a), graph.point(b));
        [[p.x, p.y], [q.x, q.y]]
    });
    CheckReport {
        valid: cycle_edge.is_none() && foreign_points == 0,
        threshold,
        size: candidate.len(),
        foreign_points,
        cycle_edge,
    }
}

pub fn check_files(input: &Path, fvs: &Path, threshold: Option<f64>) -> Result<CheckReport> {
    let points = io::read_points(input)?;
    let record = io::read_record(fvs)?;
    Ok(check_record(&points, &record, threshold))
}

/// Turn a failed report into an error naming the reason.
pub fn ensure_valid(report: &CheckReport, fvs: &Path) -> Result<()> {
    if let Some([p, q]) = report.cycle_edge {
        bail!(
            "{} is not a feedback vertex set: cycle through {p:?}-{q:?}",
            fvs.display()
        );
    }
    if report.foreign_points > 0 {
        bail!(
            "{} has {} points outside the instance",
            fvs.display(),
            report.foreign_points
        );
    }
    Ok(())
}
