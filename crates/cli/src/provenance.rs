//! `<stem>.provenance.json` sidecars next to every artifact the CLI writes.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Build-time commit (`GIT_COMMIT`), or "unknown".
pub fn code_rev() -> &'static str {
    match option_env!("GIT_COMMIT") {
        Some(rev) if !rev.is_empty() => rev,
        _ => "unknown",
    }
}

/// What produced an artifact and what it contains.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub command: &'static str,
    pub code_rev: &'static str,
    pub fvsdisk_version: &'static str,
    /// Inputs as given on the command line.
    pub params: Value,
    /// Outcome digest, e.g. instance shape and FVS size per generation.
    pub summary: Value,
}

impl Provenance {
    pub fn new(command: &'static str, params: Value, summary: Value) -> Self {
        Self {
            command,
            code_rev: code_rev(),
            fvsdisk_version: fvsdisk::VERSION,
            params,
            summary,
        }
    }

    /// Write the sidecar for `artifact`; returns its path.
    pub fn write_for(&self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        let mut doc = serde_json::to_value(self)?;
        doc["artifact"] = Value::from(artifact.to_string_lossy().into_owned());
        std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

// fvs.json -> fvs.provenance.json, out -> out.provenance.json
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}
