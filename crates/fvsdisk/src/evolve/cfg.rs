//! Solver configuration.

use std::fmt;

use crate::greedy::DEFAULT_TOP_K;

/// Knobs of the population search.
///
/// With `seed: Some(_)` the whole pipeline is deterministic: one `StdRng`
/// feeds every greedy construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverCfg {
    /// Members kept after every generation.
    pub population_size: usize,
    /// Mutate/inject/select rounds.
    pub generations: usize,
    /// High-degree pool size for greedy picks.
    pub top_k: usize,
    pub seed: Option<u64>,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            population_size: 5,
            generations: 2,
            top_k: DEFAULT_TOP_K,
            seed: None,
        }
    }
}

impl SolverCfg {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CfgError> {
        if self.population_size == 0 {
            return Err(CfgError::invalid("population_size must be >= 1"));
        }
        if self.top_k == 0 {
            return Err(CfgError::invalid("top_k must be >= 1"));
        }
        Ok(())
    }
}

/// Rejected solver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CfgError {
    InvalidParams { reason: String },
}

impl CfgError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid solver config: {reason}"),
        }
    }
}

impl std::error::Error for CfgError {}
