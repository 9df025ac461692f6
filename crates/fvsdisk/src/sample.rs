//! Random point instances (uniform in a box, replayable).
//!
//! Model
//! - `count` points drawn uniformly in `[0, width) x [0, height)`, optionally
//!   floored to integer coordinates (pixel-style instances).
//! - A replay token `(seed, index)` is the full RNG key, so the `index`-th
//!   instance of a stream can be regenerated alone.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Instance sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    /// Floor coordinates to integers. Duplicates may then occur and collapse.
    pub integer: bool,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 100,
            width: 800.0,
            height: 600.0,
            integer: true,
        }
    }
}

impl SampleCfg {
    fn validate(&self) -> Result<(), SampleError> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(SampleError::invalid("box extents must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SampleError::invalid("box extents must be > 0"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// Seed bytes: `seed` then `index`, little endian, rest zero.
    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sample params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Draw one instance. The raw list is returned; duplicates are not removed.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Result<Vec<Point>, SampleError> {
    cfg.validate()?;
    let mut rng = tok.rng();
    let pts = (0..cfg.count)
        .map(|_| {
            let x = rng.gen_range(0.0..cfg.width);
            let y = rng.gen_range(0.0..cfg.height);
            if cfg.integer {
                Point::new(x.floor(), y.floor())
            } else {
                Point::new(x, y)
            }
        })
        .collect();
    Ok(pts)
}
