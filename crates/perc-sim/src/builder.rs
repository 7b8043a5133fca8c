//! Fluent builder for constructing a [`Sweep`].

use perc_core::{FlowEngine, PercError, SweepConfig};

use crate::{Sweep, SweepError, SweepResult};

/// Fluent builder for [`Sweep`].
///
/// # Required inputs
///
/// - `side` — lattice side length (≥ 1)
/// - `trials` — trials per sweep point (≥ 1)
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default |
/// |---------------|---------|
/// | `.points(k)`  | 25      |
/// | `.seed(s)`    | 42      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sweep = SweepBuilder::new(10, 500).points(11).seed(7).build()?;
/// let curve = sweep.run(&mut NoopObserver)?;
/// ```
pub struct SweepBuilder {
    config: SweepConfig,
}

impl SweepBuilder {
    pub fn new(side: usize, trials: u64) -> Self {
        Self { config: SweepConfig::new(side, trials) }
    }

    /// Start from a complete config, e.g. one loaded from JSON.
    pub fn from_config(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Number of evenly spaced vacancy probabilities in `[0, 1]`.
    pub fn points(mut self, points: usize) -> Self {
        self.config.points = points;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sweep`].
    pub fn build(self) -> SweepResult<Sweep> {
        validate(&self.config)?;
        Ok(Sweep { config: self.config, engine: FlowEngine::new() })
    }
}

/// Check that `config` describes a runnable sweep: side and trials at least
/// 1, and at least 2 points so the sweep spans `[0, 1]`.
pub fn validate(config: &SweepConfig) -> SweepResult<()> {
    if config.side == 0 {
        return Err(PercError::InvalidDimension { side: 0, cells: 0 }.into());
    }
    if config.trials == 0 {
        return Err(PercError::InvalidTrials.into());
    }
    if config.points < 2 {
        return Err(SweepError::Config(format!(
            "a sweep needs at least 2 points to span [0, 1], got {}",
            config.points
        )));
    }
    Ok(())
}
