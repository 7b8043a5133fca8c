//! The `Sweep` runner and one-shot estimators.

use perc_core::{FlowEngine, Grid, PercError, SweepConfig, TrialRng, make_matrix, percolates};
use rand::Rng;
use tracing::{debug, info, trace};

use crate::builder::validate;
use crate::{CurvePoint, NoopObserver, PercolationCurve, SweepBuilder, SweepObserver, SweepResult};

/// Monte Carlo sweep over vacancy probability.
///
/// Create via [`SweepBuilder`].
pub struct Sweep {
    pub(crate) config: SweepConfig,
    pub(crate) engine: FlowEngine,
}

impl Sweep {
    /// Validated configuration (side, trials, points, seed).
    #[inline]
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run every trial of every sweep point and return the estimated curve.
    ///
    /// Calls observer hooks at trial and point boundaries.  Use
    /// [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SweepObserver>(&mut self, observer: &mut O) -> SweepResult<PercolationCurve> {
        validate(&self.config)?;
        let SweepConfig { side, trials, points, seed } = self.config;
        info!(side, trials, points, seed, "starting percolation sweep");
        observer.on_sweep_start(&self.config);

        let mut flow = Grid::new(side)?;
        let mut curve = PercolationCurve { points: Vec::with_capacity(points) };

        for (index, vacancy) in self.config.vacancies().into_iter().enumerate() {
            let mut successes = 0u64;
            for trial in 0..trials {
                let mut rng = TrialRng::new(seed, index, trial);
                let percolated =
                    run_trial(&mut self.engine, side, vacancy, rng.inner(), &mut flow)?;
                trace!(point = index, trial, percolated, "trial done");
                observer.on_trial_end(index, trial, percolated);
                successes += percolated as u64;
            }

            let point = CurvePoint::new(vacancy, successes, trials);
            debug!(
                point = index,
                vacancy,
                successes,
                estimate = point.percolation,
                "sweep point done"
            );
            observer.on_point_end(index, &point);
            curve.points.push(point);
        }

        observer.on_sweep_end(&curve);
        info!(points = curve.len(), "percolation sweep finished");
        Ok(curve)
    }

    /// One trial at `vacancy`: generate a grid from `rng`, compute its flow,
    /// and report whether it percolates.
    pub fn trial<R: Rng + ?Sized>(&mut self, vacancy: f64, rng: &mut R) -> SweepResult<bool> {
        let side = self.config.side;
        let mut flow = Grid::new(side)?;
        run_trial(&mut self.engine, side, vacancy, rng, &mut flow)
    }
}

fn run_trial<R: Rng + ?Sized>(
    engine:  &mut FlowEngine,
    side:    usize,
    vacancy: f64,
    rng:     &mut R,
    flow:    &mut Grid,
) -> SweepResult<bool> {
    let sites = make_matrix(side, vacancy, rng)?;
    engine.flow_into(&sites, flow)?;
    Ok(percolates(flow))
}

/// Estimate the percolation probability of `side × side` grids at a single
/// `vacancy`, drawing all grids from `rng`.
pub fn estimate<R: Rng + ?Sized>(
    side:    usize,
    vacancy: f64,
    trials:  u64,
    rng:     &mut R,
) -> SweepResult<f64> {
    if trials == 0 {
        return Err(PercError::InvalidTrials.into());
    }
    let mut flow = Grid::new(side)?;
    let mut engine = FlowEngine::new();
    let mut successes = 0u64;
    for _ in 0..trials {
        successes += run_trial(&mut engine, side, vacancy, rng, &mut flow)? as u64;
    }
    Ok(successes as f64 / trials as f64)
}

/// Default 25-point sweep for `side × side` grids with `trials` trials per
/// point, seeded with `seed`.
pub fn make_graph(side: usize, trials: u64, seed: u64) -> SweepResult<PercolationCurve> {
    SweepBuilder::new(side, trials).seed(seed).build()?.run(&mut NoopObserver)
}
