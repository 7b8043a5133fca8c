//! dirperc — directed percolation on a square lattice.
//!
//! 1. Generates one random site-vacancy grid, saves it as a text file and
//!    loads it back.
//! 2. Computes its directed flow and reports whether it percolates.
//! 3. Renders the sites + flow overlay to `overlay.svg`.
//! 4. Runs the Monte Carlo sweep and writes `curve.csv`, `curve.svg` and
//!    `curve.json`.
//!
//! Set `RUST_LOG=debug` to see per-point estimates.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use perc_core::{Overlay, SweepConfig, SweepRng, dir_flow, make_matrix, percolates};
use perc_output::{
    CsvSweepWriter, SweepOutputObserver, SweepWriter, read_grid_path, write_curve_svg,
    write_grid_path, write_overlay_svg,
};
use perc_sim::{CurvePoint, PercolationCurve, SweepBuilder, SweepObserver};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "dirperc", about = "Directed percolation on a square lattice")]
struct Args {
    /// Side length of the single demonstration grid.
    #[arg(long, default_value_t = 30)]
    side: usize,

    /// Vacancy probability of the demonstration grid.
    #[arg(long, default_value_t = 0.55)]
    vacancy: f64,

    /// Side length of the grids in the sweep.
    #[arg(long)]
    sweep_side: Option<usize>,

    /// Trials per sweep point.
    #[arg(long)]
    trials: Option<u64>,

    /// Number of sweep points over [0, 1].
    #[arg(long)]
    points: Option<usize>,

    /// Master RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON sweep config; the flags above override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for sites.txt, overlay.svg and the curve.{csv,svg,json} files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

impl Args {
    fn sweep_config(&self) -> Result<SweepConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => SweepConfig::new(10, 500),
        };
        if let Some(side) = self.sweep_side {
            config.side = side;
        }
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(points) = self.points {
            config.points = points;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

// ── Observer wrapper to log progress ─────────────────────────────────────────

struct ProgressObserver<W: SweepWriter> {
    inner:  SweepOutputObserver<W>,
    trials: u64,
}

impl<W: SweepWriter> ProgressObserver<W> {
    fn new(inner: SweepOutputObserver<W>) -> Self {
        Self { inner, trials: 0 }
    }
}

impl<W: SweepWriter> SweepObserver for ProgressObserver<W> {
    fn on_trial_end(&mut self, _point: usize, _trial: u64, _percolated: bool) {
        self.trials += 1;
    }

    fn on_point_end(&mut self, index: usize, point: &CurvePoint) {
        info!(
            "point {index:>2}: vacancy {:.3} -> percolation {:.3} ({}/{})",
            point.vacancy, point.percolation, point.successes, point.trials
        );
        self.inner.on_point_end(index, point);
    }

    fn on_sweep_end(&mut self, curve: &PercolationCurve) {
        self.inner.on_sweep_end(curve);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.sweep_config()?;
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    // 1. One grid, through the text format and back.
    let mut rng = SweepRng::new(config.seed);
    let generated = make_matrix(args.side, args.vacancy, rng.inner())?;
    let sites_path = args.out_dir.join("sites.txt");
    write_grid_path(&sites_path, &generated)?;
    let sites = read_grid_path(&sites_path)?;

    // 2. Flow and verdict.
    let flow = dir_flow(&sites);
    if percolates(&flow) {
        println!("percolates");
    } else {
        println!("does not percolate");
    }

    // 3. Overlay image.
    let overlay = Overlay::new(&sites, &flow)?;
    write_overlay_svg(&args.out_dir.join("overlay.svg"), &overlay)?;
    info!(
        side = sites.side(),
        vacancy = args.vacancy,
        full = flow.count_set(),
        "wrote overlay.svg (blue = blocked, green = vacant, red = full)"
    );

    // 4. Monte Carlo sweep.
    let writer = CsvSweepWriter::new(&args.out_dir.join("curve.csv"))?;
    let mut observer = ProgressObserver::new(SweepOutputObserver::new(writer));
    let mut sweep = SweepBuilder::from_config(config).build()?;

    let start = Instant::now();
    let curve = sweep.run(&mut observer)?;
    if let Some(e) = observer.inner.take_error() {
        return Err(e).context("writing curve.csv");
    }
    info!(
        trials = observer.trials,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "sweep complete"
    );

    write_curve_svg(&args.out_dir.join("curve.svg"), &curve)?;
    let json = serde_json::to_string_pretty(&curve).context("serializing curve")?;
    fs::write(args.out_dir.join("curve.json"), json).context("writing curve.json")?;
    info!("wrote curve.csv, curve.svg and curve.json to {}", args.out_dir.display());
    Ok(())
}
