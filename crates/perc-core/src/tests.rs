//! Unit tests for perc-core primitives.

/// Brute-force directed reachability: iterate to a fixed point where a site
/// is full iff it is vacant and is in row 0 or has a full neighbour above,
/// left or right.
#[cfg(test)]
fn reference_flow(sites: &crate::Grid) -> crate::Grid {
    let n = sites.side();
    let mut full = crate::Grid::new(n).unwrap();
    loop {
        let mut changed = false;
        for i in 0..n {
            for j in 0..n {
                if !sites.get(i, j) || full.get(i, j) {
                    continue;
                }
                let reached = i == 0
                    || full.get(i - 1, j)
                    || (j > 0 && full.get(i, j - 1))
                    || (j + 1 < n && full.get(i, j + 1));
                if reached {
                    full.set(i, j, true);
                    changed = true;
                }
            }
        }
        if !changed {
            return full;
        }
    }
}

#[cfg(test)]
mod grid {
    use crate::{Grid, PercError};

    #[test]
    fn new_is_all_false() {
        let g = Grid::new(4).unwrap();
        assert_eq!(g.side(), 4);
        assert_eq!(g.len(), 16);
        assert_eq!(g.count_set(), 0);
    }

    #[test]
    fn zero_side_rejected() {
        assert_eq!(
            Grid::new(0).unwrap_err(),
            PercError::InvalidDimension { side: 0, cells: 0 }
        );
    }

    #[test]
    fn from_values_checks_count() {
        let err = Grid::from_values(3, &[1, 0, 1, 0]).unwrap_err();
        assert_eq!(err, PercError::InvalidDimension { side: 3, cells: 4 });
    }

    #[test]
    fn from_values_rejects_non_binary() {
        let err = Grid::from_values(2, &[1, 0, 2, 1]).unwrap_err();
        assert_eq!(err, PercError::InvalidCell { index: 2, value: 2 });
    }

    #[test]
    fn from_rows_rejects_non_square() {
        let err = Grid::from_rows(&[vec![1, 1, 1], vec![1, 1, 1]]).unwrap_err();
        assert_eq!(
            err,
            PercError::ShapeMismatch { expected: 2, got: 3, what: "row length" }
        );
    }

    #[test]
    fn row_major_layout() {
        let g = Grid::from_rows(&[[1, 0], [0, 1]]).unwrap();
        assert!(g.get(0, 0));
        assert!(!g.get(0, 1));
        assert!(!g[(1, 0)]);
        assert!(g[(1, 1)]);
        assert_eq!(g.last_row(), &[false, true]);
        assert_eq!(g.to_values(), vec![1, 0, 0, 1]);
    }

    #[test]
    fn display_one_row_per_line() {
        let g = Grid::from_rows(&[[1, 0], [0, 1]]).unwrap();
        assert_eq!(g.to_string(), "1 0\n0 1\n");
    }

    #[test]
    fn shape_check() {
        let a = Grid::new(3).unwrap();
        let b = Grid::new(4).unwrap();
        assert!(a.ensure_same_shape(&a.clone(), "flow grid side").is_ok());
        assert_eq!(
            a.ensure_same_shape(&b, "flow grid side").unwrap_err(),
            PercError::ShapeMismatch { expected: 3, got: 4, what: "flow grid side" }
        );
    }
}

#[cfg(test)]
mod generate {
    use crate::{PercError, SweepRng, make_matrix};

    #[test]
    fn dimensions_and_binary_cells() {
        let mut rng = SweepRng::new(7);
        for n in 1..10 {
            let g = make_matrix(n, 0.5, rng.inner()).unwrap();
            assert_eq!(g.side(), n);
            assert_eq!(g.to_values().len(), n * n);
            assert!(g.to_values().iter().all(|&v| v <= 1));
        }
    }

    #[test]
    fn degenerate_probabilities() {
        let mut rng = SweepRng::new(1);
        assert_eq!(make_matrix(8, 0.0, rng.inner()).unwrap().count_set(), 0);
        assert_eq!(make_matrix(8, 1.0, rng.inner()).unwrap().count_set(), 64);
    }

    #[test]
    fn probability_out_of_range() {
        let mut rng = SweepRng::new(1);
        assert_eq!(
            make_matrix(3, 1.5, rng.inner()).unwrap_err(),
            PercError::InvalidProbability(1.5)
        );
        assert!(make_matrix(3, -0.1, rng.inner()).is_err());
        assert!(make_matrix(3, f64::NAN, rng.inner()).is_err());
    }

    #[test]
    fn zero_side_rejected() {
        let mut rng = SweepRng::new(1);
        assert!(matches!(
            make_matrix(0, 0.5, rng.inner()),
            Err(PercError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn vacancy_fraction_tracks_probability() {
        let mut rng = SweepRng::new(2024);
        let mut last = -1.0;
        for p in [0.1, 0.3, 0.5, 0.7, 0.9] {
            let frac = make_matrix(200, p, rng.inner()).unwrap().vacancy_fraction();
            assert!((frac - p).abs() < 0.02, "p={p} frac={frac}");
            assert!(frac > last);
            last = frac;
        }
    }

    #[test]
    fn same_seed_same_grid() {
        let a = make_matrix(16, 0.6, SweepRng::new(99).inner()).unwrap();
        let b = make_matrix(16, 0.6, SweepRng::new(99).inner()).unwrap();
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod flow {
    use super::reference_flow;
    use crate::{FlowEngine, Grid, PercError, SweepRng, dir_flow, make_matrix};

    #[test]
    fn all_vacant_fills_everything() {
        let sites = Grid::filled(3, true).unwrap();
        assert_eq!(dir_flow(&sites), sites);
    }

    #[test]
    fn blocked_top_row_gives_empty_flow() {
        let sites = Grid::from_rows(&[[0, 0, 0], [1, 1, 1], [1, 1, 1]]).unwrap();
        assert_eq!(dir_flow(&sites).count_set(), 0);
    }

    #[test]
    fn spreads_sideways_then_down() {
        let sites = Grid::from_rows(&[[1, 0, 0], [1, 1, 1], [0, 0, 1]]).unwrap();
        let flow = dir_flow(&sites);
        assert_eq!(flow.to_values(), vec![1, 0, 0, 1, 1, 1, 0, 0, 1]);
    }

    #[test]
    fn never_moves_up() {
        // The only route to the bottom climbs from (2,2) to (1,2).
        let sites = Grid::from_rows(&[
            [1, 0, 0, 0, 0],
            [1, 0, 1, 1, 1],
            [1, 1, 1, 0, 1],
            [0, 0, 0, 0, 1],
            [0, 0, 0, 0, 1],
        ])
        .unwrap();
        let flow = dir_flow(&sites);
        assert!(!flow.get(1, 2));
        assert!(!flow.get(1, 4));
        assert!(flow.get(2, 2));
        assert_eq!(flow.count_set(), 5);
        assert_eq!(flow, reference_flow(&sites));
    }

    #[test]
    fn matches_reference_and_stays_inside_sites() {
        let mut engine = FlowEngine::new();
        for seed in 0..60u64 {
            let mut rng = SweepRng::new(seed);
            let n = 1 + (seed as usize % 12);
            let p = (seed % 10) as f64 / 9.0;
            let sites = make_matrix(n, p, rng.inner()).unwrap();
            let flow = engine.flow(&sites);
            for (&full, &vacant) in flow.cells().iter().zip(sites.cells()) {
                assert!(!full || vacant);
            }
            assert_eq!(flow, reference_flow(&sites), "seed {seed}");
        }
    }

    #[test]
    fn idempotent() {
        let sites = make_matrix(20, 0.6, SweepRng::new(5).inner()).unwrap();
        let mut engine = FlowEngine::new();
        assert_eq!(engine.flow(&sites), engine.flow(&sites));
        assert_eq!(dir_flow(&sites), dir_flow(&sites));
    }

    #[test]
    fn flow_into_overwrites_buffer() {
        let sites = Grid::from_rows(&[[1, 0], [0, 0]]).unwrap();
        let mut full = Grid::filled(2, true).unwrap();
        FlowEngine::new().flow_into(&sites, &mut full).unwrap();
        assert_eq!(full.to_values(), vec![1, 0, 0, 0]);
    }

    #[test]
    fn flow_into_rejects_wrong_side() {
        let sites = Grid::new(3).unwrap();
        let mut full = Grid::new(2).unwrap();
        assert!(matches!(
            FlowEngine::new().flow_into(&sites, &mut full),
            Err(PercError::ShapeMismatch { expected: 3, got: 2, .. })
        ));
    }

    #[test]
    fn large_serpentine_does_not_overflow() {
        // Snake path: every other row fully open, joined at alternating ends.
        let n = 401;
        let mut sites = Grid::new(n).unwrap();
        for i in 0..n {
            for j in 0..n {
                let open = i % 2 == 0 || (i % 4 == 1 && j == n - 1) || (i % 4 == 3 && j == 0);
                sites.set(i, j, open);
            }
        }
        let flow = dir_flow(&sites);
        assert_eq!(flow, sites);
        assert!(crate::percolates(&flow));
    }
}

#[cfg(test)]
mod check {
    use crate::{Grid, dir_flow, percolates};

    #[test]
    fn all_vacant_3x3_percolates() {
        let sites = Grid::filled(3, true).unwrap();
        assert!(percolates(&dir_flow(&sites)));
    }

    #[test]
    fn blocked_middle_row_does_not_percolate() {
        let sites = Grid::from_rows(&[[1, 1, 1], [0, 0, 0], [1, 1, 1]]).unwrap();
        assert!(!percolates(&dir_flow(&sites)));
    }

    #[test]
    fn single_vacant_site_percolates() {
        let sites = Grid::from_rows(&[[1]]).unwrap();
        assert!(percolates(&dir_flow(&sites)));
    }

    #[test]
    fn single_blocked_site_does_not_percolate() {
        let sites = Grid::from_rows(&[[0]]).unwrap();
        assert!(!percolates(&dir_flow(&sites)));
    }
}

#[cfg(test)]
mod overlay {
    use crate::{Grid, Overlay, PercError, SiteState, dir_flow};

    #[test]
    fn three_valued_encoding() {
        let sites = Grid::from_rows(&[[1, 0], [0, 1]]).unwrap();
        let overlay = Overlay::new(&sites, &dir_flow(&sites)).unwrap();
        assert_eq!(overlay.to_values(), vec![2, 0, 0, 1]);
        assert_eq!(overlay.get(0, 0), SiteState::Full);
        assert_eq!(overlay.count(SiteState::Blocked), 2);
    }

    #[test]
    fn rejects_side_mismatch() {
        let sites = Grid::new(2).unwrap();
        let flow = Grid::new(3).unwrap();
        assert!(matches!(
            Overlay::new(&sites, &flow),
            Err(PercError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn rejects_full_blocked_site() {
        let sites = Grid::from_rows(&[[1, 0], [1, 1]]).unwrap();
        let flow = Grid::from_rows(&[[1, 1], [0, 0]]).unwrap();
        assert_eq!(
            Overlay::new(&sites, &flow).unwrap_err(),
            PercError::FullBlockedSite { row: 0, col: 1 }
        );
    }
}

#[cfg(test)]
mod config {
    use crate::SweepConfig;

    #[test]
    fn default_sweep_has_25_inclusive_points() {
        let cfg = SweepConfig::new(10, 500);
        let v = cfg.vacancies();
        assert_eq!(v.len(), 25);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[24], 1.0);
        assert!((v[1] - 1.0 / 24.0).abs() < 1e-12);
        assert!(v.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn vacancy_is_none_past_last_point() {
        let cfg = SweepConfig::new(10, 500);
        assert_eq!(cfg.vacancy(0), Some(0.0));
        assert_eq!(cfg.vacancy(12), Some(0.5));
        assert_eq!(cfg.vacancy(24), Some(1.0));
        assert_eq!(cfg.vacancy(25), None);
        assert_eq!(cfg.vacancy(usize::MAX), None);
    }

    #[test]
    fn empty_config_has_no_vacancies() {
        let cfg = SweepConfig { points: 0, ..SweepConfig::new(3, 1) };
        assert_eq!(cfg.vacancy(0), None);
        assert!(cfg.vacancies().is_empty());
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::TrialRng;

    #[test]
    fn trial_rngs_are_reproducible_and_distinct() {
        let a: u64 = TrialRng::new(42, 3, 7).inner().r#gen();
        let b: u64 = TrialRng::new(42, 3, 7).inner().r#gen();
        let c: u64 = TrialRng::new(42, 3, 8).inner().r#gen();
        let d: u64 = TrialRng::new(42, 4, 7).inner().r#gen();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
