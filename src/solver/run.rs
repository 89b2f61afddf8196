use crate::config::*;
use crate::domain::*;
use crate::error::{Error, Result};
use crate::init;
use crate::monitor::*;
use crate::solver::*;
use std::time::{Duration, Instant};

/// Outcome of one run, the final grid is handed off, not copied.
#[derive(Debug)]
pub struct ResultReport {
    pub grid: Grid,
    pub error: f64,
    pub iterations: usize,
    pub elapsed: Duration,
    pub termination: Termination,
}

impl ResultReport {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Orchestrates one solve: validates the configuration,
/// builds the grids, drives the engine and times the whole thing.
/// Performs no I/O.
pub struct SolverRun<'a> {
    config: Configuration,
    backend: Option<&'a dyn ReductionBackend>,
}

impl<'a> SolverRun<'a> {
    pub fn new(config: Configuration) -> Self {
        SolverRun {
            config,
            backend: None,
        }
    }

    /// Borrow a reduction handle for `Strategy::Delegated`.
    pub fn with_backend(mut self, backend: &'a dyn ReductionBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Run with the monitor `config.strategy` selects.
    pub fn run(&self) -> Result<ResultReport> {
        self.config.validate()?;
        match self.config.strategy {
            Strategy::Direct => {
                self.run_with_monitor(DirectMonitor::new(self.config.chunk_size))
            }
            Strategy::Delegated => {
                let backend = self.backend.ok_or_else(|| {
                    Error::BackendUnavailable(
                        "no reduction handle supplied".to_string(),
                    )
                })?;
                let monitor = DelegatedMonitor::new(backend)?;
                self.run_with_monitor(monitor)
            }
        }
    }

    /// Run with a caller provided monitor, ignoring `config.strategy`.
    pub fn run_with_monitor<M: ConvergenceMonitor>(
        &self,
        monitor: M,
    ) -> Result<ResultReport> {
        let config = &self.config;
        config.validate()?;
        tracing::info!(
            size = config.size,
            accuracy = config.accuracy,
            max_iterations = config.max_iterations,
            check_period = config.check_period,
            init_mode = ?config.init_mode,
            strategy = ?config.strategy,
            "starting relaxation"
        );

        let start = Instant::now();
        let grids = init::boundary_conditioned(
            config.size,
            &config.corners,
            config.init_mode,
            config.chunk_size,
        )?;

        let mut engine = RelaxationEngine::new(config, grids, monitor);
        let termination = engine.run();
        let error = engine.final_error();
        let iterations = engine.state().iteration;
        let (grid, _) = engine.into_grids().into_parts();
        let elapsed = start.elapsed();

        match termination {
            Termination::Converged => tracing::info!(
                iterations,
                error,
                elapsed_secs = elapsed.as_secs_f64(),
                "converged"
            ),
            Termination::Exhausted => tracing::warn!(
                iterations,
                error,
                elapsed_secs = elapsed.as_secs_f64(),
                "max iterations reached before convergence"
            ),
        }
        if !error.is_finite() {
            tracing::warn!(error, "final error is not finite");
        }

        Ok(ResultReport {
            grid,
            error,
            iterations,
            elapsed,
            termination,
        })
    }
}

/// Shorthand for `SolverRun::new(config).run()`.
pub fn solve(config: Configuration) -> Result<ResultReport> {
    SolverRun::new(config).run()
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::init::{Corners, InitMode};

    #[test]
    fn configuration_error_before_work() {
        let config = Configuration {
            size: 2,
            ..Configuration::default()
        };
        let r = solve(config);
        assert!(matches!(
            r,
            Err(Error::Configuration(ConfigurationError::GridTooSmall(2)))
        ));
    }

    #[test]
    fn delegated_without_backend() {
        let config = Configuration {
            strategy: Strategy::Delegated,
            ..Configuration::default()
        };
        assert!(matches!(solve(config), Err(Error::BackendUnavailable(_))));

        let handle = HostBlas::uninitialized();
        let r = SolverRun::new(config).with_backend(&handle).run();
        assert!(matches!(r, Err(Error::BackendUnavailable(_))));
    }

    #[test]
    fn delegated_with_backend() {
        let config = Configuration {
            size: 8,
            accuracy: 1e-5,
            check_period: 4,
            strategy: Strategy::Delegated,
            chunk_size: 9,
            ..Configuration::default()
        };
        let handle = HostBlas::create(config.chunk_size);
        let r = SolverRun::new(config).with_backend(&handle).run().unwrap();
        assert!(r.converged());
        assert!(r.error <= 1e-5);
        assert_eq!(r.grid.size(), 8);
        assert_eq!(r.iterations % 4, 0);
    }

    #[test]
    fn explicit_monitor_ignores_strategy() {
        let config = Configuration {
            size: 5,
            max_iterations: 3,
            strategy: Strategy::Delegated,
            ..Configuration::default()
        };
        let r = SolverRun::new(config)
            .run_with_monitor(DirectMonitor::new(4))
            .unwrap();
        assert_eq!(r.termination, Termination::Exhausted);
        assert_eq!(r.iterations, 3);
        assert!(r.elapsed_secs() >= 0.0);
    }

    #[test]
    fn huge_corners_stay_finite_and_strategies_agree() {
        let config = Configuration {
            size: 5,
            max_iterations: 50,
            check_period: 1,
            init_mode: InitMode::MeanOfCorners,
            corners: Corners {
                up_left: 1e308,
                down_left: 1e308,
                up_right: 1e308,
                down_right: -1e308,
            },
            chunk_size: 4,
            ..Configuration::default()
        };
        let handle = HostBlas::create(config.chunk_size);
        let direct = solve(config).unwrap();
        let delegated = SolverRun::new(Configuration {
            strategy: Strategy::Delegated,
            ..config
        })
        .with_backend(&handle)
        .run()
        .unwrap();

        for r in [&direct, &delegated] {
            assert!(r.grid.buffer().iter().all(|v| v.is_finite()));
            assert!(!r.error.is_nan());
            if r.converged() {
                assert!(r.error <= config.accuracy);
            }
        }
        assert_eq!(direct.termination, delegated.termination);
        assert_eq!(direct.iterations, delegated.iterations);
        assert_eq!(direct.grid, delegated.grid);
    }
}
