use crate::config::Configuration;
use crate::domain::*;
use crate::monitor::*;
use crate::par_stencil;
use crate::stencil::standard_stencils::jacobi_2d;
use crate::stencil::*;

/// Error value meaning "not measured", never passes the accuracy test.
pub const UNKNOWN_ERROR: f64 = f64::INFINITY;

/// Why the relaxation stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    /// A real convergence check measured error <= accuracy.
    Converged,

    /// The iteration cap was reached first.
    Exhausted,
}

/// Counters owned by the engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IterationState {
    /// Passes executed so far.
    pub iteration: usize,

    /// Passes left until the next convergence check.
    pub countdown: usize,

    /// Error from the last check, or `UNKNOWN_ERROR` between checks.
    pub error: f64,
}

impl IterationState {
    pub fn new(check_period: usize) -> Self {
        IterationState {
            iteration: 0,
            countdown: check_period,
            error: UNKNOWN_ERROR,
        }
    }
}

/// Drives the Jacobi fixed point iteration over a `GridPair`.
///
/// Convergence is only measured every `check_period` passes,
/// each check is a global reduction and a synchronization point.
/// Between checks the error is forced to `UNKNOWN_ERROR`,
/// so the engine may run up to `check_period - 1` passes past the
/// point where the grid actually converged.
pub struct RelaxationEngine<M: ConvergenceMonitor> {
    grids: GridPair,
    stencil: Stencil<4>,
    monitor: M,
    state: IterationState,
    accuracy: f64,
    max_iterations: usize,
    check_period: usize,
    chunk_size: usize,
}

impl<M: ConvergenceMonitor> RelaxationEngine<M> {
    pub fn new(config: &Configuration, grids: GridPair, monitor: M) -> Self {
        debug_assert_eq!(grids.bounds().size(), config.size);
        RelaxationEngine {
            grids,
            stencil: jacobi_2d(),
            monitor,
            state: IterationState::new(config.check_period),
            accuracy: config.accuracy,
            max_iterations: config.max_iterations,
            check_period: config.check_period,
            chunk_size: config.chunk_size,
        }
    }

    pub fn state(&self) -> &IterationState {
        &self.state
    }

    pub fn grids(&self) -> &GridPair {
        &self.grids
    }

    pub fn into_grids(self) -> GridPair {
        self.grids
    }

    /// `None` while still running.
    /// Converged wins if a check passed on the last allowed pass.
    pub fn termination(&self) -> Option<Termination> {
        if self.state.error <= self.accuracy {
            Some(Termination::Converged)
        } else if self.state.iteration >= self.max_iterations {
            Some(Termination::Exhausted)
        } else {
            None
        }
    }

    /// One relaxation pass: stencil into next, swap roles,
    /// then measure convergence if the countdown expired.
    pub fn step(&mut self) {
        profiling::scope!("RelaxationEngine::step");
        {
            let (current, next) = self.grids.current_next_mut();
            par_stencil::apply(&self.stencil, current, next, self.chunk_size);
        }
        self.grids.swap();

        self.state.countdown = self.state.countdown.saturating_sub(1);
        if self.state.countdown == 0
            && self.state.iteration < self.max_iterations
        {
            self.state.error = self
                .monitor
                .measure(self.grids.current(), self.grids.next());
            self.state.countdown = self.check_period;
            tracing::debug!(
                iteration = self.state.iteration + 1,
                error = self.state.error,
                "convergence check"
            );
        } else {
            self.state.error = UNKNOWN_ERROR;
        }

        self.state.iteration += 1;
    }

    /// Step until converged or exhausted.
    pub fn run(&mut self) -> Termination {
        profiling::scope!("RelaxationEngine::run");
        loop {
            if let Some(termination) = self.termination() {
                return termination;
            }
            self.step();
        }
    }

    /// Unconditional measurement over the last two buffers.
    pub fn final_error(&mut self) -> f64 {
        self.monitor.measure(self.grids.current(), self.grids.next())
    }
}
