use super::*;
use crate::algebra::*;
use crate::io::PrintTarget;
use crate::solver::core::{traits::Info, Phase, SolverStatus};
use crate::timers::*;

/// Standard-form solver type implementing the [`Info`](crate::solver::core::traits::Info) and [`InfoPrint`](crate::solver::core::traits::InfoPrint) traits

#[derive(Default, Debug)]
pub struct DefaultInfo<T> {
    /// pivots over both phases
    pub iterations: u32,
    /// pivots spent restoring feasibility
    pub phase_one_iterations: u32,
    pub phase: Phase,
    /// column entering the basis at the last pivot
    pub entering: usize,
    /// column leaving the basis at the last pivot
    pub leaving: usize,
    /// tableau objective `-c'x` after the last pivot
    pub objective: T,
    pub solve_time: f64,
    pub status: SolverStatus,
    /// worker threads used for elimination
    pub threads: usize,

    // target stream for printing
    pub(crate) stream: PrintTarget,
}

impl<T> DefaultInfo<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Info<T> for DefaultInfo<T>
where
    T: FloatT,
{
    fn reset(&mut self, timers: &mut Timers) {
        self.status = SolverStatus::Unsolved;
        self.iterations = 0;
        self.phase_one_iterations = 0;
        self.phase = Phase::One;
        self.objective = T::zero();
        self.solve_time = 0f64;

        timers.reset_timer("solve");
    }

    fn save_pivot(&mut self, phase: Phase, entering: usize, leaving: usize, objective: T) {
        self.iterations += 1;
        if phase == Phase::One {
            self.phase_one_iterations += 1;
        }
        self.phase = phase;
        self.entering = entering;
        self.leaving = leaving;
        self.objective = objective;
    }

    fn check_termination(
        &mut self,
        settings: &DefaultSettings<T>,
        timers: &Timers,
        max_iter: u32,
    ) -> bool {
        if self.status == SolverStatus::Unsolved {
            if self.iterations >= max_iter {
                self.status = SolverStatus::MaxIterations;
            } else if timers.total_time().as_secs_f64() > settings.time_limit {
                self.status = SolverStatus::MaxTime;
            }
        }

        // return TRUE if we settled on a final status
        self.status != SolverStatus::Unsolved
    }

    fn finalize(&mut self, timers: &mut Timers) {
        self.solve_time = timers.total_time().as_secs_f64();
    }

    fn get_status(&self) -> SolverStatus {
        self.status
    }

    fn set_status(&mut self, status: SolverStatus) {
        self.status = status;
    }
}
