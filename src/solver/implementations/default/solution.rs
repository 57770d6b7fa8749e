use super::*;
use crate::{
    algebra::*,
    solver::core::{extract, traits::Solution, SolverStatus, Tableau},
};

/// Standard-form solver type implementing the [`Solution`](crate::solver::core::traits::Solution) trait
#[derive(Debug, Clone)]
pub struct DefaultSolution<T> {
    /// solution in the original variables.  After an iteration or time
    /// limit this is the last basic point, or NaN if the limit was hit
    /// before a feasible basis was found.
    pub x: Vec<T>,
    /// solution in the standard-form columns
    pub x_standard: Vec<T>,
    /// final solver status
    pub status: SolverStatus,
    /// objective `c'x` in the original variables
    pub obj_val: T,
    /// solve time in seconds
    pub solve_time: f64,
    /// number of pivots over both phases
    pub iterations: u32,
    /// number of feasibility restoring pivots
    pub phase_one_iterations: u32,
}

impl<T> DefaultSolution<T>
where
    T: FloatT,
{
    /// Create a new `DefaultSolution` object
    pub fn new(n: usize, ncols: usize) -> Self {
        Self {
            x: vec![T::zero(); n],
            x_standard: vec![T::zero(); ncols],
            status: SolverStatus::Unsolved,
            obj_val: T::nan(),
            solve_time: 0f64,
            iterations: 0,
            phase_one_iterations: 0,
        }
    }
}

impl<T> Solution<T> for DefaultSolution<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type I = DefaultInfo<T>;

    fn post_process(
        &mut self,
        data: &DefaultProblemData<T>,
        tableau: Option<&Tableau<T>>,
        info: &DefaultInfo<T>,
    ) {
        self.status = info.status;
        self.iterations = info.iterations;
        self.phase_one_iterations = info.phase_one_iterations;

        let sf = &data.standard_form;

        match (info.status, tableau) {
            (SolverStatus::Solved, Some(tableau)) => {
                self.x_standard = extract::get_solution(tableau);
                self.x = sf.recover(&self.x_standard);
                self.obj_val = sf.objective(&self.x);
            }
            // last basic point reached before the limit, if it is feasible
            (status, Some(tableau)) if status.is_limited() && tableau.is_feasible() => {
                self.x_standard = extract::get_solution(tableau);
                self.x = sf.recover(&self.x_standard);
                self.obj_val = sf.objective(&self.x);
            }
            (SolverStatus::Unbounded, _) => {
                self.x_standard.set(T::nan());
                self.x.set(T::nan());
                self.obj_val = T::neg_infinity();
            }
            (status, _) => {
                debug_assert!(status.is_infeasible() || status.is_limited() || tableau.is_none());
                self.x_standard.set(T::nan());
                self.x.set(T::nan());
                self.obj_val = T::nan();
            }
        }
    }

    fn finalize(&mut self, info: &DefaultInfo<T>) {
        self.solve_time = info.solve_time;
    }
}
