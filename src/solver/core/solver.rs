use self::internal::*;
use super::traits::*;
use super::{Elimination, PivotRules, Tableau};
use crate::algebra::*;
use crate::timers::*;
use std::io::Write;
use thiserror::Error;

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of solver at termination

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// Solver terminated with an optimal solution.
    Solved,
    /// Objective is unbounded below on the feasible set.
    Unbounded,
    /// Problem has no feasible point.
    PrimalInfeasible,
    /// Iteration limit reached before optimality.  Also the outcome of
    /// cycling on degenerate problems.
    MaxIterations,
    /// Time limit reached before optimality.
    MaxTime,
}

impl SolverStatus {
    pub(crate) fn is_infeasible(&self) -> bool {
        matches!(*self, SolverStatus::PrimalInfeasible)
    }

    pub(crate) fn is_limited(&self) -> bool {
        matches!(*self, SolverStatus::MaxIterations | SolverStatus::MaxTime)
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error type returned by the tableau pivot selection routines.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PivotError {
    /// No row limits the entering column.
    #[error("column {column} can increase without bound")]
    Unbounded { column: usize },
    /// A row with negative RHS has no negative entry to pivot on.
    #[error("row {row} cannot be made feasible")]
    Infeasible { row: usize },
}

/// Simplex phase.
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
pub enum Phase {
    /// restoring feasibility of the slack basis
    One,
    /// optimising from a feasible basis
    #[default]
    Two,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::One => write!(f, "1"),
            Phase::Two => write!(f, "2"),
        }
    }
}

// ---------------------------------
// top level solver container type
// ---------------------------------

// The top-level solver.

// This is generic over a collection of mutually interacting types.
// See the [`DefaultSolver`](crate::solver::implementations::default) for an example.

pub struct Solver<T, D, I, SO, SE>
where
    T: FloatT,
{
    pub data: D,
    pub info: I,
    pub solution: SO,
    pub settings: SE,
    /// final tableau of the most recent solve
    pub tableau: Option<Tableau<T>>,
    pub(crate) rule: PivotRules<T>,
    pub(crate) engine: Elimination,
    pub timers: Option<Timers>,
}

fn _print_banner(out: &mut dyn Write, is_verbose: bool) -> std::io::Result<()> {
    if !is_verbose {
        return Ok(());
    }

    writeln!(out, "-------------------------------------------------------------")?;
    writeln!(
        out,
        "           pivotal v{}  -  dense tableau simplex          \n",
        crate::VERSION
    )?;
    writeln!(out, "-------------------------------------------------------------")?;
    Ok(())
}

// ---------------------------------
// SimplexSolver trait and its standard implementation.
// ---------------------------------

/// A tableau simplex solver with a feasibility restoring first phase.

// Only the main solver function lives in SimplexSolver, since this is
// the only publicly facing trait we want to give the solver.

pub trait SimplexSolver<T, D, I, SO, SE> {
    /// Run the solver
    fn solve(&mut self);
}

impl<T, D, I, SO, SE> SimplexSolver<T, D, I, SO, SE> for Solver<T, D, I, SO, SE>
where
    T: FloatT,
    D: ProblemData<T>,
    I: Info<T, D = D, SE = SE>,
    SO: Solution<T, D = D, I = I>,
    SE: Settings<T>,
{
    fn solve(&mut self) {
        //timers is stored as an option so that
        //we can swap it out here and avoid
        //borrow conflicts with other fields.
        let mut timers = self.timers.take().unwrap_or_default();

        // print failures never interrupt a solve
        notimeit! {timers; {
            let _ = _print_banner(self.info.print_target(), self.settings.core().verbose);
            let _ = self.info.print_configuration(&self.settings, &self.data, &self.engine);
            let _ = self.info.print_status_header(&self.settings);
        }}

        self.info.reset(&mut timers);
        self.tableau = None;

        let (m, n) = {
            let problem = self.data.standard_form();
            (problem.nrows(), problem.ncols())
        };
        let max_iter = self.settings.core().iteration_limit(m, n);

        timeit! {timers => "solve"; {

        let mut tableau;
        timeit!{timers => "tableau"; {
            tableau = Tableau::from_standard_form(
                self.data.standard_form(),
                self.settings.core().tol_pivot,
            );
        }}

        timeit!{timers => "phase one"; {
            self.run_phase(Phase::One, &mut tableau, &mut timers, max_iter);
        }}

        if self.info.get_status() == SolverStatus::Unsolved {
            timeit!{timers => "phase two"; {
                self.run_phase(Phase::Two, &mut tableau, &mut timers, max_iter);
            }}
        }

        self.tableau = Some(tableau);

        }} // end "solve" timer

        //store final solution, timing etc
        self.info.finalize(&mut timers);

        self.solution
            .post_process(&self.data, self.tableau.as_ref(), &self.info);
        self.solution.finalize(&self.info);

        let _ = self.info.print_footer(&self.settings);

        //stow the timers back into Option in the solver struct
        self.timers.replace(timers);
    }
}

/// Saving and loading of solver problems and settings as JSON.
#[cfg(feature = "serde")]
pub trait SolverJSONReadWrite<T: FloatT>: Sized {
    /// Write the problem and settings to `file`
    fn save_to_file(&self, file: &mut std::fs::File) -> Result<(), std::io::Error>;
    /// Build a solver from a file written by `save_to_file`.  The
    /// stored settings are replaced by `settings` when given.
    fn load_from_file(
        file: &mut std::fs::File,
        settings: Option<super::CoreSettings<T>>,
    ) -> Result<Self, std::io::Error>;
}

// Encapsulate the internal helpers trait in a private module
// so it doesn't get exported
mod internal {
    use super::*;
    use crate::solver::core::PivotError;

    pub(super) trait SimplexSolverInternals<T: FloatT> {
        /// Pivot until the phase is complete or a limit is hit
        fn run_phase(
            &mut self,
            phase: Phase,
            tableau: &mut Tableau<T>,
            timers: &mut Timers,
            max_iter: u32,
        );
    }

    impl<T, D, I, SO, SE> SimplexSolverInternals<T> for Solver<T, D, I, SO, SE>
    where
        T: FloatT,
        D: ProblemData<T>,
        I: Info<T, D = D, SE = SE>,
        SO: Solution<T, D = D, I = I>,
        SE: Settings<T>,
    {
        fn run_phase(
            &mut self,
            phase: Phase,
            tableau: &mut Tableau<T>,
            timers: &mut Timers,
            max_iter: u32,
        ) {
            loop {
                let selection = match phase {
                    Phase::One => tableau.feasibility_pivot(&self.engine),
                    Phase::Two => tableau.select_pivot(&self.rule, &self.engine),
                };

                let (r, c) = match selection {
                    Ok(Some(pivot)) => pivot,
                    Ok(None) => {
                        // phase one ends on a feasible basis, phase two on an optimal one
                        if phase == Phase::Two {
                            self.info.set_status(SolverStatus::Solved);
                        }
                        break;
                    }
                    Err(PivotError::Unbounded { .. }) => {
                        self.info.set_status(SolverStatus::Unbounded);
                        break;
                    }
                    Err(PivotError::Infeasible { .. }) => {
                        self.info.set_status(SolverStatus::PrimalInfeasible);
                        break;
                    }
                };

                if self.info.check_termination(&self.settings, timers, max_iter) {
                    break;
                }

                let leaving = tableau.basis()[r];
                tableau.pivot(r, c, &self.engine);
                self.info
                    .save_pivot(phase, c, leaving, tableau.objective_value());

                notimeit! {timers; {
                    let _ = self.info.print_status(&self.settings);
                }}
            }
        }
    }
}
