//! Traits for the types that together make up a simplex solver.
//!
//! The [`Solver`](super::Solver) driver is generic over its problem data,
//! progress information, solution and settings types.  The collection of
//! types in the [default implementation](crate::solver::implementations::default)
//! implements all of them, and in nearly all cases there is no need for a
//! user to implement these traits directly.

use super::{CoreSettings, Elimination, Phase, SettingsError, SolverStatus, Tableau};
use crate::algebra::*;
use crate::solver::StandardForm;
use crate::timers::*;

/// Data for a linear program that has been put into standard form.
pub trait ProblemData<T: FloatT> {
    fn standard_form(&self) -> &StandardForm<T>;
}

/// Printing of solver progress.   All output goes to the print target
/// of the implementing type and is skipped when `verbose` is off.
pub trait InfoPrint<T>
where
    T: FloatT,
{
    type D: ProblemData<T>;
    type SE: Settings<T>;

    /// Print the problem dimensions and settings.  Called once at the
    /// start of the solve.
    fn print_configuration(
        &mut self,
        settings: &Self::SE,
        data: &Self::D,
        engine: &Elimination,
    ) -> std::io::Result<()>;

    /// Print a header to appear at the top of progress information.
    fn print_status_header(&mut self, settings: &Self::SE) -> std::io::Result<()>;

    /// Print solver progress information.  Called once per pivot.
    fn print_status(&mut self, settings: &Self::SE) -> std::io::Result<()>;

    /// Print solver final status and other exit information.
    fn print_footer(&mut self, settings: &Self::SE) -> std::io::Result<()>;

    /// The print target.
    fn print_target(&mut self) -> &mut dyn std::io::Write;
}

/// Internal information for the solver to monitor progress and check for termination.
pub trait Info<T>: InfoPrint<T>
where
    T: FloatT,
{
    /// Reset internal data, particularly solve timers.
    fn reset(&mut self, timers: &mut Timers);

    /// Record a completed pivot.
    fn save_pivot(&mut self, phase: Phase, entering: usize, leaving: usize, objective: T);

    /// Check the iteration and time limits before another pivot.
    /// Returns true and sets the status if a limit was hit.
    fn check_termination(&mut self, settings: &Self::SE, timers: &Timers, max_iter: u32) -> bool;

    /// Record final information, e.g. solve time.
    fn finalize(&mut self, timers: &mut Timers);

    /// Report or update termination status
    fn get_status(&self) -> SolverStatus;
    fn set_status(&mut self, status: SolverStatus);
}

/// Solution for a linear program.
pub trait Solution<T: FloatT> {
    type D: ProblemData<T>;
    type I: Info<T>;

    /// Compute solution values from the final tableau, mapped back to
    /// the original variables.
    fn post_process(&mut self, data: &Self::D, tableau: Option<&Tableau<T>>, info: &Self::I);

    /// Finalize the solution, e.g. extract final timing.
    fn finalize(&mut self, info: &Self::I);
}

/// Settings for a simplex solver.
pub trait Settings<T: FloatT> {
    /// Return the core settings.
    fn core(&self) -> &CoreSettings<T>;

    /// Return the core settings (mutably).
    fn core_mut(&mut self) -> &mut CoreSettings<T>;

    /// Check that field values are legal.
    fn validate(&self) -> Result<(), SettingsError>;
}
