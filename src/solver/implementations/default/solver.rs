use super::*;
use crate::io::ConfigurablePrintTarget;
use crate::solver::core::{traits::Settings, Elimination, PivotRules, Solver};
use crate::solver::{LinearProgram, ProblemError, StandardForm};

use crate::algebra::*;
use crate::timers::*;

/// Solver for linear programs in MPS form

pub type DefaultSolver<T = f64> = Solver<
    T,
    DefaultProblemData<T>,
    DefaultInfo<T>,
    DefaultSolution<T>,
    DefaultSettings<T>,
>;

impl<T> DefaultSolver<T>
where
    T: FloatT,
{
    /// Put `lp` into standard form and prepare a solver for it.
    ///
    /// Fails on invalid settings or on a problem that cannot be put into
    /// standard form.  Infeasible or unbounded problems are not errors;
    /// they are reported through the solution status after [`solve`].
    ///
    /// [`solve`]: crate::solver::SimplexSolver::solve
    pub fn new(lp: &LinearProgram<T>, settings: DefaultSettings<T>) -> Result<Self, ProblemError> {
        let mut timers = Timers::default();
        let data;

        timeit! {timers => "standard form"; {
            data = DefaultProblemData::<T>::new(lp);
        }}

        Self::from_parts(data?, settings, timers)
    }

    /// Prepare a solver for a problem that is already in standard form,
    /// e.g. one read with [`read_standard_form`](crate::io::read_standard_form).
    pub fn from_standard_form(
        standard_form: StandardForm<T>,
        settings: DefaultSettings<T>,
    ) -> Result<Self, ProblemError> {
        let data = DefaultProblemData::<T>::from_standard_form(standard_form);
        Self::from_parts(data, settings, Timers::default())
    }

    fn from_parts(
        data: DefaultProblemData<T>,
        settings: DefaultSettings<T>,
        mut timers: Timers,
    ) -> Result<Self, ProblemError> {
        settings.validate()?;

        let mut output;

        timeit! {timers => "setup"; {

        let rule = PivotRules::from_name(&settings.pivot_rule, settings.tol_pivot)?;
        let engine = Elimination::new(
            settings.parallel_enable,
            settings.max_threads as usize,
            settings.parallel_min_rows,
        )?;

        let mut info = DefaultInfo::<T>::new();
        info.threads = engine.threads();

        // user facing results go here.
        let solution = DefaultSolution::<T>::new(data.n, data.standard_form.ncols());

        output = Self {
            data,
            info,
            solution,
            settings,
            tableau: None,
            rule,
            engine,
            timers: None,
        };

        }} //end "setup" timer.

        //now that the timer is finished we can swap our
        //timer object into the solver structure
        output.timers.replace(timers);

        Ok(output)
    }
}

impl<T> ConfigurablePrintTarget for DefaultSolver<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.info.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.info.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn std::io::Write + Send + Sync>) {
        self.info.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.info.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.info.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.info.get_print_buffer()
    }
}
