use crate::algebra::*;
use crate::solver::core::traits::ProblemData;
use crate::solver::{LinearProgram, ProblemError, StandardForm};

// ---------------
// Data type for default problem format
// ---------------

/// Standard-form solver type implementing the [`ProblemData`](crate::solver::core::traits::ProblemData) trait

#[derive(Debug, Clone)]
pub struct DefaultProblemData<T> {
    /// the problem as it is pivoted
    pub standard_form: StandardForm<T>,
    /// number of original variables
    pub n: usize,
    /// number of original constraint rows
    pub m: usize,
    /// the problem as given, when built from one
    pub lp: Option<LinearProgram<T>>,
}

impl<T> DefaultProblemData<T>
where
    T: FloatT,
{
    pub fn new(lp: &LinearProgram<T>) -> Result<Self, ProblemError> {
        let standard_form = StandardForm::build(lp)?;
        Ok(Self {
            standard_form,
            n: lp.nvars(),
            m: lp.nconstraints(),
            lp: Some(lp.clone()),
        })
    }

    pub fn from_standard_form(standard_form: StandardForm<T>) -> Self {
        let n = standard_form.columns.nvars();
        let m = standard_form.nrows();
        Self {
            standard_form,
            n,
            m,
            lp: None,
        }
    }
}

impl<T> ProblemData<T> for DefaultProblemData<T>
where
    T: FloatT,
{
    fn standard_form(&self) -> &StandardForm<T> {
        &self.standard_form
    }
}
