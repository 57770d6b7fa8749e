//! Linear programs in parsed MPS form and their conversion to the
//! `≤`-only, nonnegative-variable standard form used by the tableau.
//!
//! A [`LinearProgram`] is what an MPS reader hands over: one relation code
//! per constraint row, a cost vector, a dense constraint matrix, and named
//! right-hand-side and bound sections.  [`StandardForm::build`] turns it
//! into `(A', b', c')` where every row is `A'x ≤ b'` and every variable is
//! implicitly `x ≥ 0`.  The [`ColumnMap`] recorded alongside explains how
//! each original variable is represented so that a standard-form solution
//! can be mapped back.

#![allow(non_snake_case)]

use crate::algebra::*;
use crate::solver::core::SettingsError;
use std::collections::BTreeMap;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

mod builder;
mod columns;
pub use columns::*;

/// Error type returned when a problem cannot be put into standard form,
/// or when a solver cannot be constructed for it.
#[derive(Error, Debug)]
pub enum ProblemError {
    /// A constraint row carries a relation code other than `L`, `G` or `E`
    #[error("row {row}: unsupported relation code '{code}'")]
    UnsupportedRelation { row: usize, code: char },
    /// More than one named right-hand side was supplied
    #[error("{0} right-hand sides supplied, only one is supported")]
    MultipleRhs(usize),
    /// More than one named bound set was supplied
    #[error("{0} bound sets supplied, only one is supported")]
    MultipleBoundSets(usize),
    /// Problem data have inconsistent dimensions
    #[error("Problem data dimensions are incompatible")]
    IncompatibleDimension,
    /// A variable has an empty or meaningless bound interval
    #[error("variable {var}: inconsistent bounds")]
    InconsistentBounds { var: usize },
    /// NaN anywhere, or an infinite entry in the cost, matrix or right-hand side
    #[error("non-finite value in {0}")]
    NonFiniteData(&'static str),
    /// Solver settings failed validation
    #[error("Bad settings: {0}")]
    Settings(#[from] SettingsError),
}

/// MPS constraint relation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Relation {
    /// `L`: row ≤ rhs
    LessEqual,
    /// `G`: row ≥ rhs
    GreaterEqual,
    /// `E`: row = rhs
    Equal,
}

impl Relation {
    /// Parse an MPS relation code.  Lower case codes are accepted.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'L' => Some(Relation::LessEqual),
            'G' => Some(Relation::GreaterEqual),
            'E' => Some(Relation::Equal),
            _ => None,
        }
    }

    /// number of `≤` rows the relation expands to
    pub(crate) fn row_count(&self) -> usize {
        match self {
            Relation::Equal => 2,
            _ => 1,
        }
    }
}

/// Lower and upper bounds for every variable, as read from one MPS
/// `BOUNDS` section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct BoundSet<T = f64> {
    pub lower: Vec<T>,
    pub upper: Vec<T>,
}

/// A linear program `min c'x` subject to mixed-relation rows and variable bounds.
///
/// Values whose magnitude reaches [`get_infinity`](crate::solver::get_infinity)
/// are treated as infinite bounds.  With no right-hand side the RHS is zero, and
/// with no bound set every variable takes the MPS default bounds `[0, +inf)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct LinearProgram<T = f64> {
    /// MPS relation code per constraint row
    pub relations: Vec<char>,
    /// cost vector
    pub c: Vec<T>,
    /// constraint matrix
    pub A: Matrix<T>,
    /// named right-hand sides
    pub rhs: BTreeMap<String, Vec<T>>,
    /// named bound sets
    pub bounds: BTreeMap<String, BoundSet<T>>,
}

impl<T> LinearProgram<T>
where
    T: FloatT,
{
    /// A problem with no right-hand side and default bounds.
    pub fn new(relations: Vec<char>, c: Vec<T>, A: Matrix<T>) -> Self {
        Self {
            relations,
            c,
            A,
            rhs: BTreeMap::new(),
            bounds: BTreeMap::new(),
        }
    }

    pub fn with_rhs(mut self, name: &str, b: Vec<T>) -> Self {
        self.rhs.insert(name.to_string(), b);
        self
    }

    pub fn with_bounds(mut self, name: &str, lower: Vec<T>, upper: Vec<T>) -> Self {
        self.bounds
            .insert(name.to_string(), BoundSet { lower, upper });
        self
    }

    /// number of variables
    pub fn nvars(&self) -> usize {
        self.c.len()
    }

    /// number of constraint rows
    pub fn nconstraints(&self) -> usize {
        self.relations.len()
    }

    /// Check the problem for dimension, relation and data errors
    /// without building anything.
    pub fn check_format(&self) -> Result<(), ProblemError> {
        let (m, n) = self.A.size();
        if self.relations.len() != m || self.c.len() != n || self.A.data.len() != m * n {
            return Err(ProblemError::IncompatibleDimension);
        }
        if self.rhs.len() > 1 {
            return Err(ProblemError::MultipleRhs(self.rhs.len()));
        }
        if self.bounds.len() > 1 {
            return Err(ProblemError::MultipleBoundSets(self.bounds.len()));
        }

        for (row, &code) in self.relations.iter().enumerate() {
            if Relation::from_code(code).is_none() {
                return Err(ProblemError::UnsupportedRelation { row, code });
            }
        }

        if !self.c.is_finite() {
            return Err(ProblemError::NonFiniteData("c"));
        }
        if !self.A.is_finite() {
            return Err(ProblemError::NonFiniteData("A"));
        }
        if let Some(b) = self.rhs.values().next() {
            if b.len() != m {
                return Err(ProblemError::IncompatibleDimension);
            }
            if !b.is_finite() {
                return Err(ProblemError::NonFiniteData("rhs"));
            }
        }
        if let Some(bounds) = self.bounds.values().next() {
            if bounds.lower.len() != n || bounds.upper.len() != n {
                return Err(ProblemError::IncompatibleDimension);
            }
            if bounds.lower.iter().chain(&bounds.upper).any(|v| v.is_nan()) {
                return Err(ProblemError::NonFiniteData("bounds"));
            }
        }
        Ok(())
    }

    // the single right-hand side, or zero when none was given
    pub(crate) fn rhs_vector(&self) -> Vec<T> {
        match self.rhs.values().next() {
            Some(b) => b.clone(),
            None => vec![T::zero(); self.nconstraints()],
        }
    }

    // bounds of variable i, or the MPS defaults
    pub(crate) fn bounds_of(&self, i: usize) -> (T, T) {
        match self.bounds.values().next() {
            Some(bounds) => (bounds.lower[i], bounds.upper[i]),
            None => (T::zero(), T::infinity()),
        }
    }
}

/// A problem in standard form `min c'x + offset` s.t. `Ax ≤ b`, `x ≥ 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardForm<T = f64> {
    /// constraint matrix, one `≤` row per entry of `b`
    pub A: Matrix<T>,
    /// right-hand side
    pub b: Vec<T>,
    /// cost per standard-form column
    pub c: Vec<T>,
    /// constant term produced by shifting variables with negative lower bounds
    pub objective_offset: T,
    /// cost of the original variables
    pub c_orig: Vec<T>,
    /// representation of each original variable
    pub columns: ColumnMap<T>,
}

impl<T> StandardForm<T>
where
    T: FloatT,
{
    /// Assemble from data that is already in standard form.  Every column
    /// is its own variable.
    ///
    /// # Panics
    /// Panics if `A` is not `b.len()` by `c.len()`.
    pub fn from_parts(A: Matrix<T>, b: Vec<T>, c: Vec<T>) -> Self {
        assert_eq!(A.size(), (b.len(), c.len()));
        let columns = ColumnMap::identity(c.len());
        Self {
            A,
            b,
            c_orig: c.clone(),
            c,
            objective_offset: T::zero(),
            columns,
        }
    }

    /// number of `≤` rows
    pub fn nrows(&self) -> usize {
        self.b.len()
    }

    /// number of standard-form columns
    pub fn ncols(&self) -> usize {
        self.c.len()
    }

    /// Map a standard-form solution back onto the original variables.
    pub fn recover(&self, x: &[T]) -> Vec<T> {
        self.columns.recover(x)
    }

    /// Objective of the original problem at original point `x`.
    pub fn objective(&self, x: &[T]) -> T {
        self.c_orig.dot(x)
    }
}
