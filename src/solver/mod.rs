//! Pivotal solver main module.
//!
//! This module contains the main types and traits for the simplex solver.
//!
//! The solver comes with a [default implementation](crate::solver::implementations::default)
//! of all required traits.   This produces a solver for linear programs in the
//! [`LinearProgram`] format, which is the most appropriate choice for nearly all users.
//!
//! The tableau, pivot rules and elimination engines are also exposed for
//! callers who want to drive the pivots themselves.

pub(crate) const _INFINITY_DEFAULT: f64 = 1e20;
// internal module structure
pub(crate) mod core;
pub mod implementations;
pub mod standard_form;
pub(crate) mod utils;

//Here we expose only part of the solver internals
//and rearrange public modules a bit to give a more
//user friendly API

pub use crate::solver::utils::infbounds::*;

//problem description and its standard form
pub use crate::solver::standard_form::*;

//user facing traits required to interact with solver
pub use crate::solver::core::{PivotError, SimplexSolver, SolverStatus};

#[cfg(feature = "serde")]
pub use crate::solver::core::SolverJSONReadWrite;

//engine level pieces
pub use crate::solver::core::{extract, Elimination, Phase, Tableau};
pub use crate::solver::core::{PivotRule, PivotRules, SettingsError};
pub use crate::solver::core::pivot_rules::{FirstPositive, LargestCoefficient};

//user facing traits required to define new implementatiions
pub use crate::solver::core::traits;
pub use crate::solver::core::{CoreSettings, Solver};

pub use crate::solver::implementations::default;
pub use crate::solver::implementations::default::*;
