//! __Pivotal__ is a dense tableau simplex solver for linear programs of the
//! kind read from MPS files.  It solves
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & c^T x\\\\\[2ex\]
//!  \text{subject to} & a_i^T x \; \\{\le, \ge, =\\} \; b_i \\\\\[1ex\]
//!         & l \le x \le u
//!  \end{array}
//! $$
//!
//! by first rewriting the problem in standard form, i.e. with `≤` rows only
//! and nonnegative variables, and then pivoting a dense tableau.  Rows of
//! the tableau are eliminated either serially or in parallel on a
//! [rayon](https://docs.rs/rayon) thread pool, and both engines pick the
//! same sequence of pivots.
//!
//! ## Usage
//!
//! ```
//! use pivotal::algebra::*;
//! use pivotal::solver::*;
//!
//! // min -x - y  s.t.  x ≤ 4,  y ≤ 4
//! let A = Matrix::identity(2);
//! let lp = LinearProgram::new(vec!['L', 'L'], vec![-1.0, -1.0], A)
//!     .with_rhs("RHS", vec![4.0, 4.0]);
//!
//! let settings = DefaultSettingsBuilder::default()
//!     .verbose(false)
//!     .build()
//!     .unwrap();
//!
//! let mut solver = DefaultSolver::new(&lp, settings).unwrap();
//! solver.solve();
//!
//! assert_eq!(solver.solution.status, SolverStatus::Solved);
//! assert_eq!(solver.solution.x, vec![4.0, 4.0]);
//! assert_eq!(solver.solution.obj_val, -8.0);
//! ```
//!
//! ## Features
//!
//! * `parallel` (default): row-parallel elimination on rayon.
//! * `serde` (default): JSON saving and loading of problems and settings.
//! * `bench`: the `simplex-bench` timing binary.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod solver;
pub mod timers;
