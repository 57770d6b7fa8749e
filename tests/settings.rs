#![allow(non_snake_case)]

use pivotal::{algebra::*, solver::*};

fn two_pivot_lp() -> LinearProgram<f64> {
    // min -x - y  s.t.  x ≤ 4,  y ≤ 4
    LinearProgram::new(vec!['L', 'L'], vec![-1., -1.], Matrix::identity(2))
        .with_rhs("RHS", vec![4., 4.])
}

#[test]
fn test_builder_rejects_bad_fields() {
    assert!(DefaultSettingsBuilder::<f64>::default()
        .pivot_rule("dantzig".to_string())
        .build()
        .is_err());
    assert!(DefaultSettingsBuilder::<f64>::default()
        .tol_pivot(-1e-9)
        .build()
        .is_err());
    assert!(DefaultSettingsBuilder::<f64>::default()
        .tol_pivot(f64::NAN)
        .build()
        .is_err());
    assert!(DefaultSettingsBuilder::<f64>::default()
        .time_limit(f64::NAN)
        .build()
        .is_err());
}

#[test]
fn test_solver_rejects_bad_settings() {
    let settings = DefaultSettings::<f64> {
        pivot_rule: "steepest".to_string(),
        ..DefaultSettings::default()
    };
    assert!(matches!(
        DefaultSolver::new(&two_pivot_lp(), settings),
        Err(ProblemError::Settings(SettingsError::BadField("pivot_rule")))
    ));
}

#[test]
fn test_iteration_limit() {
    let settings = DefaultSettingsBuilder::default()
        .max_iter(1)
        .build()
        .unwrap();
    let mut solver = DefaultSolver::new(&two_pivot_lp(), settings).unwrap();
    solver.solve();

    assert_eq!(solver.solution.status, SolverStatus::MaxIterations);
    assert_eq!(solver.solution.iterations, 1);
    // the basic point where the pivoting stopped
    assert_eq!(solver.solution.x, vec![4., 0.]);
    assert_eq!(solver.solution.obj_val, -4.);
}

#[test]
fn test_time_limit() {
    let settings = DefaultSettingsBuilder::default()
        .time_limit(0.)
        .build()
        .unwrap();
    let mut solver = DefaultSolver::new(&two_pivot_lp(), settings).unwrap();
    solver.solve();

    assert_eq!(solver.solution.status, SolverStatus::MaxTime);
    assert_eq!(solver.solution.iterations, 0);
}

#[test]
fn test_timers_recorded() {
    let mut solver = DefaultSolver::new(&two_pivot_lp(), DefaultSettings::default()).unwrap();
    solver.solve();

    let timers = solver.timers.as_ref().unwrap();
    assert!(timers.elapsed(&["solve"]) >= timers.elapsed(&["solve", "phase two"]));
    assert!(solver.solution.solve_time > 0.);

    let mut out = Vec::new();
    timers.write(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("phase two"));
}

#[test]
fn test_cycling_problem_terminates() {
    // Beale's example, which cycles under the largest coefficient rule
    // without an anti-cycling safeguard
    let A = Matrix::from_rows(&[
        vec![0.25, -60., -0.04, 9.],
        vec![0.5, -90., -0.02, 3.],
        vec![0., 0., 1., 0.],
    ])
    .unwrap();
    let lp = LinearProgram::new(vec!['L'; 3], vec![-0.75, 150., -0.02, 6.], A)
        .with_rhs("RHS", vec![0., 0., 1.]);

    let solve_with = |rule: &str| {
        let settings = DefaultSettingsBuilder::default()
            .pivot_rule(rule.to_string())
            .max_iter(100)
            .build()
            .unwrap();
        let mut solver = DefaultSolver::new(&lp, settings).unwrap();
        solver.solve();
        solver
    };

    // lowest index entering column avoids the cycle
    let solver = solve_with("first");
    assert_eq!(solver.solution.status, SolverStatus::Solved);
    assert_eq!(solver.solution.iterations, 6);
    assert!(solver.solution.x.dist(&[0.04, 0., 1., 0.]) <= 1e-9);
    assert!(f64::abs(solver.solution.obj_val - (-0.05)) <= 1e-9);

    // the largest coefficient rule cycles until the cap stops it
    let solver = solve_with("largest");
    assert_eq!(solver.solution.status, SolverStatus::MaxIterations);
    assert_eq!(solver.solution.iterations, 100);
    assert_eq!(solver.solution.phase_one_iterations, 0);
}

#[test]
fn test_iteration_limit_in_phase_one() {
    // min x + y  s.t.  x ≥ 1,  y ≥ 1, which takes two phase one pivots
    let lp: LinearProgram<f64> = LinearProgram::new(vec!['G', 'G'], vec![1., 1.], Matrix::identity(2))
        .with_rhs("RHS", vec![1., 1.]);
    let settings = DefaultSettingsBuilder::default()
        .max_iter(1)
        .build()
        .unwrap();
    let mut solver = DefaultSolver::new(&lp, settings).unwrap();
    solver.solve();

    assert_eq!(solver.solution.status, SolverStatus::MaxIterations);
    assert_eq!(solver.solution.phase_one_iterations, 1);
    // y ≥ 1 still fails at the last basic point, so no point is reported
    assert!(!solver.tableau.as_ref().unwrap().is_feasible());
    assert!(solver.solution.x.iter().all(|v| v.is_nan()));
    assert!(solver.solution.obj_val.is_nan());
}
