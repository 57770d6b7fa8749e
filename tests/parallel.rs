#![allow(non_snake_case)]
#![cfg(feature = "parallel")]

use pivotal::{algebra::*, solver::*};
use rand::prelude::*;

// every third row is a ≥ row with a small RHS, so phase one has work to do
fn random_lp(m: usize, n: usize, seed: u64) -> LinearProgram<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows: Vec<Vec<f64>> = (0..m)
        .map(|_| (0..n).map(|_| rng.random_range(1.0..10.0)).collect())
        .collect();
    let A = Matrix::from_rows(&rows).unwrap();
    let relations = (0..m).map(|i| if i % 3 == 2 { 'G' } else { 'L' }).collect();
    let b = (0..m)
        .map(|i| {
            if i % 3 == 2 {
                rng.random_range(1.0..5.0)
            } else {
                rng.random_range(50.0..100.0)
            }
        })
        .collect();
    let c = (0..n).map(|_| rng.random_range(-10.0..-1.0)).collect();

    LinearProgram::new(relations, c, A).with_rhs("RHS", b)
}

fn solve_with(lp: &LinearProgram<f64>, parallel: bool, threads: u32) -> DefaultSolver<f64> {
    let settings = DefaultSettingsBuilder::default()
        .parallel_enable(parallel)
        .parallel_min_rows(0)
        .max_threads(threads)
        .build()
        .unwrap();
    let mut solver = DefaultSolver::new(lp, settings).unwrap();
    solver.solve();
    solver
}

#[test]
fn test_parallel_matches_serial() {
    for seed in 1..4 {
        let lp = random_lp(60, 40, seed);
        let serial = solve_with(&lp, false, 0);
        assert_eq!(serial.solution.status, SolverStatus::Solved);

        for threads in [0, 1, 2, 4] {
            let parallel = solve_with(&lp, true, threads);
            assert_eq!(parallel.solution.status, serial.solution.status);
            assert_eq!(parallel.solution.iterations, serial.solution.iterations);
            assert_eq!(
                parallel.solution.phase_one_iterations,
                serial.solution.phase_one_iterations
            );
            assert_eq!(parallel.solution.x, serial.solution.x);
            assert_eq!(parallel.solution.obj_val, serial.solution.obj_val);
        }
    }
}

#[test]
fn test_dedicated_pool() {
    let lp = random_lp(10, 5, 7);
    let solver = solve_with(&lp, true, 3);
    assert_eq!(solver.info.threads, 3);
    assert_eq!(solver.solution.status, SolverStatus::Solved);

    let solver = solve_with(&lp, false, 3);
    assert_eq!(solver.info.threads, 1);
}

#[test]
fn test_small_tableau_falls_back_to_serial() {
    let lp = random_lp(6, 4, 11);

    let settings = DefaultSettingsBuilder::default()
        .parallel_enable(true)
        .parallel_min_rows(1000)
        .build()
        .unwrap();
    let mut solver = DefaultSolver::new(&lp, settings).unwrap();
    solver.solve();

    let serial = solve_with(&lp, false, 0);
    assert_eq!(solver.solution.x, serial.solution.x);
}
