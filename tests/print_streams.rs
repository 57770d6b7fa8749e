#![allow(non_snake_case)]

use pivotal::{algebra::*, io::ConfigurablePrintTarget, solver::*};

fn test_print_solver() -> DefaultSolver<f64> {
    // min x  s.t.  x ≥ 1, which takes a phase one pivot
    let A = Matrix::identity(1);
    let lp = LinearProgram::new(vec!['G'], vec![1.], A).with_rhs("RHS", vec![1.]);
    let settings = DefaultSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    DefaultSolver::new(&lp, settings).unwrap()
}

#[test]
fn test_print_to_stdout() {
    let mut solver = test_print_solver();
    solver.print_to_stdout();
    solver.solve();
}

#[test]
fn test_print_to_buffer() {
    let mut solver = test_print_solver();
    solver.print_to_buffer();
    solver.solve();
    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("pivotal v"));
    assert!(result.contains("tableau       = 2 x 3"));
    assert!(result.contains("pivot rule = first"));
    assert!(result.contains("Terminated with status = Solved"));
    assert!(result.contains("pivots = 1 (phase one 1)"));
}

#[test]
fn test_print_silent() {
    let mut solver = test_print_solver();
    solver.settings.verbose = false;
    solver.print_to_buffer();
    solver.solve();
    let result = solver.get_print_buffer().unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_print_buffer_not_configured() {
    let mut solver = test_print_solver();
    solver.print_to_sink();
    assert!(solver.get_print_buffer().is_err());
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    solver.print_to_file(file.into_file());
    solver.solve();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("pivotal v"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    solver.print_to_stream(stream);
    solver.solve();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("pivotal v"));
}

#[test]
fn test_print_to_sink() {
    let mut solver = test_print_solver();
    solver.print_to_sink();
    solver.solve();
    // no output
}
