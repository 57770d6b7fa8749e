#![allow(non_snake_case)]

use pivotal::{algebra::*, io::*, solver::*};

fn example_standard_form() -> StandardForm<f64> {
    let A = Matrix::from_rows(&[vec![1.5, -0.25, 2.], vec![0., 1., 0.125]]).unwrap();
    StandardForm::from_parts(A, vec![4., 3.5], vec![-1., -2., 0.5])
}

#[test]
fn test_lpfile_round_trip() {
    let sf = example_standard_form();

    let mut buffer = Vec::new();
    write_standard_form(&mut buffer, &sf).unwrap();
    let text = String::from_utf8(buffer.clone()).unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("2 3"));
    assert_eq!(lines.next(), Some("1.500000 -0.250000 2.000000"));
    assert_eq!(lines.next(), Some("0.000000 1.000000 0.125000"));
    assert_eq!(lines.next(), Some("4.000000 3.500000"));
    assert_eq!(lines.next(), Some("-1.000000 -2.000000 0.500000"));
    assert_eq!(lines.next(), None);

    let sf2: StandardForm<f64> = read_standard_form(buffer.as_slice()).unwrap();
    assert_eq!(sf2.A, sf.A);
    assert_eq!(sf2.b, sf.b);
    assert_eq!(sf2.c, sf.c);
}

#[test]
fn test_lpfile_six_digits() {
    let A = Matrix::from_rows(&[vec![1. / 3.]]).unwrap();
    let sf = StandardForm::from_parts(A, vec![1.], vec![-1.]);

    let mut buffer = Vec::new();
    write_standard_form(&mut buffer, &sf).unwrap();
    let sf2: StandardForm<f64> = read_standard_form(buffer.as_slice()).unwrap();
    assert_eq!(sf2.A[(0, 0)], 0.333333);
}

#[test]
fn test_lpfile_solve_from_file() {
    use std::io::{BufReader, Seek, SeekFrom, Write};

    // max 3x + 2y  s.t.  2x + y ≤ 8,  x + 3y ≤ 9
    let mut file = tempfile::tempfile().unwrap();
    writeln!(file, "2 2").unwrap();
    writeln!(file, "2 1").unwrap();
    writeln!(file, "1 3").unwrap();
    writeln!(file, "8 9").unwrap();
    writeln!(file, "-3 -2").unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let sf: StandardForm<f64> = read_standard_form(BufReader::new(file)).unwrap();
    let mut solver = DefaultSolver::from_standard_form(sf, DefaultSettings::default()).unwrap();
    solver.solve();

    assert_eq!(solver.solution.status, SolverStatus::Solved);
    assert!(solver.solution.x.dist(&[3., 2.]) <= 1e-9);
    assert!(f64::abs(solver.solution.obj_val - (-13.)) <= 1e-9);
}
