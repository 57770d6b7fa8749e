// The infinity threshold is process wide, so these checks live in a
// test binary of their own.

use pivotal::{algebra::*, solver::*};

#[test]
fn test_infinity_threshold() {
    assert_eq!(get_infinity(), 1e20);

    // min -x  s.t.  x ≤ 10,  x ≤ 1e7 from the bounds
    let A = Matrix::from_rows(&[vec![1.]]).unwrap();
    let lp = LinearProgram::new(vec!['L'], vec![-1.], A)
        .with_rhs("RHS", vec![10.])
        .with_bounds("BND", vec![0.], vec![1e7]);

    let sf = StandardForm::build(&lp).unwrap();
    assert_eq!(sf.nrows(), 2);

    // a threshold below the bound drops the bound row
    set_infinity(1e6);
    let sf = StandardForm::build(&lp).unwrap();
    assert_eq!(sf.nrows(), 1);

    default_infinity();
    assert_eq!(get_infinity(), 1e20);
}
