#![allow(non_snake_case)]

use super::*;
use crate::solver::utils::infbounds::{is_minus_infinite, is_plus_infinite};

// Conversion runs in two passes.  The first pass classifies every
// relation and every variable and so fixes the final row and column
// counts.  The second pass fills a matrix allocated at its final size.
//
// Per variable the substitution (split or shift) is decided before its
// bound rows are written, so bound rows are in substituted coordinates.

struct Plan<T> {
    relations: Vec<Relation>,
    columns: ColumnMap<T>,
    bound_rows: Vec<BoundRow<T>>,
    nrows: usize,
}

// one enforcement row appended after the constraint rows
enum BoundRow<T> {
    // -x_i ≤ -lower
    Lower { var: usize, lower: T },
    // x_i ≤ upper, in substituted coordinates
    Upper { var: usize, upper: T },
}

impl<T> StandardForm<T>
where
    T: FloatT,
{
    /// Convert `lp` to standard form.
    ///
    /// Constraint rows come first, in input order: `L` rows are copied,
    /// `G` rows negated and `E` rows emitted as the row followed by its
    /// negation.  Bound rows follow in variable order, a lower bound row
    /// `-x_i ≤ -l` for `l > 0` and then an upper bound row for finite `u`.
    ///
    /// Variables without a lower bound are split into `x⁺ - x⁻` with the
    /// negative part appended as a new column.  Variables with a negative
    /// finite lower bound are shifted to `x' = x - l`.
    pub fn build(lp: &LinearProgram<T>) -> Result<Self, ProblemError> {
        lp.check_format()?;
        let plan = plan(lp)?;
        Ok(fill(lp, plan))
    }
}

fn plan<T: FloatT>(lp: &LinearProgram<T>) -> Result<Plan<T>, ProblemError> {
    let n = lp.nvars();

    let relations = lp
        .relations
        .iter()
        .enumerate()
        .map(|(row, &code)| {
            Relation::from_code(code).ok_or(ProblemError::UnsupportedRelation { row, code })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut columns = ColumnMap::with_capacity(n);
    let mut bound_rows = Vec::new();

    for var in 0..n {
        let (lower, upper) = lp.bounds_of(var);
        let no_lower = is_minus_infinite(lower);
        let no_upper = is_plus_infinite(upper);

        if is_plus_infinite(lower) || is_minus_infinite(upper) || (!no_lower && !no_upper && lower > upper) {
            return Err(ProblemError::InconsistentBounds { var });
        }

        if no_lower {
            columns.push_split();
        } else if lower < T::zero() {
            columns.push_shifted(lower);
        } else {
            columns.push_direct();
        }

        if !no_lower && lower > T::zero() {
            bound_rows.push(BoundRow::Lower { var, lower });
        }
        if !no_upper {
            bound_rows.push(BoundRow::Upper { var, upper });
        }
    }

    let nrows = relations.iter().map(|r| r.row_count()).sum::<usize>() + bound_rows.len();

    Ok(Plan {
        relations,
        columns,
        bound_rows,
        nrows,
    })
}

fn fill<T: FloatT>(lp: &LinearProgram<T>, plan: Plan<T>) -> StandardForm<T> {
    let Plan {
        relations,
        columns,
        bound_rows,
        nrows,
    } = plan;

    let ncols = columns.ncols();
    let mut A = Matrix::zeros((nrows, ncols));
    let mut b = Vec::with_capacity(nrows);
    let b_in = lp.rhs_vector();

    // cost and objective offset
    let mut c = vec![T::zero(); ncols];
    let mut objective_offset = T::zero();
    for (var, cols) in columns.iter().enumerate() {
        let ci = lp.c[var];
        match *cols {
            VariableColumns::Direct { col } => c[col] = ci,
            VariableColumns::Shifted { col, offset } => {
                c[col] = ci;
                objective_offset += ci * offset;
            }
            VariableColumns::Split { pos, neg } => {
                c[pos] = ci;
                c[neg] = -ci;
            }
        }
    }

    // constraint rows
    let mut out = 0;
    for (i, relation) in relations.iter().enumerate() {
        let mut rhs = b_in[i];
        {
            let row = A.row_mut(out);
            for (var, cols) in columns.iter().enumerate() {
                let a = lp.A[(i, var)];
                match *cols {
                    VariableColumns::Direct { col } => row[col] = a,
                    VariableColumns::Shifted { col, offset } => {
                        row[col] = a;
                        rhs -= offset * a;
                    }
                    VariableColumns::Split { pos, neg } => {
                        row[pos] = a;
                        row[neg] = -a;
                    }
                }
            }
        }

        match relation {
            Relation::LessEqual => {
                b.push(rhs);
                out += 1;
            }
            Relation::GreaterEqual => {
                A.negate_row(out);
                b.push(-rhs);
                out += 1;
            }
            Relation::Equal => {
                let (src, dst) = A.data.split_at_mut((out + 1) * ncols);
                let src = &src[out * ncols..];
                dst[..ncols].copy_from(src).negate();
                b.push(rhs);
                b.push(-rhs);
                out += 2;
            }
        }
    }

    // bound rows
    for bound in bound_rows {
        match bound {
            BoundRow::Lower { var, lower } => {
                let col = columns.get(var).col();
                A[(out, col)] = -T::one();
                b.push(-lower);
            }
            BoundRow::Upper { var, upper } => match *columns.get(var) {
                VariableColumns::Direct { col } => {
                    A[(out, col)] = T::one();
                    b.push(upper);
                }
                VariableColumns::Shifted { col, offset } => {
                    A[(out, col)] = T::one();
                    b.push(upper - offset);
                }
                VariableColumns::Split { pos, neg } => {
                    A[(out, pos)] = T::one();
                    A[(out, neg)] = -T::one();
                    b.push(upper);
                }
            },
        }
        out += 1;
    }
    debug_assert_eq!(out, nrows);

    StandardForm {
        A,
        b,
        c,
        objective_offset,
        c_orig: lp.c.clone(),
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lp(relations: &str, c: Vec<f64>, rows: &[Vec<f64>], b: Vec<f64>) -> LinearProgram<f64> {
        let A = Matrix::from_rows(rows).unwrap();
        LinearProgram::new(relations.chars().collect(), c, A).with_rhs("RHS", b)
    }

    #[test]
    fn test_relations() {
        let problem = lp(
            "LGE",
            vec![1.0, 2.0],
            &[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
            vec![1.0, 2.0, 3.0],
        );
        let sf = StandardForm::build(&problem).unwrap();

        assert_eq!(sf.A.size(), (4, 2));
        assert_eq!(sf.A.row(0), &[1.0, 2.0]);
        assert_eq!(sf.A.row(1), &[-3.0, -4.0]);
        assert_eq!(sf.A.row(2), &[5.0, 6.0]);
        assert_eq!(sf.A.row(3), &[-5.0, -6.0]);
        assert_eq!(sf.b, vec![1.0, -2.0, 3.0, -3.0]);
        assert_eq!(sf.c, vec![1.0, 2.0]);
        assert_eq!(sf.objective_offset, 0.0);
    }

    #[test]
    fn test_lowercase_and_bad_relation() {
        let problem = lp("l", vec![1.0], &[vec![1.0]], vec![1.0]);
        assert!(StandardForm::build(&problem).is_ok());

        let problem = lp("LN", vec![1.0], &[vec![1.0], vec![2.0]], vec![1.0, 1.0]);
        let err = StandardForm::build(&problem).unwrap_err();
        assert!(matches!(
            err,
            ProblemError::UnsupportedRelation { row: 1, code: 'N' }
        ));
    }

    #[test]
    fn test_positive_lower_bound_row() {
        let problem = lp("", vec![1.0], &[], vec![]);
        // zero-row matrix still needs one column
        let problem = LinearProgram {
            A: Matrix::zeros((0, 1)),
            ..problem
        }
        .with_bounds("BND", vec![2.0], vec![f64::INFINITY]);

        let sf = StandardForm::build(&problem).unwrap();
        assert_eq!(sf.A.size(), (1, 1));
        assert_eq!(sf.A.row(0), &[-1.0]);
        assert_eq!(sf.b, vec![-2.0]);
    }

    #[test]
    fn test_free_variable_split() {
        // x0 free, x1 default
        let problem = lp("L", vec![3.0, 1.0], &[vec![2.0, 1.0]], vec![4.0])
            .with_bounds("BND", vec![f64::NEG_INFINITY, 0.0], vec![f64::INFINITY, 1e30]);
        let sf = StandardForm::build(&problem).unwrap();

        assert_eq!(sf.A.size(), (1, 3));
        assert_eq!(sf.A.row(0), &[2.0, 1.0, -2.0]);
        assert_eq!(sf.c, vec![3.0, 1.0, -3.0]);
        assert_eq!(*sf.columns.get(0), VariableColumns::Split { pos: 0, neg: 2 });
        assert_eq!(sf.recover(&[1.0, 0.5, 3.0]), vec![-2.0, 0.5]);
    }

    #[test]
    fn test_negative_lower_shift() {
        // x0 in [-2, 3]
        let problem = lp("L", vec![5.0], &[vec![4.0]], vec![1.0])
            .with_bounds("BND", vec![-2.0], vec![3.0]);
        let sf = StandardForm::build(&problem).unwrap();

        assert_eq!(sf.A.size(), (2, 1));
        // 4(x' - 2) ≤ 1  =>  4x' ≤ 9
        assert_eq!(sf.b, vec![9.0, 5.0]);
        assert_eq!(sf.A.row(1), &[1.0]);
        assert_eq!(sf.objective_offset, -10.0);
        assert_eq!(sf.recover(&[1.0]), vec![-1.0]);
    }

    #[test]
    fn test_split_with_finite_upper() {
        // x0 in (-inf, 2]
        let problem = lp("L", vec![1.0], &[vec![1.0]], vec![5.0])
            .with_bounds("BND", vec![f64::NEG_INFINITY], vec![2.0]);
        let sf = StandardForm::build(&problem).unwrap();

        assert_eq!(sf.A.size(), (2, 2));
        assert_eq!(sf.A.row(1), &[1.0, -1.0]);
        assert_eq!(sf.b, vec![5.0, 2.0]);
    }

    #[test]
    fn test_bound_rows_follow_constraints_in_variable_order() {
        let problem = lp("E", vec![1.0, 1.0], &[vec![1.0, 1.0]], vec![3.0])
            .with_bounds("BND", vec![1.0, 0.0], vec![4.0, 2.0]);
        let sf = StandardForm::build(&problem).unwrap();

        assert_eq!(sf.A.size(), (5, 2));
        assert_eq!(sf.A.row(2), &[-1.0, 0.0]);
        assert_eq!(sf.A.row(3), &[1.0, 0.0]);
        assert_eq!(sf.A.row(4), &[0.0, 1.0]);
        assert_eq!(sf.b, vec![3.0, -3.0, -1.0, 4.0, 2.0]);
    }

    #[test]
    fn test_structural_errors() {
        let mut problem = lp("L", vec![1.0], &[vec![1.0]], vec![1.0]);
        problem.rhs.insert("RHS2".to_string(), vec![2.0]);
        assert!(matches!(
            StandardForm::build(&problem),
            Err(ProblemError::MultipleRhs(2))
        ));

        let problem = lp("L", vec![1.0], &[vec![1.0]], vec![1.0])
            .with_bounds("B1", vec![0.0], vec![1.0])
            .with_bounds("B2", vec![0.0], vec![1.0]);
        assert!(matches!(
            StandardForm::build(&problem),
            Err(ProblemError::MultipleBoundSets(2))
        ));

        let problem = lp("LL", vec![1.0], &[vec![1.0]], vec![1.0]);
        assert!(matches!(
            StandardForm::build(&problem),
            Err(ProblemError::IncompatibleDimension)
        ));

        let problem = lp("L", vec![1.0], &[vec![1.0]], vec![1.0])
            .with_bounds("BND", vec![2.0], vec![1.0]);
        assert!(matches!(
            StandardForm::build(&problem),
            Err(ProblemError::InconsistentBounds { var: 0 })
        ));

        let problem = lp("L", vec![f64::NAN], &[vec![1.0]], vec![1.0]);
        assert!(matches!(
            StandardForm::build(&problem),
            Err(ProblemError::NonFiniteData("c"))
        ));
    }

    #[test]
    fn test_missing_rhs_is_zero() {
        let A = Matrix::from_rows(&[vec![1.0, -1.0]]).unwrap();
        let problem = LinearProgram::new(vec!['G'], vec![1.0, 1.0], A);
        let sf = StandardForm::build(&problem).unwrap();
        assert_eq!(sf.b, vec![0.0]);
        assert_eq!(sf.A.row(0), &[-1.0, 1.0]);
    }
}
