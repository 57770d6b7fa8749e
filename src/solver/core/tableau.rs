#![allow(non_snake_case)]

use super::{Elimination, PivotError, PivotRule, RatioRows};
use crate::algebra::*;
use crate::solver::StandardForm;

/// Dense simplex tableau for `max objective'x` s.t. `Ax ≤ b`, `x ≥ 0`.
///
/// Layout, for `m` constraints and `n` variables:
///
/// ```text
///           n columns   m columns   1
///        [     A     |     I     |  b  ]   m rows
///        [ objective |     0     |  0  ]   objective row
/// ```
///
/// The identity block holds explicit slack columns, so every basic
/// column is a unit vector and the initial basis is the slack basis.
/// A positive objective row entry is a column whose entry into the
/// basis increases the objective.  The last entry of the objective row
/// is minus the current objective value.
#[derive(Debug, Clone)]
pub struct Tableau<T> {
    matrix: Matrix<T>,
    basis: Vec<usize>,
    m: usize,
    n: usize,
    eps: T,
}

impl<T> Tableau<T>
where
    T: FloatT,
{
    /// Stack `[A | I | b]` over `[objective | 0 | 0]`.
    ///
    /// # Panics
    /// Panics if `A` is not `b.len()` by `objective.len()`.
    pub fn new(objective: &[T], A: &Matrix<T>, b: &[T], eps: T) -> Self {
        let (m, n) = A.size();
        assert_eq!(b.len(), m);
        assert_eq!(objective.len(), n);

        let width = n + m + 1;
        let mut matrix = Matrix::zeros((m + 1, width));

        for i in 0..m {
            let row = matrix.row_mut(i);
            row[..n].copy_from(A.row(i));
            row[n + i] = T::one();
            row[n + m] = b[i];
        }
        matrix.row_mut(m)[..n].copy_from(objective);

        let basis = (n..n + m).collect();

        Self {
            matrix,
            basis,
            m,
            n,
            eps,
        }
    }

    /// Tableau maximising `-c'x`, i.e. minimising the standard-form cost.
    pub fn from_standard_form(problem: &StandardForm<T>, eps: T) -> Self {
        let mut objective = problem.c.clone();
        objective.negate();
        Self::new(&objective, &problem.A, &problem.b, eps)
    }

    /// number of constraint rows
    pub fn nrows(&self) -> usize {
        self.m
    }

    /// number of structural (non-slack) columns
    pub fn nvars(&self) -> usize {
        self.n
    }

    /// number of columns excluding the RHS
    pub fn width(&self) -> usize {
        self.n + self.m
    }

    pub fn matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    /// basic column of every constraint row
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    pub fn eps(&self) -> T {
        self.eps
    }

    pub fn rhs(&self, i: usize) -> T {
        self.matrix[(i, self.width())]
    }

    /// reduced costs, RHS excluded
    pub fn objective_row(&self) -> &[T] {
        &self.matrix.row(self.m)[..self.width()]
    }

    /// current value of `objective'x`
    pub fn objective_value(&self) -> T {
        -self.matrix[(self.m, self.width())]
    }

    /// true if some reduced cost exceeds the tolerance
    pub fn is_improvable(&self) -> bool {
        self.objective_row().iter().any(|&v| v > self.eps)
    }

    /// true if the current basic solution has no negative RHS
    pub fn is_feasible(&self) -> bool {
        (0..self.m).all(|i| self.rhs(i) >= -self.eps)
    }

    /// Ratio test on column `c`.  `None` if no row limits the step.
    pub fn ratio_test(&self, c: usize, engine: &Elimination) -> Option<usize> {
        engine
            .min_ratio(&self.matrix, self.m, c, self.eps, RatioRows::All)
            .map(|(r, _)| r)
    }

    /// Pivot position for the next optimisation step, or `None`
    /// if the tableau is optimal.
    pub fn select_pivot<R>(
        &self,
        rule: &R,
        engine: &Elimination,
    ) -> Result<Option<(usize, usize)>, PivotError>
    where
        R: PivotRule<T>,
    {
        let Some(c) = rule.entering_column(self.objective_row()) else {
            return Ok(None);
        };
        match self.ratio_test(c, engine) {
            Some(r) => Ok(Some((r, c))),
            None => Err(PivotError::Unbounded { column: c }),
        }
    }

    /// Pivot position for the next feasibility restoring step, or
    /// `None` if the basic solution is already feasible.
    ///
    /// Each step is a primal simplex step that raises the RHS of the
    /// first infeasible row `r` while keeping every feasible row
    /// feasible.  The entering column is the first one with a negative
    /// entry in row `r`.  If a feasible row limits the step before row
    /// `r` reaches zero, that row leaves, with ties going to the lowest
    /// basic column.  Rows before `r` are feasible and stay feasible, so
    /// `r` only changes once it is restored, and Bland's ordering rules
    /// out cycling in between.
    pub fn feasibility_pivot(
        &self,
        engine: &Elimination,
    ) -> Result<Option<(usize, usize)>, PivotError> {
        let eps = self.eps;

        let Some(r) = (0..self.m).find(|&i| self.rhs(i) < -eps) else {
            return Ok(None);
        };

        let row = &self.matrix.row(r)[..self.width()];
        // every entry nonnegative with a negative RHS: no x ≥ 0 fits this row
        let Some(c) = row.iter().position(|&v| v < -eps) else {
            return Err(PivotError::Infeasible { row: r });
        };

        // step that brings row r to zero
        let theta = self.rhs(r) / row[c];
        let feasible = RatioRows::Feasible { basis: &self.basis };
        match engine.min_ratio(&self.matrix, self.m, c, eps, feasible) {
            Some((i, ratio)) if ratio < theta => Ok(Some((i, c))),
            _ => Ok(Some((r, c))),
        }
    }

    /// Gauss-Jordan pivot on `(r, c)`.  Column `c` becomes the unit
    /// vector `e_r` and enters the basis in row `r`.
    pub fn pivot(&mut self, r: usize, c: usize, engine: &Elimination) {
        debug_assert!(r < self.m && c < self.width());

        let p = self.matrix[(r, c)];
        debug_assert!(p != T::zero());

        let row = self.matrix.row_mut(r);
        row.scale(p.recip());
        row[c] = T::one();

        engine.eliminate(&mut self.matrix, r, c);
        self.basis[r] = c;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::core::pivot_rules::*;

    fn first() -> PivotRules<f64> {
        PivotRules::from_name("first", 1e-9).unwrap()
    }

    #[test]
    fn test_layout() {
        let A = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let t = Tableau::new(&[5.0, 6.0], &A, &[7.0, 8.0], 1e-9);

        assert_eq!(t.matrix().size(), (3, 5));
        assert_eq!(t.matrix().row(0), &[1.0, 2.0, 1.0, 0.0, 7.0]);
        assert_eq!(t.matrix().row(1), &[3.0, 4.0, 0.0, 1.0, 8.0]);
        assert_eq!(t.matrix().row(2), &[5.0, 6.0, 0.0, 0.0, 0.0]);
        assert_eq!(t.basis(), &[2, 3]);
        assert_eq!(t.objective_value(), 0.0);
    }

    #[test]
    fn test_two_pivots_to_optimum() {
        // max x + y, x ≤ 4, y ≤ 4
        let A = Matrix::identity(2);
        let mut t = Tableau::new(&[1.0, 1.0], &A, &[4.0, 4.0], 1e-9);
        let engine = Elimination::Serial;

        assert!(t.is_improvable());
        assert_eq!(t.select_pivot(&first(), &engine).unwrap(), Some((0, 0)));
        t.pivot(0, 0, &engine);
        assert_eq!(t.objective_row(), &[0.0, 1.0, -1.0, 0.0]);
        assert_eq!(t.objective_value(), 4.0);

        assert_eq!(t.select_pivot(&first(), &engine).unwrap(), Some((1, 1)));
        t.pivot(1, 1, &engine);

        assert!(!t.is_improvable());
        assert_eq!(t.select_pivot(&first(), &engine).unwrap(), None);
        assert_eq!(t.objective_value(), 8.0);
        assert_eq!(t.basis(), &[0, 1]);
    }

    #[test]
    fn test_unbounded_column() {
        // max x, -x ≤ 1
        let A = Matrix::from_rows(&[vec![-1.0]]).unwrap();
        let t = Tableau::new(&[1.0], &A, &[1.0], 1e-9);
        let err = t.select_pivot(&first(), &Elimination::Serial).unwrap_err();
        assert_eq!(err, PivotError::Unbounded { column: 0 });
    }

    #[test]
    fn test_feasibility_pivot() {
        // x ≤ 1 and -x ≤ -2 cannot both hold
        let A = Matrix::from_rows(&[vec![1.0], vec![-1.0]]).unwrap();
        let mut t = Tableau::new(&[0.0], &A, &[1.0, -2.0], 1e-9);
        let engine = Elimination::Serial;
        assert!(!t.is_feasible());

        // the feasible first row limits the step
        assert_eq!(t.feasibility_pivot(&engine).unwrap(), Some((0, 0)));
        t.pivot(0, 0, &engine);
        assert_eq!(t.rhs(1), -1.0);

        let err = t.feasibility_pivot(&engine).unwrap_err();
        assert_eq!(err, PivotError::Infeasible { row: 1 });
    }

    #[test]
    fn test_feasibility_restored() {
        // -x ≤ -2, x ≤ 5
        let A = Matrix::from_rows(&[vec![-1.0], vec![1.0]]).unwrap();
        let mut t = Tableau::new(&[-1.0], &A, &[-2.0, 5.0], 1e-9);
        let engine = Elimination::Serial;

        assert_eq!(t.feasibility_pivot(&engine).unwrap(), Some((0, 0)));
        t.pivot(0, 0, &engine);
        assert!(t.is_feasible());
        assert_eq!(t.feasibility_pivot(&engine).unwrap(), None);
        assert_eq!(t.rhs(0), 2.0);
        assert_eq!(t.rhs(1), 3.0);
        assert_eq!(t.objective_value(), -2.0);
    }

    #[test]
    fn test_feasibility_pivot_keeps_first_infeasible_row() {
        // -x - y ≤ -1, -2x ≤ -6, y ≤ 3
        let A = Matrix::from_rows(&[vec![-1.0, -1.0], vec![-2.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let mut t = Tableau::new(&[0.0, 0.0], &A, &[-1.0, -6.0, 3.0], 1e-9);
        let engine = Elimination::Serial;

        // row 0 is worked on first, although row 1 is more negative
        assert_eq!(t.feasibility_pivot(&engine).unwrap(), Some((0, 0)));
        t.pivot(0, 0, &engine);
        assert_eq!(t.rhs(0), 1.0);
        assert_eq!(t.rhs(1), -4.0);

        // row 1 now reads 2y - 2s0 ≤ -4, and s0 enters
        assert_eq!(t.feasibility_pivot(&engine).unwrap(), Some((1, 2)));
        t.pivot(1, 2, &engine);
        assert!(t.is_feasible());
        assert_eq!(t.feasibility_pivot(&engine).unwrap(), None);
        assert_eq!(t.basis(), &[0, 2, 4]);
    }
}
