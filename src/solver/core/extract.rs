//! Reading the basic solution out of a tableau.

use super::Tableau;
use crate::algebra::*;

/// If column `col` is a unit vector with its `1` in a constraint row,
/// return that row.  All rows, the objective row included, are checked
/// to within the tableau tolerance.
pub fn is_basic<T: FloatT>(tableau: &Tableau<T>, col: usize) -> Option<usize> {
    let eps = tableau.eps();
    let mut one_row = None;

    for (i, &v) in tableau.matrix().col(col).enumerate() {
        if T::abs(v - T::one()) <= eps {
            if one_row.is_some() {
                return None;
            }
            one_row = Some(i);
        } else if T::abs(v) > eps {
            return None;
        }
    }

    one_row.filter(|&i| i < tableau.nrows())
}

/// Values of the structural columns at the current basis.  Basic columns
/// take the RHS of their row, non-basic columns are zero, and each row's
/// RHS goes to at most one column.
pub fn get_solution<T: FloatT>(tableau: &Tableau<T>) -> Vec<T> {
    let mut x = vec![T::zero(); tableau.nvars()];
    let mut claimed = vec![false; tableau.nrows()];

    for (col, xj) in x.iter_mut().enumerate() {
        if let Some(row) = is_basic(tableau, col) {
            if !claimed[row] {
                claimed[row] = true;
                *xj = tableau.rhs(row);
            }
        }
    }
    x
}
