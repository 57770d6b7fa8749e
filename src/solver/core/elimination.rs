//! Row elimination and ratio test kernels, serial and multithreaded.
//!
//! Every row of the tableau is updated independently against the
//! normalised pivot row, so the elimination pass is a parallel-for over
//! rows.  The ratio test is a min-reduction on a unique tie key per row,
//! which makes the result independent of how the reduction is split
//! across threads.

use super::SettingsError;
use crate::algebra::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "parallel")] {
        use rayon::prelude::*;
        use std::sync::Arc;
    }
}

/// Rows taking part in a ratio test, and how ties between them are broken.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RatioRows<'a> {
    /// every row, ties to the lowest row index
    All,
    /// rows with `rhs >= -eps`, ties to the lowest basic column
    Feasible { basis: &'a [usize] },
}

impl RatioRows<'_> {
    #[inline]
    fn admits<T: FloatT>(&self, rhs: T, eps: T) -> bool {
        match self {
            RatioRows::All => true,
            RatioRows::Feasible { .. } => rhs >= -eps,
        }
    }

    #[inline]
    fn tie_key(&self, row: usize) -> usize {
        match self {
            RatioRows::All => row,
            RatioRows::Feasible { basis } => basis[row],
        }
    }
}

/// Execution strategy for the pivot step.
#[derive(Debug, Clone, Default)]
pub enum Elimination {
    /// single threaded
    #[default]
    Serial,
    /// rayon parallel-for over rows.  With no pool the global
    /// rayon pool is used.  Tableaus with fewer than `min_rows`
    /// rows fall back to the serial kernels.
    #[cfg(feature = "parallel")]
    Parallel {
        pool: Option<Arc<rayon::ThreadPool>>,
        min_rows: usize,
    },
}

impl Elimination {
    /// Choose an engine.  `max_threads == 0` selects the global pool.
    /// Without the `parallel` feature this is always [`Elimination::Serial`].
    #[allow(unused_variables)]
    pub fn new(parallel: bool, max_threads: usize, min_rows: usize) -> Result<Self, SettingsError> {
        cfg_if::cfg_if! {
            if #[cfg(feature = "parallel")] {
                if !parallel {
                    return Ok(Elimination::Serial);
                }
                let pool = match max_threads {
                    0 => None,
                    n => {
                        let pool = rayon::ThreadPoolBuilder::new()
                            .num_threads(n)
                            .build()
                            .map_err(|e| SettingsError::ThreadPool(e.to_string()))?;
                        Some(Arc::new(pool))
                    }
                };
                Ok(Elimination::Parallel { pool, min_rows })
            } else {
                Ok(Elimination::Serial)
            }
        }
    }

    pub fn is_parallel(&self) -> bool {
        !matches!(self, Elimination::Serial)
    }

    /// number of worker threads available to the engine
    pub fn threads(&self) -> usize {
        match self {
            Elimination::Serial => 1,
            #[cfg(feature = "parallel")]
            Elimination::Parallel { pool, .. } => match pool {
                Some(pool) => pool.current_num_threads(),
                None => rayon::current_num_threads(),
            },
        }
    }

    /// Zero column `c` in every row except `r`, given that row `r`
    /// has already been normalised so that `matrix[(r, c)] == 1`.
    pub(crate) fn eliminate<T: FloatT>(&self, matrix: &mut Matrix<T>, r: usize, c: usize) {
        let width = matrix.ncols();
        let pivot_row = matrix.row(r).to_vec();

        match self {
            Elimination::Serial => eliminate_serial(matrix.data_mut(), width, &pivot_row, r, c),
            #[cfg(feature = "parallel")]
            Elimination::Parallel { pool, min_rows } => {
                if matrix.nrows() < *min_rows {
                    eliminate_serial(matrix.data_mut(), width, &pivot_row, r, c);
                    return;
                }
                let data = matrix.data_mut();
                match pool {
                    Some(pool) => {
                        pool.install(|| eliminate_parallel(data, width, &pivot_row, r, c))
                    }
                    None => eliminate_parallel(data, width, &pivot_row, r, c),
                }
            }
        }
    }

    /// Row with minimum `rhs / a_ic` over the first `nrows` rows admitted
    /// by `rows` for which `a_ic > eps`.  Ties are broken by the key
    /// `rows` assigns to each row.
    pub(crate) fn min_ratio<T: FloatT>(
        &self,
        matrix: &Matrix<T>,
        nrows: usize,
        c: usize,
        eps: T,
        rows: RatioRows<'_>,
    ) -> Option<(usize, T)> {
        let rhs_col = matrix.ncols() - 1;
        let candidate = |i: usize| -> Option<(T, usize, usize)> {
            let a = matrix[(i, c)];
            let rhs = matrix[(i, rhs_col)];
            if a > eps && rows.admits(rhs, eps) {
                Some((rhs / a, rows.tie_key(i), i))
            } else {
                None
            }
        };

        let best = match self {
            Elimination::Serial => (0..nrows).filter_map(candidate).reduce(lower_ratio),
            #[cfg(feature = "parallel")]
            Elimination::Parallel { pool, min_rows } => {
                if nrows < *min_rows {
                    (0..nrows).filter_map(candidate).reduce(lower_ratio)
                } else {
                    let op = || {
                        (0..nrows)
                            .into_par_iter()
                            .filter_map(candidate)
                            .reduce_with(lower_ratio)
                    };
                    match pool {
                        Some(pool) => pool.install(op),
                        None => op(),
                    }
                }
            }
        };
        best.map(|(ratio, _, i)| (i, ratio))
    }
}

// lexicographic minimum on (ratio, key).  Keys are unique, so this is
// associative and commutative and any reduction tree gives the same answer
fn lower_ratio<T: FloatT>(x: (T, usize, usize), y: (T, usize, usize)) -> (T, usize, usize) {
    if y.0 < x.0 || (y.0 == x.0 && y.1 < x.1) {
        y
    } else {
        x
    }
}

#[inline]
fn eliminate_row<T: FloatT>(row: &mut [T], pivot_row: &[T], c: usize) {
    let f = row[c];
    if f != T::zero() {
        row.axpby(-f, pivot_row, T::one());
        row[c] = T::zero();
    }
}

fn eliminate_serial<T: FloatT>(data: &mut [T], width: usize, pivot_row: &[T], r: usize, c: usize) {
    for (i, row) in data.chunks_mut(width).enumerate() {
        if i != r {
            eliminate_row(row, pivot_row, c);
        }
    }
}

#[cfg(feature = "parallel")]
fn eliminate_parallel<T: FloatT>(data: &mut [T], width: usize, pivot_row: &[T], r: usize, c: usize) {
    data.par_chunks_mut(width)
        .enumerate()
        .for_each(|(i, row)| {
            if i != r {
                eliminate_row(row, pivot_row, c);
            }
        });
}
