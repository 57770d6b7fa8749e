use super::{DenseFormatError, FloatT, VectorMath};
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

// The tableau and the constraint data are stored row-major.  Pivot
// elimination touches every row against one fixed pivot row, so whole
// rows are the unit of work, both for the serial `axpby` and for
// handing disjoint rows to worker threads.

/// Dense matrix in row-major format
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// matrix entries, row after row.  Length `m*n`.
    pub data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        for i in 0..n {
            mat[(i, i)] = T::one();
        }
        mat
    }

    /// Create a matrix from row-major data.
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Result<Self, DenseFormatError> {
        let (m, n) = size;
        if m * n != src.len() {
            return Err(DenseFormatError::IncompatibleDimension);
        }
        Ok(Self {
            m,
            n,
            data: src.to_vec(),
        })
    }

    /// Create a matrix from a list of rows, which must all have equal length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, DenseFormatError> {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(m * n);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(DenseFormatError::RaggedRow {
                    row,
                    expected: n,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self { m, n, data })
    }

    pub fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    pub fn nrows(&self) -> usize {
        self.m
    }

    pub fn ncols(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.m == 0 || self.n == 0
    }

    #[inline]
    pub fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.n + idx.1
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.m).map(move |i| self.row(i))
    }

    /// Strided iterator over the entries of column `j`
    pub fn col(&self, j: usize) -> impl Iterator<Item = &T> {
        assert!(j < self.n);
        self.data.iter().skip(j).step_by(self.n)
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Negate every entry in row `i`
    pub fn negate_row(&mut self, i: usize) {
        self.row_mut(i).negate();
    }

    pub fn is_finite(&self) -> bool {
        self.data.is_finite()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_row_column_access() {
        let matrix = Matrix::new_from_slice((2, 3), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

        assert_eq!(matrix.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(matrix.row(1), &[4.0, 5.0, 6.0]);

        assert_eq!(matrix.col(0).cloned().collect::<Vec<_>>(), &[1.0, 4.0]);
        assert_eq!(matrix.col(2).cloned().collect::<Vec<_>>(), &[3.0, 6.0]);
        assert_eq!(matrix[(1, 1)], 5.0);
    }

    #[test]
    fn test_from_rows() {
        let matrix = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(matrix.size(), (2, 2));
        assert_eq!(matrix.data, vec![1.0, 2.0, 3.0, 4.0]);

        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            DenseFormatError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );

        let empty = Matrix::<f64>::from_rows(&[]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_identity_and_negate() {
        let mut matrix = Matrix::<f64>::identity(2);
        matrix.negate_row(1);
        assert_eq!(matrix.data, vec![1.0, 0.0, 0.0, -1.0]);
        assert!(Matrix::<f64>::new_from_slice((2, 2), &[1.0]).is_err());
    }
}
