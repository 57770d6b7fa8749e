use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by dense matrix assembly operations.
pub enum DenseFormatError {
    /// Matrix dimension fields and data length are incompatible
    #[error("Matrix dimension fields and data length are incompatible")]
    IncompatibleDimension,
    /// A row has a different length than the first row
    #[error("Row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}
