//! Plain text exchange format for problems in standard form.
//!
//! The layout is line oriented:
//!
//! ```text
//! m n
//! a_11 a_12 ... a_1n
//! ...
//! a_m1 a_m2 ... a_mn
//! b_1 ... b_m
//! c_1 ... c_n
//! ```
//!
//! where `m` is the number of rows of `A` and `n` the length of `c`.
//! Every value is written with 6 decimal digits.
#![allow(non_snake_case)]

use crate::algebra::*;
use crate::solver::StandardForm;
use itertools::Itertools;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Error type returned when reading or writing standard-form text files.
#[derive(Error, Debug)]
pub enum LpFileError {
    /// The underlying reader or writer failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A line could not be parsed
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    /// A line held the wrong number of values
    #[error("line {line}: expected {expected} values, found {found}")]
    Dimension {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Write `A`, `b` and `c` of a standard-form problem in the text format.
pub fn write_standard_form<T, W>(out: &mut W, problem: &StandardForm<T>) -> Result<(), LpFileError>
where
    T: FloatT,
    W: Write,
{
    let (m, n) = problem.A.size();
    writeln!(out, "{} {}", m, n)?;
    for row in problem.A.rows() {
        writeln!(out, "{}", format_values(row))?;
    }
    writeln!(out, "{}", format_values(&problem.b))?;
    writeln!(out, "{}", format_values(&problem.c))?;
    out.flush()?;
    Ok(())
}

/// Read a standard-form problem from the text format.
///
/// The returned problem maps every column onto its own variable, since
/// the file carries no record of how the columns were derived.
pub fn read_standard_form<T, R>(input: R) -> Result<StandardForm<T>, LpFileError>
where
    T: FloatT,
    R: BufRead,
{
    let mut lines = LineReader::new(input);

    let header = lines.next_line()?;
    let dims = header
        .split_whitespace()
        .map(|tok| {
            tok.parse::<usize>().map_err(|e| LpFileError::Parse {
                line: lines.lineno,
                message: format!("bad dimension '{tok}': {e}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if dims.len() != 2 {
        return Err(LpFileError::Dimension {
            line: lines.lineno,
            expected: 2,
            found: dims.len(),
        });
    }
    let (m, n) = (dims[0], dims[1]);
    if m.checked_mul(n).is_none() {
        return Err(LpFileError::Parse {
            line: lines.lineno,
            message: format!("dimensions {m} x {n} are too large"),
        });
    }

    // sized by what the file actually holds, not by its header
    let mut data = Vec::new();
    for _ in 0..m {
        data.extend(lines.next_values::<T>(n)?);
    }
    let A = Matrix { m, n, data };
    let b = lines.next_values::<T>(m)?;
    let c = lines.next_values::<T>(n)?;

    Ok(StandardForm::from_parts(A, b, c))
}

fn format_values<T: FloatT>(values: &[T]) -> String {
    values.iter().map(|v| format!("{:.6}", v)).join(" ")
}

struct LineReader<R> {
    lines: std::io::Lines<R>,
    lineno: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            lineno: 0,
        }
    }

    fn next_line(&mut self) -> Result<String, LpFileError> {
        self.lineno += 1;
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(LpFileError::Parse {
                line: self.lineno,
                message: "unexpected end of file".to_string(),
            }),
        }
    }

    fn next_values<T: FloatT>(&mut self, expected: usize) -> Result<Vec<T>, LpFileError> {
        let line = self.next_line()?;
        let lineno = self.lineno;
        let values = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .ok()
                    .and_then(T::from_f64)
                    .ok_or_else(|| LpFileError::Parse {
                        line: lineno,
                        message: format!("bad value '{tok}'"),
                    })
            })
            .collect::<Result<Vec<T>, _>>()?;

        if values.len() != expected {
            return Err(LpFileError::Dimension {
                line: lineno,
                expected,
                found: values.len(),
            });
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_format() {
        let A = Matrix::from_rows(&[vec![1.0, 0.5], vec![-2.0, 0.0]]).unwrap();
        let problem = StandardForm::from_parts(A, vec![4.0, -1.25], vec![-1.0, 3.0]);

        let mut out = Vec::new();
        write_standard_form(&mut out, &problem).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "2 2\n\
                        1.000000 0.500000\n\
                        -2.000000 0.000000\n\
                        4.000000 -1.250000\n\
                        -1.000000 3.000000\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_read_rejects_short_row() {
        let text = "2 2\n1 2\n3\n0 0\n1 1\n";
        let err = read_standard_form::<f64, _>(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LpFileError::Dimension {
                line: 3,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_read_rejects_garbage() {
        let text = "1 1\nx\n0\n1\n";
        let err = read_standard_form::<f64, _>(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LpFileError::Parse { line: 2, .. }));

        let err = read_standard_form::<f64, _>("1 1\n1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LpFileError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_read_rejects_huge_header() {
        let text = format!("{0} {0}\n1\n", usize::MAX);
        let err = read_standard_form::<f64, _>(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LpFileError::Parse { line: 1, .. }));

        // fits in usize, but the file runs out long before
        let err = read_standard_form::<f64, _>("100000 3\n1 2 3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LpFileError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_read_empty_constraints() {
        // no rows: the b line is present but empty
        let text = "0 2\n\n1.5 -2\n";
        let problem = read_standard_form::<f64, _>(text.as_bytes()).unwrap();
        assert_eq!(problem.A.size(), (0, 2));
        assert!(problem.b.is_empty());
        assert_eq!(problem.c, vec![1.5, -2.0]);
    }
}
