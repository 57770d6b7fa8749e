//! Entering column selection rules.

use super::SettingsError;
use crate::algebra::*;
use enum_dispatch::*;

/// Choose the entering column from the objective row.
///
/// The objective row holds reduced costs with the RHS entry removed.
/// A rule returns `None` exactly when no entry exceeds its tolerance,
/// i.e. when the tableau is optimal.
#[enum_dispatch]
pub trait PivotRule<T>
where
    T: FloatT,
{
    fn entering_column(&self, objective: &[T]) -> Option<usize>;

    /// Name of the rule as used in settings.
    fn name(&self) -> &'static str;
}

/// Lowest index column with a positive reduced cost (Bland's rule).
#[derive(Debug, Clone)]
pub struct FirstPositive<T> {
    eps: T,
}

impl<T: FloatT> FirstPositive<T> {
    pub fn new(eps: T) -> Self {
        Self { eps }
    }
}

impl<T: FloatT> PivotRule<T> for FirstPositive<T> {
    fn entering_column(&self, objective: &[T]) -> Option<usize> {
        objective.iter().position(|&v| v > self.eps)
    }

    fn name(&self) -> &'static str {
        "first"
    }
}

/// Column with the largest reduced cost, lowest index on ties.
#[derive(Debug, Clone)]
pub struct LargestCoefficient<T> {
    eps: T,
}

impl<T: FloatT> LargestCoefficient<T> {
    pub fn new(eps: T) -> Self {
        Self { eps }
    }
}

impl<T: FloatT> PivotRule<T> for LargestCoefficient<T> {
    fn entering_column(&self, objective: &[T]) -> Option<usize> {
        let mut best = None;
        let mut p = self.eps;
        for (j, &v) in objective.iter().enumerate() {
            if v > p {
                p = v;
                best = Some(j);
            }
        }
        best
    }

    fn name(&self) -> &'static str {
        "largest"
    }
}

#[enum_dispatch(PivotRule<T>)]
#[derive(Debug, Clone)]
pub enum PivotRules<T>
where
    T: FloatT,
{
    FirstPositive(FirstPositive<T>),
    LargestCoefficient(LargestCoefficient<T>),
}

impl<T> PivotRules<T>
where
    T: FloatT,
{
    /// Build the rule named `name` (`"first"` or `"largest"`).
    pub fn from_name(name: &str, eps: T) -> Result<Self, SettingsError> {
        match name {
            "first" => Ok(FirstPositive::new(eps).into()),
            "largest" => Ok(LargestCoefficient::new(eps).into()),
            _ => Err(SettingsError::BadField("pivot_rule")),
        }
    }
}

#[test]
fn test_pivot_rules() {
    let objective = [-1.0, 0.5, 3.0, 3.0, 1e-12];

    let rule = PivotRules::from_name("first", 1e-9).unwrap();
    assert_eq!(rule.entering_column(&objective), Some(1));
    assert_eq!(rule.name(), "first");

    let rule = PivotRules::from_name("largest", 1e-9).unwrap();
    assert_eq!(rule.entering_column(&objective), Some(2));

    // nothing above tolerance
    let optimal = [0.0, -2.0, 1e-12];
    assert_eq!(rule.entering_column(&optimal), None);
    let rule = PivotRules::from_name("first", 1e-9).unwrap();
    assert_eq!(rule.entering_column(&optimal), None);

    assert!(PivotRules::<f64>::from_name("steepest", 1e-9).is_err());
}
