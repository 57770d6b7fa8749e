use crate::algebra::*;

/// How one original variable is represented by standard-form columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariableColumns<T> {
    /// `x = x'`
    Direct { col: usize },
    /// `x = x' + offset`, used for finite negative lower bounds
    Shifted { col: usize, offset: T },
    /// `x = x⁺ - x⁻`, used when there is no lower bound
    Split { pos: usize, neg: usize },
}

impl<T> VariableColumns<T>
where
    T: FloatT,
{
    /// Column carrying the variable (the positive part for a split).
    pub fn col(&self) -> usize {
        match *self {
            VariableColumns::Direct { col } => col,
            VariableColumns::Shifted { col, .. } => col,
            VariableColumns::Split { pos, .. } => pos,
        }
    }

    /// Value of the original variable given standard-form values `x`.
    pub fn value(&self, x: &[T]) -> T {
        match *self {
            VariableColumns::Direct { col } => x[col],
            VariableColumns::Shifted { col, offset } => x[col] + offset,
            VariableColumns::Split { pos, neg } => x[pos] - x[neg],
        }
    }
}

/// Index map from original variables to standard-form columns.
///
/// Original variable `i` always keeps column `i`.  Split variables get
/// their negative part appended after the original columns, in variable
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMap<T> {
    vars: Vec<VariableColumns<T>>,
    ncols: usize,
}

impl<T> ColumnMap<T>
where
    T: FloatT,
{
    pub fn identity(n: usize) -> Self {
        let vars = (0..n).map(|col| VariableColumns::Direct { col }).collect();
        Self { vars, ncols: n }
    }

    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            vars: Vec::with_capacity(n),
            ncols: n,
        }
    }

    // register the next original variable.  Its primary column
    // is its own index, so only split variables grow the width
    pub(crate) fn push_direct(&mut self) {
        let col = self.vars.len();
        self.vars.push(VariableColumns::Direct { col });
    }

    pub(crate) fn push_shifted(&mut self, offset: T) {
        let col = self.vars.len();
        self.vars.push(VariableColumns::Shifted { col, offset });
    }

    pub(crate) fn push_split(&mut self) {
        let pos = self.vars.len();
        let neg = self.ncols;
        self.ncols += 1;
        self.vars.push(VariableColumns::Split { pos, neg });
    }

    /// number of original variables
    pub fn nvars(&self) -> usize {
        self.vars.len()
    }

    /// number of standard-form columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn get(&self, var: usize) -> &VariableColumns<T> {
        &self.vars[var]
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariableColumns<T>> {
        self.vars.iter()
    }

    /// number of split variables
    pub fn nsplit(&self) -> usize {
        self.ncols - self.vars.len()
    }

    /// Recombine split parts and undo shifts.
    ///
    /// # Panics
    /// Panics if `x` is shorter than [`ncols`](Self::ncols).
    pub fn recover(&self, x: &[T]) -> Vec<T> {
        assert!(x.len() >= self.ncols);
        self.vars.iter().map(|v| v.value(x)).collect()
    }
}

#[test]
fn test_column_map_recover() {
    let mut map = ColumnMap::<f64>::with_capacity(3);
    map.push_split();
    map.push_shifted(-2.0);
    map.push_direct();

    assert_eq!(map.ncols(), 4);
    assert_eq!(map.nsplit(), 1);
    assert_eq!(*map.get(0), VariableColumns::Split { pos: 0, neg: 3 });
    assert_eq!(map.get(1).col(), 1);

    let x = [1.0, 5.0, 7.0, 4.0];
    assert_eq!(map.recover(&x), vec![-3.0, 3.0, 7.0]);
}
