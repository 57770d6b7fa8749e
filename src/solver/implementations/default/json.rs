use crate::{
    algebra::*,
    solver::{core::SolverJSONReadWrite, DefaultSettings, DefaultSolver, LinearProgram},
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

// The problem as the user provided it, plus settings.  Problems that
// were handed over already in standard form are stored as an all-`L`
// program with default bounds, which builds back to the same form.

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct JsonProblemData<T: FloatT> {
    pub lp: LinearProgram<T>,
    pub settings: DefaultSettings<T>,
}

impl<T> SolverJSONReadWrite<T> for DefaultSolver<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let lp = match self.data.lp {
            Some(ref lp) => lp.clone(),
            None => {
                let sf = &self.data.standard_form;
                LinearProgram::new(vec!['L'; sf.nrows()], sf.c.clone(), sf.A.clone())
                    .with_rhs("RHS", sf.b.clone())
            }
        };

        let mut json_data = JsonProblemData {
            lp,
            settings: self.settings.clone(),
        };

        // sanitize values that can't be serialized, i.e. infs
        sanitize_settings(&mut json_data.settings);
        sanitize_bounds(&mut json_data.lp);

        // write to file
        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn load_from_file(
        file: &mut File,
        settings: Option<DefaultSettings<T>>,
    ) -> Result<Self, io::Error> {
        // read file
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let mut json_data: JsonProblemData<T> = serde_json::from_str(&buffer)?;

        // restore sanitized values to their (likely) original values
        desanitize_settings(&mut json_data.settings);
        desanitize_bounds(&mut json_data.lp);

        let settings = settings.unwrap_or(json_data.settings);
        Self::new(&json_data.lp, settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

fn sanitize_settings<T: FloatT>(settings: &mut DefaultSettings<T>) {
    if settings.time_limit == f64::INFINITY {
        settings.time_limit = f64::MAX;
    }
}

fn desanitize_settings<T: FloatT>(settings: &mut DefaultSettings<T>) {
    if settings.time_limit == f64::MAX {
        settings.time_limit = f64::INFINITY;
    }
}

fn sanitize_bounds<T: FloatT>(lp: &mut LinearProgram<T>) {
    for set in lp.bounds.values_mut() {
        for v in set.lower.iter_mut().chain(set.upper.iter_mut()) {
            if *v == T::infinity() {
                *v = T::max_value();
            } else if *v == T::neg_infinity() {
                *v = T::min_value();
            }
        }
    }
}

fn desanitize_bounds<T: FloatT>(lp: &mut LinearProgram<T>) {
    for set in lp.bounds.values_mut() {
        for v in set.lower.iter_mut().chain(set.upper.iter_mut()) {
            if *v == T::max_value() {
                *v = T::infinity();
            } else if *v == T::min_value() {
                *v = T::neg_infinity();
            }
        }
    }
}

#[test]
fn test_json_io() {
    use crate::solver::SimplexSolver;
    use std::io::{Seek, SeekFrom};

    // min -x - y, x + y ≤ 3, x free with x ≤ 2
    let A = Matrix::from_rows(&[vec![1.0, 1.0]]).unwrap();
    let lp = LinearProgram::new(vec!['L'], vec![-1.0, -1.0], A)
        .with_rhs("RHS", vec![3.0])
        .with_bounds("BND", vec![f64::NEG_INFINITY, 0.0], vec![2.0, f64::INFINITY]);

    let settings = crate::solver::DefaultSettingsBuilder::default()
        .build()
        .unwrap();

    let mut solver = DefaultSolver::<f64>::new(&lp, settings).unwrap();
    solver.solve();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    solver.save_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut solver2 = DefaultSolver::<f64>::load_from_file(&mut file, None).unwrap();
    assert_eq!(solver2.data.lp.as_ref(), Some(&lp));
    assert!(solver2.settings.time_limit.is_infinite());

    solver2.solve();
    assert_eq!(solver.solution.status, solver2.solution.status);
    assert_eq!(solver.solution.x, solver2.solution.x);
}
