use crate::solver::core::traits::Settings;
use crate::{algebra::*, solver::core::SettingsError};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Standard-form solver type implementing the [`Settings`](crate::solver::core::traits::Settings) trait

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefaultSettings<T: FloatT> {
    ///maximum number of pivots over both phases.
    ///0 picks a limit from the problem size, max(1000, 50(m+n))
    #[builder(default = "0")]
    pub max_iter: u32,

    ///maximum run time (seconds)
    #[builder(default = "f64::INFINITY")]
    pub time_limit: f64,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///print a progress line every this many pivots
    #[builder(default = "50")]
    pub print_interval: u32,

    ///tolerance for "positive" and "zero" in pivot selection and
    ///basic column detection
    #[builder(default = "(1e-9).as_T()")]
    pub tol_pivot: T,

    ///entering column rule ("first" or "largest")
    #[builder(default = r#""first".to_string()"#)]
    pub pivot_rule: String,

    ///eliminate tableau rows in parallel.
    ///[has no effect without the "parallel" feature]
    #[builder(default = "cfg!(feature = \"parallel\")")]
    pub parallel_enable: bool,

    ///tableaus with fewer rows than this are always pivoted serially
    #[builder(default = "64")]
    pub parallel_min_rows: usize,

    ///maximum solver threads for parallel elimination.
    ///choosing 0 uses the global rayon pool
    #[builder(default = "0")]
    pub max_threads: u32,
}

impl<T> Default for DefaultSettings<T>
where
    T: FloatT,
{
    fn default() -> DefaultSettings<T> {
        DefaultSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> DefaultSettings<T>
where
    T: FloatT,
{
    /// Pivot limit for a standard form problem with `m` rows and `n` columns.
    pub fn iteration_limit(&self, m: usize, n: usize) -> u32 {
        match self.max_iter {
            0 => {
                let auto = usize::max(1000, 50 * (m + n));
                u32::try_from(auto).unwrap_or(u32::MAX)
            }
            limit => limit,
        }
    }
}

impl<T> Settings<T> for DefaultSettings<T>
where
    T: FloatT,
{
    //NB: CoreSettings is typedef'd to DefaultSettings
    fn core(&self) -> &DefaultSettings<T> {
        self
    }
    fn core_mut(&mut self) -> &mut DefaultSettings<T> {
        self
    }

    /// Checks that the settings are valid.
    fn validate(&self) -> Result<(), SettingsError> {
        validate_pivot_rule(&self.pivot_rule)?;
        validate_tol_pivot(self.tol_pivot)?;
        validate_time_limit(self.time_limit)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for DefaultSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        DefaultSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> DefaultSettingsBuilder<T>
where
    T: FloatT,
{
    /// check the fields that have been set
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref pivot_rule) = self.pivot_rule {
            validate_pivot_rule(pivot_rule)?;
        }
        if let Some(tol_pivot) = self.tol_pivot {
            validate_tol_pivot(tol_pivot)?;
        }
        if let Some(time_limit) = self.time_limit {
            validate_time_limit(time_limit)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_pivot_rule(pivot_rule: &str) -> Result<(), SettingsError> {
    match pivot_rule {
        "first" => Ok(()),
        "largest" => Ok(()),
        _ => Err(SettingsError::BadField("pivot_rule")),
    }
}

fn validate_tol_pivot<T: FloatT>(tol_pivot: T) -> Result<(), SettingsError> {
    if tol_pivot.is_finite() && tol_pivot > T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadField("tol_pivot"))
    }
}

fn validate_time_limit(time_limit: f64) -> Result<(), SettingsError> {
    // NaN fails too
    if time_limit >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::BadField("time_limit"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = DefaultSettingsBuilder::<f64>::default().build().unwrap();
    assert_eq!(settings.pivot_rule, "first");
    assert_eq!(settings.tol_pivot, 1e-9);

    // fail on unknown pivot rule
    assert!(DefaultSettingsBuilder::<f64>::default()
        .pivot_rule("steepest".to_string())
        .build()
        .is_err());

    // fail on nonpositive tolerance
    assert!(DefaultSettingsBuilder::<f64>::default()
        .tol_pivot(0.0)
        .build()
        .is_err());

    assert!(DefaultSettingsBuilder::<f64>::default()
        .time_limit(-1.0)
        .build()
        .is_err());

    // directly construct a bad DefaultSettings and manually check
    let settings = DefaultSettings::<f64> {
        pivot_rule: "foo".to_string(),
        ..DefaultSettings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_iteration_limit() {
    let settings = DefaultSettings::<f64>::default();
    assert_eq!(settings.iteration_limit(2, 3), 1000);
    assert_eq!(settings.iteration_limit(30, 40), 3500);

    let settings = DefaultSettings::<f64> {
        max_iter: 7,
        ..DefaultSettings::default()
    };
    assert_eq!(settings.iteration_limit(30, 40), 7);
}
