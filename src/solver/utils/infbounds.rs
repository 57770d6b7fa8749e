use crate::algebra::FloatT;
use crate::solver::utils::atomic::{AtomicF64, Ordering};
use crate::solver::_INFINITY_DEFAULT;
use lazy_static::lazy_static;
//
lazy_static! {
    static ref INFINITY: AtomicF64 = AtomicF64::new(_INFINITY_DEFAULT);
}

/// Revert internal infinity bound to its default value.
pub fn default_infinity() {
    INFINITY.store(_INFINITY_DEFAULT, Ordering::Relaxed);
}
/// Set the internal infinity bound to a new value.
///
/// Bounds with magnitude at or above this value are treated as
/// absent when a problem is converted to standard form.
pub fn set_infinity(v: f64) {
    INFINITY.store(v, Ordering::Relaxed);
}
/// Get the current value of the internal infinity bound.
pub fn get_infinity() -> f64 {
    INFINITY.load(Ordering::Relaxed)
}

// bound classification against the current threshold

pub(crate) fn is_plus_infinite<T: FloatT>(v: T) -> bool {
    v.to_f64().map_or(true, |v| v >= get_infinity())
}

pub(crate) fn is_minus_infinite<T: FloatT>(v: T) -> bool {
    v.to_f64().map_or(true, |v| v <= -get_infinity())
}

#[test]
fn test_infinity_threshold() {
    assert!(is_plus_infinite(f64::INFINITY));
    assert!(is_plus_infinite(1e20_f64));
    assert!(!is_plus_infinite(1e19_f64));
    assert!(is_minus_infinite(-1e20_f32));
    assert!(!is_minus_infinite(0.0_f64));
    assert!(!is_plus_infinite(-f64::INFINITY));
}
