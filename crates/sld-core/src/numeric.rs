use crate::SldError;

/// Floating point type used throughout system
pub type Real = f64;

/// Lower/upper bound of percent-of-container coordinates.
pub const PERCENT_MIN: Real = 0.0;
pub const PERCENT_MAX: Real = 100.0;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SldError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SldError::NonFinite { what, value: v })
    }
}

/// Clamp a value into the percent range `[0, 100]`. NaN maps to 0.
pub fn clamp_percent(v: Real) -> Real {
    if v.is_nan() {
        return PERCENT_MIN;
    }
    v.clamp(PERCENT_MIN, PERCENT_MAX)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clamp_percent_stays_in_range(v in -1.0e6_f64..1.0e6_f64) {
            let c = clamp_percent(v);
            prop_assert!((PERCENT_MIN..=PERCENT_MAX).contains(&c));
            if (PERCENT_MIN..=PERCENT_MAX).contains(&v) {
                prop_assert_eq!(c, v);
            }
        }
    }
}
