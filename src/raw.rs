//! Sentinel-aware reads of producer values.
//!
//! The producer writes fields lazily: before a region has been populated, a
//! float field holds the NaN/non-finite guard pattern and reading it must
//! yield "unavailable" rather than the garbage value. [`RawValue::sample`]
//! is that boundary: it filters sentinels and widens everything to one of
//! two normalized carrier types (`f64` for physical quantities, `i64` for
//! counters and indices), so adapter code never handles the producer's raw
//! widths directly.
//!
//! Integers have no NaN analogue; where a specific integer field reserves a
//! sentinel (for example a max-lap count of `i32::MAX` meaning "time-limited
//! session"), the adapter that knows the field interprets it.

/// A producer primitive that can be sentinel-filtered and normalized.
pub trait RawValue: Copy {
    /// The normalized carrier type.
    type Norm;

    /// Returns the normalized value, or `None` when the field still holds
    /// the producer's "not yet written" pattern.
    fn sample(self) -> Option<Self::Norm>;
}

impl RawValue for f64 {
    type Norm = f64;

    fn sample(self) -> Option<f64> {
        self.is_finite().then_some(self)
    }
}

impl RawValue for f32 {
    type Norm = f64;

    fn sample(self) -> Option<f64> {
        self.is_finite().then_some(self as f64)
    }
}

impl RawValue for i32 {
    type Norm = i64;

    fn sample(self) -> Option<i64> {
        Some(self as i64)
    }
}

impl RawValue for i16 {
    type Norm = i64;

    fn sample(self) -> Option<i64> {
        Some(self as i64)
    }
}

impl RawValue for i8 {
    type Norm = i64;

    fn sample(self) -> Option<i64> {
        Some(self as i64)
    }
}

impl RawValue for u8 {
    type Norm = i64;

    fn sample(self) -> Option<i64> {
        Some(self as i64)
    }
}

impl RawValue for u16 {
    type Norm = i64;

    fn sample(self) -> Option<i64> {
        Some(self as i64)
    }
}

impl RawValue for u32 {
    type Norm = i64;

    fn sample(self) -> Option<i64> {
        Some(self as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn non_finite_floats_are_unavailable() {
        assert_eq!(f64::NAN.sample(), None);
        assert_eq!(f64::INFINITY.sample(), None);
        assert_eq!(f64::NEG_INFINITY.sample(), None);
        assert_eq!(f32::NAN.sample(), None);
    }

    #[test]
    fn finite_floats_pass_through() {
        assert_eq!(0.0f64.sample(), Some(0.0));
        assert_eq!((-273.15f64).sample(), Some(-273.15));
        assert_eq!(1.5f32.sample(), Some(1.5));
    }

    #[test]
    fn integers_widen_without_filtering() {
        assert_eq!(42i32.sample(), Some(42));
        assert_eq!(i32::MAX.sample(), Some(i32::MAX as i64));
        assert_eq!((-1i8).sample(), Some(-1));
        assert_eq!(200u8.sample(), Some(200));
        assert_eq!(u32::MAX.sample(), Some(u32::MAX as i64));
    }

    proptest! {
        #[test]
        fn sampled_floats_are_always_finite(value in any::<f64>()) {
            match value.sample() {
                Some(v) => prop_assert!(v.is_finite()),
                None => prop_assert!(!value.is_finite()),
            }
        }

        #[test]
        fn integer_sampling_is_lossless(value in any::<i32>()) {
            prop_assert_eq!(value.sample(), Some(value as i64));
        }
    }
}
