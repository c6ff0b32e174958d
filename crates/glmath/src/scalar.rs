//! Scalar equality and helpers shared by every higher-level type.

use crate::Float;

/// Exact, reproducibility-oriented equality.
///
/// IEEE floating-point types compare their *bit patterns*; every other type compares by value.
/// This differs from the native `==` on [`f32`]/[`f64`] in two ways:
///
/// - a `NaN` is equal to itself (as long as the bit patterns match),
/// - `-0.0` and `+0.0` are *not* equal.
///
/// Because of this, the relation is reflexive for all types, and vector, matrix and quaternion
/// types built on it implement [`Eq`].
///
/// # Examples
///
/// ```
/// # use glmath::*;
/// assert!(equal(f32::NAN, f32::NAN));
/// assert!(!equal(0.0f32, -0.0));
/// assert!(equal(3, 3));
/// ```
pub trait ExactEq: Copy {
    /// Returns whether `self` and `other` are identical.
    fn exact_eq(self, other: Self) -> bool;
}

macro_rules! value_exact_eq {
    ($($types:ty),+) => {
        $(
            impl ExactEq for $types {
                #[inline]
                fn exact_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )+
    };
}
value_exact_eq!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char);

impl ExactEq for f32 {
    #[inline]
    fn exact_eq(self, other: Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl ExactEq for f64 {
    #[inline]
    fn exact_eq(self, other: Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl<'a, T: ExactEq> ExactEq for &'a T {
    #[inline]
    fn exact_eq(self, other: Self) -> bool {
        (*self).exact_eq(*other)
    }
}

/// Compares two scalars with [`ExactEq`].
#[inline]
pub fn equal<T: ExactEq>(a: T, b: T) -> bool {
    a.exact_eq(b)
}

/// Computes the logarithm of `x` with an arbitrary `base`.
///
/// # Panics
///
/// In debug builds, this panics if `x` is exactly zero.
///
/// # Examples
///
/// ```
/// # use glmath::*;
/// assert_approx_eq!(log_base(8.0f32, 2.0), 3.0).abs(1e-6);
/// assert_approx_eq!(log_base(1000.0f64, 10.0), 3.0).abs(1e-12);
/// ```
pub fn log_base<T: Float>(x: T, base: T) -> T {
    debug_assert!(!equal(x, T::ZERO), "`log_base` called with a zero argument");
    x.ln() / base.ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_bits() {
        assert!(equal(1.5f32, 1.5));
        assert!(equal(f64::NAN, f64::NAN));
        assert!(!equal(f64::NAN, -f64::NAN));
        assert!(!equal(0.0f64, -0.0));
        assert!(equal(f32::INFINITY, f32::INFINITY));

        // Same value class, different payload.
        let quiet = f32::from_bits(0x7fc0_0000);
        let payload = f32::from_bits(0x7fc0_0001);
        assert!(!equal(quiet, payload));
    }

    #[test]
    fn by_value() {
        assert!(equal(true, true));
        assert!(!equal(1u8, 2));
        assert!(equal(&-4i32, &-4));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero argument")]
    fn log_base_of_zero() {
        log_base(0.0f32, 2.0);
    }

    #[test]
    fn log_base_values() {
        assert_eq!(log_base(1.0f32, 7.0), 0.0);
        crate::assert_approx_eq!(log_base(81.0f64, 3.0), 4.0).abs(1e-12);
    }
}
