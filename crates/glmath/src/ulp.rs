//! Stepping through representable floating-point values, and measuring distances in ULPs.
//!
//! A ULP (*unit in the last place*) is the gap between two adjacent representable values. Counting
//! the representable values between a result and a reference is a scale-independent way of
//! quantifying the accuracy of a numerical routine.
//!
//! All functions work on an *ordered* view of the bit patterns: the non-negative values keep their
//! bit pattern as an integer, and the negative values are mirrored below zero. In that view,
//! adjacent floats are adjacent integers, `-0.0` and `+0.0` both map to zero, and the smallest
//! subnormals of either sign are one step away from zero.
//!
//! # Edge cases
//!
//! - A `NaN` argument is returned unchanged by the stepping functions, and makes
//!   [`float_distance`] return the maximum distance.
//! - Stepping saturates at the infinities: `next_float(f32::INFINITY)` is `f32::INFINITY`, and
//!   `next_float(f32::MAX)` is `f32::INFINITY` too.
//! - Stepping by zero returns the argument unchanged (including the sign of zero).

use crate::{Dim, Functor, Vector};

/// Types with a discrete set of representable values that can be stepped through.
///
/// Implemented for [`f32`], [`f64`], and [`Vector`]s of them (component-wise).
pub trait Ulp: Copy {
    /// Unsigned count of representable steps.
    type Distance: Copy;

    /// Returns the next representable value greater than `self`.
    fn next_float(self) -> Self;

    /// Returns the next representable value less than `self`.
    fn prev_float(self) -> Self;

    /// Returns the value `steps` representable values above `self`.
    fn next_float_by(self, steps: Self::Distance) -> Self;

    /// Returns the value `steps` representable values below `self`.
    fn prev_float_by(self, steps: Self::Distance) -> Self;

    /// Returns the number of representable steps between `self` and `other`.
    fn float_distance(self, other: Self) -> Self::Distance;
}

macro_rules! step {
    ($x:expr, $ordered:ident, $wide:ident, $delta:expr) => {{
        let x = $x;
        let delta: $wide = $delta;
        if x.is_nan() || delta == 0 {
            x
        } else {
            let bits = x.to_bits() as $ordered;
            let ordered = if bits < 0 { $ordered::MIN - bits } else { bits };
            // The infinities are the ends of the ordered range.
            let limit = $wide::from(Self::INFINITY.to_bits() as $ordered);
            let target = ($wide::from(ordered) + delta).clamp(-limit, limit) as $ordered;
            let bits = if target < 0 { $ordered::MIN - target } else { target };
            Self::from_bits(bits as _)
        }
    }};
}

macro_rules! float_ulp {
    ($($f:ident: $bits:ident, $ordered:ident, $wide:ident;)+) => {
        $(
            impl Ulp for $f {
                type Distance = $bits;

                #[inline]
                fn next_float(self) -> Self {
                    self.next_float_by(1)
                }

                #[inline]
                fn prev_float(self) -> Self {
                    self.prev_float_by(1)
                }

                fn next_float_by(self, steps: $bits) -> Self {
                    step!(self, $ordered, $wide, $wide::from(steps))
                }

                fn prev_float_by(self, steps: $bits) -> Self {
                    step!(self, $ordered, $wide, -$wide::from(steps))
                }

                fn float_distance(self, other: Self) -> $bits {
                    if self.is_nan() || other.is_nan() {
                        return $bits::MAX;
                    }
                    let to_ordered = |x: $f| {
                        let bits = x.to_bits() as $ordered;
                        if bits < 0 { $ordered::MIN - bits } else { bits }
                    };
                    to_ordered(self).abs_diff(to_ordered(other))
                }
            }
        )+
    };
}

float_ulp! {
    f32: u32, i32, i64;
    f64: u64, i64, i128;
}

/// Component-wise stepping and distances.
impl<T: Ulp, const N: usize> Ulp for Vector<T, N>
where
    Dim<N>: Functor<N>,
{
    type Distance = Vector<T::Distance, N>;

    fn next_float(self) -> Self {
        <Dim<N> as Functor<N>>::call1(T::next_float, self)
    }

    fn prev_float(self) -> Self {
        <Dim<N> as Functor<N>>::call1(T::prev_float, self)
    }

    fn next_float_by(self, steps: Self::Distance) -> Self {
        <Dim<N> as Functor<N>>::call2(T::next_float_by, self, steps)
    }

    fn prev_float_by(self, steps: Self::Distance) -> Self {
        <Dim<N> as Functor<N>>::call2(T::prev_float_by, self, steps)
    }

    fn float_distance(self, other: Self) -> Self::Distance {
        <Dim<N> as Functor<N>>::call2(T::float_distance, self, other)
    }
}

/// Returns the next representable value greater than `x`.
///
/// # Examples
///
/// ```
/// # use glmath::ulp::*;
/// assert_eq!(next_float(1.0f32), 1.0 + f32::EPSILON);
/// assert_eq!(next_float(0.0f64), f64::from_bits(1));
/// ```
pub fn next_float<T: Ulp>(x: T) -> T {
    x.next_float()
}

/// Returns the next representable value less than `x`.
pub fn prev_float<T: Ulp>(x: T) -> T {
    x.prev_float()
}

/// Returns the value `steps` representable values above `x`.
pub fn next_float_by<T: Ulp>(x: T, steps: T::Distance) -> T {
    x.next_float_by(steps)
}

/// Returns the value `steps` representable values below `x`.
pub fn prev_float_by<T: Ulp>(x: T, steps: T::Distance) -> T {
    x.prev_float_by(steps)
}

/// Returns the number of representable values between `x` and `y`.
///
/// For vectors, the distance is computed per component.
///
/// # Examples
///
/// ```
/// # use glmath::{*, ulp::*};
/// assert_eq!(float_distance(1.0f32, 1.0 + 2.0 * f32::EPSILON), 2);
/// assert_eq!(float_distance(-0.0f32, 0.0), 0);
/// assert_eq!(float_distance(vec2(1.0f64, 2.0), vec2(1.0, 2.0)), vec2(0, 0));
/// ```
pub fn float_distance<T: Ulp>(x: T, y: T) -> T::Distance {
    x.float_distance(y)
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Vec3f};

    use super::*;

    const SAMPLES: [f32; 9] = [0.0, 1.0, -1.0, 0.1, -3.5e-20, 1.0e30, -7.25, 1.0e-40, -1.0e-42];

    #[test]
    fn next_is_one_step() {
        for x in SAMPLES {
            assert_eq!(float_distance(x, next_float(x)), 1, "{x}");
            assert_eq!(float_distance(x, prev_float(x)), 1, "{x}");
            assert!(next_float(x) > x);
            assert!(prev_float(x) < x);
            assert_eq!(float_distance(x, x), 0);
        }
        for x in SAMPLES.map(f64::from) {
            assert_eq!(float_distance(x, next_float(x)), 1, "{x}");
            assert_eq!(float_distance(next_float(x), x), 1, "{x}");
        }
    }

    #[test]
    fn steps_compose() {
        for x in SAMPLES {
            let mut y = x;
            for _ in 0..5 {
                y = next_float(y);
            }
            assert_eq!(next_float_by(x, 5), y);
            assert_eq!(prev_float_by(y, 5).to_bits(), x.to_bits(), "{x}");
            assert_eq!(float_distance(x, y), 5);
        }
        assert_eq!(next_float_by(2.5f64, 0).to_bits(), 2.5f64.to_bits());
        assert_eq!(prev_float_by(-0.0f32, 0).to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn crossing_zero() {
        let tiny = f32::from_bits(1);
        assert_eq!(next_float(0.0f32), tiny);
        assert_eq!(next_float(-0.0f32), tiny);
        assert_eq!(prev_float(0.0f32), -tiny);
        assert_eq!(prev_float(tiny), 0.0);
        assert_eq!(float_distance(-tiny, tiny), 2);
        assert_eq!(float_distance(-1.0f64, 1.0), 2 * 1.0f64.to_bits());
    }

    #[test]
    fn infinities_and_nan() {
        assert_eq!(next_float(f32::MAX), f32::INFINITY);
        assert_eq!(next_float(f32::INFINITY), f32::INFINITY);
        assert_eq!(prev_float(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert_eq!(prev_float(f64::INFINITY), f64::MAX);
        assert_eq!(next_float_by(1.0f32, u32::MAX), f32::INFINITY);
        assert_eq!(prev_float_by(1.0f64, u64::MAX), f64::NEG_INFINITY);
        assert_eq!(float_distance(f32::MAX, f32::INFINITY), 1);

        assert!(next_float(f32::NAN).is_nan());
        assert!(prev_float_by(f64::NAN, 3).is_nan());
        assert_eq!(float_distance(f32::NAN, 1.0), u32::MAX);
        assert_eq!(float_distance(0.0, f64::NAN), u64::MAX);
    }

    #[test]
    fn vectors() {
        let v = vec3(1.0f32, -2.0, 0.0);
        let w = next_float_by(v, vec3(1, 2, 3));
        assert_eq!(float_distance(v, w), vec3(1, 2, 3));
        assert_eq!(prev_float(next_float(v)), v);
        assert_eq!(float_distance(Vec3f::ZERO, Vec3f::ZERO), vec3(0, 0, 0));
    }
}
