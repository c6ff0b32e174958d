//! Approximate equality, for tests and numerical accuracy checks.
//!
//! `==` on the types in this crate is bit-exact. Results of floating-point computations usually
//! need a tolerance instead, which is what [`ApproxEq`] and the [`assert_approx_eq!`] and
//! [`assert_approx_ne!`] macros provide.
//!
//! [`assert_approx_eq!`]: crate::assert_approx_eq
//! [`assert_approx_ne!`]: crate::assert_approx_ne

mod impls;

use std::{fmt, panic::Location};

use crate::{ulp::Ulp, Float};

/// How close two values have to be to be considered equal.
///
/// Background on choosing between these:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance<S> {
    /// The absolute difference of the values may be at most this large.
    ///
    /// This is the right choice for values close to zero, which may have opposing signs.
    Abs(S),
    /// The absolute difference of the values may be at most this fraction of the larger magnitude.
    ///
    /// A good default for values that are not close to zero.
    Rel(S),
    /// The values may be at most this many representable steps apart (see
    /// [`float_distance`][crate::ulp::float_distance]).
    ///
    /// This respects the uneven distribution of floats: they are much denser between 1.0 and 2.0
    /// than between 1001.0 and 1002.0. It is very strict for results that should be zero but carry
    /// a small rounding error, though (`1e-20` is about a billion ULPs away from `0.0`).
    Ulps(u32),
}

/// Scalar types that [`ApproxEq`] comparisons bottom out in.
pub trait ApproxScalar: Float + Ulp + fmt::Debug {}
impl<S: Float + Ulp + fmt::Debug> ApproxScalar for S {}

/// Comparison within a [`Tolerance`].
///
/// Vectors, matrices and quaternions are close if every pair of components is.
///
/// For every [`Tolerance`], `NaN` is never equal to anything, and infinities are only equal to
/// infinities of the same sign.
pub trait ApproxEq {
    /// The scalar type the tolerance is expressed in.
    type Scalar: ApproxScalar;

    /// Compares `self` and `other` with the given tolerance.
    fn approx_eq(&self, other: &Self, tolerance: Tolerance<Self::Scalar>) -> bool;
}

/// Guard created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped, which gives the caller a chance to pick the
/// comparisons with [`Asserter::abs`], [`Asserter::rel`] and [`Asserter::ulps`]. If more than one
/// is selected, the values are equal if *any* of them considers them equal.
///
/// Without an explicit choice, an absolute and a relative comparison are performed, both with a
/// tolerance of the scalar's machine epsilon.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    checks: Vec<Tolerance<T::Scalar>>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            checks: Vec::new(),
        }
    }

    /// Also accepts the values if their absolute difference is at most `abs`.
    pub fn abs(&mut self, abs: T::Scalar) -> &mut Self {
        self.checks.push(Tolerance::Abs(abs));
        self
    }

    /// Also accepts the values if their relative difference is at most `rel`.
    pub fn rel(&mut self, rel: T::Scalar) -> &mut Self {
        self.checks.push(Tolerance::Rel(rel));
        self
    }

    /// Also accepts the values if they are at most `ulps` representable steps apart.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.checks.push(Tolerance::Ulps(ulps));
        self
    }

    fn equal(&self) -> bool {
        if self.checks.is_empty() {
            let eps = <T::Scalar as Float>::EPSILON;
            return self.left.approx_eq(self.right, Tolerance::Abs(eps))
                || self.left.approx_eq(self.right, Tolerance::Rel(eps));
        }
        self.checks
            .iter()
            .any(|&tolerance| self.left.approx_eq(self.right, tolerance))
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on `drop`, so the location captured in `new` is reported.
    fn drop(&mut self) {
        let expected = self.kind == AssertionKind::Eq;
        if self.equal() != expected {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    let suffix = match args {
        Some(args) => format!(": {args}"),
        None => String::new(),
    };
    panic!("assertion `left {op} right` failed at {location}{suffix}\n  left: {left:?}\n right: {right:?}");
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Like [`assert_eq!`], but passes when the operands are close according to [`ApproxEq`].
///
/// The returned [`Asserter`] picks the tolerance. Without one, the operands may differ by the
/// scalar's machine epsilon, absolutely or relatively.
///
/// # Examples
///
/// ```
/// # use glmath::*;
/// let q = Quatf::from_axis_angle(std::f32::consts::PI, Vec3f::Z);
/// assert_approx_eq!(q * vec3(1.0, 0.0, 0.0), vec3(-1.0, 0.0, 0.0)).abs(1e-6);
/// assert_approx_eq!(Vec3d::splat(0.1) * 3.0, Vec3d::splat(0.3));
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
/// assert_approx_eq!(40.0, 40.5).rel(0.02);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// The negation of [`assert_approx_eq!`].
///
/// ```
/// # use glmath::*;
/// assert_approx_ne!(vec2(0.0, 1.0), vec2(0.0, 1.25)).abs(0.2);
/// assert_approx_ne!(1.0, 1.0 + 2.0 * f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Mat2f, Quatf};

    use super::{ApproxEq, Tolerance};

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn ne_of_identical_vectors() {
        assert_approx_ne!(vec3(0.5, 1.0, 2.0), vec3(0.5, 1.0, 2.0));
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn eq_reports_mismatch() {
        assert_approx_eq!(vec2(0.0f32, 1.0), vec2(0.0, 1.5)).abs(0.1);
    }

    #[test]
    #[should_panic(expected = "rotated by 90 degrees")]
    fn custom_message() {
        assert_approx_eq!(Quatf::IDENTITY, Quatf::new(0.0, 1.0, 0.0, 0.0), "rotated by {} degrees", 90);
    }

    #[test]
    fn relative() {
        assert_approx_eq!(250.0, 250.2).rel(1e-3);
        assert_approx_ne!(250.0, 251.0).rel(1e-3);
        assert_approx_eq!(-3.0, 3.0).rel(2.0);
        assert!(!(-3.0f32).approx_eq(&3.0, Tolerance::Rel(1.9)));
    }

    #[test]
    fn first_matching_tolerance_wins() {
        assert_approx_eq!(8.0, 8.25).ulps(2).rel(0.05);
        assert_approx_ne!(8.0, 8.25).abs(0.1).ulps(2);
    }

    #[test]
    fn compound_values() {
        let m = Mat2f::IDENTITY * 0.5;
        assert_approx_eq!(m * 2.0, Mat2f::IDENTITY).ulps(0);
        assert_approx_eq!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0 + 1e-9)).abs(1e-8);
        // One component out of range is enough to fail.
        assert_approx_ne!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.5, 3.0)).abs(0.1);
        assert!([1.0f64, 2.0][..].approx_eq(&[1.0, 2.0], Tolerance::Abs(0.0)));
        assert!(![1.0f64, 2.0][..].approx_eq(&[1.0], Tolerance::Abs(1.0)));
    }

    #[test]
    fn ulps_around_zero() {
        let smallest = f64::from_bits(1);
        assert_approx_eq!(smallest, -smallest).ulps(2);
        assert_approx_ne!(smallest, -smallest).ulps(1);
        assert_approx_eq!(-0.0f32, 0.0).ulps(0);
    }

    #[test]
    fn nan_is_never_close() {
        for tolerance in [Tolerance::Abs(f32::MAX), Tolerance::Rel(f32::MAX), Tolerance::Ulps(u32::MAX)] {
            assert!(!f32::NAN.approx_eq(&f32::NAN, tolerance));
            assert!(!f32::NAN.approx_eq(&0.0, tolerance));
        }
        assert_approx_ne!(vec2(f64::NAN, 0.0), vec2(f64::NAN, 0.0)).abs(1.0);
    }

    #[test]
    fn infinities() {
        assert_approx_eq!(f64::NEG_INFINITY, f64::NEG_INFINITY).abs(0.0);
        assert_approx_ne!(f64::NEG_INFINITY, f64::INFINITY).abs(f64::MAX);
        assert_approx_ne!(f32::MAX, f32::INFINITY).abs(f32::MAX);
        assert_approx_eq!(f32::MAX, f32::INFINITY).ulps(1);
    }
}
