//! Component-wise GLSL built-in functions.
//!
//! Every function here applies the scalar operation of the same name to each component of its
//! argument(s) through the [`Functor`] of the vector's dimension. Mixed vector/scalar forms take
//! the scalar as the last argument, like GLSL does for `mix` and `clamp`.
//!
//! ```
//! # use glmath::{*, func::*};
//! let v = vec3(-1.5f32, 0.25, 2.0);
//! assert_eq!(abs(v), vec3(1.5, 0.25, 2.0));
//! assert_eq!(floor(v), vec3(-2.0, 0.0, 2.0));
//! assert_eq!(step(Vec3f::splat(0.5), v), vec3(0.0, 0.0, 1.0));
//! ```

use crate::{Dim, Float, Functor, MinMax, Vector};

#[inline]
fn unary<T, R, const N: usize>(f: impl FnMut(T) -> R, x: Vector<T, N>) -> Vector<R, N>
where
    Dim<N>: Functor<N>,
{
    <Dim<N> as Functor<N>>::call1(f, x)
}

#[inline]
fn binary<T, U, R, const N: usize>(
    f: impl FnMut(T, U) -> R,
    a: Vector<T, N>,
    b: Vector<U, N>,
) -> Vector<R, N>
where
    Dim<N>: Functor<N>,
{
    <Dim<N> as Functor<N>>::call2(f, a, b)
}

macro_rules! unary_fns {
    ($($(#[$attr:meta])* $name:ident => $f:expr;)+) => {
        $(
            $(#[$attr])*
            pub fn $name<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N>
            where
                Dim<N>: Functor<N>,
            {
                unary($f, x)
            }
        )+
    };
}

unary_fns! {
    abs => T::abs;
    /// Rounds each component towards negative infinity.
    floor => T::floor;
    /// Rounds each component towards positive infinity.
    ceil => T::ceil;
    /// Returns `x - floor(x)` for each component.
    ///
    /// Unlike [`f32::fract`], the result is never negative: `fract(-0.25)` is `0.75`.
    fract => T::fract;
    /// Rounds each component to the nearest integer, with halfway cases rounded away from zero.
    round => T::round;
    /// Rounds each component towards zero.
    trunc => T::trunc;
    sqrt => T::sqrt;
    /// Computes `1 / sqrt(x)` for each component.
    inverse_sqrt => |x: T| T::ONE / x.sqrt();
    /// Computes `e^x` for each component.
    exp => T::exp;
    exp2 => T::exp2;
    /// Natural logarithm.
    log => T::ln;
    log2 => T::log2;
    sin => T::sin;
    cos => T::cos;
    tan => T::tan;
}

/// Returns `1.0` for positive components, `-1.0` for negative components, and `0.0` otherwise.
///
/// Both zeroes and `NaN` map to `+0.0`.
pub fn sign<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<T, N>
where
    Dim<N>: Functor<N>,
{
    unary(
        |x: T| {
            if x > T::ZERO {
                T::ONE
            } else if x < T::ZERO {
                -T::ONE
            } else {
                T::ZERO
            }
        },
        x,
    )
}

pub fn min<T: MinMax + Copy, const N: usize>(x: Vector<T, N>, y: Vector<T, N>) -> Vector<T, N>
where
    Dim<N>: Functor<N>,
{
    binary(T::min, x, y)
}

pub fn max<T: MinMax + Copy, const N: usize>(x: Vector<T, N>, y: Vector<T, N>) -> Vector<T, N>
where
    Dim<N>: Functor<N>,
{
    binary(T::max, x, y)
}

/// Constrains each component of `x` to lie between the corresponding components of `lo` and
/// `hi`.
///
/// The result is unspecified if any component of `lo` is greater than its counterpart in `hi`.
pub fn clamp<T: MinMax + Copy, const N: usize>(
    x: Vector<T, N>,
    lo: Vector<T, N>,
    hi: Vector<T, N>,
) -> Vector<T, N>
where
    Dim<N>: Functor<N>,
{
    binary(|x: T, (lo, hi)| x.clamp(lo, hi), x, lo.zip(hi))
}

/// Linearly blends between `x` and `y`, computing `x * (1 - a) + y * a`.
///
/// The result is exactly `x` for `a == 0` and exactly `y` for `a == 1`.
///
/// ```
/// # use glmath::{*, func::mix};
/// assert_eq!(mix(vec2(0.0, 10.0), vec2(1.0, 20.0), 0.25), vec2(0.25, 12.5));
/// ```
pub fn mix<T: Float, const N: usize>(x: Vector<T, N>, y: Vector<T, N>, a: T) -> Vector<T, N>
where
    Dim<N>: Functor<N>,
{
    <Dim<N> as Functor<N>>::call2_scalar(|(x, y): (T, T), a| x * (T::ONE - a) + y * a, x.zip(y), a)
}

/// Returns `0.0` for each component of `x` that is less than its `edge`, and `1.0` otherwise.
pub fn step<T: Float, const N: usize>(edge: Vector<T, N>, x: Vector<T, N>) -> Vector<T, N>
where
    Dim<N>: Functor<N>,
{
    binary(|edge, x| if x < edge { T::ZERO } else { T::ONE }, edge, x)
}

/// Raises each component of `x` to the power given by the corresponding component of `y`.
pub fn pow<T: Float, const N: usize>(x: Vector<T, N>, y: Vector<T, N>) -> Vector<T, N>
where
    Dim<N>: Functor<N>,
{
    binary(T::powf, x, y)
}

/// Computes the logarithm of each component of `x` in the given `base`.
///
/// Zero components produce negative infinity; unlike the scalar
/// [`log_base`][crate::log_base], this does not check its input.
pub fn log_base<T: Float, const N: usize>(x: Vector<T, N>, base: T) -> Vector<T, N>
where
    Dim<N>: Functor<N>,
{
    <Dim<N> as Functor<N>>::call2_scalar(|x: T, base: T| x.ln() / base.ln(), x, base)
}

/// Converts degrees to radians.
pub fn radians<T: Float, const N: usize>(degrees: Vector<T, N>) -> Vector<T, N>
where
    Dim<N>: Functor<N>,
{
    let factor = T::PI / T::from_f64(180.0);
    unary(|d| d * factor, degrees)
}

/// Converts radians to degrees.
pub fn degrees<T: Float, const N: usize>(radians: Vector<T, N>) -> Vector<T, N>
where
    Dim<N>: Functor<N>,
{
    let factor = T::from_f64(180.0) / T::PI;
    unary(|r| r * factor, radians)
}

/// Returns which components of `x` are `NaN`.
pub fn is_nan<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<bool, N>
where
    Dim<N>: Functor<N>,
{
    unary(T::is_nan, x)
}

/// Returns which components of `x` are positive or negative infinity.
pub fn is_inf<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<bool, N>
where
    Dim<N>: Functor<N>,
{
    unary(T::is_infinite, x)
}
