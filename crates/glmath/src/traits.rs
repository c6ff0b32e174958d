use std::{fmt, ops};

use crate::ExactEq;

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types closed under `+ - * /`, with `0` and `1`.
///
/// Unlike [`Number`], this includes the unsigned integers.
pub trait Arithmetic:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Arithmetic for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// A trait for signed numeric types that support basic arithmetic operations.
pub trait Number: Arithmetic + ops::Neg<Output = Self> {}
impl<T> Number for T where T: Arithmetic + ops::Neg<Output = T> {}

/// IEEE 754 binary floating-point types ([`f32`] and [`f64`]).
///
/// This bundles everything the quaternion and elementwise function code needs from a component
/// type, so that it can be written once for both precisions.
pub trait Float: Number + Trig + Sqrt + MinMax + PartialOrd + ExactEq + fmt::Debug {
    /// Difference between `1.0` and the next larger representable number.
    const EPSILON: Self;
    /// Archimedes' constant (π).
    const PI: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;
    const INFINITY: Self;

    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn trunc(self) -> Self;
    /// Returns `self - floor(self)`, the GLSL definition of `fract` (always non-negative).
    fn fract(self) -> Self;
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn powf(self, exp: Self) -> Self;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;

    /// Converts an [`f64`] constant to this type, rounding to nearest.
    fn from_f64(value: f64) -> Self;
}

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($f:ident),+) => {
        $(
            impl Zero for $f {
                const ZERO: Self = 0.0;
            }

            impl One for $f {
                const ONE: Self = 1.0;
            }

            impl MinMax for $f {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Sqrt for $f {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Trig for $f {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }

            impl Float for $f {
                const EPSILON: Self = $f::EPSILON;
                const PI: Self = std::$f::consts::PI;
                const MIN_POSITIVE: Self = $f::MIN_POSITIVE;
                const INFINITY: Self = $f::INFINITY;

                fn abs(self) -> Self {
                    self.abs()
                }

                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }

                fn round(self) -> Self {
                    self.round()
                }

                fn trunc(self) -> Self {
                    self.trunc()
                }

                fn fract(self) -> Self {
                    self - self.floor()
                }

                fn exp(self) -> Self {
                    self.exp()
                }

                fn exp2(self) -> Self {
                    self.exp2()
                }

                fn ln(self) -> Self {
                    self.ln()
                }

                fn log2(self) -> Self {
                    self.log2()
                }

                fn powf(self, exp: Self) -> Self {
                    self.powf(exp)
                }

                fn is_nan(self) -> bool {
                    self.is_nan()
                }

                fn is_infinite(self) -> bool {
                    self.is_infinite()
                }

                fn from_f64(value: f64) -> Self {
                    value as $f
                }
            }
        )+
    };
}
float_impls!(f32, f64);
