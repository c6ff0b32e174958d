//! Assembling vectors from smaller pieces, and truncating conversions.

use std::{array, iter};

use num_traits::AsPrimitive;

use super::Vector;

/// A piece that can be assembled into a larger [`Vector`]: either a scalar or a vector.
///
/// Tuples of 2, 3 or 4 parts convert into a [`Vector`] with [`From`] if their [`Part::LEN`]s add up
/// to the length of the vector. Mismatched sizes are rejected at compile time.
///
/// Parts of a different component type are converted with [`ComponentCast`].
///
/// # Examples
///
/// ```
/// # use glmath::*;
/// let v = Vec3f::from((vec2(1.0, 2.0), 3.0));
/// assert_eq!(v, vec3(1.0, 2.0, 3.0));
///
/// let v = Vec4i::from((1, vec2(2, 3), 4));
/// assert_eq!(v, vec4(1, 2, 3, 4));
///
/// let v = Vec3f::from((vec2(1i32, 2), 3.5f64));
/// assert_eq!(v, vec3(1.0, 2.0, 3.5));
/// ```
pub trait Part<T> {
    /// Number of components this part contributes.
    const LEN: usize;

    type Components: Iterator<Item = T>;

    /// Returns the components of this part, converted to `T`, in order.
    fn into_components(self) -> Self::Components;
}

/// Conversion of a single component, with the semantics of a GLSL constructor.
///
/// Between numeric types this is an `as` cast. Numbers convert to `true` when they are non-zero,
/// and `true`/`false` convert to `1`/`0`.
pub trait ComponentCast<T>: Copy {
    fn cast_component(self) -> T;
}

macro_rules! numeric_casts {
    (@to $from:ty => $($to:ty),+) => {
        $(
            impl ComponentCast<$to> for $from {
                #[inline]
                fn cast_component(self) -> $to {
                    AsPrimitive::<$to>::as_(self)
                }
            }
        )+
    };
    ($($from:ty),+) => {
        $(
            numeric_casts!(@to $from => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

            impl ComponentCast<bool> for $from {
                #[inline]
                fn cast_component(self) -> bool {
                    self != 0 as $from
                }
            }

            impl<T> Part<T> for $from
            where
                $from: ComponentCast<T>,
            {
                const LEN: usize = 1;

                type Components = iter::Once<T>;

                fn into_components(self) -> Self::Components {
                    iter::once(<$from as ComponentCast<T>>::cast_component(self))
                }
            }
        )+
    };
}
numeric_casts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! bool_casts {
    ($($to:ty),+) => {
        $(
            impl ComponentCast<$to> for bool {
                #[inline]
                fn cast_component(self) -> $to {
                    AsPrimitive::<$to>::as_(u8::from(self))
                }
            }
        )+
    };
}
bool_casts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl ComponentCast<bool> for bool {
    #[inline]
    fn cast_component(self) -> bool {
        self
    }
}

impl<T> Part<T> for bool
where
    bool: ComponentCast<T>,
{
    const LEN: usize = 1;

    type Components = iter::Once<T>;

    fn into_components(self) -> Self::Components {
        iter::once(<bool as ComponentCast<T>>::cast_component(self))
    }
}

impl<T, U, const N: usize> Part<T> for Vector<U, N>
where
    U: ComponentCast<T>,
{
    const LEN: usize = N;

    type Components = iter::Map<array::IntoIter<U, N>, fn(U) -> T>;

    fn into_components(self) -> Self::Components {
        self.0
            .into_iter()
            .map(<U as ComponentCast<T>>::cast_component as fn(U) -> T)
    }
}

fn assemble<T, I, const N: usize>(components: I) -> Vector<T, N>
where
    T: Default + Copy,
    I: Iterator<Item = T>,
{
    let mut out = [T::default(); N];
    for (slot, c) in out.iter_mut().zip(components) {
        *slot = c;
    }
    Vector(out)
}

impl<T, A, B, const N: usize> From<(A, B)> for Vector<T, N>
where
    T: Default + Copy,
    A: Part<T>,
    B: Part<T>,
{
    fn from((a, b): (A, B)) -> Self {
        const { assert!(A::LEN + B::LEN == N, "component count does not match vector length") };
        assemble(a.into_components().chain(b.into_components()))
    }
}

impl<T, A, B, C, const N: usize> From<(A, B, C)> for Vector<T, N>
where
    T: Default + Copy,
    A: Part<T>,
    B: Part<T>,
    C: Part<T>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        const {
            assert!(
                A::LEN + B::LEN + C::LEN == N,
                "component count does not match vector length"
            )
        };
        assemble(
            a.into_components()
                .chain(b.into_components())
                .chain(c.into_components()),
        )
    }
}

impl<T, A, B, C, D, const N: usize> From<(A, B, C, D)> for Vector<T, N>
where
    T: Default + Copy,
    A: Part<T>,
    B: Part<T>,
    C: Part<T>,
    D: Part<T>,
{
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        const {
            assert!(
                A::LEN + B::LEN + C::LEN + D::LEN == N,
                "component count does not match vector length"
            )
        };
        assemble(
            a.into_components()
                .chain(b.into_components())
                .chain(c.into_components())
                .chain(d.into_components()),
        )
    }
}

macro_rules! truncating_from {
    ($($from:literal => $to:literal),+) => {
        $(
            /// Keeps the leading components, dropping the rest.
            impl<T: Copy> From<Vector<T, $from>> for Vector<T, $to> {
                #[inline]
                fn from(value: Vector<T, $from>) -> Self {
                    Self::from_fn(|i| value.0[i])
                }
            }
        )+
    };
}
truncating_from!(2 => 1, 3 => 1, 3 => 2, 4 => 1, 4 => 2, 4 => 3);
