//! Per-dimension dispatch of scalar functions over vector components.
//!
//! Every elementwise operation in [`func`][crate::func] (and the vector relational functions)
//! goes through [`Functor`], which is implemented separately for each supported dimension. Each
//! implementation destructures the component array and calls the function once per component, so
//! there is no loop and no branch on `N` left after monomorphization.

use crate::{vec1, vec2, vec3, vec4, Vector};

/// Type-level marker for a vector dimension.
///
/// Only `Dim<1>` to `Dim<4>` implement [`Functor`], so adding a `Dim<N>: Functor<N>` bound to a
/// generic function restricts it to the supported vector sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dim<const N: usize>;

/// Applies scalar functions to each component of `N`-dimensional vectors.
///
/// # Examples
///
/// ```
/// # use glmath::*;
/// let v = <Dim<3> as Functor<3>>::call1(|c: i32| c * 2, vec3(1, 2, 3));
/// assert_eq!(v, vec3(2, 4, 6));
///
/// let m = <Dim<2> as Functor<2>>::call2(Ord::max, vec2(1, 5), vec2(4, 2));
/// assert_eq!(m, vec2(4, 5));
/// ```
pub trait Functor<const N: usize> {
    /// Applies a unary function to every component of `v`.
    fn call1<T, R, F>(f: F, v: Vector<T, N>) -> Vector<R, N>
    where
        F: FnMut(T) -> R;

    /// Applies a binary function to every pair of corresponding components of `a` and `b`.
    fn call2<T, U, R, F>(f: F, a: Vector<T, N>, b: Vector<U, N>) -> Vector<R, N>
    where
        F: FnMut(T, U) -> R;

    /// Applies a binary function to every component of `a`, passing `b` as the second argument.
    fn call2_scalar<T, U, R, F>(f: F, a: Vector<T, N>, b: U) -> Vector<R, N>
    where
        U: Copy,
        F: FnMut(T, U) -> R;
}

impl Functor<1> for Dim<1> {
    #[inline]
    fn call1<T, R, F>(mut f: F, v: Vector<T, 1>) -> Vector<R, 1>
    where
        F: FnMut(T) -> R,
    {
        let [x] = v.into_array();
        vec1(f(x))
    }

    #[inline]
    fn call2<T, U, R, F>(mut f: F, a: Vector<T, 1>, b: Vector<U, 1>) -> Vector<R, 1>
    where
        F: FnMut(T, U) -> R,
    {
        let [ax] = a.into_array();
        let [bx] = b.into_array();
        vec1(f(ax, bx))
    }

    #[inline]
    fn call2_scalar<T, U, R, F>(mut f: F, a: Vector<T, 1>, b: U) -> Vector<R, 1>
    where
        U: Copy,
        F: FnMut(T, U) -> R,
    {
        let [ax] = a.into_array();
        vec1(f(ax, b))
    }
}

impl Functor<2> for Dim<2> {
    #[inline]
    fn call1<T, R, F>(mut f: F, v: Vector<T, 2>) -> Vector<R, 2>
    where
        F: FnMut(T) -> R,
    {
        let [x, y] = v.into_array();
        vec2(f(x), f(y))
    }

    #[inline]
    fn call2<T, U, R, F>(mut f: F, a: Vector<T, 2>, b: Vector<U, 2>) -> Vector<R, 2>
    where
        F: FnMut(T, U) -> R,
    {
        let [ax, ay] = a.into_array();
        let [bx, by] = b.into_array();
        vec2(f(ax, bx), f(ay, by))
    }

    #[inline]
    fn call2_scalar<T, U, R, F>(mut f: F, a: Vector<T, 2>, b: U) -> Vector<R, 2>
    where
        U: Copy,
        F: FnMut(T, U) -> R,
    {
        let [ax, ay] = a.into_array();
        vec2(f(ax, b), f(ay, b))
    }
}

impl Functor<3> for Dim<3> {
    #[inline]
    fn call1<T, R, F>(mut f: F, v: Vector<T, 3>) -> Vector<R, 3>
    where
        F: FnMut(T) -> R,
    {
        let [x, y, z] = v.into_array();
        vec3(f(x), f(y), f(z))
    }

    #[inline]
    fn call2<T, U, R, F>(mut f: F, a: Vector<T, 3>, b: Vector<U, 3>) -> Vector<R, 3>
    where
        F: FnMut(T, U) -> R,
    {
        let [ax, ay, az] = a.into_array();
        let [bx, by, bz] = b.into_array();
        vec3(f(ax, bx), f(ay, by), f(az, bz))
    }

    #[inline]
    fn call2_scalar<T, U, R, F>(mut f: F, a: Vector<T, 3>, b: U) -> Vector<R, 3>
    where
        U: Copy,
        F: FnMut(T, U) -> R,
    {
        let [ax, ay, az] = a.into_array();
        vec3(f(ax, b), f(ay, b), f(az, b))
    }
}

impl Functor<4> for Dim<4> {
    #[inline]
    fn call1<T, R, F>(mut f: F, v: Vector<T, 4>) -> Vector<R, 4>
    where
        F: FnMut(T) -> R,
    {
        let [x, y, z, w] = v.into_array();
        vec4(f(x), f(y), f(z), f(w))
    }

    #[inline]
    fn call2<T, U, R, F>(mut f: F, a: Vector<T, 4>, b: Vector<U, 4>) -> Vector<R, 4>
    where
        F: FnMut(T, U) -> R,
    {
        let [ax, ay, az, aw] = a.into_array();
        let [bx, by, bz, bw] = b.into_array();
        vec4(f(ax, bx), f(ay, by), f(az, bz), f(aw, bw))
    }

    #[inline]
    fn call2_scalar<T, U, R, F>(mut f: F, a: Vector<T, 4>, b: U) -> Vector<R, 4>
    where
        U: Copy,
        F: FnMut(T, U) -> R,
    {
        let [ax, ay, az, aw] = a.into_array();
        vec4(f(ax, b), f(ay, b), f(az, b), f(aw, b))
    }
}
