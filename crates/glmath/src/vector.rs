use std::{array, fmt};

use num_traits::AsPrimitive;

use crate::{Arithmetic, Dim, ExactEq, Float, Functor, MinMax, Number, One, Sqrt, Zero};

mod compose;
mod ops;
mod view;

pub use compose::{ComponentCast, Part};
pub use view::*;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f32`] elements.
pub type Vec1f = Vec1<f32>;
/// A 1-dimensional vector with [`f64`] elements.
pub type Vec1d = Vec1<f64>;
/// A 1-dimensional vector with [`i32`] elements.
pub type Vec1i = Vec1<i32>;
/// A 1-dimensional vector with [`u32`] elements.
pub type Vec1u = Vec1<u32>;
/// A 1-dimensional vector with [`bool`] elements.
pub type Vec1b = Vec1<bool>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`u32`] elements.
pub type Vec2u = Vec2<u32>;
/// A 2-dimensional vector with [`bool`] elements.
pub type Vec2b = Vec2<bool>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vec3<u32>;
/// A 3-dimensional vector with [`bool`] elements.
pub type Vec3b = Vec3<bool>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vec4<u32>;
/// A 4-dimensional vector with [`bool`] elements.
pub type Vec4b = Vec4<bool>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - Tuples of scalars and smaller vectors can be assembled into a vector as long as their
///   component counts add up to `N` (see [`Part`]): `Vec3f::from((vec2(1.0, 2.0), 3.0))`.
/// - Larger vectors convert into smaller ones with [`From`], dropping the trailing components.
///   There is no conversion in the other direction: missing components have to be supplied
///   explicitly (eg. with [`Vector::extend`] or a tuple).
/// - [`Vector::cast`] converts every component to another numeric type with an `as` cast.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` can be used to obtain unit vectors
///   pointing in the given direction.
///
/// # Element Access
///
/// Vector elements can be accessed and inspected in a few different ways:
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w` (as far as the vector has them).
///   - Aliases `r`, `g`, `b`, and `a` are also provided.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays, and panic when the index
///   is out of bounds. [`Vector::get`] and [`Vector::get_mut`] return [`Option`]s instead.
/// - The [`AsRef`] and [`AsMut`] impls can be used to access the underlying elements as a slice or
///   array.
/// - A [`From`] impl allows conversion from a [`Vector`] to an array of the same length.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] allow the same
///   operations without requiring type annotations.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Equality
///
/// `==` compares components with [`ExactEq`], so floating-point components are compared by bit
/// pattern. [`Vector::equal`] and [`Vector::not_equal`] return the per-component results instead.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 1> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// The number of components in this vector type.
    pub const LEN: usize = N;

    /// Creates a vector from an array of its components.
    ///
    /// This is the `const` equivalent of the [`From`] impl.
    #[inline]
    pub const fn from_array(array: [T; N]) -> Self {
        Self(array)
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        Vector::from_fn(|i| (self.0[i], other.0[i]))
    }

    /// Converts each element to `U` with an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec3(1.9f32, -2.5, 300.0).cast::<i32>(), vec3(1, -2, 300));
    /// assert_eq!(vec2(300, 2).cast::<u8>(), vec2(44, 2));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|elem| elem.as_())
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = vec2(4, 5);
    /// assert_eq!(v.get(1), Some(&5));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_array()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Returns a pointer to the first component.
    ///
    /// The `N` components are stored contiguously, in `x`, `y`, `z`, `w` order, without padding.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.0.as_ptr()
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often shorter
    /// and requires no type annotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec3(2.0, -3.0, 6.0).length(), 7.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        let mut diff = self;
        for (d, o) in diff.0.iter_mut().zip(other.0) {
            *d = *d - o;
        }
        diff.length()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A zero-length vector yields `NaN` components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        let len = self.length();
        self.map(|elem| elem / len)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let lo = vec3(0.25, f32::NAN, -8.0).min(vec3(0.5, 1.0, f32::NEG_INFINITY));
    /// assert_eq!(lo, vec3(0.25, 1.0, f32::NEG_INFINITY));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let hi = vec3(0.25, f32::NAN, -8.0).max(vec3(0.5, 1.0, f32::NEG_INFINITY));
    /// assert_eq!(hi, vec3(0.5, 1.0, -8.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = vec3(-1.0, 0.5, 7.0);
    /// assert_eq!(v.clamp(Vector::splat(0.0), Vector::splat(1.0)), vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Adds one to every component, returning the updated vector (prefix `++`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mut v = vec2(1, 5);
    /// assert_eq!(*v.increment().increment(), vec2(3, 7));
    /// ```
    pub fn increment(&mut self) -> &mut Self
    where
        T: Arithmetic,
    {
        for elem in &mut self.0 {
            *elem = *elem + T::ONE;
        }
        self
    }

    /// Subtracts one from every component, returning the updated vector (prefix `--`).
    pub fn decrement(&mut self) -> &mut Self
    where
        T: Arithmetic,
    {
        for elem in &mut self.0 {
            *elem = *elem - T::ONE;
        }
        self
    }

    /// Adds one to every component, returning the value from before the update (postfix `++`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mut v = vec2(1.0, 5.0);
    /// assert_eq!(v.post_increment(), vec2(1.0, 5.0));
    /// assert_eq!(v, vec2(2.0, 6.0));
    /// ```
    pub fn post_increment(&mut self) -> Self
    where
        T: Arithmetic,
    {
        let old = *self;
        self.increment();
        old
    }

    /// Subtracts one from every component, returning the value from before the update (postfix
    /// `--`).
    pub fn post_decrement(&mut self) -> Self
    where
        T: Arithmetic,
    {
        let old = *self;
        self.decrement();
        old
    }
}

/// Component-wise relational functions.
///
/// These mirror the GLSL functions of the same name: instead of a single [`bool`], they return a
/// boolean vector with one result per component. Use [`Vector::any`] and [`Vector::all`] to reduce
/// the result.
impl<T: Copy, const N: usize> Vector<T, N>
where
    Dim<N>: Functor<N>,
{
    /// Returns `self[i] < other[i]` for each component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec3(1, 5, 3).less_than(vec3(2, 5, 0)), vec3(true, false, false));
    /// ```
    pub fn less_than(self, other: Self) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        <Dim<N> as Functor<N>>::call2(|a, b| a < b, self, other)
    }

    /// Returns `self[i] <= other[i]` for each component.
    pub fn less_than_equal(self, other: Self) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        <Dim<N> as Functor<N>>::call2(|a, b| a <= b, self, other)
    }

    /// Returns `self[i] > other[i]` for each component.
    pub fn greater_than(self, other: Self) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        <Dim<N> as Functor<N>>::call2(|a, b| a > b, self, other)
    }

    /// Returns `self[i] >= other[i]` for each component.
    pub fn greater_than_equal(self, other: Self) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        <Dim<N> as Functor<N>>::call2(|a, b| a >= b, self, other)
    }

    /// Compares each pair of components with [`ExactEq`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = vec3(f32::NAN, 0.0, 1.0);
    /// assert_eq!(v.equal(v), Vec3b::splat(true));
    /// assert_eq!(v.equal(vec3(f32::NAN, -0.0, 1.0)), vec3(true, false, true));
    /// ```
    pub fn equal(self, other: Self) -> Vector<bool, N>
    where
        T: ExactEq,
    {
        <Dim<N> as Functor<N>>::call2(T::exact_eq, self, other)
    }

    /// Negation of [`Vector::equal`].
    pub fn not_equal(self, other: Self) -> Vector<bool, N>
    where
        T: ExactEq,
    {
        <Dim<N> as Functor<N>>::call2(|a: T, b| !a.exact_eq(b), self, other)
    }

    /// Returns `|self[i] - other[i]| < epsilon` for each component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let a = vec2(1.0, 2.0);
    /// let b = vec2(1.05, 2.5);
    /// assert_eq!(a.equal_within(b, 0.1), vec2(true, false));
    /// ```
    pub fn equal_within(self, other: Self, epsilon: T) -> Vector<bool, N>
    where
        T: Float,
    {
        <Dim<N> as Functor<N>>::call2(|a: T, b| (a - b).abs() < epsilon, self, other)
    }

    /// Returns `|self[i] - other[i]| >= epsilon` for each component.
    pub fn not_equal_within(self, other: Self, epsilon: T) -> Vector<bool, N>
    where
        T: Float,
    {
        <Dim<N> as Functor<N>>::call2(|a: T, b| (a - b).abs() >= epsilon, self, other)
    }
}

impl<const N: usize> Vector<bool, N> {
    /// Returns whether any component is `true`.
    pub fn any(self) -> bool {
        self.0.into_iter().any(|b| b)
    }

    /// Returns whether every component is `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert!(vec3(true, true, true).all());
    /// assert!(!vec3(true, false, true).all());
    /// assert!(vec3(true, false, true).any());
    /// ```
    pub fn all(self) -> bool {
        self.0.into_iter().all(|b| b)
    }

    /// Component-wise logical *and*.
    ///
    /// The result is a boolean vector, not a reduction. Both operands are always evaluated.
    pub fn and(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i] && other.0[i])
    }

    /// Component-wise logical *or*.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let a = vec2(true, false);
    /// let b = vec2(false, false);
    /// assert_eq!(a.or(b), vec2(true, false));
    /// assert_eq!(a.and(b), vec2(false, false));
    /// ```
    pub fn or(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i] || other.0[i])
    }
}

impl<T> Vector<T, 1> {
    /// Appends another value to the vector, yielding a vector with 2 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = vec1(-1.0).extend(5.0);
    /// assert_eq!(v, vec2(-1.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        [x, value].into()
    }
}

impl<T> Vector<T, 2> {
    /// Removes the last element of this vector, yielding a vector with a single element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = vec2(-1.0, 2.0).truncate();
    /// assert_eq!(v, vec1(-1.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, ..] = self.into_array();
        [x].into()
    }

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let (x, y) = (Vec3f::X, Vec3f::Y);
    /// assert_eq!(x.cross(y), Vec3f::Z);
    /// // `==` is bit-exact, and the zero components of the result are `+0.0`.
    /// assert_eq!(y.cross(x), vec3(0.0, 0.0, -1.0));
    /// assert_ne!(y.cross(x), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let v = vec4(1, 2, 3, 4).truncate();
    /// assert_eq!(v, vec3(1, 2, 3));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec4(0, 1, 2, 3);
        assert_eq!(v.r, 0);
        assert_eq!(v.g, 1);
        assert_eq!(v.b, 2);
        assert_eq!(v.a, 3);

        v.g = 777;
        assert_eq!(v.y, 777);
        assert_eq!(v[1], 777);
        v[3] = 9;
        assert_eq!(v.w, 9);
        assert_eq!(v.a, 9);
        v.z = -1;
        assert_eq!(v, [0, 777, -1, 9]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = vec3(1, 2, 3);
        let _ = v[Vec3i::LEN];
    }

    #[test]
    fn layout() {
        assert_eq!(mem::size_of::<Vec3f>(), 12);
        assert_eq!(mem::size_of::<Vec4d>(), 32);
        assert_eq!(mem::align_of::<Vec3f>(), mem::align_of::<f32>());

        let v = vec3(1.0f32, 2.0, 3.0);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(&bytes[4..8], &2.0f32.to_ne_bytes());
        let ptr = v.as_ptr();
        assert_eq!(unsafe { *ptr.add(2) }, 3.0);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::Y), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);
    }

    #[test]
    fn cast() {
        assert_eq!(vec4(0.5f64, 1.5, -1.5, 2.0).cast::<f32>(), vec4(0.5f32, 1.5, -1.5, 2.0));
        assert_eq!(vec2(-1i32, 7).cast::<u32>(), vec2(u32::MAX, 7));
        assert_eq!(vec1(3u8).cast::<f64>(), vec1(3.0));
    }

    #[test]
    fn increment_decrement() {
        let mut v = vec3(0, 10, -3);
        v.increment();
        assert_eq!(v, vec3(1, 11, -2));
        assert_eq!(v.post_decrement(), vec3(1, 11, -2));
        assert_eq!(v, vec3(0, 10, -3));
        v.decrement().decrement();
        assert_eq!(v, vec3(-2, 8, -5));

        let mut u = vec2(0u32, 41);
        assert_eq!(u.post_increment(), vec2(0, 41));
        assert_eq!(*u.increment(), vec2(2, 43));
        u.decrement();
        assert_eq!(u.post_decrement(), vec2(1, 42));
        assert_eq!(u, vec2(0, 41));

        let mut bytes = Vector::<u8, 4>::splat(254);
        bytes.increment();
        assert_eq!(bytes, [255; 4]);
    }

    #[test]
    fn relational() {
        let a = vec4(1.0, 2.0, 3.0, f32::NAN);
        let b = vec4(3.0, 2.0, 1.0, 0.0);
        assert_eq!(a.less_than(b), vec4(true, false, false, false));
        assert_eq!(a.less_than_equal(b), vec4(true, true, false, false));
        assert_eq!(a.greater_than(b), vec4(false, false, true, false));
        assert_eq!(a.greater_than_equal(b), vec4(false, true, true, false));

        assert!(a.equal(a).all());
        assert!(!a.not_equal(a).any());
        assert_eq!(a.not_equal(b), vec4(true, false, true, true));
    }

    #[test]
    fn equality_is_bitwise() {
        assert_eq!(vec2(f64::NAN, 1.0), vec2(f64::NAN, 1.0));
        assert_ne!(vec2(0.0, 1.0), vec2(-0.0, 1.0));
        assert_eq!(vec3(true, false, true), [true, false, true]);
    }

    #[test]
    fn truncate_extend() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!(v.truncate(), vec3(1, 2, 3));
        assert_eq!(v.truncate().truncate().truncate(), vec1(1));
        assert_eq!(vec1(1).extend(2).extend(3).extend(4), v);
    }

    #[test]
    fn cross_signed_zeros() {
        let c = Vec3f::Y.cross(Vec3f::X);
        assert_eq!(c, vec3(0.0, 0.0, -1.0));
        assert_eq!(c.equal(-Vec3f::Z), vec3(false, false, true));
        assert!(c.equal_within(-Vec3f::Z, f32::EPSILON).all());
    }

    #[test]
    fn distance() {
        assert_eq!(vec3(1.0, 2.0, 3.0).distance(vec3(1.0, 2.0, 3.0)), 0.0);
        assert_eq!(vec2(0.0f64, 3.0).distance(vec2(4.0, 0.0)), 5.0);
    }
}
