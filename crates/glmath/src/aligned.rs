use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{Mat3f, Quatf, Vec2f, Vec3f, Vec4f};

/// Wrapper that stores a value at a 16-byte aligned address.
///
/// The plain vector and matrix types are *packed*: a [`Vec3f`] occupies 12 bytes with 4-byte
/// alignment, matching the layout of `[f32; 3]`. Wrapping it in [`Aligned`] pads it to 16 bytes,
/// which matches the `vec3` layout of std140 uniform blocks and allows aligned SIMD loads.
///
/// Arithmetic is performed on the inner value, which is reachable through [`Deref`] or the public
/// field.
///
/// # Examples
///
/// ```
/// # use glmath::*;
/// let a = Aligned(vec3(1.0f32, 2.0, 3.0));
/// assert_eq!(std::mem::size_of_val(&a), 16);
/// assert_eq!(a.length2(), 14.0);
/// assert_eq!(*a + vec3(1.0, 1.0, 1.0), vec3(2.0, 3.0, 4.0));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C, align(16))]
pub struct Aligned<V>(pub V);

pub type AlignedVec2f = Aligned<Vec2f>;
pub type AlignedVec3f = Aligned<Vec3f>;
pub type AlignedVec4f = Aligned<Vec4f>;
pub type AlignedMat3f = Aligned<Mat3f>;
pub type AlignedQuatf = Aligned<Quatf>;

impl<V> Aligned<V> {
    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<V> Deref for Aligned<V> {
    type Target = V;

    #[inline]
    fn deref(&self) -> &V {
        &self.0
    }
}

impl<V> DerefMut for Aligned<V> {
    #[inline]
    fn deref_mut(&mut self) -> &mut V {
        &mut self.0
    }
}

impl<V> From<V> for Aligned<V> {
    #[inline]
    fn from(value: V) -> Self {
        Self(value)
    }
}

impl<V: fmt::Debug> fmt::Debug for Aligned<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
