//! Default-precision aliases.
//!
//! Code that doesn't care about the exact component type can use these aliases, and switch the
//! whole program between single and double precision with the `double-precision` Cargo feature.
//!
//! ```
//! use glmath::precision::*;
//!
//! let v: Vec3 = glmath::vec3(1.0, 2.0, 2.0);
//! let len: Real = v.length();
//! assert_eq!(len, 3.0);
//! ```

/// The default scalar type ([`f32`], or [`f64`] with the `double-precision` feature).
#[cfg(not(feature = "double-precision"))]
pub type Real = f32;

/// The default scalar type ([`f32`], or [`f64`] with the `double-precision` feature).
#[cfg(feature = "double-precision")]
pub type Real = f64;

pub type Vec1 = crate::Vec1<Real>;
pub type Vec2 = crate::Vec2<Real>;
pub type Vec3 = crate::Vec3<Real>;
pub type Vec4 = crate::Vec4<Real>;
pub type Quat = crate::Quat<Real>;
pub type Mat3 = crate::Mat3<Real>;
pub type Mat4 = crate::Mat4<Real>;

#[cfg(test)]
mod tests {
    use std::mem::size_of;

    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(size_of::<Vec4>(), 4 * size_of::<Real>());
        assert_eq!(size_of::<Quat>(), 4 * size_of::<Real>());
        assert_eq!(size_of::<Mat4>(), 16 * size_of::<Real>());

        #[cfg(feature = "double-precision")]
        assert_eq!(size_of::<Real>(), 8);
        #[cfg(not(feature = "double-precision"))]
        assert_eq!(size_of::<Real>(), 4);
    }
}
