mod ops;

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use num_traits::AsPrimitive;

use crate::{vec3, vec4, Float, Mat3, Mat4, One, Vec3, Vec4, Vector, Zero, XYZW};

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") represent rotations in 3D space. The type does not enforce
/// unit length: the rotation constructors produce unit quaternions, but arithmetic can leave that
/// set, and [`Quat::normalize`] has to be called explicitly when a pure rotation is required.
///
/// # Layout
///
/// The components are stored like a [`Vec4`], in `x`, `y`, `z`, `w` order, with the vector part
/// first and the real part `w` last. They can be accessed as fields (`q.x`, ..., `q.w`) or by index
/// in that same order. Note that [`Quat::new`] takes the real part *first*, like mathematical
/// notation does.
///
/// # Equality
///
/// `==` compares the components bit by bit (see [`ExactEq`][crate::ExactEq]). Use
/// [`Quat::equal_within`] or the [`approx`][crate::approx] module for tolerance-based comparisons.
///
/// # Conversions
///
/// Conversions from Euler angles and from rotation matrices are lossy and easy to get wrong, so
/// they are only available as named constructors ([`Quat::from_euler`], [`Quat::from_mat3`],
/// [`Quat::from_mat4`]), never through [`From`].
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from its real part `w` and its imaginary parts `x`, `y` and `z`.
    ///
    /// No normalization is performed.
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Creates a quaternion from its real (scalar) part and its imaginary (vector) part.
    ///
    /// No normalization is performed.
    pub fn from_parts(w: T, v: Vec3<T>) -> Self {
        let [x, y, z] = v.into_array();
        Self::new(w, x, y, z)
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component is the real part.
    #[inline]
    pub const fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Returns the components as a [`Vector`], in `x`, `y`, `z`, `w` order.
    #[inline]
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the imaginary part as a 3D [`Vector`].
    pub fn xyz(&self) -> Vec3<T>
    where
        T: Copy,
    {
        self.vec.truncate()
    }

    /// Converts each component to `U` with an `as` cast.
    pub fn cast<U>(self) -> Quat<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Quat {
            vec: self.vec.cast(),
        }
    }
}

impl<T: Float> Quat<T> {
    /// Creates a quaternion representing a rotation of `angle` radians around `axis`.
    ///
    /// `axis` is expected to be normalized. A zero-length axis produces a quaternion that does not
    /// represent a rotation (and `NaN`s when it is used to rotate anything).
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let q = Quatf::from_axis_angle(std::f32::consts::FRAC_PI_2, Vec3f::Y);
    /// assert_approx_eq!(q * Vec3f::X, -Vec3f::Z).abs(1e-6);
    /// ```
    #[doc(alias = "angleAxis")]
    pub fn from_axis_angle(angle: T, axis: Vec3<T>) -> Self {
        let half = angle * T::from_f64(0.5);
        Self::from_parts(half.cos(), axis * half.sin())
    }

    /// Creates the quaternion that rotates the direction of `u` onto the direction of `v`.
    ///
    /// `u` and `v` do not have to be normalized.
    ///
    /// If `u` and `v` point in opposite directions, the rotation is by 180° around an arbitrary
    /// axis that is orthogonal to `u`. If either vector has zero length, [`Quat::IDENTITY`] is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let q = Quatf::from_rotation_arc(vec3(2.0, 0.0, 0.0), vec3(0.0, 0.0, -0.5));
    /// assert_approx_eq!(q * Vec3f::X, -Vec3f::Z).abs(1e-6);
    /// ```
    pub fn from_rotation_arc(u: Vec3<T>, v: Vec3<T>) -> Self {
        let norm_u_norm_v = (u.dot(u) * v.dot(v)).sqrt();
        let mut real = norm_u_norm_v + u.dot(v);

        let axis = if real < T::from_f64(1.0e-6) * norm_u_norm_v {
            log::trace!("rotation arc between opposite directions {u:?} and {v:?}");
            real = T::ZERO;
            if u.x.abs() > u.z.abs() {
                vec3(-u.y, u.x, T::ZERO)
            } else {
                vec3(T::ZERO, -u.z, u.y)
            }
        } else {
            u.cross(v)
        };

        // The half-angle quaternion is `(|u||v| + u·v, u×v)`, scaled by `2|u||v|cos(θ/2)`.
        Self::from_parts(real, axis).normalize()
    }

    /// Creates a quaternion from Euler angles in radians, given as `(pitch, yaw, roll)`.
    ///
    /// Pitch is the rotation around the X axis, yaw around Y, and roll around Z. The inverse
    /// operation is [`Quat::euler_angles`].
    #[doc(alias = "euler")]
    pub fn from_euler(angles: Vec3<T>) -> Self {
        let half = angles * T::from_f64(0.5);
        let [cx, cy, cz] = half.map(T::cos).into_array();
        let [sx, sy, sz] = half.map(T::sin).into_array();

        Self::new(
            cx * cy * cz + sx * sy * sz,
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
        )
    }

    /// Extracts the rotation of a 3x3 rotation matrix.
    ///
    /// The branch is picked by the largest of `4w² - 1`, `4x² - 1`, `4y² - 1` and `4z² - 1`, so
    /// the division is always by the largest available quantity.
    ///
    /// The matrix should be orthonormal with a determinant of +1, otherwise the result is not
    /// meaningful.
    #[doc(alias = "quat_cast")]
    pub fn from_mat3(m: Mat3<T>) -> Self {
        let [c0, c1, c2] = m.into_columns();
        let four_x_sq_m1 = c0[0] - c1[1] - c2[2];
        let four_y_sq_m1 = c1[1] - c0[0] - c2[2];
        let four_z_sq_m1 = c2[2] - c0[0] - c1[1];
        let four_w_sq_m1 = c0[0] + c1[1] + c2[2];

        let mut biggest_index = 0;
        let mut four_biggest_sq_m1 = four_w_sq_m1;
        for (index, candidate) in [four_x_sq_m1, four_y_sq_m1, four_z_sq_m1]
            .into_iter()
            .enumerate()
        {
            if candidate > four_biggest_sq_m1 {
                four_biggest_sq_m1 = candidate;
                biggest_index = index + 1;
            }
        }

        let biggest = (four_biggest_sq_m1 + T::ONE).sqrt() * T::from_f64(0.5);
        let mult = T::from_f64(0.25) / biggest;

        match biggest_index {
            0 => Self::new(
                biggest,
                (c1[2] - c2[1]) * mult,
                (c2[0] - c0[2]) * mult,
                (c0[1] - c1[0]) * mult,
            ),
            1 => Self::new(
                (c1[2] - c2[1]) * mult,
                biggest,
                (c0[1] + c1[0]) * mult,
                (c2[0] + c0[2]) * mult,
            ),
            2 => Self::new(
                (c2[0] - c0[2]) * mult,
                (c0[1] + c1[0]) * mult,
                biggest,
                (c1[2] + c2[1]) * mult,
            ),
            _ => Self::new(
                (c0[1] - c1[0]) * mult,
                (c2[0] + c0[2]) * mult,
                (c1[2] + c2[1]) * mult,
                biggest,
            ),
        }
    }

    /// Extracts the rotation of the upper left 3x3 part of a 4x4 matrix.
    #[doc(alias = "quat_cast")]
    pub fn from_mat4(m: Mat4<T>) -> Self {
        Self::from_mat3(m.into())
    }

    /// Creates a rotation whose local `-Z` axis points in `direction` (right-handed convention).
    ///
    /// `direction` is expected to be normalized, and must not be parallel to `up`.
    #[doc(alias = "quatLookAtRH")]
    pub fn look_at_rh(direction: Vec3<T>, up: Vec3<T>) -> Self {
        Self::look_at_impl(-direction, up)
    }

    /// Creates a rotation whose local `+Z` axis points in `direction` (left-handed convention).
    ///
    /// `direction` is expected to be normalized, and must not be parallel to `up`.
    #[doc(alias = "quatLookAtLH")]
    pub fn look_at_lh(direction: Vec3<T>, up: Vec3<T>) -> Self {
        Self::look_at_impl(direction, up)
    }

    fn look_at_impl(z: Vec3<T>, up: Vec3<T>) -> Self {
        let x = up.cross(z).normalize();
        let y = z.cross(x);
        Self::from_mat3(Mat3::from_columns([x, y, z]))
    }

    /// Converts this quaternion to a 3x3 rotation matrix.
    ///
    /// For a unit quaternion, the result is a pure rotation. Other quaternions produce a matrix
    /// that is not orthonormal.
    #[doc(alias = "mat3_cast")]
    pub fn to_mat3(self) -> Mat3<T> {
        let [x, y, z, w] = self.vec.into_array();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        let two = T::ONE + T::ONE;

        Mat3::from_columns([
            [T::ONE - two * (yy + zz), two * (xy + wz), two * (xz - wy)],
            [two * (xy - wz), T::ONE - two * (xx + zz), two * (yz + wx)],
            [two * (xz + wy), two * (yz - wx), T::ONE - two * (xx + yy)],
        ])
    }

    /// Converts this quaternion to a 4x4 rotation matrix.
    #[doc(alias = "mat4_cast")]
    pub fn to_mat4(self) -> Mat4<T> {
        self.to_mat3().into()
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> T {
        let [x1, y1, z1, w1] = self.vec.into_array();
        let [x2, y2, z2, w2] = other.vec.into_array();
        (x1 * x2 + y1 * y2) + (z1 * z2 + w1 * w2)
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(self) -> T {
        self.dot(self)
    }

    /// Returns the length of this quaternion, treated as a 4-dimensional vector.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(self) -> T {
        self.length2().sqrt()
    }

    /// Returns a copy of this quaternion scaled to unit length.
    ///
    /// A quaternion of zero length has no direction, so [`Quat::IDENTITY`] is returned for it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(Quatf::new(2.0, 0.0, 0.0, 0.0).normalize(), Quatf::IDENTITY);
    /// assert_eq!(Quatf::new(0.0, 0.0, 0.0, 0.0).normalize(), Quatf::IDENTITY);
    /// ```
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len <= T::ZERO {
            log::trace!("normalizing zero-length quaternion {self:?}");
            return Self::IDENTITY;
        }
        self * (T::ONE / len)
    }

    /// Negates the imaginary part of this quaternion.
    ///
    /// For a unit quaternion, the conjugate is the inverse rotation.
    pub fn conjugate(self) -> Self {
        Self::from_parts(self.w, -self.xyz())
    }

    /// Returns the multiplicative inverse of this quaternion.
    ///
    /// This is the [conjugate][Quat::conjugate] divided by the squared length, so it is the true
    /// inverse for quaternions of any non-zero length.
    pub fn inverse(self) -> Self {
        self.conjugate() / self.length2()
    }

    /// Returns the Hamilton product `self * other`.
    ///
    /// The resulting rotation applies `other` first, then `self`.
    pub fn cross(self, other: Self) -> Self {
        self * other
    }

    /// Rotates the 3D vector `v` by this quaternion.
    ///
    /// Equivalent to `self * v`.
    pub fn rotate_vec(self, v: Vec3<T>) -> Vec3<T> {
        self * v
    }

    /// Spherical interpolation from `self` (at `a = 0`) to `other` (at `a = 1`).
    ///
    /// Unlike [`Quat::slerp`], this does *not* take the shortest path: if the quaternions are more
    /// than 90° apart in 4D (have a negative dot product), the interpolated rotation takes the
    /// long way around. `a` is not clamped, values outside `[0, 1]` extrapolate along the same
    /// great circle.
    pub fn mix(self, other: Self, a: T) -> Self {
        self.spherical(other, self.dot(other), a)
    }

    /// Spherical linear interpolation along the shortest path from `self` to `other`.
    ///
    /// `q` and `-q` represent the same rotation, so if the dot product of the inputs is negative,
    /// `other` is negated before interpolating.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let q = Quatf::from_axis_angle(1.0, Vec3f::X);
    /// assert_eq!(q.slerp(-q, 0.5), q.slerp(q, 0.5));
    /// ```
    pub fn slerp(self, other: Self, a: T) -> Self {
        let cos_theta = self.dot(other);
        if cos_theta < T::ZERO {
            self.spherical(-other, -cos_theta, a)
        } else {
            self.spherical(other, cos_theta, a)
        }
    }

    fn spherical(self, other: Self, cos_theta: T, a: T) -> Self {
        if cos_theta > T::ONE - T::EPSILON {
            // `sin(angle)` is (close to) zero, interpolate linearly instead.
            Self::from_vec(self.vec + (other.vec - self.vec) * a)
        } else {
            let angle = cos_theta.acos();
            (self * ((T::ONE - a) * angle).sin() + other * (a * angle).sin()) / angle.sin()
        }
    }

    /// Component-wise linear interpolation between `self` and `other`.
    ///
    /// This is the cheapest interpolation, but its rotation speed is not constant and the result is
    /// not normalized.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `a` is outside of `[0, 1]`.
    pub fn lerp(self, other: Self, a: T) -> Self {
        debug_assert!(
            a >= T::ZERO && a <= T::ONE,
            "`lerp` is only defined for interpolation factors in [0, 1]"
        );
        self * (T::ONE - a) + other * a
    }

    /// Normalized linear interpolation.
    ///
    /// A cheap approximation of [`Quat::mix`] for inputs that are close to each other.
    #[doc(alias = "fastMix", alias = "nlerp")]
    pub fn fast_mix(self, other: Self, a: T) -> Self {
        (self * (T::ONE - a) + other * a).normalize()
    }

    /// Shortest-path spherical interpolation that returns the endpoints for `a <= 0` and `a >= 1`.
    #[doc(alias = "shortMix")]
    pub fn short_mix(self, other: Self, a: T) -> Self {
        if a <= T::ZERO {
            return self;
        }
        if a >= T::ONE {
            return other;
        }

        let mut cos = self.dot(other);
        let mut other = other;
        if cos < T::ZERO {
            other = -other;
            cos = -cos;
        }

        let (k0, k1) = if cos > T::ONE - T::EPSILON {
            (T::ONE - a, a)
        } else {
            let sin = (T::ONE - cos * cos).sqrt();
            let angle = sin.atan2(cos);
            let one_over_sin = T::ONE / sin;
            (
                ((T::ONE - a) * angle).sin() * one_over_sin,
                (a * angle).sin() * one_over_sin,
            )
        };
        self * k0 + other * k1
    }

    /// Applies an additional rotation of `angle` radians around `axis` in the local frame of
    /// `self` (the new rotation is applied first).
    ///
    /// `axis` is normalized if it isn't already (within a tolerance of 0.001).
    pub fn rotate(self, angle: T, axis: Vec3<T>) -> Self {
        let len = axis.length();
        let axis = if (len - T::ONE).abs() > T::from_f64(0.001) {
            axis * (T::ONE / len)
        } else {
            axis
        };
        self * Self::from_axis_angle(angle, axis)
    }

    /// Returns the Euler angles `(pitch, yaw, roll)` in radians.
    ///
    /// This is the inverse of [`Quat::from_euler`], for yaw angles in `[-π/2, π/2]`.
    #[doc(alias = "eulerAngles")]
    pub fn euler_angles(self) -> Vec3<T> {
        vec3(self.pitch(), self.yaw(), self.roll())
    }

    /// Returns the rotation around the X axis, in radians.
    pub fn pitch(self) -> T {
        let [x, y, z, w] = self.vec.into_array();
        let two = T::ONE + T::ONE;
        let sin = two * (y * z + w * x);
        let cos = w * w - x * x - y * y + z * z;
        if sin == T::ZERO && cos == T::ZERO {
            // Gimbal lock, `atan2(0, 0)` is meaningless here.
            return two * x.atan2(w);
        }
        sin.atan2(cos)
    }

    /// Returns the rotation around the Y axis, in radians.
    pub fn yaw(self) -> T {
        let [x, y, z, w] = self.vec.into_array();
        let sin = -(T::ONE + T::ONE) * (x * z - w * y);
        sin.clamp(-T::ONE, T::ONE).asin()
    }

    /// Returns the rotation around the Z axis, in radians.
    pub fn roll(self) -> T {
        let [x, y, z, w] = self.vec.into_array();
        let two = T::ONE + T::ONE;
        (two * (x * y + w * z)).atan2(w * w + x * x - y * y - z * z)
    }

    /// Returns the rotation angle of this unit quaternion, in radians (in `[0, 2π]`).
    pub fn angle(self) -> T {
        self.w.clamp(-T::ONE, T::ONE).acos() * (T::ONE + T::ONE)
    }

    /// Returns the normalized rotation axis of this unit quaternion.
    ///
    /// A rotation by 0 (or 2π) has no meaningful axis, so `(0, 0, 1)` is returned for it.
    pub fn axis(self) -> Vec3<T> {
        let sin_sq = T::ONE - self.w * self.w;
        if sin_sq <= T::ZERO {
            log::trace!("axis of rotation-free quaternion {self:?} requested");
            return Vec3::Z;
        }
        self.xyz() * (T::ONE / sin_sq.sqrt())
    }

    /// Computes the exponential of this quaternion.
    ///
    /// For a pure quaternion `(0, θn)` with unit vector `n`, this is the rotation quaternion
    /// `(cos θ, n sin θ)`.
    pub fn exp(self) -> Self {
        let v = self.xyz();
        let angle = v.length();
        let scale = self.w.exp();
        if angle < T::EPSILON {
            // `sin(angle) / angle` approaches 1.
            return Self::from_parts(scale * angle.cos(), v * scale);
        }
        Self::from_parts(scale * angle.cos(), v * (scale * angle.sin() / angle))
    }

    /// Computes the natural logarithm of this quaternion.
    ///
    /// This is the inverse of [`Quat::exp`]. For unit quaternions, the real part of the result is
    /// zero and the imaginary part is the rotation axis scaled by half the rotation angle.
    ///
    /// The logarithm of a negative real number is `ln(-w) + πi`; the logarithm of zero has a real
    /// part of negative infinity.
    pub fn log(self) -> Self {
        let v = self.xyz();
        let v_len = v.length();
        if v_len < T::EPSILON {
            let w = self.w;
            return if w > T::ZERO {
                Self::new(w.ln(), T::ZERO, T::ZERO, T::ZERO)
            } else if w < T::ZERO {
                Self::new((-w).ln(), T::PI, T::ZERO, T::ZERO)
            } else {
                Self::new(-T::INFINITY, T::ZERO, T::ZERO, T::ZERO)
            };
        }

        let t = v_len.atan2(self.w) / v_len;
        let len2 = v_len * v_len + self.w * self.w;
        Self::from_parts(T::from_f64(0.5) * len2.ln(), v * t)
    }

    /// Raises this quaternion to the power `y`.
    ///
    /// For unit quaternions, this scales the rotation angle by `y`.
    pub fn pow(self, y: T) -> Self {
        if y.abs() < T::EPSILON {
            return Self::IDENTITY;
        }

        let v_len2 = self.xyz().length2();
        if v_len2 < T::MIN_POSITIVE {
            // A real number.
            return Self::new(self.w.powf(y), T::ZERO, T::ZERO, T::ZERO);
        }

        let magnitude = self.length();
        // `atan2` is accurate for angles near 0 and π, where `acos(w)` would lose precision.
        let angle = v_len2.sqrt().atan2(self.w);
        let new_angle = angle * y;
        let mag = magnitude.powf(y - T::ONE);
        let div = new_angle.sin() / angle.sin() * mag;
        Self::from_parts(new_angle.cos() * magnitude * mag, self.xyz() * div)
    }

    /// Returns the inner control point at `curr` for [`Quat::squad`] interpolation between the
    /// keyframes `prev`, `curr` and `next`.
    pub fn intermediate(prev: Self, curr: Self, next: Self) -> Self {
        let inv = curr.inverse();
        let sum = (next * inv).log() + (prev * inv).log();
        (sum / T::from_f64(-4.0)).exp() * curr
    }

    /// Spherical quadrangle interpolation between `q1` and `q2`, using the inner control points
    /// `s1` and `s2` (see [`Quat::intermediate`]).
    ///
    /// Produces a path with continuous tangents when chained across keyframes.
    pub fn squad(q1: Self, q2: Self, s1: Self, s2: Self, h: T) -> Self {
        let two = T::ONE + T::ONE;
        q1.mix(q2, h).mix(s1.mix(s2, h), two * h * (T::ONE - h))
    }

    /// Computes the real part `w` of a unit quaternion from its imaginary part.
    ///
    /// The non-positive root is returned. If the imaginary part is longer than 1, `w` is 0.
    #[doc(alias = "extractRealComponent")]
    pub fn extract_real_component(self) -> T {
        let w = T::ONE - self.xyz().length2();
        if w < T::ZERO {
            T::ZERO
        } else {
            -w.sqrt()
        }
    }

    /// Component-wise `self < other`, in `x`, `y`, `z`, `w` order.
    pub fn less_than(self, other: Self) -> Vec4<bool> {
        self.vec.less_than(other.vec)
    }

    /// Component-wise `self <= other`, in `x`, `y`, `z`, `w` order.
    pub fn less_than_equal(self, other: Self) -> Vec4<bool> {
        self.vec.less_than_equal(other.vec)
    }

    /// Component-wise `self > other`, in `x`, `y`, `z`, `w` order.
    pub fn greater_than(self, other: Self) -> Vec4<bool> {
        self.vec.greater_than(other.vec)
    }

    /// Component-wise `self >= other`, in `x`, `y`, `z`, `w` order.
    pub fn greater_than_equal(self, other: Self) -> Vec4<bool> {
        self.vec.greater_than_equal(other.vec)
    }

    /// Component-wise exact equality, in `x`, `y`, `z`, `w` order.
    pub fn equal(self, other: Self) -> Vec4<bool> {
        self.vec.equal(other.vec)
    }

    /// Component-wise exact inequality, in `x`, `y`, `z`, `w` order.
    pub fn not_equal(self, other: Self) -> Vec4<bool> {
        self.vec.not_equal(other.vec)
    }

    /// Component-wise `|self - other| <= epsilon`, in `x`, `y`, `z`, `w` order.
    pub fn equal_within(self, other: Self, epsilon: T) -> Vec4<bool> {
        self.vec.equal_within(other.vec, epsilon)
    }

    /// Component-wise `|self - other| > epsilon`, in `x`, `y`, `z`, `w` order.
    pub fn not_equal_within(self, other: Self, epsilon: T) -> Vec4<bool> {
        self.vec.not_equal_within(other.vec, epsilon)
    }

    /// Returns which components are `NaN`, in `x`, `y`, `z`, `w` order.
    #[doc(alias = "isnan")]
    pub fn is_nan(self) -> Vec4<bool> {
        self.vec.map(T::is_nan)
    }

    /// Returns which components are infinite, in `x`, `y`, `z`, `w` order.
    #[doc(alias = "isinf")]
    pub fn is_inf(self) -> Vec4<bool> {
        self.vec.map(T::is_infinite)
    }
}

impl<T: Zero + One> Default for Quat<T> {
    /// Returns [`Quat::IDENTITY`].
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.vec
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vec
    }
}

impl<T> From<Quat<T>> for Vector<T, 4> {
    fn from(q: Quat<T>) -> Self {
        q.vec
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("w", &self.w)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, assert_approx_ne, *};

    #[test]
    fn layout() {
        let q = Quatf::new(4.0, 1.0, 2.0, 3.0);
        assert_eq!(q.into_vec(), vec4(1.0, 2.0, 3.0, 4.0));
        assert_eq!((q.x, q.y, q.z, q.w), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(q[3], 4.0);
        assert_eq!(std::mem::size_of::<Quatf>(), 16);
        assert_eq!(bytemuck::cast::<Quatf, [f32; 4]>(q), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Quatd::from_parts(4.0, vec3(1.0, 2.0, 3.0)), Quatd::new(4.0, 1.0, 2.0, 3.0));
        assert_eq!(Quatf::default(), Quatf::IDENTITY);
        assert_eq!(format!("{:?}", Quat::new(1, 2, 3, 4)), "Quat { w: 1, x: 2, y: 3, z: 4 }");
    }

    #[test]
    fn axis_angle() {
        let q = Quatf::from_axis_angle(FRAC_PI_2, Vec3f::Y);
        assert_approx_eq!(q.to_mat3() * Vec3f::X, vec3(0.0, 0.0, -1.0)).abs(1e-6);
        assert_approx_eq!(q * Vec3f::X, vec3(0.0, 0.0, -1.0)).abs(1e-6);
        assert_approx_eq!(q.angle(), FRAC_PI_2).abs(1e-6);
        assert_approx_eq!(q.axis(), Vec3f::Y).abs(1e-6);
        assert_eq!(Quatf::IDENTITY.axis(), Vec3f::Z);
        assert_eq!(Quatf::IDENTITY.angle(), 0.0);
    }

    #[test]
    fn rotation_arc() {
        let q = Quatf::from_rotation_arc(vec3(1.0, 1.0, 0.0), vec3(0.0, 3.0, 0.0));
        assert_approx_eq!(q.length(), 1.0);
        assert_approx_eq!(q * vec3(1.0, 1.0, 0.0), vec3(0.0, 2.0f32.sqrt(), 0.0)).abs(1e-6);

        // Opposite directions.
        for u in [Vec3f::X, Vec3f::Y, Vec3f::Z, vec3(1.0, -2.0, 0.5)] {
            let q = Quatf::from_rotation_arc(u, -u * 2.0);
            assert_approx_eq!(q.length(), 1.0);
            assert_approx_eq!(q * u, -u).abs(1e-5);
        }

        // Zero-length input.
        assert_eq!(Quatf::from_rotation_arc(Vec3f::ZERO, Vec3f::X), Quatf::IDENTITY);
        assert_eq!(Quatf::from_rotation_arc(Vec3f::X, Vec3f::X), Quatf::IDENTITY);
    }

    #[test]
    fn euler_round_trip() {
        for angles in [vec3(0.1f32, 0.2, 0.3), vec3(-0.7, 0.4, 1.2), Vec3f::ZERO] {
            let q = Quatf::from_euler(angles);
            assert_approx_eq!(q.length(), 1.0);
            assert_approx_eq!(q.euler_angles(), angles).abs(1e-5);
        }
        assert_approx_eq!(Quatd::from_euler(vec3(0.3, 0.0, 0.0)).pitch(), 0.3).abs(1e-12);
        assert_approx_eq!(Quatd::from_euler(vec3(0.0, 0.3, 0.0)).yaw(), 0.3).abs(1e-12);
        assert_approx_eq!(Quatd::from_euler(vec3(0.0, 0.0, 0.3)).roll(), 0.3).abs(1e-12);
    }

    #[test]
    fn pitch_singularity() {
        // Yaw of 90°, `atan2(0, 0)` would be evaluated.
        let q = Quatf::new(0.5, 0.5, 0.5, -0.5);
        assert_approx_eq!(q.yaw(), FRAC_PI_2).abs(1e-6);
        assert_approx_eq!(q.pitch(), FRAC_PI_2).abs(1e-6);
        let q = Quatf::new(0.0, 1.0, 0.0, 0.0);
        assert_approx_eq!(q.pitch(), PI);
    }

    #[test]
    fn matrix_round_trip() {
        let axes = [Vec3f::X, Vec3f::Y, Vec3f::Z, vec3(1.0, 2.0, -3.0).normalize()];
        for axis in axes {
            for angle in [0.0, 0.5, 2.0, PI - 0.01, -3.0] {
                let q = Quatf::from_axis_angle(angle, axis);
                let m = q.to_mat3();
                assert_approx_eq!(m.determinant(), 1.0).abs(1e-5);

                let back = Quatf::from_mat3(m);
                // `q` and `-q` are the same rotation.
                let back = if back.dot(q) < 0.0 { -back } else { back };
                assert_approx_eq!(back, q).abs(1e-5);
                assert_approx_eq!(back.to_mat3(), m).abs(1e-5);
                assert_approx_eq!(Quatf::from_mat4(q.to_mat4()).to_mat4(), q.to_mat4()).abs(1e-5);
            }
        }
    }

    #[test]
    fn conjugate_inverse() {
        let q = Quatf::new(1.0, 2.0, -3.0, 0.5);
        assert_eq!(q.conjugate(), Quatf::new(1.0, -2.0, 3.0, -0.5));
        assert_eq!(q.conjugate().conjugate(), q);
        assert_approx_eq!(q.inverse() * q, Quatf::IDENTITY).abs(1e-6);
        assert_approx_eq!(q * q.inverse(), Quatf::IDENTITY).abs(1e-6);
        assert_approx_eq!(q.dot(q), q.length() * q.length()).rel(1e-6);
        assert_eq!(q.length2(), 14.25);
    }

    #[test]
    fn normalize() {
        let q = Quatf::new(0.0, 3.0, 0.0, 4.0).normalize();
        assert_approx_eq!(q, Quatf::new(0.0, 0.6, 0.0, 0.8));
        assert_eq!(Quatd::new(0.0, 0.0, 0.0, 0.0).normalize(), Quatd::IDENTITY);
    }

    #[test]
    fn interpolation() {
        let a = Quatf::from_axis_angle(0.2, Vec3f::Z);
        let b = Quatf::from_axis_angle(1.4, Vec3f::Z);
        let mid = Quatf::from_axis_angle(0.8, Vec3f::Z);
        assert_approx_eq!(a.slerp(b, 0.5), mid).abs(1e-6);
        assert_approx_eq!(a.mix(b, 0.5), mid).abs(1e-6);
        assert_approx_eq!(a.short_mix(b, 0.5), mid).abs(1e-6);
        assert_approx_eq!(a.fast_mix(b, 0.5), mid).abs(1e-6);
        assert_approx_eq!(a.lerp(b, 0.5).normalize(), mid).abs(1e-6);

        // `mix` extrapolates.
        assert_approx_eq!(a.mix(b, 2.0), Quatf::from_axis_angle(2.6, Vec3f::Z)).abs(1e-5);
        assert_eq!(a.short_mix(b, -1.0), a);
        assert_eq!(a.short_mix(b, 3.0), b);

        // Endpoints.
        assert_approx_eq!(a.slerp(b, 0.0), a).abs(1e-6);
        assert_approx_eq!(a.slerp(b, 1.0), b).abs(1e-6);
    }

    #[test]
    fn slerp_identical_endpoints() {
        let q = Quatf::new(0.5, 0.5, 0.5, 0.5);
        for a in [0.0, 0.25, 0.5, 1.0, 7.0] {
            assert_eq!(q.slerp(q, a), q);
            assert_eq!(Quatf::IDENTITY.slerp(Quatf::IDENTITY, a), Quatf::IDENTITY);
        }
    }

    #[test]
    fn slerp_takes_short_path() {
        let a = Quatf::from_axis_angle(0.2, Vec3f::Y);
        let b = Quatf::from_axis_angle(0.6, Vec3f::Y);
        assert!(a.dot(-b) < 0.0);

        // Same rotation, opposite sign.
        assert_eq!(a.slerp(-a, 0.5), a.slerp(a, 0.5));
        assert_approx_eq!(a.slerp(-b, 0.5), a.slerp(b, 0.5)).abs(1e-6);
        // `mix` goes the long way around instead.
        assert_approx_ne!(a.mix(-b, 0.5), a.slerp(b, 0.5)).abs(1e-3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "interpolation factors")]
    fn lerp_out_of_range() {
        Quatf::IDENTITY.lerp(Quatf::IDENTITY, 1.5);
    }

    #[test]
    fn rotate() {
        let q = Quatf::IDENTITY.rotate(FRAC_PI_2, vec3(0.0, 0.0, 5.0));
        assert_approx_eq!(q * Vec3f::X, Vec3f::Y).abs(1e-6);
        let q = q.rotate(FRAC_PI_2, Vec3f::X);
        // The X rotation is applied first.
        assert_approx_eq!(q * Vec3f::Z, Vec3f::X).abs(1e-6);
    }

    #[test]
    fn exp_log_pow() {
        let q = Quatd::from_axis_angle(1.2, vec3(1.0, 2.0, 2.0) / 3.0);
        let log = q.log();
        assert_approx_eq!(log.w, 0.0).abs(1e-12);
        assert_approx_eq!(log.xyz(), vec3(1.0, 2.0, 2.0) / 3.0 * 0.6).abs(1e-12);
        assert_approx_eq!(log.exp(), q).abs(1e-12);

        let scaled = q * 3.0;
        assert_approx_eq!(scaled.log().exp(), scaled).abs(1e-12);

        assert_approx_eq!(q.pow(2.0), q * q).abs(1e-12);
        assert_approx_eq!(q.pow(0.5) * q.pow(0.5), q).abs(1e-12);
        assert_approx_eq!(q.pow(-1.0), q.inverse()).abs(1e-12);
        assert_eq!(q.pow(0.0), Quatd::IDENTITY);
        assert_approx_eq!(Quatd::new(4.0, 0.0, 0.0, 0.0).pow(0.5), Quatd::new(2.0, 0.0, 0.0, 0.0));

        assert_approx_eq!(Quatd::new(-1.0, 0.0, 0.0, 0.0).log(), Quatd::new(0.0, PI.into(), 0.0, 0.0))
            .abs(1e-6);
        assert_eq!(Quatd::new(0.0, 0.0, 0.0, 0.0).log().w, -f64::INFINITY);
    }

    #[test]
    fn squad() {
        let q0 = Quatd::from_axis_angle(0.0, Vec3d::Z);
        let q1 = Quatd::from_axis_angle(0.5, Vec3d::Z);
        let q2 = Quatd::from_axis_angle(1.0, Vec3d::Z);
        let q3 = Quatd::from_axis_angle(1.5, Vec3d::Z);

        // Evenly spaced rotations around one axis: the control points are the keyframes.
        let s1 = Quatd::intermediate(q0, q1, q2);
        let s2 = Quatd::intermediate(q1, q2, q3);
        assert_approx_eq!(s1, q1).abs(1e-12);
        assert_approx_eq!(s2, q2).abs(1e-12);

        assert_approx_eq!(Quatd::squad(q1, q2, s1, s2, 0.0), q1).abs(1e-12);
        assert_approx_eq!(Quatd::squad(q1, q2, s1, s2, 1.0), q2).abs(1e-12);
        assert_approx_eq!(
            Quatd::squad(q1, q2, s1, s2, 0.5),
            Quatd::from_axis_angle(0.75, Vec3d::Z)
        )
        .abs(1e-12);
    }

    #[test]
    fn look_at() {
        let dir = vec3(1.0f32, 0.0, 0.0);
        let rh = Quatf::look_at_rh(dir, Vec3f::Y);
        assert_approx_eq!(rh * -Vec3f::Z, dir).abs(1e-6);
        assert_approx_eq!(rh * Vec3f::Y, Vec3f::Y).abs(1e-6);

        let lh = Quatf::look_at_lh(dir, Vec3f::Y);
        assert_approx_eq!(lh * Vec3f::Z, dir).abs(1e-6);
        assert_approx_eq!(lh * Vec3f::Y, Vec3f::Y).abs(1e-6);
    }

    #[test]
    fn real_component() {
        let q = Quatf::from_axis_angle(1.0, Vec3f::X);
        assert_approx_eq!(q.extract_real_component(), -q.w).abs(1e-6);
        assert_eq!(Quatf::new(0.0, 2.0, 0.0, 0.0).extract_real_component(), 0.0);
    }

    #[test]
    fn relational() {
        let a = Quatf::new(1.0, 2.0, 3.0, 4.0);
        let b = Quatf::new(4.0, 3.0, 3.0, 1.0);
        // x, y, z, w
        assert_eq!(a.less_than(b), vec4(true, false, false, true));
        assert_eq!(a.less_than_equal(b), vec4(true, true, false, true));
        assert_eq!(a.greater_than(b), vec4(false, false, true, false));
        assert_eq!(a.greater_than_equal(b), vec4(false, true, true, false));
        assert!(a.equal(a).all());
        assert!(!a.not_equal(a).any());
        assert_eq!(a.equal(b), vec4(false, true, false, false));
        assert!(a.equal_within(a * 1.000001, 1e-4).all());

        let q = Quatf::new(f32::NAN, 0.0, f32::INFINITY, 1.0);
        assert_eq!(q.is_nan(), vec4(false, false, false, true));
        assert_eq!(q.is_inf(), vec4(false, true, false, false));
    }

    #[test]
    fn cast() {
        assert_eq!(Quatf::new(1.5, 0.0, -2.0, 0.25).cast::<f64>(), Quatd::new(1.5, 0.0, -2.0, 0.25));
    }
}
