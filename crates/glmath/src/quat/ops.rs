use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    approx::{ApproxEq, Tolerance},
    vec3, ExactEq, Float, Number, Quat, Vec3, Vec4,
};

/// Indexes the components in storage order (`x`, `y`, `z`, `w`).
impl<T> Index<usize> for Quat<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.vec[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.vec[index]
    }
}

/// Component-wise [`ExactEq`] comparison.
impl<T: ExactEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: ExactEq> Eq for Quat<T> {}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, tolerance: Tolerance<T::Scalar>) -> bool {
        self.vec.approx_eq(&other.vec, tolerance)
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vec(self.vec + rhs.vec)
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_vec(self.vec - rhs.vec)
    }
}

impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_vec(-self.vec)
    }
}

/// Hamilton product.
///
/// The resulting rotation applies `rhs` first, then `self`. The product is not commutative.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (p, q) = (self, rhs);
        Self::new(
            p.w * q.w - p.x * q.x - p.y * q.y - p.z * q.z,
            p.w * q.x + p.x * q.w + p.y * q.z - p.z * q.y,
            p.w * q.y + p.y * q.w + p.z * q.x - p.x * q.z,
            p.w * q.z + p.z * q.w + p.x * q.y - p.y * q.x,
        )
    }
}

impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_vec(self.vec * rhs)
    }
}

impl<T: Number> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::from_vec(self.vec / rhs)
    }
}

/// Rotates a vector.
impl<T: Number> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        let qv = vec3(self.x, self.y, self.z);
        let uv = qv.cross(v);
        let uuv = qv.cross(uv);
        let two = T::ONE + T::ONE;
        v + (uv * self.w + uuv) * two
    }
}

/// Rotates the `xyz` part of a vector, leaving `w` untouched.
impl<T: Number> Mul<Vec4<T>> for Quat<T> {
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        (self * v.truncate()).extend(v.w)
    }
}

/// Rotates a vector by the inverse of the quaternion.
impl<T: Float> Mul<Quat<T>> for Vec3<T> {
    type Output = Vec3<T>;

    fn mul(self, q: Quat<T>) -> Vec3<T> {
        q.inverse() * self
    }
}

/// Rotates the `xyz` part of a vector by the inverse of the quaternion.
impl<T: Float> Mul<Quat<T>> for Vec4<T> {
    type Output = Vec4<T>;

    fn mul(self, q: Quat<T>) -> Vec4<T> {
        q.inverse() * self
    }
}

impl<T: Number> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Number> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Number> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Number> DivAssign<T> for Quat<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl Mul<Quat<$t>> for $t {
                type Output = Quat<$t>;

                #[inline]
                fn mul(self, rhs: Quat<$t>) -> Quat<$t> {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs!(f32, f64);
