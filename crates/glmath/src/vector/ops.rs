//! Implementations of `std::ops`.
//!
//! Every binary operator is available in these forms (`op` being any of `+ - * / % & | ^ << >>`,
//! as far as the component type supports it):
//!
//! - `Vector<T, N> op Vector<T, N>`: component-wise.
//! - `Vector<T, N> op T` and `T op Vector<T, N>`: the scalar is applied to every component.
//! - `Vector<T, N> op Vector<T, 1>` and `Vector<T, 1> op Vector<T, N>` (for `N` > 1): the
//!   1-vector's component is broadcast like a scalar.
//!
//! The compound assignment operators (`+=`, ...) accept the same right-hand sides.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::{
    approx::{ApproxEq, Tolerance},
    ExactEq,
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

/// Component-wise [`ExactEq`] comparison.
impl<T, const N: usize> PartialEq for Vector<T, N>
where
    T: ExactEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| T::exact_eq(*a, *b))
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: ExactEq {}

impl<T, const N: usize> PartialEq<[T; N]> for Vector<T, N>
where
    T: ExactEq,
{
    fn eq(&self, other: &[T; N]) -> bool {
        *self == Vector(*other)
    }
}

impl<T, const N: usize> PartialEq<Vector<T, N>> for [T; N]
where
    T: ExactEq,
{
    fn eq(&self, other: &Vector<T, N>) -> bool {
        Vector(*self) == *other
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, tolerance: Tolerance<T::Scalar>) -> bool {
        self.0.approx_eq(&other.0, tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise logical negation (for [`bool`]) or bitwise complement (for integers).
impl<T, const N: usize> Not for Vector<T, N>
where
    T: Not,
{
    type Output = Vector<T::Output, N>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

macro_rules! broadcast_ops {
    ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident; $($n:literal),+) => {
        $(
            impl<T> $Op<Vector<T, 1>> for Vector<T, $n>
            where
                T: $Op + Copy,
            {
                type Output = Vector<T::Output, $n>;

                #[inline]
                fn $op(self, rhs: Vector<T, 1>) -> Self::Output {
                    let [r] = rhs.0;
                    self.map(|l| l.$op(r))
                }
            }

            impl<T> $Op<Vector<T, $n>> for Vector<T, 1>
            where
                T: $Op + Copy,
            {
                type Output = Vector<T::Output, $n>;

                #[inline]
                fn $op(self, rhs: Vector<T, $n>) -> Self::Output {
                    let [l] = self.0;
                    rhs.map(|r| l.$op(r))
                }
            }

            impl<T> $OpAssign<Vector<T, 1>> for Vector<T, $n>
            where
                T: $OpAssign + Copy,
            {
                #[inline]
                fn $op_assign(&mut self, rhs: Vector<T, 1>) {
                    let [r] = rhs.0;
                    self.0.iter_mut().for_each(|lhs| lhs.$op_assign(r));
                }
            }
        )+
    };
}

macro_rules! binary_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident;)+) => {
        $(
            impl<T, const N: usize> $Op<Vector<T, N>> for Vector<T, N>
            where
                T: $Op + Copy,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $op(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l.$op(r))
                }
            }

            impl<T, const N: usize> $Op<T> for Vector<T, N>
            where
                T: $Op + Copy,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $op(self, rhs: T) -> Self::Output {
                    self.map(|l| l.$op(rhs))
                }
            }

            impl<T, const N: usize> $OpAssign<Vector<T, N>> for Vector<T, N>
            where
                T: $OpAssign,
            {
                #[inline]
                fn $op_assign(&mut self, rhs: Vector<T, N>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(lhs, rhs)| lhs.$op_assign(rhs));
                }
            }

            impl<T, const N: usize> $OpAssign<T> for Vector<T, N>
            where
                T: $OpAssign + Copy,
            {
                #[inline]
                fn $op_assign(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|lhs| lhs.$op_assign(rhs));
                }
            }

            broadcast_ops!($Op::$op, $OpAssign::$op_assign; 2, 3, 4);
        )+
    };
}

binary_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
    Shl::shl, ShlAssign::shl_assign;
    Shr::shr, ShrAssign::shr_assign;
}

// Scalar-on-the-left forms can't be written generically (`impl<T> Add<Vector<T, N>> for T` violates
// the orphan rules), so they are spelled out for every primitive.
macro_rules! scalar_lhs {
    ($t:ty: $($Op:ident::$op:ident),+) => {
        $(
            impl<const N: usize> $Op<Vector<$t, N>> for $t {
                type Output = Vector<<$t as $Op>::Output, N>;

                #[inline]
                fn $op(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|r| self.$op(r))
                }
            }
        )+
    };
}

macro_rules! float_scalar_lhs {
    ($($t:ty),+) => {
        $(
            scalar_lhs!($t: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
        )+
    };
}

macro_rules! int_scalar_lhs {
    ($($t:ty),+) => {
        $(
            scalar_lhs!(
                $t: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem,
                BitAnd::bitand, BitOr::bitor, BitXor::bitxor, Shl::shl, Shr::shr
            );
        )+
    };
}

float_scalar_lhs!(f32, f64);
int_scalar_lhs!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
scalar_lhs!(bool: BitAnd::bitand, BitOr::bitor, BitXor::bitxor);

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, *};

    #[test]
    fn vector_vector() {
        let a = vec3(6, 8, 10);
        let b = vec3(3, 2, 5);
        assert_eq!(a + b, vec3(9, 10, 15));
        assert_eq!(a - b, vec3(3, 6, 5));
        assert_eq!(a * b, vec3(18, 16, 50));
        assert_eq!(a / b, vec3(2, 4, 2));
        assert_eq!(a % b, vec3(0, 0, 0));
        assert_eq!(a & b, vec3(2, 0, 0));
        assert_eq!(a | b, vec3(7, 10, 15));
        assert_eq!(a ^ b, vec3(5, 10, 15));
        assert_eq!(vec2(1u32, 2) << vec2(3, 4), vec2(8, 32));
        assert_eq!(vec2(64u32, 2) >> vec2(3, 1), vec2(8, 1));
    }

    #[test]
    fn scalar_operands() {
        let v = vec4(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(v * 2.0, vec4(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * v, vec4(2.0, 4.0, 6.0, 8.0));
        assert_eq!(12.0 / v, vec4(12.0, 6.0, 4.0, 3.0));
        assert_eq!(v - 1.0, vec4(0.0, 1.0, 2.0, 3.0));
        assert_eq!(10.0 - v, vec4(9.0, 8.0, 7.0, 6.0));
        assert_eq!(1 << vec3(0u32, 1, 2), vec3(1, 2, 4));
        assert_eq!(7 % vec2(4i32, 5), vec2(3, 2));
        assert_eq!(true & vec2(true, false), vec2(true, false));
    }

    #[test]
    fn vec1_broadcast() {
        let v = vec3(2, 4, 6);
        let s = vec1(2);
        assert_eq!(v / s, vec3(1, 2, 3));
        assert_eq!(s * v, vec3(4, 8, 12));
        assert_eq!(s - v, vec3(0, -2, -4));
        assert_eq!(v / s, v / 2);

        let mut w = vec4(1.0, 2.0, 3.0, 4.0);
        w += vec1(0.5);
        assert_eq!(w, vec4(1.5, 2.5, 3.5, 4.5));
        w *= vec1(2.0);
        assert_eq!(w, vec4(3.0, 5.0, 7.0, 9.0));

        // Vec1 op Vec1 is the ordinary component-wise operation.
        assert_eq!(vec1(3) + vec1(4), vec1(7));
    }

    #[test]
    fn assign() {
        let mut v = vec2(12u8, 3);
        v += vec2(1, 1);
        assert_eq!(v, vec2(13, 4));
        v -= 1;
        assert_eq!(v, vec2(12, 3));
        v *= vec2(2, 3);
        assert_eq!(v, vec2(24, 9));
        v /= 3;
        assert_eq!(v, vec2(8, 3));
        v %= vec2(5, 5);
        assert_eq!(v, vec2(3, 3));
        v <<= 2;
        assert_eq!(v, vec2(12, 12));
        v >>= vec1(1);
        assert_eq!(v, vec2(6, 6));
        v &= 4;
        assert_eq!(v, vec2(4, 4));
        v |= vec2(1, 2);
        assert_eq!(v, vec2(5, 6));
        v ^= 0xff;
        assert_eq!(v, vec2(0xfa, 0xf9));
    }

    #[test]
    fn unary() {
        assert_eq!(-vec3(1.0, -2.0, 0.0), vec3(-1.0, 2.0, -0.0));
        assert_eq!(!vec2(0u8, 0xf0), vec2(0xff, 0x0f));
        assert_eq!(!vec3(true, false, true), vec3(false, true, false));
    }

    #[test]
    fn add_sub_round_trip() {
        let a = vec4(1, -7, 300, 12);
        let b = vec4(-4, 9, 1, 0);
        assert_eq!(a + b - b, a);

        let a = vec3(0.1f32, 1e6, -3.25);
        let b = vec3(0.2f32, 1e-3, 1.5);
        assert_approx_eq!(a + b - b, a).ulps(4);
    }

    #[test]
    fn nan_propagates() {
        let v = vec2(f32::NAN, 1.0) + vec2(1.0, f32::INFINITY);
        assert!(v.x.is_nan());
        assert_eq!(v.y, f32::INFINITY);
    }
}
