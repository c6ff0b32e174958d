use crate::ulp::Ulp;

use super::{ApproxEq, Tolerance};

macro_rules! float_approx_eq {
    ($($f:ty),+) => {
        $(
            impl ApproxEq for $f {
                type Scalar = Self;

                fn approx_eq(&self, other: &Self, tolerance: Tolerance<Self>) -> bool {
                    let (a, b) = (*self, *other);
                    if a.is_nan() || b.is_nan() {
                        return false;
                    }
                    if a.is_infinite() || b.is_infinite() {
                        // `inf == inf`, `-inf == -inf`, `inf != -inf`, except for ULP checks,
                        // where `MAX` is one step below `inf`.
                        if let Tolerance::Ulps(ulps) = tolerance {
                            return u64::from(a.float_distance(b)) <= u64::from(ulps);
                        }
                        return a == b;
                    }

                    match tolerance {
                        Tolerance::Abs(abs) => (a - b).abs() <= abs,
                        Tolerance::Rel(rel) => (a - b).abs() <= a.abs().max(b.abs()) * rel,
                        Tolerance::Ulps(ulps) => u64::from(a.float_distance(b)) <= u64::from(ulps),
                    }
                }
            }
        )+
    };
}
float_approx_eq!(f32, f64);

impl<T: ApproxEq> ApproxEq for [T] {
    type Scalar = T::Scalar;

    /// Slices of different lengths are never equal.
    fn approx_eq(&self, other: &Self, tolerance: Tolerance<T::Scalar>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, tolerance: Tolerance<T::Scalar>) -> bool {
        self.as_slice().approx_eq(other.as_slice(), tolerance)
    }
}
