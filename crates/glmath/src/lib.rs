//! Small-vector, matrix and quaternion math with GLSL semantics.
//!
//! # Overview
//!
//! This library provides the value types renderers pass around when computing transforms and
//! lighting: [`Vector`]s with 1 to 4 components, column-major [`Matrix`] types and rotation
//! [`Quat`]ernions. Operators and functions follow the semantics of the GLSL shading language
//! wherever GLSL defines them, so math can be moved between shaders and host code without
//! surprises.
//!
//! # Equality
//!
//! Equality of floating-point components is *bit-exact* (see [`ExactEq`]): `NaN` compares equal to
//! a `NaN` with the same bit pattern, and `-0.0` compares *unequal* to `+0.0`. This makes `==`
//! usable for reproducibility checks. Use the [`approx`] module (or the ULP functions in [`ulp`])
//! when tolerance-based comparison is required.
//!
//! # Goals & Non-Goals
//!
//! - Only fixed-size vectors (1 to 4 components) and matrices. Dimensions are const generic
//!   parameters, while per-dimension code is dispatched statically through [`Functor`].
//! - A single, column-major, unpadded data layout for matrices and vectors, so that buffers of
//!   them can be handed to graphics APIs as-is (via [`bytemuck`]). [`Aligned`] opts into padded
//!   storage where SIMD-friendly alignment is wanted.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types.
//! - Conversions that are easy to misuse (Euler angles and matrices to quaternions) are named
//!   constructors, never [`From`] impls.
//!
//! # Configuration
//!
//! The `double-precision` Cargo feature switches the aliases in [`precision`] from [`f32`] to
//! [`f64`] components.

pub mod approx;
pub mod func;
pub mod precision;
pub mod ulp;

mod aligned;
mod functor;
mod matrix;
mod quat;
mod scalar;
mod traits;
mod vector;

pub use aligned::*;
pub use functor::*;
pub use matrix::*;
pub use quat::*;
pub use scalar::*;
pub use traits::*;
pub use vector::*;
