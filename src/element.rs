//! Scalar element types the kernels are instantiated over.
//!
//! The kernels are generic and monomorphized per element type, so integral
//! and floating-point instantiations share one implementation instead of a
//! runtime type tag and a branch inside every loop body.

use std::fmt;

use rand::Rng;

/// A scalar type that can live in a [`NumVec`](crate::vector::NumVec) and be
/// folded by the combine kernels.
///
/// Integral implementations use wrapping arithmetic: the reduction is over
/// the ring of machine integers, and a multiply chain over a large vector
/// wraps rather than aborting the run. Floating-point implementations use
/// plain IEEE-754 `+` and `*`.
pub trait Element: Copy + Default + PartialEq + Send + Sync + fmt::Debug + 'static {
    /// Label used in benchmark reports ("i32", "f32", ...).
    const NAME: &'static str;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Combining rule for [`CombineOp::Add`](crate::ops::CombineOp).
    fn add(self, rhs: Self) -> Self;

    /// Combining rule for [`CombineOp::Mul`](crate::ops::CombineOp).
    fn mul(self, rhs: Self) -> Self;

    /// One independent uniform draw. Integral types sample the closed range
    /// `[lo, hi]`; floating-point types sample the half-open range `[lo, hi)`.
    fn sample<R: Rng + ?Sized>(rng: &mut R, lo: Self, hi: Self) -> Self;
}

macro_rules! impl_element_int {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                const NAME: &'static str = stringify!($ty);

                #[inline(always)]
                fn zero() -> Self {
                    0
                }

                #[inline(always)]
                fn one() -> Self {
                    1
                }

                #[inline(always)]
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                fn sample<R: Rng + ?Sized>(rng: &mut R, lo: Self, hi: Self) -> Self {
                    rng.gen_range(lo..=hi)
                }
            }
        )*
    };
}

macro_rules! impl_element_float {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                const NAME: &'static str = stringify!($ty);

                #[inline(always)]
                fn zero() -> Self {
                    0.0
                }

                #[inline(always)]
                fn one() -> Self {
                    1.0
                }

                #[inline(always)]
                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                fn sample<R: Rng + ?Sized>(rng: &mut R, lo: Self, hi: Self) -> Self {
                    rng.gen_range(lo..hi)
                }
            }
        )*
    };
}

impl_element_int!(i32, i64);
impl_element_float!(f32, f64);
