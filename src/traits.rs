use core::fmt::{Debug, Display};
use num_traits::Float;

/// Trait for the floating-point element type of [`Quaternion`](crate::Quaternion)
/// and [`Vector3`](crate::Vector3).
///
/// Implemented for `f32` and `f64`. Provides `sqrt`, `sin_cos`, `to_radians`,
/// etc. through [`Float`], plus a cast from `f64` literals that cannot fail
/// for real floats.
pub trait FloatScalar: Float + Debug + Display + Default {
    /// Convert an `f64` constant into `Self` (rounding for `f32`).
    fn from_literal(v: f64) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline]
                fn from_literal(v: f64) -> $t {
                    v as $t
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
