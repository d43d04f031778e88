use num_traits::Float;

use crate::error::QuatError;

/// Euclidean norm split as `scale * unit`, where `scale` is the largest
/// absolute component and `unit` lies in `[1, √n]`.
///
/// Dividing by `scale` first keeps the sum of squares away from underflow
/// and overflow, so any finite non-zero input has a usable norm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScaledNorm<T> {
    pub scale: T,
    pub unit: T,
}

impl<T: Float> ScaledNorm<T> {
    /// `scale * unit`. Overflows to infinity only if the true norm does.
    #[inline]
    pub fn value(&self) -> T {
        self.scale * self.unit
    }
}

/// Scaled norm of `c`, rejecting zero and non-finite input.
pub(crate) fn scaled_norm<T: Float>(c: &[T]) -> Result<ScaledNorm<T>, QuatError> {
    let mut scale = T::zero();
    for &v in c {
        if !v.is_finite() {
            return Err(QuatError::NotFinite);
        }
        scale = scale.max(v.abs());
    }
    if scale == T::zero() {
        return Err(QuatError::ZeroMagnitude);
    }

    let mut sum = T::zero();
    for &v in c {
        let r = v / scale;
        sum = sum + r * r;
    }
    Ok(ScaledNorm {
        scale,
        unit: sum.sqrt(),
    })
}

/// Euclidean norm of `c` without intermediate underflow or overflow.
///
/// Zero for the zero vector; NaN or infinity propagate.
pub(crate) fn norm<T: Float>(c: &[T]) -> T {
    match scaled_norm(c) {
        Ok(n) => n.value(),
        Err(QuatError::ZeroMagnitude) => T::zero(),
        Err(QuatError::NotFinite) => c.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt(),
    }
}
