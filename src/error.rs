/// Errors from normalizing or inverting degenerate input.
///
/// Returned by [`Quaternion::normalize`](crate::Quaternion::normalize),
/// [`Quaternion::inverse`](crate::Quaternion::inverse),
/// [`Vector3::normalize`](crate::Vector3::normalize) and everything built on
/// them, including [`rotate`](crate::rotate()).
///
/// ```
/// use quatrot::{rotate, QuatError, Vector3};
///
/// let v = Vector3::new(1.0_f64, 0.0, 0.0);
/// let no_axis = Vector3::zeros();
/// assert_eq!(rotate(v, no_axis, 90.0).unwrap_err(), QuatError::ZeroMagnitude);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuatError {
    /// Magnitude is exactly zero, so there is no direction to normalize to.
    ZeroMagnitude,
    /// Magnitude is NaN or infinite.
    NotFinite,
}

impl core::fmt::Display for QuatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QuatError::ZeroMagnitude => write!(f, "degenerate input: magnitude is zero"),
            QuatError::NotFinite => write!(f, "degenerate input: magnitude is NaN or infinite"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuatError {}
