use crate::error::QuatError;
use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;
use crate::vector::Vector3;

/// Rotate `v` by `angle` degrees about `axis`.
///
/// Builds the unit quaternion `q` for the axis-angle pair, forms the
/// sandwich product `q v q*` with `v` embedded as a pure-imaginary
/// quaternion, and returns the imaginary part of the result. `axis` need
/// not be unit length, but must be non-zero and finite.
///
/// ```
/// use quatrot::{rotate, Vector3};
///
/// let r = rotate(Vector3::new(1.0_f64, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0), 90.0).unwrap();
/// assert!(r.x.abs() < 1e-12);
/// assert!((r.y - 1.0).abs() < 1e-12);
/// ```
pub fn rotate<T: FloatScalar>(
    v: Vector3<T>,
    axis: Vector3<T>,
    angle: T,
) -> Result<Vector3<T>, QuatError> {
    rotate_radians(v, axis, angle.to_radians())
}

/// Same as [`rotate`], with `angle` in radians.
pub fn rotate_radians<T: FloatScalar>(
    v: Vector3<T>,
    axis: Vector3<T>,
    angle: T,
) -> Result<Vector3<T>, QuatError> {
    let q = Quaternion::from_unit_axis_angle(axis.normalize()?, angle).normalize()?;
    let q_conj = q.conjugate();
    let p = q * v * q_conj;
    Ok(Vector3::from_quaternion_imaginary(&p))
}
