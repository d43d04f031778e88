use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::QuatError;
use crate::norm::{norm, scaled_norm};
use crate::traits::FloatScalar;
use crate::vector::Vector3;

/// Quaternion `w + xi + yj + zk`.
///
/// Scalar-first convention: `w` is the scalar part and `(x, y, z)` the
/// imaginary part. Not constrained to unit length; call
/// [`normalize`](Self::normalize) before using one as a rotation.
///
/// ```
/// use quatrot::{Quaternion, Vector3};
///
/// let q = Quaternion::from_axis_angle(Vector3::new(0.0_f64, 0.0, 1.0), 90.0).unwrap();
/// let v = q.rotate_vector(Vector3::new(1.0, 0.0, 0.0));
/// assert!((v.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Create a quaternion from components.
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Identity quaternion (no rotation).
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// The zero quaternion.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Rotation of `angle` degrees about `axis`.
    ///
    /// `axis` need not be unit length; it is normalized first, which fails
    /// for a zero or non-finite axis.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Result<Self, QuatError> {
        let axis = axis.normalize()?;
        Ok(Self::from_unit_axis_angle(axis, angle.to_radians()))
    }

    /// Rotation of `angle` radians about `axis`, which must already be unit length.
    #[inline]
    pub fn from_unit_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let half = angle / (T::one() + T::one());
        let (s, c) = half.sin_cos();
        Self::new(c, axis.x * s, axis.y * s, axis.z * s)
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Scalar part `w`.
    #[inline]
    pub fn scalar(&self) -> T {
        self.w
    }

    /// Imaginary part `(x, y, z)`.
    #[inline]
    pub fn imaginary(&self) -> Vector3<T> {
        Vector3::from_quaternion_imaginary(self)
    }

    /// Conjugate: `(w, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Squared magnitude: `w² + x² + y² + z²`. Not rescaled, so it can
    /// underflow or overflow where [`magnitude`](Self::magnitude) does not.
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    /// Magnitude (Euclidean norm of the 4-tuple).
    #[inline]
    pub fn magnitude(&self) -> T {
        norm(&[self.w, self.x, self.y, self.z])
    }

    /// Whether the magnitude is within `tol` of one.
    #[inline]
    pub fn is_unit(&self, tol: T) -> bool {
        (self.magnitude() - T::one()).abs() <= tol
    }

    /// Normalize to a unit quaternion.
    ///
    /// Any finite non-zero quaternion normalizes, however small or large its
    /// components.
    ///
    /// ```
    /// use quatrot::{QuatError, Quaternion};
    ///
    /// let q = Quaternion::new(1.0_f64, 2.0, 3.0, 4.0).normalize().unwrap();
    /// assert!((q.magnitude() - 1.0).abs() < 1e-12);
    /// assert_eq!(Quaternion::<f64>::zero().normalize(), Err(QuatError::ZeroMagnitude));
    /// ```
    #[inline]
    pub fn normalize(&self) -> Result<Self, QuatError> {
        let n = scaled_norm(&[self.w, self.x, self.y, self.z])?;
        Ok(*self / n.scale / n.unit)
    }

    /// Normalize in place. `self` is left untouched on error.
    #[inline]
    pub fn normalize_mut(&mut self) -> Result<(), QuatError> {
        *self = self.normalize()?;
        Ok(())
    }

    /// Inverse: `conjugate / magnitude²`.
    ///
    /// For unit quaternions this equals the conjugate.
    #[inline]
    pub fn inverse(&self) -> Result<Self, QuatError> {
        let n = scaled_norm(&[self.w, self.x, self.y, self.z])?;
        Ok(self.conjugate() / n.scale / (n.unit * n.unit) / n.scale)
    }

    /// Dot product of two quaternions.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

// ── Rotation ─────────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Sandwich product `q v q*`, returned as a vector.
    ///
    /// `self` must be unit length; the scalar part of the product is dropped.
    #[inline]
    pub fn rotate_vector(&self, v: Vector3<T>) -> Vector3<T> {
        let p = *self * v * self.conjugate();
        Vector3::from_quaternion_imaginary(&p)
    }

    /// Convert back to axis-angle with the angle in degrees.
    ///
    /// Returns `(axis, angle)` where `axis` is a unit vector. For the identity
    /// rotation, returns `([1, 0, 0], 0)`. `self` need not be unit length;
    /// the identity test is relative to its magnitude.
    pub fn to_axis_angle(&self) -> (Vector3<T>, T) {
        let n = self.imaginary().magnitude();
        if n <= T::epsilon() * self.magnitude() {
            (Vector3::new(T::one(), T::zero(), T::zero()), T::zero())
        } else {
            let two = T::one() + T::one();
            let angle = two * n.atan2(self.w);
            (self.imaginary() / n, angle.to_degrees())
        }
    }
}

// ── Operators ────────────────────────────────────────────────────────

impl<T: FloatScalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: FloatScalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Hamilton product: q1 * q2
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl<T: FloatScalar> Mul<Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: Quaternion<T>) -> Quaternion<T> {
        (*self).mul(rhs)
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        self.mul(*rhs)
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        (*self).mul(*rhs)
    }
}

// q * v with v taken as the pure-imaginary quaternion (0, v): the Hamilton
// product with rhs.w = 0.
impl<T: FloatScalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Quaternion<T> {
        Self {
            w: -self.x * v.x - self.y * v.y - self.z * v.z,
            x: self.w * v.x + self.y * v.z - self.z * v.y,
            y: self.w * v.y - self.x * v.z + self.z * v.x,
            z: self.w * v.z + self.x * v.y - self.y * v.x,
        }
    }
}

impl<T: FloatScalar> Mul<Vector3<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, v: Vector3<T>) -> Quaternion<T> {
        (*self).mul(v)
    }
}

impl<T: FloatScalar> Mul<&Vector3<T>> for Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, v: &Vector3<T>) -> Quaternion<T> {
        self.mul(*v)
    }
}

impl<T: FloatScalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }
}

// Componentwise; division by zero follows IEEE semantics.
impl<T: FloatScalar> Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        Self::new(self.w / s, self.x / s, self.y / s, self.z / s)
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl<T: FloatScalar> Neg for &Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn neg(self) -> Quaternion<T> {
        (*self).neg()
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn quat_approx_eq(a: &Quaternion<f64>, b: &Quaternion<f64>) -> bool {
        approx_eq(a.w, b.w) && approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    // ── Constructors ─────────────────────────────────────────────

    #[test]
    fn identity_and_zero() {
        let q = Quaternion::<f64>::identity();
        assert_eq!(q, Quaternion::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(Quaternion::<f64>::zero(), Quaternion::default());
    }

    #[test]
    fn from_axis_angle_z_90() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 90.0).unwrap();
        let h = core::f64::consts::FRAC_PI_4;
        assert!(approx_eq(q.magnitude(), 1.0));
        assert!(approx_eq(q.w, h.cos()));
        assert!(approx_eq(q.z, h.sin()));
        assert_eq!(q.x, 0.0);
    }

    #[test]
    fn from_axis_angle_normalizes_axis() {
        let a = Quaternion::from_axis_angle(Vector3::new(0.0, 5.0, 0.0), 60.0).unwrap();
        let b = Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), 60.0).unwrap();
        assert!(quat_approx_eq(&a, &b));
        assert!(approx_eq(a.y, 0.5));
    }

    #[test]
    fn from_axis_angle_zero_axis() {
        let r = Quaternion::from_axis_angle(Vector3::<f64>::zeros(), 45.0);
        assert_eq!(r, Err(QuatError::ZeroMagnitude));
    }

    #[test]
    fn from_axis_angle_zero_degrees() {
        let q = Quaternion::from_axis_angle(Vector3::new(1.0, 1.0, 0.0), 0.0).unwrap();
        assert!(quat_approx_eq(&q, &Quaternion::identity()));
    }

    // ── Core operations ──────────────────────────────────────────

    #[test]
    fn conjugate() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quaternion::new(1.0, -2.0, -3.0, -4.0));
        assert_eq!(q.conjugate().conjugate(), q);
    }

    #[test]
    fn magnitude_and_normalize() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert!(approx_eq(q.magnitude_squared(), 30.0));
        assert!(approx_eq(q.magnitude(), 30.0_f64.sqrt()));

        let u = q.normalize().unwrap();
        assert!(approx_eq(u.magnitude(), 1.0));
        assert!(u.is_unit(1e-12));
        assert!(!q.is_unit(1e-12));
    }

    #[test]
    fn normalize_degenerate() {
        assert_eq!(Quaternion::<f64>::zero().normalize(), Err(QuatError::ZeroMagnitude));
        let inf = Quaternion::new(f64::INFINITY, 0.0, 0.0, 0.0);
        assert_eq!(inf.normalize(), Err(QuatError::NotFinite));
    }

    #[test]
    fn normalize_extreme_scales() {
        let big = Quaternion::new(1e200_f64, 0.0, 0.0, 0.0).normalize().unwrap();
        assert_eq!(big, Quaternion::identity());

        let tiny = Quaternion::new(0.0_f64, 3e-200, 0.0, 4e-200).normalize().unwrap();
        assert!(quat_approx_eq(&tiny, &Quaternion::new(0.0, 0.6, 0.0, 0.8)));
        let mag = Quaternion::new(0.0_f64, 3e-200, 0.0, 4e-200).magnitude();
        assert!((mag / 5e-200 - 1.0).abs() < EPS);

        let q = Quaternion::new(1e-30_f32, -1e-30, 1e-30, 1e-30).normalize().unwrap();
        assert!((q.magnitude() - 1.0).abs() < 1e-6);
        let q = Quaternion::new(2e25_f32, 0.0, 0.0, 0.0).normalize().unwrap();
        assert_eq!(q, Quaternion::identity());
    }

    #[test]
    fn normalize_mut() {
        let mut q = Quaternion::new(0.0, 0.0, 3.0, 4.0);
        q.normalize_mut().unwrap();
        assert!(quat_approx_eq(&q, &Quaternion::new(0.0, 0.0, 0.6, 0.8)));

        let mut z = Quaternion::<f64>::zero();
        assert_eq!(z.normalize_mut(), Err(QuatError::ZeroMagnitude));
        assert_eq!(z, Quaternion::zero());
    }

    #[test]
    fn inverse_unit() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), 57.0).unwrap();
        let qi = q.inverse().unwrap();
        assert!(quat_approx_eq(&qi, &q.conjugate()));
        assert!(quat_approx_eq(&(q * qi), &Quaternion::identity()));
    }

    #[test]
    fn inverse_non_unit() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let qi = q.inverse().unwrap();
        assert!(quat_approx_eq(&(q * qi), &Quaternion::identity()));
        assert!(quat_approx_eq(&(qi * q), &Quaternion::identity()));
    }

    #[test]
    fn inverse_extreme_scales() {
        let q = Quaternion::new(1e-170_f64, 0.0, 0.0, 0.0);
        let qi = q.inverse().unwrap();
        assert!((qi.w / 1e170 - 1.0).abs() < EPS);
        assert!(quat_approx_eq(&(q * qi), &Quaternion::identity()));

        let q = Quaternion::new(0.0_f64, 0.0, 2e200, 0.0);
        let qi = q.inverse().unwrap();
        assert!((qi.y / -5e-201 - 1.0).abs() < EPS);
        assert!(quat_approx_eq(&(q * qi), &Quaternion::identity()));

        let q = Quaternion::new(1e-25_f32, 1e-25, 0.0, 0.0);
        let p = q * q.inverse().unwrap();
        assert!((p.w - 1.0).abs() < 1e-6);
        assert!(p.x.abs() < 1e-6);
    }

    #[test]
    fn inverse_zero() {
        assert_eq!(Quaternion::<f64>::zero().inverse(), Err(QuatError::ZeroMagnitude));
    }

    #[test]
    fn parts() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.scalar(), 1.0);
        assert_eq!(q.imaginary(), Vector3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn dot_product() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
        assert!(approx_eq(a.dot(&b), 70.0));
    }

    // ── Hamilton product ─────────────────────────────────────────

    #[test]
    fn hamilton_basis() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        let minus_one = Quaternion::new(-1.0, 0.0, 0.0, 0.0);
        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
        assert_eq!(i * j * k, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
    }

    #[test]
    fn hamilton_product_identity() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let id = Quaternion::identity();
        assert_eq!(id * q, q);
        assert_eq!(q * id, q);
    }

    #[test]
    fn hamilton_product_associative() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(-0.5, 1.5, 0.25, 2.0);
        let c = Quaternion::new(3.0, -1.0, 0.5, -2.0);
        assert!(quat_approx_eq(&((a * b) * c), &(a * (b * c))));
    }

    #[test]
    fn hamilton_product_not_commutative() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn hamilton_product_ref_variants() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
        let expected = a * b;
        assert_eq!(&a * b, expected);
        assert_eq!(a * &b, expected);
        assert_eq!(&a * &b, expected);
    }

    #[test]
    fn product_with_vector_matches_pure_quaternion() {
        let q = Quaternion::new(0.5, -1.0, 2.0, 0.25);
        let v = Vector3::new(3.0, -4.0, 1.5);
        let expected = q * v.to_quaternion();
        assert_eq!(q * v, expected);
        assert_eq!(&q * v, expected);
        assert_eq!(q * &v, expected);
    }

    // ── Other operators ──────────────────────────────────────────

    #[test]
    fn add_sub_scale() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Quaternion::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Quaternion::new(0.5, 1.5, 2.5, 3.5));
        assert_eq!(a * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a / 2.0, Quaternion::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn divide_by_zero_is_ieee() {
        let q = Quaternion::new(1.0, -1.0, 0.0, 2.0) / 0.0;
        assert_eq!(q.w, f64::INFINITY);
        assert_eq!(q.x, f64::NEG_INFINITY);
        assert!(q.y.is_nan());
    }

    #[test]
    fn negation() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(-q, Quaternion::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(-&q, -q);
    }

    // ── Rotation ─────────────────────────────────────────────────

    #[test]
    fn rotate_vector_90_about_z() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 90.0).unwrap();
        let r = q.rotate_vector(Vector3::new(1.0, 0.0, 0.0));
        assert!(approx_eq(r.x, 0.0));
        assert!(approx_eq(r.y, 1.0));
        assert!(approx_eq(r.z, 0.0));
    }

    #[test]
    fn sandwich_scalar_part_vanishes() {
        let q = Quaternion::from_axis_angle(Vector3::new(1.0, 2.0, 3.0), 123.0).unwrap();
        let v = Vector3::new(-0.5, 4.0, 2.0);
        let p = q * v * q.conjugate();
        assert!(approx_eq(p.w, 0.0));
    }

    #[test]
    fn negated_quaternion_same_rotation() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 40.0).unwrap();
        let v = Vector3::new(1.0, 2.0, 0.0);
        let r1 = q.rotate_vector(v);
        let r2 = (-q).rotate_vector(v);
        assert!(approx_eq(r1.x, r2.x));
        assert!(approx_eq(r1.y, r2.y));
        assert!(approx_eq(r1.z, r2.z));
    }

    #[test]
    fn axis_angle_roundtrip() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0_f64, 2.0, 0.0), 75.0).unwrap();
        let (axis, angle) = q.to_axis_angle();
        assert!((angle - 75.0).abs() < 1e-10);
        assert!(approx_eq(axis.x, 0.0));
        assert!(approx_eq(axis.y, 1.0));
        assert!(approx_eq(axis.z, 0.0));
    }

    #[test]
    fn axis_angle_scaled_down_half_turn() {
        let (axis, angle) = Quaternion::new(1e-20_f64, 1e-17, 0.0, 0.0).to_axis_angle();
        assert_eq!(axis, Vector3::new(1.0, 0.0, 0.0));
        assert!(angle > 179.0 && angle < 180.0);

        let (axis, angle) = Quaternion::new(0.0_f64, 0.0, 3e-30, 0.0).to_axis_angle();
        assert_eq!(axis, Vector3::new(0.0, 1.0, 0.0));
        assert!((angle - 180.0).abs() < 1e-10);
    }

    #[test]
    fn axis_angle_zero_quaternion() {
        let (axis, angle) = Quaternion::<f64>::zero().to_axis_angle();
        assert_eq!(axis, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn axis_angle_identity() {
        let (axis, angle) = Quaternion::<f64>::identity().to_axis_angle();
        assert_eq!(axis, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(angle, 0.0);
    }

    // ── f32 ──────────────────────────────────────────────────────

    #[test]
    fn f32_basic() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0_f32, 0.0, 1.0), 90.0).unwrap();
        let r = q.rotate_vector(Vector3::new(1.0_f32, 0.0, 0.0));
        assert!(r.x.abs() < 1e-6);
        assert!((r.y - 1.0).abs() < 1e-6);
    }
}
