use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::error::QuatError;
use crate::norm::{norm, scaled_norm};
use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;

/// A 3-component spatial vector.
///
/// Embeds into a quaternion's imaginary subspace through
/// [`to_quaternion`](Self::to_quaternion) and comes back out through
/// [`from_quaternion_imaginary`](Self::from_quaternion_imaginary).
///
/// ```
/// use quatrot::Vector3;
///
/// let v = Vector3::new(3.0_f64, 4.0, 0.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v[1], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Vector3<T> {
    /// Create a vector from components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Create a vector from an `[x, y, z]` array.
    #[inline]
    pub fn from_array(data: [T; 3]) -> Self {
        Self::new(data[0], data[1], data[2])
    }

    /// The zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Components as an `[x, y, z]` array.
    #[inline]
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Vector3<T> {
    /// Squared Euclidean norm. No sqrt.
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(&self) -> T {
        norm(&[self.x, self.y, self.z])
    }

    /// Unit vector in the same direction.
    ///
    /// Fails on the zero vector instead of producing NaN.
    ///
    /// ```
    /// use quatrot::{QuatError, Vector3};
    ///
    /// let u = Vector3::new(0.0_f64, 0.0, 2.0).normalize().unwrap();
    /// assert_eq!(u, Vector3::new(0.0, 0.0, 1.0));
    /// assert_eq!(Vector3::<f64>::zeros().normalize(), Err(QuatError::ZeroMagnitude));
    /// ```
    #[inline]
    pub fn normalize(&self) -> Result<Self, QuatError> {
        let n = scaled_norm(&[self.x, self.y, self.z])?;
        Ok(*self / n.scale / n.unit)
    }

    /// Normalize in place. `self` is left untouched on error.
    #[inline]
    pub fn normalize_mut(&mut self) -> Result<(), QuatError> {
        *self = self.normalize()?;
        Ok(())
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

// ── Quaternion embedding ─────────────────────────────────────────────

impl<T: FloatScalar> Vector3<T> {
    /// Pure-imaginary quaternion `(0, x, y, z)`.
    #[inline]
    pub fn to_quaternion(&self) -> Quaternion<T> {
        Quaternion::new(T::zero(), self.x, self.y, self.z)
    }

    /// Imaginary part of `q`; the scalar part is dropped.
    ///
    /// ```
    /// use quatrot::{Quaternion, Vector3};
    ///
    /// let q = Quaternion::new(9.0_f64, 1.0, 2.0, 3.0);
    /// assert_eq!(Vector3::from_quaternion_imaginary(&q), Vector3::new(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn from_quaternion_imaginary(q: &Quaternion<T>) -> Self {
        Self::new(q.x, q.y, q.z)
    }
}

impl<T: FloatScalar> From<Vector3<T>> for Quaternion<T> {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        v.to_quaternion()
    }
}

impl<T: FloatScalar> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from(data: [T; 3]) -> Self {
        Self::from_array(data)
    }
}

// ── Operators ────────────────────────────────────────────────────────

impl<T: FloatScalar> Add for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: FloatScalar> Sub for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: FloatScalar> Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: FloatScalar> Mul<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl<T: FloatScalar> Div<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {i}"),
        }
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {i}"),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
