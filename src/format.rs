//! Human-readable rendering.
//!
//! `Display` on [`Quaternion`] and [`Vector3`] prints every component. The
//! [`pretty`] / [`labeled`] adapters are for debug output: they render in
//! `a + bi + cj + dk` form and drop components smaller than `1e-3`.
//!
//! ```
//! use quatrot::{format::labeled, Quaternion, Vector3};
//!
//! let q = Quaternion::new(1.0_f64, 0.0, -2.5, 1e-9);
//! assert_eq!(format!("{}", q), "1 + 0i - 2.5j + 0.000000001k");
//! assert_eq!(format!("{}", labeled(&q, "q")), "q = 1 - 2.5j");
//!
//! let v = Vector3::new(0.0_f64, -1.0, 2.0);
//! assert_eq!(format!("{}", labeled(&v, "v")), "v = -1j + 2k");
//! ```

use core::fmt;

use num_traits::{Float, Zero};

use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;
use crate::vector::Vector3;

/// Components with a smaller magnitude are left out of [`pretty`] output.
pub const SUPPRESS_BELOW: f64 = 1e-3;

const UNITS: [&str; 4] = ["", "i", "j", "k"];

// ── Plain Display ────────────────────────────────────────────────────

impl<T: FloatScalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_num(f, self.w)?;
        for (c, unit) in [(self.x, "i"), (self.y, "j"), (self.z, "k")] {
            f.write_str(if c < T::zero() { " - " } else { " + " })?;
            write_num(f, c.abs())?;
            f.write_str(unit)?;
        }
        Ok(())
    }
}

impl<T: FloatScalar> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_num(f, self.x)?;
        f.write_str(", ")?;
        write_num(f, self.y)?;
        f.write_str(", ")?;
        write_num(f, self.z)?;
        f.write_str(")")
    }
}

// Honors `{:.N}` precision from the caller.
fn write_num<T: FloatScalar>(f: &mut fmt::Formatter<'_>, v: T) -> fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "{:.*}", p, v),
        None => write!(f, "{}", v),
    }
}

// ── Debug rendering ──────────────────────────────────────────────────

/// Values that render as `a + bi + cj + dk`.
pub trait Hypercomplex {
    type Scalar: FloatScalar;

    /// The value as a quaternion. Vectors map to their pure-imaginary form.
    fn as_quaternion(&self) -> Quaternion<Self::Scalar>;
}

impl<T: FloatScalar> Hypercomplex for Quaternion<T> {
    type Scalar = T;

    #[inline]
    fn as_quaternion(&self) -> Quaternion<T> {
        *self
    }
}

impl<T: FloatScalar> Hypercomplex for Vector3<T> {
    type Scalar = T;

    #[inline]
    fn as_quaternion(&self) -> Quaternion<T> {
        self.to_quaternion()
    }
}

/// `Display` adapter returned by [`pretty`] and [`labeled`].
#[derive(Debug, Clone, Copy)]
pub struct Pretty<'a, V> {
    value: &'a V,
    label: Option<&'a str>,
}

/// Render `value` as `a + bi + cj + dk`, dropping near-zero components.
pub fn pretty<V: Hypercomplex>(value: &V) -> Pretty<'_, V> {
    Pretty { value, label: None }
}

/// Like [`pretty`], prefixed with `label = `.
pub fn labeled<'a, V: Hypercomplex>(value: &'a V, label: &'a str) -> Pretty<'a, V> {
    Pretty {
        value,
        label: Some(label),
    }
}

/// Render `value` with `label` into a new string.
#[cfg(feature = "alloc")]
pub fn format<V: Hypercomplex>(value: &V, label: &str) -> alloc::string::String {
    use alloc::string::ToString;
    labeled(value, label).to_string()
}

impl<V: Hypercomplex> fmt::Display for Pretty<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = self.label {
            write!(f, "{} = ", label)?;
        }

        let q = self.value.as_quaternion();
        let cutoff = V::Scalar::from_literal(SUPPRESS_BELOW);
        let mut first = true;
        for (c, unit) in [q.w, q.x, q.y, q.z].into_iter().zip(UNITS) {
            if c.abs() < cutoff {
                continue;
            }
            let negative = c < V::Scalar::zero();
            if first {
                if negative {
                    f.write_str("-")?;
                }
            } else {
                f.write_str(if negative { " - " } else { " + " })?;
            }
            write_num(f, c.abs())?;
            f.write_str(unit)?;
            first = false;
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}
