//! # quatrot
//!
//! Quaternion and 3D vector arithmetic with axis-angle rotation of vectors by
//! quaternion conjugation. Pure Rust, no-std compatible, no heap allocation
//! in the algebra.
//!
//! ## Quick start
//!
//! ```
//! use quatrot::{rotate, Quaternion, Vector3};
//!
//! // Rotate x̂ by 90° about ẑ
//! let v = Vector3::new(1.0_f64, 0.0, 0.0);
//! let r = rotate(v, Vector3::new(0.0, 0.0, 1.0), 90.0).unwrap();
//! assert!((r.y - 1.0).abs() < 1e-12);
//!
//! // The same rotation, spelled out as a sandwich product q v q*
//! let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 90.0).unwrap();
//! let p = q * v * q.conjugate();
//! assert!(p.w.abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`quaternion`]: `Quaternion<T>`, scalar-first `(w, x, y, z)`. Axis-angle
//!   construction (degrees), magnitude, conjugate, normalize, inverse,
//!   Hamilton product (with another quaternion or a vector), scalar division.
//!
//! - [`vector`]: `Vector3<T>` with magnitude, normalize, dot/cross and the
//!   conversions to and from a quaternion's imaginary part.
//!
//! - [`rotate()`]: rotate a vector about an axis by an angle in degrees.
//!
//! - [`format`]: `Display` impls plus the [`format::labeled`] debug renderer
//!   (`q = 1 + 2i - 3k`, near-zero components suppressed).
//!
//! - [`traits`]: [`FloatScalar`], implemented for `f32` and `f64`.
//!
//! ## Degenerate input
//!
//! Normalizing or inverting a zero (or NaN/infinite) quaternion or vector
//! returns [`QuatError`] instead of silently producing NaN. Plain scalar
//! division (`q / s`) keeps IEEE semantics.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` for `QuatError` |
//! | `alloc` | via std  | [`format::format`] returning `String` |
//! | `serde` | no       | `Serialize` / `Deserialize` for `Quaternion` and `Vector3` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
mod norm;
pub mod quaternion;
pub mod rotate;
pub mod traits;
pub mod vector;

pub use error::QuatError;
pub use quaternion::Quaternion;
pub use rotate::{rotate, rotate_radians};
pub use traits::FloatScalar;
pub use vector::Vector3;
