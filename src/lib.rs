//! This crate is for quaternion arithmetic.
//!
//! A [`Quaternion`] is four `f64` components, `scalar + i·𝐢 + j·𝐣 + k·𝐤`,
//! with 𝐢² = 𝐣² = 𝐤² = 𝐢𝐣𝐤 = −1.  Arithmetic is available both as the
//! named functions in [`algebra`] and as the usual operators.
//!
//! ```
//! use hamilton::{Complex, Quaternion};
//!
//! let p = Quaternion::new(1.0, -2.0, 3.0, 0.0);
//! assert_eq!(p.to_string(), "1 - 2i + 3j");
//! assert_eq!(Quaternion::I * Quaternion::J, Quaternion::K);
//! assert_eq!(p + Complex::new(1.0, 2.0), Quaternion::new(2.0, 0.0, 3.0, 0.0));
//! ```

#![cfg_attr(feature = "strict", deny(warnings))]
#![deny(missing_docs)]

pub mod algebra;
pub mod complex;
pub mod display;
pub mod equation;
pub mod ops;
pub mod quaternion;
pub mod rng;

pub use crate::complex::Complex;
pub use crate::quaternion::Quaternion;
