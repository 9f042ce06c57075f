// Copyright 2014-2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementary functions of a complex variable.
//!
//! Every function takes and returns a [`Complex64`] and follows the
//! special-value rules of C99 Annex G: signed zeros, infinities and NaNs in
//! either component give the documented result instead of whatever the
//! textbook formula happens to produce. Branch cuts and principal values are
//! the usual ones, as documented per function.
//!
//! The functions are free functions rather than methods, so they can sit
//! next to the inherent methods of `num_complex::Complex` without clashing.
//!
//! ## Example
//!
//! ```
//! use num_cmath::{asin, sin, tanh, Complex64};
//!
//! let z = Complex64::new(1.0, 1.0);
//! let w = asin(z);
//! assert!((w - Complex64::new(0.6662394324925153, 1.0612750619050357)).norm() < 1e-12);
//! assert!((sin(w) - z).norm() < 1e-12);
//!
//! // C99: tanh(+Inf + i y) = 1 + i 0 sin(2y)
//! let t = tanh(Complex64::new(f64::INFINITY, 32.0));
//! assert_eq!(t, Complex64::new(1.0, 0.0));
//! ```
//!
//! ## Compatibility
//!
//! The crate is `no_std`. The real-valued primitives come from
//! `num_traits::Float`, so either the `std` feature (the default) or the
//! `libm` feature has to be enabled.
#![doc(html_root_url = "https://docs.rs/num-cmath/0.1")]
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate num_complex;
extern crate num_traits as traits;

mod float;

pub mod exponential;
pub mod hyperbolic;
pub mod power;
pub mod trigonometric;

#[cfg(test)]
mod quickcheck_impls;
#[cfg(test)]
mod tests;

pub use num_complex::Complex64;

pub use crate::exponential::{exp, log, log10};
pub use crate::hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use crate::power::{pow, powc, powf, sqrt, Exponent};
pub use crate::trigonometric::{acos, asin, atan, cos, cot, sin, tan};
