// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Hyperbolic functions and their inverses.
//!
//! The inverses are the circular inverses rotated by `±i`, e.g.
//! `asinh(z) = -i asin(iz)`, done on the components directly.

use num_complex::Complex64;
use traits::Float;

use crate::float::{copysign, cosh_sinh, sign};
use crate::trigonometric::{acos, asin, atan};

/// Past this `|re|`, `tanh` is `±1` to double precision.
pub(crate) const TANH_SATURATION: f64 = 22.0;

/// Computes the hyperbolic sine of `z`.
///
/// ## Special values
///
/// | re             | im              | `sinh(z)`          |
/// | -------------- | --------------- | ------------------ |
/// | ±0             | ±0              | (±0, ±0)           |
/// | ±0             | ±Inf            | (±0, NaN)          |
/// | ±0             | NaN             | (±0, NaN)          |
/// | finite nonzero | ±Inf            | (NaN, NaN)         |
/// | finite nonzero | NaN             | (NaN, NaN)         |
/// | ±Inf           | ±0              | (±Inf, ±0)         |
/// | ±Inf           | finite nonzero  | ±Inf · cis(im)     |
/// | ±Inf           | ±Inf            | (±Inf, NaN) ¹      |
/// | ±Inf           | NaN             | (±Inf, NaN) ¹      |
/// | NaN            | ±0              | (NaN, ±0)          |
/// | NaN            | anything else   | (NaN, NaN)         |
///
/// ¹ the sign of the real part is unspecified.
pub fn sinh(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if x.is_finite() && y.is_finite() {
        if y == 0.0 {
            return Complex64::new(Float::sinh(x), y);
        }
        if x == 0.0 {
            return Complex64::new(x, Float::sin(y));
        }
        // formula: sinh(a + bi) = sinh(a)cos(b) + i*cosh(a)sin(b)
        let (ch, sh) = cosh_sinh(x);
        return Complex64::new(sh * Float::cos(y), ch * Float::sin(y));
    }

    if x.is_finite() {
        if x == 0.0 {
            return Complex64::new(x, f64::NAN);
        }
        return Complex64::new(f64::NAN, f64::NAN);
    }

    if y == 0.0 {
        return z;
    }

    if x.is_infinite() {
        if !y.is_finite() {
            return Complex64::new(x, f64::NAN);
        }
        return Complex64::new(x * Float::cos(y), f64::INFINITY * Float::sin(y));
    }

    Complex64::new(f64::NAN, f64::NAN)
}

/// Computes the hyperbolic cosine of `z`.
///
/// ## Special values
///
/// | re             | im              | `cosh(z)`          |
/// | -------------- | --------------- | ------------------ |
/// | ±0             | ±0              | (1, ±0)            |
/// | ±0             | ±Inf            | (NaN, ±0) ¹        |
/// | ±0             | NaN             | (NaN, ±0) ¹        |
/// | finite nonzero | ±Inf            | (NaN, NaN)         |
/// | finite nonzero | NaN             | (NaN, NaN)         |
/// | ±Inf           | ±0              | (+Inf, ±0)         |
/// | ±Inf           | finite nonzero  | +Inf · cis(±im)    |
/// | ±Inf           | ±Inf            | (±Inf, NaN) ¹      |
/// | ±Inf           | NaN             | (+Inf, NaN)        |
/// | NaN            | ±0              | (NaN, ±0) ¹        |
/// | NaN            | anything else   | (NaN, NaN)         |
///
/// ¹ the sign marked `±` is unspecified.
pub fn cosh(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if x.is_finite() && y.is_finite() {
        // x * y keeps the sign of the zero sinh(x)sin(y) would have
        if y == 0.0 {
            return Complex64::new(Float::cosh(x), x * y);
        }
        if x == 0.0 {
            return Complex64::new(Float::cos(y), x * y);
        }
        // formula: cosh(a + bi) = cosh(a)cos(b) + i*sinh(a)sin(b)
        let (ch, sh) = cosh_sinh(x);
        return Complex64::new(ch * Float::cos(y), sh * Float::sin(y));
    }

    if x.is_finite() {
        if x == 0.0 {
            return Complex64::new(f64::NAN, x);
        }
        return Complex64::new(f64::NAN, f64::NAN);
    }

    if y == 0.0 {
        if x.is_infinite() {
            return Complex64::new(f64::INFINITY, y * Float::signum(x));
        }
        return Complex64::new(f64::NAN, y);
    }

    if x.is_infinite() {
        if !y.is_finite() {
            return Complex64::new(f64::INFINITY, f64::NAN);
        }
        return Complex64::new(f64::INFINITY * Float::cos(y), x * Float::sin(y));
    }

    Complex64::new(f64::NAN, f64::NAN)
}

/// Computes the hyperbolic tangent of `z`, using Kahan's algorithm.
///
/// ## Special values
///
/// | re             | im              | `tanh(z)`          |
/// | -------------- | --------------- | ------------------ |
/// | ±0             | ±0              | (±0, ±0)           |
/// | ±0             | ±Inf or NaN     | (±0, NaN)          |
/// | finite nonzero | ±Inf or NaN     | (NaN, NaN)         |
/// | ±Inf           | finite          | (±1, ±0)           |
/// | ±Inf           | ±Inf            | (±1, ±0) ¹         |
/// | ±Inf           | NaN             | (±1, +0) ¹         |
/// | NaN            | ±0              | (NaN, ±0)          |
/// | NaN            | anything else   | (NaN, NaN)         |
///
/// ¹ the sign of the imaginary zero is unspecified.
pub fn tanh(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if !x.is_finite() {
        if x.is_nan() {
            let im = if y == 0.0 { y } else { f64::NAN };
            return Complex64::new(x, im);
        }
        return Complex64::new(copysign(1.0, x), copysign(0.0, y));
    }

    if !y.is_finite() {
        let re = if x == 0.0 { x } else { f64::NAN };
        return Complex64::new(re, f64::NAN);
    }

    // sinh(x)^2 would overflow long before this stops being exact
    if Float::abs(x) >= TANH_SATURATION {
        let e = Float::exp(-Float::abs(x));
        return Complex64::new(
            copysign(1.0, x),
            4.0 * Float::sin(y) * Float::cos(y) * e * e,
        );
    }

    let t = Float::tan(y);
    let beta = 1.0 + t * t; // 1/cos^2(y)
    let s = Float::sinh(x);
    let rho = Float::sqrt(1.0 + s * s); // cosh(x)
    let d = 1.0 + beta * s * s;

    Complex64::new(beta * rho * s / d, t / d)
}

/// Computes the principal value of inverse hyperbolic sine of `z`.
///
/// This function has two branch cuts:
///
/// * `(-∞i, -i)`, continuous from the left.
/// * `(i, ∞i)`, continuous from the right.
///
/// The branch satisfies `-π/2 ≤ Im(asinh(z)) ≤ π/2`.
#[inline]
pub fn asinh(z: Complex64) -> Complex64 {
    // asinh(z) = -i asin(iz)
    let w = asin(Complex64::new(-z.im, z.re));
    Complex64::new(w.im, -w.re)
}

/// Computes the principal value of inverse hyperbolic cosine of `z`.
///
/// This function has one branch cut:
///
/// * `(-∞, 1)`, continuous from above.
///
/// The branch satisfies `-π ≤ Im(acosh(z)) ≤ π` and `0 ≤ Re(acosh(z)) < ∞`.
#[inline]
pub fn acosh(z: Complex64) -> Complex64 {
    // acosh(z) = ±i acos(z), whichever lands in the right half plane.
    // Im(acos(z)) has the opposite sign bit to Im(z), zeros included.
    let w = acos(z);
    if sign(z.im) {
        Complex64::new(w.im, -w.re)
    } else {
        Complex64::new(-w.im, w.re)
    }
}

/// Computes the principal value of inverse hyperbolic tangent of `z`.
///
/// This function has two branch cuts:
///
/// * `(-∞, -1]`, continuous from above.
/// * `[1, ∞)`, continuous from below.
///
/// The branch satisfies `-π/2 ≤ Im(atanh(z)) ≤ π/2`.
#[inline]
pub fn atanh(z: Complex64) -> Complex64 {
    // atanh(z) = -i atan(iz)
    let w = atan(Complex64::new(-z.im, z.re));
    Complex64::new(w.im, -w.re)
}
