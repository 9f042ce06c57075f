// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exponential and logarithms.

use core::f64::consts::LOG10_E;

use num_complex::Complex64;
use traits::Float;

/// Computes `e^z`.
///
/// ## Special values
///
/// | re        | im                | `exp(z)`         |
/// | --------- | ----------------- | ---------------- |
/// | ±0        | ±0                | (1, ±0)          |
/// | finite    | ±Inf              | (NaN, NaN)       |
/// | finite    | NaN               | (NaN, NaN)       |
/// | +Inf      | ±0                | (+Inf, ±0)       |
/// | -Inf      | finite            | +0 · cis(im)     |
/// | +Inf      | finite nonzero    | +Inf · cis(im)   |
/// | -Inf      | ±Inf or NaN       | (+0, +0)         |
/// | +Inf      | ±Inf or NaN       | (+Inf, NaN)      |
/// | NaN       | ±0                | (NaN, ±0)        |
/// | NaN       | anything else     | (NaN, NaN)       |
///
/// where `cis(y) = cos(y) + i sin(y)`.
pub fn exp(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if x.is_infinite() {
        if x > 0.0 && y == 0.0 {
            return z;
        }
        if !y.is_finite() {
            if x < 0.0 {
                return Complex64::new(0.0, 0.0);
            }
            return Complex64::new(x, f64::NAN);
        }
    }

    if x.is_nan() {
        if y == 0.0 {
            return z;
        }
        return Complex64::new(f64::NAN, f64::NAN);
    }

    if !y.is_finite() {
        return Complex64::new(f64::NAN, f64::NAN);
    }

    // e^x * sin(0) would be Inf * 0 once e^x overflows
    if y == 0.0 {
        return Complex64::new(Float::exp(x), y);
    }
    if x == 0.0 {
        return Complex64::new(Float::cos(y), Float::sin(y));
    }

    // formula: e^(a + bi) = e^a (cos(b) + i*sin(b))
    let e = Float::exp(x);
    Complex64::new(e * Float::cos(y), e * Float::sin(y))
}

/// Computes the principal value of the natural logarithm of `z`.
///
/// This function has one branch cut:
///
/// * `(-∞, 0]`, continuous from above.
///
/// The branch satisfies `-π ≤ arg(log(z)) ≤ π`. `log(±0 ± 0i)` is
/// `-Inf` plus the `atan2` phase of the zero.
#[inline]
pub fn log(z: Complex64) -> Complex64 {
    // formula: ln(z) = ln|z| + i*arg(z)
    let (r, theta) = z.to_polar();
    Complex64::new(Float::ln(r), theta)
}

/// Computes the principal value of the base 10 logarithm of `z`.
#[inline]
pub fn log10(z: Complex64) -> Complex64 {
    // log10(z) = log10(e) * ln(z)
    log(z).scale(LOG10_E)
}
