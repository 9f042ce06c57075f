// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Circular functions and their inverses.
//!
//! `sin`, `cos` and `tan` are the hyperbolic functions of `iz` with the
//! components swapped, written out so every signed zero and infinity lands
//! where C99 Annex G puts it.

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, LN_2};

use num_complex::Complex64;
use traits::Float;

use crate::exponential::log;
use crate::float::{copysign, cosh_sinh, reduce_pi, sign, tan_series};
use crate::hyperbolic::TANH_SATURATION;
use crate::power::sqrt;

/// `2^26`: from here on `asin` uses its asymptotic form.
const ASIN_ASYMPTOTIC: f64 = 67108864.0;
/// From here on `atan` uses its asymptotic form, well before `|z|^2`
/// overflows.
const ATAN_ASYMPTOTIC: f64 = 1e150;

/// Computes the sine of `z`.
///
/// ## Special values
///
/// | re             | im              | `sin(z)`           |
/// | -------------- | --------------- | ------------------ |
/// | ±0             | ±0              | (±0, ±0)           |
/// | ±Inf or NaN    | ±0              | (NaN, ±0)          |
/// | ±0             | ±Inf or NaN     | (±0, ±Inf or NaN)  |
/// | ±Inf or NaN    | ±Inf            | (NaN, ±Inf)        |
/// | finite nonzero | ±Inf            | Inf · (sin re, cos re) |
/// | anything else  | NaN             | (NaN, NaN)         |
pub fn sin(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if y == 0.0 && !x.is_finite() {
        return Complex64::new(f64::NAN, y);
    }

    if y.is_infinite() {
        if x == 0.0 {
            return z;
        }
        if !x.is_finite() {
            return Complex64::new(f64::NAN, y);
        }
    }

    if x == 0.0 && y.is_nan() {
        return z;
    }

    if x.is_finite() {
        if x == 0.0 {
            return Complex64::new(x, Float::sinh(y));
        }
        if y == 0.0 {
            return Complex64::new(Float::sin(x), y);
        }
        // formula: sin(a + bi) = sin(a)cosh(b) + i*cos(a)sinh(b)
        let (ch, sh) = cosh_sinh(y);
        return Complex64::new(Float::sin(x) * ch, Float::cos(x) * sh);
    }

    Complex64::new(f64::NAN, f64::NAN)
}

/// Computes the cosine of `z`.
///
/// ## Special values
///
/// | re             | im              | `cos(z)`           |
/// | -------------- | --------------- | ------------------ |
/// | ±0             | ±0              | (1, ∓0)            |
/// | ±Inf or NaN    | ±0              | (NaN, ±0) ¹        |
/// | ±0             | ±Inf            | (+Inf, ±0) ¹       |
/// | ±Inf or NaN    | ±Inf            | (+Inf, NaN)        |
/// | ±0             | NaN             | (NaN, ±0) ¹        |
/// | finite nonzero | ±Inf            | Inf · (cos re, -sin re) |
/// | anything else  | NaN             | (NaN, NaN)         |
///
/// ¹ the sign of the imaginary zero is unspecified.
pub fn cos(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if y == 0.0 && !x.is_finite() {
        return Complex64::new(f64::NAN, -y);
    }

    if y.is_infinite() {
        if x == 0.0 {
            return Complex64::new(f64::INFINITY, x * -Float::signum(y));
        }
        if !x.is_finite() {
            return Complex64::new(f64::INFINITY, f64::NAN);
        }
    }

    if x == 0.0 && y.is_nan() {
        return Complex64::new(f64::NAN, x);
    }

    if x.is_finite() {
        // -(x * y) is the sign -sin(x)sinh(y) has when one of them is zero
        if x == 0.0 {
            return Complex64::new(Float::cosh(y), -(x * y));
        }
        if y == 0.0 {
            return Complex64::new(Float::cos(x), -(x * y));
        }
        // formula: cos(a + bi) = cos(a)cosh(b) - i*sin(a)sinh(b)
        let (ch, sh) = cosh_sinh(y);
        return Complex64::new(Float::cos(x) * ch, -Float::sin(x) * sh);
    }

    Complex64::new(f64::NAN, f64::NAN)
}

/// Computes the tangent of `z`.
///
/// Near the poles the denominator `cosh(2 im) + cos(2 re)` is summed as a
/// series instead, after reducing `re` modulo π.
///
/// ## Special values
///
/// | re             | im              | `tan(z)`           |
/// | -------------- | --------------- | ------------------ |
/// | ±0             | ±0              | (±0, ±0)           |
/// | anything       | ±Inf            | (±0, ±1) ¹         |
/// | ±0             | NaN             | (±0, NaN)          |
/// | ±Inf or NaN    | ±0              | (NaN, ±0)          |
/// | ±Inf or NaN    | finite nonzero  | (NaN, NaN)         |
/// | anything else  | NaN             | (NaN, NaN)         |
///
/// ¹ the sign of the real zero is unspecified when `re` is not finite.
pub fn tan(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if y.is_infinite() {
        return Complex64::new(copysign(0.0, x), copysign(1.0, y));
    }

    if x == 0.0 && y.is_nan() {
        return z;
    }

    if !x.is_finite() || y.is_nan() {
        if y == 0.0 {
            return Complex64::new(f64::NAN, y);
        }
        return Complex64::new(f64::NAN, f64::NAN);
    }

    if Float::abs(y) >= TANH_SATURATION {
        let e = Float::exp(-Float::abs(y));
        return Complex64::new(
            4.0 * Float::sin(x) * Float::cos(x) * e * e,
            copysign(1.0, y),
        );
    }

    let mut d = Float::cosh(2.0 * y) + Float::cos(2.0 * x);
    if Float::abs(d) < 0.25 {
        d = tan_series(z);
    }
    if d == 0.0 {
        return Complex64::new(f64::INFINITY, f64::INFINITY);
    }

    Complex64::new(Float::sin(2.0 * x) / d, Float::sinh(2.0 * y) / d)
}

/// Computes the cotangent of `z`, `1 / tan(z)`.
///
/// `cot` is not part of C99; its special values follow from those of
/// `tan`. The poles at multiples of π, `0` included, give `(+Inf, +Inf)`.
pub fn cot(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if y.is_infinite() {
        return Complex64::new(copysign(0.0, x), -copysign(1.0, y));
    }

    if !x.is_finite() || y.is_nan() {
        return Complex64::new(f64::NAN, f64::NAN);
    }

    if Float::abs(y) >= TANH_SATURATION {
        let e = Float::exp(-Float::abs(y));
        return Complex64::new(
            4.0 * Float::sin(x) * Float::cos(x) * e * e,
            -copysign(1.0, y),
        );
    }

    let mut d = Float::cosh(2.0 * y) - Float::cos(2.0 * x);
    if Float::abs(d) < 0.25 {
        d = tan_series(z);
    }
    if d == 0.0 {
        return Complex64::new(f64::INFINITY, f64::INFINITY);
    }

    Complex64::new(Float::sin(2.0 * x) / d, -Float::sinh(2.0 * y) / d)
}

/// Computes the principal value of the inverse sine of `z`.
///
/// This function has two branch cuts:
///
/// * `(-∞, -1)`, continuous from above.
/// * `(1, ∞)`, continuous from below.
///
/// The branch satisfies `-π/2 ≤ Re(asin(z)) ≤ π/2`.
///
/// ## Special values
///
/// | re             | im              | `asin(z)`          |
/// | -------------- | --------------- | ------------------ |
/// | ±0             | ±0              | (±0, ±0)           |
/// | ±0             | NaN             | (±0, NaN)          |
/// | ±Inf           | NaN             | (NaN, ±Inf) ¹      |
/// | NaN            | ±Inf            | (NaN, ±Inf)        |
/// | ±Inf           | ±Inf            | (±π/4, ±Inf)       |
/// | finite         | ±Inf            | (±0, ±Inf)         |
/// | ±Inf           | finite          | (±π/2, ±Inf)       |
/// | anything else  | NaN             | (NaN, NaN)         |
///
/// ¹ the sign of the imaginary infinity is unspecified.
pub fn asin(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if y == 0.0 && Float::abs(x) <= 1.0 {
        return Complex64::new(Float::asin(x), y);
    }
    if x == 0.0 && Float::abs(y) <= 1.0 {
        return Complex64::new(x, Float::asinh(y));
    }

    if y.is_nan() {
        if x == 0.0 {
            return Complex64::new(x, f64::NAN);
        }
        if x.is_infinite() {
            return Complex64::new(f64::NAN, x);
        }
        return Complex64::new(f64::NAN, f64::NAN);
    }

    if y.is_infinite() {
        if x.is_nan() {
            return z;
        }
        if x.is_infinite() {
            return Complex64::new(copysign(FRAC_PI_4, x), y);
        }
        return Complex64::new(copysign(0.0, x), y);
    }

    if x.is_infinite() {
        return Complex64::new(copysign(FRAC_PI_2, x), copysign(f64::INFINITY, y));
    }

    if x.is_nan() {
        return Complex64::new(f64::NAN, f64::NAN);
    }

    let m = Float::max(Float::abs(x), Float::abs(y));
    if m >= ASIN_ASYMPTOTIC {
        // sqrt(1-z^2) is ±iz to double precision, so
        // arcsin(z) = -i (ln(2) + ln(iz)) on the matching side
        let r = Float::hypot(x / m, y / m);
        let l = LN_2 + Float::ln(m) + Float::ln(r);
        let re = Float::atan2(Float::abs(x), Float::abs(y));
        return Complex64::new(copysign(re, x), copysign(l, y));
    }

    // asin is odd: work in Im(z) <= 0, where sqrt(1-z^2) and iz have
    // matching signs in both parts and their sum never cancels
    if !sign(y) {
        let w = asin_lower(-x, -y);
        return Complex64::new(-w.re, -w.im);
    }
    asin_lower(x, y)
}

/// `asin(x + iy)` for finite `x`, `y` with the sign bit of `y` set.
#[inline]
fn asin_lower(x: f64, y: f64) -> Complex64 {
    // formula: arcsin(z) = -i ln(sqrt(1-z^2) + iz)
    let ct = Complex64::new(-y, x);
    let zz = Complex64::new((x - y) * (x + y), 2.0 * x * y);
    let w = log(sqrt(Complex64::new(1.0 - zz.re, -zz.im)) + ct);
    Complex64::new(w.im, -w.re)
}

/// Computes the principal value of the inverse cosine of `z`.
///
/// This function has two branch cuts:
///
/// * `(-∞, -1)`, continuous from above.
/// * `(1, ∞)`, continuous from below.
///
/// The branch satisfies `0 ≤ Re(acos(z)) ≤ π`.
#[inline]
pub fn acos(z: Complex64) -> Complex64 {
    // formula: arccos(z) = pi/2 - arcsin(z)
    let w = asin(z);
    Complex64::new(FRAC_PI_2 - w.re, -w.im)
}

/// Computes the principal value of the inverse tangent of `z`.
///
/// This function has two branch cuts:
///
/// * `(-∞i, -i]`, continuous from the left.
/// * `[i, ∞i)`, continuous from the right.
///
/// The branch satisfies `-π/2 ≤ Re(atan(z)) ≤ π/2`.
///
/// ## Special values
///
/// | re             | im              | `atan(z)`          |
/// | -------------- | --------------- | ------------------ |
/// | anything       | ±0              | (atan(re), ±0)     |
/// | ±0             | ±i              | (±0, ±Inf)         |
/// | ±Inf           | anything        | (±π/2, ±0) ¹       |
/// | finite         | ±Inf            | (±π/2, ±0)         |
/// | NaN            | ±Inf            | (NaN, ±0)          |
/// | anything else  | NaN             | (NaN, NaN)         |
///
/// ¹ the sign of the imaginary zero is unspecified when `im` is NaN.
pub fn atan(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if y == 0.0 {
        return Complex64::new(Float::atan(x), y);
    }
    if x == 0.0 && Float::abs(y) <= 1.0 {
        return Complex64::new(x, Float::atanh(y));
    }

    if x.is_infinite() || y.is_infinite() {
        if x.is_nan() {
            return Complex64::new(f64::NAN, copysign(0.0, y));
        }
        return Complex64::new(copysign(FRAC_PI_2, x), copysign(0.0, y));
    }

    if x.is_nan() || y.is_nan() {
        return Complex64::new(f64::NAN, f64::NAN);
    }

    let m = Float::max(Float::abs(x), Float::abs(y));
    if m >= ATAN_ASYMPTOTIC {
        // Re is ±π/2 to within 1/|z|; Im is about y/|z|^2, taken with
        // both parts scaled by 1/m so nothing squares past overflow
        let (xs, ys) = (x / m, y / m);
        let t = ys - 1.0 / m;
        let b = xs * xs + t * t;
        let u = 4.0 * ys / (m * b);
        return Complex64::new(copysign(FRAC_PI_2, x), 0.25 * Float::ln_1p(u));
    }

    // formula: arctan(z) = (ln(1+iz) - ln(1-iz))/(2i)
    let x2 = x * x;
    let a = 1.0 - x2 - y * y;
    let t = 0.5 * Float::atan2(2.0 * x, a);
    let re = reduce_pi(t);

    // |1+iz|^2 / |1-iz|^2 = 1 + 4y / (x^2 + (y-1)^2)
    let t = y - 1.0;
    let b = x2 + t * t;
    if b == 0.0 {
        return Complex64::new(re, f64::INFINITY);
    }

    // rounding in b can push the ratio just past -1 next to -i
    let u = Float::max(4.0 * y / b, -1.0);
    Complex64::new(re, 0.25 * Float::ln_1p(u))
}
