// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Real-valued helpers shared by the complex functions.
//!
//! Classification (`is_nan`, `is_infinite`, `is_finite`) comes straight from
//! `f64`; everything that needs `libm` goes through `num_traits::Float` so the
//! crate builds the same way with `std` or `libm`.

use core::f64::consts::PI;

use num_complex::Complex64;
use traits::Float;

/// Extended precision decomposition of π: `DP1 + DP2 + DP3`.
///
/// `DP1` and `DP2` have enough trailing zero bits that `n * DP1` and
/// `n * DP2` stay exact for the multiples used in [`reduce_pi`].
pub(crate) const DP1: f64 = 3.14159265160560607910e0;
pub(crate) const DP2: f64 = 1.98418714791870343106e-9;
pub(crate) const DP3: f64 = 1.14423774522196636802e-17;

/// `2^-53`
pub(crate) const MACHEP: f64 = 1.0 / 9007199254740992.0;

/// Returns `true` iff the sign bit of `x` is set.
///
/// Zeros are told apart through `1/x`, so `sign(-0.0)` is `true`. NaN
/// reports `false`.
#[inline]
pub(crate) fn sign(x: f64) -> bool {
    if x == 0.0 {
        1.0 / x < 0.0
    } else {
        x < 0.0
    }
}

/// Returns `magnitude` with the sign bit of `sign_source`.
#[inline]
pub(crate) fn copysign(magnitude: f64, sign_source: f64) -> f64 {
    let m = Float::abs(magnitude);
    if sign(sign_source) {
        -m
    } else {
        m
    }
}

/// Returns `(cosh(y), sinh(y))`, evaluating `exp` once for `|y| > 0.5`.
#[inline]
pub(crate) fn cosh_sinh(y: f64) -> (f64, f64) {
    if Float::abs(y) <= 0.5 {
        return (Float::cosh(y), Float::sinh(y));
    }
    let e = Float::exp(y);
    let ei = 0.5 / e;
    let e = 0.5 * e;
    (e + ei, e - ei)
}

/// Reduces `x` modulo π into `[-π/2, π/2]`.
///
/// Inputs already inside that interval come back untouched, signed zeros
/// included. Non-finite inputs are returned as is.
pub(crate) fn reduce_pi(x: f64) -> f64 {
    let t = x / PI;
    let n = Float::ceil(Float::abs(t) - 0.5);
    if n == 0.0 || !n.is_finite() {
        return x;
    }
    let n = copysign(n, t);
    ((x - n * DP1) - n * DP2) - n * DP3
}

/// Taylor series for `cosh(2y) - cos(2x)`, where `z = x + iy`.
///
/// `2|x|` is reduced modulo π first. Near a pole of `tan` the multiple is
/// odd and the reduction flips the sign of the cosine, so the same series
/// also gives `cosh(2y) + cos(2x)` there.
pub(crate) fn tan_series(z: Complex64) -> f64 {
    let x = reduce_pi(Float::abs(2.0 * z.re));
    let x = x * x;
    let y = 2.0 * z.im;
    let y = y * y;

    let mut x2 = 1.0;
    let mut y2 = 1.0;
    let mut f = 1.0;
    let mut rn = 0.0;
    let mut d = 0.0;

    loop {
        rn += 1.0;
        f *= rn;
        rn += 1.0;
        f *= rn;
        x2 *= x;
        y2 *= y;
        let t1 = (y2 + x2) / f;
        d += t1;

        rn += 1.0;
        f *= rn;
        rn += 1.0;
        f *= rn;
        x2 *= x;
        y2 *= y;
        let t2 = (y2 - x2) / f;
        d += t2;

        // t2 alone vanishes whenever |x| = |y|, so both terms have to be
        // negligible. Written so that NaN also stops.
        let eps = MACHEP * Float::abs(d);
        if !(Float::abs(t1) > eps || Float::abs(t2) > eps) {
            break;
        }
    }

    d
}
