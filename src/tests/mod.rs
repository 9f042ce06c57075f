// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_complex::Complex64;


/// Tolerance for comparisons against published reference values.
pub const TOL: f64 = 1e-7;

/// Expected value of one component of a special-value result.
#[derive(Clone, Copy, Debug)]
pub enum Special {
    /// Exactly this value, sign of zero and infinity included.
    Is(f64),
    /// This value up to sign, for results whose sign is unspecified.
    Unsigned(f64),
    /// Any NaN.
    Nan,
}

impl Special {
    fn matches(self, x: f64) -> bool {
        match self {
            Special::Is(v) => {
                x == v && x.is_sign_negative() == v.is_sign_negative()
            }
            Special::Unsigned(v) => x.abs() == v.abs(),
            Special::Nan => x.is_nan(),
        }
    }
}

#[track_caller]
pub fn assert_special(z: Complex64, re: Special, im: Special) {
    assert!(
        re.matches(z.re) && im.matches(z.im),
        "got ({:?}, {:?}), expected ({:?}, {:?})",
        z.re,
        z.im,
        re,
        im
    );
}

pub fn close(a: Complex64, b: Complex64) -> bool {
    close_to_tol(a, b, 1e-10)
}

pub fn close_to_tol(a: Complex64, b: Complex64, tol: f64) -> bool {
    // returns true if a and b are reasonably close
    (a == b) || (a - b).norm() < tol
}

/// Componentwise `|a - b| < TOL`, the way reference tables are quoted.
#[track_caller]
pub fn assert_almost(z: Complex64, re: f64, im: f64) {
    assert!(
        (z.re - re).abs() < TOL && (z.im - im).abs() < TOL,
        "got {}, expected {}",
        z,
        Complex64::new(re, im)
    );
}
