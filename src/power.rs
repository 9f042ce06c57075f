// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Square root and powers.

use num_complex::Complex64;
use traits::{Float, Zero};

use crate::float::copysign;

/// `2^54`, scales small inputs of `sqrt` up before `hypot`.
const SQRT_UPSCALE: f64 = 1.8014398509481984e16;
/// `2^-27`, undoes `SQRT_UPSCALE` on the result.
const SQRT_DOWNSCALE: f64 = 7.450580596923828125e-9;

/// The exponent of [`pow`]: either a real or a complex number.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum Exponent {
    Real(f64),
    Complex(Complex64),
}

impl From<f64> for Exponent {
    #[inline]
    fn from(n: f64) -> Exponent {
        Exponent::Real(n)
    }
}

impl From<Complex64> for Exponent {
    #[inline]
    fn from(w: Complex64) -> Exponent {
        Exponent::Complex(w)
    }
}

/// Computes the principal value of the square root of `z`.
///
/// This function has one branch cut:
///
/// * `(-∞, 0)`, continuous from above.
///
/// The branch satisfies `-π/2 ≤ arg(sqrt(z)) ≤ π/2`.
///
/// ## Special values
///
/// | re            | im              | `sqrt(z)`      |
/// | ------------- | --------------- | -------------- |
/// | ±0            | ±0              | (+0, ±0)       |
/// | any, even NaN | ±Inf            | (+Inf, ±Inf)   |
/// | finite        | NaN             | (NaN, NaN)     |
/// | -Inf          | finite          | (+0, ±Inf)     |
/// | +Inf          | finite          | (+Inf, ±0)     |
/// | -Inf          | NaN             | (NaN, ±Inf)    |
/// | +Inf          | NaN             | (+Inf, NaN)    |
/// | NaN           | finite nonzero  | (NaN, NaN)     |
/// | NaN           | NaN             | (NaN, NaN)     |
pub fn sqrt(z: Complex64) -> Complex64 {
    let (mut x, mut y) = (z.re, z.im);

    if y == 0.0 {
        if x == 0.0 {
            return Complex64::new(0.0, y);
        }
        let r = Float::sqrt(Float::abs(x));
        if x < 0.0 {
            return Complex64::new(0.0, copysign(r, y));
        }
        return Complex64::new(r, y);
    }

    if y.is_infinite() {
        return Complex64::new(f64::INFINITY, y);
    }

    if x.is_nan() {
        return Complex64::new(f64::NAN, f64::NAN);
    }

    if x.is_infinite() {
        // y - y is +0 for finite y and NaN for NaN y
        if x < 0.0 {
            return Complex64::new(Float::abs(y - y), copysign(x, y));
        }
        return Complex64::new(x, copysign(y - y, y));
    }

    if y.is_nan() {
        return Complex64::new(f64::NAN, f64::NAN);
    }

    // Rescale to keep hypot away from overflow and underflow
    let scale;
    if Float::abs(x) > 4.0 || Float::abs(y) > 4.0 {
        x *= 0.25;
        y *= 0.25;
        scale = 2.0;
    } else {
        x *= SQRT_UPSCALE;
        y *= SQRT_UPSCALE;
        scale = SQRT_DOWNSCALE;
    }

    let r = Float::hypot(x, y);
    let (t, u) = if x >= 0.0 {
        let s = Float::sqrt(0.5 * (r + x));
        (s * scale, scale * Float::abs(y / (2.0 * s)))
    } else {
        let s = Float::sqrt(0.5 * (r - x));
        (scale * Float::abs(y / (2.0 * s)), s * scale)
    };

    Complex64::new(t, copysign(u, z.im))
}

/// Raises `z` to a real power, via de Moivre's formula.
///
/// A zero base gives `(0, 0)` for `n > 0`, `(+Inf, +Inf)` for `n ≤ 0` and
/// `(NaN, NaN)` for a NaN exponent.
pub fn powf(z: Complex64, n: f64) -> Complex64 {
    if z.is_zero() {
        if n.is_nan() {
            return Complex64::new(f64::NAN, f64::NAN);
        }
        if n > 0.0 {
            return Complex64::new(0.0, 0.0);
        }
        return Complex64::new(f64::INFINITY, f64::INFINITY);
    }

    if n == 0.0 {
        return Complex64::new(1.0, 0.0);
    }

    // formula: x^y = (ρ e^(i θ))^y = ρ^y e^(i θ y)
    let r = Float::powf(z.norm(), n);
    if r == 0.0 {
        return Complex64::new(0.0, 0.0);
    }

    let theta = n * z.arg();
    Complex64::new(r * Float::cos(theta), r * Float::sin(theta))
}

/// Raises `z` to a complex power.
///
/// For a zero base the result depends on `w` alone: `(NaN, NaN)` if `w`
/// has a NaN part, `1` if `Re(w) = 0`, infinite if `Re(w) < 0` (with a zero
/// imaginary part when `w` is real) and `0` otherwise.
pub fn powc(z: Complex64, w: Complex64) -> Complex64 {
    if z.is_zero() {
        if w.is_nan() {
            return Complex64::new(f64::NAN, f64::NAN);
        }
        if w.re == 0.0 {
            return Complex64::new(1.0, 0.0);
        }
        if w.re < 0.0 {
            if w.im == 0.0 {
                return Complex64::new(f64::INFINITY, 0.0);
            }
            return Complex64::new(f64::INFINITY, f64::INFINITY);
        }
        return Complex64::new(0.0, 0.0);
    }

    // formula: x^y = (ρ e^(i θ))^(c + i d)
    // = ρ^c e^(−d θ) (cos(c θ + d ln(ρ)) + i sin(c θ + d ln(ρ)))
    let (modulus, arg) = z.to_polar();
    let mut r = Float::powf(modulus, w.re);
    let mut theta = w.re * arg;

    if w.im != 0.0 {
        r *= Float::exp(-w.im * arg);
        theta += w.im * Float::ln(modulus);
    }

    Complex64::new(r * Float::cos(theta), r * Float::sin(theta))
}

/// Raises `z` to a real or complex power.
///
/// ```
/// use num_cmath::{pow, Complex64};
///
/// let z = Complex64::new(3.0, 1.0);
/// let a = pow(z, 4.0);
/// let b = pow(z, Complex64::new(4.0, 0.0));
/// assert!((a - Complex64::new(28.0, 96.0)).norm() < 1e-9);
/// assert!((a - b).norm() < 1e-9);
/// ```
#[inline]
pub fn pow<E: Into<Exponent>>(z: Complex64, exp: E) -> Complex64 {
    match exp.into() {
        Exponent::Real(n) => powf(z, n),
        Exponent::Complex(w) => powc(z, w),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use core::f64::consts::{E, FRAC_PI_2, SQRT_2};
    use core::f64::{INFINITY, NAN, NEG_INFINITY};

    use crate::tests::{assert_almost, assert_special, close, close_to_tol, Special::*};

    #[test]
    fn test_sqrt() {
        assert_special(sqrt(Complex64::new(0.0, 0.0)), Is(0.0), Is(0.0));
        assert_special(sqrt(Complex64::new(-0.0, -0.0)), Is(0.0), Is(-0.0));
        assert_special(sqrt(Complex64::new(4.0, 0.0)), Is(2.0), Is(0.0));
        assert_special(sqrt(Complex64::new(-4.0, 0.0)), Is(0.0), Is(2.0));
        assert_special(sqrt(Complex64::new(-4.0, -0.0)), Is(0.0), Is(-2.0));

        assert!(close(sqrt(Complex64::new(0.0, 2.0)), Complex64::new(1.0, 1.0)));
        assert!(close(sqrt(Complex64::new(0.0, -2.0)), Complex64::new(1.0, -1.0)));
        assert_almost(sqrt(Complex64::new(5.0, 9.0)), 2.7654683, 1.6272108);
        assert!(close(
            sqrt(Complex64::new(0.0, 1.0)),
            Complex64::new(SQRT_2 / 2.0, SQRT_2 / 2.0)
        ));

        for &(re, im) in [(1.0, 1.0), (-1.0, 1.0), (0.5, 0.5), (-3.0, -4.0), (1e-3, 7.0)].iter() {
            let c = Complex64::new(re, im);
            // sqrt(conj(z)) = conj(sqrt(z))
            assert!(close(sqrt(c.conj()), sqrt(c).conj()));
            // sqrt(z) * sqrt(z) = z
            assert!(close(sqrt(c) * sqrt(c), c));
            // for this branch, -pi/2 <= arg(sqrt(z)) <= pi/2
            assert!(-FRAC_PI_2 <= sqrt(c).arg() && sqrt(c).arg() <= FRAC_PI_2);
        }
    }

    #[test]
    fn test_sqrt_scaling() {
        // hypot would overflow without the quarter scaling
        let z = sqrt(Complex64::new(1e308, 1e308));
        assert!(z.is_finite());
        assert!(close_to_tol(
            z.unscale(1e154),
            sqrt(Complex64::new(1.0, 1.0)),
            1e-12
        ));

        // and lose every digit to underflow without the 2^54 one
        let z = sqrt(Complex64::new(3e-320, 4e-320));
        assert!(z.re > 0.0 && z.im > 0.0);
        let expected = sqrt(Complex64::new(3.0, 4.0)).scale(1e-160);
        assert!((z - expected).norm() < 1e-3 * expected.norm());
    }

    #[test]
    fn test_sqrt_special_values() {
        let rd = 42.195;

        assert_special(sqrt(Complex64::new(-10.0, INFINITY)), Is(INFINITY), Is(INFINITY));
        assert_special(sqrt(Complex64::new(4.0, NEG_INFINITY)), Is(INFINITY), Is(NEG_INFINITY));
        assert_special(sqrt(Complex64::new(NAN, INFINITY)), Is(INFINITY), Is(INFINITY));
        assert_special(sqrt(Complex64::new(rd, NAN)), Nan, Nan);

        assert_special(sqrt(Complex64::new(NEG_INFINITY, rd)), Is(0.0), Is(INFINITY));
        assert_special(sqrt(Complex64::new(NEG_INFINITY, -rd)), Is(0.0), Is(NEG_INFINITY));
        assert_special(sqrt(Complex64::new(INFINITY, -rd)), Is(INFINITY), Is(-0.0));
        assert_special(sqrt(Complex64::new(INFINITY, rd)), Is(INFINITY), Is(0.0));
        assert_special(sqrt(Complex64::new(NEG_INFINITY, NAN)), Nan, Unsigned(INFINITY));
        assert_special(sqrt(Complex64::new(INFINITY, NAN)), Is(INFINITY), Nan);
        assert_special(sqrt(Complex64::new(NEG_INFINITY, 0.0)), Is(0.0), Is(INFINITY));
        assert_special(sqrt(Complex64::new(INFINITY, -0.0)), Is(INFINITY), Is(-0.0));

        assert_special(sqrt(Complex64::new(NAN, rd)), Nan, Nan);
        assert_special(sqrt(Complex64::new(NAN, NAN)), Nan, Nan);
    }

    #[test]
    fn test_powf() {
        assert_special(powf(Complex64::new(0.0, 0.0), NAN), Nan, Nan);
        assert_special(powf(Complex64::new(0.0, 0.0), 32.0), Is(0.0), Is(0.0));
        assert_special(powf(Complex64::new(-0.0, 0.0), -4.0), Is(INFINITY), Is(INFINITY));
        assert_special(powf(Complex64::new(0.0, 0.0), 0.0), Is(INFINITY), Is(INFINITY));
        assert_special(powf(Complex64::new(2.0, -7.0), 0.0), Is(1.0), Is(0.0));

        assert_almost(powf(Complex64::new(3.0, 1.0), 4.0), 28.0, 96.0);
        assert_almost(powf(Complex64::new(3.0, 3.0), 4.0), -324.0, 0.0);
        assert!(close_to_tol(
            powf(Complex64::new(2.0, -1.0), 3.5),
            Complex64::new(-0.8684746, -16.695934),
            1e-5
        ));

        // |z|^n underflows to zero
        assert_special(powf(Complex64::new(0.5, 0.5), 5000.0), Is(0.0), Is(0.0));
    }

    #[test]
    fn test_powc() {
        assert_special(powc(Complex64::new(0.0, 0.0), Complex64::new(NAN, NAN)), Nan, Nan);
        assert_special(powc(Complex64::new(0.0, 0.0), Complex64::new(1.0, NAN)), Nan, Nan);
        assert_special(powc(Complex64::new(0.0, 0.0), Complex64::new(0.0, 9.0)), Is(1.0), Is(0.0));
        assert_special(powc(Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)), Is(INFINITY), Is(0.0));
        assert_special(
            powc(Complex64::new(0.0, 0.0), Complex64::new(-1.0, 2.0)),
            Is(INFINITY),
            Is(INFINITY),
        );
        assert_special(powc(Complex64::new(0.0, -0.0), Complex64::new(2.0, 5.0)), Is(0.0), Is(0.0));

        // i^i = e^(-pi/2)
        let i = Complex64::new(0.0, 1.0);
        assert!(close(powc(i, i), Complex64::new(E.powf(-FRAC_PI_2), 0.0)));

        let a = Complex64::new(2.0, -3.0);
        let b = Complex64::new(3.0, 0.0);
        assert!(close(powc(a, b), powf(a, b.re)));
        let c = Complex64::new(1.0 / 3.0, 0.1);
        assert!(close_to_tol(powc(a, c), Complex64::new(1.65826, -0.33502), 1e-5));
    }

    #[test]
    fn test_pow_dispatch() {
        let z = Complex64::new(1.5, -0.5);
        assert_eq!(pow(z, 2.5), powf(z, 2.5));
        assert_eq!(pow(z, Complex64::new(0.5, 1.0)), powc(z, Complex64::new(0.5, 1.0)));
        assert_eq!(Exponent::from(2.0), Exponent::Real(2.0));
        assert_eq!(Exponent::from(z), Exponent::Complex(z));
    }
}
