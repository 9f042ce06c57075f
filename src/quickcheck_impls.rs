// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bounded complex inputs for property tests.
//!
//! `f64::arbitrary` also yields NaN, infinities and huge magnitudes, which
//! is not what an identity over finite values wants.

use std::boxed::Box;

use num_complex::Complex64;
use quickcheck::{Arbitrary, Gen};

/// A finite complex number with both parts in `[-8, 8]`.
#[derive(Clone, Copy, Debug)]
pub struct Finite(pub Complex64);

/// A complex number with both parts in `[-0.7, 0.7)`, so `|z| < 1`.
#[derive(Clone, Copy, Debug)]
pub struct Small(pub Complex64);

fn part(g: &mut Gen, scale: f64) -> f64 {
    f64::from(i16::arbitrary(g)) * scale
}

impl Arbitrary for Finite {
    fn arbitrary(g: &mut Gen) -> Self {
        let scale = 1.0 / 4096.0;
        Finite(Complex64::new(part(g, scale), part(g, scale)))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(Shrinker::new(self.0).map(Finite))
    }
}

impl Arbitrary for Small {
    fn arbitrary(g: &mut Gen) -> Self {
        let scale = 0.7 / 32768.0;
        Small(Complex64::new(part(g, scale), part(g, scale)))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(Shrinker::new(self.0).map(Small))
    }
}

/// Shrinks the real part with the imaginary part held, then the other way
/// round. Both parts only move towards zero, so the bounds above hold.
struct Shrinker {
    shrinking_re: bool,
    z: Complex64,
    re_iter: Box<dyn Iterator<Item = f64>>,
    im_iter: Box<dyn Iterator<Item = f64>>,
}

impl Shrinker {
    fn new(z: Complex64) -> Self {
        Shrinker {
            shrinking_re: true,
            z,
            re_iter: z.re.shrink(),
            im_iter: z.im.shrink(),
        }
    }
}

impl Iterator for Shrinker {
    type Item = Complex64;

    fn next(&mut self) -> Option<Complex64> {
        if self.shrinking_re {
            if let Some(re) = self.re_iter.next() {
                return Some(Complex64::new(re, self.z.im));
            }
            self.shrinking_re = false;
        }
        self.im_iter.next().map(|im| Complex64::new(self.z.re, im))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bounds() {
        let mut g = Gen::new(100);
        for _ in 0..1000 {
            let Finite(z) = Finite::arbitrary(&mut g);
            assert!(z.re.abs() <= 8.0 && z.im.abs() <= 8.0);
            let Small(z) = Small::arbitrary(&mut g);
            assert!(z.norm() < 1.0);
        }
    }

    #[test]
    fn test_shrink_keeps_bounds() {
        let z = Complex64::new(-7.5, 3.25);
        for Finite(s) in Finite(z).shrink() {
            assert!(s.re.is_finite() && s.im.is_finite());
            assert!(s.re.abs() <= 7.5 && s.im.abs() <= 3.25);
            assert!(s.re == z.re || s.im == z.im);
        }
    }
}
