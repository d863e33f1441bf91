//! Complex FFT convolution over small coefficients.
//!
//! Each limb is cut into `digit_bits` wide coefficients, both coefficient
//! sequences are transformed, multiplied pointwise and transformed back, and
//! the rounded real parts are carried back into limbs. Round-off is measured
//! on every output so the caller can refuse a result that came too close to
//! rounding the wrong way.

use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

use crate::big_num_constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    fn conj(self) -> Self {
        Complex::new(self.re, -self.im)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Self) -> Self::Output {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Self) -> Self::Output {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Self) -> Self::Output {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Transform length and coefficient width for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FftPlan {
    pub digit_bits: usize,
    pub len: usize,
}

impl FftPlan {
    /// Picks the widest coefficient whose transform stays inside its precision
    /// bound, or `None` when a product of `product_limbs` limbs is too long for
    /// any of them.
    pub fn for_product(product_limbs: usize) -> Option<FftPlan> {
        [(16, FFT_MAX_LEN_16), (8, FFT_MAX_LEN_8)]
            .into_iter()
            .find_map(|(digit_bits, max_len)| {
                let coefficients = product_limbs.checked_mul(LIMB_BITS / digit_bits)?;
                let len = coefficients.checked_next_power_of_two()?;
                (len <= max_len).then_some(FftPlan { digit_bits, len })
            })
    }

    fn digits_per_limb(&self) -> usize {
        LIMB_BITS / self.digit_bits
    }
}

/// Product limbs (`a.len() + b.len()` of them, not normalized) and the largest
/// distance between an inverse-transform output and the integer it was rounded to.
///
/// `max_error` is infinite when the rounded coefficients cannot be the product
/// at all (negative coefficient, or carries past the last limb).
#[derive(Debug, Clone)]
pub struct Convolution {
    pub limbs: Vec<Limb>,
    pub max_error: f64,
}

pub fn convolve(a: &[Limb], b: &[Limb], plan: &FftPlan) -> Convolution {
    let roots = roots_of_unity(plan.len);

    let mut fa = split_coefficients(a, plan);
    let mut fb = split_coefficients(b, plan);
    transform(&mut fa, &roots, false);
    transform(&mut fb, &roots, false);
    for (x, y) in fa.iter_mut().zip(&fb) {
        *x = *x * *y;
    }
    transform(&mut fa, &roots, true);

    let digits_per_limb = plan.digits_per_limb();
    let digit_mask: u64 = (1 << plan.digit_bits) - 1;
    let scale = plan.len as f64;

    let mut limbs: Vec<Limb> = vec![0; a.len() + b.len()];
    let mut max_error: f64 = 0.0;
    let mut carry: u64 = 0;
    for (i, c) in fa.iter().enumerate() {
        let exact = c.re / scale;
        let rounded = exact.round();
        max_error = max_error.max((exact - rounded).abs());
        if rounded < 0.0 {
            max_error = f64::INFINITY;
            continue;
        }

        let value = carry + rounded as u64;
        let digit = value & digit_mask;
        carry = value >> plan.digit_bits;

        let limb_index = i / digits_per_limb;
        if limb_index < limbs.len() {
            let shift = (i % digits_per_limb) * plan.digit_bits;
            limbs[limb_index] |= (digit as Limb) << shift;
        } else if digit != 0 {
            max_error = f64::INFINITY;
        }
    }
    if carry != 0 {
        max_error = f64::INFINITY;
    }

    Convolution { limbs, max_error }
}

/// Little-endian coefficients of `limbs`, zero padded to the transform length.
fn split_coefficients(limbs: &[Limb], plan: &FftPlan) -> Vec<Complex> {
    let mask: Limb = (1 << plan.digit_bits) - 1;
    let mut coefficients = Vec::with_capacity(plan.len);
    for &limb in limbs {
        for k in 0..plan.digits_per_limb() {
            let digit = (limb >> (k * plan.digit_bits)) & mask;
            coefficients.push(Complex::new(digit as f64, 0.0));
        }
    }
    coefficients.resize(plan.len, Complex::default());
    coefficients
}

/// `e^(2πik/len)` for `k < len / 2`, each evaluated directly rather than by
/// repeated multiplication so the error does not accumulate along the table.
fn roots_of_unity(len: usize) -> Vec<Complex> {
    (0..len / 2)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / len as f64;
            Complex::new(angle.cos(), angle.sin())
        })
        .collect()
}

fn bit_reverse_permute(data: &mut [Complex]) {
    let n = data.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            data.swap(i, j);
        }
    }
}

/// In-place iterative radix-2 transform of a power-of-two length sequence.
/// The inverse uses conjugated roots and leaves the `1 / len` scaling to the caller.
fn transform(data: &mut [Complex], roots: &[Complex], invert: bool) {
    let n = data.len();
    bit_reverse_permute(data);

    let mut half = 1;
    while half < n {
        let step = n / (half * 2);
        for start in (0..n).step_by(half * 2) {
            for k in 0..half {
                let w = if invert { roots[k * step].conj() } else { roots[k * step] };
                let u = data[start + k];
                let v = data[start + k + half] * w;
                data[start + k] = u + v;
                data[start + k + half] = u - v;
            }
        }
        half <<= 1;
    }
}
