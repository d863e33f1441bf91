//! Multiplication of limb slices.
//!
//! Three algorithms share one contract: given two non-empty little-endian limb
//! slices they return the product as exactly `a.len() + b.len()` limbs, not
//! normalized. [`select_strategy`] picks one from the operand lengths.

use crate::big_num_constants::*;
use crate::big_uint::{add_at, add_limbs, sub_assign_limbs};
use crate::fft::{self, FftPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MulStrategy {
    /// Double loop, `O(n·m)`.
    Schoolbook,
    /// Three half-size products per level, `O(n^1.585)`.
    Karatsuba,
    /// Complex FFT convolution, `O(n log n)`, verified against its round-off bound.
    Fft,
}

/// Schoolbook while either operand is shorter than `KARATSUBA_THRESHOLD`,
/// FFT once both reach `FFT_THRESHOLD` and the product fits an FFT plan,
/// Karatsuba in between.
pub fn select_strategy(a_len: usize, b_len: usize) -> MulStrategy {
    let shorter = a_len.min(b_len);
    if shorter < KARATSUBA_THRESHOLD {
        MulStrategy::Schoolbook
    } else if shorter >= FFT_THRESHOLD && FftPlan::for_product(a_len + b_len).is_some() {
        MulStrategy::Fft
    } else {
        MulStrategy::Karatsuba
    }
}

pub fn mul_limbs(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    mul_limbs_with(a, b, select_strategy(a.len(), b.len()))
}

pub fn mul_limbs_with(a: &[Limb], b: &[Limb], strategy: MulStrategy) -> Vec<Limb> {
    if strategy == MulStrategy::Schoolbook {
        return mul_schoolbook(a, b);
    }
    let _scope = tracing::trace_span!(
        "mul",
        strategy = ?strategy,
        a_len = a.len(),
        b_len = b.len()
    )
    .entered();
    match strategy {
        MulStrategy::Schoolbook => mul_schoolbook(a, b),
        MulStrategy::Karatsuba => mul_karatsuba(a, b),
        MulStrategy::Fft => mul_fft(a, b),
    }
}

pub fn mul_schoolbook(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut result: Vec<Limb> = vec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry: DoubleLimb = 0;
        for (j, &y) in b.iter().enumerate() {
            let product = (x as DoubleLimb) * (y as DoubleLimb)
                + result[i + j] as DoubleLimb
                + carry;
            result[i + j] = product as Limb;
            carry = product >> LIMB_BITS;
        }
        result[i + b.len()] = carry as Limb;
    }
    result
}

/// Multiplies two limb slices using the Karatsuba algorithm.
///
/// With `x = x1·B + x0` and `y = y1·B + y0`, where `B = 2^(32·half)`:
/// `x·y = x1y1·B² + ((x0 + x1)(y0 + y1) − x1y1 − x0y0)·B + x0y0`,
/// three half-size products instead of four. Recursion stops below
/// `KARATSUBA_THRESHOLD`, where the schoolbook loop is faster.
pub fn mul_karatsuba(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.len() < KARATSUBA_THRESHOLD {
        return mul_schoolbook(long, short);
    }
    if long.len() >= 2 * short.len() {
        return mul_unbalanced(long, short);
    }

    // here short.len() >= half, so both low halves are full
    let half = (long.len() + 1) / 2;
    let (x0, x1) = long.split_at(half);
    let (y0, y1) = short.split_at(half);

    let z0 = mul_karatsuba(x0, y0);
    let z2 = mul_karatsuba(x1, y1);
    let mut z1 = mul_karatsuba(&add_limbs(x0, x1), &add_limbs(y0, y1));
    sub_assign_limbs(&mut z1, &z0);
    sub_assign_limbs(&mut z1, &z2);

    let mut result: Vec<Limb> = vec![0; long.len() + short.len()];
    result[..z0.len()].copy_from_slice(&z0);
    add_at(&mut result, &z2, 2 * half);
    add_at(&mut result, &z1, half);
    result
}

/// `long` is at least twice as long as `short`: multiply `short` by each
/// `short`-sized chunk of `long` and accumulate at the chunk's offset.
fn mul_unbalanced(long: &[Limb], short: &[Limb]) -> Vec<Limb> {
    let mut result: Vec<Limb> = vec![0; long.len() + short.len()];
    for (k, chunk) in long.chunks(short.len()).enumerate() {
        let partial = mul_karatsuba(chunk, short);
        add_at(&mut result, &partial, k * short.len());
    }
    result
}

/// FFT convolution when a plan exists and its round-off stays below
/// `FFT_ROUNDING_TOLERANCE`; Karatsuba otherwise.
pub fn mul_fft(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let Some(plan) = FftPlan::for_product(a.len() + b.len()) else {
        tracing::debug!(
            product_len = a.len() + b.len(),
            "no FFT plan for product, using Karatsuba"
        );
        return mul_karatsuba(a, b);
    };
    tracing::debug!(digit_bits = plan.digit_bits, fft_len = plan.len, "FFT convolution");

    let conv = fft::convolve(a, b, &plan);
    if conv.max_error >= FFT_ROUNDING_TOLERANCE {
        tracing::warn!(
            max_error = conv.max_error,
            fft_len = plan.len,
            "FFT round-off above tolerance, falling back to Karatsuba"
        );
        return mul_karatsuba(a, b);
    }
    conv.limbs
}
