//! # BigUint
//! Arbitrary-precision magnitudes stored as little-endian 32-bit limbs.
//! # Example
//! ```
//! use apa::BigUint;
//!
//! let a: BigUint = "10000000000000".parse().unwrap();
//! let b: BigUint = "900000000000".parse().unwrap();
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {:x}", &a << 10);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
};
use std::str::FromStr;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::division;
use crate::error::{Error, Result};
use crate::limb_buffer::LimbBuffer;
use crate::multiplication::{self, MulStrategy};
use crate::radix;

/// An unsigned integer of unbounded size.
///
/// Zero is always the single limb `[0]`; no other value carries zero limbs above
/// its most significant one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigUint {
    buf: LimbBuffer,
}

// 切片上的基本运算
/// Strips high zero limbs; the result may be empty.
pub(crate) fn trim(limbs: &[Limb]) -> &[Limb] {
    let significant = limbs.iter().rposition(|&x| x != 0).map_or(0, |i| i + 1);
    &limbs[..significant]
}

/// Orders two limb slices by numeric value, ignoring high zero limbs.
pub(crate) fn compare_limbs(a: &[Limb], b: &[Limb]) -> Ordering {
    let a = trim(a);
    let b = trim(b);
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// `a + b` as `max(a.len(), b.len()) + 1` limbs.
pub(crate) fn add_limbs(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Vec::with_capacity(long.len() + 1);
    sum.extend_from_slice(long);
    sum.push(0);
    add_at(&mut sum, short, 0);
    sum
}

/// `out[offset..] += x`; the carry must not run past the end of `out`.
pub(crate) fn add_at(out: &mut [Limb], x: &[Limb], offset: usize) {
    let x = trim(x);
    let mut carry: DoubleLimb = 0;
    let mut i = offset;
    for &limb in x {
        let sum = out[i] as DoubleLimb + limb as DoubleLimb + carry;
        out[i] = sum as Limb;
        carry = sum >> LIMB_BITS;
        i += 1;
    }
    while carry != 0 {
        let sum = out[i] as DoubleLimb + carry;
        out[i] = sum as Limb;
        carry = sum >> LIMB_BITS;
        i += 1;
    }
}

/// `x -= y`, requires `x >= y`.
pub(crate) fn sub_assign_limbs(x: &mut [Limb], y: &[Limb]) {
    let y = trim(y);
    let mut borrow = false;
    for (i, limb) in x.iter_mut().enumerate() {
        let rhs = match y.get(i) {
            Some(&rhs) => rhs,
            None if !borrow => break,
            None => 0,
        };
        let (diff, b1) = limb.overflowing_sub(rhs);
        let (diff, b2) = diff.overflowing_sub(borrow as Limb);
        *limb = diff;
        borrow = b1 || b2;
    }
    debug_assert!(!borrow, "limb subtraction underflowed");
}

// 实现构造
impl BigUint {
    /// Builds a value from one limb without going through the small-value cache.
    pub(crate) fn from_limb(value: Limb) -> BigUint {
        BigUint { buf: LimbBuffer::from_limb(value) }
    }

    /// Builds a value from little-endian limbs; high zero limbs are trimmed.
    pub fn from_limbs(limbs: Vec<Limb>) -> BigUint {
        BigUint { buf: LimbBuffer::from_limbs(limbs) }
    }

    pub fn from_buffer(mut buf: LimbBuffer) -> BigUint {
        if buf.is_detached() {
            buf = LimbBuffer::new();
        }
        buf.normalize();
        BigUint { buf }
    }

    pub fn zero() -> BigUint {
        ZERO.clone()
    }

    pub fn one() -> BigUint {
        ONE.clone()
    }

    pub fn two() -> BigUint {
        TWO.clone()
    }

    pub fn ten() -> BigUint {
        TEN.clone()
    }

    /// Parses digits of `radix` (2..=36) without sign or prefix.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<BigUint> {
        radix::parse(text, radix)
    }

    fn value_of(val: u128) -> BigUint {
        if val <= MAX_CONSTANT as u128 {
            return SMALL_CACHE[val as usize].clone();
        }
        let mut limbs = Vec::with_capacity(u128::BITS as usize / LIMB_BITS);
        let mut rest = val;
        while rest != 0 {
            limbs.push(rest as Limb);
            rest >>= LIMB_BITS;
        }
        BigUint::from_limbs(limbs)
    }
}

macro_rules! impl_unsigned_to_big_uint {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigUint {
        fn from(val: $u) -> Self {
            BigUint::value_of(val as u128)
        }
    }
    )*
    };
}
impl_unsigned_to_big_uint!(u8, u16, u32, u64, u128, usize);

impl FromStr for BigUint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        radix::parse(s, 10)
    }
}

// 查询与所有权
impl BigUint {
    pub fn is_zero(&self) -> bool {
        self.buf.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.limbs() == [1]
    }

    /// Read-only view of the significant limbs, least significant first.
    pub fn limbs(&self) -> &[Limb] {
        self.buf.as_slice()
    }

    pub fn buffer(&self) -> &LimbBuffer {
        &self.buf
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut LimbBuffer {
        &mut self.buf
    }

    /// Number of significant bits; zero has none.
    pub fn bit_size(&self) -> usize {
        let limbs = self.limbs();
        let top = limbs[limbs.len() - 1];
        (limbs.len() - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize)
    }

    pub fn byte_size(&self) -> usize {
        self.bit_size().div_ceil(8)
    }

    /// Position of the lowest set bit, `None` for zero.
    pub fn trailing_zeros(&self) -> Option<usize> {
        let limbs = self.limbs();
        let i = limbs.iter().position(|&x| x != 0)?;
        Some(i * LIMB_BITS + limbs[i].trailing_zeros() as usize)
    }

    pub fn to_u64(&self) -> Option<u64> {
        match *self.limbs() {
            [low] => Some(low as u64),
            [low, high] => Some(((high as u64) << LIMB_BITS) | low as u64),
            _ => None,
        }
    }

    /// Consumes the value and hands its limbs to the caller.
    pub fn detach(mut self) -> Vec<Limb> {
        self.buf.detach()
    }

    /// Moves the value out, leaving zero in its place.
    pub fn take(&mut self) -> BigUint {
        BigUint { buf: self.buf.take() }
    }
}

// 实现大小比较
impl BigUint {
    pub fn compare(&self, other: &BigUint) -> Ordering {
        compare_limbs(self.limbs(), other.limbs())
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// 实现加法
impl BigUint {
    fn add_ref(&self, rhs: &BigUint) -> BigUint {
        let (mut sum, addend) = if self.buf.len() >= rhs.buf.len() {
            (self.clone(), rhs)
        } else {
            (rhs.clone(), self)
        };
        sum.add_assign_ref(addend);
        sum
    }

    fn add_assign_ref(&mut self, rhs: &BigUint) {
        self.add_assign_limbs(rhs.limbs());
    }

    /// Ripple-carry addition in place, growing the buffer by at most one limb.
    fn add_assign_limbs(&mut self, rhs: &[Limb]) {
        let len = self.buf.len().max(rhs.len());
        self.buf.resize_zeroed(len + 1);
        let limbs = self.buf.as_mut_slice();
        let mut carry: DoubleLimb = 0;
        for i in 0..len {
            let addend = rhs.get(i).copied().unwrap_or(0);
            if i >= rhs.len() && carry == 0 {
                break;
            }
            let sum = limbs[i] as DoubleLimb + addend as DoubleLimb + carry;
            limbs[i] = sum as Limb;
            carry = sum >> LIMB_BITS;
        }
        limbs[len] = carry as Limb;
        self.buf.normalize();
    }

    /// Multiplies by `multiplier` and adds `addend` in place.
    pub(crate) fn mul_add_limb(&mut self, multiplier: Limb, addend: Limb) {
        let len = self.buf.len();
        self.buf.resize_zeroed(len + 1);
        let limbs = self.buf.as_mut_slice();
        let mut carry = addend as DoubleLimb;
        for limb in &mut limbs[..len] {
            let product = (*limb as DoubleLimb) * (multiplier as DoubleLimb) + carry;
            *limb = product as Limb;
            carry = product >> LIMB_BITS;
        }
        limbs[len] = carry as Limb;
        self.buf.normalize();
    }

    pub fn inc(&mut self) {
        self.add_assign_limbs(&[1]);
    }
}

forward_binop!(BigUint, Add, add, AddAssign, add_assign, add_ref, add_assign_ref);

// 实现减法
impl BigUint {
    /// `self - rhs`, or [`Error::Underflow`] when `rhs > self`.
    pub fn checked_sub(&self, rhs: &BigUint) -> Result<BigUint> {
        let mut difference = self.clone();
        difference.try_sub_assign(rhs)?;
        Ok(difference)
    }

    pub fn try_sub_assign(&mut self, rhs: &BigUint) -> Result<()> {
        if self.compare(rhs) == Ordering::Less {
            return Err(Error::Underflow);
        }
        self.sub_assign_unchecked(rhs);
        Ok(())
    }

    /// Caller guarantees `self >= rhs`.
    pub(crate) fn sub_assign_unchecked(&mut self, rhs: &BigUint) {
        sub_assign_limbs(self.buf.as_mut_slice(), rhs.limbs());
        self.buf.normalize();
    }

    /// Subtracts one; zero is [`Error::Underflow`].
    pub fn dec(&mut self) -> Result<()> {
        self.try_sub_assign(&ONE)
    }

    fn sub_ref(&self, rhs: &BigUint) -> BigUint {
        or_panic!(self.checked_sub(rhs))
    }

    fn sub_assign_ref(&mut self, rhs: &BigUint) {
        or_panic!(self.try_sub_assign(rhs))
    }
}

forward_binop!(BigUint, Sub, sub, SubAssign, sub_assign, sub_ref, sub_assign_ref);

// 实现乘法
impl BigUint {
    /// Multiplies with an explicitly chosen algorithm instead of the length-based choice.
    pub fn mul_with(&self, rhs: &BigUint, strategy: MulStrategy) -> BigUint {
        if self.is_zero() || rhs.is_zero() {
            return BigUint::zero();
        }
        BigUint::from_limbs(multiplication::mul_limbs_with(self.limbs(), rhs.limbs(), strategy))
    }

    pub fn square(&self) -> BigUint {
        self.mul_ref(self)
    }

    fn mul_ref(&self, rhs: &BigUint) -> BigUint {
        if self.is_zero() || rhs.is_zero() {
            return BigUint::zero();
        }
        match (self.limbs(), rhs.limbs()) {
            (&[x], _) => {
                let mut product = rhs.clone();
                product.mul_add_limb(x, 0);
                product
            }
            (_, &[y]) => {
                let mut product = self.clone();
                product.mul_add_limb(y, 0);
                product
            }
            (a, b) => BigUint::from_limbs(multiplication::mul_limbs(a, b)),
        }
    }

    fn mul_assign_ref(&mut self, rhs: &BigUint) {
        *self = self.mul_ref(rhs);
    }
}

forward_binop!(BigUint, Mul, mul, MulAssign, mul_assign, mul_ref, mul_assign_ref);

// 实现除法与求余
impl BigUint {
    /// Quotient and remainder, or [`Error::DivisionByZero`].
    pub fn div_rem(&self, divisor: &BigUint) -> Result<(BigUint, BigUint)> {
        division::div_rem(self, divisor)
    }

    pub fn checked_div(&self, divisor: &BigUint) -> Result<BigUint> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, divisor: &BigUint) -> Result<BigUint> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    fn div_ref(&self, rhs: &BigUint) -> BigUint {
        or_panic!(self.checked_div(rhs))
    }

    fn div_assign_ref(&mut self, rhs: &BigUint) {
        *self = self.div_ref(rhs);
    }

    fn rem_ref(&self, rhs: &BigUint) -> BigUint {
        or_panic!(self.checked_rem(rhs))
    }

    fn rem_assign_ref(&mut self, rhs: &BigUint) {
        *self = self.rem_ref(rhs);
    }
}

forward_binop!(BigUint, Div, div, DivAssign, div_assign, div_ref, div_assign_ref);
forward_binop!(BigUint, Rem, rem, RemAssign, rem_assign, rem_ref, rem_assign_ref);

// 实现移位
impl BigUint {
    /// Whole-limb moves first, then the sub-limb remainder carried between
    /// neighbouring limbs.
    pub fn shl_assign_bits(&mut self, bits: usize) {
        if bits == 0 || self.is_zero() {
            return;
        }
        let limb_shift = bits / LIMB_BITS;
        let bit_shift = bits % LIMB_BITS;
        let old_len = self.buf.len();

        self.buf.resize_zeroed(old_len + limb_shift + 1);
        let limbs = self.buf.as_mut_slice();
        if limb_shift > 0 {
            limbs.copy_within(0..old_len, limb_shift);
            limbs[..limb_shift].fill(0);
        }
        if bit_shift > 0 {
            let mut carry: Limb = 0;
            for limb in &mut limbs[limb_shift..] {
                let wide = (*limb as DoubleLimb) << bit_shift;
                *limb = wide as Limb | carry;
                carry = (wide >> LIMB_BITS) as Limb;
            }
        }
        self.buf.normalize();
    }

    /// Drops the low `bits` bits; shifting by the full width or more leaves zero.
    pub fn shr_assign_bits(&mut self, bits: usize) {
        if bits == 0 {
            return;
        }
        let len = self.buf.len();
        if bits >= len * LIMB_BITS {
            self.buf.set_limb(0);
            return;
        }
        let limb_shift = bits / LIMB_BITS;
        let bit_shift = bits % LIMB_BITS;
        let new_len = len - limb_shift;

        let limbs = self.buf.as_mut_slice();
        if limb_shift > 0 {
            limbs.copy_within(limb_shift..len, 0);
        }
        if bit_shift > 0 {
            let mut carry: Limb = 0;
            for limb in limbs[..new_len].iter_mut().rev() {
                let wide = ((*limb as DoubleLimb) << LIMB_BITS) >> bit_shift;
                *limb = (wide >> LIMB_BITS) as Limb | carry;
                carry = wide as Limb;
            }
        }
        self.buf.resize_zeroed(new_len);
        self.buf.normalize();
    }
}

forward_shift!(BigUint, Shl, shl, ShlAssign, shl_assign, shl_assign_bits);
forward_shift!(BigUint, Shr, shr, ShrAssign, shr_assign, shr_assign_bits);

// 实现打印
impl BigUint {
    /// Digits in `radix` (2..=36), lowercase, no prefix.
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        radix::format(self, radix)
    }

    /// Lowercase hexadecimal, no prefix, no leading zeros.
    pub fn to_hex(&self) -> String {
        radix::to_hex(self)
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &radix::format_unchecked(self, 10))
    }
}

impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_hex())
    }
}

impl fmt::UpperHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_hex().to_ascii_uppercase())
    }
}

impl fmt::Octal for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &radix::format_unchecked(self, 8))
    }
}

impl fmt::Binary for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &radix::format_unchecked(self, 2))
    }
}
