//! # BigInt
//! Signed arbitrary-precision integers: a [`Sign`] over a [`BigUint`] magnitude.
//! Division truncates toward zero and `>>` rounds toward negative infinity,
//! the same as the primitive signed integers.
//! # Example
//! ```
//! use apa::BigInt;
//!
//! let a: BigInt = "-0x10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {:x}", &a << 10);
//! println!("a >> 10 = {:x}", &a >> 10);
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
    Neg,
};
use std::str::FromStr;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::big_uint::BigUint;
use crate::error::{Error, Result};
use crate::multiplication::MulStrategy;
use crate::radix;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Self::Output {
        if self == rhs { Sign::Positive } else { Sign::Negative }
    }
}

/// A signed integer of unbounded size. Zero is always [`Sign::Positive`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    mag: BigUint,
}

// 实现构造
impl BigInt {
    /// Combines a sign and a magnitude; a zero magnitude is always positive.
    pub fn from_parts(sign: Sign, mag: BigUint) -> BigInt {
        let mut n = BigInt { sign, mag };
        n.fix_zero_sign();
        n
    }

    pub fn into_parts(self) -> (Sign, BigUint) {
        (self.sign, self.mag)
    }

    pub fn zero() -> BigInt {
        INT_ZERO.clone()
    }

    pub fn one() -> BigInt {
        INT_ONE.clone()
    }

    pub fn two() -> BigInt {
        INT_TWO.clone()
    }

    pub fn ten() -> BigInt {
        INT_TEN.clone()
    }

    pub fn minus_one() -> BigInt {
        INT_MINUS_ONE.clone()
    }

    /// Optional `+`/`-` followed by digits of `radix`; no base prefix.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<BigInt> {
        let (sign, digits) = split_sign(text);
        Ok(BigInt::from_parts(sign, radix::parse(digits, radix)?))
    }

    fn fix_zero_sign(&mut self) {
        if self.mag.is_zero() {
            self.sign = Sign::Positive;
        }
    }
}

fn split_sign(text: &str) -> (Sign, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (Sign::Negative, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (Sign::Positive, rest)
    } else {
        (Sign::Positive, text)
    }
}

/// `0b`, `0o`, `0x` in either case select the base, anything else is decimal.
fn split_prefix(text: &str) -> (u32, &str) {
    let radix = match text.get(..2).map(|p| p.to_ascii_lowercase()).as_deref() {
        Some("0b") => 2,
        Some("0o") => 8,
        Some("0x") => 16,
        _ => return (10, text),
    };
    (radix, &text[2..])
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (sign, rest) = split_sign(s);
        let (radix, digits) = split_prefix(rest);
        Ok(BigInt::from_parts(sign, radix::parse(digits, radix)?))
    }
}

impl From<BigUint> for BigInt {
    fn from(mag: BigUint) -> Self {
        BigInt { sign: Sign::Positive, mag }
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::from(BigUint::from(val))
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            let sign = if val < 0 { Sign::Negative } else { Sign::Positive };
            BigInt::from_parts(sign, BigUint::from(val.unsigned_abs()))
        }
    }
    )*
    };
}

impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);

// 查询与所有权
impl BigInt {
    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn magnitude(&self) -> &BigUint {
        &self.mag
    }

    pub fn abs(&self) -> BigInt {
        BigInt::from(self.mag.clone())
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn is_zero(&self) -> bool {
        self.mag.is_zero()
    }

    pub fn limbs(&self) -> &[Limb] {
        self.mag.limbs()
    }

    pub fn bit_size(&self) -> usize {
        self.mag.bit_size()
    }

    pub fn byte_size(&self) -> usize {
        self.mag.byte_size()
    }

    /// Moves the value out, leaving positive zero in its place.
    pub fn take(&mut self) -> BigInt {
        let sign = std::mem::take(&mut self.sign);
        BigInt { sign, mag: self.mag.take() }
    }

    /// Consumes the value and hands the magnitude's limbs to the caller.
    pub fn detach(self) -> Vec<Limb> {
        self.mag.detach()
    }
}

// 实现大小比较
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.mag.compare(&other.mag),
            (Sign::Negative, Sign::Negative) => other.mag.compare(&self.mag),
        }
    }
}

// 实现取反
impl BigInt {
    /// Flips the sign in place; zero stays positive.
    pub fn negate(&mut self) {
        self.sign = -self.sign;
        self.fix_zero_sign();
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

// 实现加减法
impl BigInt {
    /// `self += sign·mag`. Magnitudes are compared first so the larger one is
    /// always the minuend.
    fn add_signed_assign(&mut self, sign: Sign, mag: &BigUint) {
        if self.sign == sign {
            self.mag += mag;
            return;
        }
        match self.mag.compare(mag) {
            Ordering::Greater => self.mag.sub_assign_unchecked(mag),
            Ordering::Less => {
                let mut difference = mag.clone();
                difference.sub_assign_unchecked(&self.mag);
                self.mag = difference;
                self.sign = sign;
            }
            Ordering::Equal => {
                self.mag = BigUint::zero();
                self.sign = Sign::Positive;
            }
        }
    }

    fn add_ref(&self, rhs: &BigInt) -> BigInt {
        let mut sum = self.clone();
        sum.add_assign_ref(rhs);
        sum
    }

    fn add_assign_ref(&mut self, rhs: &BigInt) {
        self.add_signed_assign(rhs.sign, &rhs.mag);
    }

    fn sub_ref(&self, rhs: &BigInt) -> BigInt {
        let mut difference = self.clone();
        difference.sub_assign_ref(rhs);
        difference
    }

    fn sub_assign_ref(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            return;
        }
        self.add_signed_assign(-rhs.sign, &rhs.mag);
    }

    pub fn inc(&mut self) {
        self.add_signed_assign(Sign::Positive, &ONE);
    }

    pub fn dec(&mut self) {
        self.add_signed_assign(Sign::Negative, &ONE);
    }
}

forward_binop!(BigInt, Add, add, AddAssign, add_assign, add_ref, add_assign_ref);
forward_binop!(BigInt, Sub, sub, SubAssign, sub_assign, sub_ref, sub_assign_ref);

// 实现乘法
impl BigInt {
    /// Multiplies the magnitudes with an explicitly chosen algorithm.
    pub fn mul_with(&self, rhs: &BigInt, strategy: MulStrategy) -> BigInt {
        BigInt::from_parts(self.sign * rhs.sign, self.mag.mul_with(&rhs.mag, strategy))
    }

    pub fn square(&self) -> BigInt {
        BigInt::from(self.mag.square())
    }

    fn mul_ref(&self, rhs: &BigInt) -> BigInt {
        BigInt::from_parts(self.sign * rhs.sign, &self.mag * &rhs.mag)
    }

    fn mul_assign_ref(&mut self, rhs: &BigInt) {
        self.mag *= &rhs.mag;
        self.sign = self.sign * rhs.sign;
        self.fix_zero_sign();
    }
}

forward_binop!(BigInt, Mul, mul, MulAssign, mul_assign, mul_ref, mul_assign_ref);

// 实现除法与求余
impl BigInt {
    /// Truncated division: the quotient rounds toward zero and the remainder
    /// carries the dividend's sign, so `self == q * divisor + r`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        let (q, r) = self.mag.div_rem(&divisor.mag)?;
        Ok((
            BigInt::from_parts(self.sign * divisor.sign, q),
            BigInt::from_parts(self.sign, r),
        ))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    fn div_ref(&self, rhs: &BigInt) -> BigInt {
        or_panic!(self.checked_div(rhs))
    }

    fn div_assign_ref(&mut self, rhs: &BigInt) {
        *self = self.div_ref(rhs);
    }

    fn rem_ref(&self, rhs: &BigInt) -> BigInt {
        or_panic!(self.checked_rem(rhs))
    }

    fn rem_assign_ref(&mut self, rhs: &BigInt) {
        *self = self.rem_ref(rhs);
    }
}

forward_binop!(BigInt, Div, div, DivAssign, div_assign, div_ref, div_assign_ref);
forward_binop!(BigInt, Rem, rem, RemAssign, rem_assign, rem_ref, rem_assign_ref);

// 实现移位
impl BigInt {
    pub fn shl_assign_bits(&mut self, bits: usize) {
        self.mag.shl_assign_bits(bits);
    }

    /// Floor shift: a negative value that loses any set bit moves one further
    /// from zero, so `-1 >> n == -1`.
    pub fn shr_assign_bits(&mut self, bits: usize) {
        let round_down = self.is_negative()
            && self.mag.trailing_zeros().is_some_and(|zeros| zeros < bits);
        self.mag.shr_assign_bits(bits);
        if round_down {
            self.mag.inc();
        }
    }
}

forward_shift!(BigInt, Shl, shl, ShlAssign, shl_assign, shl_assign_bits);
forward_shift!(BigInt, Shr, shr, ShrAssign, shr_assign, shr_assign_bits);

// 实现打印
impl BigInt {
    /// Digits in `radix` (2..=36) with a leading `-` for negative values.
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        let digits = radix::format(&self.mag, radix)?;
        Ok(self.with_sign(digits))
    }

    pub fn to_hex(&self) -> String {
        self.with_sign(self.mag.to_hex())
    }

    fn with_sign(&self, digits: String) -> String {
        if self.is_negative() {
            format!("-{}", digits)
        } else {
            digits
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &radix::format_unchecked(&self.mag, 10))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.mag.to_hex())
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.mag.to_hex().to_ascii_uppercase())
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &radix::format_unchecked(&self.mag, 8))
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &radix::format_unchecked(&self.mag, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_from() {
        assert_eq!(BigInt::from(-5_i32).to_string(), "-5");
        assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(BigInt::from(i128::MIN).limbs(), &[0, 0, 0, 0x8000_0000]);
        assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(BigInt::from(0_i8).sign(), Sign::Positive);
    }

    #[test]
    fn test_parse_sign_and_prefix() {
        assert_eq!(int("-0x1F"), BigInt::from(-31));
        assert_eq!(int("+0b101"), BigInt::from(5));
        assert_eq!(int("0O17"), BigInt::from(15));
        assert_eq!(int("-42"), BigInt::from(-42));
        assert_eq!(int("-0"), BigInt::zero());
        assert!(!int("-0").is_negative());
        assert_eq!(BigInt::from_str_radix("-zz", 36).unwrap(), BigInt::from(-1295));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<BigInt>(), Err(Error::EmptyInput));
        assert_eq!("-".parse::<BigInt>(), Err(Error::EmptyInput));
        assert_eq!("0x".parse::<BigInt>(), Err(Error::EmptyInput));
        assert_eq!(
            "-0x1g".parse::<BigInt>(),
            Err(Error::InvalidDigit { digit: 'g', index: 1, radix: 16 })
        );
        assert_eq!(
            "--1".parse::<BigInt>(),
            Err(Error::InvalidDigit { digit: '-', index: 0, radix: 10 })
        );
        assert_eq!(BigInt::from_str_radix("1", 99), Err(Error::InvalidRadix(99)));
    }

    #[test]
    fn test_add_sign_table() {
        assert_eq!(BigInt::from(5) + BigInt::from(3), BigInt::from(8));
        assert_eq!(BigInt::from(-5) + BigInt::from(-3), BigInt::from(-8));
        assert_eq!(BigInt::from(-5) + BigInt::from(3), BigInt::from(-2));
        assert_eq!(BigInt::from(5) + BigInt::from(-8), BigInt::from(-3));
        let zero = BigInt::from(-7) + BigInt::from(7);
        assert!(zero.is_zero());
        assert_eq!(zero.sign(), Sign::Positive);
    }

    #[test]
    fn test_sub_sign_table() {
        assert_eq!(BigInt::from(3) - BigInt::from(5), BigInt::from(-2));
        assert_eq!(BigInt::from(-3) - BigInt::from(5), BigInt::from(-8));
        assert_eq!(BigInt::from(-3) - BigInt::from(-5), BigInt::from(2));
        assert_eq!(BigInt::from(3) - BigInt::from(-5), BigInt::from(8));
        assert_eq!(BigInt::from(-4) - BigInt::from(-4), BigInt::zero());
        assert_eq!(BigInt::zero() - BigInt::zero(), BigInt::zero());
    }

    #[test]
    fn test_mul_signs() {
        assert_eq!(BigInt::from(-6) * BigInt::from(7), BigInt::from(-42));
        assert_eq!(BigInt::from(-6) * BigInt::from(-7), BigInt::from(42));
        let zero = BigInt::from(-6) * BigInt::zero();
        assert_eq!(zero.sign(), Sign::Positive);
        let mut v = BigInt::from(-6);
        v *= BigInt::zero();
        assert!(!v.is_negative());
    }

    #[test]
    fn test_div_rem_truncates() {
        for (a, b) in [(7_i64, 2_i64), (-7, 2), (7, -2), (-7, -2), (6, -3), (-1, 5)] {
            let (q, r) = BigInt::from(a).div_rem(&BigInt::from(b)).unwrap();
            assert_eq!(q, BigInt::from(a / b), "{a} / {b}");
            assert_eq!(r, BigInt::from(a % b), "{a} % {b}");
        }
        assert_eq!(BigInt::one().div_rem(&BigInt::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = BigInt::one() / BigInt::zero();
    }

    #[test]
    fn test_negate() {
        let mut v = BigInt::from(9);
        v.negate();
        assert_eq!(v, BigInt::from(-9));
        assert_eq!(-&v, BigInt::from(9));
        let mut zero = BigInt::zero();
        zero.negate();
        assert_eq!(zero.sign(), Sign::Positive);
    }

    #[test]
    fn test_inc_dec_cross_zero() {
        let mut v = BigInt::from(-1);
        v.inc();
        assert!(v.is_zero() && !v.is_negative());
        v.dec();
        assert_eq!(v, BigInt::minus_one());
        v.dec();
        assert_eq!(v, BigInt::from(-2));
    }

    #[test]
    fn test_ordering() {
        let values: Vec<BigInt> = ["-0x100000000", "-5", "-1", "0", "1", "0x100000000"]
            .iter()
            .map(|s| int(s))
            .collect();
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1], "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_shifts() {
        let v = int("0xdad0deed1feed2dead3beef4ceed5");
        assert_eq!(&v << 15, int("0x6d686f768ff7696f569df77a6776a8000"));
        assert_eq!(&v >> 15, int("0x1b5a1bdda3fdda5bd5a77dde99"));
        let n = -&v;
        assert_eq!(&n << 15, int("-0x6d686f768ff7696f569df77a6776a8000"));
        assert_eq!(&n >> 15, int("-0x1b5a1bdda3fdda5bd5a77dde9a"));
    }

    #[test]
    fn test_shr_floor_edges() {
        assert_eq!(BigInt::from(-1) >> 5, BigInt::from(-1));
        assert_eq!(BigInt::from(-8) >> 3, BigInt::from(-1));
        assert_eq!(BigInt::from(-9) >> 3, BigInt::from(-2));
        assert_eq!(BigInt::from(-9) >> 1000, BigInt::from(-1));
        assert_eq!(BigInt::from(9) >> 1000, BigInt::zero());
        assert_eq!(BigInt::from(-(1_i64 << 40)) >> 40, BigInt::from(-1));
    }

    #[test]
    fn test_take_resets_sign() {
        let mut v = BigInt::from(-77);
        let moved = v.take();
        assert_eq!(moved, BigInt::from(-77));
        assert!(v.is_zero());
        assert_eq!(v.sign(), Sign::Positive);
        assert_eq!(moved.detach(), vec![77]);
    }

    #[test]
    fn test_formatting() {
        let v = BigInt::from(-255);
        assert_eq!(v.to_string(), "-255");
        assert_eq!(v.to_hex(), "-ff");
        assert_eq!(v.to_string_radix(2).unwrap(), "-11111111");
        assert_eq!(v.to_string_radix(1), Err(Error::InvalidRadix(1)));
        assert_eq!(format!("{:#x}", v), "-0xff");
        assert_eq!(format!("{:X}", v), "-FF");
        assert_eq!(format!("{:o}", v), "-377");
        assert_eq!(format!("{:>6}", v), "  -255");
        assert_eq!(format!("{:+}", BigInt::from(3)), "+3");
    }

    #[test]
    fn test_sizes_report_magnitude() {
        let v = int("-0x1ff");
        assert_eq!(v.bit_size(), 9);
        assert_eq!(v.byte_size(), 2);
        assert_eq!(v.limbs(), &[0x1ff]);
        assert_eq!(v.abs(), int("0x1ff"));
    }
}
