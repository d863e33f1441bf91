//! Quotient and remainder of magnitudes.

use std::cmp::Ordering;

use crate::big_num_constants::*;
use crate::big_uint::BigUint;
use crate::error::{Error, Result};
use crate::limb_buffer::LimbBuffer;

/// `(dividend / divisor, dividend % divisor)` with `remainder < divisor`.
pub fn div_rem(dividend: &BigUint, divisor: &BigUint) -> Result<(BigUint, BigUint)> {
    if divisor.is_zero() {
        return Err(Error::DivisionByZero);
    }
    match dividend.compare(divisor) {
        Ordering::Less => return Ok((BigUint::zero(), dividend.clone())),
        Ordering::Equal => return Ok((BigUint::one(), BigUint::zero())),
        Ordering::Greater => {}
    }

    if let &[d] = divisor.limbs() {
        let mut quotient = dividend.clone();
        let remainder = div_rem_limb_assign(&mut quotient, d);
        return Ok((quotient, BigUint::from(remainder)));
    }
    Ok(long_division(dividend, divisor))
}

/// Divides `value` by a single non-zero limb in place and returns the remainder.
///
/// One pass from the most significant limb down with a double-width running
/// remainder; each step yields one quotient limb.
pub(crate) fn div_rem_limb_assign(value: &mut BigUint, divisor: Limb) -> Limb {
    debug_assert!(divisor != 0);
    let divisor = divisor as DoubleLimb;
    let buf = value.buffer_mut();
    let mut remainder: DoubleLimb = 0;
    for limb in buf.as_mut_slice().iter_mut().rev() {
        let current = (remainder << LIMB_BITS) | *limb as DoubleLimb;
        *limb = (current / divisor) as Limb;
        remainder = current % divisor;
    }
    buf.normalize();
    remainder as Limb
}

/// Restoring binary long division, one dividend bit at a time from the top.
///
/// The running remainder takes the next bit on the right; whenever it reaches
/// the divisor the divisor is subtracted and the matching quotient bit set.
fn long_division(dividend: &BigUint, divisor: &BigUint) -> (BigUint, BigUint) {
    let limbs = dividend.limbs();
    let mut quotient = LimbBuffer::with_capacity(limbs.len());
    quotient.resize_zeroed(limbs.len());
    let mut remainder = BigUint::zero();

    for (i, &limb) in limbs.iter().enumerate().rev() {
        for bit in (0..LIMB_BITS).rev() {
            remainder.shl_assign_bits(1);
            remainder.buffer_mut().as_mut_slice()[0] |= (limb >> bit) & 1;
            if remainder >= *divisor {
                remainder.sub_assign_unchecked(divisor);
                quotient.as_mut_slice()[i] |= 1 << bit;
            }
        }
    }

    (BigUint::from_buffer(quotient), remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> BigUint {
        BigUint::from_str_radix(s, 16).unwrap()
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(div_rem(&BigUint::one(), &BigUint::zero()), Err(Error::DivisionByZero));
        assert_eq!(div_rem(&BigUint::zero(), &BigUint::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_small_dividend() {
        let a = hex("1234");
        let b = hex("123456789abcdef01");
        assert_eq!(div_rem(&a, &b).unwrap(), (BigUint::zero(), a.clone()));
        assert_eq!(div_rem(&b, &b).unwrap(), (BigUint::one(), BigUint::zero()));
    }

    #[test]
    fn test_single_limb_divisor() {
        let a = hex("10000000000000000");
        let (q, r) = div_rem(&a, &BigUint::from(3_u32)).unwrap();
        assert_eq!(q, hex("5555555555555555"));
        assert_eq!(r, BigUint::one());

        let mut v = hex("ffffffffffffffffffffffff");
        assert_eq!(div_rem_limb_assign(&mut v, 0x10000), 0xffff);
        assert_eq!(v, hex("ffffffffffffffffffff"));
    }

    #[test]
    fn test_multi_limb_divisor() {
        // 2^96 + 5 = (2^64 + 1)(2^32 - 1) + 2^64 - 2^32 + 6
        let a = hex("1000000000000000000000005");
        let b = hex("10000000000000001");
        let (q, r) = div_rem(&a, &b).unwrap();
        assert!(r < b);
        assert_eq!(&(&q * &b) + &r, a);
        assert_eq!(q, hex("ffffffff"));
        assert_eq!(r, hex("ffffffff00000006"));
    }

    #[test]
    fn test_exact_multi_limb_division() {
        let b = hex("fedcba9876543210fedcba98");
        let q = hex("123456789abcdef0123456789abcdef");
        let (quotient, remainder) = div_rem(&(&q * &b), &b).unwrap();
        assert_eq!(quotient, q);
        assert!(remainder.is_zero());
    }
}
