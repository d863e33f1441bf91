//! Digit string codec for bases 2..=36.
//!
//! Parsing folds `DIGITS_PER_INT[radix]` digits into one limb before touching
//! the magnitude, formatting peels `INT_RADIX[radix]` off with single-limb
//! division. Bases whose digit width divides the limb width move bits directly.

use std::fmt::Write;

use crate::big_num_constants::*;
use crate::big_uint::BigUint;
use crate::division::div_rem_limb_assign;
use crate::error::{Error, Result};

fn check_radix(radix: u32) -> Result<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(Error::InvalidRadix(radix))
    }
}

/// Bits per digit when `radix` is a power of two that packs evenly into a limb.
fn packed_digit_bits(radix: u32) -> Option<usize> {
    if !radix.is_power_of_two() {
        return None;
    }
    let bits = radix.trailing_zeros() as usize;
    (LIMB_BITS % bits == 0).then_some(bits)
}

/// Parses unsigned digits (no sign, no prefix). Letters may be either case.
pub fn parse(text: &str, radix: u32) -> Result<BigUint> {
    check_radix(radix)?;
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    let digits = text
        .chars()
        .enumerate()
        .map(|(index, digit)| {
            digit
                .to_digit(radix)
                .ok_or(Error::InvalidDigit { digit, index, radix })
        })
        .collect::<Result<Vec<u32>>>()?;

    match packed_digit_bits(radix) {
        Some(bits) => Ok(parse_packed(&digits, bits)),
        None => Ok(parse_grouped(&digits, radix)),
    }
}

fn parse_packed(digits: &[u32], bits: usize) -> BigUint {
    let per_limb = LIMB_BITS / bits;
    let limbs = digits
        .rchunks(per_limb)
        .map(|chunk| chunk.iter().fold(0, |limb: Limb, &d| (limb << bits) | d))
        .collect();
    BigUint::from_limbs(limbs)
}

fn parse_grouped(digits: &[u32], radix: u32) -> BigUint {
    let group_len = DIGITS_PER_INT[radix as usize];
    let mut value = BigUint::zero();
    for group in digits.chunks(group_len) {
        let chunk = group.iter().fold(0, |acc: Limb, &d| acc * radix + d);
        // only the last group can be short
        let scale = if group.len() == group_len {
            INT_RADIX[radix as usize]
        } else {
            radix.pow(group.len() as u32)
        };
        value.mul_add_limb(scale, chunk);
    }
    value
}

/// Lowercase digits of `value` in `radix`, no sign, no prefix.
pub fn format(value: &BigUint, radix: u32) -> Result<String> {
    check_radix(radix)?;
    Ok(format_unchecked(value, radix))
}

/// [`format`] for a radix already known to be in range.
pub(crate) fn format_unchecked(value: &BigUint, radix: u32) -> String {
    if value.is_zero() {
        return String::from("0");
    }
    if radix == 16 {
        return to_hex(value);
    }

    let group_len = DIGITS_PER_INT[radix as usize];
    let mut rest = value.clone();
    let mut reversed: Vec<char> = Vec::with_capacity(value.bit_size() / radix.ilog2() as usize + 1);
    while !rest.is_zero() {
        let mut chunk = div_rem_limb_assign(&mut rest, INT_RADIX[radix as usize]);
        // inner groups keep their leading zeros, the top group drops them
        let mut emitted = 0;
        while chunk != 0 || (emitted < group_len && !rest.is_zero()) {
            reversed.push(DIGITS[(chunk % radix) as usize]);
            chunk /= radix;
            emitted += 1;
        }
    }
    reversed.iter().rev().collect()
}

/// Lowercase hexadecimal, each limb an eight-digit group with the top one unpadded.
pub fn to_hex(value: &BigUint) -> String {
    let limbs = value.limbs();
    let mut hex = String::with_capacity(limbs.len() * HEX_DIGITS_PER_LIMB);
    let Some((top, rest)) = limbs.split_last() else {
        return String::from("0");
    };
    let _ = write!(hex, "{:x}", top);
    for limb in rest.iter().rev() {
        let _ = write!(hex, "{:0width$x}", limb, width = HEX_DIGITS_PER_LIMB);
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("", 10), Err(Error::EmptyInput));
        assert_eq!(parse("12", 1), Err(Error::InvalidRadix(1)));
        assert_eq!(parse("12", 37), Err(Error::InvalidRadix(37)));
        assert_eq!(
            parse("12a4", 10),
            Err(Error::InvalidDigit { digit: 'a', index: 2, radix: 10 })
        );
        assert_eq!(
            parse("102", 2),
            Err(Error::InvalidDigit { digit: '2', index: 2, radix: 2 })
        );
        assert_eq!(
            parse("-1", 16),
            Err(Error::InvalidDigit { digit: '-', index: 0, radix: 16 })
        );
    }

    #[test]
    fn test_parse_decimal() {
        let v = parse("18446744073709551616", 10).unwrap();
        assert_eq!(v.limbs(), &[0, 0, 1]);
        assert!(parse("0000", 10).unwrap().is_zero());
        assert_eq!(parse("007", 10).unwrap(), BigUint::from(7_u32));
    }

    #[test]
    fn test_parse_hex_packs_limbs() {
        let v = parse("DeadBeef0123456789", 16).unwrap();
        assert_eq!(v.limbs(), &[0x23456789, 0xadbeef01, 0xde]);
        assert_eq!(parse("00000000ffffffff", 16).unwrap().limbs(), &[u32::MAX]);
    }

    #[test]
    fn test_parse_binary_and_base4() {
        assert_eq!(parse("1".repeat(33).as_str(), 2).unwrap().limbs(), &[u32::MAX, 1]);
        assert_eq!(parse("33", 4).unwrap(), BigUint::from(15_u32));
    }

    #[test]
    fn test_parse_other_bases() {
        assert_eq!(parse("zz", 36).unwrap(), BigUint::from(1295_u32));
        assert_eq!(parse("777", 8).unwrap(), BigUint::from(511_u32));
        assert_eq!(
            parse("ZZZZZZZZZZZZZZZZ", 36).unwrap(),
            BigUint::from(36_u128.pow(16) - 1)
        );
    }

    #[test]
    fn test_format_zero() {
        for radix in MIN_RADIX..=MAX_RADIX {
            assert_eq!(format(&BigUint::zero(), radix).unwrap(), "0");
        }
    }

    #[test]
    fn test_format_keeps_inner_zeros() {
        let v = parse("1000000000000000000000000000001", 10).unwrap();
        assert_eq!(format(&v, 10).unwrap(), "1000000000000000000000000000001");
        assert_eq!(format(&BigUint::from(u64::MAX), 10).unwrap(), "18446744073709551615");
        assert_eq!(format(&BigUint::from(1_u128 << 100), 2).unwrap().len(), 101);
    }

    #[test]
    fn test_format_rejects_radix() {
        assert_eq!(format(&BigUint::one(), 0), Err(Error::InvalidRadix(0)));
        assert_eq!(format(&BigUint::one(), 40), Err(Error::InvalidRadix(40)));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&BigUint::zero()), "0");
        assert_eq!(to_hex(&BigUint::from_limbs(vec![0x5, 0x0, 0xab])), "ab0000000000000005");
        assert_eq!(format(&BigUint::from(255_u32), 16).unwrap(), "ff");
    }

    #[test]
    fn test_round_trip_every_radix() {
        let v = BigUint::from_limbs(vec![0x89abcdef, 0x01234567, 0, 0xfedcba98, 7]);
        for radix in MIN_RADIX..=MAX_RADIX {
            let text = format(&v, radix).unwrap();
            assert_eq!(parse(&text, radix).unwrap(), v, "radix {radix}");
        }
    }
}
