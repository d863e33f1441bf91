//! Arbitrary Precision Arithmetic \
//! This crate provides:
//! - [`BigUint`]: unsigned integers of unbounded size over 32-bit limbs, with schoolbook,
//!   Karatsuba and FFT multiplication, binary long division and a base 2..=36 codec.
//! - [`BigInt`]: signed integers, a [`Sign`] over a [`BigUint`] magnitude.
//! - [`LimbBuffer`]: the growable limb storage both of them own.
//!
//! Multiplication logs through `tracing` when it leaves the schoolbook path;
//! install a subscriber to see which algorithm ran.

#[macro_use]
mod macros;

mod big_num_constants;
mod big_num_cache;
mod error;
mod limb_buffer;
mod big_uint;
mod multiplication;
mod fft;
mod division;
mod radix;
mod big_int;

pub use big_int::{BigInt, Sign};
pub use big_num_constants::{DoubleLimb, Limb, LIMB_BITS};
pub use big_uint::BigUint;
pub use error::{Error, Result};
pub use limb_buffer::LimbBuffer;
pub use multiplication::MulStrategy;

#[cfg(test)]
mod tests {
    use crate::{BigInt, BigUint};

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "-900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("a << 10 = {}", &a << 10);
        println!("b >> 10 = {}", &b >> 10);

        assert_eq!(&a / &b, BigInt::from(-11));
        assert_eq!(BigUint::from_str_radix("ff", 16).unwrap().to_string(), "255");
    }
}
