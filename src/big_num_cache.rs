use lazy_static::*;

use crate::big_int::{BigInt, Sign};
use crate::big_num_constants::*;
use crate::big_uint::BigUint;

lazy_static! {
    pub static ref SMALL_CACHE: [BigUint; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigUint::from_limb(n as Limb));

    pub static ref ZERO: BigUint = SMALL_CACHE[0].clone();
    pub static ref ONE:  BigUint = SMALL_CACHE[1].clone();
    pub static ref TWO:  BigUint = SMALL_CACHE[2].clone();
    pub static ref TEN:  BigUint = SMALL_CACHE[10].clone();

    pub static ref INT_ZERO:      BigInt = BigInt::from_parts(Sign::Positive, ZERO.clone());
    pub static ref INT_ONE:       BigInt = BigInt::from_parts(Sign::Positive, ONE.clone());
    pub static ref INT_TWO:       BigInt = BigInt::from_parts(Sign::Positive, TWO.clone());
    pub static ref INT_TEN:       BigInt = BigInt::from_parts(Sign::Positive, TEN.clone());
    pub static ref INT_MINUS_ONE: BigInt = BigInt::from_parts(Sign::Negative, ONE.clone());
}
