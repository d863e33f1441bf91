/// One machine word of a magnitude.
pub type Limb = u32;

/// Intermediate wide enough to hold `Limb * Limb + Limb + Limb` without overflow.
pub type DoubleLimb = u64;

pub const LIMB_BITS: usize = Limb::BITS as usize;

/// Hex characters per limb, used by the base-16 fast paths.
pub const HEX_DIGITS_PER_LIMB: usize = LIMB_BITS / 4;

pub const INITIAL_LIMB_CAPACITY: usize = 2;

pub const LIMB_GROWTH: usize = 2;

pub const DIGITS: [char; 36] = [
    '0' , '1' , '2' , '3' , '4' , '5' ,
    '6' , '7' , '8' , '9' , 'a' , 'b' ,
    'c' , 'd' , 'e' , 'f' , 'g' , 'h' ,
    'i' , 'j' , 'k' , 'l' , 'm' , 'n' ,
    'o' , 'p' , 'q' , 'r' , 's' , 't' ,
    'u' , 'v' , 'w' , 'x' , 'y' , 'z'
];

pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = 36;

/// Largest `k` with `radix^k < 2^31`, so a group of `k` digits always fits in a limb.
pub const DIGITS_PER_INT: [usize; 37] = [
    0, 0,
    30, 19, 15, 13, 11, 11, 10, 9, 9, 8, 8, 8, 8, 7, 7, 7, 7, 7, 7, 7,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 5
];

/// `radix^DIGITS_PER_INT[radix]`
pub const INT_RADIX: [Limb; 37] = [
    0, 0,
    0x40000000, 0x4546b3db, 0x40000000, 0x48c27395, 0x159fd800,
    0x75db9c97, 0x40000000, 0x17179149, 0x3b9aca00, 0xcc6db61,
    0x19a10000, 0x309f1021, 0x57f6c100, 0xa2f1b6f,  0x10000000,
    0x18754571, 0x247dbc80, 0x3547667b, 0x4c4b4000, 0x6b5a6e1d,
    0x6c20a40,  0x8d2d931,  0xb640000,  0xe8d4a51,  0x1269ae40,
    0x17179149, 0x1cb91000, 0x23744899, 0x2b73a840, 0x34e63b41,
    0x40000000, 0x4cfa3cc1, 0x5c13d840, 0x6d91b519, 0x39aa400
];

/// Values `0..=MAX_CONSTANT` are served from the small-value cache.
pub const MAX_CONSTANT: usize = 16;

/// Below this many limbs (in either operand) multiplication stays schoolbook.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// From this many limbs (in both operands) multiplication moves to FFT convolution,
/// as long as an FFT plan exists for the product length.
pub const FFT_THRESHOLD: usize = 2048;

/// Largest transform that may carry 16-bit coefficients.
///
/// A product coefficient is a sum of at most `len / 2` terms below `2^32`,
/// i.e. below `2^47` at this size. Near-maximal digits measure a round-off
/// of about 0.07 here and pass 0.25 at four times this length.
pub const FFT_MAX_LEN_16: usize = 1 << 16;

/// Largest transform that may carry 8-bit coefficients (coefficients stay below `2^37`).
pub const FFT_MAX_LEN_8: usize = 1 << 22;

/// A convolution whose outputs stray this far from an integer is rejected.
pub const FFT_ROUNDING_TOLERANCE: f64 = 0.25;
