//! Channel arithmetic
//!
//! Every transform works on one 8-bit sample at a time. There is no
//! interaction between samples, which is what makes each transform exactly
//! invertible.

use pixcrypt_core::consts::MAX_SAMPLE;

/// `(v + key) mod 256`
#[inline(always)]
pub fn shift_forward(v: u8, key: u8) -> u8 {
    v.wrapping_add(key)
}

/// `(v - key) mod 256`, always in `0..=255`
///
/// Wrapping subtraction on `u8` is the mathematical modulo, not a truncating
/// remainder, so `shift_inverse(10, 50) == 216`.
#[inline(always)]
pub fn shift_inverse(v: u8, key: u8) -> u8 {
    v.wrapping_sub(key)
}

/// `v XOR key`. Its own inverse.
#[inline(always)]
pub fn xor(v: u8, key: u8) -> u8 {
    v ^ key
}

/// `255 - v`. Its own inverse.
#[inline(always)]
pub fn invert(v: u8) -> u8 {
    MAX_SAMPLE - v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_examples() {
        assert_eq!(shift_forward(100, 50), 150);
        assert_eq!(shift_forward(250, 50), 44);
        assert_eq!(shift_inverse(44, 50), 250);
        assert_eq!(shift_inverse(10, 50), 216);
    }

    #[test]
    fn test_xor_examples() {
        assert_eq!(xor(100, 128), 228);
        assert_eq!(xor(228, 128), 100);
    }

    #[test]
    fn test_exhaustive_inverse() {
        for key in 0..=255u8 {
            for v in 0..=255u8 {
                assert_eq!(shift_inverse(shift_forward(v, key), key), v);
                assert_eq!(shift_forward(shift_inverse(v, key), key), v);
                assert_eq!(xor(xor(v, key), key), v);
                let expected = ((v as i32 - key as i32).rem_euclid(256)) as u8;
                assert_eq!(shift_inverse(v, key), expected);
            }
            assert_eq!(invert(invert(key)), key);
        }
    }
}
