//! Transform key

use crate::consts::{DEFAULT_KEY, KEY_SPACE};
use num_traits::PrimInt;

/// A single-byte key applied identically to every channel of every pixel.
///
/// The same key must be used to encode and decode; nothing is derived, stored
/// or checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64", into = "u8"))]
pub struct Key(u8);

impl Key {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Build a key from any integer, reducing it modulo 256.
    ///
    /// The reduction is Euclidean, so the result is always in `0..=255`:
    /// `306 -> 50`, `-1 -> 255`, `256 -> 0`.
    pub fn from_int<T: PrimInt>(value: T) -> Self {
        if let Some(v) = value.to_i128() {
            return Self(v.rem_euclid(KEY_SPACE) as u8);
        }
        // only unsigned values above i128::MAX get here
        Self(value.to_u128().map_or(0, |v| (v % KEY_SPACE as u128) as u8))
    }

    /// Whether `value` lies outside the key range and would be reduced
    pub fn needs_reduction<T: PrimInt>(value: T) -> bool {
        match value.to_i128() {
            Some(v) => !(0..KEY_SPACE).contains(&v),
            None => true,
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Key {
    fn default() -> Self {
        Self(DEFAULT_KEY)
    }
}

impl From<u8> for Key {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}

impl From<Key> for u8 {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        assert_eq!(Key::default().value(), 50);
    }

    #[test]
    fn test_reduction_is_non_negative() {
        assert_eq!(Key::from_int(306i32), Key::new(50));
        assert_eq!(Key::from_int(-1i64), Key::new(255));
        assert_eq!(Key::from_int(256u16), Key::new(0));
        assert_eq!(Key::from_int(-256i32), Key::new(0));
        assert_eq!(Key::from_int(-257i32), Key::new(255));
        assert_eq!(Key::from_int(u128::MAX), Key::new(255));
        assert_eq!(Key::from_int(i64::MIN), Key::new(0));
    }

    #[test]
    fn test_in_range_keys_are_untouched() {
        for v in 0..=255u8 {
            assert_eq!(Key::from_int(v as i32).value(), v);
            assert!(!Key::needs_reduction(v as i32));
        }
        assert!(Key::needs_reduction(256));
        assert!(Key::needs_reduction(-1));
    }
}
