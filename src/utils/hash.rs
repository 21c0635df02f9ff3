//! Window hash used to key the n-gram table.

use crate::index::types::{HASH_MULTIPLIER, HASH_SEED, WindowHash};

/// One accumulator step: `acc * 33 ^ byte`, wrapping.
#[inline]
fn step(acc: u32, byte: u8) -> u32 {
    (acc << 5).wrapping_add(acc) ^ byte as u32
}

/// Hash an arbitrary byte string.
///
/// Even-offset bytes feed `h1`, odd-offset bytes feed `h2`, and a trailing odd
/// byte is folded into `h1` only. The two halves are combined as
/// `h1 + h2 * HASH_MULTIPLIER`. This is a filter hash: distinct inputs may
/// collide and every consumer must verify.
#[inline]
pub fn window_hash(bytes: &[u8]) -> WindowHash {
    let mut h1 = HASH_SEED;
    let mut h2 = HASH_SEED;

    let mut pairs = bytes.chunks_exact(2);
    for pair in &mut pairs {
        h1 = step(h1, pair[0]);
        h2 = step(h2, pair[1]);
    }
    if let [last] = pairs.remainder() {
        h1 = step(h1, *last);
    }

    h1.wrapping_add(h2.wrapping_mul(HASH_MULTIPLIER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let expected = HASH_SEED.wrapping_add(HASH_SEED.wrapping_mul(HASH_MULTIPLIER));
        assert_eq!(window_hash(b""), expected);
    }

    #[test]
    fn test_single_byte_only_touches_h1() {
        let h1 = (HASH_SEED << 5).wrapping_add(HASH_SEED) ^ b'a' as u32;
        let expected = h1.wrapping_add(HASH_SEED.wrapping_mul(HASH_MULTIPLIER));
        assert_eq!(window_hash(b"a"), expected);
    }

    #[test]
    fn test_odd_trailing_byte() {
        // "abc": h1 sees 'a' then 'c', h2 sees 'b'
        let h1 = step(step(HASH_SEED, b'a'), b'c');
        let h2 = step(HASH_SEED, b'b');
        assert_eq!(
            window_hash(b"abc"),
            h1.wrapping_add(h2.wrapping_mul(HASH_MULTIPLIER))
        );
    }

    #[test]
    fn test_stable_for_equal_content() {
        let s = "abcdefg";
        assert_eq!(window_hash(&s.as_bytes()[..3]), window_hash(b"abc"));
        assert_eq!(window_hash(&b"abcxyz"[..3]), window_hash(&b"abcdef"[..3]));
    }

    #[test]
    fn test_different_inputs() {
        let s = b"abcdefg";
        assert_ne!(window_hash(&s[..3]), window_hash(&s[..5]));
        assert_ne!(window_hash(b"abcdef"), window_hash(b"abcxyz"));
        assert_ne!(window_hash(b"abc"), window_hash(b"abd"));
    }

    #[test]
    fn test_long_input_wraps() {
        let long = vec![0xffu8; 10_000];
        // Must not panic on overflow
        let _ = window_hash(&long);
    }
}
