//! Literal byte containment, the final word on whether a string matches.

use memchr::memchr_iter;

/// Check whether `needle` occurs contiguously in `haystack`.
///
/// Byte-exact and case-sensitive. An empty needle is contained in every
/// haystack, including an empty one. Candidate start offsets are located with
/// `memchr` on the needle's first byte, restricted to offsets where the whole
/// needle still fits.
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }

    let Some((&first, rest)) = needle.split_first() else {
        return true;
    };

    let last_start = haystack.len() - needle.len();
    memchr_iter(first, &haystack[..=last_start])
        .any(|pos| &haystack[pos + 1..pos + needle.len()] == rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_table() {
        let cases: &[(&str, &str, bool)] = &[
            ("hello world", "hello", true),
            ("hello world", "world", true),
            ("hello world", "ello w", true),
            ("hello world", "o w", true),
            ("hello world", "o", true),
            ("hello world", " ", true),
            ("hello world", "", true),
            ("hello world", "worlds", false),
            ("hello", "hello world", false),
            ("hello", "", true),
            ("", "hello", false),
            ("", "", true),
        ];

        for &(haystack, needle, expected) in cases {
            assert_eq!(
                contains(haystack.as_bytes(), needle.as_bytes()),
                expected,
                "contains({:?}, {:?})",
                haystack,
                needle
            );
        }
    }

    #[test]
    fn test_match_at_last_offset() {
        assert!(contains(b"xxxxabc", b"abc"));
        assert!(!contains(b"xxxxab", b"abc"));
    }

    #[test]
    fn test_first_byte_repeats() {
        assert!(contains(b"aaaab", b"aab"));
        assert!(!contains(b"aaaa", b"aab"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!contains(b"Hello", b"hello"));
        assert!(contains(b"Hello", b"Hello"));
    }

    #[test]
    fn test_multibyte_is_opaque() {
        let haystack = "こんにちは世界".as_bytes();
        assert!(contains(haystack, "世界".as_bytes()));
        // A partial code unit sequence still matches as raw bytes
        assert!(contains(haystack, &"世".as_bytes()[..2]));
    }
}
