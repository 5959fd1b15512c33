#[cfg(test)]
pub mod tests {
    use crate::compact_word::{CompactWord, WORD_CAPACITY};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(word: &CompactWord) -> u64 {
        let mut hasher = DefaultHasher::new();
        word.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case::empty(b"", "")]
    #[case::single(b"a", "a")]
    #[case::short(b"cat", "cat")]
    #[case::exact_capacity(b"absolute", "absolute")]
    #[case::truncated(b"internationalization", "internat")]
    #[case::nine_chars(b"abcdefghi", "abcdefgh")]
    fn test_from_chars_display(#[case] chars: &[u8], #[case] expected: &str) {
        let word = CompactWord::from_chars(chars);
        assert_eq!(word.to_string(), expected);
        assert_eq!(word.len(), expected.len());
    }

    #[test]
    fn test_empty_word() {
        assert!(CompactWord::from_chars(b"").is_empty());
        assert!(CompactWord::EMPTY.is_empty());
        assert!(CompactWord::default().is_empty());
        assert_eq!(CompactWord::from_chars(b""), CompactWord::EMPTY);
        assert!(!CompactWord::from_chars(b"a").is_empty());
    }

    #[test]
    fn test_padding_is_zero() {
        let word = CompactWord::from_chars(b"the");
        assert_eq!(word.as_bytes(), &[b't', b'h', b'e', 0, 0, 0, 0, 0]);
        assert_eq!(word.chars(), b"the");
    }

    #[test]
    fn test_zero_bytes_only_is_empty() {
        assert!(CompactWord::from_chars(&[0, 0, 0]).is_empty());
    }

    #[test]
    fn test_display_stops_at_first_zero() {
        let word = CompactWord::from_bytes([b'a', b'b', 0, b'c', 0, 0, 0, 0]);
        assert_eq!(word.to_string(), "ab");
        // Equality still sees every byte.
        assert_ne!(word, CompactWord::from_chars(b"ab"));
    }

    #[test]
    fn test_shared_prefix_collides() {
        let a = CompactWord::from_chars(b"internationalization");
        let b = CompactWord::from_chars(b"internationally");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[rstest]
    #[case::prefix_first(b"ab", b"abc")]
    #[case::alphabetical(b"apple", b"banana")]
    #[case::last_byte(b"zzzzzzza", b"zzzzzzzb")]
    #[case::short_before_long(b"z", b"zz")]
    fn test_ordering(#[case] lower: &[u8], #[case] higher: &[u8]) {
        let lower = CompactWord::from_chars(lower);
        let higher = CompactWord::from_chars(higher);
        assert!(lower < higher);
        assert!(higher > lower);
    }

    #[test]
    fn test_as_u64_is_big_endian() {
        let word = CompactWord::from_chars(b"a");
        assert_eq!(word.as_u64(), (b'a' as u64) << 56);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(CompactWord::from("mat"), CompactWord::from_chars(b"mat"));
    }

    fn lowercase_word() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(b'a'..=b'z', 0..=2 * WORD_CAPACITY)
    }

    proptest! {
        #[test]
        fn prop_ordering_matches_truncated_bytes(a in lowercase_word(), b in lowercase_word()) {
            let wa = CompactWord::from_chars(&a);
            let wb = CompactWord::from_chars(&b);
            let ta = &a[..a.len().min(WORD_CAPACITY)];
            let tb = &b[..b.len().min(WORD_CAPACITY)];
            prop_assert_eq!(wa.cmp(&wb), ta.cmp(tb));
            prop_assert_eq!(wa == wb, ta == tb);
        }

        #[test]
        fn prop_equal_words_hash_equal(a in lowercase_word()) {
            let mut b = a.clone();
            b.extend_from_slice(b"tail");
            let wa = CompactWord::from_chars(&a);
            let wb = CompactWord::from_chars(&b[..a.len()]);
            prop_assert_eq!(hash_of(&wa), hash_of(&wb));
        }
    }
}
