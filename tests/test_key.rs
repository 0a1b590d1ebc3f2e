#[cfg(test)]
mod tests {
    use dna_hash::codec::MAX_FRAGMENT_LEN;
    use dna_hash::key::{decode_key, encode_key};
    use dna_hash::DnaHashError;

    #[test]
    fn short_sequence_round_trips_as_single_fragment() {
        let key = encode_key("ACTG").unwrap();
        assert_eq!(key.len(), 1);
        assert_eq!(decode_key(&key), "ACTG");
    }

    #[test]
    fn long_sequence_splits_into_multiple_fragments() {
        let seq = "A".repeat(MAX_FRAGMENT_LEN + 5);
        let key = encode_key(&seq).unwrap();
        assert_eq!(key.len(), 2);
        assert_eq!(decode_key(&key), seq);
    }

    #[test]
    fn empty_sequence_round_trips() {
        let key = encode_key("").unwrap();
        assert_eq!(decode_key(&key), "");
    }

    #[test]
    fn invalid_base_offset_is_absolute_across_fragments() {
        let seq = format!("{}{}", "A".repeat(MAX_FRAGMENT_LEN), "N");
        let err = encode_key(&seq).unwrap_err();
        assert_eq!(err, DnaHashError::InvalidBase(MAX_FRAGMENT_LEN));
    }

    #[test]
    fn key_equality_is_componentwise() {
        let a = encode_key("ACTG").unwrap();
        let b = encode_key("ACTG").unwrap();
        assert_eq!(a, b);
        let c = encode_key("ACTT").unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn very_long_sequence_round_trips() {
        let seq: String = "ACTG".repeat(50); // 200 bases, several fragments
        let key = encode_key(&seq).unwrap();
        assert!(key.len() > 1);
        assert_eq!(decode_key(&key), seq);
    }
}
