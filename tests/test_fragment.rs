#[cfg(test)]
mod tests {
    use dna_hash::fragment::Fragmenter;

    #[test]
    fn shorter_than_n_yields_once_unchanged() {
        let frags: Vec<_> = Fragmenter::new("AC", 4).collect();
        assert_eq!(frags, vec!["AC"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let frags: Vec<_> = Fragmenter::new("", 4).collect();
        assert!(frags.is_empty());
    }

    #[test]
    fn exact_multiple_splits_evenly() {
        let frags: Vec<_> = Fragmenter::new("ACTGACTG", 4).collect();
        assert_eq!(frags, vec!["ACTG", "ACTG"]);
    }

    #[test]
    fn remainder_yields_shorter_final_slice() {
        let frags: Vec<_> = Fragmenter::new("ACTGACT", 4).collect();
        assert_eq!(frags, vec!["ACTG", "ACT"]);
    }

    #[test]
    fn n_equal_to_length_yields_single_fragment() {
        let frags: Vec<_> = Fragmenter::new("ACTG", 4).collect();
        assert_eq!(frags, vec!["ACTG"]);
    }
}
