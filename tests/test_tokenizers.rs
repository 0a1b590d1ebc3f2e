#[cfg(test)]
mod tests {
    use dna_hash::{Canonical, DnaHashError, Fragment, Kmer, Tokenizer};

    fn collect_ok(iter: Box<dyn Iterator<Item = Result<String, DnaHashError>> + '_>) -> Vec<String> {
        iter.map(|r| r.unwrap()).collect()
    }

    #[test]
    fn kmer_with_skip_drops_windows_touching_invalid_bases() {
        let tok = Kmer::new(6, true);
        let tokens = collect_ok(tok.tokenize("CGGTTCAGCANG"));
        assert_eq!(
            tokens,
            vec!["CGGTTC", "GGTTCA", "GTTCAG", "TTCAGC", "TCAGCA"]
        );
        assert_eq!(tok.dropped(), 6);
    }

    #[test]
    fn kmer_dropped_accumulates_across_tokenize_calls() {
        let tok = Kmer::new(6, true);
        collect_ok(tok.tokenize("CGGTTCAGCANG"));
        assert_eq!(tok.dropped(), 6);
        collect_ok(tok.tokenize("CGGTTCAGCANG"));
        assert_eq!(tok.dropped(), 12);
    }

    #[test]
    fn kmer_without_skip_fails_on_invalid_base() {
        let tok = Kmer::new(6, false);
        let results: Vec<_> = tok.tokenize("CGGTTCAGCANG").collect();
        // Five valid windows come out clean before the first window
        // touching 'N' is hit.
        assert!(results[..5].iter().all(|r| r.is_ok()));
        assert!(matches!(results[5], Err(DnaHashError::InvalidBase(_))));
        assert_eq!(results.len(), 6, "iterator stops right after the error");
    }

    #[test]
    fn canonical_form_matches_reference_scenario() {
        let tok = Canonical::new(Box::new(Kmer::new(6, true)));
        let tokens = collect_ok(tok.tokenize("CGGTTCAGCANG"));
        assert_eq!(
            tokens,
            vec!["CGGTTC", "GGTTCA", "CTGAAC", "GCTGAA", "TCAGCA"]
        );
    }

    #[test]
    fn reverse_complement_is_an_involution() {
        for s in ["ACTG", "AAAA", "GATTACA", "CGGTTCAGCA"] {
            let rc = Canonical::reverse_complement(s).unwrap();
            let rc2 = Canonical::reverse_complement(&rc).unwrap();
            assert_eq!(rc2, s);
        }
    }

    #[test]
    fn fragment_with_skip_drops_invalid_tokens() {
        let tok = Fragment::new(4, true);
        let tokens = collect_ok(tok.tokenize("CGGTTCAGCANGTAAT"));
        assert_eq!(tokens, vec!["CGGT", "TCAG", "TAAT"]);
        assert_eq!(tok.dropped(), 1);
    }

    #[test]
    fn fragment_without_skip_fails_on_invalid_token() {
        let tok = Fragment::new(4, false);
        let results: Vec<_> = tok.tokenize("CGGTTCAGCANGTAAT").collect();
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(DnaHashError::InvalidBase(_))));
    }

    #[test]
    fn kmer_tokens_are_lazy_and_can_be_abandoned_early() {
        let tok = Kmer::new(3, false);
        let mut iter = tok.tokenize("ACTGACTGACTG");
        // Only draw two tokens; must not panic or eagerly compute the rest.
        assert_eq!(iter.next().unwrap().unwrap(), "ACT");
        assert_eq!(iter.next().unwrap().unwrap(), "CTG");
    }
}
