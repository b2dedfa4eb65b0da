use cipherforge::config::ScoringWeights;
use cipherforge::decoder::decode;
use cipherforge::freq::FrequencyTable;
use cipherforge::mapping::Mapping;
use cipherforge::scorer::{Dictionary, Scorer};
use proptest::prelude::*;

// --- STRATEGIES ---

fn arb_permutation() -> impl Strategy<Value = Mapping> {
    Just((0u8..26).collect::<Vec<u8>>())
        .prop_shuffle()
        .prop_map(|v| {
            let mut table = [0u8; 26];
            table.copy_from_slice(&v);
            Mapping::from_table(table).expect("shuffled table is a permutation")
        })
}

fn arb_swaps() -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0usize..26, 0usize..26), 0..200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_swaps_never_break_bijection(
        mapping in arb_permutation(),
        swaps in arb_swaps()
    ) {
        let mut m = mapping;
        for (a, b) in swaps {
            m.swap(a, b);
        }
        prop_assert!(m.is_complete());

        let mut seen = [false; 26];
        for i in 0..26 {
            let p = m.plain_for(i).unwrap() as usize;
            prop_assert!(!seen[p], "plaintext letter {} assigned twice", p);
            seen[p] = true;
        }
    }

    #[test]
    fn test_decoder_preserves_shape(
        mapping in arb_permutation(),
        text in ".{0,300}"
    ) {
        let decoded = decode(&text, &mapping);
        prop_assert_eq!(decoded.chars().count(), text.chars().count());

        for (a, b) in text.chars().zip(decoded.chars()) {
            if a.is_ascii_alphabetic() {
                prop_assert!(b.is_ascii_alphabetic());
                prop_assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
            } else {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_decode_inverse_roundtrip(
        mapping in arb_permutation(),
        text in "[a-zA-Z ,.!?0-9]{0,200}"
    ) {
        let encoded = decode(&text, &mapping.inverse().unwrap());
        let decoded = decode(&encoded, &mapping);
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn test_scorer_is_total_and_finite(text in ".{0,300}") {
        let scorer = Scorer::new(Dictionary::common_english(), ScoringWeights::default());
        let score = scorer.score(&text);
        prop_assert!(score.is_finite(), "score was not finite: {}", score);
    }

    #[test]
    fn test_analyzer_counts_sum_to_total(text in ".{0,300}") {
        let freq = FrequencyTable::analyze(&text);
        let sum: u32 = (0..26).map(|i| freq.count(i)).sum();
        prop_assert_eq!(sum, freq.total());
    }
}
