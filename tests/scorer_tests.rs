use cipherforge::config::ScoringWeights;
use cipherforge::consts::UNKNOWN_MARKER;
use cipherforge::scorer::{Dictionary, Scorer};
use std::io::Cursor;
use std::io::Write;

fn scorer_with(words: &[&str]) -> Scorer {
    Scorer::new(Dictionary::from_words(words.iter().copied()), ScoringWeights::default())
}

#[test]
fn test_basic_ratio() {
    let scorer = scorer_with(&["the", "cat"]);
    // 2 of 4 tokens match.
    assert_eq!(scorer.score("the cat sat down"), 0.5);
    assert_eq!(scorer.match_count("the cat sat down"), 2);
}

#[test]
fn test_whole_token_matching_only() {
    let scorer = scorer_with(&["the"]);
    // "the" must not be credited inside "theater".
    assert_eq!(scorer.score("theater"), 0.0);
    assert_eq!(scorer.score("the theater"), 0.5);
}

#[test]
fn test_punctuation_stripped_and_case_folded() {
    let scorer = scorer_with(&["the", "end"]);
    assert_eq!(scorer.score("\"The\" end!"), 1.0);
}

#[test]
fn test_empty_inputs_return_sentinel() {
    let scorer = scorer_with(&["the"]);
    assert_eq!(scorer.score(""), 0.0);
    assert_eq!(scorer.score("   \t\n"), 0.0);
    // Tokens that strip to nothing are dropped, not failed on.
    assert_eq!(scorer.score("!!! ... ???"), 0.0);
}

#[test]
fn test_unknown_markers_are_penalized() {
    let scorer = scorer_with(&["the"]);
    let clean = "the dog";
    let marked = format!("the do{}", UNKNOWN_MARKER);

    let base = scorer.score(clean);
    let penalized = scorer.score(&marked);
    // One marker costs exactly the configured penalty.
    let expected = base - ScoringWeights::default().unknown_penalty;
    assert!((penalized - expected).abs() < 1e-9);
}

#[test]
fn test_etaoin_bonus_is_off_by_default() {
    let plain = Scorer::new(
        Dictionary::from_words(["zzz"]),
        ScoringWeights::default(),
    );
    // All-etaoin text scores zero when nothing matches and the bonus is off.
    assert_eq!(plain.score("eat a tin onion"), 0.0);
}

#[test]
fn test_etaoin_bonus_applies_when_weighted() {
    let weights = ScoringWeights {
        etaoin_bonus: 0.1,
        ..ScoringWeights::default()
    };
    let scorer = Scorer::new(Dictionary::from_words(["zzz"]), weights);
    // "ae" is 100% etaoin membership; bonus = 0.1 * 1.0.
    assert!((scorer.score("ae") - 0.1).abs() < 1e-9);
}

#[test]
fn test_dictionary_from_reader() {
    let json = r#"["The", "QUICK", "fox"]"#;
    let dict = Dictionary::from_reader(Cursor::new(json)).unwrap();
    assert_eq!(dict.len(), 3);
    assert!(dict.contains("the"));
    assert!(dict.contains("quick"));
    assert!(!dict.contains("dog"));
}

#[test]
fn test_dictionary_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, r#"["alpha", "beta"]"#).unwrap();

    let dict = Dictionary::load_from_file(&path).unwrap();
    assert!(dict.contains("alpha"));
    assert!(dict.contains("beta"));
    assert!(!dict.is_empty());
}

#[test]
fn test_dictionary_rejects_malformed_json() {
    let bad = Dictionary::from_reader(Cursor::new("not json"));
    assert!(bad.is_err());
}

#[test]
fn test_stock_dictionary_has_common_words() {
    let dict = Dictionary::common_english();
    assert!(dict.contains("the"));
    assert!(dict.contains("and"));
    assert!(!dict.contains("xylophone"));
}
