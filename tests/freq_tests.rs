use cipherforge::freq::{letter_index, normalize, FrequencyTable};

#[test]
fn test_counts_match_normalized_letters() {
    let samples = [
        "The quick brown fox jumps over the lazy dog.",
        "af p xpkcaqvnpk pfg, af ipqe qpri!",
        "1234 --- ???",
        "",
        "MiXeD CaSe With\nnewlines\tand tabs",
    ];

    for text in samples {
        let freq = FrequencyTable::analyze(text);
        let letters = normalize(text).chars().filter(|c| c.is_ascii_alphabetic()).count();
        assert_eq!(freq.total() as usize, letters, "total mismatch for {:?}", text);

        let sum: u32 = (0..26).map(|i| freq.count(i)).sum();
        assert_eq!(sum, freq.total(), "count sum mismatch for {:?}", text);
    }
}

#[test]
fn test_case_folding() {
    let freq = FrequencyTable::analyze("AaAa bB");
    assert_eq!(freq.count(0), 4);
    assert_eq!(freq.count(1), 2);
    assert_eq!(freq.total(), 6);
}

#[test]
fn test_absent_letters_are_zero_not_omitted() {
    let freq = FrequencyTable::analyze("aaa");
    for idx in 1..26 {
        assert_eq!(freq.count(idx), 0);
    }
    // Absent letters still participate in the ranking.
    assert_eq!(freq.ranked().len(), 26);
}

#[test]
fn test_empty_input_has_zero_frequencies() {
    let freq = FrequencyTable::analyze("42 + 42 = 84");
    assert_eq!(freq.total(), 0);
    for idx in 0..26 {
        assert_eq!(freq.frequency(idx), 0.0);
    }
}

#[test]
fn test_ranking_is_descending_with_alphabetical_ties() {
    // c appears three times; a, b, z twice each; ties break a < b < z.
    let freq = FrequencyTable::analyze("ccc zz bb aa");
    let ranked = freq.ranked();
    assert_eq!(ranked[0], letter_index('c').unwrap() as u8);
    assert_eq!(ranked[1], letter_index('a').unwrap() as u8);
    assert_eq!(ranked[2], letter_index('b').unwrap() as u8);
    assert_eq!(ranked[3], letter_index('z').unwrap() as u8);
    // The count-0 tail is alphabetical too.
    assert_eq!(ranked[4], letter_index('d').unwrap() as u8);
}

#[test]
fn test_ranking_is_deterministic() {
    let text = "some arbitrary ciphertext with repeated letters";
    let a = FrequencyTable::analyze(text).ranked();
    let b = FrequencyTable::analyze(text).ranked();
    assert_eq!(a, b);
}

#[test]
fn test_normalize_keeps_letters_and_whitespace() {
    assert_eq!(normalize("Ab, c! 9"), "ab c ");
}
