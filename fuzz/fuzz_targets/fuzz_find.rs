#![no_main]

use arbitrary::Arbitrary;
use gramdex::Index;
use gramdex::utils::contains;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    corpus: Vec<Vec<u8>>,
    needle: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Indexed results must equal a literal scan (as sets of values)
    let mut expected: Vec<&Vec<u8>> = input
        .corpus
        .iter()
        .filter(|s| contains(s, &input.needle))
        .collect();
    expected.sort();
    expected.dedup();

    let index = Index::new(input.corpus.clone());
    let mut found = index.find(&input.needle);
    found.sort();
    found.dedup();

    assert_eq!(found, expected);
});
