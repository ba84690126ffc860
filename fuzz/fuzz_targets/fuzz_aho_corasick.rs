#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strix::Alphabet;
use strix::index::{AhoCorasickBuilder, MaskMatcher, WildcardMask};

#[derive(Debug, Arbitrary)]
struct Input {
    patterns: Vec<Vec<u8>>,
    mask: Vec<u8>,
    text: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Arbitrary bytes: patterns outside the alphabet are rejected, text
    // bytes outside it reset the automaton
    let mut builder = AhoCorasickBuilder::new(Alphabet::dna());
    let mut accepted = Vec::new();
    for pattern in input.patterns.iter().take(32) {
        if builder.add_pattern(pattern).is_ok() {
            accepted.push(pattern);
        }
    }
    let mut automaton = builder.build();

    for m in automaton.find_all(&input.text) {
        let pattern = accepted[m.pattern];
        assert!(m.end >= pattern.len());
        assert_eq!(&input.text[m.end - pattern.len()..m.end], pattern.as_slice());
    }
    let _ = automaton.has_safe_cycle();

    let mask = WildcardMask::parse(&input.mask, b'?');
    if let Ok(mut matcher) = MaskMatcher::new(&mask, Alphabet::dna()) {
        for start in matcher.find(&input.text) {
            assert!(start + mask.len() <= input.text.len());
        }
    }
});
