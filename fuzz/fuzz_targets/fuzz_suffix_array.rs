#![no_main]

use libfuzzer_sys::fuzz_target;
use strix::index::{SuffixArrayBuilder, SuffixAutomaton};

fuzz_target!(|data: &[u8]| {
    // Cap the input: verify() compares suffixes naively
    let data = &data[..data.len().min(512)];

    let sa = SuffixArrayBuilder::with_defaults().build(data);
    sa.verify();

    let lcp = sa.lcp();
    for (i, &value) in lcp.iter().enumerate() {
        let (a, b) = (sa.as_slice()[i], sa.as_slice()[i + 1]);
        assert!(value <= data.len() - a.max(b));
        if let (Some(x), Some(y)) = (data.get(a + value), data.get(b + value)) {
            assert_ne!(x, y);
        }
    }

    assert_eq!(
        sa.distinct_substrings(),
        SuffixAutomaton::from_text(data).distinct_substrings()
    );
});
