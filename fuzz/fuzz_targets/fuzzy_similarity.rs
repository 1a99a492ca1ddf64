// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and similarity.
//!
//! The bounded distance must agree with the full one whenever it answers, and
//! similarity must stay inside its documented range. If either lies, typo
//! tolerance quietly turns into noise.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use offerscope::fuzzy::{levenshtein, levenshtein_bounded, similarity};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    term: String,
    candidate: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let term: String = input.term.chars().take(50).collect();
    let candidate: String = input.candidate.chars().take(100).collect();
    let max = usize::from(input.max % 16);

    let full = levenshtein(&term, &candidate);

    // INVARIANT: symmetric
    assert_eq!(full, levenshtein(&candidate, &term));

    // INVARIANT: bounded agrees with full within the bound, and says None beyond it
    match levenshtein_bounded(&term, &candidate, max) {
        Some(d) => assert_eq!(d, full),
        None => assert!(full > max, "bounded gave up at {} but distance is {}", max, full),
    }

    // INVARIANT: similarity is 0, or in (min, 1]
    let sim = similarity(&term, &candidate);
    assert!(sim == 0.0 || (sim > 0.7 && sim <= 1.0), "similarity {} out of range", sim);
    if term == candidate {
        assert_eq!(sim, 1.0);
    }
});
