// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//! The similarity floor turns into exactly such a threshold, so most name words
//! never reach the DP at all.

/// Edit distance between `a` and `b`, or `None` if it exceeds `max`.
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return `None` immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
///
/// Both are sound: neither rejects a pair whose true distance is within `max`.
/// Lengths are counted in Unicode scalar values, not bytes.
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a.chars().count();
    let b_len = b_chars.len();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != *bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    Some(dp[b_len]).filter(|&distance| distance <= max)
}

/// Unbounded edit distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let bound = a.chars().count().max(b.chars().count());
    // The distance never exceeds the longer length, so this always succeeds
    levenshtein_bounded(a, b, bound).unwrap_or(bound)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    levenshtein_bounded(a, b, max).is_some()
}
