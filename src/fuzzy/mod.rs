// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! A bounded Levenshtein for the raw distance, and a similarity on top of it
//! that collapses anything too far away to zero. "mircosoft" is a typo for
//! "microsoft"; "figma" is not a typo for "notion".

mod levenshtein;
mod similarity;

pub use levenshtein::*;
pub use similarity::*;
