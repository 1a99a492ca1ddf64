// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the scorer, the expander and the filters.
//!
//! Text normalization lives here so the query and every field it is compared
//! against go through exactly the same canonicalization.

pub mod normalize;

pub use normalize::{contains_word, fold_case, is_word_char, normalize, slugify};
