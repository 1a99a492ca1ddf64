// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how offers get their numbers.
//!
//! The key insight is that field dominates everything else. A name match beats
//! a tag match beats a description match, and inside the name, exact beats
//! prefix beats substring beats fuzzy. The constants live in `weights`, the
//! per-offer math in `core`, and sorting plus the relevance cutoff in `ranking`.

mod core;
mod query;
pub mod ranking;
pub mod weights;

pub use self::core::*;
pub use query::PreparedQuery;
pub use ranking::{apply_threshold, compare_scored, Ranker};
pub use weights::{FieldWeights, RankingConfig, RelevanceThreshold};
