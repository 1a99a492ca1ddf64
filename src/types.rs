// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog view.
//!
//! `Offer` is the record everything else reads. It is never mutated here: the
//! pipeline hands back borrowed subsequences of whatever slice it was given.
//! The small enums (`SortStrategy`, `Layout`, `PageSize`) are the closed
//! vocabularies that appear in the view-state query string.
//!
//! # Invariants
//!
//! - **Offer**: `id` is unique within a catalog and never reused. It is the
//!   recency key for `newest` and the last tie-breaker everywhere else.
//!
//! - **PageSize**: always one of [`PageSize::SUPPORTED`]. Construction through
//!   [`PageSize::new`] is the only way in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// OFFER
// =============================================================================

/// A single catalog entry.
///
/// Field names follow the JSON the external loader produces. Only `id` and
/// `name` are required; everything else defaults when missing.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Offer {
    pub id: u64,
    pub name: String,
    /// Short promotional text ("3 months free", "50% off").
    #[serde(default)]
    pub offer: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_main: Option<String>,
    #[serde(default)]
    pub category_sub: Option<String>,
    /// Up to three tags; earlier tags matter more to the editors.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// An offer paired with its relevance score for one query.
///
/// Never stored. Recomputed every time the query changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredOffer<'a> {
    pub offer: &'a Offer,
    pub score: u32,
}

// =============================================================================
// SORT STRATEGY
// =============================================================================

/// Named orderings for browsing without a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortStrategy {
    /// Highest id first.
    #[default]
    Newest,
    /// Featured first, then newest within each group.
    Popular,
    /// Case-insensitive by name.
    Alphabetical,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 3] = [
        SortStrategy::Newest,
        SortStrategy::Popular,
        SortStrategy::Alphabetical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortStrategy::Newest => "newest",
            SortStrategy::Popular => "popular",
            SortStrategy::Alphabetical => "alphabetical",
        }
    }
}

impl FromStr for SortStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sort '{}' (expected newest, popular or alphabetical)", s))
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

/// How the page is rendered. Carried through the URL, ignored by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Grid => "grid",
            Layout::List => "list",
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Layout::Grid),
            "list" => Ok(Layout::List),
            other => Err(format!("unknown view '{}' (expected grid or list)", other)),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// PAGE SIZE
// =============================================================================

/// Items per page. Restricted to the sizes the page-size picker offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct PageSize(usize);

impl PageSize {
    pub const SUPPORTED: [usize; 4] = [12, 24, 48, 96];
    pub const DEFAULT: PageSize = PageSize(24);

    /// Accepts only supported sizes.
    pub fn new(size: usize) -> Option<Self> {
        Self::SUPPORTED.contains(&size).then_some(PageSize(size))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::DEFAULT
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(PageSize::new)
            .ok_or_else(|| format!("unsupported page size '{}' (expected 12, 24, 48 or 96)", s))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
