// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance ranking, faceted filtering and URL view state for offer catalogs.
//!
//! A catalog is a few hundred to a few thousand offers. Users narrow it with
//! a category, a subcategory and tags, optionally type a query, and expect
//! the best match on top even when they misspell it. Everything the user
//! controls lives in the URL, so a view can be bookmarked and shared.
//!
//! # Architecture
//!
//! ```text
//!                  ┌──────────────┐
//!   ?category=…  ─▶│   view.rs    │─── ViewState ───┐
//!                  │ (URL codec)  │                 │
//!                  └──────────────┘                 ▼
//! ┌─────────────┐  ┌──────────────┐  ┌──────────────────────────┐
//! │ catalog.rs  │─▶│  filter.rs   │─▶│ scoring/ (query active)  │──┐
//! │ (sources,   │  │ (category,   │  │ normalize → synonyms →   │  │
//! │  cache)     │  │  sub, tags)  │  │ fuzzy → fields → rank    │  │
//! └─────────────┘  └──────────────┘  ├──────────────────────────┤  ├─▶ paginate.rs
//!                                    │ sort.rs (no query)       │──┘
//!                                    └──────────────────────────┘
//! ```
//!
//! [`Pipeline`] wires these together. Each stage is also usable on its own.
//!
//! # Usage
//!
//! ```
//! use offerscope::{Offer, Pipeline, ViewState};
//!
//! let offers: Vec<Offer> = serde_json::from_str(
//!     r#"[{"id": 1, "name": "Figma", "category_main": "Design"},
//!         {"id": 2, "name": "Notion", "category_main": "Productivity"}]"#,
//! ).unwrap();
//!
//! let view = ViewState::from_query_string("?q=fgma");
//! let page = Pipeline::default().run(&offers, &view);
//!
//! assert_eq!(page.items[0].name, "Figma");
//! assert_eq!(page.canonical_query(), "q=fgma");
//! ```

pub mod catalog;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod paginate;
pub mod pipeline;
pub mod scoring;
pub mod sort;
pub mod synonyms;
pub mod types;
pub mod util;
pub mod view;

pub mod testing;

pub use catalog::{JsonFileSource, OfferCache, OfferSource, StaticSource};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use error::{Error, Result};
pub use filter::{
    facets, CategoryMatcher, Facets, FilterSelection, MainCategoryMatcher, ALL_CATEGORIES,
};
pub use fuzzy::FuzzyMatcher;
pub use paginate::Page;
pub use pipeline::{CatalogPage, Pipeline};
pub use scoring::{PreparedQuery, Ranker, RankingConfig, ScoreBreakdown};
pub use synonyms::SynonymDictionary;
pub use types::{Layout, Offer, PageSize, ScoredOffer, SortStrategy};
pub use util::normalize;
pub use view::ViewState;

/// Relevance of `offer` for `query` with the built-in dictionary and weights.
///
/// Zero means "not a match". An empty query scores zero for everything.
pub fn score(offer: &Offer, query: &str) -> u32 {
    Ranker::default().score(offer, query)
}

/// Rank `offers` for `query` with the built-in dictionary and weights.
///
/// Non-matches and the low-scoring tail are dropped. An empty query returns
/// the input unchanged.
pub fn rank_by_relevance<'o>(offers: &'o [Offer], query: &str) -> Vec<&'o Offer> {
    Ranker::default().rank(offers, query)
}

/// Filter with the default [`MainCategoryMatcher`].
pub fn apply_filters<'o>(
    offers: &'o [Offer],
    category: &str,
    subcategory: Option<&str>,
    tags: &[&str],
) -> Vec<&'o Offer> {
    let selection = FilterSelection::all()
        .category(category)
        .subcategory(subcategory)
        .tags(tags.iter().copied());
    filter::apply_filters(offers, &selection, &MainCategoryMatcher)
}

/// Order `offers` by a named strategy. Stable and deterministic.
pub fn sort_offers(offers: &[Offer], strategy: SortStrategy) -> Vec<&Offer> {
    sort::sort_offers(offers, strategy)
}

/// One page of `items` plus the total page count (at least 1).
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    paginate::paginate(items, page, page_size)
}
