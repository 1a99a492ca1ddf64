// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Faceted filtering: category, subcategory, tags.
//!
//! Three independent predicates, applied before ranking:
//!
//! - **Category**: `"all"` lets everything through. Anything else is decided by
//!   a [`CategoryMatcher`], because only the taxonomy knows which offers belong
//!   to "design" (the crate ships [`MainCategoryMatcher`] as a sensible default).
//! - **Subcategory**: ignored under `"all"`; otherwise case-insensitive equality
//!   with the offer's `category_sub`.
//! - **Tags**: AND semantics. An offer must carry *every* selected tag, so
//!   adding a tag can only shrink the result set.
//!
//! Every predicate is a pure function of the offer, which makes the whole
//! filter idempotent: running it twice changes nothing.

mod facets;

pub use facets::{facets, Facets};

use crate::types::Offer;
use crate::util::slugify;

/// Category sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Is `category` the "no filter" sentinel (or blank)?
pub fn is_all_categories(category: &str) -> bool {
    let category = category.trim();
    category.is_empty() || category.eq_ignore_ascii_case(ALL_CATEGORIES)
}

/// Decides whether an offer belongs to a category id.
///
/// Implemented for plain closures, so tests and callers with their own
/// taxonomy can pass `|offer, category| ...` directly.
pub trait CategoryMatcher {
    fn matches(&self, offer: &Offer, category: &str) -> bool;
}

impl<F> CategoryMatcher for F
where
    F: Fn(&Offer, &str) -> bool,
{
    fn matches(&self, offer: &Offer, category: &str) -> bool {
        self(offer, category)
    }
}

/// Matches a category id against the offer's `category_main`.
///
/// Accepts either the slug ("developer-tools") or the display name
/// ("Developer Tools"), case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainCategoryMatcher;

impl CategoryMatcher for MainCategoryMatcher {
    fn matches(&self, offer: &Offer, category: &str) -> bool {
        let Some(main) = offer.category_main.as_deref() else {
            return false;
        };
        main.trim().eq_ignore_ascii_case(category.trim()) || slugify(main) == slugify(category)
    }
}

/// The active filter selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection<'a> {
    pub category: &'a str,
    pub subcategory: Option<&'a str>,
    pub tags: Vec<&'a str>,
}

impl Default for FilterSelection<'_> {
    fn default() -> Self {
        Self::all()
    }
}

impl<'a> FilterSelection<'a> {
    /// No filtering at all.
    pub fn all() -> Self {
        Self {
            category: ALL_CATEGORIES,
            subcategory: None,
            tags: Vec::new(),
        }
    }

    pub fn category(mut self, category: &'a str) -> Self {
        self.category = category;
        self
    }

    pub fn subcategory(mut self, subcategory: Option<&'a str>) -> Self {
        self.subcategory = subcategory;
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Category and subcategory only; the tag selection is dropped.
    pub fn without_tags(&self) -> Self {
        Self {
            tags: Vec::new(),
            ..self.clone()
        }
    }

    /// Does `offer` pass all three predicates?
    pub fn matches(&self, offer: &Offer, matcher: &dyn CategoryMatcher) -> bool {
        matches_category(offer, self.category, matcher)
            && matches_subcategory(offer, self.category, self.subcategory)
            && matches_tags(offer, &self.tags)
    }
}

pub fn matches_category(offer: &Offer, category: &str, matcher: &dyn CategoryMatcher) -> bool {
    is_all_categories(category) || matcher.matches(offer, category)
}

/// Subcategories only mean something inside a chosen category.
pub fn matches_subcategory(offer: &Offer, category: &str, subcategory: Option<&str>) -> bool {
    if is_all_categories(category) {
        return true;
    }
    match subcategory.map(str::trim).filter(|s| !s.is_empty()) {
        None => true,
        Some(wanted) => offer
            .category_sub
            .as_deref()
            .is_some_and(|sub| sub.trim().to_lowercase() == wanted.to_lowercase()),
    }
}

/// AND semantics: every selected tag must be present (case-insensitive).
pub fn matches_tags(offer: &Offer, tags: &[&str]) -> bool {
    tags.iter().all(|wanted| {
        let wanted = wanted.trim().to_lowercase();
        offer
            .tags
            .iter()
            .any(|tag| tag.trim().to_lowercase() == wanted)
    })
}

/// Keep the offers that pass the selection, in input order.
pub fn apply_filters<'o>(
    offers: impl IntoIterator<Item = &'o Offer>,
    selection: &FilterSelection<'_>,
    matcher: &dyn CategoryMatcher,
) -> Vec<&'o Offer> {
    offers
        .into_iter()
        .filter(|offer| selection.matches(offer, matcher))
        .collect()
}
