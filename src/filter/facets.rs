// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet options: which subcategories and tags are worth offering right now.
//!
//! Options come from the offers still in play, so the controls never suggest
//! a filter that would produce nothing. Subcategories are listed from the
//! category-filtered set (and not at all under "all"); tags from the
//! category + subcategory set. A tag spelled like a subcategory is dropped so
//! the same word never shows up as two different controls.

use super::{is_all_categories, matches_category, matches_subcategory, CategoryMatcher, FilterSelection};
use crate::types::Offer;
use std::collections::HashSet;

/// Filter options available for the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub subcategories: Vec<String>,
    pub tags: Vec<String>,
}

/// Derive facet options for `selection`. The tag selection itself is ignored.
pub fn facets<'o>(
    offers: impl IntoIterator<Item = &'o Offer>,
    selection: &FilterSelection<'_>,
    matcher: &dyn CategoryMatcher,
) -> Facets {
    let in_category: Vec<&Offer> = offers
        .into_iter()
        .filter(|offer| matches_category(offer, selection.category, matcher))
        .collect();

    let category_subs: Vec<&str> = in_category
        .iter()
        .filter_map(|offer| offer.category_sub.as_deref())
        .collect();

    let subcategories = if is_all_categories(selection.category) {
        Vec::new()
    } else {
        unique_sorted(category_subs.iter().copied())
    };

    let sub_names: HashSet<String> = category_subs
        .iter()
        .map(|sub| sub.trim().to_lowercase())
        .collect();

    let tags = unique_sorted(
        in_category
            .iter()
            .filter(|offer| matches_subcategory(offer, selection.category, selection.subcategory))
            .flat_map(|offer| offer.tags.iter().map(String::as_str))
            .filter(|tag| !sub_names.contains(&tag.trim().to_lowercase())),
    );

    Facets {
        subcategories,
        tags,
    }
}

/// Deduplicate case-insensitively (first spelling wins), sort case-insensitively.
fn unique_sorted<'s>(values: impl Iterator<Item = &'s str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = values
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(value.to_lowercase()))
        .map(str::to_string)
        .collect();

    unique.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    unique
}
