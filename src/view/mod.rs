// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! View state: everything the user controls, as one value.
//!
//! The URL is the only place this state persists. Every navigation decodes a
//! fresh `ViewState`, every interaction produces a new one through the
//! `with_*` transitions, and the result is encoded straight back into the URL.
//! The pipeline reads the decoded value and never touches the URL itself.
//!
//! # Page resets
//!
//! Any change that reshapes the result list (category, subcategory, tags,
//! query, page size) sends the user back to page 1. Staying on page 5 of a
//! list that now has one page is the failure mode this prevents.

mod codec;

pub use codec::{decode, encode, percent_decode, percent_encode};

use crate::filter::{is_all_categories, FilterSelection, ALL_CATEGORIES};
use crate::types::{Layout, PageSize, SortStrategy};
use crate::util::normalize;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The complete set of user-controllable view parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Category id, or `"all"`.
    pub category: String,
    pub subcategory: Option<String>,
    /// AND-combined tag selection.
    pub tags: BTreeSet<String>,
    /// Raw query text as typed.
    pub query: String,
    pub sort: SortStrategy,
    /// 1-based.
    pub page: usize,
    pub page_size: PageSize,
    pub layout: Layout,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            subcategory: None,
            tags: BTreeSet::new(),
            query: String::new(),
            sort: SortStrategy::default(),
            page: 1,
            page_size: PageSize::default(),
            layout: Layout::default(),
        }
    }
}

impl ViewState {
    /// Decode from a query string. Never fails; bad values become defaults.
    pub fn from_query_string(query_string: &str) -> Self {
        decode(query_string)
    }

    /// Canonical query string: default values are omitted.
    pub fn to_query_string(&self) -> String {
        encode(self)
    }

    /// The filter predicates this state selects.
    pub fn selection(&self) -> FilterSelection<'_> {
        FilterSelection::all()
            .category(&self.category)
            .subcategory(self.subcategory.as_deref())
            .tags(self.tags.iter().map(String::as_str))
    }

    /// Is there a query left after normalization?
    pub fn has_query(&self) -> bool {
        !normalize(&self.query).is_empty()
    }

    pub fn has_active_filters(&self) -> bool {
        !is_all_categories(&self.category)
            || self.subcategory.is_some()
            || !self.tags.is_empty()
            || self.has_query()
    }

    /// Drop parameters that cannot affect the result: a query that normalizes
    /// to nothing, and a subcategory while every category is shown.
    pub fn without_inert_params(&self) -> Self {
        let mut view = self.clone();
        if !view.has_query() {
            view.query.clear();
        }
        if is_all_categories(&view.category) {
            view.subcategory = None;
        }
        view
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Switch category. The old subcategory belongs to the old category, so it goes.
    pub fn with_category(&self, category: &str) -> Self {
        let category = category.trim();
        Self {
            category: if is_all_categories(category) {
                ALL_CATEGORIES.to_string()
            } else {
                category.to_string()
            },
            subcategory: None,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_subcategory(&self, subcategory: Option<&str>) -> Self {
        Self {
            subcategory: subcategory
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            page: 1,
            ..self.clone()
        }
    }

    /// Add the tag if absent, remove it if present.
    pub fn with_tag_toggled(&self, tag: &str) -> Self {
        let tag = tag.trim();
        let mut next = Self {
            page: 1,
            ..self.clone()
        };
        if !tag.is_empty() && !next.tags.remove(tag) {
            next.tags.insert(tag.to_string());
        }
        next
    }

    pub fn with_tags_cleared(&self) -> Self {
        Self {
            tags: BTreeSet::new(),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_query(&self, query: &str) -> Self {
        Self {
            query: query.to_string(),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortStrategy) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_layout(&self, layout: Layout) -> Self {
        Self {
            layout,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Change page size. Page indexes mean something else at a new size.
    pub fn with_page_size(&self, page_size: PageSize) -> Self {
        Self {
            page_size,
            page: 1,
            ..self.clone()
        }
    }

    /// Drop every filter and the query; keep sort, page size and layout.
    pub fn cleared_filters(&self) -> Self {
        Self {
            sort: self.sort,
            page_size: self.page_size,
            layout: self.layout,
            ..Self::default()
        }
    }
}

impl FromStr for ViewState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(decode(s))
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}
