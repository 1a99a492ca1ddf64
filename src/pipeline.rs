// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One view of the catalog: filter → (rank | sort) → clamp page → paginate.
//!
//! ```text
//!  offers ──▶ filter ──▶ query? ──yes──▶ rank (relevance, threshold)
//!                          │
//!                          no──▶ sort (newest | popular | alphabetical)
//!                                   │
//!                                   ▼
//!                     clamp page ──▶ paginate ──▶ CatalogPage
//! ```
//!
//! With an active query the sort strategy is ignored: relevance decides.
//! The pipeline never mutates the offers it is handed. Everything in a
//! [`CatalogPage`] borrows from the input slice, so a run over a cached
//! snapshot allocates only the page and the facet lists.

use crate::filter::{apply_filters, facets, CategoryMatcher, Facets, MainCategoryMatcher};
use crate::paginate::{paginate, total_pages};
use crate::scoring::Ranker;
use crate::sort::sort_offers;
use crate::types::Offer;
use crate::view::ViewState;

/// The result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'o> {
    /// Offers on the requested page, in display order.
    pub items: Vec<&'o Offer>,
    /// Results across all pages.
    pub total_results: usize,
    pub total_pages: usize,
    pub facets: Facets,
    /// The view actually rendered. Differs from the request when the page
    /// was out of range and reset to 1, or when the request carried inert
    /// parameters (a blank query, a subcategory under `all`).
    pub view: ViewState,
}

impl CatalogPage<'_> {
    /// Query string for the rendered view. Write this back to the URL.
    pub fn canonical_query(&self) -> String {
        self.view.to_query_string()
    }

    /// Did the pipeline have to correct the requested view?
    pub fn was_corrected(&self, requested: &ViewState) -> bool {
        &self.view != requested
    }
}

/// Ranker plus category taxonomy: everything needed to render a view.
pub struct Pipeline<'a> {
    ranker: Ranker<'a>,
    matcher: &'a dyn CategoryMatcher,
}

impl Default for Pipeline<'static> {
    fn default() -> Self {
        Self::new(Ranker::default(), &MainCategoryMatcher)
    }
}

impl<'a> Pipeline<'a> {
    pub fn new(ranker: Ranker<'a>, matcher: &'a dyn CategoryMatcher) -> Self {
        Self { ranker, matcher }
    }

    pub fn ranker(&self) -> &Ranker<'a> {
        &self.ranker
    }

    /// Ordered, unpaginated results for `view`.
    pub fn results<'o>(&self, offers: &'o [Offer], view: &ViewState) -> Vec<&'o Offer> {
        let selection = view.selection();
        let filtered = apply_filters(offers, &selection, self.matcher);

        let prepared = self.ranker.prepare(&view.query);
        match self.ranker.rank_scored(filtered.iter().copied(), &prepared) {
            Some(ranked) => ranked.into_iter().map(|r| r.offer).collect(),
            None => sort_offers(filtered, view.sort),
        }
    }

    /// Render one page of `view`.
    pub fn run<'o>(&self, offers: &'o [Offer], view: &ViewState) -> CatalogPage<'o> {
        let results = self.results(offers, view);
        let page_size = view.page_size.get();
        let pages = total_pages(results.len(), page_size);

        let mut effective = view.without_inert_params();
        if effective.page > pages {
            tracing::warn!(
                requested = view.page,
                total_pages = pages,
                "page out of range, resetting to 1"
            );
            effective.page = 1;
        }

        let page = paginate(&results, effective.page, page_size);
        let facets = facets(offers, &effective.selection(), self.matcher);

        tracing::debug!(
            offers = offers.len(),
            results = results.len(),
            page = effective.page,
            total_pages = page.total_pages,
            ranked = view.has_query(),
            "rendered catalog page"
        );

        CatalogPage {
            items: page.items,
            total_results: results.len(),
            total_pages: page.total_pages,
            facets,
            view: effective,
        }
    }
}
