// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Named orderings for browsing.
//!
//! Only used when there is no active query: when searching, relevance order is
//! the whole point and a named sort would throw it away.
//!
//! Every strategy ends in an id comparison, so the order is total and the same
//! input always produces the same output.

use crate::types::{Offer, SortStrategy};
use crate::util::fold_case;
use std::cmp::Ordering;

/// Compare two offers under `strategy`.
pub fn compare_offers(a: &Offer, b: &Offer, strategy: SortStrategy) -> Ordering {
    match strategy {
        // Ids are assigned monotonically, so higher means more recent
        SortStrategy::Newest => b.id.cmp(&a.id),
        SortStrategy::Popular => b
            .is_featured
            .cmp(&a.is_featured)
            .then_with(|| b.id.cmp(&a.id)),
        SortStrategy::Alphabetical => compare_names(&a.name, &b.name).then_with(|| a.id.cmp(&b.id)),
    }
}

/// Case- and accent-insensitive name order; exact spelling only breaks ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    fold_case(a)
        .cmp(&fold_case(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Order offers by a named strategy.
pub fn sort_offers<'o>(offers: impl IntoIterator<Item = &'o Offer>, strategy: SortStrategy) -> Vec<&'o Offer> {
    let mut sorted: Vec<&'o Offer> = offers.into_iter().collect();
    sorted.sort_by(|a, b| compare_offers(a, b, strategy));
    sorted
}
