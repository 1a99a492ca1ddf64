//! Property tests for filtering, sorting and pagination.

use crate::common::OfferBuilder;
use offerscope::filter::{apply_filters, FilterSelection};
use offerscope::{paginate, sort_offers, MainCategoryMatcher, Offer, SortStrategy};
use proptest::prelude::*;

const CATEGORIES: [&str; 3] = ["Design", "Developer Tools", "Security"];
const SUBCATEGORIES: [&str; 3] = ["IDE", "VPN", "Graphics"];
const TAGS: [&str; 5] = ["Free Trial", "Student Discount", "Open Source", "IDE", "Popular"];

prop_compose! {
    fn offer_strategy()(
        category in 0..CATEGORIES.len(),
        sub in 0..SUBCATEGORIES.len(),
        tags in prop::sample::subsequence(TAGS.to_vec(), 0..=3),
        featured in any::<bool>(),
        name in "[A-Za-z]{1,10}",
    ) -> Offer {
        let mut builder = OfferBuilder::new(0, &name)
            .category(CATEGORIES[category], Some(SUBCATEGORIES[sub]))
            .tags(tags);
        if featured {
            builder = builder.featured();
        }
        builder.build()
    }
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Offer>> {
    prop::collection::vec(offer_strategy(), 0..60).prop_map(|mut offers| {
        for (index, offer) in offers.iter_mut().enumerate() {
            offer.id = index as u64 + 1;
        }
        offers
    })
}

fn category_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["all", "design", "developer-tools", "Security", "missing"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Filtering an already-filtered list by the same selection changes nothing.
    #[test]
    fn prop_filter_idempotent(
        offers in catalog_strategy(),
        category in category_strategy(),
        tags in prop::sample::subsequence(TAGS.to_vec(), 0..=2),
    ) {
        let selection = FilterSelection::all().category(category).tags(tags);
        let once = apply_filters(&offers, &selection, &MainCategoryMatcher);
        let twice = apply_filters(once.iter().copied(), &selection, &MainCategoryMatcher);
        prop_assert_eq!(once, twice);
    }

    /// Adding a tag can only shrink the result set.
    #[test]
    fn prop_tag_filter_monotonic(
        offers in catalog_strategy(),
        category in category_strategy(),
        tags in prop::sample::subsequence(TAGS.to_vec(), 0..=2),
        extra in prop::sample::select(TAGS.to_vec()),
    ) {
        let base = FilterSelection::all().category(category).tags(tags.clone());
        let narrower = FilterSelection::all()
            .category(category)
            .tags(tags.into_iter().chain(std::iter::once(extra)));

        let wide: Vec<u64> = apply_filters(&offers, &base, &MainCategoryMatcher).iter().map(|o| o.id).collect();
        let narrow = apply_filters(&offers, &narrower, &MainCategoryMatcher);
        for offer in narrow {
            prop_assert!(wide.contains(&offer.id));
        }
    }

    /// Sorting is a permutation.
    #[test]
    fn prop_sort_is_permutation(offers in catalog_strategy(), strategy in prop::sample::select(SortStrategy::ALL.to_vec())) {
        let sorted = sort_offers(&offers, strategy);
        let mut ids: Vec<u64> = sorted.iter().map(|o| o.id).collect();
        ids.sort_unstable();
        let expected: Vec<u64> = (1..=offers.len() as u64).collect();
        prop_assert_eq!(ids, expected);
    }

    /// Popular never puts a non-featured offer before a featured one.
    #[test]
    fn prop_popular_groups_featured(offers in catalog_strategy()) {
        let sorted = sort_offers(&offers, SortStrategy::Popular);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].is_featured >= pair[1].is_featured);
        }
    }

    /// Pages are bounded and concatenate back to the list.
    #[test]
    fn prop_paginate_reconstructs(items in prop::collection::vec(any::<u16>(), 0..200), size in 1usize..50) {
        let first = paginate(&items, 1, size);
        prop_assert!(first.total_pages >= 1);

        let mut rebuilt = Vec::new();
        for page in 1..=first.total_pages {
            let chunk = paginate(&items, page, size);
            prop_assert!(chunk.items.len() <= size);
            prop_assert_eq!(chunk.total_pages, first.total_pages);
            rebuilt.extend(chunk.items);
        }
        prop_assert_eq!(rebuilt, items);
    }
}
