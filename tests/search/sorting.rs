//! Named sort strategies and pagination.

use crate::common::{generated_catalog, ids, make_offer, sample_catalog};
use offerscope::{paginate, sort_offers, Offer, SortStrategy};

#[test]
fn test_newest() {
    let offers = sample_catalog();
    assert_eq!(
        ids(&sort_offers(&offers, SortStrategy::Newest)),
        vec![8, 7, 6, 5, 4, 3, 2, 1]
    );
}

#[test]
fn test_popular_featured_first_then_newest() {
    let offers = sample_catalog();
    assert_eq!(
        ids(&sort_offers(&offers, SortStrategy::Popular)),
        vec![7, 4, 2, 8, 6, 5, 3, 1]
    );
}

#[test]
fn test_alphabetical_ignores_case() {
    let offers = sample_catalog();
    assert_eq!(
        ids(&sort_offers(&offers, SortStrategy::Alphabetical)),
        vec![2, 1, 4, 3, 6, 5, 7, 8]
    );
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_alphabetical_folds_accents() {
    let offers = vec![
        make_offer(1, "Zoom"),
        make_offer(2, "Évernote"),
        make_offer(3, "Figma"),
        make_offer(4, "evernote"),
    ];
    let names: Vec<&str> = sort_offers(&offers, SortStrategy::Alphabetical)
        .iter()
        .map(|offer| offer.name.as_str())
        .collect();
    assert_eq!(names, vec!["evernote", "Évernote", "Figma", "Zoom"]);
}

#[test]
fn test_sort_is_independent_of_input_order() {
    let offers = sample_catalog();
    let mut reversed = offers.clone();
    reversed.reverse();
    for strategy in SortStrategy::ALL {
        assert_eq!(
            ids(&sort_offers(&offers, strategy)),
            ids(&sort_offers(&reversed, strategy)),
            "{}",
            strategy
        );
    }
}

#[test]
fn test_pages_cover_the_list() {
    let offers = generated_catalog(50);
    let sorted = sort_offers(&offers, SortStrategy::Newest);

    let first = paginate(&sorted, 1, 24);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 24);
    assert_eq!(first.items[0].id, 50);

    let last = paginate(&sorted, 3, 24);
    assert_eq!(ids(&last.items), vec![2, 1]);

    assert!(paginate(&sorted, 4, 24).items.is_empty());
}

#[test]
fn test_empty_list_is_one_page() {
    let page = paginate(&[] as &[Offer], 1, 24);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 1);
}
