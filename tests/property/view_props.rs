//! Property tests for the view-state query-string codec.

use offerscope::view::{decode, encode};
use offerscope::{Layout, PageSize, SortStrategy, ViewState};
use proptest::prelude::*;

prop_compose! {
    fn view_strategy()(
        category in prop::option::of("[a-z][a-z0-9-]{0,12}"),
        subcategory in prop::option::of("[A-Za-z]([A-Za-z&/, ]{0,10}[A-Za-z])?"),
        tags in prop::collection::btree_set("[A-Za-z]([A-Za-z0-9 ,%+&=]{0,10}[A-Za-z0-9])?", 0..4),
        query in "\\PC{0,20}",
        sort in prop::sample::select(SortStrategy::ALL.to_vec()),
        page in 1usize..500,
        page_size in prop::sample::select(PageSize::SUPPORTED.to_vec()),
        layout in prop::sample::select(vec![Layout::Grid, Layout::List]),
    ) -> ViewState {
        let mut view = ViewState::default();
        if let Some(category) = category {
            view = view.with_category(&category);
        }
        view.subcategory = subcategory;
        view.tags = tags;
        view.query = query;
        view.sort = sort;
        view.page = page;
        view.page_size = PageSize::new(page_size).unwrap();
        view.layout = layout;
        view
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// decode(encode(state)) == state.
    #[test]
    fn prop_round_trip(view in view_strategy()) {
        let encoded = encode(&view);
        prop_assert_eq!(decode(&encoded), view);
    }

    /// Encoding is canonical: a decoded-then-re-encoded string is unchanged.
    #[test]
    fn prop_encode_is_canonical(view in view_strategy()) {
        let encoded = encode(&view);
        prop_assert_eq!(encode(&decode(&encoded)), encoded);
    }

    /// No key is ever written with its default value.
    #[test]
    fn prop_defaults_never_emitted(view in view_strategy()) {
        let encoded = encode(&view);
        for pair in encoded.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap();
            prop_assert!(!value.is_empty(), "empty value for {}", key);
            let is_default = matches!(
                (key, value),
                ("category", "all") | ("sort", "newest") | ("page", "1") | ("perPage", "24") | ("view", "grid")
            );
            prop_assert!(!is_default, "default emitted: {}", pair);
        }
    }

    /// Any input decodes to a renderable view.
    #[test]
    fn prop_decode_total(input in "\\PC{0,80}") {
        let view = decode(&input);
        prop_assert!(view.page >= 1);
        prop_assert!(PageSize::SUPPORTED.contains(&view.page_size.get()));
        prop_assert!(!view.category.trim().is_empty());
    }

    /// Filter transitions always land on page 1.
    #[test]
    fn prop_filter_changes_reset_page(view in view_strategy(), tag in "[a-z]{1,6}", text in "[a-z ]{0,10}") {
        prop_assert_eq!(view.with_category("design").page, 1);
        prop_assert_eq!(view.with_subcategory(Some("IDE")).page, 1);
        prop_assert_eq!(view.with_tag_toggled(&tag).page, 1);
        prop_assert_eq!(view.with_query(&text).page, 1);
        prop_assert_eq!(view.with_sort(SortStrategy::Popular).page, view.page);
    }
}
