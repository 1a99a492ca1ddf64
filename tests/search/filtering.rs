//! Category, subcategory and tag filtering, plus facet derivation.

use crate::common::{ids, sample_catalog};
use offerscope::filter::{self, FilterSelection};
use offerscope::{apply_filters, facets, MainCategoryMatcher, Offer};

#[test]
fn test_category_and_all_tags_required() {
    let offers = sample_catalog();
    let result = apply_filters(&offers, "design", None, &["Free Trial", "Student Discount"]);
    assert_eq!(ids(&result), vec![1]);

    // Either tag alone lets more through: AND, not OR
    let free_trial = apply_filters(&offers, "all", None, &["Free Trial"]);
    let student = apply_filters(&offers, "all", None, &["Student Discount"]);
    assert_eq!(ids(&free_trial), vec![1, 3, 6]);
    assert_eq!(ids(&student), vec![1, 4, 7]);
}

#[test]
fn test_all_ignores_subcategory() {
    let offers = sample_catalog();
    let result = apply_filters(&offers, "all", Some("IDE"), &[]);
    assert_eq!(result.len(), offers.len());
}

#[test]
fn test_category_accepts_slug_or_name() {
    let offers = sample_catalog();
    let by_slug = apply_filters(&offers, "developer-tools", None, &[]);
    let by_name = apply_filters(&offers, "Developer Tools", None, &[]);
    assert_eq!(ids(&by_slug), vec![3, 4]);
    assert_eq!(by_slug, by_name);
}

#[test]
fn test_subcategory_is_case_insensitive() {
    let offers = sample_catalog();
    assert_eq!(ids(&apply_filters(&offers, "developer-tools", Some("ide"), &[])), vec![3]);
    assert!(apply_filters(&offers, "design", Some("IDE"), &[]).is_empty());
}

#[test]
fn test_tags_are_case_insensitive() {
    let offers = sample_catalog();
    assert_eq!(ids(&apply_filters(&offers, "all", None, &["free trial"])), vec![1, 3, 6]);
}

#[test]
fn test_adding_a_tag_never_grows_results() {
    let offers = sample_catalog();
    let mut selected: Vec<&str> = Vec::new();
    let mut previous = apply_filters(&offers, "all", None, &selected).len();
    for tag in ["Student Discount", "Free Trial", "Templates"] {
        selected.push(tag);
        let now = apply_filters(&offers, "all", None, &selected).len();
        assert!(now <= previous);
        previous = now;
    }
    assert_eq!(previous, 0);
}

#[test]
fn test_filter_is_idempotent() {
    let offers = sample_catalog();
    let selection = FilterSelection::all()
        .category("productivity")
        .tags(["Free Trial"]);
    let once = filter::apply_filters(&offers, &selection, &MainCategoryMatcher);
    let twice = filter::apply_filters(once.iter().copied(), &selection, &MainCategoryMatcher);
    assert_eq!(once, twice);
    assert_eq!(ids(&once), vec![6]);
}

#[test]
fn test_injected_category_predicate() {
    let offers = sample_catalog();
    let featured = |offer: &Offer, category: &str| category == "featured" && offer.is_featured;
    let selection = FilterSelection::all().category("featured");
    let result = filter::apply_filters(&offers, &selection, &featured);
    assert_eq!(ids(&result), vec![2, 4, 7]);
}

#[test]
fn test_facets_for_category() {
    let offers = sample_catalog();
    let design = facets(&offers, &FilterSelection::all().category("design"), &MainCategoryMatcher);
    assert_eq!(design.subcategories, vec!["Graphics", "Prototyping"]);
    // "Graphics" is also a subcategory, so it is not offered as a tag
    assert_eq!(design.tags, vec!["Free Trial", "Student Discount", "Templates"]);

    let dev = facets(
        &offers,
        &FilterSelection::all().category("developer-tools"),
        &MainCategoryMatcher,
    );
    assert_eq!(dev.subcategories, vec!["Git", "IDE"]);
    assert_eq!(dev.tags, vec!["Free Trial", "GitHub", "Student Discount"]);
}

#[test]
fn test_facets_narrow_with_subcategory() {
    let offers = sample_catalog();
    let selection = FilterSelection::all()
        .category("design")
        .subcategory(Some("Prototyping"));
    let narrowed = facets(&offers, &selection, &MainCategoryMatcher);
    assert_eq!(narrowed.subcategories, vec!["Graphics", "Prototyping"]);
    assert_eq!(narrowed.tags, vec!["Free Trial", "Student Discount"]);
}

#[test]
fn test_facets_under_all() {
    let offers = sample_catalog();
    let all = facets(&offers, &FilterSelection::all(), &MainCategoryMatcher);
    assert!(all.subcategories.is_empty());
    assert_eq!(
        all.tags,
        vec!["Free Trial", "GitHub", "Privacy", "Student Discount", "Templates"]
    );
}
