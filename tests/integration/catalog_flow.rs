//! Offers on disk → cache → pipeline → URL, the way an app wires it.

use crate::common::{generated_catalog, sample_catalog};
use offerscope::{
    Debouncer, JsonFileSource, OfferCache, OfferSource, Pipeline, Ranker, RankingConfig,
    SynonymDictionary, ViewState,
};
use std::time::{Duration, Instant};

fn write_catalog(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("offers.json");
    std::fs::write(&path, serde_json::to_string(&sample_catalog()).unwrap()).unwrap();
    path
}

#[test]
fn test_file_to_page() {
    let dir = tempfile::tempdir().unwrap();
    let cache = OfferCache::new(JsonFileSource::new(write_catalog(&dir)));
    let offers = cache.load().unwrap();

    let view = ViewState::from_query_string("?category=design&sort=alphabetical&view=list");
    let page = Pipeline::default().run(&offers, &view);

    let names: Vec<&str> = page.items.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Canva Pro", "Figma"]);
    assert_eq!(page.canonical_query(), "category=design&sort=alphabetical&view=list");
}

#[test]
fn test_out_of_range_page_resets_to_first() {
    let offers = generated_catalog(40);
    // 10 design offers, one page at 24 per page
    let view = ViewState::default().with_category("design").with_page(5);
    let page = Pipeline::default().run(&offers, &view);

    assert_eq!(page.total_results, 10);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.view.page, 1);
    assert_eq!(page.canonical_query(), "category=design");
}

#[test]
fn test_navigation_resets_page() {
    let offers = generated_catalog(100);
    let pipeline = Pipeline::default();

    let view = ViewState::default().with_page_size("12".parse().unwrap()).with_page(5);
    let page = pipeline.run(&offers, &view);
    assert_eq!(page.view.page, 5);
    assert_eq!(page.total_pages, 9);

    let view = page.view.with_tag_toggled("Free Trial");
    assert_eq!(view.page, 1);
    let page = pipeline.run(&offers, &view);
    assert!(page.items.iter().all(|o| o.tags.iter().any(|t| t == "Free Trial")));
}

#[test]
fn test_custom_dictionary_and_weights_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let synonyms = dir.path().join("synonyms.json");
    std::fs::write(&synonyms, r#"{"figma": ["prototyping"]}"#).unwrap();
    let weights = dir.path().join("weights.json");
    std::fs::write(&weights, r#"{"threshold": {"long_query_ratio": 0.0}}"#).unwrap();

    let dictionary = SynonymDictionary::from_json_file(&synonyms).unwrap();
    let config = RankingConfig::from_json_file(&weights).unwrap();
    let ranker = Ranker::new(&dictionary, &config);

    let offers = sample_catalog();
    let ranked = ranker.rank(&offers, "figma");
    let ids: Vec<u64> = ranked.iter().map(|o| o.id).collect();
    // Figma by name; nothing else mentions prototyping
    assert_eq!(ids, vec![1]);
    assert_eq!(ranker.explain(&offers[0], "figma").subcategory, 18);
}

#[test]
fn test_debounced_typing_runs_once() {
    let offers = sample_catalog();
    let pipeline = Pipeline::default();
    let start = Instant::now();
    let mut debouncer = Debouncer::default();
    let mut runs = Vec::new();

    for (offset, text) in [(0, "n"), (60, "no"), (120, "not"), (180, "noti")] {
        let now = start + Duration::from_millis(offset);
        if let Some(query) = debouncer.poll(now) {
            runs.push(query);
        }
        debouncer.submit(text.to_string(), now);
    }
    if let Some(query) = debouncer.poll(start + Duration::from_millis(400)) {
        runs.push(query);
    }

    assert_eq!(runs, vec!["noti".to_string()]);
    let page = pipeline.run(&offers, &ViewState::default().with_query(&runs[0]));
    assert_eq!(page.items[0].name, "Notion");
}

#[test]
fn test_source_trait_objects() {
    let sources: Vec<Box<dyn OfferSource>> = vec![
        Box::new(offerscope::StaticSource::new(sample_catalog())),
        Box::new(offerscope::StaticSource::default()),
    ];
    let counts: Vec<usize> = sources.iter().map(|s| s.fetch().unwrap().len()).collect();
    assert_eq!(counts, vec![8, 0]);
}
