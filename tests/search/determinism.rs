//! Same input, same output: byte for byte, regardless of input order.

use crate::common::{generated_catalog, ids, sample_catalog};
use offerscope::{rank_by_relevance, Pipeline, ViewState};

#[test]
fn test_ranking_is_order_independent() {
    let offers = generated_catalog(120);
    let mut shuffled = offers.clone();
    // Deterministic permutation
    shuffled.sort_by_key(|offer| (offer.id * 37) % 101);

    for query in ["offer", "offer 1", "student", "vpn", "ofer"] {
        assert_eq!(
            ids(&rank_by_relevance(&offers, query)),
            ids(&rank_by_relevance(&shuffled, query)),
            "{}",
            query
        );
    }
}

#[test]
fn test_pipeline_runs_are_identical() {
    let offers = sample_catalog();
    let pipeline = Pipeline::default();
    let views = [
        "",
        "q=free",
        "category=design&tags=Free%20Trial",
        "sort=popular&perPage=12&page=2",
        "q=notoin&view=list",
    ];
    for qs in views {
        let view = ViewState::from_query_string(qs);
        assert_eq!(pipeline.run(&offers, &view), pipeline.run(&offers, &view), "{}", qs);
    }
}
