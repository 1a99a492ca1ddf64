// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use offerscope::scoring::compare_scored;
use offerscope::{
    CatalogPage, FilterSelection, JsonFileSource, MainCategoryMatcher, Offer, OfferCache, Pipeline,
    Ranker, RankingConfig, Result, ScoredOffer, SynonymDictionary, ViewState,
};
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, CatalogArgs, Cli, Commands, RankingArgs, ViewArgs};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for JSON. `OFFERSCOPE_LOG` overrides.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("OFFERSCOPE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            catalog,
            view,
            ranking,
            json,
        } => run_search(&catalog, &view, &ranking, json),
        Commands::Explain {
            catalog,
            query,
            limit,
            all,
            ranking,
        } => run_explain(&catalog, &query, limit, all, &ranking),
        Commands::Facets { catalog, view } => run_facets(&catalog, &view),
        Commands::Encode { query_string } => {
            println!("{}", ViewState::from_query_string(&query_string));
            Ok(())
        }
    }
}

fn run_search(catalog: &CatalogArgs, args: &ViewArgs, ranking: &RankingArgs, json: bool) -> Result<()> {
    let offers = load_offers(catalog)?;
    let (dictionary, config) = load_ranking(ranking)?;
    let view = build_view(args);

    let pipeline = Pipeline::new(Ranker::new(&dictionary, &config), &MainCategoryMatcher);
    let page = pipeline.run(&offers, &view);

    if json {
        println!("{}", serde_json::to_string_pretty(&PageReport::from(&page))?);
    } else {
        display::print_page(&page);
    }
    Ok(())
}

fn run_explain(
    catalog: &CatalogArgs,
    query: &str,
    limit: usize,
    all: bool,
    ranking: &RankingArgs,
) -> Result<()> {
    let offers = load_offers(catalog)?;
    let (dictionary, config) = load_ranking(ranking)?;
    let ranker = Ranker::new(&dictionary, &config);
    let prepared = ranker.prepare(query);

    if prepared.is_empty() {
        println!("Query is empty after normalization; nothing to explain.");
        return Ok(());
    }
    tracing::info!(primary = prepared.primary(), synonyms = ?prepared.synonyms(), "explaining query");

    let mut scored: Vec<(ScoredOffer<'_>, _)> = offers
        .iter()
        .map(|offer| {
            let breakdown = offerscope::scoring::score_breakdown(offer, &prepared, ranker.config());
            (
                ScoredOffer {
                    offer,
                    score: breakdown.total(),
                },
                breakdown,
            )
        })
        .filter(|(scored, _)| all || scored.score > 0)
        .collect();
    scored.sort_by(|(a, _), (b, _)| compare_scored(a, b));

    let rows: Vec<(&Offer, _)> = scored
        .into_iter()
        .take(limit)
        .map(|(scored, breakdown)| (scored.offer, breakdown))
        .collect();
    display::print_breakdowns(query, &rows);
    Ok(())
}

fn run_facets(catalog: &CatalogArgs, args: &ViewArgs) -> Result<()> {
    let offers = load_offers(catalog)?;
    let view = build_view(args);
    let selection: FilterSelection<'_> = view.selection();
    let facets = offerscope::facets(offers.iter(), &selection, &MainCategoryMatcher);
    display::print_facets(&facets);
    Ok(())
}

fn load_offers(catalog: &CatalogArgs) -> Result<Arc<[Offer]>> {
    OfferCache::new(JsonFileSource::new(&catalog.offers)).load()
}

fn load_ranking(args: &RankingArgs) -> Result<(SynonymDictionary, RankingConfig)> {
    let dictionary = match &args.synonyms {
        Some(path) => SynonymDictionary::from_json_file(path)?,
        None => SynonymDictionary::builtin().clone(),
    };
    let config = match &args.weights {
        Some(path) => RankingConfig::from_json_file(path)?,
        None => RankingConfig::default(),
    };
    Ok((dictionary, config))
}

/// Start from `--view`, then apply individual flags. The page goes last
/// because every filter transition resets it.
fn build_view(args: &ViewArgs) -> ViewState {
    let mut view = args
        .view
        .as_deref()
        .map(ViewState::from_query_string)
        .unwrap_or_default();

    if let Some(category) = &args.category {
        view = view.with_category(category);
    }
    if let Some(subcategory) = &args.subcategory {
        view = view.with_subcategory(Some(subcategory.as_str()));
    }
    for tag in &args.tags {
        if !view.tags.contains(tag.trim()) {
            view = view.with_tag_toggled(tag);
        }
    }
    if let Some(query) = &args.query {
        view = view.with_query(query);
    }
    if let Some(sort) = args.sort {
        view = view.with_sort(sort);
    }
    if let Some(layout) = args.layout {
        view = view.with_layout(layout);
    }
    if let Some(page_size) = args.per_page {
        view = view.with_page_size(page_size);
    }
    if let Some(page) = args.page {
        view = view.with_page(page);
    }
    view
}

#[derive(Serialize)]
struct PageReport<'a> {
    items: &'a [&'a Offer],
    total_results: usize,
    page: usize,
    total_pages: usize,
    subcategories: &'a [String],
    tags: &'a [String],
    canonical_query: String,
}

impl<'a> From<&'a CatalogPage<'a>> for PageReport<'a> {
    fn from(page: &'a CatalogPage<'a>) -> Self {
        Self {
            items: &page.items,
            total_results: page.total_results,
            page: page.view.page,
            total_pages: page.total_pages,
            subcategories: &page.facets.subcategories,
            tags: &page.facets.tags,
            canonical_query: page.canonical_query(),
        }
    }
}
