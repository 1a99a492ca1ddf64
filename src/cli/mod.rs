// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the offerscope command-line interface.
//!
//! Four subcommands: `search` renders one page of a catalog view, `explain`
//! shows where each offer's score comes from, `facets` lists the filter
//! options for a selection, and `encode` canonicalizes a view query string.
//! Views can be given as a query string (`--view`), as individual flags, or
//! both; flags win.

pub mod display;

use clap::{Args, Parser, Subcommand};
use offerscope::{Layout, PageSize, SortStrategy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "offerscope",
    about = "Relevance ranking and faceted filtering for offer catalogs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one page of results for a view
    Search {
        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        view: ViewArgs,

        #[command(flatten)]
        ranking: RankingArgs,

        /// Print the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show per-field score breakdowns for a query
    Explain {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Search query
        #[arg(short, long)]
        query: String,

        /// Maximum number of offers to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Include offers that score zero
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        ranking: RankingArgs,
    },

    /// List the subcategories and tags available for a selection
    Facets {
        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Decode a view query string and print its canonical form
    Encode {
        /// Query string, with or without the leading '?'
        query_string: String,
    },
}

#[derive(Args)]
pub struct CatalogArgs {
    /// JSON file containing an array of offers
    #[arg(short, long)]
    pub offers: PathBuf,
}

#[derive(Args, Default)]
pub struct ViewArgs {
    /// Starting view as a query string (e.g. "category=design&sort=popular")
    #[arg(long = "view", value_name = "QUERY_STRING")]
    pub view: Option<String>,

    /// Search query
    #[arg(short, long)]
    pub query: Option<String>,

    /// Category id, or "all"
    #[arg(short, long)]
    pub category: Option<String>,

    #[arg(long)]
    pub subcategory: Option<String>,

    /// Required tag (repeatable, AND semantics)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// newest, popular or alphabetical
    #[arg(short, long)]
    pub sort: Option<SortStrategy>,

    /// 1-based page number
    #[arg(short, long)]
    pub page: Option<usize>,

    /// 12, 24, 48 or 96
    #[arg(long)]
    pub per_page: Option<PageSize>,

    /// grid or list
    #[arg(long)]
    pub layout: Option<Layout>,
}

#[derive(Args, Default)]
pub struct RankingArgs {
    /// JSON file overriding ranking weights and thresholds
    #[arg(long)]
    pub weights: Option<PathBuf>,

    /// JSON file replacing the built-in synonym dictionary
    #[arg(long)]
    pub synonyms: Option<PathBuf>,
}
