// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::error::{read_json, Result};
use crate::types::Offer;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Produces the full offer list.
///
/// Implementations may be slow (disk, network); callers wrap them in an
/// [`OfferCache`](super::OfferCache).
pub trait OfferSource {
    fn fetch(&self) -> Result<Vec<Offer>>;
}

impl<S: OfferSource + ?Sized> OfferSource for &S {
    fn fetch(&self) -> Result<Vec<Offer>> {
        (**self).fetch()
    }
}

/// A JSON array of offers on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OfferSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Offer>> {
        let offers: Vec<Offer> = read_json(&self.path)?;
        warn_on_duplicate_ids(&offers);
        tracing::info!(path = %self.path.display(), offers = offers.len(), "loaded offers");
        Ok(offers)
    }
}

/// Offers already in memory. Mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    offers: Vec<Offer>,
}

impl StaticSource {
    pub fn new(offers: Vec<Offer>) -> Self {
        Self { offers }
    }
}

impl OfferSource for StaticSource {
    fn fetch(&self) -> Result<Vec<Offer>> {
        Ok(self.offers.clone())
    }
}

// Ids are the recency key and the last tie-breaker; duplicates make both ambiguous.
fn warn_on_duplicate_ids(offers: &[Offer]) {
    let mut seen = HashSet::with_capacity(offers.len());
    for offer in offers {
        if !seen.insert(offer.id) {
            tracing::warn!(id = offer.id, name = offer.name.as_str(), "duplicate offer id");
        }
    }
}
