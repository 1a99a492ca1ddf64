// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::OfferSource;
use crate::error::Result;
use crate::types::Offer;
use parking_lot::RwLock;
use std::sync::Arc;

/// Lazily fetched, shared snapshot of an [`OfferSource`].
///
/// The first `load` fetches; later calls hand out the same `Arc` until
/// `invalidate` drops it. A failed fetch caches nothing, so the next `load`
/// tries again.
pub struct OfferCache<S> {
    source: S,
    snapshot: RwLock<Option<Arc<[Offer]>>>,
}

impl<S: OfferSource> OfferCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshot: RwLock::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn load(&self) -> Result<Arc<[Offer]>> {
        if let Some(offers) = self.snapshot.read().as_ref() {
            return Ok(Arc::clone(offers));
        }

        let mut slot = self.snapshot.write();
        // Another caller may have filled it while we waited for the write lock
        if let Some(offers) = slot.as_ref() {
            return Ok(Arc::clone(offers));
        }

        let offers: Arc<[Offer]> = self.source.fetch()?.into();
        tracing::debug!(offers = offers.len(), "offer cache filled");
        *slot = Some(Arc::clone(&offers));
        Ok(offers)
    }

    /// Is a snapshot currently held?
    pub fn is_loaded(&self) -> bool {
        self.snapshot.read().is_some()
    }

    /// Forget the snapshot. Outstanding `Arc`s stay valid.
    pub fn invalidate(&self) {
        if self.snapshot.write().take().is_some() {
            tracing::debug!("offer cache invalidated");
        }
    }
}
