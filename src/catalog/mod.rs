// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where offers come from, and keeping them around once fetched.
//!
//! The pipeline only ever sees `&[Offer]`. Fetching is somebody else's job:
//! an [`OfferSource`] produces the list, and an [`OfferCache`] holds on to the
//! last snapshot so repeated renders do not re-read it.

mod cache;
mod source;

pub use cache::OfferCache;
pub use source::{JsonFileSource, OfferSource, StaticSource};
