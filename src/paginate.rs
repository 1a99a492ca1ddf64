// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Slicing an ordered list into pages.
//!
//! Pages are 1-based. `total_pages` is never zero, so "page 1 of 1" is the
//! empty-result case rather than "page 1 of 0".

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Number of pages needed for `len` items, at least 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Items `[(page - 1) × size, page × size)`, clipped to the list.
///
/// A page past the end is empty. Page 0 is treated as page 1 and a zero page
/// size as 1; neither is worth failing over.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page = page.max(1);

    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        total_pages: total_pages(items.len(), page_size),
    }
}
