// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `ViewState` ⇄ query string.
//!
//! | param         | values                              | default  |
//! |---------------|-------------------------------------|----------|
//! | `category`    | category id                         | `all`    |
//! | `subcategory` | string                              | none     |
//! | `tags`        | comma-separated list                | none     |
//! | `q`           | free text                           | empty    |
//! | `sort`        | `newest` / `popular` / `alphabetical` | `newest` |
//! | `page`        | positive integer                    | `1`      |
//! | `perPage`     | `12` / `24` / `48` / `96`           | `24`     |
//! | `view`        | `grid` / `list`                     | `grid`   |
//!
//! Two laws hold:
//! - `encode` never writes a parameter whose value is its default, so shared
//!   URLs stay short and a given view has exactly one spelling.
//! - `decode(encode(state)) == state` for every well-formed state.
//!
//! Decoding is forgiving. Unknown keys are ignored; unparseable values fall
//! back to their defaults. A hand-edited URL always renders something.
//!
//! Tags are percent-encoded one by one and joined with a literal comma, so a
//! tag containing a comma survives the trip.

use super::ViewState;
use crate::filter::{is_all_categories, ALL_CATEGORIES};
use crate::types::{Layout, PageSize, SortStrategy};

const KEY_CATEGORY: &str = "category";
const KEY_SUBCATEGORY: &str = "subcategory";
const KEY_TAGS: &str = "tags";
const KEY_QUERY: &str = "q";
const KEY_SORT: &str = "sort";
const KEY_PAGE: &str = "page";
const KEY_PER_PAGE: &str = "perPage";
const KEY_LAYOUT: &str = "view";

/// Canonical query string for `state`, without a leading `?`.
pub fn encode(state: &ViewState) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();

    if !is_all_categories(&state.category) {
        pairs.push((KEY_CATEGORY, percent_encode(&state.category)));
    }
    if let Some(subcategory) = state.subcategory.as_deref() {
        pairs.push((KEY_SUBCATEGORY, percent_encode(subcategory)));
    }
    if !state.tags.is_empty() {
        let tags: Vec<String> = state.tags.iter().map(|tag| percent_encode(tag)).collect();
        pairs.push((KEY_TAGS, tags.join(",")));
    }
    if !state.query.is_empty() {
        pairs.push((KEY_QUERY, percent_encode(&state.query)));
    }
    if state.sort != SortStrategy::default() {
        pairs.push((KEY_SORT, state.sort.as_str().to_string()));
    }
    if state.page > 1 {
        pairs.push((KEY_PAGE, state.page.to_string()));
    }
    if state.page_size != PageSize::default() {
        pairs.push((KEY_PER_PAGE, state.page_size.to_string()));
    }
    if state.layout != Layout::default() {
        pairs.push((KEY_LAYOUT, state.layout.as_str().to_string()));
    }

    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a query string (with or without a leading `?`).
///
/// Later occurrences of a key override earlier ones.
pub fn decode(query_string: &str) -> ViewState {
    let mut state = ViewState::default();
    let query_string = query_string.trim().trim_start_matches('?');

    for pair in query_string.split('&').filter(|pair| !pair.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = percent_decode(raw_key);

        match key.as_str() {
            KEY_CATEGORY => {
                let category = percent_decode(raw_value);
                let category = category.trim();
                state.category = if is_all_categories(category) {
                    ALL_CATEGORIES.to_string()
                } else {
                    category.to_string()
                };
            }
            KEY_SUBCATEGORY => {
                let subcategory = percent_decode(raw_value);
                let subcategory = subcategory.trim();
                state.subcategory = (!subcategory.is_empty()).then(|| subcategory.to_string());
            }
            KEY_TAGS => {
                state.tags = raw_value
                    .split(',')
                    .map(percent_decode)
                    .map(|tag| tag.trim().to_string())
                    .filter(|tag| !tag.is_empty())
                    .collect();
            }
            KEY_QUERY => state.query = percent_decode(raw_value),
            KEY_SORT => {
                state.sort = parse_or_default(KEY_SORT, &percent_decode(raw_value));
            }
            KEY_PAGE => {
                state.page = match percent_decode(raw_value).trim().parse::<usize>() {
                    Ok(page) if page >= 1 => page,
                    _ => {
                        tracing::warn!(value = raw_value, "ignoring invalid page parameter");
                        1
                    }
                };
            }
            KEY_PER_PAGE => {
                state.page_size = parse_or_default(KEY_PER_PAGE, &percent_decode(raw_value));
            }
            KEY_LAYOUT => {
                state.layout = parse_or_default(KEY_LAYOUT, &percent_decode(raw_value));
            }
            _ => tracing::debug!(key = key.as_str(), "ignoring unknown view parameter"),
        }
    }

    state
}

fn parse_or_default<T>(key: &str, value: &str) -> T
where
    T: std::str::FromStr<Err = String> + Default,
{
    value.parse().unwrap_or_else(|reason: String| {
        tracing::warn!(key, %reason, "falling back to default view parameter");
        T::default()
    })
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn percent_encode(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(b as char);
            }
            _ => {
                result.push_str(&format!("%{:02X}", b));
            }
        }
    }
    result
}

/// Decode `%XX` escapes and `+` as space. Malformed escapes pass through as-is.
pub fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' => match (bytes.get(i + 1).and_then(hex_value), bytes.get(i + 2).and_then(hex_value)) {
                (Some(high), Some(low)) => {
                    decoded.push(high << 4 | low);
                    i += 3;
                }
                _ => {
                    decoded.push(b'%');
                    i += 1;
                }
            },
            b => {
                decoded.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(b: &u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
