// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the view query-string codec.
//!
//! URLs get pasted, truncated, hand-edited and double-encoded. Decoding must
//! never panic, and whatever it produces must survive a round trip exactly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use offerscope::ViewState;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);

    let view = ViewState::from_query_string(&raw);

    // INVARIANT: decoded state is always valid
    assert!(view.page >= 1, "page decoded below 1 from {:?}", raw);
    assert!(!view.category.is_empty(), "empty category from {:?}", raw);

    // INVARIANT: encode is canonical and decode inverts it
    let encoded = view.to_query_string();
    let reparsed = ViewState::from_query_string(&encoded);
    assert_eq!(view, reparsed, "round trip changed state for {:?}", encoded);
    assert_eq!(encoded, reparsed.to_query_string(), "encoding is not canonical");
});
