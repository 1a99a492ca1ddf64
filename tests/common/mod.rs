//! Shared test utilities and fixtures.

#![allow(dead_code)]

use offerscope::Offer;

// Re-export canonical test utilities from offerscope::testing
pub use offerscope::testing::{make_offer, sample_catalog, OfferBuilder};

/// Ids of a result list, in order.
pub fn ids(offers: &[&Offer]) -> Vec<u64> {
    offers.iter().map(|offer| offer.id).collect()
}

/// A catalog of `n` offers with rotating categories, subcategories and tags.
pub fn generated_catalog(n: u64) -> Vec<Offer> {
    const CATEGORIES: [(&str, &str); 4] = [
        ("Design", "Prototyping"),
        ("Developer Tools", "IDE"),
        ("Productivity", "Notes"),
        ("Security", "VPN"),
    ];
    const TAGS: [&str; 4] = ["Free Trial", "Student Discount", "Open Source", "Popular"];

    (1..=n)
        .map(|id| {
            let (main, sub) = CATEGORIES[(id % 4) as usize];
            OfferBuilder::new(id, &format!("Offer {}", id))
                .category(main, Some(sub))
                .tags([TAGS[(id % 4) as usize], TAGS[((id / 4) % 4) as usize]])
                .build()
        })
        .collect()
}
