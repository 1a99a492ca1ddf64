// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Offer;

/// Create an offer with only an id and a name; every other field is empty.
pub fn make_offer(id: u64, name: &str) -> Offer {
    Offer {
        id,
        name: name.to_string(),
        offer: String::new(),
        description: String::new(),
        category_main: None,
        category_sub: None,
        tags: vec![],
        is_featured: false,
    }
}

/// Builder for offers that need more than a name.
#[derive(Debug, Clone)]
pub struct OfferBuilder {
    offer: Offer,
}

impl OfferBuilder {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            offer: make_offer(id, name),
        }
    }

    pub fn offer(mut self, text: &str) -> Self {
        self.offer.offer = text.to_string();
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.offer.description = text.to_string();
        self
    }

    pub fn category(mut self, main: &str, sub: Option<&str>) -> Self {
        self.offer.category_main = Some(main.to_string());
        self.offer.category_sub = sub.map(str::to_string);
        self
    }

    pub fn tags<'t>(mut self, tags: impl IntoIterator<Item = &'t str>) -> Self {
        self.offer.tags = tags.into_iter().map(str::to_string).collect();
        self
    }

    pub fn featured(mut self) -> Self {
        self.offer.is_featured = true;
        self
    }

    pub fn build(self) -> Offer {
        self.offer
    }
}

/// A small catalog with a bit of everything: featured offers, shared tags,
/// a tag spelled like a subcategory, and names that differ only in case.
pub fn sample_catalog() -> Vec<Offer> {
    vec![
        OfferBuilder::new(1, "Figma")
            .offer("Free Professional plan")
            .description("Collaborative interface design tool")
            .category("Design", Some("Prototyping"))
            .tags(["Free Trial", "Student Discount"])
            .build(),
        OfferBuilder::new(2, "Canva Pro")
            .offer("Free for students")
            .description("Graphic design for everyone")
            .category("Design", Some("Graphics"))
            .tags(["Graphics", "Templates"])
            .featured()
            .build(),
        OfferBuilder::new(3, "JetBrains All Products")
            .offer("Free educational licenses")
            .description("Professional IDEs for every language")
            .category("Developer Tools", Some("IDE"))
            .tags(["Free Trial", "IDE"])
            .build(),
        OfferBuilder::new(4, "GitHub Student Developer Pack")
            .offer("Dozens of developer tools free")
            .description("The best developer tools, free for students")
            .category("Developer Tools", Some("Git"))
            .tags(["GitHub", "Student Discount"])
            .featured()
            .build(),
        OfferBuilder::new(5, "NordVPN")
            .offer("Discounted plans")
            .description("Private browsing and online security")
            .category("Security", Some("VPN"))
            .tags(["Privacy"])
            .build(),
        OfferBuilder::new(6, "Microsoft 365")
            .offer("Office apps free for students")
            .description("Word, Excel, PowerPoint and more")
            .category("Productivity", Some("Office"))
            .tags(["Free Trial"])
            .build(),
        OfferBuilder::new(7, "Notion")
            .offer("Plus plan free")
            .description("Notes, docs and tasks in one place")
            .category("Productivity", Some("Notes"))
            .tags(["Student Discount"])
            .featured()
            .build(),
        OfferBuilder::new(8, "notion calendar")
            .offer("Free")
            .description("Calendar that works with your notes")
            .category("Productivity", Some("Calendar"))
            .build(),
    ]
}
