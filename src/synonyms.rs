// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synonym expansion: one query, several ways of saying it.
//!
//! Students type "ide" and mean "code editor", type "vpn" and mean "privacy".
//! The dictionary maps a canonical term to related terms, and the expander
//! turns a normalized query into `[primary, synonym, synonym, ...]`.
//!
//! Expansion is deliberately conservative:
//! - A query that equals a key expands to that key's synonyms.
//! - Any key that appears in the query *as a whole word* also expands.
//!   "email" must not pull in the synonyms of "ai".
//!
//! Synonym hits are worth less than primary-term hits in the scorer, so a
//! generous dictionary widens recall without reordering the obvious matches.

use crate::error::{read_json, Result};
use crate::util::{contains_word, normalize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::LazyLock;

/// Terms shipped with the crate, tuned for student-perk catalogs.
const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    ("ai", &["artificial intelligence", "machine learning", "chatbot", "llm"]),
    ("cloud", &["hosting", "server", "deployment", "infrastructure"]),
    ("code", &["programming", "developer", "coding"]),
    ("design", &["graphics", "ui", "ux", "prototyping"]),
    ("domain", &["dns", "website", "hosting"]),
    ("editor", &["ide", "code editor"]),
    ("email", &["mail", "newsletter", "inbox"]),
    ("free", &["no cost", "complimentary", "free trial"]),
    ("github", &["git", "developer tools", "student pack"]),
    ("hosting", &["cloud", "server", "deployment"]),
    ("ide", &["editor", "code editor", "developer tools"]),
    ("learning", &["course", "education", "tutorial"]),
    ("music", &["streaming", "audio", "spotify"]),
    ("notes", &["note taking", "productivity", "notion"]),
    ("office", &["productivity", "documents", "spreadsheet"]),
    ("password", &["password manager", "security", "vault"]),
    ("photo", &["image", "photography", "editing"]),
    ("productivity", &["notes", "tasks", "organization"]),
    ("security", &["privacy", "vpn", "password manager"]),
    ("storage", &["cloud storage", "backup", "drive"]),
    ("student", &["education", "academic", "university"]),
    ("video", &["streaming", "editing", "film"]),
    ("vpn", &["privacy", "security", "proxy"]),
    ("web", &["website", "hosting", "frontend"]),
];

static BUILTIN: LazyLock<SynonymDictionary> = LazyLock::new(|| {
    SynonymDictionary::from_entries(
        BUILTIN_SYNONYMS
            .iter()
            .map(|(term, related)| (*term, related.iter().copied())),
    )
});

/// Canonical lowercase term → related lowercase terms.
///
/// Immutable once built. Keys iterate in sorted order so expansion output is
/// deterministic regardless of how the dictionary was loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymDictionary {
    entries: BTreeMap<String, Vec<String>>,
}

impl SynonymDictionary {
    /// The dictionary shipped with the crate.
    pub fn builtin() -> &'static SynonymDictionary {
        &BUILTIN
    }

    /// Build from `(term, related terms)` pairs.
    ///
    /// Keys and values are normalized. Empty keys are skipped, a term is never
    /// its own synonym, and duplicate synonyms collapse. Repeated keys merge.
    pub fn from_entries<K, I, V>(entries: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (term, related) in entries {
            let key = normalize(term.as_ref());
            if key.is_empty() {
                continue;
            }

            let values = map.entry(key.clone()).or_default();
            for synonym in related {
                let synonym = normalize(synonym.as_ref());
                if !synonym.is_empty() && synonym != key && !values.contains(&synonym) {
                    values.push(synonym);
                }
            }
        }

        Self { entries: map }
    }

    /// Load a JSON object of the form `{"term": ["synonym", ...]}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = read_json(path)?;
        let dictionary = Self::from_entries(raw);
        tracing::debug!(path = %path.display(), terms = dictionary.len(), "loaded synonym dictionary");
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Synonyms of an exact (normalized) term, if it has an entry.
    pub fn get(&self, term: &str) -> Option<&[String]> {
        self.entries.get(term).map(Vec::as_slice)
    }

    /// Expand a normalized query into `[primary, synonyms...]`.
    ///
    /// Position 0 is always the query itself. Synonyms follow, deduplicated,
    /// and never repeat the primary term.
    pub fn expand(&self, primary: &str) -> Vec<String> {
        let mut terms = vec![primary.to_string()];
        if primary.is_empty() {
            return terms;
        }

        // Whole-query hit first so its synonyms lead the list
        if let Some(related) = self.get(primary) {
            push_unique(&mut terms, related);
        }

        for (key, related) in &self.entries {
            if key != primary && contains_word(primary, key) {
                push_unique(&mut terms, related);
            }
        }

        terms
    }
}

fn push_unique(terms: &mut Vec<String>, related: &[String]) {
    for synonym in related {
        if !terms.contains(synonym) {
            terms.push(synonym.clone());
        }
    }
}
