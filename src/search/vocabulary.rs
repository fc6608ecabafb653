//! Synonym and boost tables.
//!
//! Both tables are plain data injected into the engine. The built-in defaults cover the
//! storefront's main departments; deployments can swap them for a JSON file.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use super::tokenizer::tokenize_query;
use super::types::TermSet;

const DEFAULT_BOOST_WEIGHT: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVocabulary {
    /// Canonical normalized query -> related terms.
    #[serde(default)]
    pub synonyms: HashMap<String, Vec<String>>,
    /// Keywords that earn a flat bonus when found in a product name.
    #[serde(default)]
    pub boosts: Vec<String>,
    #[serde(default = "default_boost_weight")]
    pub boost_weight: u32,
}

fn default_boost_weight() -> u32 {
    DEFAULT_BOOST_WEIGHT
}

impl Default for SearchVocabulary {
    fn default() -> Self {
        let table: &[(&str, &[&str])] = &[
            (
                "laptop",
                &[
                    "notebook", "ultrabook", "computer", "pc", "dell", "lenovo", "hp", "macbook",
                    "thinkpad", "xps",
                ],
            ),
            ("phone", &["smartphone", "mobile", "iphone", "android", "cellphone"]),
            ("headphones", &["earbuds", "headset", "earphones", "airpods"]),
            ("tv", &["television", "smart tv", "oled", "qled"]),
            ("dress", &["gown", "frock", "maxi", "midi"]),
            ("shoes", &["sneakers", "boots", "trainers", "footwear", "sandals"]),
            ("watch", &["smartwatch", "wristwatch", "timepiece"]),
        ];

        Self {
            synonyms: table
                .iter()
                .map(|(key, terms)| {
                    (
                        key.to_string(),
                        terms.iter().map(|t| t.to_string()).collect(),
                    )
                })
                .collect(),
            boosts: ["dell", "lenovo", "hp", "xps", "thinkpad", "macbook"]
                .iter()
                .map(|b| b.to_string())
                .collect(),
            boost_weight: DEFAULT_BOOST_WEIGHT,
        }
    }
}

impl SearchVocabulary {
    pub fn empty() -> Self {
        Self {
            synonyms: HashMap::new(),
            boosts: Vec::new(),
            boost_weight: DEFAULT_BOOST_WEIGHT,
        }
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading vocabulary {}", path.display()))?;
        let vocabulary: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing vocabulary {}", path.display()))?;
        Ok(vocabulary.normalized())
    }

    /// Lowercases every key, synonym and boost so lookups and containment tests agree
    /// with the normalized query.
    ///
    /// Keys that collide once lowercased ("Laptop" and "laptop") are merged. Merged lists
    /// are sorted and deduplicated so the result does not depend on map iteration order.
    pub fn normalized(self) -> Self {
        let mut merged: HashMap<String, BTreeSet<String>> = HashMap::new();
        for (key, terms) in self.synonyms {
            merged
                .entry(key.trim().to_lowercase())
                .or_default()
                .extend(terms.into_iter().map(|t| t.trim().to_lowercase()));
        }

        Self {
            synonyms: merged
                .into_iter()
                .map(|(key, terms)| (key, terms.into_iter().collect()))
                .collect(),
            boosts: self
                .boosts
                .into_iter()
                .map(|b| b.trim().to_lowercase())
                .filter(|b| !b.is_empty())
                .collect(),
            boost_weight: self.boost_weight,
        }
    }

    /// Synonyms for an exact normalized query. A miss is an empty list.
    pub fn synonyms_for(&self, normalized_query: &str) -> &[String] {
        self.synonyms
            .get(normalized_query)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Builds the term set used by the match filter.
    pub fn expand(&self, normalized_query: &str) -> TermSet {
        let tokens = tokenize_query(normalized_query);
        let synonyms: BTreeSet<String> = self
            .synonyms_for(normalized_query)
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect();

        let mut terms = BTreeSet::new();
        terms.insert(normalized_query.to_string());
        terms.extend(tokens.iter().cloned());
        terms.extend(synonyms.iter().cloned());

        TermSet {
            normalized_query: normalized_query.to_string(),
            tokens,
            synonyms,
            terms,
        }
    }
}
