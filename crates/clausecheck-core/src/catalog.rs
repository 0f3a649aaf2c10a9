//! Phrase catalogue: the static categories of problematic arbitration wording
//! and the allow-list of recognised institutions.
//!
//! The built-in catalogue is used unless a TOML file replaces it. Once loaded
//! a [`Catalog`] is never mutated.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::institutions::DEFAULT_INSTITUTIONS;

/// A named group of literal phrases that flag a clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCategory {
    pub category: String,
    pub phrases: Vec<String>,
}

impl ErrorCategory {
    pub fn new(category: &str, phrases: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }
}

// ── Built-in categories ──
//
// Leading spaces are significant: " or arbitration" must not match "for arbitration".

const NON_BINDING: &[&str] = &[
    "only persuasive",
    "will be persuasive",
    "not binding",
    "non-binding",
];

const ALTERNATIVE_DISPUTE_RESOLUTION: &[&str] = &[
    "either arbitration",
    "either litigation",
    "either by arbitration",
    "either by litigation",
    " or by litigation",
    " or by arbitration",
    " or litigation",
    " or arbitration",
    " or in the courts of",
    "either in the courts of",
];

const OPTIONAL_ARBITRATION: &[&str] = &[
    "may refer to arbitration",
    "may submit to arbitration",
    "may arbitrate",
    "may proceed to arbitrate",
    "may proceed to arbitration",
];

const NON_ARBITRABLE: &[&str] = &["citizenship", "legitimacy of marriage", "insolvency"];

/// Phrase categories plus the institution allow-list used for one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<ErrorCategory>,
    institutions: Vec<String>,
}

/// On-disk shape of a catalogue file.
#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<ErrorCategory>,
    institutions: Option<Vec<String>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The catalogue shipped with the checker.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                ErrorCategory::new("Non-Binding Arbitration", NON_BINDING),
                ErrorCategory::new(
                    "Alternative Dispute Resolution",
                    ALTERNATIVE_DISPUTE_RESOLUTION,
                ),
                ErrorCategory::new("Optional Arbitration", OPTIONAL_ARBITRATION),
                ErrorCategory::new("Non-arbitrable matters", NON_ARBITRABLE),
            ],
            institutions: DEFAULT_INSTITUTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a catalogue from explicit parts, validating them.
    pub fn new(
        categories: Vec<ErrorCategory>,
        institutions: Vec<String>,
    ) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for cat in &categories {
            if cat.category.trim().is_empty() {
                return Err(CatalogError::UnnamedCategory);
            }
            if !seen.insert(cat.category.as_str()) {
                return Err(CatalogError::DuplicateCategory(cat.category.clone()));
            }
            if cat.phrases.iter().any(|p| p.is_empty()) {
                return Err(CatalogError::EmptyPhrase(cat.category.clone()));
            }
        }
        if institutions.iter().any(|i| i.is_empty()) {
            return Err(CatalogError::EmptyInstitution);
        }

        Ok(Self {
            categories,
            institutions,
        })
    }

    /// Parse a TOML catalogue. A missing `institutions` key keeps the built-in list.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(src)?;
        let institutions = file
            .institutions
            .unwrap_or_else(|| DEFAULT_INSTITUTIONS.iter().map(|s| s.to_string()).collect());
        Self::new(file.categories, institutions)
    }

    /// Read and parse a TOML catalogue file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&src)?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            institutions = catalog.institutions.len(),
            "loaded phrase catalogue"
        );
        Ok(catalog)
    }

    pub fn categories(&self) -> &[ErrorCategory] {
        &self.categories
    }

    pub fn institutions(&self) -> &[String] {
        &self.institutions
    }

    /// Total number of phrases across all categories.
    pub fn phrase_count(&self) -> usize {
        self.categories.iter().map(|c| c.phrases.len()).sum()
    }
}
