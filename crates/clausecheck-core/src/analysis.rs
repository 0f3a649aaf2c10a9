//! Clause matcher.
//!
//! A single pass over the catalogue: every phrase is tested for plain,
//! case-sensitive substring containment, then the institution allow-list is
//! checked the same way. Overlapping phrases are not resolved, so
//! "either arbitration" and " or arbitration" can both be reported.

use serde::Serialize;

use crate::catalog::Catalog;

/// Phrases of one category found in the current input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundError {
    /// Unique within one analysis run.
    pub id: u32,
    pub category: String,
    /// Subsequence of the category's phrases, in catalogue order.
    pub phrases: Vec<String>,
}

/// Outcome of one analysis run. Derived entirely from the input; nothing is
/// carried over between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub found_errors: Vec<FoundError>,
    /// Flat list of matched phrases, used to paint the input.
    pub highlights: Vec<String>,
    /// Allow-listed institutions contained in the input.
    pub institutions: Vec<String>,
}

impl Analysis {
    pub fn institution_found(&self) -> bool {
        !self.institutions.is_empty()
    }

    /// Number of matched phrases across all categories.
    pub fn phrase_count(&self) -> usize {
        self.found_errors.iter().map(|f| f.phrases.len()).sum()
    }

    /// Matched phrases plus one for a missing institution.
    pub fn total_errors(&self) -> usize {
        self.phrase_count() + usize::from(!self.institution_found())
    }
}

/// Scan `input` against every category and institution in `catalog`.
pub fn analyse(catalog: &Catalog, input: &str) -> Analysis {
    let mut found_errors = Vec::new();
    let mut next_id = 0u32;

    for cat in catalog.categories() {
        let phrases: Vec<String> = cat
            .phrases
            .iter()
            .filter(|phrase| input.contains(phrase.as_str()))
            .cloned()
            .collect();
        if phrases.is_empty() {
            continue;
        }
        found_errors.push(FoundError {
            id: next_id,
            category: cat.category.clone(),
            phrases,
        });
        next_id += 1;
    }

    let highlights = found_errors
        .iter()
        .flat_map(|f| f.phrases.iter().cloned())
        .collect();

    let institutions = catalog
        .institutions()
        .iter()
        .filter(|inst| input.contains(inst.as_str()))
        .cloned()
        .collect();

    let analysis = Analysis {
        found_errors,
        highlights,
        institutions,
    };
    tracing::debug!(
        categories = analysis.found_errors.len(),
        phrases = analysis.phrase_count(),
        institution_found = analysis.institution_found(),
        total_errors = analysis.total_errors(),
        "clause analysed"
    );
    analysis
}

/// Input text plus the result of the most recent analysis, if any.
///
/// Mirrors the checker's screen state: nothing is shown until the first
/// analysis, and every run replaces the previous result wholesale.
#[derive(Debug, Default)]
pub struct ClauseSession {
    catalog: Catalog,
    input: String,
    result: Option<Analysis>,
}

impl ClauseSession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            input: String::new(),
            result: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Run the matcher over the current input, discarding any earlier result.
    pub fn analyse(&mut self) -> &Analysis {
        self.result.insert(analyse(&self.catalog, &self.input))
    }

    /// `None` until the first analysis.
    pub fn result(&self) -> Option<&Analysis> {
        self.result.as_ref()
    }

    /// Zero before the first analysis.
    pub fn total_errors(&self) -> usize {
        self.result.as_ref().map_or(0, Analysis::total_errors)
    }

    /// Clear the input and forget the last result.
    pub fn clear(&mut self) {
        self.input.clear();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ErrorCategory;

    const LCIA_SEAT: &str = "The seat of arbitration shall be London under the LCIA Rules.";

    #[test]
    fn single_phrase_single_category() {
        let catalog = Catalog::builtin();
        let input = format!("The award shall be non-binding. {LCIA_SEAT}");
        let result = analyse(&catalog, &input);

        assert_eq!(result.found_errors.len(), 1);
        assert_eq!(result.found_errors[0].category, "Non-Binding Arbitration");
        assert_eq!(result.found_errors[0].phrases, ["non-binding"]);
        assert_eq!(result.highlights, ["non-binding"]);
        assert!(result.institution_found());
        assert_eq!(result.total_errors(), 1);
    }

    #[test]
    fn phrases_from_two_categories() {
        let catalog = Catalog::builtin();
        let input = "The parties may arbitrate before the ICC. The decision is not binding.";
        let result = analyse(&catalog, input);

        let cats: Vec<(&str, Vec<&str>)> = result
            .found_errors
            .iter()
            .map(|f| {
                (
                    f.category.as_str(),
                    f.phrases.iter().map(String::as_str).collect(),
                )
            })
            .collect();
        assert_eq!(
            cats,
            [
                ("Non-Binding Arbitration", vec!["not binding"]),
                ("Optional Arbitration", vec!["may arbitrate"]),
            ]
        );
        assert_eq!(result.total_errors(), 2);
    }

    #[test]
    fn ids_are_unique_within_a_run() {
        let catalog = Catalog::builtin();
        let result = analyse(&catalog, "not binding, may arbitrate, citizenship");
        let ids: Vec<u32> = result.found_errors.iter().map(|f| f.id).collect();
        assert_eq!(ids, [0, 1, 2]);
    }

    #[test]
    fn no_phrase_no_institution_counts_one() {
        let catalog = Catalog::builtin();
        let result = analyse(&catalog, "The parties shall settle disputes amicably.");
        assert!(result.found_errors.is_empty());
        assert!(!result.institution_found());
        assert_eq!(result.total_errors(), 1);
    }

    #[test]
    fn no_phrase_with_institution_counts_zero() {
        let catalog = Catalog::builtin();
        let result = analyse(&catalog, LCIA_SEAT);
        assert!(result.found_errors.is_empty());
        assert!(result.institution_found());
        assert_eq!(result.total_errors(), 0);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let catalog = Catalog::builtin();
        let result = analyse(&catalog, "NOT BINDING under the lcia rules");
        assert!(result.found_errors.is_empty());
        assert!(!result.institution_found());
    }

    #[test]
    fn overlapping_phrases_double_count() {
        let catalog = Catalog::builtin();
        let result = analyse(&catalog, "to be resolved either arbitration or arbitration");
        let adr = &result.found_errors[0];
        assert_eq!(adr.category, "Alternative Dispute Resolution");
        assert_eq!(adr.phrases, ["either arbitration", " or arbitration"]);
    }

    #[test]
    fn leading_space_phrase_needs_the_space() {
        let catalog = Catalog::builtin();
        let result = analyse(&catalog, "submitted for arbitration");
        assert!(result.found_errors.is_empty());
    }

    #[test]
    fn total_is_phrases_plus_missing_institution() {
        let catalog = Catalog::builtin();
        let inputs = [
            "",
            "non-binding",
            "non-binding ICC",
            "only persuasive, not binding, citizenship, either litigation",
            "only persuasive, not binding, SIAC",
        ];
        for input in inputs {
            let result = analyse(&catalog, input);
            let expected = result.highlights.len() + usize::from(!result.institution_found());
            assert_eq!(result.total_errors(), expected, "input: {input:?}");
        }
    }

    #[test]
    fn custom_catalogue_is_respected() {
        let catalog = Catalog::new(
            vec![ErrorCategory::new("Seat", &["seat of arbitration"])],
            vec!["LCIA".into()],
        )
        .unwrap();
        let result = analyse(&catalog, LCIA_SEAT);
        assert_eq!(result.found_errors.len(), 1);
        assert_eq!(result.total_errors(), 1);
    }

    #[test]
    fn session_reanalysis_discards_previous_result() {
        let mut session = ClauseSession::new(Catalog::builtin());
        assert!(session.result().is_none());
        assert_eq!(session.total_errors(), 0);

        session.set_input("non-binding and may arbitrate");
        assert_eq!(session.analyse().total_errors(), 3);

        session.set_input("");
        let rerun = session.analyse();
        assert!(rerun.found_errors.is_empty());
        assert!(rerun.highlights.is_empty());
        assert_eq!(rerun.total_errors(), 1);
    }

    #[test]
    fn session_clear_resets_to_zero() {
        let mut session = ClauseSession::new(Catalog::builtin());
        session.set_input("non-binding");
        session.analyse();

        session.clear();
        assert_eq!(session.input(), "");
        assert!(session.result().is_none());
        assert_eq!(session.total_errors(), 0);
    }
}
