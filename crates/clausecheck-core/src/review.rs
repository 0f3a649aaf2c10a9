//! Review items ("cards") built from an analysis, and the lazy explanation
//! state each card carries.

use serde::Serialize;

use crate::analysis::Analysis;
use crate::explain::{ExplainRequest, Explanation};

pub const UNKNOWN_INSTITUTION: &str = "Unknown Institution";
pub const UNKNOWN_INSTITUTION_MESSAGE: &str = "The arbitration body or institution overseeing \
the proceedings is either: (i) not clearly stated, (ii) fictional, or (iii) not known for \
arbitration. Please review and confirm what is agreed between the parties.";
pub const NO_ERRORS: &str = "No Errors";
pub const NO_ERRORS_MESSAGE: &str = "No Errors Found";
pub const LOADING: &str = "Loading...";
pub const FETCH_FAILED: &str = "Failed to fetch explanation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A matched phrase.
    Phrase,
    UnknownInstitution,
    NoErrors,
}

/// One entry in the results list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewItem {
    pub kind: ItemKind,
    /// Category name or synthetic header.
    pub header: String,
    /// The matched phrase or the synthetic message.
    pub highlight: String,
}

impl ReviewItem {
    pub fn is_error(&self) -> bool {
        self.kind != ItemKind::NoErrors
    }

    /// Whether expanding this item asks the explanation service.
    pub fn wants_explanation(&self) -> bool {
        self.is_error()
    }

    /// Body for the explanation endpoint.
    pub fn request(&self, clause: &str) -> ExplainRequest {
        ExplainRequest {
            clause: clause.to_string(),
            error: self.highlight.clone(),
            rule: self.header.clone(),
        }
    }
}

/// Build the results list: one item per matched phrase, then the synthetic
/// institution item, or a lone "No Errors" item for a clean clause.
pub fn review_items(analysis: &Analysis) -> Vec<ReviewItem> {
    if analysis.total_errors() == 0 && analysis.institution_found() {
        return vec![ReviewItem {
            kind: ItemKind::NoErrors,
            header: NO_ERRORS.to_string(),
            highlight: NO_ERRORS_MESSAGE.to_string(),
        }];
    }

    let mut items: Vec<ReviewItem> = analysis
        .found_errors
        .iter()
        .flat_map(|found| {
            found.phrases.iter().map(|phrase| ReviewItem {
                kind: ItemKind::Phrase,
                header: found.category.clone(),
                highlight: phrase.clone(),
            })
        })
        .collect();

    if !analysis.institution_found() {
        items.push(ReviewItem {
            kind: ItemKind::UnknownInstitution,
            header: UNKNOWN_INSTITUTION.to_string(),
            highlight: UNKNOWN_INSTITUTION_MESSAGE.to_string(),
        });
    }
    items
}

/// Explanation state of an expanded card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplanationState {
    /// Request sent, no answer yet.
    Pending,
    Ready(Explanation),
    Failed,
}

/// A review item plus its expansion and explanation state.
#[derive(Debug, Clone)]
pub struct Card {
    item: ReviewItem,
    open: bool,
    explanation: Option<ExplanationState>,
}

impl Card {
    pub fn new(item: ReviewItem) -> Self {
        Self {
            item,
            open: false,
            explanation: None,
        }
    }

    pub fn item(&self) -> &ReviewItem {
        &self.item
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn explanation(&self) -> Option<&ExplanationState> {
        self.explanation.as_ref()
    }

    /// Open the card. Returns the request to send when this expansion needs
    /// an explanation that is not already cached or in flight.
    pub fn expand(&mut self, clause: &str) -> Option<ExplainRequest> {
        self.open = true;
        if !self.item.wants_explanation() || self.explanation.is_some() {
            return None;
        }
        self.explanation = Some(ExplanationState::Pending);
        Some(self.item.request(clause))
    }

    /// Close the card, dropping any cached explanation.
    pub fn collapse(&mut self) {
        self.open = false;
        self.explanation = None;
    }

    /// Flip the card open or closed.
    pub fn toggle(&mut self, clause: &str) -> Option<ExplainRequest> {
        if self.open {
            self.collapse();
            None
        } else {
            self.expand(clause)
        }
    }

    /// Deliver the outcome of the request issued by [`Card::expand`].
    ///
    /// Ignored unless that request is still pending; a card collapsed in the
    /// meantime stays empty.
    pub fn resolve(&mut self, outcome: Option<Explanation>) {
        if self.explanation != Some(ExplanationState::Pending) {
            return;
        }
        self.explanation = Some(match outcome {
            Some(explanation) => ExplanationState::Ready(explanation),
            None => ExplanationState::Failed,
        });
    }

    /// Text shown for the card body: `(explanation, suggestion)` when open,
    /// otherwise the highlight alone.
    pub fn body(&self) -> (&str, Option<&str>) {
        let shows_explanation = self.open && self.item.kind == ItemKind::Phrase;
        if !shows_explanation {
            return (self.item.highlight.as_str(), None);
        }
        match &self.explanation {
            Some(ExplanationState::Ready(e)) => (e.context.as_str(), Some(e.suggestion.as_str())),
            Some(ExplanationState::Failed) => (FETCH_FAILED, Some("")),
            Some(ExplanationState::Pending) | None => (LOADING, Some(LOADING)),
        }
    }
}

/// The results panel for one analysed clause.
#[derive(Debug, Clone)]
pub struct Review {
    clause: String,
    total_errors: usize,
    cards: Vec<Card>,
}

impl Review {
    pub fn new(clause: impl Into<String>, analysis: &Analysis) -> Self {
        Self {
            clause: clause.into(),
            total_errors: analysis.total_errors(),
            cards: review_items(analysis).into_iter().map(Card::new).collect(),
        }
    }

    pub fn clause(&self) -> &str {
        &self.clause
    }

    pub fn total_errors(&self) -> usize {
        self.total_errors
    }

    pub fn title(&self) -> String {
        format!("Suggested Reviews ({})", self.total_errors)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Expand card `index`; `None` if out of range or nothing to fetch.
    pub fn expand(&mut self, index: usize) -> Option<ExplainRequest> {
        let card = self.cards.get_mut(index)?;
        card.expand(&self.clause)
    }

    pub fn collapse(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.collapse();
        }
    }

    pub fn resolve(&mut self, index: usize, outcome: Option<Explanation>) {
        if let Some(card) = self.cards.get_mut(index) {
            card.resolve(outcome);
        }
    }

    /// Expand every card, returning the requests to issue keyed by card index.
    pub fn expand_all(&mut self) -> Vec<(usize, ExplainRequest)> {
        (0..self.cards.len())
            .filter_map(|i| self.expand(i).map(|req| (i, req)))
            .collect()
    }
}
