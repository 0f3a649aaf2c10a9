//! Shared types for the explanation service contract.

use serde::{Deserialize, Serialize};

/// Body POSTed to the explanation endpoint for one flagged item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    /// Full clause text, for context.
    pub clause: String,
    /// The flagged phrase or message.
    pub error: String,
    /// Category header of the rule that was triggered.
    pub rule: String,
}

/// One entry of the service's `reply` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    #[serde(rename = "Context and Legal Implications")]
    pub context: String,
    #[serde(rename = "Suggestion")]
    pub suggestion: String,
}

/// Response body of the explanation endpoint. Only the first entry is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainReply {
    pub reply: Vec<Explanation>,
}

impl ExplainReply {
    pub fn into_first(self) -> Option<Explanation> {
        self.reply.into_iter().next()
    }
}
