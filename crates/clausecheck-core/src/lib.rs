pub mod analysis;
pub mod catalog;
mod error;
pub mod explain;
pub mod highlight;
pub mod institutions;
pub mod review;
pub mod summary;

pub use analysis::{Analysis, ClauseSession, FoundError, analyse};
pub use catalog::{Catalog, ErrorCategory};
pub use error::CatalogError;
pub use explain::{ExplainReply, ExplainRequest, Explanation};
pub use review::{Card, ExplanationState, ItemKind, Review, ReviewItem};
pub use summary::{EditorOption, EditorOptions, SummaryEditor, UploadError, UploadPhase};
