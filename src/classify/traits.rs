// Classifier trait: the pipeline takes any text-to-label strategy.
//
// The keyword/n-gram classifier is the only implementation, but the ingest
// pipeline and its tests only see this trait.

use serde::Serialize;

use super::category::Label;
use super::scorer::ScoreVector;

/// Full result of one classification, for display and debugging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub label: Label,
    /// `None` when the text was absent or empty and nothing was scored
    pub scores: Option<ScoreVector>,
    pub token_count: usize,
}

/// Assigns a label to article text. Implementations must be pure and
/// shareable across threads.
pub trait ArticleClassifier: Send + Sync {
    /// Classify with all the details.
    fn explain(&self, text: Option<&str>) -> Classification;

    /// Classify to a label only.
    fn classify(&self, text: Option<&str>) -> Label {
        self.explain(text).label
    }
}
