// Decision policy: threshold, then fixed-priority tie-break.

use super::category::{Category, Label};
use super::scorer::ScoreVector;

/// Minimum normalized score for any category to win.
pub const DEFAULT_THRESHOLD: f64 = 0.0003;

/// Pick the label for a score vector.
///
/// Below `threshold` everything is `Others`. Otherwise every category whose
/// normalized score equals the maximum exactly is tied, and the first one in
/// `Category::PRIORITY` wins.
pub fn decide(scores: &ScoreVector, threshold: f64) -> Label {
    let max_score = scores.max_normalized();
    if max_score < threshold {
        return Label::Others;
    }

    Category::PRIORITY
        .into_iter()
        .find(|&category| scores.normalized(category) == max_score)
        .map(Category::label)
        .unwrap_or(Label::Others)
}
