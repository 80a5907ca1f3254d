// Per-category match counting and normalization.
//
// raw = matching unigrams + matching bigrams + matching trigrams, each
// occurrence tested once against the category's common ∪ unique union.
// normalized = raw / (|common| + |unique|).

use serde::Serialize;

use super::category::Category;
use super::corpus::Corpora;
use super::ngrams::ngrams;

/// Raw and normalized scores for all four categories, indexed by
/// `Category::index()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreVector {
    pub raw: [u32; 4],
    pub normalized: [f64; 4],
}

impl ScoreVector {
    /// Build from raw counts and the per-category denominators.
    pub fn from_counts(raw: [u32; 4], totals: [usize; 4]) -> Self {
        let normalized = std::array::from_fn(|i| f64::from(raw[i]) / totals[i] as f64);
        Self { raw, normalized }
    }

    pub fn raw(&self, category: Category) -> u32 {
        self.raw[category.index()]
    }

    pub fn normalized(&self, category: Category) -> f64 {
        self.normalized[category.index()]
    }

    /// Highest normalized score across all categories.
    pub fn max_normalized(&self) -> f64 {
        self.normalized.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Score a token sequence against every category.
pub fn score(tokens: &[String], corpora: &Corpora) -> ScoreVector {
    let bigrams: Vec<String> = ngrams(tokens, 2).collect();
    let trigrams: Vec<String> = ngrams(tokens, 3).collect();

    let mut raw = [0u32; 4];
    let mut totals = [0usize; 4];

    for category in Category::PRIORITY {
        let terms = corpora.terms(category);
        let matches = tokens
            .iter()
            .chain(&bigrams)
            .chain(&trigrams)
            .filter(|term| terms.contains(term))
            .count();

        raw[category.index()] = u32::try_from(matches).unwrap_or(u32::MAX);
        totals[category.index()] = terms.total();
    }

    ScoreVector::from_counts(raw, totals)
}
