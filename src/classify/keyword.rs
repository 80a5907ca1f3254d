// Keyword/n-gram classifier: tokenizer + corpora + decision policy.

use anyhow::Result;
use tracing::debug;

use super::category::Label;
use super::corpus::{Corpora, CorpusPaths};
use super::decision::decide;
use super::scorer::score;
use super::tokenize::Tokenizer;
use super::traits::{ArticleClassifier, Classification};

/// Scores text against the loaded corpora. Holds no mutable state, so a
/// single instance can serve every feed concurrently.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    corpora: Corpora,
    tokenizer: Tokenizer,
    threshold: f64,
}

impl KeywordClassifier {
    pub fn new(corpora: Corpora, tokenizer: Tokenizer, threshold: f64) -> Self {
        Self {
            corpora,
            tokenizer,
            threshold,
        }
    }

    /// Load the corpora from disk and use the default English stop words.
    pub fn load(paths: &CorpusPaths, threshold: f64) -> Result<Self> {
        let corpora = Corpora::load(paths)?;
        let tokenizer = Tokenizer::new()?;
        Ok(Self::new(corpora, tokenizer, threshold))
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn corpora(&self) -> &Corpora {
        &self.corpora
    }

    /// Classify with an explicit threshold instead of the configured one.
    pub fn classify_with_threshold(&self, text: Option<&str>, threshold: f64) -> Label {
        self.explain_with_threshold(text, threshold).label
    }

    fn explain_with_threshold(&self, text: Option<&str>, threshold: f64) -> Classification {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => {
                return Classification {
                    label: Label::NotApplicable,
                    scores: None,
                    token_count: 0,
                }
            }
        };

        let tokens = self.tokenizer.tokenize(Some(text));
        let scores = score(&tokens, &self.corpora);
        let label = decide(&scores, threshold);

        debug!(
            tokens = tokens.len(),
            raw = ?scores.raw,
            normalized = ?scores.normalized,
            label = %label,
            "Classified text"
        );

        Classification {
            label,
            scores: Some(scores),
            token_count: tokens.len(),
        }
    }
}

impl ArticleClassifier for KeywordClassifier {
    fn explain(&self, text: Option<&str>) -> Classification {
        self.explain_with_threshold(text, self.threshold)
    }
}
