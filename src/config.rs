use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::classify::corpus::CorpusPaths;
use crate::classify::decision::DEFAULT_THRESHOLD;
use crate::feeds::DEFAULT_FEEDS;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so a bare `newswire ingest` works against the
/// sample corpus in ./Corpus.
pub struct Config {
    pub db_path: String,
    /// Directory holding the eight corpus files
    pub corpus_dir: PathBuf,
    /// Feed URLs, in ingest order
    pub feeds: Vec<String>,
    /// Minimum normalized score for a category to win
    pub threshold: f64,
    /// How many feeds to fetch at once
    pub concurrency: usize,
    /// Per-request HTTP timeout, in seconds
    pub fetch_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let feeds = match env::var("NEWSWIRE_FEEDS") {
            Ok(list) => parse_feed_list(&list),
            Err(_) => DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect(),
        };

        let threshold = match env::var("NEWSWIRE_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => DEFAULT_THRESHOLD,
        };

        let concurrency = match env::var("NEWSWIRE_CONCURRENCY") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("NEWSWIRE_CONCURRENCY is not a number: {raw}"))?,
            Err(_) => 4,
        };

        let fetch_timeout_secs = match env::var("NEWSWIRE_FETCH_TIMEOUT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("NEWSWIRE_FETCH_TIMEOUT is not a number: {raw}"))?,
            Err(_) => 15,
        };

        Ok(Self {
            db_path: env::var("NEWSWIRE_DB_PATH").unwrap_or_else(|_| "./newswire.db".to_string()),
            corpus_dir: env::var("NEWSWIRE_CORPUS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./Corpus")),
            feeds,
            threshold,
            concurrency,
            fetch_timeout_secs,
        })
    }

    pub fn corpus_paths(&self) -> CorpusPaths {
        CorpusPaths::in_dir(&self.corpus_dir)
    }

    /// Check that the corpus directory exists before trying to classify.
    /// Individual missing files are reported by the loader.
    pub fn require_corpus(&self) -> Result<()> {
        if !self.corpus_dir.is_dir() {
            anyhow::bail!(
                "Corpus directory not found at {}.\n\
                 Set NEWSWIRE_CORPUS_DIR to the folder holding the keyword lists.",
                self.corpus_dir.display()
            );
        }
        Ok(())
    }

    /// Check that there is at least one feed to ingest.
    pub fn require_feeds(&self) -> Result<()> {
        if self.feeds.is_empty() {
            anyhow::bail!(
                "NEWSWIRE_FEEDS is set but lists no URLs. \
                 Unset it to use the default feeds."
            );
        }
        Ok(())
    }
}

/// Split a comma-separated feed list, dropping blanks.
pub fn parse_feed_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a classification threshold: a finite, non-negative number.
pub fn parse_threshold(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("Threshold is not a number: {raw}"))?;
    if !value.is_finite() || value < 0.0 {
        anyhow::bail!("Threshold must be a finite, non-negative number, got {raw}");
    }
    Ok(value)
}
