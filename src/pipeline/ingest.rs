// Ingestion pipeline: fetch feeds -> clean -> classify -> store.
//
// For every configured feed:
// 1. Fetch and parse it (a few feeds in flight at once)
// 2. Strip HTML from each description and classify it
// 3. Normalize the publication date
// 4. Store the feed's articles in one transaction, skipping known links
//
// A feed that fails to fetch, parse or commit is logged and recorded in
// feed_state; the remaining feeds still run.

use std::collections::BTreeMap;

use anyhow::Result;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::classify::traits::ArticleClassifier;
use crate::db::models::{BatchOutcome, NewArticle};
use crate::db::Database;
use crate::feeds::dates::{parse_published, to_db_string};
use crate::feeds::html::HtmlCleaner;
use crate::feeds::traits::{FeedEntry, FeedSource};

/// Placeholder for fields a feed entry doesn't provide.
pub const MISSING: &str = "N/A";

/// Knobs for one ingest run.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Feeds fetched concurrently
    pub concurrency: usize,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            concurrency: 4,
            show_progress: false,
        }
    }
}

/// What happened to one feed.
#[derive(Debug, Clone, Serialize)]
pub enum FeedStatus {
    Stored {
        entries: usize,
        outcome: BatchOutcome,
    },
    FetchFailed(String),
    StoreFailed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedOutcome {
    pub feed_url: String,
    pub status: FeedStatus,
}

/// Everything an ingest run did, in configured feed order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestSummary {
    pub feeds: Vec<FeedOutcome>,
    /// Label -> number of articles classified with it (new and duplicate)
    pub label_counts: BTreeMap<String, usize>,
}

impl IngestSummary {
    pub fn inserted(&self) -> usize {
        self.stored_outcomes().map(|o| o.inserted).sum()
    }

    pub fn duplicates(&self) -> usize {
        self.stored_outcomes().map(|o| o.duplicates).sum()
    }

    pub fn failed_feeds(&self) -> usize {
        self.feeds
            .iter()
            .filter(|f| !matches!(f.status, FeedStatus::Stored { .. }))
            .count()
    }

    fn stored_outcomes(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.feeds.iter().filter_map(|f| match &f.status {
            FeedStatus::Stored { outcome, .. } => Some(outcome),
            _ => None,
        })
    }
}

/// Turn one feed entry into a storable, classified article.
///
/// Missing fields become "N/A". The cleaned description is what gets
/// classified and stored.
pub fn prepare_article(
    entry: &FeedEntry,
    feed_url: &str,
    cleaner: &HtmlCleaner,
    classifier: &dyn ArticleClassifier,
) -> NewArticle {
    let or_missing =
        |field: &Option<String>| field.clone().unwrap_or_else(|| MISSING.to_string());

    let description = cleaner.clean(entry.description.as_deref().unwrap_or(MISSING));
    let category = classifier.classify(Some(&description));
    let published_date = entry
        .published
        .as_deref()
        .and_then(parse_published)
        .map(|dt| to_db_string(&dt));

    NewArticle {
        title: or_missing(&entry.title),
        link: or_missing(&entry.link),
        description,
        published_date,
        category: category.as_str().to_string(),
        feed_url: feed_url.to_string(),
    }
}

/// Run the ingest pipeline over `feeds`.
///
/// Only database-level failures that aren't tied to one feed (recording
/// feed state) abort the run.
pub async fn run(
    source: &dyn FeedSource,
    classifier: &dyn ArticleClassifier,
    db: &dyn Database,
    feeds: &[String],
    options: &IngestOptions,
) -> Result<IngestSummary> {
    let cleaner = HtmlCleaner::new()?;
    let mut summary = IngestSummary::default();

    let pb = if options.show_progress {
        let pb = ProgressBar::new(feeds.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar().template("  Ingesting [{bar:30}] {pos}/{len} {msg}")?,
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    // Fetch concurrently, but handle results in the configured order so
    // the commits (and logs) are deterministic.
    let mut fetched = std::pin::pin!(stream::iter(feeds.iter().map(|url| async move {
        let result = source.fetch(url).await;
        (url, result)
    }))
    .buffered(options.concurrency.max(1)));

    while let Some((feed_url, result)) = fetched.next().await {
        pb.set_message(feed_url.clone());

        let entries = match result {
            Ok(entries) => entries,
            Err(e) => {
                warn!(feed = %feed_url, error = %e, "Feed could not be fetched or parsed, skipping");
                db.set_feed_state(feed_url, &format!("failed: {e}"), 0).await?;
                summary.feeds.push(FeedOutcome {
                    feed_url: feed_url.clone(),
                    status: FeedStatus::FetchFailed(format!("{e:#}")),
                });
                pb.inc(1);
                continue;
            }
        };

        let articles: Vec<NewArticle> = entries
            .iter()
            .map(|entry| prepare_article(entry, feed_url, &cleaner, classifier))
            .collect();

        for article in &articles {
            *summary.label_counts.entry(article.category.clone()).or_insert(0) += 1;
        }

        let status = match db.store_feed_articles(&articles).await {
            Ok(outcome) => {
                info!(
                    feed = %feed_url,
                    entries = articles.len(),
                    inserted = outcome.inserted,
                    duplicates = outcome.duplicates,
                    "Feed committed"
                );
                db.set_feed_state(feed_url, "ok", outcome.inserted as i64).await?;
                FeedStatus::Stored {
                    entries: articles.len(),
                    outcome,
                }
            }
            Err(e) => {
                error!(feed = %feed_url, error = %e, "Commit failed, feed rolled back");
                db.set_feed_state(feed_url, &format!("failed: {e}"), 0).await?;
                FeedStatus::StoreFailed(format!("{e:#}"))
            }
        };

        summary.feeds.push(FeedOutcome {
            feed_url: feed_url.clone(),
            status,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        feeds = feeds.len(),
        inserted = summary.inserted(),
        duplicates = summary.duplicates(),
        failed = summary.failed_feeds(),
        "Ingest complete"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::category::Label;
    use crate::classify::traits::Classification;

    /// Labels anything mentioning "flood" as a natural disaster.
    struct FloodClassifier;

    impl ArticleClassifier for FloodClassifier {
        fn explain(&self, text: Option<&str>) -> Classification {
            let label = match text {
                None | Some("") => Label::NotApplicable,
                Some(t) if t.to_lowercase().contains("flood") => Label::NaturalDisasters,
                Some(_) => Label::Others,
            };
            Classification {
                label,
                scores: None,
                token_count: 0,
            }
        }
    }

    #[test]
    fn test_prepare_article_fills_missing_fields() {
        let cleaner = HtmlCleaner::new().unwrap();
        let article =
            prepare_article(&FeedEntry::default(), "https://feed", &cleaner, &FloodClassifier);
        assert_eq!(article.title, MISSING);
        assert_eq!(article.link, MISSING);
        assert_eq!(article.description, MISSING);
        assert_eq!(article.published_date, None);
        assert_eq!(article.category, "Others");
        assert_eq!(article.feed_url, "https://feed");
    }

    #[test]
    fn test_prepare_article_cleans_and_classifies() {
        let cleaner = HtmlCleaner::new().unwrap();
        let entry = FeedEntry {
            title: Some("Coast hit".to_string()),
            link: Some("https://news/1".to_string()),
            description: Some("<p>Severe <b>flooding</b> reported</p>".to_string()),
            published: Some("Tue, 10 Sep 2024 08:30:00 GMT".to_string()),
        };
        let article = prepare_article(&entry, "https://feed", &cleaner, &FloodClassifier);
        assert_eq!(article.description, "Severe flooding reported");
        assert_eq!(article.category, "Natural Disasters");
        assert_eq!(article.published_date.as_deref(), Some("2024-09-10 08:30:00"));
    }

    #[test]
    fn test_empty_description_is_na() {
        let cleaner = HtmlCleaner::new().unwrap();
        let entry = FeedEntry {
            description: Some(String::new()),
            ..FeedEntry::default()
        };
        let article = prepare_article(&entry, "https://feed", &cleaner, &FloodClassifier);
        assert_eq!(article.category, "NA");
    }
}
