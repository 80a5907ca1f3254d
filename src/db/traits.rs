// Database trait: async interface over the storage backend.
//
// SqliteDatabase wraps rusqlite behind a tokio Mutex. The trait mirrors the
// free functions in queries.rs so callers can hold an `Arc<dyn Database>`.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{BatchOutcome, FeedState, NewArticle, StoredArticle};

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Articles ---

    /// Whether an article with this link is already stored.
    async fn article_exists(&self, link: &str) -> Result<bool>;

    /// Store one feed's articles in a single transaction, skipping links
    /// that are already present.
    async fn store_feed_articles(&self, articles: &[NewArticle]) -> Result<BatchOutcome>;

    /// Total number of stored articles.
    async fn article_count(&self) -> Result<i64>;

    /// Article counts per category label, largest first.
    async fn category_counts(&self) -> Result<Vec<(String, i64)>>;

    /// Most recently ingested articles, optionally for one category only.
    async fn recent_articles(&self, category: Option<&str>, limit: u32)
        -> Result<Vec<StoredArticle>>;

    // --- Feed state ---

    /// Record the outcome of ingesting a feed.
    async fn set_feed_state(&self, feed_url: &str, status: &str, articles_added: i64)
        -> Result<()>;

    /// Every feed's last ingest outcome.
    async fn get_all_feed_state(&self) -> Result<Vec<FeedState>>;
}
