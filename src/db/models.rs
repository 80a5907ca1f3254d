// Data models: rust structs that map to database rows.
//
// Kept separate from the queries so the pipeline and output code can use
// them without depending on rusqlite.

use serde::{Deserialize, Serialize};

/// An article ready to be stored. The link doubles as the primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub link: String,
    /// Plain-text description (HTML already stripped)
    pub description: String,
    /// `YYYY-MM-DD HH:MM:SS` in UTC, when the feed's date could be parsed
    pub published_date: Option<String>,
    /// The classifier's label string
    pub category: String,
    pub feed_url: String,
}

/// An article as read back from the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredArticle {
    pub id: String,
    pub title: String,
    pub link: String,
    pub description: String,
    pub published_date: Option<String>,
    pub category: String,
    pub feed_url: String,
    pub ingested_at: String,
}

/// Result of storing one feed's batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub inserted: usize,
    pub duplicates: usize,
}

/// Last ingest result for one feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedState {
    pub feed_url: String,
    /// `ok` or `failed: <reason>`
    pub last_status: String,
    pub articles_added: i64,
    pub last_ingest_at: String,
}
