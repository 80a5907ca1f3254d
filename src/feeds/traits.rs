// Feed source trait. The pipeline fetches through this, so tests can feed
// it canned entries without any network.

use anyhow::Result;
use async_trait::async_trait;

/// One item from a feed, fields exactly as the feed gave them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    /// Usually HTML
    pub description: Option<String>,
    /// Publication date in whatever format the feed uses
    pub published: Option<String>,
}

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse a feed. Transport failures and unparseable documents
    /// are both errors.
    async fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>>;
}
