// Database queries: CRUD operations for all tables.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::models::{BatchOutcome, FeedState, NewArticle, StoredArticle};

// --- Articles ---

/// Whether an article with this link is already stored.
pub fn article_exists(conn: &Connection, link: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM news_articles WHERE link = ?1",
            params![link],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn insert_article(conn: &Connection, article: &NewArticle) -> Result<()> {
    conn.execute(
        "INSERT INTO news_articles (id, title, link, description, published_date, category, feed_url)
         VALUES (?1, ?2, ?1, ?3, ?4, ?5, ?6)",
        params![
            article.link,
            article.title,
            article.description,
            article.published_date,
            article.category,
            article.feed_url,
        ],
    )?;
    Ok(())
}

/// Store one feed's articles in a single transaction.
///
/// Articles whose link is already stored (including earlier in the same
/// batch) are skipped. If anything fails the whole batch is rolled back.
pub fn store_feed_articles(conn: &mut Connection, articles: &[NewArticle]) -> Result<BatchOutcome> {
    let tx = conn.transaction().context("Failed to start transaction")?;
    let mut outcome = BatchOutcome::default();

    for article in articles {
        if article_exists(&tx, &article.link)? {
            debug!(link = %article.link, "Duplicate entry found, skipping");
            outcome.duplicates += 1;
            continue;
        }
        insert_article(&tx, article)
            .with_context(|| format!("Failed to insert article {}", article.link))?;
        info!(title = %article.title, feed = %article.feed_url, "New article added");
        outcome.inserted += 1;
    }

    tx.commit().context("Failed to commit feed batch")?;
    Ok(outcome)
}

/// Total number of stored articles.
pub fn article_count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM news_articles", [], |row| row.get(0))?;
    Ok(count)
}

/// Article counts per category label, largest first.
pub fn category_counts(conn: &Connection) -> Result<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT category, COUNT(*) AS n FROM news_articles
         GROUP BY category
         ORDER BY n DESC, category ASC",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    let mut counts = Vec::new();
    for row in rows {
        counts.push(row?);
    }
    Ok(counts)
}

/// Most recently ingested articles, optionally restricted to one category.
pub fn recent_articles(
    conn: &Connection,
    category: Option<&str>,
    limit: u32,
) -> Result<Vec<StoredArticle>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, link, description, published_date, category, feed_url, ingested_at
         FROM news_articles
         WHERE ?1 IS NULL OR category = ?1
         ORDER BY ingested_at DESC, rowid DESC
         LIMIT ?2",
    )?;

    let rows = stmt.query_map(params![category, limit], |row| {
        Ok(StoredArticle {
            id: row.get(0)?,
            title: row.get(1)?,
            link: row.get(2)?,
            description: row.get(3)?,
            published_date: row.get(4)?,
            category: row.get(5)?,
            feed_url: row.get(6)?,
            ingested_at: row.get(7)?,
        })
    })?;

    let mut articles = Vec::new();
    for row in rows {
        articles.push(row?);
    }
    Ok(articles)
}

// --- Feed state ---

/// Record the outcome of ingesting a feed (upsert).
pub fn set_feed_state(
    conn: &Connection,
    feed_url: &str,
    status: &str,
    articles_added: i64,
) -> Result<()> {
    conn.execute(
        "INSERT INTO feed_state (feed_url, last_status, articles_added, last_ingest_at)
         VALUES (?1, ?2, ?3, datetime('now'))
         ON CONFLICT(feed_url) DO UPDATE SET
            last_status = ?2,
            articles_added = ?3,
            last_ingest_at = datetime('now')",
        params![feed_url, status, articles_added],
    )?;
    Ok(())
}

/// Every feed's last ingest outcome, ordered by URL.
pub fn get_all_feed_state(conn: &Connection) -> Result<Vec<FeedState>> {
    let mut stmt = conn.prepare(
        "SELECT feed_url, last_status, articles_added, last_ingest_at
         FROM feed_state ORDER BY feed_url",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(FeedState {
            feed_url: row.get(0)?,
            last_status: row.get(1)?,
            articles_added: row.get(2)?,
            last_ingest_at: row.get(3)?,
        })
    })?;

    let mut states = Vec::new();
    for row in rows {
        states.push(row?);
    }
    Ok(states)
}
