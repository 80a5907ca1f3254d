// System status display: DB stats, label breakdown, per-feed last ingest.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::db::Database;
use crate::output::terminal;

/// Display system status to the terminal.
pub async fn show(db: &dyn Database, db_display_path: &str) -> Result<()> {
    let file_size = std::fs::metadata(db_display_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_display_path, file_size);

    let total = db.article_count().await?;
    println!("Articles: {total}");
    terminal::display_category_counts(&db.category_counts().await?);

    let feeds = db.get_all_feed_state().await?;
    if feeds.is_empty() {
        println!("\nFeeds: never ingested");
        println!("  Run `newswire ingest` to fetch the configured feeds");
    } else {
        println!("\nFeeds:");
        for feed in &feeds {
            let status = if feed.last_status == "ok" {
                feed.last_status.green()
            } else {
                feed.last_status.red()
            };
            println!(
                "  {}  {} (+{} at {})",
                status, feed.feed_url, feed.articles_added, feed.last_ingest_at
            );
        }
    }

    let recent = db.recent_articles(None, 5).await?;
    if !recent.is_empty() {
        println!("\nMost recent:");
        terminal::display_articles(&recent);
    }

    Ok(())
}

/// Whether a database file exists at `path`.
pub fn database_present(path: &str) -> bool {
    Path::new(path).exists()
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
