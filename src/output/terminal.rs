// Colored terminal output for ingest summaries, classifications and
// stored articles. main.rs and status.rs delegate here.

use colored::{ColoredString, Colorize};

use crate::classify::category::{Category, Label};
use crate::classify::traits::Classification;
use crate::db::models::StoredArticle;
use crate::pipeline::ingest::{FeedStatus, IngestSummary};

use super::truncate_chars;

/// Color a stored label string by how alarming it is.
pub fn colorize_label(label: &str) -> ColoredString {
    match Label::from_stored(label) {
        Some(Label::PoliticalUnrest) => label.red().bold(),
        Some(Label::NaturalDisasters) => label.yellow().bold(),
        Some(Label::PositiveUplifting) => label.green().bold(),
        Some(Label::Others) => label.normal(),
        Some(Label::NotApplicable) | None => label.dimmed(),
    }
}

/// Per-feed results and label totals after an ingest run.
pub fn display_ingest_summary(summary: &IngestSummary) {
    println!(
        "\n{}",
        format!("=== Ingest ({} feeds) ===", summary.feeds.len()).bold()
    );
    println!();

    for feed in &summary.feeds {
        match &feed.status {
            FeedStatus::Stored { entries, outcome } => println!(
                "  {} {:<60} {:>3} entries, {:>3} new, {:>3} duplicate",
                "ok".green(),
                truncate_chars(&feed.feed_url, 57),
                entries,
                outcome.inserted,
                outcome.duplicates,
            ),
            FeedStatus::FetchFailed(reason) | FeedStatus::StoreFailed(reason) => println!(
                "  {} {:<60} {}",
                "!!".red(),
                truncate_chars(&feed.feed_url, 57),
                truncate_chars(reason, 60).dimmed(),
            ),
        }
    }

    if !summary.label_counts.is_empty() {
        println!("\n  {}", "Classified".dimmed());
        for (label, count) in &summary.label_counts {
            println!("  {:>5}  {}", count, colorize_label(label));
        }
    }

    println!();
    println!(
        "  New articles: {}   Duplicates: {}   Failed feeds: {}",
        summary.inserted().to_string().bold(),
        summary.duplicates(),
        summary.failed_feeds(),
    );
}

/// One classification with its per-category scores.
pub fn display_classification(result: &Classification, threshold: f64) {
    println!("\nLabel: {}", colorize_label(result.label.as_str()));

    let Some(scores) = &result.scores else {
        println!("  {}", "No text to classify".dimmed());
        return;
    };

    println!("  Tokens: {}   Threshold: {}", result.token_count, threshold);
    println!(
        "  {:<20} {:>5}  {:>12}",
        "Category".dimmed(),
        "Raw".dimmed(),
        "Normalized".dimmed()
    );
    for category in Category::PRIORITY {
        println!(
            "  {:<20} {:>5}  {:>12.6}",
            category.name(),
            scores.raw(category),
            scores.normalized(category),
        );
    }
}

/// Article counts per label.
pub fn display_category_counts(counts: &[(String, i64)]) {
    if counts.is_empty() {
        println!("No articles stored yet. Run `newswire ingest` first.");
        return;
    }
    for (label, count) in counts {
        println!("  {:>6}  {}", count, colorize_label(label));
    }
}

/// A short list of stored articles, newest first.
pub fn display_articles(articles: &[StoredArticle]) {
    for article in articles {
        println!(
            "  {} {}",
            colorize_label(&article.category),
            truncate_chars(&article.title, 70).bold()
        );
        println!(
            "      {}  {}",
            article.published_date.as_deref().unwrap_or("date unknown").dimmed(),
            article.link.dimmed()
        );
    }
}
