use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use newswire::classify::keyword::KeywordClassifier;
use newswire::classify::traits::ArticleClassifier;
use newswire::config::{self, Config};
use newswire::db::{self, Database, SqliteDatabase};
use newswire::feeds::client::FeedClient;
use newswire::output::terminal;
use newswire::pipeline::ingest::{self, IngestOptions};

/// Newswire: fetch news feeds, classify every article by topic, store the results.
#[derive(Parser)]
#[command(name = "newswire", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database
    Init,

    /// Fetch all configured feeds, classify new articles and store them
    Ingest {
        /// Feeds fetched at once (default: NEWSWIRE_CONCURRENCY or 4)
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Classify a piece of text against the loaded corpus
    Classify {
        /// The text to classify
        text: String,

        /// Override the score threshold (default: NEWSWIRE_THRESHOLD or 0.0003)
        #[arg(long, value_parser = config::parse_threshold)]
        threshold: Option<f64>,

        /// Show per-category scores
        #[arg(long)]
        explain: bool,

        /// Print the full result as JSON
        #[arg(long, conflicts_with = "explain")]
        json: bool,
    },

    /// Show database stats, label breakdown and feed health
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("newswire=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Init => {
            info!("Initializing newswire database...");
            let db = SqliteDatabase::new(db::initialize(&config.db_path)?);
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nNext: run `newswire ingest`");
        }

        Commands::Ingest { concurrency } => {
            config.require_corpus()?;
            config.require_feeds()?;

            let classifier = KeywordClassifier::load(&config.corpus_paths(), config.threshold)?;
            let db = SqliteDatabase::new(db::initialize(&config.db_path)?);
            let client = FeedClient::new(Duration::from_secs(config.fetch_timeout_secs))?;

            let options = IngestOptions {
                concurrency: concurrency.unwrap_or(config.concurrency),
                show_progress: true,
            };

            println!("Ingesting {} feeds...", config.feeds.len());
            let summary =
                ingest::run(&client, &classifier, &db, &config.feeds, &options).await?;
            terminal::display_ingest_summary(&summary);
            info!("Data from feeds recorded in the database");
        }

        Commands::Classify {
            text,
            threshold,
            explain,
            json,
        } => {
            config.require_corpus()?;
            let threshold = threshold.unwrap_or(config.threshold);
            let classifier = KeywordClassifier::load(&config.corpus_paths(), threshold)?;

            if json {
                let result = classifier.explain(Some(&text));
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if explain {
                let result = classifier.explain(Some(&text));
                terminal::display_classification(&result, threshold);
            } else {
                let label = classifier.classify(Some(&text));
                println!("{}", terminal::colorize_label(label.as_str()));
            }
        }

        Commands::Status => {
            if !newswire::status::database_present(&config.db_path) {
                println!("Database: not initialized");
                println!("\nRun `newswire init` to set up the database.");
                return Ok(());
            }
            let db = SqliteDatabase::new(db::open(&config.db_path)?);
            newswire::status::show(&db, &config.db_path).await?;
            println!(
                "\n{}",
                format!("Threshold: {}  Corpus: {}", config.threshold, config.corpus_dir.display())
                    .dimmed()
            );
        }
    }

    Ok(())
}
