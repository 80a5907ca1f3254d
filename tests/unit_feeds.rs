// Unit tests for feed handling: parsing, HTML cleanup and date
// normalization, plus how they combine into a stored article.

use newswire::classify::category::Label;
use newswire::classify::traits::{ArticleClassifier, Classification};
use newswire::feeds::dates::{parse_published, to_db_string};
use newswire::feeds::html::HtmlCleaner;
use newswire::feeds::parser::parse_feed;
use newswire::feeds::traits::FeedEntry;
use newswire::pipeline::ingest::{prepare_article, MISSING};

/// Labels everything `Others`, but records nothing; enough for field tests.
struct AlwaysOthers;

impl ArticleClassifier for AlwaysOthers {
    fn explain(&self, text: Option<&str>) -> Classification {
        let label = match text {
            None | Some("") => Label::NotApplicable,
            Some(_) => Label::Others,
        };
        Classification {
            label,
            scores: None,
            token_count: 0,
        }
    }
}

// ============================================================
// Parser
// ============================================================

#[test]
fn rdf_feed_items_are_parsed() {
    let rdf = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns="http://purl.org/rss/1.0/"
         xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel><title>Wire</title></channel>
  <item>
    <title>Storm makes landfall</title>
    <link>https://wire.example/storm</link>
    <description>Winds topped 200 km/h.</description>
    <dc:date>2024-09-10T08:30:00Z</dc:date>
  </item>
</rdf:RDF>"#;
    let entries = parse_feed(rdf.as_bytes()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title.as_deref(), Some("Storm makes landfall"));
    assert_eq!(entries[0].published.as_deref(), Some("2024-09-10T08:30:00Z"));
}

#[test]
fn entries_keep_document_order() {
    let rss = "<rss><channel>\
        <item><link>https://x/1</link></item>\
        <item><link>https://x/2</link></item>\
        <item><link>https://x/3</link></item>\
        </channel></rss>";
    let links: Vec<_> = parse_feed(rss.as_bytes())
        .unwrap()
        .into_iter()
        .filter_map(|e| e.link)
        .collect();
    assert_eq!(links, vec!["https://x/1", "https://x/2", "https://x/3"]);
}

#[test]
fn feed_without_items_is_empty_not_error() {
    let rss = "<rss><channel><title>Quiet day</title></channel></rss>";
    assert!(parse_feed(rss.as_bytes()).unwrap().is_empty());
}

#[test]
fn html_entities_in_text_do_not_reject_feed() {
    let rss = "<rss><channel><item><title>Hello&nbsp;world</title></item></channel></rss>";
    let entries = parse_feed(rss.as_bytes()).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].title.as_deref().unwrap().contains("world"));
}

#[test]
fn empty_body_is_rejected() {
    assert!(parse_feed(b"").is_err());
}

// ============================================================
// HTML cleanup
// ============================================================

#[test]
fn cleaner_strips_nested_markup() {
    let cleaner = HtmlCleaner::new().unwrap();
    assert_eq!(
        cleaner.clean(r#"<div class="x"><a href="/y">Read <em>more</em></a></div>"#),
        "Read more"
    );
}

#[test]
fn cleaner_decodes_escaped_quotes() {
    let cleaner = HtmlCleaner::new().unwrap();
    assert_eq!(cleaner.clean("&quot;Calm&quot; returns"), "\"Calm\" returns");
}

// ============================================================
// Dates
// ============================================================

#[test]
fn dates_normalize_to_utc_storage_format() {
    let dt = parse_published("Mon, 02 Dec 2024 23:15:00 -0300").unwrap();
    assert_eq!(to_db_string(&dt), "2024-12-03 02:15:00");
}

#[test]
fn unparseable_dates_are_none() {
    assert!(parse_published("sometime last week").is_none());
    assert!(parse_published(MISSING).is_none());
}

// ============================================================
// Entry -> article
// ============================================================

#[test]
fn parsed_entry_becomes_clean_article() {
    let rss = r#"<rss><channel><item>
        <title>Quake</title>
        <link>https://x/quake</link>
        <description>&lt;p&gt;Buildings &lt;b&gt;shook&lt;/b&gt;&lt;/p&gt;</description>
        <pubDate>Tue, 10 Sep 2024 08:30:00 GMT</pubDate>
    </item></channel></rss>"#;
    let entries = parse_feed(rss.as_bytes()).unwrap();
    let cleaner = HtmlCleaner::new().unwrap();
    let article = prepare_article(&entries[0], "https://x/rss", &cleaner, &AlwaysOthers);

    assert_eq!(article.title, "Quake");
    assert_eq!(article.link, "https://x/quake");
    assert_eq!(article.description, "Buildings shook");
    assert_eq!(article.published_date.as_deref(), Some("2024-09-10 08:30:00"));
    assert_eq!(article.category, "Others");
}

#[test]
fn bad_date_still_produces_article() {
    let entry = FeedEntry {
        title: Some("t".to_string()),
        link: Some("https://x/1".to_string()),
        description: Some("text".to_string()),
        published: Some("not a date".to_string()),
    };
    let cleaner = HtmlCleaner::new().unwrap();
    let article = prepare_article(&entry, "https://x/rss", &cleaner, &AlwaysOthers);
    assert_eq!(article.published_date, None);
    assert_eq!(article.link, "https://x/1");
}
