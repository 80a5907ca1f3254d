// Feed retrieval: RSS/Atom over HTTP, plus the cleanup the classifier
// expects (plain-text descriptions, normalized publication dates).

pub mod client;
pub mod dates;
pub mod html;
pub mod parser;
pub mod traits;

/// The default feeds ingested when `NEWSWIRE_FEEDS` is unset.
pub const DEFAULT_FEEDS: [&str; 6] = [
    "http://rss.cnn.com/rss/cnn_topstories.rss",
    "http://qz.com/feed",
    "http://feeds.foxnews.com/foxnews/politics",
    "http://feeds.reuters.com/reuters/businessNews",
    "http://feeds.feedburner.com/NewshourWorld",
    "https://feeds.bbci.co.uk/news/world/asia/india/rss.xml",
];
