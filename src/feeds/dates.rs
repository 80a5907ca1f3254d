// Publication date normalization.
//
// Feeds mostly send RFC 2822 (RSS) or RFC 3339 (Atom), with the occasional
// bare timestamp. Anything unparseable becomes `None`; a bad date never
// stops an article from being stored.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d %b %Y %H:%M:%S"];

/// Parse a feed's publication date into UTC. Offsets are applied; dates
/// without one are taken as UTC.
pub fn parse_published(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    debug!(date = text, "Unrecognized publication date");
    None
}

/// The format dates are stored in.
pub fn to_db_string(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
