// HTML-to-text for feed descriptions.
//
// Feed descriptions are HTML fragments. The classifier only wants the words,
// so tags go and entities get decoded one at a time. A stray `&` or an
// unknown entity is left as-is; the tokenizer drops the punctuation anyway.

use anyhow::{Context, Result};
use quick_xml::escape::resolve_html5_entity;
use regex_lite::{Captures, Regex};

#[derive(Debug, Clone)]
pub struct HtmlCleaner {
    tags: Regex,
    entities: Regex,
}

impl HtmlCleaner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tags: Regex::new(r"<[^>]*>").context("Failed to compile tag pattern")?,
            entities: Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});")
                .context("Failed to compile entity pattern")?,
        })
    }

    /// Plain text of an HTML fragment.
    pub fn clean(&self, html: &str) -> String {
        let text = self.tags.replace_all(html, "");
        self.entities
            .replace_all(&text, |caps: &Captures<'_>| {
                decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Decode one entity body (the part between `&` and `;`).
fn decode_entity(body: &str) -> Option<String> {
    if let Some(number) = body.strip_prefix('#') {
        let code = match number.strip_prefix('x').or_else(|| number.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }
    resolve_html5_entity(body).map(str::to_string)
}
