// Newswire: RSS news ingestion with keyword/n-gram topic classification.
//
// This is the library root. Each module corresponds to a stage of the
// ingest pipeline; `classify` is usable on its own.

pub mod classify;
pub mod config;
pub mod db;
pub mod feeds;
pub mod output;
pub mod pipeline;
pub mod status;
