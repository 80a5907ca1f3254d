// Pipelines: the end-to-end workflows built from the library pieces.

pub mod ingest;
