// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod corpus;
pub mod document;

pub use corpus::{Corpus, CorpusStats};
pub use document::Document;
