// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod knowledge_base;
pub mod models;
pub mod utils;

pub use config::{Config, ExportConfig, KnowledgeBaseConfig, LookupConfig};
pub use error::{IngestError, Result};
pub use exporter::{ExportManifest, ExportedDocument, JsonExporter};
pub use knowledge_base::{
    FileClassifier, KnowledgeBaseLoader, KnowledgeBaseScanner, ProfileIndex, ScannedFile,
    fetch_documents,
};
pub use models::{Corpus, CorpusStats, Document};
pub use utils::{LoadSpinner, Validator};
