// file: src/knowledge_base/mod.rs
// description: knowledge base ingestion module exports
// reference: internal module structure

pub mod classifier;
pub mod index;
pub mod loader;
pub mod scanner;

pub use classifier::FileClassifier;
pub use index::ProfileIndex;
pub use loader::{KnowledgeBaseLoader, fetch_documents};
pub use scanner::{KnowledgeBaseScanner, ScannedFile};
