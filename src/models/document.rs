// file: src/models/document.rs
// description: core document model with hashing and serialization
// reference: internal data structures

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One ingested markdown file.
///
/// `doc_type` is the name of the top-level knowledge-base directory the file
/// lives under, `source` is its forward-slash path and `text` is the full
/// UTF-8 content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub source: String,
    pub text: String,
}

impl Document {
    pub fn new(
        doc_type: impl Into<String>,
        source: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            doc_type: doc_type.into(),
            source: source.into(),
            text: text.into(),
        }
    }

    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn byte_len(&self) -> u64 {
        self.text.len() as u64
    }
}
