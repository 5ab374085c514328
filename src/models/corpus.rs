// file: src/models/corpus.rs
// description: ordered document collection produced by one ingestion run
// reference: internal data structures

use super::document::Document;
use serde::Serialize;
use std::collections::BTreeMap;

/// The documents of a single load, in traversal order.
///
/// Order reflects how the filesystem was walked and is only meaningful for
/// display; compare corpora as sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    documents: Vec<Document>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub documents: usize,
    pub categories: BTreeMap<String, usize>,
    pub total_bytes: u64,
    pub empty_documents: usize,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }

    pub fn of_type<'a>(&'a self, doc_type: &'a str) -> impl Iterator<Item = &'a Document> + 'a {
        self.documents
            .iter()
            .filter(move |doc| doc.doc_type == doc_type)
    }

    pub fn find_by_source(&self, source: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.source == source)
    }

    /// Document count per category, ordered by category name.
    pub fn categories(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for doc in &self.documents {
            *counts.entry(doc.doc_type.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            documents: self.documents.len(),
            categories: self.categories(),
            total_bytes: self.documents.iter().map(Document::byte_len).sum(),
            empty_documents: self.documents.iter().filter(|d| d.text.is_empty()).count(),
        }
    }
}

impl From<Vec<Document>> for Corpus {
    fn from(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

impl IntoIterator for Corpus {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
