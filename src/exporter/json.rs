// file: src/exporter/json.rs
// description: json export of a loaded corpus with a manifest

use crate::error::{IngestError, Result};
use crate::models::{Corpus, Document};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CORPUS_FILE: &str = "corpus.json";
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportedDocument {
    pub source: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub sha256: String,
    pub bytes: u64,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_documents: usize,
    pub categories: BTreeMap<String, usize>,
    pub documents: Vec<ExportedDocument>,
}

impl From<&Document> for ExportedDocument {
    fn from(doc: &Document) -> Self {
        Self {
            source: doc.source.clone(),
            doc_type: doc.doc_type.clone(),
            sha256: doc.content_hash(),
            bytes: doc.byte_len(),
        }
    }
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|e| IngestError::io(&output_dir, e))?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn export(&self, corpus: &Corpus, pretty: bool) -> Result<ExportManifest> {
        info!("Starting JSON export to {}", self.output_dir.display());

        self.write_json(CORPUS_FILE, corpus, pretty)?;

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_documents: corpus.len(),
            categories: corpus.categories(),
            documents: corpus.iter().map(ExportedDocument::from).collect(),
        };
        self.write_json(MANIFEST_FILE, &manifest, pretty)?;

        info!(
            "Export complete: {} documents exported",
            manifest.total_documents
        );
        Ok(manifest)
    }

    fn write_json<T: Serialize>(&self, file_name: &str, value: &T, pretty: bool) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        let path = self.output_dir.join(file_name);
        fs::write(&path, json).map_err(|e| IngestError::io(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("nested/exports"));
        assert!(exporter.is_ok());
        assert!(dir.path().join("nested/exports").is_dir());
    }

    #[test]
    fn test_export_writes_corpus_and_manifest() {
        let dir = tempdir().unwrap();
        let corpus = Corpus::from(vec![
            Document::new("products", "kb/products/a.md", "Hello"),
            Document::new("employees", "kb/employees/b.md", "World"),
        ]);

        let exporter = JsonExporter::new(dir.path()).unwrap();
        let manifest = exporter.export(&corpus, true).unwrap();

        assert_eq!(manifest.total_documents, 2);
        assert_eq!(manifest.categories.get("products"), Some(&1));
        assert_eq!(manifest.documents[1].bytes, 5);

        let written = fs::read_to_string(dir.path().join(CORPUS_FILE)).unwrap();
        let documents: Vec<Document> = serde_json::from_str(&written).unwrap();
        assert_eq!(documents, corpus.into_documents());

        let manifest_json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap())
                .unwrap();
        assert_eq!(manifest_json["total_documents"], 2);
        assert_eq!(manifest_json["documents"][0]["type"], "products");
        assert_eq!(
            manifest_json["documents"][0]["sha256"].as_str().map(str::len),
            Some(64)
        );
    }

    #[test]
    fn test_export_empty_corpus() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();
        let manifest = exporter.export(&Corpus::new(), false).unwrap();

        assert_eq!(manifest.total_documents, 0);
        assert_eq!(
            fs::read_to_string(dir.path().join(CORPUS_FILE)).unwrap(),
            "[]"
        );
    }
}
