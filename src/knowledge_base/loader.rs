// file: src/knowledge_base/loader.rs
// description: materializes the knowledge base directory tree into a corpus
// reference: all-or-nothing ingestion over the category scanner

use crate::config::KnowledgeBaseConfig;
use crate::error::{IngestError, Result};
use crate::knowledge_base::scanner::{KnowledgeBaseScanner, ScannedFile};
use crate::models::{Corpus, Document};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Reads every matching file under the knowledge base root into a [`Corpus`].
///
/// Each call walks the tree from scratch and holds nothing afterwards. The
/// first unreadable or non-UTF-8 file aborts the whole load, so callers never
/// see a partial corpus.
pub struct KnowledgeBaseLoader {
    config: KnowledgeBaseConfig,
}

impl KnowledgeBaseLoader {
    pub fn new(config: KnowledgeBaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KnowledgeBaseConfig {
        &self.config
    }

    /// Loads from the configured root.
    pub fn load(&self) -> Result<Corpus> {
        self.load_from(&self.config.root)
    }

    pub fn load_from(&self, root: &Path) -> Result<Corpus> {
        self.config.validate()?;
        info!("Loading knowledge base from {}", root.display());

        let scanner = KnowledgeBaseScanner::new(self.config.clone());
        let files = scanner.scan(root)?;

        let mut documents = Vec::with_capacity(files.len());
        for file in files {
            documents.push(read_document(file)?);
        }

        let corpus = Corpus::from(documents);
        info!("Loaded {} documents", corpus.len());
        Ok(corpus)
    }
}

impl Default for KnowledgeBaseLoader {
    fn default() -> Self {
        Self::new(KnowledgeBaseConfig::default())
    }
}

/// Loads `root` with the default settings: `.md` files, unsorted, symlinked
/// directories below a category left unfollowed.
pub fn fetch_documents(root: impl AsRef<Path>) -> Result<Corpus> {
    let root = root.as_ref();
    KnowledgeBaseLoader::new(KnowledgeBaseConfig::with_root(root)).load_from(root)
}

fn read_document(file: ScannedFile) -> Result<Document> {
    let bytes = fs::read(&file.path).map_err(|e| IngestError::io(&file.path, e))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| IngestError::decode(&file.path, e.utf8_error().to_string()))?;

    debug!("Read {} ({} bytes)", file.source, text.len());
    Ok(Document::new(file.category, file.source, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Validator;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &[u8]) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "products/a.md", b"Hello");
        write(temp.path(), "employees/b.md", b"World");
        temp
    }

    fn as_set(corpus: &Corpus) -> HashSet<Document> {
        corpus.iter().cloned().collect()
    }

    #[test]
    fn test_two_category_fixture() {
        let temp = fixture();
        let root = Validator::posix_source(temp.path()).unwrap();
        let corpus = fetch_documents(temp.path()).unwrap();

        let expected: HashSet<Document> = [
            Document::new("products", format!("{}/products/a.md", root), "Hello"),
            Document::new("employees", format!("{}/employees/b.md", root), "World"),
        ]
        .into_iter()
        .collect();

        assert_eq!(corpus.len(), 2);
        assert_eq!(as_set(&corpus), expected);
    }

    #[test]
    fn test_count_matches_filtered_files() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "products/a.md", b"a");
        write(temp.path(), "products/deep/er/b.md", b"b");
        write(temp.path(), "products/c.txt", b"c");
        write(temp.path(), "company/about.md", b"about");
        write(temp.path(), "company/logo.png", &[0x89, 0x50, 0x4e, 0x47]);
        write(temp.path(), "README.md", b"root level");

        let corpus = fetch_documents(temp.path()).unwrap();
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_sources_unique_and_type_is_top_level() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "contracts/2024/acme.md", b"acme");
        write(temp.path(), "contracts/2025/acme.md", b"acme again");
        write(temp.path(), "contracts/acme.md", b"acme root");
        write(temp.path(), "employees/products/x.md", b"nested name clash");

        let corpus = fetch_documents(temp.path()).unwrap();
        let sources: HashSet<&str> = corpus.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(sources.len(), corpus.len());

        let root = Validator::posix_source(temp.path()).unwrap();
        for doc in &corpus {
            let relative = doc.source.strip_prefix(&format!("{}/", root)).unwrap();
            let top = relative.split('/').next().unwrap();
            assert_eq!(doc.doc_type, top);
        }
        assert_eq!(corpus.of_type("employees").count(), 1);
        assert_eq!(corpus.of_type("products").count(), 0);
    }

    #[test]
    fn test_loading_twice_yields_same_set() {
        let temp = fixture();
        write(temp.path(), "company/history/founding.md", b"1990");

        let loader = KnowledgeBaseLoader::default();
        let first = loader.load_from(temp.path()).unwrap();
        let second = loader.load_from(temp.path()).unwrap();

        assert_eq!(as_set(&first), as_set(&second));
    }

    #[test]
    fn test_empty_root_yields_empty_corpus() {
        let temp = TempDir::new().unwrap();
        let corpus = fetch_documents(temp.path()).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_empty_file_is_a_document() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "products/blank.md", b"");

        let corpus = fetch_documents(temp.path()).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.documents()[0].text, "");
    }

    #[test]
    fn test_invalid_utf8_fails_the_load() {
        let temp = fixture();
        write(temp.path(), "products/broken.md", &[0x48, 0x69, 0xff, 0xfe]);

        let err = fetch_documents(temp.path()).unwrap_err();
        match err {
            IngestError::Decode { path, .. } => assert!(path.ends_with("products/broken.md")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_root_is_configuration_error() {
        let temp = TempDir::new().unwrap();
        let result = fetch_documents(temp.path().join("knowledge-base"));
        assert!(matches!(result, Err(IngestError::Configuration(_))));
    }

    #[test]
    fn test_root_that_is_a_file_is_configuration_error() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "kb.md", b"not a directory");

        let result = fetch_documents(temp.path().join("kb.md"));
        assert!(matches!(result, Err(IngestError::Configuration(_))));
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let file = ScannedFile {
            path: temp.path().join("employees/gone.md"),
            category: "employees".to_string(),
            source: "kb/employees/gone.md".to_string(),
        };

        let err = read_document(file).unwrap_err();
        match err {
            IngestError::Io { path, source } => {
                assert!(path.ends_with("employees/gone.md"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_uses_configured_root() {
        let temp = fixture();
        let loader = KnowledgeBaseLoader::new(KnowledgeBaseConfig {
            sort_entries: true,
            ..KnowledgeBaseConfig::with_root(temp.path())
        });

        let corpus = loader.load().unwrap();
        let types: Vec<&str> = corpus.iter().map(|d| d.doc_type.as_str()).collect();
        assert_eq!(types, vec!["employees", "products"]);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_walk() {
        let temp = fixture();
        let loader = KnowledgeBaseLoader::new(KnowledgeBaseConfig {
            extensions: vec![],
            ..KnowledgeBaseConfig::with_root(temp.path())
        });

        assert!(matches!(
            loader.load(),
            Err(IngestError::Configuration(_))
        ));
    }
}
