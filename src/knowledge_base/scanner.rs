// file: src/knowledge_base/scanner.rs
// description: Directory walking and file discovery per knowledge base category
// reference: https://docs.rs/walkdir

use crate::config::KnowledgeBaseConfig;
use crate::error::{IngestError, Result};
use crate::knowledge_base::classifier::FileClassifier;
use crate::utils::Validator;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

pub struct KnowledgeBaseScanner {
    config: KnowledgeBaseConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub category: String,
    pub source: String,
}

impl KnowledgeBaseScanner {
    pub fn new(config: KnowledgeBaseConfig) -> Self {
        Self { config }
    }

    /// Lists every matching file below each immediate subdirectory of `root`.
    /// Files sitting directly in `root` belong to no category and are ignored.
    pub fn scan(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        Validator::validate_directory(root)?;

        let mut files = Vec::new();
        for (dir, category) in self.categories(root)? {
            debug!("Scanning category {}: {}", category, dir.display());
            self.scan_category(&dir, &category, &mut files)?;
        }

        Ok(files)
    }

    fn categories(&self, root: &Path) -> Result<Vec<(PathBuf, String)>> {
        let entries = fs::read_dir(root).map_err(|e| IngestError::io(root, e))?;
        let mut categories = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| IngestError::io(root, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| IngestError::io(&path, e))?;

            // a symlinked category is still a category; follow_links only governs its contents
            let is_dir = file_type.is_dir() || (file_type.is_symlink() && path.is_dir());
            if !is_dir {
                continue;
            }

            let category = FileClassifier::category_name(&path)?;
            categories.push((path, category));
        }

        if self.config.sort_entries {
            categories.sort_by(|a, b| a.1.cmp(&b.1));
        }

        Ok(categories)
    }

    fn scan_category(
        &self,
        dir: &Path,
        category: &str,
        files: &mut Vec<ScannedFile>,
    ) -> Result<()> {
        let mut walker = WalkDir::new(dir)
            .follow_root_links(true)
            .follow_links(self.config.follow_links);
        if self.config.sort_entries {
            walker = walker.sort_by_file_name();
        }

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(dir, e))?;

            if !is_regular_file(&entry) {
                continue;
            }

            let path = entry.path();
            if !Validator::has_extension(path, &self.config.extensions) {
                continue;
            }

            files.push(ScannedFile {
                path: path.to_path_buf(),
                category: category.to_string(),
                source: Validator::posix_source(path)?,
            });
        }

        Ok(())
    }
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn walk_error(dir: &Path, err: walkdir::Error) -> IngestError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf());

    let source = match err.into_io_error() {
        Some(source) => source,
        None => io::Error::other("filesystem loop detected"),
    };

    IngestError::io(path, source)
}
