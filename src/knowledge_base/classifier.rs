// file: src/knowledge_base/classifier.rs
// description: category and profile-key extraction from knowledge base paths
// reference: directory-name based classification

use crate::error::{IngestError, Result};
use std::path::Path;

pub struct FileClassifier;

impl FileClassifier {
    /// Category label of a top-level knowledge base directory: its own name.
    pub fn category_name(dir: &Path) -> Result<String> {
        let name = dir
            .file_name()
            .ok_or_else(|| IngestError::decode(dir, "category directory has no name"))?;

        name.to_str()
            .map(str::to_string)
            .ok_or_else(|| IngestError::decode(dir, "category name is not valid UTF-8"))
    }

    /// Lookup key for a profile file: the last word of the file stem, lowercased.
    /// `employees/Alex Chen.md` is keyed as `chen`.
    pub fn profile_key(path: &Path) -> Option<String> {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.split_whitespace().last())
            .map(str::to_lowercase)
    }
}
