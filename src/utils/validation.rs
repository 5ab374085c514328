// file: src/utils/validation.rs
// description: path validation and normalization helpers
// reference: input validation patterns

use crate::error::{IngestError, Result};
use std::ffi::OsStr;
use std::path::{Component, Path};

pub struct Validator;

impl Validator {
    /// The knowledge-base root has to exist and be a directory before a walk starts.
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(IngestError::Configuration(format!(
                "Knowledge base root does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(IngestError::Configuration(format!(
                "Knowledge base root is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) => extensions.iter().any(|allowed| allowed == ext),
            None => false,
        }
    }

    /// Renders a path with `/` separators, dropping `.` components and
    /// redundant separators, so the same tree always yields the same string.
    pub fn posix_source(path: &Path) -> Result<String> {
        let mut prefix = String::new();
        let mut parts: Vec<&str> = Vec::new();

        for component in path.components() {
            match component {
                Component::Prefix(p) => prefix.push_str(Self::utf8(path, p.as_os_str())?),
                Component::RootDir => prefix.push('/'),
                Component::CurDir => {}
                Component::ParentDir => parts.push(".."),
                Component::Normal(name) => parts.push(Self::utf8(path, name)?),
            }
        }

        let joined = format!("{}{}", prefix, parts.join("/"));
        if joined.is_empty() {
            Ok(".".to_string())
        } else {
            Ok(joined)
        }
    }

    fn utf8<'a>(path: &Path, part: &'a OsStr) -> Result<&'a str> {
        part.to_str()
            .ok_or_else(|| IngestError::decode(path, "path is not valid UTF-8"))
    }
}
