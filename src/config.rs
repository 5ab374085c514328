// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{IngestError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "KB_INGEST";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub knowledge_base: KnowledgeBaseConfig,
    pub lookup: LookupConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KnowledgeBaseConfig {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub follow_links: bool,
    pub sort_entries: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LookupConfig {
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub pretty: bool,
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("knowledge-base"),
            extensions: vec!["md".to_string()],
            follow_links: false,
            sort_entries: false,
        }
    }
}

impl KnowledgeBaseConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(IngestError::Configuration(
                "knowledge_base.root must not be empty".to_string(),
            ));
        }

        if self.extensions.is_empty() {
            return Err(IngestError::Configuration(
                "knowledge_base.extensions must list at least one extension".to_string(),
            ));
        }

        for extension in &self.extensions {
            if extension.is_empty() || extension.starts_with('.') {
                return Err(IngestError::Configuration(format!(
                    "invalid extension {:?}: use the bare extension, e.g. \"md\"",
                    extension
                )));
            }
        }

        Ok(())
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            category: "employees".to_string(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./exports"),
            pretty: true,
        }
    }
}

impl Config {
    /// Loads `path`, or the optional default file when `path` is `None`, with
    /// `KB_INGEST__SECTION__KEY` environment variables layered on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::from_sources(path, None)
    }

    fn from_sources(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path),
            None => config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(Self::environment(env))
            .build()
            .map_err(|e| IngestError::Configuration(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| IngestError::Configuration(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn environment(vars: Option<HashMap<String, String>>) -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("knowledge_base.extensions")
            .source(vars)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        self.knowledge_base.validate()?;

        if self.lookup.category.trim().is_empty() {
            return Err(IngestError::Configuration(
                "lookup.category must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
