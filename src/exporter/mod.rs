// file: src/exporter/mod.rs
// description: corpus export module exports
// reference: internal module structure

pub mod json;

pub use json::{ExportManifest, ExportedDocument, JsonExporter};
