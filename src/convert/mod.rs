//! Backend registry providing interchangeable output converters.
//!
//! A converter turns a parsed [`Document`] into one output dialect. The
//! registry maps backend names and output file suffixes to converters so
//! drivers can dispatch on either.
//!
//! # Example
//!
//! ```
//! use mallard_backend::convert::ConverterRegistry;
//! use mallard_backend::{Block, Document, RenderOptions};
//!
//! fn main() -> mallard_backend::Result<()> {
//!     let registry = ConverterRegistry::with_defaults();
//!     let doc = Document::new().with_block(Block::paragraph("Hello"));
//!
//!     let result = registry.convert("mallard", &doc, &RenderOptions::new().embedded())?;
//!     assert_eq!(result.content, "<p>Hello</p>");
//!     Ok(())
//! }
//! ```

mod mallard;

pub use mallard::MallardConverter;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::{RenderOptions, RenderResult};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for output converters.
///
/// Implement this trait to add support for a new output dialect.
pub trait Converter: Send + Sync {
    /// Backend name (e.g. `mallard`).
    fn name(&self) -> &str;

    /// Suffix of output files, including the leading dot (e.g. `.page`).
    fn outfilesuffix(&self) -> &str;

    /// MIME type of the output.
    fn mime_type(&self) -> &str;

    /// Render a parsed document.
    fn convert(&self, doc: &Document, options: &RenderOptions) -> RenderResult;

    /// Render a document serialized as JSON.
    fn convert_json(&self, json: &str, options: &RenderOptions) -> Result<RenderResult> {
        let doc = crate::parse_json(json)?;
        Ok(self.convert(&doc, options))
    }
}

/// Registry for output converters.
pub struct ConverterRegistry {
    by_name: HashMap<String, Arc<dyn Converter>>,
    by_suffix: HashMap<String, Arc<dyn Converter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
            by_suffix: HashMap::new(),
        }
    }

    /// Create a registry with the default converters (Mallard).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(MallardConverter::new()));
        registry
    }

    /// Register a converter under its name and output suffix.
    ///
    /// A later registration replaces an earlier one with the same key.
    pub fn register(&mut self, converter: Arc<dyn Converter>) {
        self.by_suffix
            .insert(normalize_suffix(converter.outfilesuffix()), converter.clone());
        self.by_name
            .insert(converter.name().to_lowercase(), converter);
    }

    /// Get a converter by backend name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Converter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Get a converter by output file suffix, with or without the dot.
    pub fn get_by_suffix(&self, suffix: &str) -> Option<Arc<dyn Converter>> {
        self.by_suffix.get(&normalize_suffix(suffix)).cloned()
    }

    /// Get the converter producing the given output path.
    pub fn for_output(&self, path: &Path) -> Result<Arc<dyn Converter>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnknownFormat(path.display().to_string()))?;

        self.get_by_suffix(ext)
            .ok_or_else(|| Error::UnknownFormat(format!(".{}", ext)))
    }

    /// Check if a backend name is registered.
    pub fn supports(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    /// Get all registered backend names, sorted.
    pub fn backends(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Render a document with the named backend.
    pub fn convert(
        &self,
        backend: &str,
        doc: &Document,
        options: &RenderOptions,
    ) -> Result<RenderResult> {
        let converter = self
            .get(backend)
            .ok_or_else(|| Error::UnknownBackend(backend.to_string()))?;

        Ok(converter.convert(doc, options))
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn normalize_suffix(suffix: &str) -> String {
    format!(".{}", suffix.trim_start_matches('.').to_lowercase())
}
