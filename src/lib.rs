//! # mallard-backend
//!
//! Mallard output for parsed AsciiDoc documents.
//!
//! This library takes an already parsed document tree and renders it as
//! [Mallard](http://projectmallard.org/), the topic-oriented XML dialect used
//! by GNOME help `.page` files.
//!
//! ## Quick Start
//!
//! ```
//! use mallard_backend::{Block, Document, ListItem, RenderOptions};
//!
//! let doc = Document::new()
//!     .with_title("Getting Started")
//!     .with_block(Block::paragraph("Welcome."))
//!     .with_block(Block::ordered_list(vec![
//!         ListItem::new("Install"),
//!         ListItem::new("Run"),
//!     ]));
//!
//! let page = mallard_backend::to_mallard(&doc, &RenderOptions::default());
//! assert!(page.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
//! assert!(page.contains("<title>Getting Started</title>"));
//! ```
//!
//! ## Features
//!
//! - **Complete block coverage**: sections, admonitions, lists, tables, quotes,
//!   listings, images and more
//! - **Inline markup**: quoted spans, keyboard shortcuts, menus, footnotes
//! - **Diagnostics**: non-fatal warnings returned alongside the output
//! - **JSON input**: documents can be handed over as serialized trees

pub mod convert;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use convert::{Converter, ConverterRegistry, MallardConverter};
pub use error::{Error, Result};
pub use model::{
    Attributes, Block, BlockKind, CellStyle, Content, DescriptionEntry, DocInfo, Document,
    FootnoteKind, Inline, InlineImage, ListItem, Table, TableCell, TableRow, TableSection, Text,
};
pub use render::{RenderOptions, RenderResult, RenderStats, RenderWarning};

use std::io::Read;
use std::path::Path;

/// Decode a document serialized as JSON.
///
/// The top-level value must be a JSON object.
///
/// # Example
///
/// ```
/// let doc = mallard_backend::parse_json(r#"{"blocks": []}"#).unwrap();
/// assert!(!doc.has_blocks());
/// assert!(mallard_backend::parse_json("[]").is_err());
/// ```
pub fn parse_json(json: &str) -> Result<Document> {
    match json.trim_start().chars().next() {
        Some('{') | None => Ok(serde_json::from_str(json)?),
        Some(_) => Err(Error::Json(serde::de::Error::custom(
            "expected a JSON object at the top level",
        ))),
    }
}

/// Decode a JSON document from a file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = std::fs::read_to_string(path)?;
    parse_json(&json)
}

/// Decode a JSON document from a reader.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Document> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    parse_json(&json)
}

/// Render a document to a Mallard string.
pub fn to_mallard(doc: &Document, options: &RenderOptions) -> String {
    render::to_mallard(doc, options)
}

/// Render a document, returning the output with any warnings.
pub fn render(doc: &Document, options: &RenderOptions) -> RenderResult {
    render::render(doc, options)
}

/// Decode a JSON document and render it.
///
/// # Example
///
/// ```
/// use mallard_backend::RenderOptions;
///
/// let json = r#"{"blocks": [{"type": "thematic_break"}]}"#;
/// let result = mallard_backend::convert_json(json, &RenderOptions::new().embedded())?;
/// assert_eq!(result.content, "<p><?asciidoc-hr?></p>");
/// # Ok::<(), mallard_backend::Error>(())
/// ```
pub fn convert_json(json: &str, options: &RenderOptions) -> Result<RenderResult> {
    let doc = parse_json(json)?;
    Ok(render::render(&doc, options))
}

/// Builder for rendering documents.
///
/// # Example
///
/// ```no_run
/// use mallard_backend::Mallard;
///
/// let result = Mallard::new()
///     .embedded()
///     .with_stats()
///     .render_file("document.json")?;
/// println!("{}", result.content);
/// # Ok::<(), mallard_backend::Error>(())
/// ```
pub struct Mallard {
    render_options: RenderOptions,
}

impl Mallard {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Render only the body, without the page envelope.
    pub fn embedded(mut self) -> Self {
        self.render_options = self.render_options.embedded();
        self
    }

    /// Omit checklist glyphs.
    pub fn without_checklist_markers(mut self) -> Self {
        self.render_options = self.render_options.with_checklist_markers(false);
        self
    }

    /// Collect node statistics.
    pub fn with_stats(mut self) -> Self {
        self.render_options = self.render_options.with_stats(true);
        self
    }

    /// The options this builder renders with.
    pub fn options(&self) -> &RenderOptions {
        &self.render_options
    }

    /// Render a parsed document.
    pub fn render(&self, doc: &Document) -> RenderResult {
        render::render(doc, &self.render_options)
    }

    /// Decode and render a JSON document.
    pub fn render_json(&self, json: &str) -> Result<RenderResult> {
        convert_json(json, &self.render_options)
    }

    /// Decode and render a JSON document file.
    pub fn render_file<P: AsRef<Path>>(&self, path: P) -> Result<RenderResult> {
        let doc = parse_file(path)?;
        Ok(self.render(&doc))
    }
}

impl Default for Mallard {
    fn default() -> Self {
        Self::new()
    }
}
