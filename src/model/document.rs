//! Document-level types.

use super::{Attributes, Block, Text};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A parsed document: the root of the block tree plus document attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document attributes (author, revision, toc, lang, ...)
    #[serde(default)]
    pub attributes: Attributes,

    /// Document title
    #[serde(default)]
    pub title: Option<Text>,

    /// Whether the source had a document header
    #[serde(default)]
    pub has_header: bool,

    /// Externally supplied metadata fragments
    #[serde(default)]
    pub docinfo: DocInfo,

    /// Top-level blocks
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a plain-text title, mark the header as present and return self.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(super::inline::text(title));
        self.has_header = true;
        self
    }

    /// Set a document attribute and return self.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Append a top-level block.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append a top-level block and return self.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Get a document attribute.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// Check if a document attribute is set.
    pub fn has_attr(&self, key: &str) -> bool {
        self.attributes.has(key)
    }

    /// Check if the document has any top-level blocks.
    pub fn has_blocks(&self) -> bool {
        !self.blocks.is_empty()
    }

    /// Whether title rendering is suppressed.
    pub fn notitle(&self) -> bool {
        self.has_attr("notitle") && !self.has_attr("showtitle")
    }

    /// Number of authors declared by the `authorcount` attribute.
    pub fn author_count(&self) -> usize {
        self.attr("authorcount")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Resolve an image target against the `imagesdir` attribute.
    ///
    /// URIs, data URIs and absolute paths are returned unchanged.
    pub fn image_uri(&self, target: &str) -> String {
        if is_uri(target) || target.starts_with('/') {
            return target.to_string();
        }
        match self.attr("imagesdir") {
            Some(dir) if !dir.is_empty() => {
                format!("{}/{}", dir.trim_end_matches('/'), target)
            }
            _ => target.to_string(),
        }
    }
}

/// Metadata fragments supplied by the document-info collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocInfo {
    /// Markup appended inside the info block
    #[serde(default)]
    pub header: String,

    /// Markup appended after the body
    #[serde(default)]
    pub footer: String,
}

fn is_uri(target: &str) -> bool {
    static URI_SNIFF: OnceLock<Regex> = OnceLock::new();
    let re = URI_SNIFF.get_or_init(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9.+-]+:").unwrap());
    re.is_match(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notitle() {
        let doc = Document::new().with_attr("notitle", "");
        assert!(doc.notitle());
        let shown = doc.with_attr("showtitle", "");
        assert!(!shown.notitle());
        assert!(!Document::new().notitle());
    }

    #[test]
    fn test_author_count() {
        assert_eq!(Document::new().author_count(), 0);
        assert_eq!(Document::new().with_attr("authorcount", "3").author_count(), 3);
        assert_eq!(Document::new().with_attr("authorcount", "x").author_count(), 0);
    }

    #[test]
    fn test_image_uri() {
        let doc = Document::new().with_attr("imagesdir", "figures/");
        assert_eq!(doc.image_uri("tux.png"), "figures/tux.png");
        assert_eq!(doc.image_uri("/abs/tux.png"), "/abs/tux.png");
        assert_eq!(
            doc.image_uri("https://example.org/tux.png"),
            "https://example.org/tux.png"
        );
        assert_eq!(doc.image_uri("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
        assert_eq!(Document::new().image_uri("tux.png"), "tux.png");
    }
}
