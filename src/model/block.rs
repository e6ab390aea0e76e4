//! Block-level node types.

use super::{inline, Attributes, DescriptionEntry, ListItem, Table, Text};
use serde::{Deserialize, Serialize};

/// A block node: fields common to every variant plus the variant itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Stable identifier
    #[serde(default)]
    pub id: Option<String>,

    /// Block title
    #[serde(default)]
    pub title: Option<Text>,

    /// Declared style (e.g. `source`, `abstract`, `loweralpha`, `qanda`)
    #[serde(default)]
    pub style: Option<String>,

    /// Resolved block attributes
    #[serde(default)]
    pub attributes: Attributes,

    /// Variant-specific payload
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    /// Create a block of the given kind with no common properties set.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: None,
            title: None,
            style: None,
            attributes: Attributes::new(),
            kind,
        }
    }

    /// Create a paragraph with plain text.
    pub fn paragraph(value: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph {
            text: inline::text(value),
        })
    }

    /// Create a paragraph with inline content.
    pub fn paragraph_text(text: Text) -> Self {
        Self::new(BlockKind::Paragraph { text })
    }

    /// Create a section.
    pub fn section(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self::new(BlockKind::Section { level: 1, blocks }).with_title(title)
    }

    /// Create an ordered list.
    pub fn ordered_list(items: Vec<ListItem>) -> Self {
        Self::new(BlockKind::OrderedList { items })
    }

    /// Create an unordered list.
    pub fn unordered_list(items: Vec<ListItem>) -> Self {
        Self::new(BlockKind::UnorderedList { items })
    }

    /// Create a description list.
    pub fn description_list(items: Vec<DescriptionEntry>) -> Self {
        Self::new(BlockKind::DescriptionList { items })
    }

    /// Create a table.
    pub fn table(table: Table) -> Self {
        Self::new(BlockKind::Table(table))
    }

    /// Create a listing block.
    pub fn listing(source: impl Into<String>) -> Self {
        Self::new(BlockKind::Listing {
            source: source.into(),
        })
    }

    /// Create an image block.
    pub fn image(target: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::new(BlockKind::Image {
            target: target.into(),
            alt: alt.into(),
        })
    }

    /// Set the identifier and return self.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set a plain-text title and return self.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(inline::text(title));
        self
    }

    /// Set an inline-content title and return self.
    pub fn with_title_text(mut self, title: Text) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the style and return self.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set an attribute and return self.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Enable a block option (stored as the `<name>-option` attribute).
    pub fn with_option(self, name: &str) -> Self {
        self.with_attr(format!("{}-option", name), "")
    }

    /// Check if the block has a non-empty title.
    pub fn has_title(&self) -> bool {
        self.title.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Get an attribute value.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// Check if an attribute is set.
    pub fn has_attr(&self, key: &str) -> bool {
        self.attributes.has(key)
    }

    /// Check if a block option is enabled.
    pub fn has_option(&self, name: &str) -> bool {
        self.attributes.has(&format!("{}-option", name))
    }

    /// The declared style, if any.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }
}

/// Block variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// A titled section
    Section {
        /// Section level (0 = part)
        #[serde(default)]
        level: u8,
        /// Child blocks
        #[serde(default)]
        blocks: Vec<Block>,
    },

    /// NOTE, TIP, WARNING, ...
    Admonition {
        /// Admonition name (lowercase kind)
        name: String,
        /// Body
        content: Content,
    },

    /// Description (labeled, qanda, glossary, horizontal) list
    DescriptionList {
        /// Term/definition pairs
        items: Vec<DescriptionEntry>,
    },

    /// Ordered list
    OrderedList {
        /// Items in order
        items: Vec<ListItem>,
    },

    /// Unordered list (optionally a checklist)
    UnorderedList {
        /// Items in order
        items: Vec<ListItem>,
    },

    /// Table
    Table(Table),

    /// Quote block
    Quote {
        /// Body
        content: Content,
    },

    /// Verse block
    Verse {
        /// Body
        content: Content,
    },

    /// Open block (`--`), including abstract and partintro
    Open {
        /// Body
        content: Content,
    },

    /// Example block
    Example {
        /// Body
        content: Content,
    },

    /// Sidebar block
    Sidebar {
        /// Body
        content: Content,
    },

    /// Block image
    Image {
        /// Image target (path or URI)
        target: String,
        /// Alternative text
        #[serde(default)]
        alt: String,
    },

    /// Listing or source block
    Listing {
        /// Verbatim content
        source: String,
    },

    /// Literal block
    Literal {
        /// Verbatim content
        source: String,
    },

    /// STEM (math) block
    Stem {
        /// Raw math source
        source: String,
    },

    /// Paragraph
    Paragraph {
        /// Inline content
        text: Text,
    },

    /// Horizontal rule
    ThematicBreak,

    /// Page break
    PageBreak,

    /// Audio (unsupported by the dialect)
    Audio,

    /// Video (unsupported by the dialect)
    Video,

    /// Callout list (unsupported by the dialect)
    CalloutList,

    /// Table-of-contents marker (unsupported by the dialect)
    Toc,

    /// Preamble (unsupported by the dialect)
    Preamble {
        /// Child blocks
        #[serde(default)]
        blocks: Vec<Block>,
    },

    /// Discrete heading (unsupported by the dialect)
    FloatingTitle,
}

impl BlockKind {
    /// Short name of the variant, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Section { .. } => "section",
            BlockKind::Admonition { .. } => "admonition",
            BlockKind::DescriptionList { .. } => "dlist",
            BlockKind::OrderedList { .. } => "olist",
            BlockKind::UnorderedList { .. } => "ulist",
            BlockKind::Table(_) => "table",
            BlockKind::Quote { .. } => "quote",
            BlockKind::Verse { .. } => "verse",
            BlockKind::Open { .. } => "open",
            BlockKind::Example { .. } => "example",
            BlockKind::Sidebar { .. } => "sidebar",
            BlockKind::Image { .. } => "image",
            BlockKind::Listing { .. } => "listing",
            BlockKind::Literal { .. } => "literal",
            BlockKind::Stem { .. } => "stem",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::ThematicBreak => "thematic_break",
            BlockKind::PageBreak => "page_break",
            BlockKind::Audio => "audio",
            BlockKind::Video => "video",
            BlockKind::CalloutList => "colist",
            BlockKind::Toc => "toc",
            BlockKind::Preamble { .. } => "preamble",
            BlockKind::FloatingTitle => "floating_title",
        }
    }
}

/// Body of a container block.
///
/// Compound content is built of child blocks; simple content is a single run
/// of inline text that the renderer wraps in a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    /// Child blocks
    Compound(Vec<Block>),
    /// Inline text
    Simple(Text),
}

impl Content {
    /// Simple content holding plain text.
    pub fn simple(value: impl Into<String>) -> Self {
        Content::Simple(inline::text(value))
    }

    /// Check if the content is built of child blocks.
    pub fn is_compound(&self) -> bool {
        matches!(self, Content::Compound(_))
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Simple(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_are_attributes() {
        let block = Block::unordered_list(vec![]).with_option("checklist");
        assert!(block.has_option("checklist"));
        assert!(block.has_attr("checklist-option"));
        assert!(!block.has_option("interactive"));
    }

    #[test]
    fn test_empty_title_is_absent() {
        let block = Block::paragraph("x").with_title_text(Vec::new());
        assert!(!block.has_title());
        assert!(Block::paragraph("x").with_title("T").has_title());
    }

    #[test]
    fn test_deserialize_flattened_kind() {
        let json = r#"{
            "type": "ordered_list",
            "style": "loweralpha",
            "attributes": {"start": "3"},
            "items": [{"text": [{"type": "text", "text": "Alpha"}]}]
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.style(), Some("loweralpha"));
        assert_eq!(block.attr("start"), Some("3"));
        assert!(matches!(block.kind, BlockKind::OrderedList { ref items } if items.len() == 1));
    }

    #[test]
    fn test_deserialize_content() {
        let json = r#"{"type": "admonition", "name": "tip", "content": {"simple": [{"type": "text", "text": "Hi"}]}}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        match block.kind {
            BlockKind::Admonition { name, content } => {
                assert_eq!(name, "tip");
                assert!(!content.is_compound());
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }
}
