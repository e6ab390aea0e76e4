//! List item and description-list entry types.

use super::{inline, Block, Text};
use serde::{Deserialize, Serialize};

/// An item of an ordered or unordered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Lead paragraph text
    #[serde(default)]
    pub text: Text,

    /// Nested block content following the lead text
    #[serde(default)]
    pub blocks: Vec<Block>,

    /// Checkbox state for checklist items (`Some(true)` = checked)
    #[serde(default)]
    pub checked: Option<bool>,
}

impl ListItem {
    /// Create an item with plain text.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            text: inline::text(value),
            ..Self::default()
        }
    }

    /// Create an item with inline content.
    pub fn with_text(text: Text) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    /// Create a checklist item.
    pub fn checkbox(value: impl Into<String>, checked: bool) -> Self {
        Self {
            checked: Some(checked),
            ..Self::new(value)
        }
    }

    /// Append a nested block and return self.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Check if the item has lead text.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Check if the item has nested blocks.
    pub fn has_blocks(&self) -> bool {
        !self.blocks.is_empty()
    }

    /// Check if the item carries a checkbox marker.
    pub fn is_checkbox(&self) -> bool {
        self.checked.is_some()
    }
}

/// A term/definition pair of a description list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptionEntry {
    /// One or more terms
    pub terms: Vec<Text>,

    /// The definition, if any
    #[serde(default)]
    pub description: Option<ListItem>,
}

impl DescriptionEntry {
    /// Create an entry with a single plain-text term.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            terms: vec![inline::text(term)],
            description: None,
        }
    }

    /// Add another term and return self.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.terms.push(inline::text(term));
        self
    }

    /// Set the definition and return self.
    pub fn with_description(mut self, description: ListItem) -> Self {
        self.description = Some(description);
        self
    }
}
