//! Rendering result with diagnostics and statistics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of rendering a document or block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered markup
    pub content: String,

    /// Non-fatal diagnostics raised while rendering
    pub warnings: Vec<RenderWarning>,

    /// Node statistics (when collection was enabled)
    pub stats: Option<RenderStats>,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, warnings: Vec<RenderWarning>) -> Self {
        Self {
            content,
            warnings,
            stats: None,
        }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self::new(content, Vec::new())
    }

    /// Attach statistics.
    pub fn with_stats(mut self, stats: RenderStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Check if any warning was raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A non-fatal condition detected while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderWarning {
    /// A table was rendered without any body row.
    #[error("tables must have at least one body row{}", describe_table(.id, .title))]
    TableWithoutBody {
        /// Identifier of the offending table
        id: Option<String>,
        /// Title of the offending table
        title: Option<String>,
    },
}

fn describe_table(id: &Option<String>, title: &Option<String>) -> String {
    match (id, title) {
        (Some(id), _) => format!(" (table '{}')", id),
        (None, Some(title)) => format!(" (table \"{}\")", title),
        (None, None) => String::new(),
    }
}

/// Counts of rendered nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of sections
    pub section_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of lists (ordered, unordered and description)
    pub list_count: u32,

    /// Number of list items and description entries
    pub list_item_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of block images
    pub image_count: u32,

    /// Number of listing, literal and stem blocks
    pub listing_count: u32,

    /// Number of nodes dropped because the dialect cannot express them
    pub skipped_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.section_count += other.section_count;
        self.paragraph_count += other.paragraph_count;
        self.list_count += other.list_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.image_count += other.image_count;
        self.listing_count += other.listing_count;
        self.skipped_count += other.skipped_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let bare = RenderWarning::TableWithoutBody {
            id: None,
            title: None,
        };
        assert_eq!(bare.to_string(), "tables must have at least one body row");

        let named = RenderWarning::TableWithoutBody {
            id: Some("tbl-1".into()),
            title: Some("Sizes".into()),
        };
        assert_eq!(
            named.to_string(),
            "tables must have at least one body row (table 'tbl-1')"
        );
    }

    #[test]
    fn test_stats_merge() {
        let mut stats1 = RenderStats::new();
        stats1.paragraph_count = 5;
        stats1.table_count = 2;

        let stats2 = RenderStats {
            paragraph_count: 3,
            table_count: 1,
            skipped_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.paragraph_count, 8);
        assert_eq!(stats1.table_count, 3);
        assert_eq!(stats1.skipped_count, 4);
    }

    #[test]
    fn test_render_result_content_only() {
        let result = RenderResult::content_only("<p>x</p>".to_string());
        assert_eq!(result.content, "<p>x</p>");
        assert!(!result.has_warnings());
        assert!(result.stats.is_none());
    }
}
