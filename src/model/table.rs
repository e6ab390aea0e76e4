//! Table types.

use super::{inline, Block, Text};
use serde::{Deserialize, Serialize};

/// A table with rows partitioned into head, body and foot sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Declared number of columns (0 = derive from the first row)
    #[serde(default)]
    pub columns: usize,

    /// Header rows
    #[serde(default)]
    pub head: Vec<TableRow>,

    /// Body rows
    #[serde(default)]
    pub body: Vec<TableRow>,

    /// Footer rows
    #[serde(default)]
    pub foot: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with a declared column count.
    pub fn with_columns(columns: usize) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Add a header row.
    pub fn add_head_row(&mut self, row: TableRow) {
        self.head.push(row);
    }

    /// Add a body row.
    pub fn add_row(&mut self, row: TableRow) {
        self.body.push(row);
    }

    /// Add a footer row.
    pub fn add_foot_row(&mut self, row: TableRow) {
        self.foot.push(row);
    }

    /// Rows of the given section.
    pub fn rows(&self, section: TableSection) -> &[TableRow] {
        match section {
            TableSection::Head => &self.head,
            TableSection::Body => &self.body,
            TableSection::Foot => &self.foot,
        }
    }

    /// Number of columns: the declared count, or the spanned width of the
    /// first row in any section.
    pub fn column_count(&self) -> usize {
        if self.columns > 0 {
            return self.columns;
        }
        TableSection::ALL
            .iter()
            .find_map(|section| self.rows(*section).first())
            .map(|row| row.width())
            .unwrap_or(0)
    }

    /// Check if the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.body.is_empty() && self.foot.is_empty()
    }
}

/// A table section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableSection {
    /// `thead`
    Head,
    /// `tfoot`
    Foot,
    /// `tbody`
    Body,
}

impl TableSection {
    /// Sections in emission order (the foot precedes the body).
    pub const ALL: [TableSection; 3] = [TableSection::Head, TableSection::Foot, TableSection::Body];

    /// Element name of the section.
    pub fn tag(self) -> &'static str {
        match self {
            TableSection::Head => "thead",
            TableSection::Foot => "tfoot",
            TableSection::Body => "tbody",
        }
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Number of columns the row covers, counting spans.
    pub fn width(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.colspan.unwrap_or(1) as usize)
            .sum()
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell text (paragraphs separated by blank lines)
    #[serde(default)]
    pub text: Text,

    /// Nested blocks, used by `asciidoc` styled cells
    #[serde(default)]
    pub blocks: Vec<Block>,

    /// Content style
    #[serde(default)]
    pub style: CellStyle,

    /// Number of columns this cell spans
    #[serde(default)]
    pub colspan: Option<u32>,

    /// Number of rows this cell spans
    #[serde(default)]
    pub rowspan: Option<u32>,
}

impl TableCell {
    /// Create a new cell with text content.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: inline::text(value),
            ..Self::default()
        }
    }

    /// Create an `asciidoc` cell holding nested blocks.
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            style: CellStyle::Asciidoc,
            ..Self::default()
        }
    }

    /// Set colspan and return self.
    pub fn colspan(mut self, span: u32) -> Self {
        self.colspan = Some(span);
        self
    }

    /// Set rowspan and return self.
    pub fn rowspan(mut self, span: u32) -> Self {
        self.rowspan = Some(span);
        self
    }

    /// Set the content style and return self.
    pub fn style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }
}

/// Content style of a table cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStyle {
    /// Plain paragraphs
    #[default]
    Default,
    /// Nested document content
    Asciidoc,
    /// Emphasized paragraphs
    Emphasis,
    /// Bold header paragraphs
    Header,
    /// Preformatted literal text
    Literal,
    /// Monospaced paragraphs
    Monospaced,
    /// Strong paragraphs
    Strong,
    /// Verse
    Verse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_from_first_row() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![
            TableCell::text("Merged").colspan(2),
            TableCell::text("C"),
        ]));
        assert_eq!(table.column_count(), 3);

        let declared = Table::with_columns(5);
        assert_eq!(declared.column_count(), 5);
        assert!(declared.is_empty());
    }

    #[test]
    fn test_section_order() {
        let tags: Vec<_> = TableSection::ALL.iter().map(|s| s.tag()).collect();
        assert_eq!(tags, ["thead", "tfoot", "tbody"]);
    }

    #[test]
    fn test_cell_style_deserialize() {
        let cell: TableCell =
            serde_json::from_str(r#"{"text": [{"type": "text", "text": "x"}], "style": "literal"}"#)
                .unwrap();
        assert_eq!(cell.style, CellStyle::Literal);
        assert_eq!(cell.colspan, None);
    }
}
