//! Mallard rendering for parsed documents.
//!
//! [`MallardRenderer`] walks the block tree and produces one markup fragment
//! per node. Fragments are composed by interpolation only; the renderer never
//! mutates the tree. Table validation problems are reported as
//! [`RenderWarning`]s instead of failing the render.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{
    Block, BlockKind, CellStyle, Content, DescriptionEntry, Document, ListItem, Table, TableCell,
    TableSection, Text,
};

use super::attrs::{self, attr, escape_text, section_id, xml_id};
use super::document;
use super::inline::{cdata, render_text, ImageRef};
use super::styles::{
    admonition_style, dlist_tags, olist_style, quote_tags, CHECKED_MARKER, TABLE_PI_NAMES,
    UNCHECKED_MARKER,
};
use super::{RenderOptions, RenderResult, RenderStats, RenderWarning};

/// Render a document to Mallard.
pub fn to_mallard(doc: &Document, options: &RenderOptions) -> String {
    render(doc, options).content
}

/// Render a document to Mallard with warnings (and statistics when enabled).
pub fn render(doc: &Document, options: &RenderOptions) -> RenderResult {
    MallardRenderer::new(doc, options.clone()).render()
}

/// Render a single block in the context of its document.
pub fn render_block(block: &Block, doc: &Document, options: &RenderOptions) -> RenderResult {
    MallardRenderer::new(doc, options.clone()).render_fragment(block)
}

/// Mallard renderer.
///
/// A renderer is consumed by a single render call; it only accumulates the
/// diagnostics and counts of that call.
pub struct MallardRenderer<'a> {
    doc: &'a Document,
    options: RenderOptions,
    warnings: Vec<RenderWarning>,
    stats: RenderStats,
}

impl<'a> MallardRenderer<'a> {
    /// Create a new renderer for a document.
    pub fn new(doc: &'a Document, options: RenderOptions) -> Self {
        Self {
            doc,
            options,
            warnings: Vec::new(),
            stats: RenderStats::new(),
        }
    }

    /// Render the whole document.
    ///
    /// Standalone mode produces a complete page; embedded mode produces only
    /// the body content.
    pub fn render(mut self) -> RenderResult {
        let doc = self.doc;
        let content = if self.options.standalone {
            let body = doc.has_blocks().then(|| self.render_blocks(&doc.blocks));
            document::page(doc, body)
        } else {
            self.render_blocks(&doc.blocks)
        };
        self.finish(content)
    }

    /// Render one block and its descendants.
    pub fn render_fragment(mut self, block: &Block) -> RenderResult {
        let content = self.render_block(block);
        self.finish(content)
    }

    fn finish(self, content: String) -> RenderResult {
        let result = RenderResult::new(content, self.warnings);
        if self.options.collect_stats {
            result.with_stats(self.stats)
        } else {
            result
        }
    }

    fn count(&mut self, update: impl FnOnce(&mut RenderStats)) {
        if self.options.collect_stats {
            update(&mut self.stats);
        }
    }

    fn warn(&mut self, warning: RenderWarning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    fn render_blocks(&mut self, blocks: &[Block]) -> String {
        blocks
            .iter()
            .map(|block| self.render_block(block))
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_block(&mut self, block: &Block) -> String {
        match &block.kind {
            BlockKind::Section { blocks, .. } => {
                self.count(|s| s.section_count += 1);
                self.render_section(block, blocks)
            }
            BlockKind::Admonition { name, content } => {
                self.render_admonition(block, name, content)
            }
            BlockKind::DescriptionList { items } => {
                self.count(|s| s.list_count += 1);
                self.render_dlist(block, items)
            }
            BlockKind::OrderedList { items } => {
                self.count(|s| s.list_count += 1);
                self.render_olist(block, items)
            }
            BlockKind::UnorderedList { items } => {
                self.count(|s| s.list_count += 1);
                self.render_ulist(block, items)
            }
            BlockKind::Table(table) => {
                self.count(|s| s.table_count += 1);
                self.render_table(block, table)
            }
            BlockKind::Quote { content } | BlockKind::Verse { content } => {
                self.render_quote(block, content)
            }
            BlockKind::Open { content } => self.render_open(block, content),
            BlockKind::Example { content } => format!(
                "<example{}>\n{}\n</example>",
                xml_id(block.id.as_deref()),
                self.resolve_content(content)
            ),
            BlockKind::Sidebar { content } => format!(
                "<note{}{}>\n{}{}\n</note>",
                attr("style", "sidebar"),
                xml_id(block.id.as_deref()),
                self.title_tag(block),
                self.resolve_content(content)
            ),
            BlockKind::Image { target, alt } => {
                self.count(|s| s.image_count += 1);
                self.render_image(block, target, alt)
            }
            BlockKind::Listing { source } => {
                self.count(|s| s.listing_count += 1);
                if block.style() == Some("source") || block.has_title() {
                    self.render_code(block, source)
                } else {
                    format!("<screen{}>{}</screen>", xml_id(block.id.as_deref()), source)
                }
            }
            BlockKind::Literal { source } => {
                self.count(|s| s.listing_count += 1);
                self.render_code(block, source)
            }
            BlockKind::Stem { source } => {
                self.count(|s| s.listing_count += 1);
                self.render_code(block, &cdata(source))
            }
            BlockKind::Paragraph { text } => {
                self.count(|s| s.paragraph_count += 1);
                self.render_paragraph(block, text)
            }
            BlockKind::ThematicBreak => "<p><?asciidoc-hr?></p>".to_string(),
            BlockKind::PageBreak => "<p><?asciidoc-pagebreak?></p>".to_string(),
            BlockKind::Audio
            | BlockKind::Video
            | BlockKind::CalloutList
            | BlockKind::Toc
            | BlockKind::Preamble { .. }
            | BlockKind::FloatingTitle => {
                log::debug!("skipping unsupported {} block", block.kind.name());
                self.count(|s| s.skipped_count += 1);
                String::new()
            }
        }
    }

    fn text(&self, text: &Text) -> String {
        render_text(text, self.doc)
    }

    fn title(&self, block: &Block) -> Option<String> {
        block
            .title
            .as_ref()
            .filter(|title| !title.is_empty())
            .map(|title| self.text(title))
    }

    /// `<title>` line followed by a newline, or nothing when untitled.
    fn title_tag(&self, block: &Block) -> String {
        self.title(block)
            .map(|title| format!("<title>{}</title>\n", title))
            .unwrap_or_default()
    }

    /// Compound content renders as its child blocks; simple content is
    /// wrapped in a single paragraph.
    fn resolve_content(&mut self, content: &Content) -> String {
        match content {
            Content::Compound(blocks) => self.render_blocks(blocks),
            Content::Simple(text) => format!("<p>{}</p>", self.text(text)),
        }
    }

    fn render_section(&mut self, block: &Block, blocks: &[Block]) -> String {
        let title = self.title(block).unwrap_or_default();
        let content = self.render_blocks(blocks);
        format!(
            "<section{}>\n<title>{}</title>\n{}\n</section>",
            section_id(block.id.as_deref()),
            title,
            content
        )
    }

    fn render_admonition(&mut self, block: &Block, name: &str, content: &Content) -> String {
        format!(
            "<note{}{}>\n{}{}\n</note>",
            attr("style", admonition_style(name)),
            xml_id(block.id.as_deref()),
            self.title_tag(block),
            self.resolve_content(content)
        )
    }

    fn render_dlist(&mut self, block: &Block, entries: &[DescriptionEntry]) -> String {
        let tags = dlist_tags(block.style());
        let mut lines = Vec::new();

        if let Some(list) = tags.list {
            lines.push(format!("<{}{}>", list, xml_id(block.id.as_deref())));
            if let Some(title) = self.title(block) {
                lines.push(format!("<title>{}</title>", title));
            }
        }

        for entry in entries {
            self.count(|s| s.list_item_count += 1);
            if let Some(tag) = tags.entry {
                lines.push(format!("<{}>", tag));
            }
            if let Some(tag) = tags.label {
                lines.push(format!("<{}>", tag));
            }
            for term in &entry.terms {
                lines.push(format!("<{0}>{1}</{0}>", tags.term, self.text(term)));
            }
            if let Some(tag) = tags.label {
                lines.push(format!("</{}>", tag));
            }
            if let Some(description) = &entry.description {
                if description.has_text() {
                    lines.push(format!("<p>{}</p>", self.text(&description.text)));
                }
                if description.has_blocks() {
                    lines.push(self.render_blocks(&description.blocks));
                }
            }
            if let Some(tag) = tags.entry {
                lines.push(format!("</{}>", tag));
            }
        }

        if let Some(list) = tags.list {
            lines.push(format!("</{}>", list));
        }

        lines.join("\n")
    }

    fn render_olist(&mut self, block: &Block, items: &[ListItem]) -> String {
        let mut lines = vec![format!(
            "<list{}{}{}>",
            xml_id(block.id.as_deref()),
            attr("type", olist_style(block.style())),
            attrs::start(&block.attributes)
        )];
        if let Some(title) = self.title(block) {
            lines.push(format!("<title>{}</title>", title));
        }
        for item in items {
            lines.push(self.render_list_item(item, ""));
        }
        lines.push("</list>".to_string());
        lines.join("\n")
    }

    fn render_ulist(&mut self, block: &Block, items: &[ListItem]) -> String {
        let checklist = self.options.checklist_markers && block.has_option("checklist");

        let mut lines = vec![format!("<list{}>", xml_id(block.id.as_deref()))];
        if let Some(title) = self.title(block) {
            lines.push(format!("<title>{}</title>", title));
        }
        for item in items {
            let marker = match item.checked {
                Some(true) if checklist => CHECKED_MARKER,
                Some(false) if checklist => UNCHECKED_MARKER,
                _ => "",
            };
            lines.push(self.render_list_item(item, marker));
        }
        lines.push("</list>".to_string());
        lines.join("\n")
    }

    fn render_list_item(&mut self, item: &ListItem, marker: &str) -> String {
        self.count(|s| s.list_item_count += 1);
        let mut lines = vec![
            "<item>".to_string(),
            format!("<p>{}{}</p>", marker, self.text(&item.text)),
        ];
        if item.has_blocks() {
            lines.push(self.render_blocks(&item.blocks));
        }
        lines.push("</item>".to_string());
        lines.join("\n")
    }

    fn render_table(&mut self, block: &Block, table: &Table) -> String {
        let rules = if block.has_attr("grid") { "all" } else { "none" };
        let mut lines = vec![format!(
            "<table{}{}{}>",
            xml_id(block.id.as_deref()),
            attr("frame", block.attributes.get_or("frame", "all")),
            attr("rules", rules)
        )];

        let title = self.title(block);
        if let Some(title) = &title {
            lines.push(format!("<title>{}</title>", title));
        }
        if let Some(width) = block.attr("width") {
            for name in TABLE_PI_NAMES {
                lines.push(format!("<?{}{}?>", name, attr("table-width", width)));
            }
        }

        lines.push("<colgroup>".to_string());
        lines.extend((0..table.column_count()).map(|_| "<col />".to_string()));
        lines.push("</colgroup>".to_string());

        let mut has_body = false;
        for section in TableSection::ALL {
            let rows = table.rows(section);
            if rows.is_empty() {
                continue;
            }
            has_body |= section == TableSection::Body;

            lines.push(format!("<{}>", section.tag()));
            for row in rows {
                lines.push("<tr>".to_string());
                for cell in &row.cells {
                    lines.push(self.render_cell(cell, section));
                }
                lines.push("</tr>".to_string());
            }
            lines.push(format!("</{}>", section.tag()));
        }
        lines.push("</table>".to_string());

        if !has_body {
            self.warn(RenderWarning::TableWithoutBody {
                id: block.id.clone(),
                title,
            });
        }

        lines.join("\n")
    }

    /// Entries never carry whitespace directly inside `<entry>`.
    fn render_cell(&mut self, cell: &TableCell, section: TableSection) -> String {
        let content = if section == TableSection::Head {
            format!("<p>{}</p>", self.text(&cell.text))
        } else {
            match cell.style {
                CellStyle::Asciidoc => self.render_blocks(&cell.blocks),
                CellStyle::Verse => format!("<quote>{}</quote>", self.text(&cell.text)),
                CellStyle::Literal => {
                    format!("<listing><code>{}</code></listing>", self.text(&cell.text))
                }
                CellStyle::Header => self.cell_paragraphs(cell, "strong"),
                CellStyle::Emphasis => self.cell_paragraphs(cell, "emphasis"),
                CellStyle::Strong => self.cell_paragraphs(cell, "strong"),
                CellStyle::Monospaced => self.cell_paragraphs(cell, "monospaced"),
                CellStyle::Default => self.cell_paragraphs(cell, ""),
            }
        };

        let end = match self.doc.attr("cellbgcolor") {
            Some(color) => format!("<?dbfo{}?></entry>", attr("bgcolor", color)),
            None => "</entry>".to_string(),
        };

        format!(
            "<entry{}{}>{}{}",
            attrs::colspan(cell.colspan),
            attrs::rowspan(cell.rowspan),
            content,
            end
        )
    }

    /// One `<p>` per blank-line separated paragraph of the cell text.
    fn cell_paragraphs(&self, cell: &TableCell, kind: &str) -> String {
        let tags = quote_tags(kind);
        let text = self.text(&cell.text);
        split_paragraphs(&text)
            .map(|para| format!("<p>{}{}{}</p>", tags.open, para, tags.close))
            .collect()
    }

    fn render_quote(&mut self, block: &Block, content: &Content) -> String {
        let mut lines = vec![format!("<quote{}>", xml_id(block.id.as_deref()))];
        if let Some(title) = self.title(block) {
            lines.push(format!("<title>{}</title>", title));
        }
        if let Some(attribution) = block.attr("attribution") {
            lines.push(format!("<cite>{}</cite>", escape_text(attribution)));
        }
        lines.push(self.resolve_content(content));
        if let Some(citetitle) = block.attr("citetitle") {
            lines.push(format!("<p><em>{}</em></p>", escape_text(citetitle)));
        }
        lines.push("</quote>".to_string());
        lines.join("\n")
    }

    fn render_open(&mut self, block: &Block, content: &Content) -> String {
        match block.style() {
            Some("abstract") => self.render_quote(block, content),
            Some("partintro") => format!(
                "<listing{}>\n{}{}\n</listing>",
                xml_id(block.id.as_deref()),
                self.title_tag(block),
                self.resolve_content(content)
            ),
            _ => match content {
                Content::Compound(blocks) => self.render_blocks(blocks),
                Content::Simple(text) => self.text(text),
            },
        }
    }

    fn render_image(&self, block: &Block, target: &str, alt: &str) -> String {
        let image = ImageRef {
            id: block.id.as_deref(),
            title: self.title(block),
            target,
            alt: block.attr("alt").unwrap_or(alt),
            attributes: &block.attributes,
        };
        image.render(self.doc, true)
    }

    /// Titled `<listing>` wrapping a `<code>` element.
    fn render_code(&self, block: &Block, code: &str) -> String {
        let mut lines = vec![format!("<listing{}>", xml_id(block.id.as_deref()))];
        if let Some(title) = self.title(block) {
            lines.push(format!("<title>{}</title>", title));
        }
        lines.push(format!("<code>{}</code>", code));
        lines.push("</listing>".to_string());
        lines.join("\n")
    }

    fn render_paragraph(&self, block: &Block, text: &Text) -> String {
        let id = xml_id(block.id.as_deref());
        let text = self.text(text);
        match self.title(block) {
            Some(title) => format!(
                "<listing{}>\n<title>{}</title>\n<p>{}</p>\n</listing>",
                id, title, text
            ),
            None => format!("<p{}>{}</p>", id, text),
        }
    }
}

fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    static BLANK_LINE: OnceLock<Regex> = OnceLock::new();
    let re = BLANK_LINE.get_or_init(|| Regex::new(r"\n[ \t]*\n").unwrap());
    re.split(text).map(str::trim).filter(|para| !para.is_empty())
}
