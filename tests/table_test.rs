//! Integration tests for table rendering.

use mallard_backend::render::render_block;
use mallard_backend::{
    Block, CellStyle, Document, RenderOptions, RenderWarning, Table, TableCell, TableRow,
};
use pretty_assertions::assert_eq;

fn render_table(block: &Block) -> (String, Vec<RenderWarning>) {
    let result = render_block(block, &Document::new(), &RenderOptions::new().embedded());
    (result.content, result.warnings)
}

#[test]
fn test_simple_table() {
    let mut table = Table::new();
    table.add_head_row(TableRow::from_strings(["Name", "Age"]));
    table.add_row(TableRow::from_strings(["Alice", "30"]));

    let (out, warnings) = render_table(&Block::table(table));
    assert_eq!(
        out,
        concat!(
            "<table frame=\"all\" rules=\"none\">\n",
            "<colgroup>\n<col />\n<col />\n</colgroup>\n",
            "<thead>\n<tr>\n<entry><p>Name</p></entry>\n<entry><p>Age</p></entry>\n</tr>\n</thead>\n",
            "<tbody>\n<tr>\n<entry><p>Alice</p></entry>\n<entry><p>30</p></entry>\n</tr>\n</tbody>\n",
            "</table>"
        )
    );
    assert!(warnings.is_empty());
}

#[test]
fn test_foot_precedes_body() {
    let mut table = Table::new();
    table.add_row(TableRow::from_strings(["row"]));
    table.add_foot_row(TableRow::from_strings(["sum"]));

    let (out, _) = render_table(&Block::table(table));
    let foot = out.find("<tfoot>").unwrap();
    let body = out.find("<tbody>").unwrap();
    assert!(foot < body);
    assert!(!out.contains("<thead>"));
}

#[test]
fn test_frame_title_and_width() {
    let mut table = Table::with_columns(3);
    table.add_row(TableRow::from_strings(["a", "b", "c"]));
    let block = Block::table(table)
        .with_id("sizes")
        .with_title("Sizes")
        .with_attr("frame", "topbot")
        .with_attr("grid", "rows")
        .with_attr("width", "80%");

    let (out, _) = render_table(&block);
    assert!(out.starts_with(
        "<table xml:id=\"sizes\" frame=\"topbot\" rules=\"all\">\n<title>Sizes</title>\n"
    ));
    assert!(out.contains(concat!(
        "<?dbhtml table-width=\"80%\"?>\n",
        "<?dbfo table-width=\"80%\"?>\n",
        "<?dblatex table-width=\"80%\"?>\n",
        "<colgroup>\n<col />\n<col />\n<col />\n</colgroup>"
    )));
}

#[test]
fn test_no_width_processing_instructions_without_width() {
    let mut table = Table::new();
    table.add_row(TableRow::from_strings(["a"]));
    let (out, _) = render_table(&Block::table(table));
    assert!(!out.contains("table-width"));
}

#[test]
fn test_spans() {
    let mut table = Table::new();
    table.add_row(TableRow::new(vec![
        TableCell::text("wide").colspan(2),
        TableCell::text("tall").rowspan(2),
    ]));

    let (out, _) = render_table(&Block::table(table));
    assert!(out.contains("<entry colspan=\"2\"><p>wide</p></entry>"));
    assert!(out.contains("<entry rowspan=\"2\"><p>tall</p></entry>"));
    assert_eq!(out.matches("<col />").count(), 3);
}

#[test]
fn test_quote_styled_cells() {
    let mut table = Table::new();
    table.add_row(TableRow::new(vec![
        TableCell::text("e").style(CellStyle::Emphasis),
        TableCell::text("s").style(CellStyle::Strong),
        TableCell::text("m").style(CellStyle::Monospaced),
    ]));

    let (out, _) = render_table(&Block::table(table));
    assert!(out.contains("<entry><p><em>e</em></p></entry>"));
    assert!(out.contains("<entry><p><em style=\"strong\">s</em></p></entry>"));
    assert!(out.contains("<entry><p><code>m</code></p></entry>"));
}

#[test]
fn test_header_cell_paragraphs() {
    let mut table = Table::new();
    table.add_row(TableRow::new(vec![
        TableCell::text("first\n\nsecond").style(CellStyle::Header)
    ]));

    let (out, _) = render_table(&Block::table(table));
    assert!(out.contains(
        "<entry><p><em style=\"strong\">first</em></p><p><em style=\"strong\">second</em></p></entry>"
    ));
}

#[test]
fn test_foot_cells_follow_cell_style() {
    let mut table = Table::new();
    table.add_row(TableRow::from_strings(["x"]));
    table.add_foot_row(TableRow::new(vec![
        TableCell::text("total").style(CellStyle::Literal)
    ]));

    let (out, _) = render_table(&Block::table(table));
    assert!(out.contains("<tfoot>\n<tr>\n<entry><listing><code>total</code></listing></entry>"));
}

#[test]
fn test_nested_table_in_asciidoc_cell() {
    let mut inner = Table::new();
    inner.add_row(TableRow::from_strings(["inner"]));

    let mut outer = Table::new();
    outer.add_row(TableRow::new(vec![TableCell::with_blocks(vec![
        Block::table(inner),
    ])]));

    let (out, warnings) = render_table(&Block::table(outer));
    assert_eq!(out.matches("<table ").count(), 2);
    assert!(warnings.is_empty());
}

#[test]
fn test_each_bodyless_table_warns() {
    let empty_inner = Table::with_columns(1);
    let mut outer = Table::new();
    outer.add_head_row(TableRow::new(vec![TableCell::text("h")]));
    outer.add_foot_row(TableRow::new(vec![TableCell::with_blocks(vec![
        Block::table(empty_inner).with_title("Inner"),
    ])]));

    let (out, warnings) = render_table(&Block::table(outer).with_id("outer"));
    assert!(!out.contains("<tbody>"));
    assert_eq!(
        warnings,
        vec![
            RenderWarning::TableWithoutBody {
                id: None,
                title: Some("Inner".into()),
            },
            RenderWarning::TableWithoutBody {
                id: Some("outer".into()),
                title: None,
            },
        ]
    );
}
