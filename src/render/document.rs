//! Page envelope and document metadata.

use crate::model::{BlockKind, Document, Inline, Text};

use super::attrs::{self, attr, escape_text, optional};
use super::inline::render_text;
use super::styles::{ITS_NS, MALLARD_NS};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Assemble the full page around already rendered body content.
pub(crate) fn page(doc: &Document, body: Option<String>) -> String {
    let mut lines = vec![XML_DECLARATION.to_string()];

    if doc.has_attr("toc") {
        lines.push(format!(
            "<?asciidoc-toc{}?>",
            optional("maxdepth", doc.attr("toclevels"))
        ));
    }

    lines.push(format!(
        "<page{}{}{}>",
        attr("xmlns", MALLARD_NS),
        attr("xmlns:its", ITS_NS),
        attrs::lang(doc)
    ));
    lines.push(info(doc));
    lines.extend(body);
    if !doc.docinfo.footer.is_empty() {
        lines.push(doc.docinfo.footer.clone());
    }
    lines.push("</page>".to_string());

    lines.join("\n")
}

/// The `<info>` block followed by the page title.
fn info(doc: &Document) -> String {
    let date = doc.attr("revdate").or_else(|| doc.attr("docdate"));
    let mut lines = vec![
        "<info>".to_string(),
        format!("<date>{}</date>", escape_text(date.unwrap_or_default())),
    ];

    if doc.has_header {
        if doc.has_attr("author") {
            match doc.author_count() {
                count if count < 2 => lines.push(credit(doc, None)),
                count => lines.extend((1..=count).map(|index| credit(doc, Some(index)))),
            }
        }
        if doc.has_attr("revdate") || doc.has_attr("revnumber") {
            lines.push(format!(
                "<revision{}{}/>",
                optional("version", doc.attr("revnumber")),
                optional("date", doc.attr("revdate"))
            ));
        }
        if !doc.docinfo.header.is_empty() {
            lines.push(doc.docinfo.header.clone());
        }
        if let Some(orgname) = doc.attr("orgname") {
            lines.push(format!("<orgname>{}</orgname>", escape_text(orgname)));
        }
    }
    lines.push("</info>".to_string());

    if !doc.notitle() {
        lines.push(title_tags(doc));
    }

    lines.join("\n")
}

/// Author credit, reading the `_N` suffixed keys when `index` is given.
fn credit(doc: &Document, index: Option<usize>) -> String {
    let key = |name: &str| match index {
        Some(n) => format!("{}_{}", name, n),
        None => name.to_string(),
    };

    let name = ["firstname", "middlename", "lastname"]
        .into_iter()
        .filter_map(|part| doc.attr(&key(part)))
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![
        format!("<credit{}>", attr("type", "author")),
        format!("<name>{}</name>", escape_text(&name)),
    ];
    if let Some(email) = doc.attr(&key("email")) {
        lines.push(format!("<email>{}</email>", escape_text(email)));
    }
    lines.push("</credit>".to_string());
    lines.join("\n")
}

fn title_tags(doc: &Document) -> String {
    let title = doc_title(doc);
    let separator = format!("{} ", doc.attributes.get_or("title-separator", ":"));

    match partition_title(&title, &separator) {
        Some((main, subtitle)) => format!(
            "<title>{}</title>\n<subtitle>{}</subtitle>",
            render_text(&main, doc),
            render_text(&subtitle, doc)
        ),
        None => format!("<title>{}</title>", render_text(&title, doc)),
    }
}

/// Page title: the `title` attribute, the header title, the first section
/// title, then `untitled-label`.
fn doc_title(doc: &Document) -> Text {
    let plain = |value: &str| vec![Inline::text(escape_text(value))];

    if let Some(title) = doc.attr("title") {
        return plain(title);
    }

    let first_section = doc
        .blocks
        .iter()
        .find(|block| matches!(block.kind, BlockKind::Section { .. }))
        .and_then(|section| section.title.as_ref());

    doc.title
        .iter()
        .chain(first_section)
        .find(|title| !title.is_empty())
        .cloned()
        .unwrap_or_else(|| plain(doc.attributes.get_or("untitled-label", "Untitled")))
}

/// Split a title run at the last separator occurring in top-level text.
///
/// Formatted spans are never split.
fn partition_title(title: &[Inline], separator: &str) -> Option<(Text, Text)> {
    title.iter().enumerate().rev().find_map(|(index, node)| match node {
        Inline::Text { text } => text.rsplit_once(separator).map(|(main, subtitle)| {
            let mut head = title[..index].to_vec();
            head.push(Inline::text(main));

            let mut tail = vec![Inline::text(subtitle)];
            tail.extend_from_slice(&title[index + 1..]);
            (head, tail)
        }),
        _ => None,
    })
}
