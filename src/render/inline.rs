//! Inline node rendering.
//!
//! Inline fragments never contain block structure; they are concatenated into
//! the text of paragraphs, titles, list items and table cells.

use crate::model::{Attributes, Document, FootnoteKind, Inline, InlineImage};

use super::attrs::{self, attr, escape_text, xml_id};
use super::styles::{is_math, quote_tags};

/// Render a run of inline content.
pub fn render_text(text: &[Inline], doc: &Document) -> String {
    text.iter().map(|node| render_inline(node, doc)).collect()
}

/// Render a single inline node.
pub fn render_inline(node: &Inline, doc: &Document) -> String {
    match node {
        Inline::Text { text } => text.clone(),
        Inline::Quoted {
            kind,
            content,
            role,
            id,
        } => quoted(kind, &render_text(content, doc), role.as_deref(), id.as_deref()),
        Inline::Kbd { keys } => kbd(keys),
        Inline::Menu {
            menu,
            submenus,
            item,
        } => menu_path(menu, submenus, item.as_deref()),
        Inline::Button { text } => gui("button", text),
        Inline::Footnote { kind, text } => footnote(kind, text),
        Inline::Break { text } => format!("{}<?asciidoc-br?>", text),
        Inline::IndexTerm { text, visible } => {
            if *visible {
                text.clone()
            } else {
                String::new()
            }
        }
        Inline::Image(image) => inline_image(image, doc),
        Inline::Anchor { target, .. } => {
            log::debug!("skipping inline anchor to '{}'", target);
            String::new()
        }
        Inline::Callout { number } => {
            log::debug!("skipping callout <{}>", number);
            String::new()
        }
    }
}

fn quoted(kind: &str, text: &str, role: Option<&str>, id: Option<&str>) -> String {
    if is_math(kind) {
        return cdata(text);
    }

    let tags = quote_tags(kind);
    let quoted_text = match role {
        Some(role) => format!(
            "{}<phrase{}>{}</phrase>{}",
            tags.open,
            attr("style", role),
            text,
            tags.close
        ),
        None => format!("{}{}{}", tags.open, text, tags.close),
    };

    match id {
        Some(_) => format!("<span{}/>{}", xml_id(id), quoted_text),
        None => quoted_text,
    }
}

fn kbd(keys: &[String]) -> String {
    if let [key] = keys {
        return format!("<key>{}</key>", key);
    }
    let combo: String = keys
        .iter()
        .map(|key| format!("<keycap>{}</keycap>", key))
        .collect();
    format!("<keyseq>{}</keyseq>", combo)
}

fn menu_path(menu: &str, submenus: &[String], item: Option<&str>) -> String {
    let menu = gui("menu", menu);
    if !submenus.is_empty() {
        let path = submenus
            .iter()
            .map(|submenu| gui("menu", submenu))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "<guiseq>{} {} {}</guiseq>",
            menu,
            path,
            gui("menuitem", item.unwrap_or_default())
        )
    } else if let Some(item) = item {
        format!("<guiseq>{} {}</guiseq>", menu, gui("menuitem", item))
    } else {
        menu
    }
}

fn gui(style: &str, text: &str) -> String {
    format!("<gui{}>{}</gui>", attr("style", style), text)
}

fn footnote(kind: &FootnoteKind, text: &str) -> String {
    match kind {
        FootnoteKind::Xref { target } => format!(
            r#"[&#x2192; <em style="strong">{}</em> <em>{}</em>]"#,
            target, text
        ),
        FootnoteKind::Note => format!("[<em>{}</em>]", text),
    }
}

fn inline_image(image: &InlineImage, doc: &Document) -> String {
    let media = ImageRef {
        id: image.id.as_deref(),
        title: image.title.as_deref().map(|t| escape_text(t).into_owned()),
        target: &image.target,
        alt: &image.alt,
        attributes: &image.attributes,
    };
    media.render(doc, false)
}

/// Wrap raw text in a CDATA section, splitting any embedded terminator.
pub(crate) fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

/// Properties of an image shared by block and inline images.
pub(crate) struct ImageRef<'a> {
    pub id: Option<&'a str>,
    pub title: Option<String>,
    pub target: &'a str,
    pub alt: &'a str,
    pub attributes: &'a Attributes,
}

impl ImageRef<'_> {
    /// Render the media element; block images wrap the caption in a paragraph.
    /// A titled image is additionally wrapped in a figure.
    pub fn render(&self, doc: &Document, block_alt: bool) -> String {
        let alt = escape_text(self.alt);
        let caption = if block_alt {
            format!("<p>{}</p>", alt)
        } else {
            alt.into_owned()
        };

        let media = format!(
            "<media{}{}{}{}>\n{}\n</media>",
            attr("type", "image"),
            attr("src", doc.image_uri(self.target)),
            attrs::width(self.attributes),
            attrs::height(self.attributes),
            caption
        );

        match &self.title {
            Some(title) => format!(
                "<figure{}>\n<title>{}</title>\n{}\n</figure>",
                xml_id(self.id),
                title,
                media
            ),
            None => media,
        }
    }
}
