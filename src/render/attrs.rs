//! Projection of optional node properties onto markup attributes.
//!
//! Every function returns either an empty string or a single attribute
//! fragment with a leading space, ready to interpolate into a start tag.

use std::borrow::Cow;
use std::fmt::Display;

use quick_xml::escape::{escape, partial_escape};

use crate::model::{Attributes, Document};

/// Render `name="value"` with the value escaped.
pub fn attr(name: &str, value: impl Display) -> String {
    format!(r#" {}="{}""#, name, escape(value.to_string().as_str()))
}

/// Render `name="value"` when a value is present.
pub fn optional(name: &str, value: Option<impl Display>) -> String {
    value.map(|v| attr(name, v)).unwrap_or_default()
}

/// Identifier as `xml:id`, the form accepted on any element.
pub fn xml_id(id: Option<&str>) -> String {
    optional("xml:id", id)
}

/// Identifier as a native `id`, accepted on sections.
pub fn section_id(id: Option<&str>) -> String {
    optional("id", id)
}

/// `width` from the `width` attribute.
pub fn width(attributes: &Attributes) -> String {
    optional("width", attributes.get("width"))
}

/// `height` from the `height` attribute.
pub fn height(attributes: &Attributes) -> String {
    optional("height", attributes.get("height"))
}

/// `startingnumber` from the `start` attribute.
pub fn start(attributes: &Attributes) -> String {
    optional("startingnumber", attributes.get("start"))
}

/// `colspan` of a table cell.
pub fn colspan(span: Option<u32>) -> String {
    optional("colspan", span)
}

/// `rowspan` of a table cell.
pub fn rowspan(span: Option<u32>) -> String {
    optional("rowspan", span)
}

/// Escape a plain attribute-store value for use as element content.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    partial_escape(value)
}

/// `xml:lang` of the page, defaulting to `en`; empty when `nolang` is set.
pub fn lang(doc: &Document) -> String {
    if doc.has_attr("nolang") {
        return String::new();
    }
    attr("xml:lang", doc.attributes.get_or("lang", "en"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_render_nothing() {
        let attrs = Attributes::new();
        assert_eq!(width(&attrs), "");
        assert_eq!(height(&attrs), "");
        assert_eq!(start(&attrs), "");
        assert_eq!(colspan(None), "");
        assert_eq!(rowspan(None), "");
        assert_eq!(xml_id(None), "");
        assert_eq!(section_id(None), "");
    }

    #[test]
    fn test_present_values() {
        let attrs = Attributes::new().with("width", "300").with("start", "3");
        assert_eq!(width(&attrs), r#" width="300""#);
        assert_eq!(start(&attrs), r#" startingnumber="3""#);
        assert_eq!(colspan(Some(2)), r#" colspan="2""#);
        assert_eq!(xml_id(Some("intro")), r#" xml:id="intro""#);
        assert_eq!(section_id(Some("intro")), r#" id="intro""#);
    }

    #[test]
    fn test_values_are_escaped() {
        assert_eq!(attr("src", "a.png?x=1&y=2"), r#" src="a.png?x=1&amp;y=2""#);
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("Smith & Sons"), "Smith &amp; Sons");
        assert_eq!(escape_text("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_lang() {
        assert_eq!(lang(&Document::new()), r#" xml:lang="en""#);
        assert_eq!(lang(&Document::new().with_attr("lang", "de")), r#" xml:lang="de""#);
        assert_eq!(lang(&Document::new().with_attr("nolang", "")), "");
    }
}
