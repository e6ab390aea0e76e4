//! Mallard vocabulary tables.
//!
//! Each table maps a declared style key to dialect tags and has exactly one
//! default entry, returned for missing or unrecognized keys.

/// Mallard core namespace.
pub const MALLARD_NS: &str = "http://projectmallard.org/1.0/";

/// Internationalization Tag Set namespace.
pub const ITS_NS: &str = "http://www.w3.org/2005/11/its";

/// Processing-instruction targets that receive the table width.
pub const TABLE_PI_NAMES: [&str; 3] = ["dbhtml", "dbfo", "dblatex"];

/// Glyph prefixed to a checked checklist item.
pub const CHECKED_MARKER: &str = "&#10003; ";

/// Glyph prefixed to an unchecked checklist item.
pub const UNCHECKED_MARKER: &str = "&#10007; ";

/// Tags used to render one description-list style.
///
/// A `None` tag means the corresponding wrapper is not emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DlistTags {
    /// List container
    pub list: Option<&'static str>,
    /// Wrapper around each term/definition pair
    pub entry: Option<&'static str>,
    /// Wrapper around the terms of an entry
    pub label: Option<&'static str>,
    /// Element for each term
    pub term: &'static str,
}

const DLIST_LABELED: DlistTags = DlistTags {
    list: Some("terms"),
    entry: Some("item"),
    label: None,
    term: "title",
};

const DLIST_QANDA: DlistTags = DlistTags {
    list: Some("list"),
    entry: Some("item"),
    label: None,
    term: "p",
};

/// Look up description-list tags. Defaults to the `labeled` entry.
pub fn dlist_tags(style: Option<&str>) -> DlistTags {
    match style {
        Some("qanda") => DLIST_QANDA,
        Some("labeled") | Some("glossary") | Some("horizontal") => DLIST_LABELED,
        _ => DLIST_LABELED,
    }
}

/// Look up the numbering style of an ordered list. Defaults to `numbered`.
pub fn olist_style(style: Option<&str>) -> &'static str {
    match style {
        Some("loweralpha") => "lower-alpha",
        Some("upperalpha") => "upper-alpha",
        Some("lowerroman") => "lower-roman",
        Some("upperroman") => "upper-roman",
        _ => "numbered",
    }
}

/// Open and close markers of a quoted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteTags {
    /// Text emitted before the span
    pub open: &'static str,
    /// Text emitted after the span
    pub close: &'static str,
}

impl QuoteTags {
    const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }
}

/// Look up quoted-span markers. Defaults to an empty (pass-through) pair.
pub fn quote_tags(kind: &str) -> QuoteTags {
    match kind {
        "emphasis" => QuoteTags::new("<em>", "</em>"),
        "strong" => QuoteTags::new(r#"<em style="strong">"#, "</em>"),
        "monospaced" => QuoteTags::new("<code>", "</code>"),
        "double" => QuoteTags::new("&#8220;", "&#8221;"),
        "single" => QuoteTags::new("&#8216;", "&#8217;"),
        "mark" => QuoteTags::new(r#"<em style="marked">"#, "</em>"),
        _ => QuoteTags::new("", ""),
    }
}

/// Check if a quoted span holds raw math, emitted as CDATA.
pub fn is_math(kind: &str) -> bool {
    matches!(kind, "latexmath" | "asciimath" | "math")
}

/// Look up the `note` style of an admonition. Defaults to `note`.
pub fn admonition_style(name: &str) -> &'static str {
    match name {
        "tip" => "tip",
        "important" => "important",
        "warning" => "warning",
        "caution" => "caution",
        _ => "note",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dlist_defaults_to_labeled() {
        assert_eq!(dlist_tags(None), DLIST_LABELED);
        assert_eq!(dlist_tags(Some("bogus")), DLIST_LABELED);
        assert_eq!(dlist_tags(Some("horizontal")), DLIST_LABELED);
        assert_eq!(dlist_tags(Some("qanda")).list, Some("list"));
        assert_eq!(dlist_tags(Some("qanda")).term, "p");
    }

    #[test]
    fn test_olist_defaults_to_numbered() {
        assert_eq!(olist_style(None), "numbered");
        assert_eq!(olist_style(Some("arabic")), "numbered");
        assert_eq!(olist_style(Some("decimal")), "numbered");
        assert_eq!(olist_style(Some("upperroman")), "upper-roman");
    }

    #[test]
    fn test_quote_tags_default_is_empty_pair() {
        assert_eq!(quote_tags("superscript"), QuoteTags::new("", ""));
        assert_eq!(quote_tags("").open, "");
        assert_eq!(quote_tags("mark").open, r#"<em style="marked">"#);
    }

    #[test]
    fn test_admonition_default() {
        assert_eq!(admonition_style("warning"), "warning");
        assert_eq!(admonition_style("danger"), "note");
    }
}
