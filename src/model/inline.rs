//! Inline node types.

use super::Attributes;
use serde::{Deserialize, Serialize};

/// A run of inline content, as produced by the upstream substitution engine.
pub type Text = Vec<Inline>;

/// Inline nodes appearing inside paragraphs, titles, list items and cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// Already-substituted markup text, emitted verbatim.
    Text {
        /// The text
        text: String,
    },

    /// A quoted (formatted) span such as emphasis or strong.
    Quoted {
        /// Quote style key (`emphasis`, `strong`, `monospaced`, `double`,
        /// `single`, `mark`, `latexmath`, ...)
        kind: String,
        /// Inner content
        content: Text,
        /// Semantic role
        #[serde(default)]
        role: Option<String>,
        /// Anchor identifier
        #[serde(default)]
        id: Option<String>,
    },

    /// A keyboard shortcut (`kbd:[Ctrl+T]`).
    Kbd {
        /// Keys in input order
        keys: Vec<String>,
    },

    /// A menu selection (`menu:File[Save]`).
    Menu {
        /// Top-level menu
        menu: String,
        /// Intermediate submenus, in order
        #[serde(default)]
        submenus: Vec<String>,
        /// Final menu item
        #[serde(default)]
        item: Option<String>,
    },

    /// A UI button (`btn:[OK]`).
    Button {
        /// Button label
        text: String,
    },

    /// A footnote or footnote cross-reference.
    Footnote {
        /// Footnote flavor
        #[serde(default)]
        kind: FootnoteKind,
        /// Footnote text
        text: String,
    },

    /// A hard line break following some text.
    Break {
        /// Text preceding the break
        text: String,
    },

    /// An index term.
    IndexTerm {
        /// Term text
        text: String,
        /// Whether the term also appears in the flow text
        #[serde(default)]
        visible: bool,
    },

    /// An inline image.
    Image(InlineImage),

    /// An inline anchor or link (unsupported by the dialect).
    Anchor {
        /// Anchor target
        target: String,
        /// Link text
        #[serde(default)]
        text: Option<String>,
    },

    /// A callout marker (unsupported by the dialect).
    Callout {
        /// Callout number
        number: u32,
    },
}

impl Inline {
    /// Create a plain text node.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    /// Create a quoted span with plain text content.
    pub fn quoted(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Inline::Quoted {
            kind: kind.into(),
            content: vec![Inline::text(text)],
            role: None,
            id: None,
        }
    }

    /// Create a strong span.
    pub fn strong(text: impl Into<String>) -> Self {
        Self::quoted("strong", text)
    }

    /// Create an emphasis span.
    pub fn emphasis(text: impl Into<String>) -> Self {
        Self::quoted("emphasis", text)
    }

    /// Create a keyboard shortcut.
    pub fn kbd<S: Into<String>>(keys: impl IntoIterator<Item = S>) -> Self {
        Inline::Kbd {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a menu selection.
    pub fn menu<S: Into<String>>(
        menu: impl Into<String>,
        submenus: impl IntoIterator<Item = S>,
        item: Option<&str>,
    ) -> Self {
        Inline::Menu {
            menu: menu.into(),
            submenus: submenus.into_iter().map(Into::into).collect(),
            item: item.map(str::to_string),
        }
    }

    /// Set the role of a quoted span. Other nodes are returned unchanged.
    pub fn with_role(mut self, new_role: impl Into<String>) -> Self {
        if let Inline::Quoted { ref mut role, .. } = self {
            *role = Some(new_role.into());
        }
        self
    }

    /// Set the anchor id of a quoted span. Other nodes are returned unchanged.
    pub fn with_id(mut self, new_id: impl Into<String>) -> Self {
        if let Inline::Quoted { ref mut id, .. } = self {
            *id = Some(new_id.into());
        }
        self
    }
}

/// Footnote flavor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FootnoteKind {
    /// A regular footnote
    #[default]
    Note,
    /// A reference to another footnote or anchor
    Xref {
        /// Referenced target
        target: String,
    },
}

/// An inline image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineImage {
    /// Image target (path or URI)
    pub target: String,
    /// Alternative text
    #[serde(default)]
    pub alt: String,
    /// Anchor identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Other attributes (`width`, `height`)
    #[serde(default)]
    pub attributes: Attributes,
}

impl InlineImage {
    /// Create an inline image.
    pub fn new(target: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            alt: alt.into(),
            id: None,
            title: None,
            attributes: Attributes::new(),
        }
    }
}

/// Build a text run holding a single plain text node.
pub fn text(value: impl Into<String>) -> Text {
    vec![Inline::text(value)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_role_only_affects_quoted() {
        let quoted = Inline::strong("Danger").with_role("warning");
        assert!(matches!(quoted, Inline::Quoted { role: Some(ref r), .. } if r == "warning"));

        let button = Inline::Button { text: "OK".into() }.with_role("warning");
        assert_eq!(button, Inline::Button { text: "OK".into() });
    }

    #[test]
    fn test_deserialize_tagged() {
        let inline: Inline =
            serde_json::from_str(r#"{"type": "kbd", "keys": ["Ctrl", "T"]}"#).unwrap();
        assert_eq!(inline, Inline::kbd(["Ctrl", "T"]));

        let footnote: Inline = serde_json::from_str(
            r#"{"type": "footnote", "kind": {"kind": "xref", "target": "note1"}, "text": "see"}"#,
        )
        .unwrap();
        assert!(matches!(
            footnote,
            Inline::Footnote { kind: FootnoteKind::Xref { .. }, .. }
        ));
    }
}
