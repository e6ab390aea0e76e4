//! Mallard converter implementation.

use crate::model::Document;
use crate::render::{self, RenderOptions, RenderResult};

use super::Converter;

/// Mallard converter.
///
/// Produces GNOME help `.page` files.
#[derive(Debug, Clone, Default)]
pub struct MallardConverter {
    _private: (),
}

impl MallardConverter {
    /// Create a new Mallard converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Converter for MallardConverter {
    fn name(&self) -> &str {
        "mallard"
    }

    fn outfilesuffix(&self) -> &str {
        ".page"
    }

    fn mime_type(&self) -> &str {
        "application/mallard+xml"
    }

    fn convert(&self, doc: &Document, options: &RenderOptions) -> RenderResult {
        log::debug!("rendering document with {} top-level blocks", doc.blocks.len());
        render::render(doc, options)
    }
}
