//! Rendering options and configuration.

/// Options for rendering a document.
///
/// Document-level settings (toc, lang, revision, ...) are read from the
/// document attributes; these options only control the renderer itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit the full page envelope; when false only the body is rendered
    pub standalone: bool,

    /// Prefix checklist items with a checked/unchecked glyph
    pub checklist_markers: bool,

    /// Collect node statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render only the body content, without the page envelope.
    pub fn embedded(mut self) -> Self {
        self.standalone = false;
        self
    }

    /// Enable or disable the page envelope.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Enable or disable checklist glyphs.
    pub fn with_checklist_markers(mut self, enabled: bool) -> Self {
        self.checklist_markers = enabled;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            standalone: true,
            checklist_markers: true,
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert!(options.standalone);
        assert!(options.checklist_markers);
        assert!(!options.collect_stats);
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .embedded()
            .with_checklist_markers(false)
            .with_stats(true);

        assert!(!options.standalone);
        assert!(!options.checklist_markers);
        assert!(options.collect_stats);
    }
}
