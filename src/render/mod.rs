//! Rendering module for converting documents to Mallard.

pub mod attrs;
mod document;
pub mod inline;
mod mallard;
mod options;
mod result;
pub mod styles;

pub use inline::{render_inline, render_text};
pub use mallard::{render, render_block, to_mallard, MallardRenderer};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats, RenderWarning};
