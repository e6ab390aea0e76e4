//! Document model consumed by the renderer.
//!
//! This module defines the tree handed over by the upstream parser: a
//! [`Document`] holding attributes and top-level [`Block`]s, with inline
//! content expressed as [`Inline`] runs. The renderer only reads it.

mod attributes;
mod block;
mod document;
pub mod inline;
mod list;
mod table;

pub use attributes::Attributes;
pub use block::{Block, BlockKind, Content};
pub use document::{DocInfo, Document};
pub use inline::{FootnoteKind, Inline, InlineImage, Text};
pub use list::{DescriptionEntry, ListItem};
pub use table::{CellStyle, Table, TableCell, TableRow, TableSection};
