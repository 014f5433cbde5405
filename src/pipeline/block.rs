//! Renderable blocks produced by the consolidate stage.

use super::line::{HeadingLevel, Link};

/// A unit of Markdown output.
///
/// `Links` is never empty: the consolidate stage only emits it for a
/// non-empty run of link lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    Heading(HeadingLevel, String),
    Preformatted(Vec<String>),
    Links(Vec<Link>),
}
