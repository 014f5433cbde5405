//! Markdown rendering stage.
//!
//! Every block ends with a blank line. Lines inside a block (code lines,
//! list items) are separated by single newlines.

use std::fmt;

use log::debug;

use super::segment::FENCE;
use crate::pipeline::{Block, PipelineError, Stage};

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Paragraph(text) => write!(f, "{text}\n\n"),
            Block::Heading(level, text) => write!(f, "{level} {text}\n\n"),
            Block::Preformatted(lines) => {
                write!(f, "{FENCE}\n{}\n{FENCE}\n\n", lines.join("\n"))
            }
            Block::Links(links) => {
                for link in links {
                    writeln!(f, "* [{}]({})", link.display_text(), link.url)?;
                }
                writeln!(f)
            }
        }
    }
}

/// Stage that renders blocks to a single Markdown document.
#[derive(Default)]
pub struct RenderStage;

impl Stage for RenderStage {
    type Input = Vec<Block>;
    type Output = String;

    fn name(&self) -> &'static str {
        "render"
    }

    fn process(&self, blocks: Vec<Block>) -> Result<String, PipelineError> {
        let markdown: String = blocks.iter().map(Block::to_string).collect();
        debug!("rendered {} byte(s) of markdown", markdown.len());
        Ok(markdown)
    }
}
