//! Block consolidation stage.

use std::mem;

use log::debug;

use crate::pipeline::{Block, Line, Link, PipelineError, Stage};

/// Stage that turns classified lines into renderable blocks.
///
/// Blank lines are dropped and each maximal run of consecutive link lines
/// becomes a single [`Block::Links`]. Any non-link line ends a run.
#[derive(Default)]
pub struct ConsolidateStage;

impl Stage for ConsolidateStage {
    type Input = Vec<Line>;
    type Output = Vec<Block>;

    fn name(&self) -> &'static str {
        "consolidate"
    }

    fn process(&self, lines: Vec<Line>) -> Result<Vec<Block>, PipelineError> {
        let mut blocks = Vec::new();
        let mut links: Vec<Link> = Vec::new();

        for line in lines {
            let block = match line {
                Line::Link(link) => {
                    links.push(link);
                    continue;
                }
                Line::Blank => None,
                Line::Paragraph(text) => Some(Block::Paragraph(text)),
                Line::Heading(level, text) => Some(Block::Heading(level, text)),
                Line::Preformatted(lines) => Some(Block::Preformatted(lines)),
            };

            flush_links(&mut links, &mut blocks);
            blocks.extend(block);
        }

        flush_links(&mut links, &mut blocks);

        debug!("consolidated into {} block(s)", blocks.len());
        Ok(blocks)
    }
}

fn flush_links(links: &mut Vec<Link>, blocks: &mut Vec<Block>) {
    if !links.is_empty() {
        blocks.push(Block::Links(mem::take(links)));
    }
}
