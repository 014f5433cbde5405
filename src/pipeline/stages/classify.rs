//! Line classification stage.
//!
//! Turns segmented lines into [`Line`] values. Consecutive verbatim lines
//! collapse into one `Preformatted` entry; every other line is parsed as a
//! link, heading, blank or paragraph.

use std::mem;

use log::debug;

use super::segment::SegmentedLine;
use crate::pipeline::{HeadingLevel, Line, Link, Malformed, PipelineError, Stage};

const LINK_ARROW: &str = "=>";

/// Classify a single non-verbatim line.
///
/// Precedence is link, heading, blank, paragraph. Paragraph text is kept
/// exactly as written, surrounding whitespace included.
pub fn classify_line(line: &str) -> Result<Line, Malformed> {
    if let Some(rest) = line.strip_prefix(LINK_ARROW) {
        return parse_link(rest);
    }
    if line.starts_with('#') {
        return parse_heading(line);
    }
    if line.is_empty() {
        return Ok(Line::Blank);
    }
    Ok(Line::Paragraph(line.to_string()))
}

/// Parse what follows the `=>` arrow.
///
/// The URL runs up to the first space; anything after that space is the
/// label, taken verbatim.
fn parse_link(rest: &str) -> Result<Line, Malformed> {
    let rest = rest.strip_prefix(' ').ok_or(Malformed::Link)?;
    let (url, label) = match rest.split_once(' ') {
        Some((url, label)) => (url, Some(label.to_string())),
        None => (rest, None),
    };
    if url.is_empty() {
        return Err(Malformed::Link);
    }
    Ok(Line::Link(Link::new(url, label)))
}

fn parse_heading(line: &str) -> Result<Line, Malformed> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    let level = match hashes {
        1 => HeadingLevel::Level1,
        2 => HeadingLevel::Level2,
        3 => HeadingLevel::Level3,
        _ => return Err(Malformed::Heading),
    };
    match line[hashes..].strip_prefix(' ') {
        Some(text) if !text.is_empty() => Ok(Line::Heading(level, text.to_string())),
        _ => Err(Malformed::Heading),
    }
}

/// Stage that classifies segmented lines.
///
/// Fails on the first malformed line; nothing after it is looked at.
#[derive(Default)]
pub struct ClassifyStage;

impl Stage for ClassifyStage {
    type Input = Vec<SegmentedLine>;
    type Output = Vec<Line>;

    fn name(&self) -> &'static str {
        "classify"
    }

    fn process(&self, lines: Vec<SegmentedLine>) -> Result<Vec<Line>, PipelineError> {
        let mut classified = Vec::with_capacity(lines.len());
        let mut preformatted: Vec<String> = Vec::new();

        for line in lines {
            if line.verbatim {
                preformatted.push(line.text);
                continue;
            }

            if !preformatted.is_empty() {
                classified.push(Line::Preformatted(mem::take(&mut preformatted)));
            }

            let kind = classify_line(&line.text)
                .map_err(|kind| PipelineError::malformed(line.number, kind, line.text.as_str()))?;
            classified.push(kind);
        }

        // An unterminated fence runs to the end of the input.
        if !preformatted.is_empty() {
            classified.push(Line::Preformatted(preformatted));
        }

        debug!("classified {} line(s)", classified.len());
        Ok(classified)
    }
}
