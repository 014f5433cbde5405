//! Verbatim segmentation stage.
//!
//! Tags every input line with whether it sits inside a fenced
//! preformatted region. Fence lines toggle the state and are dropped.

use log::{debug, trace, warn};

use crate::pipeline::{PipelineError, Stage};

/// Token that opens and closes a preformatted region.
pub const FENCE: &str = "```";

/// A raw input line annotated with its verbatim state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedLine {
    /// 1-based position in the original input, fence lines included.
    pub number: usize,
    pub verbatim: bool,
    pub text: String,
}

/// Whether a line toggles preformatted mode.
///
/// Only the first three characters matter, so text after the token
/// (such as a language hint) is allowed and discarded.
pub fn is_fence(line: &str) -> bool {
    line.starts_with(FENCE)
}

/// Stage that splits the input into verbatim and non-verbatim lines.
///
/// Never fails. Input that ends inside a fence is left for the classify
/// stage, which flushes the open run as a final preformatted block.
#[derive(Default)]
pub struct SegmentStage;

impl Stage for SegmentStage {
    type Input = Vec<String>;
    type Output = Vec<SegmentedLine>;

    fn name(&self) -> &'static str {
        "segment"
    }

    fn process(&self, lines: Vec<String>) -> Result<Vec<SegmentedLine>, PipelineError> {
        let mut verbatim = false;
        let mut opened_at = None;
        let mut segmented = Vec::with_capacity(lines.len());

        for (index, text) in lines.into_iter().enumerate() {
            let number = index + 1;
            if is_fence(&text) {
                verbatim = !verbatim;
                opened_at = verbatim.then_some(number);
                trace!("fence at line {number}, verbatim = {verbatim}");
                continue;
            }
            segmented.push(SegmentedLine {
                number,
                verbatim,
                text,
            });
        }

        if let Some(number) = opened_at {
            warn!("preformatted region opened at line {number} is never closed");
        }

        debug!("segmented {} non-fence line(s)", segmented.len());
        Ok(segmented)
    }
}
