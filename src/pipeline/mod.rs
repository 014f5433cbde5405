//! Gemtext to Markdown conversion pipeline.
//!
//! The pipeline transforms the input through a series of stages, each one
//! consuming the full output of the previous:
//! 1. Segment (tag lines inside fenced preformatted regions)
//! 2. Classify (parse lines, collapse verbatim runs)
//! 3. Consolidate (drop blanks, merge consecutive links into lists)
//! 4. Render (blocks to Markdown text)
//!
//! Only the classify stage can fail. The first malformed line aborts the
//! whole conversion and no output is produced.

mod block;
mod error;
mod line;
mod stages;

pub use block::Block;
pub use error::{Malformed, PipelineError};
pub use line::{HeadingLevel, Line, Link};

use log::debug;
use stages::{ClassifyStage, ConsolidateStage, RenderStage, SegmentStage};

/// A stage in the conversion pipeline.
///
/// Each stage takes ownership of the previous stage's output and produces
/// a new, independently owned value.
pub trait Stage {
    type Input;
    type Output;

    /// Unique name for this stage (used in logs).
    fn name(&self) -> &'static str;

    /// Process the whole input of this stage.
    fn process(&self, input: Self::Input) -> Result<Self::Output, PipelineError>;
}

/// The gemtext conversion pipeline.
///
/// Stages: segment → classify → consolidate → render
#[derive(Default)]
pub struct Pipeline {
    segment: SegmentStage,
    classify: ClassifyStage,
    consolidate: ConsolidateStage,
    render: RenderStage,
}

impl Pipeline {
    /// Create the pipeline with its standard stages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the pipeline on the raw input lines, returning the Markdown document.
    pub fn run(&self, lines: Vec<String>) -> Result<String, PipelineError> {
        debug!("converting {} input line(s)", lines.len());
        let segmented = run_stage(&self.segment, lines)?;
        let classified = run_stage(&self.classify, segmented)?;
        let blocks = run_stage(&self.consolidate, classified)?;
        run_stage(&self.render, blocks)
    }

    /// Get the names of all stages in order.
    #[cfg(test)]
    pub fn stage_names(&self) -> [&'static str; 4] {
        [
            self.segment.name(),
            self.classify.name(),
            self.consolidate.name(),
            self.render.name(),
        ]
    }
}

fn run_stage<S: Stage>(stage: &S, input: S::Input) -> Result<S::Output, PipelineError> {
    debug!("running stage '{}'", stage.name());
    stage.process(input)
}

/// Convert a complete gemtext document held in memory.
///
/// Lines may end in `\n` or `\r\n`.
#[cfg(test)]
pub fn convert(gemtext: &str) -> Result<String, PipelineError> {
    Pipeline::new().run(gemtext.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pulldown_cmark::{Event, HeadingLevel as MdHeadingLevel, Parser, Tag, TagEnd};

    use super::*;

    #[test]
    fn test_stage_order() {
        assert_eq!(
            Pipeline::new().stage_names(),
            ["segment", "classify", "consolidate", "render"]
        );
    }

    #[test]
    fn test_paragraphs_only() {
        assert_eq!(
            convert("first\nsecond\n\nthird\n").unwrap(),
            "first\n\nsecond\n\nthird\n\n"
        );
    }

    #[test]
    fn test_link_run_becomes_one_list() {
        assert_eq!(
            convert("=> a.com\n=> b.com label\n=> c.com\n").unwrap(),
            "* [a.com](a.com)\n* [label](b.com)\n* [c.com](c.com)\n\n"
        );
    }

    #[test]
    fn test_blank_line_splits_link_lists() {
        assert_eq!(
            convert("=> a.com\n\n=> b.com\n").unwrap(),
            "* [a.com](a.com)\n\n* [b.com](b.com)\n\n"
        );
    }

    #[test]
    fn test_fenced_block() {
        assert_eq!(convert("```\nx\n```\n").unwrap(), "```\nx\n```\n\n");
    }

    #[test]
    fn test_unterminated_fence() {
        assert_eq!(
            convert("intro\n```\n# a\n=> b\n\nc").unwrap(),
            "intro\n\n```\n# a\n=> b\n\nc\n```\n\n"
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(convert("## Title").unwrap(), "## Title\n\n");
        assert_eq!(
            convert("# ").unwrap_err(),
            PipelineError::malformed(1, Malformed::Heading, "# ")
        );
    }

    #[test]
    fn test_malformed_links_abort() {
        assert_eq!(
            convert("ok\n=>").unwrap_err(),
            PipelineError::malformed(2, Malformed::Link, "=>")
        );
        assert_eq!(
            convert("=> ").unwrap_err(),
            PipelineError::malformed(1, Malformed::Link, "=> ")
        );
    }

    #[test]
    fn test_first_error_wins() {
        let err = convert("```\n#bad\n```\n#worse\n=>").unwrap_err();
        assert_eq!(err, PipelineError::malformed(4, Malformed::Heading, "#worse"));
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(
            convert("# Hi\r\n=> a.com\r\n").unwrap(),
            "# Hi\n\n* [a.com](a.com)\n\n"
        );
    }

    #[test]
    fn test_conversion_is_repeatable() {
        let input = "# Doc\n\ntext\n=> a.com A\n```\ncode\n```\n";
        assert_eq!(convert(input).unwrap(), convert(input).unwrap());
    }

    #[test]
    fn test_output_is_commonmark() {
        let input = "\
# Capsule
Welcome.
=> gemini://a.example First
=> gemini://b.example
### Code
```
let x = 1;
```
";
        let markdown = convert(input).unwrap();
        let events: Vec<Event> = Parser::new(&markdown).collect();

        let headings: Vec<MdHeadingLevel> = events
            .iter()
            .filter_map(|e| match e {
                Event::Start(Tag::Heading { level, .. }) => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(headings, vec![MdHeadingLevel::H1, MdHeadingLevel::H3]);

        let items = events
            .iter()
            .filter(|e| matches!(e, Event::Start(Tag::Item)))
            .count();
        assert_eq!(items, 2);

        let links: Vec<String> = events
            .iter()
            .filter_map(|e| match e {
                Event::Start(Tag::Link { dest_url, .. }) => Some(dest_url.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(links, vec!["gemini://a.example", "gemini://b.example"]);

        let lists = events
            .iter()
            .filter(|e| matches!(e, Event::End(TagEnd::List(_))))
            .count();
        assert_eq!(lists, 1);

        let code: String = events
            .iter()
            .skip_while(|e| !matches!(e, Event::Start(Tag::CodeBlock(_))))
            .take_while(|e| !matches!(e, Event::End(TagEnd::CodeBlock)))
            .filter_map(|e| match e {
                Event::Text(text) => Some(text.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(code, "let x = 1;\n");
    }
}
