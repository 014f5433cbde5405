//! Pipeline error types.

/// The ways a non-verbatim line can fail to classify.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// A `=>` line without a space and a non-empty URL after the arrow.
    #[error("malformed link")]
    Link,

    /// A `#` line that is not one to three hashes, a space and some text.
    #[error("malformed heading")]
    Heading,
}

/// Errors that can occur during pipeline processing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("line {line_number}: {kind}: {line:?}")]
    Malformed {
        line_number: usize,
        kind: Malformed,
        line: String,
    },
}

impl PipelineError {
    /// Create a classification error for the given input line.
    pub fn malformed(line_number: usize, kind: Malformed, line: impl Into<String>) -> Self {
        Self::Malformed {
            line_number,
            kind,
            line: line.into(),
        }
    }
}
