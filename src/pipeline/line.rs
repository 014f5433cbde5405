//! Line-level gemtext model produced by the classify stage.

use std::fmt;

/// Heading depth. Gemtext only has three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    Level1,
    Level2,
    Level3,
}

impl HeadingLevel {
    /// The run of `#` characters that introduces a heading of this level.
    pub fn marker(self) -> &'static str {
        match self {
            HeadingLevel::Level1 => "#",
            HeadingLevel::Level2 => "##",
            HeadingLevel::Level3 => "###",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// A link target with an optional human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub label: Option<String>,
}

impl Link {
    pub fn new(url: impl Into<String>, label: Option<String>) -> Self {
        Self {
            url: url.into(),
            label,
        }
    }

    /// Text shown for the link: the label when present, the URL otherwise.
    pub fn display_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.url)
    }
}

/// One classified gemtext line.
///
/// A `Preformatted` entry stands for a whole run of verbatim lines rather
/// than a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Blank,
    Paragraph(String),
    Link(Link),
    Heading(HeadingLevel, String),
    Preformatted(Vec<String>),
}
