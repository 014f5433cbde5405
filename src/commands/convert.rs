//! The conversion command: read gemtext, run the pipeline, write Markdown.

use std::io::{self, Read, Write};

use anyhow::Context;

use crate::pipeline::Pipeline;

pub fn run() -> Result<(), anyhow::Error> {
    let lines = read_all_lines(io::stdin().lock())?;
    let markdown = Pipeline::new().run(lines)?;
    write(io::stdout().lock(), &markdown)
}

/// Read the whole input, split into lines without their terminators.
fn read_all_lines(mut input: impl Read) -> Result<Vec<String>, anyhow::Error> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("failed to read input from standard input")?;

    Ok(text.lines().map(str::to_string).collect())
}

fn write(mut output: impl Write, markdown: &str) -> Result<(), anyhow::Error> {
    output
        .write_all(markdown.as_bytes())
        .and_then(|()| output.flush())
        .context("failed to write output to standard output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_all_lines_strips_terminators() {
        let lines = read_all_lines("# Hi\r\n\r\ntext\n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["# Hi", "", "text"]);
    }

    #[test]
    fn test_read_invalid_utf8_has_context() {
        let err = read_all_lines(&[0xff, 0xfe, b'\n'][..]).unwrap_err();
        assert!(err.to_string().contains("failed to read input from"));
    }

    #[test]
    fn test_write_passes_markdown_through() {
        let mut out = Vec::new();
        write(&mut out, "# Hi\n\n").unwrap();
        assert_eq!(out, b"# Hi\n\n");
    }
}
