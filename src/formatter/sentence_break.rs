use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::formatter::TranscriptFormatter;

/// Formatter that breaks a transcript into one sentence per line.
///
/// Whisper often returns a single run-on paragraph. This inserts sentence
/// punctuation at capitalization boundaries and splits on it. Mid-sentence
/// capitals (proper nouns, acronyms) trip the boundary match too; it is a
/// heuristic, not a sentence parser.
pub struct SentenceBreakFormatter {
    whitespace_regex: Regex,
    boundary_regex: Regex,
}

impl SentenceBreakFormatter {
    pub fn new() -> Result<Self> {
        let whitespace_regex = Regex::new(r"\s+")?;
        // An alphanumeric, then whitespace, then a capital marks a likely
        // unpunctuated sentence boundary
        let boundary_regex = Regex::new(r"([A-Za-z0-9])\s+([A-Z])")?;

        Ok(Self {
            whitespace_regex,
            boundary_regex,
        })
    }
}

impl TranscriptFormatter for SentenceBreakFormatter {
    fn format(&self, raw_transcript: &str) -> String {
        let collapsed = self
            .whitespace_regex
            .replace_all(raw_transcript.trim(), " ")
            .into_owned();

        let mut text = self
            .boundary_regex
            .replace_all(&collapsed, "${1}. ${2}")
            .into_owned();

        if !text.is_empty() && !text.ends_with(['.', '!', '?']) {
            text.push('.');
        }

        // Split after each terminal mark, keeping the mark with its sentence
        let mut lines: Vec<&str> = Vec::new();
        let mut start = 0;
        for (idx, c) in text.char_indices() {
            if matches!(c, '.' | '!' | '?') {
                let end = idx + c.len_utf8();
                let segment = text[start..end].trim();
                if !segment.is_empty() {
                    lines.push(segment);
                }
                start = end;
            }
        }
        let trailing = text[start..].trim();
        if !trailing.is_empty() {
            lines.push(trailing);
        }

        let result = lines.join("\n");
        debug!(
            "Formatted {} chars into {} lines",
            raw_transcript.len(),
            lines.len()
        );

        result
    }

    fn name(&self) -> &'static str {
        "SentenceBreakFormatter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> SentenceBreakFormatter {
        SentenceBreakFormatter::new().unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(formatter().format(""), "");
        assert_eq!(formatter().format("   \n\t  "), "");
    }

    #[test]
    fn test_breaks_on_capital_boundaries() {
        let output = formatter().format("hello world THIS is a Test");
        assert_eq!(output, "hello world.\nTHIS is a.\nTest.");
    }

    #[test]
    fn test_existing_punctuation_not_doubled() {
        assert_eq!(formatter().format("Hello world."), "Hello world.");
    }

    #[test]
    fn test_collapses_irregular_whitespace() {
        assert_eq!(formatter().format("Hello   \n  world."), "Hello world.");
    }

    #[test]
    fn test_appends_period_when_no_boundary_found() {
        assert_eq!(
            formatter().format("the quick brown fox"),
            "the quick brown fox."
        );
    }

    #[test]
    fn test_exclamation_and_question_marks_kept() {
        assert_eq!(formatter().format("Wait! Really?"), "Wait!\nReally?");
    }

    #[test]
    fn test_every_line_ends_in_terminal_punctuation() {
        let output = formatter().format("one two Three four! five Six seven?");
        assert!(!output.is_empty());
        for line in output.lines() {
            assert!(!line.trim().is_empty(), "blank line in output");
            assert!(
                line.ends_with(['.', '!', '?']),
                "line {:?} lacks terminal punctuation",
                line
            );
        }
    }

    // Re-running the formatter on its own output is not a fixed point.
    // Boundary matches are non-overlapping, so a capital consumed as the
    // right-hand side of one match can itself open a boundary that only the
    // next pass picks up. Known limitation of the heuristic; do not assert
    // round-trip stability.
    #[test]
    fn test_second_pass_may_resplit() {
        let formatter = formatter();

        let first = formatter.format("go B C now");
        assert_eq!(first, "go.\nB C now.");

        let second = formatter.format(&first);
        assert_eq!(second, "go.\nB.\nC now.");
    }
}
