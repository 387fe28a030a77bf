mod sentence_break;
mod transcript_formatter;

pub use sentence_break::SentenceBreakFormatter;
pub use transcript_formatter::TranscriptFormatter;
