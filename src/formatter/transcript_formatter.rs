/// Trait for reshaping raw transcript text into display form
pub trait TranscriptFormatter: Send + Sync {
    /// Reformat the raw transcript text
    fn format(&self, raw_transcript: &str) -> String;

    /// Get the name of this formatter for logging
    fn name(&self) -> &'static str;
}
