use anyhow::Result;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::formatter::TranscriptFormatter;

pub mod openai_api;

pub use openai_api::OpenAIProvider;

pub trait TranscriptionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn is_available(&self) -> bool;

    fn transcribe<'a>(
        &'a self,
        audio_path: &'a Path,
        language: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

    fn formatter(&self) -> Result<Box<dyn TranscriptFormatter>>;
}

/// MIME type for a file extension the Whisper endpoint accepts.
pub fn mime_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "flac" => Some("audio/flac"),
        "m4a" | "mp4" => Some("audio/mp4"),
        "mp3" | "mpeg" | "mpga" => Some("audio/mpeg"),
        "oga" | "ogg" => Some("audio/ogg"),
        "wav" => Some("audio/wav"),
        "webm" => Some("audio/webm"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_for_known_extensions() {
        assert_eq!(mime_type_for_extension("wav"), Some("audio/wav"));
        assert_eq!(mime_type_for_extension("mp3"), Some("audio/mpeg"));
        assert_eq!(mime_type_for_extension("m4a"), Some("audio/mp4"));
    }

    #[test]
    fn test_mime_type_for_unknown_extension() {
        assert_eq!(mime_type_for_extension("xyz"), None);
        assert_eq!(mime_type_for_extension(""), None);
    }
}
