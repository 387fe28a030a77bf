use clap::Parser;
use std::path::PathBuf;

pub mod transcribe;

pub use transcribe::handle_transcribe_command;

#[derive(Parser, Debug)]
#[command(name = "voxtext")]
#[command(version)]
#[command(about = "Transcribe audio files with the OpenAI Whisper API", long_about = None)]
pub struct Cli {
    /// Path to the audio file to transcribe (prompted for when omitted)
    pub file: Option<PathBuf>,

    /// Write the formatted transcript to this file instead of prompting to save
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Language code hint passed to the transcription API (e.g. "en")
    #[arg(short, long)]
    pub language: Option<String>,

    /// Whisper model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Copy the formatted transcript to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
