//! CLI handler for transcribing audio files.
//!
//! Resolves the input file, submits it to the configured provider, and
//! prints the formatted transcript, optionally saving it next to the input.

use anyhow::{bail, Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::cli::Cli;
use crate::config::{Config, WhisperConfig};
use crate::text_io::copy_to_clipboard_sync;
use crate::transcription::{mime_type_for_extension, ProviderConfig, Transcriber};

const OUTPUT_SUFFIX: &str = "_transcription.txt";
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Handle the transcribe CLI flow.
pub async fn handle_transcribe_command(args: Cli) -> Result<()> {
    let config = Config::load()?;

    // 1. Resolve and validate the input file
    let file = resolve_input_file(args.file)?;
    validate_file(&file)?;

    // 2. Resolve the API credential
    let api_key = resolve_api_key(&config.whisper)?;

    // 3. Build the transcriber from config plus CLI overrides
    let provider_name = config
        .whisper
        .provider
        .clone()
        .unwrap_or_else(|| "openai-api".to_string());

    let mut provider_config = ProviderConfig::from(&config.whisper);
    provider_config.api_key = Some(api_key);
    if args.model.is_some() {
        provider_config.model = args.model;
    }
    if args.language.is_some() {
        provider_config.language = args.language;
    }

    let transcriber = Transcriber::with_provider(&provider_name, provider_config)?;

    // 4. Transcribe with a progress spinner
    let show_progress = !args.no_progress;
    let pb = if show_progress {
        let pb = create_progress_bar();
        pb.set_message(format!("Transcribing {}...", file.display()));
        Some(pb)
    } else {
        None
    };

    let result = transcriber.transcribe(&file).await;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let raw = result.context("Transcription failed")?;

    // 5. Format and print
    let formatter = transcriber.formatter()?;
    debug!("Running {}", formatter.name());
    let formatted = formatter.format(&raw);

    println!();
    println!("Transcription");
    println!("=============");
    println!("{}", formatted);

    // 6. Persist and copy on request
    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &formatted).context("Failed to write output file")?;
        eprintln!("Transcription saved to: {}", output_path.display());
    } else if io::stdin().is_terminal() {
        let output_path = derive_output_path(&file);
        let save = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Save transcription to {}?", output_path.display()))
            .default(false)
            .interact()?;

        if save {
            std::fs::write(&output_path, &formatted).context("Failed to write output file")?;
            eprintln!("Transcription saved to: {}", output_path.display());
        }
    }

    if args.copy {
        copy_to_clipboard_sync(&formatted)?;
        eprintln!("Copied to clipboard");
    }

    Ok(())
}

/// Use the positional argument, or ask for a path when running in a terminal.
fn resolve_input_file(file: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(file) = file {
        return Ok(file);
    }

    if !io::stdin().is_terminal() {
        bail!("No audio file provided. Pass a file path as the first argument.");
    }

    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Path to your audio file")
        .interact_text()?;

    let path = path.trim();
    if path.is_empty() {
        bail!("No file path provided");
    }

    Ok(PathBuf::from(path))
}

/// Validate that the file exists and has a supported format.
fn validate_file(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if mime_type_for_extension(&ext).is_none() {
        bail!(
            "Unsupported format: .{}\nSupported formats: flac, m4a, mp3, mp4, mpeg, mpga, oga, ogg, wav, webm",
            ext,
        );
    }

    Ok(())
}

/// API key from the environment, falling back to the config file.
fn resolve_api_key(whisper: &WhisperConfig) -> Result<String> {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        let key = key.trim().to_string();
        if !key.is_empty() {
            return Ok(key);
        }
    }

    if let Some(key) = whisper.api_key.as_deref() {
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    bail!(
        "{} environment variable not set. Export it or add api_key to {}",
        API_KEY_ENV,
        crate::global::config_file()?.display()
    );
}

/// Sibling output path: `<stem>_transcription.txt` next to the input.
fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("audio");
    input.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// Create a styled progress spinner.
fn create_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
