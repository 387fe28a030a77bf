use anyhow::{anyhow, Result};
use arboard::Clipboard;
use tracing::info;

/// Copy text to the system clipboard, blocking until the write completes.
pub fn copy_to_clipboard_sync(text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    info!("Copying {} chars to clipboard", text.len());

    let mut clipboard =
        Clipboard::new().map_err(|e| anyhow!("Failed to initialize clipboard: {}", e))?;
    clipboard
        .set_text(text)
        .map_err(|e| anyhow!("Failed to copy to clipboard: {}", e))?;

    Ok(())
}
