//! System clipboard

use colored::Colorize;
use lyricsmith_core::CopyTarget;

/// Put `payload` on the system clipboard, or print it when no clipboard is
/// available (headless sessions, SSH)
pub fn deliver(target: CopyTarget, payload: &str) {
    match set_text(payload) {
        Ok(()) => println!("{} Copied {}", "✓".green(), target.to_string().cyan()),
        Err(error) => {
            tracing::debug!(%error, "clipboard unavailable");
            println!(
                "{}",
                format!("Clipboard unavailable, printing {} instead:", target).dimmed()
            );
            println!("{}", payload);
        }
    }
}

fn set_text(payload: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(payload.to_owned())
}
